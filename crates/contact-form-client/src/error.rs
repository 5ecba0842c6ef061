//! Submission-side error types.
//!
//! Every variant is recoverable: the form keeps its entered values and the
//! user may resubmit. There is no fatal class.

use thiserror::Error;

/// Errors raised while configuring or performing a submission.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The request could not be performed (connection, DNS, timeout).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Backend returned status {0}")]
    Status(u16),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
