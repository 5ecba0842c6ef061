//! # contact-form-client
//!
//! Submission side of the contact form: the controller state machine that
//! turns a validated form into an outbound `POST`, the HTTP backend behind
//! a mockable trait, configuration loading, and logging setup.

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod payload;

pub use backend::{HttpBackend, SubmitBackend};
pub use config::SubmitConfig;
pub use controller::SubmissionController;
pub use error::SubmitError;
pub use payload::ContactPayload;
