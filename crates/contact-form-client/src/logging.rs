//! Logging setup for the submission side.
//!
//! Configures a [`tracing`]-based subscriber from [`SubmitConfig`] and
//! provides a per-submission span helper.

use crate::config::SubmitConfig;

/// Sets up the global tracing subscriber based on the given configuration.
///
/// The filter is read from `config.log_level`. In debug mode a pretty,
/// human-readable format is used; otherwise a structured JSON format.
/// Installing twice is a no-op.
pub fn setup_logging(config: &SubmitConfig) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one submission attempt.
///
/// Enter this span around a submit so that all events emitted while
/// validating and sending carry the endpoint.
///
/// # Examples
///
/// ```
/// use contact_form_client::logging::submit_span;
///
/// let span = submit_span("https://api.example.com/contact");
/// let _guard = span.enter();
/// tracing::info!("submitting");
/// ```
pub fn submit_span(endpoint: &str) -> tracing::Span {
    tracing::info_span!("submit", endpoint)
}
