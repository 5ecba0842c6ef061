//! The HTTP collaborator behind the submit action.
//!
//! [`SubmitBackend`] is the seam the controller is tested through: the
//! production [`HttpBackend`] posts JSON over the wire, while tests inject
//! a deterministic stand-in.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::SubmitConfig;
use crate::error::SubmitError;
use crate::payload::ContactPayload;

/// Delivers a validated payload to the backend.
///
/// Implementations must be `Send + Sync`; the controller holds the backend
/// behind a `Box<dyn SubmitBackend>` so a mock can be injected in tests.
#[async_trait]
pub trait SubmitBackend: Send + Sync {
    /// Sends the payload. `Ok(())` means the backend accepted it.
    async fn send(&self, payload: &ContactPayload) -> Result<(), SubmitError>;
}

/// Production backend: `POST`s the payload as JSON to the configured
/// endpoint. Any 2xx response counts as success.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    /// Builds a backend from the submit configuration.
    pub fn new(config: &SubmitConfig) -> Result<Self, SubmitError> {
        if config.endpoint.is_empty() {
            return Err(SubmitError::Configuration(
                "endpoint must not be empty".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The endpoint this backend posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitBackend for HttpBackend {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        let response = self.client.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_backend_from_config() {
        let config = SubmitConfig::default();
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.endpoint(), config.endpoint);
    }

    #[test]
    fn test_http_backend_rejects_empty_endpoint() {
        let config = SubmitConfig {
            endpoint: String::new(),
            ..SubmitConfig::default()
        };
        let err = HttpBackend::new(&config).unwrap_err();
        assert!(matches!(err, SubmitError::Configuration(_)));
    }
}
