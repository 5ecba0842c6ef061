//! Submission configuration.
//!
//! The endpoint and schema of the HTTP collaborator are configuration,
//! external to the core. Loading order:
//!
//! 1. Defaults.
//! 2. A TOML file or string (overriding defaults).
//! 3. `CONTACT_FORM_*` environment variables (highest priority).
//!
//! | Env var | Setting |
//! |---|---|
//! | `CONTACT_FORM_ENDPOINT` | `endpoint` |
//! | `CONTACT_FORM_TIMEOUT_SECS` | `timeout_secs` |
//! | `CONTACT_FORM_LOG_LEVEL` | `log_level` |
//! | `CONTACT_FORM_DEBUG` | `debug` |

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

/// Settings for the submission side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// URL the contact payload is `POST`ed to.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Log filter directive (e.g. "info", "contact_form_client=debug").
    pub log_level: String,
    /// Pretty, human-readable logs when `true`; JSON otherwise.
    pub debug: bool,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/api/contact".to_string(),
            timeout_secs: 30,
            log_level: "info".to_string(),
            debug: false,
        }
    }
}

/// Loads configuration from a TOML string.
///
/// Fields absent from the TOML keep their default values.
pub fn from_toml_str(toml_str: &str) -> Result<SubmitConfig, SubmitError> {
    toml::from_str(toml_str)
        .map_err(|e| SubmitError::Configuration(format!("Failed to parse TOML: {e}")))
}

/// Loads configuration from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<SubmitConfig, SubmitError> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        SubmitError::Configuration(format!(
            "Failed to read TOML file '{}': {e}",
            path.as_ref().display()
        ))
    })?;
    from_toml_str(&content)
}

/// Loads configuration from a TOML file and applies environment overrides.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<SubmitConfig, SubmitError> {
    let mut config = from_toml_file(path)?;
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Applies `CONTACT_FORM_*` environment variable overrides in place.
///
/// Unparseable numeric/boolean values are ignored and the current value is
/// kept.
pub fn apply_env_overrides(config: &mut SubmitConfig) {
    if let Ok(endpoint) = std::env::var("CONTACT_FORM_ENDPOINT") {
        config.endpoint = endpoint;
    }
    if let Ok(timeout) = std::env::var("CONTACT_FORM_TIMEOUT_SECS") {
        if let Ok(secs) = timeout.parse() {
            config.timeout_secs = secs;
        }
    }
    if let Ok(level) = std::env::var("CONTACT_FORM_LOG_LEVEL") {
        config.log_level = level;
    }
    if let Ok(debug) = std::env::var("CONTACT_FORM_DEBUG") {
        if let Ok(flag) = debug.parse() {
            config.debug = flag;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SubmitConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8000/api/contact");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.log_level, "info");
        assert!(!config.debug);
    }

    #[test]
    fn test_from_toml_str_full() {
        let config = from_toml_str(
            r#"
            endpoint = "https://api.example.com/contact"
            timeout_secs = 5
            log_level = "debug"
            debug = true
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "https://api.example.com/contact");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.log_level, "debug");
        assert!(config.debug);
    }

    #[test]
    fn test_from_toml_str_partial_keeps_defaults() {
        let config = from_toml_str(r#"endpoint = "https://api.example.com/contact""#).unwrap();
        assert_eq!(config.endpoint, "https://api.example.com/contact");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_from_toml_str_malformed() {
        let err = from_toml_str("endpoint = ").unwrap_err();
        assert!(matches!(err, SubmitError::Configuration(_)));
    }

    #[test]
    fn test_from_toml_file_missing() {
        let err = from_toml_file("/nonexistent/contact-form.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read TOML file"));
    }

    #[test]
    fn test_from_toml_file_roundtrip() {
        let path = std::env::temp_dir().join("contact-form-config-test.toml");
        std::fs::write(&path, "endpoint = \"https://api.example.com/contact\"\n").unwrap();
        let config = from_toml_file(&path).unwrap();
        assert_eq!(config.endpoint, "https://api.example.com/contact");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_env_overrides_ignore_unparseable() {
        // Only exercises the parse-guard path without touching process env.
        let mut config = SubmitConfig::default();
        apply_env_overrides(&mut config);
        assert_eq!(config.timeout_secs, 30);
    }
}
