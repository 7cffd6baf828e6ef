//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failure to find, parse or validate a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config file was discovered in the searched directory.
    #[error("no pagewait.toml found in {0}")]
    NotFound(PathBuf),

    /// An explicitly given config path does not exist.
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    /// A merged value failed to deserialize or validate.
    #[error("invalid config value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue {
        /// Dotted path of the offending field
        field: String,
        /// What was wrong, if known
        hint: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_message_includes_hint() {
        let err = ConfigError::InvalidValue {
            field: "settings.poll_interval_ms".to_string(),
            hint: Some("must be at least 1ms".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for 'settings.poll_interval_ms': must be at least 1ms"
        );
    }

    #[test]
    fn invalid_value_message_without_hint() {
        let err = ConfigError::InvalidValue {
            field: "url".to_string(),
            hint: None,
        };
        assert_eq!(err.to_string(), "invalid config value for 'url'");
    }
}
