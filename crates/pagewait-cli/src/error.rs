//! Error handling for the pagewait CLI.
//!
//! `CliError` collects failures from every layer (config loading, wait
//! validation, the wait itself, the browser) so commands can use `?`
//! throughout. `main` renders it through miette.

mod report;

use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file could not be found, parsed or validated
    #[error("Configuration error: {0}")]
    Config(#[from] pagewait_config::ConfigError),

    /// Wait options were incomplete or contradictory
    #[error("Invalid wait: {0}")]
    Spec(#[from] pagewait::SpecError),

    /// The wait timed out or its predicate failed to evaluate
    #[error("Wait failed: {0}")]
    Wait(#[from] pagewait::WaitError),

    /// A plan step was invalid or failed
    #[error("Plan failed: {0}")]
    Plan(#[from] pagewait::PlanError),

    /// Launching or driving the browser failed
    #[error("Browser error: {0}")]
    Browser(#[from] pagewait::BrowserError),

    /// `check` found invalid steps
    #[error("{count} invalid step(s) in {path}")]
    InvalidPlan {
        /// Number of invalid steps
        count: usize,
        /// Config file that was checked
        path: String,
    },

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pagewait::{SpecError, WaitError};
    use std::time::Duration;

    #[test]
    fn test_spec_error_message() {
        let err: CliError = SpecError::MissingField {
            condition: "duration".to_string(),
            field: "seconds",
        }
        .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid wait:"));
        assert!(msg.contains("seconds"));
    }

    #[test]
    fn test_timeout_error_message() {
        let err: CliError = WaitError::Timeout {
            predicate: "window.ready".to_string(),
            elapsed: Duration::from_secs(1),
            timeout: Duration::from_secs(1),
        }
        .into();
        assert!(err.to_string().contains("window.ready"));
    }

    #[test]
    fn test_invalid_plan_message() {
        let err = CliError::InvalidPlan {
            count: 2,
            path: "pagewait.toml".to_string(),
        };
        assert_eq!(err.to_string(), "2 invalid step(s) in pagewait.toml");
    }
}
