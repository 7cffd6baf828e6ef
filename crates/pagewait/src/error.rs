//! Error types for wait operations and the browser-backed target.
//!
//! Failures fall into three terminal categories for a single wait:
//!
//! - [`SpecError`]: the wait options are incomplete or contradictory. Raised
//!   while building a [`WaitSpec`](crate::WaitSpec), before any suspension.
//! - [`WaitError::Timeout`]: the condition never held within the timeout.
//! - [`EvaluationError`]: the target could not evaluate the predicate.
//!
//! None of these are retried internally; the caller decides what to do next.
//! [`BrowserError`] covers the Chrome target's own lifecycle (launch,
//! navigation, connection).

use std::time::Duration;
use thiserror::Error;

/// Invalid wait options.
///
/// Produced by `WaitSpec::try_from(WaitOptions)`. Each variant names the
/// offending field so callers can point users at the exact option.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    /// A field required by the selected condition is absent.
    #[error("missing required field '{field}' for condition '{condition}'")]
    MissingField {
        /// Condition kind that requires the field (or `"<none>"` when the
        /// condition itself is missing)
        condition: String,
        /// Name of the missing field
        field: &'static str,
    },

    /// The `condition` string is not a known condition kind.
    #[error("unknown wait condition '{0}' (expected 'duration' or 'javascript')")]
    UnknownCondition(String),

    /// A field that only applies to the other condition kind was supplied.
    #[error("field '{field}' does not apply to condition '{condition}'")]
    UnexpectedField {
        /// Selected condition kind
        condition: String,
        /// Name of the field that does not belong
        field: &'static str,
    },

    /// A field is present but its value is unusable.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Name of the field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// The target failed to evaluate an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// The expression threw or could not be parsed.
    #[error("expression `{expression}` failed: {message}")]
    Script {
        /// The expression that was evaluated
        expression: String,
        /// Error reported by the target
        message: String,
    },

    /// The target could not be reached (closed page, dropped connection).
    #[error("evaluation target unavailable: {0}")]
    Unavailable(String),
}

/// Failure of a single wait run.
#[derive(Debug, Error)]
pub enum WaitError {
    /// The wait options were invalid.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// The predicate never became truthy before the deadline.
    #[error("timed out after {elapsed:?} waiting for `{predicate}` (timeout {timeout:?})")]
    Timeout {
        /// Description of the unmet predicate
        predicate: String,
        /// Time spent waiting before giving up
        elapsed: Duration,
        /// The configured timeout
        timeout: Duration,
    },

    /// The target failed to evaluate the predicate.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl WaitError {
    /// Returns true for [`WaitError::Timeout`].
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Errors from launching and driving the Chrome-backed target.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Failed to launch the browser process.
    ///
    /// This typically occurs when Chrome/Chromium is not installed,
    /// or when there are permission issues with the executable.
    #[error("failed to launch browser: {reason}")]
    LaunchFailed {
        /// Human-readable reason for the launch failure
        reason: String,
        /// Optional underlying error that caused the failure
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to establish or use the DevTools connection.
    #[error("CDP connection failed: {0}")]
    ConnectionFailed(String),

    /// Navigation to a URL failed.
    #[error("navigation to '{url}' failed: {reason}")]
    NavigationFailed {
        /// The URL that failed to load
        url: String,
        /// Reason for the navigation failure
        reason: String,
    },

    /// A local path could not be turned into a URL.
    #[error("cannot resolve '{input}' to a URL: {reason}")]
    InvalidUrl {
        /// The input that was rejected
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// Script evaluation failed while driving the page.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    /// A wait performed by the page (e.g. for load) failed.
    #[error(transparent)]
    Wait(#[from] WaitError),

    /// An operation was attempted on a closed browser instance.
    #[error("browser instance is already closed")]
    AlreadyClosed,

    /// Wraps errors from the chromiumoxide library.
    #[error("chromiumoxide error: {0}")]
    ChromiumOxide(#[from] chromiumoxide::error::CdpError),

    /// Filesystem failure, such as creating the browser profile directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_names_predicate() {
        let err = WaitError::Timeout {
            predicate: "1 + 1 === 3".to_string(),
            elapsed: Duration::from_millis(1002),
            timeout: Duration::from_secs(1),
        };
        let message = err.to_string();
        assert!(message.contains("1 + 1 === 3"));
        assert!(err.is_timeout());
    }

    #[test]
    fn spec_error_is_transparent() {
        let err: WaitError = SpecError::MissingField {
            condition: "duration".to_string(),
            field: "seconds",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "missing required field 'seconds' for condition 'duration'"
        );
        assert!(!err.is_timeout());
    }

    #[test]
    fn io_errors_convert_into_browser_errors() {
        fn create() -> Result<()> {
            Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only temp dir",
            ))?;
            Ok(())
        }

        let err = create().unwrap_err();
        assert!(matches!(err, BrowserError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: read-only temp dir");
    }
}
