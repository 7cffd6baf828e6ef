//! Wait specifications.
//!
//! [`WaitOptions`] is the loose, serde-friendly shape that comes from config
//! files and command-line flags. [`WaitSpec`] is the validated form the
//! evaluator consumes: exactly one condition kind, with the fields that kind
//! needs.

use crate::error::SpecError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Condition name for fixed-duration waits.
pub const CONDITION_DURATION: &str = "duration";

/// Condition name for script-predicate waits.
pub const CONDITION_JAVASCRIPT: &str = "javascript";

/// Raw wait options as written in configuration.
///
/// All fields are optional here; `WaitSpec::try_from` decides which are
/// required for the selected condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaitOptions {
    /// `"duration"` or `"javascript"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    /// Seconds to sleep, for `duration`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<f64>,

    /// Predicate expression, for `javascript`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javascript: Option<String>,

    /// Timeout in seconds, for `javascript`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<f64>,
}

impl WaitOptions {
    /// Options for a fixed-duration wait.
    #[must_use]
    pub fn duration(seconds: f64) -> Self {
        Self {
            condition: Some(CONDITION_DURATION.to_string()),
            seconds: Some(seconds),
            ..Self::default()
        }
    }

    /// Options for a predicate wait using the default timeout.
    #[must_use]
    pub fn javascript(expression: impl Into<String>) -> Self {
        Self {
            condition: Some(CONDITION_JAVASCRIPT.to_string()),
            javascript: Some(expression.into()),
            ..Self::default()
        }
    }

    /// Sets the timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, seconds: f64) -> Self {
        self.timeout = Some(seconds);
        self
    }
}

/// A validated wait condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitSpec {
    /// Sleep for a fixed amount of time.
    Duration {
        /// Total time to sleep
        seconds: Duration,
    },

    /// Poll a script predicate until it is truthy.
    JavaScript {
        /// Expression evaluated against the target on every poll
        expression: String,
        /// Deadline for the predicate; `None` uses the configured default
        timeout: Option<Duration>,
    },
}

impl WaitSpec {
    /// Fixed-duration wait.
    #[must_use]
    pub fn duration(seconds: Duration) -> Self {
        Self::Duration { seconds }
    }

    /// Predicate wait using the configured default timeout.
    #[must_use]
    pub fn javascript(expression: impl Into<String>) -> Self {
        Self::JavaScript {
            expression: expression.into(),
            timeout: None,
        }
    }

    /// Predicate wait with an explicit timeout.
    #[must_use]
    pub fn javascript_with_timeout(expression: impl Into<String>, timeout: Duration) -> Self {
        Self::JavaScript {
            expression: expression.into(),
            timeout: Some(timeout),
        }
    }

    /// Name of the condition kind, as used in configuration.
    #[must_use]
    pub fn condition(&self) -> &'static str {
        match self {
            Self::Duration { .. } => CONDITION_DURATION,
            Self::JavaScript { .. } => CONDITION_JAVASCRIPT,
        }
    }
}

impl fmt::Display for WaitSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duration { seconds } => write!(f, "duration {seconds:?}"),
            Self::JavaScript {
                expression,
                timeout: Some(timeout),
            } => write!(f, "javascript `{expression}` (timeout {timeout:?})"),
            Self::JavaScript {
                expression,
                timeout: None,
            } => write!(f, "javascript `{expression}`"),
        }
    }
}

impl TryFrom<WaitOptions> for WaitSpec {
    type Error = SpecError;

    fn try_from(options: WaitOptions) -> Result<Self, Self::Error> {
        let condition = options.condition.ok_or(SpecError::MissingField {
            condition: "<none>".to_string(),
            field: "condition",
        })?;

        match condition.trim() {
            CONDITION_DURATION => {
                reject_field(CONDITION_DURATION, "javascript", options.javascript.is_some())?;
                reject_field(CONDITION_DURATION, "timeout", options.timeout.is_some())?;

                let seconds = options.seconds.ok_or(SpecError::MissingField {
                    condition: CONDITION_DURATION.to_string(),
                    field: "seconds",
                })?;

                Ok(Self::Duration {
                    seconds: positive_seconds("seconds", seconds)?,
                })
            }
            CONDITION_JAVASCRIPT => {
                reject_field(CONDITION_JAVASCRIPT, "seconds", options.seconds.is_some())?;

                let expression = options.javascript.ok_or(SpecError::MissingField {
                    condition: CONDITION_JAVASCRIPT.to_string(),
                    field: "javascript",
                })?;
                if expression.trim().is_empty() {
                    return Err(SpecError::InvalidValue {
                        field: "javascript",
                        reason: "expression is empty".to_string(),
                    });
                }

                let timeout = options
                    .timeout
                    .map(|t| positive_seconds("timeout", t))
                    .transpose()?;

                Ok(Self::JavaScript {
                    expression,
                    timeout,
                })
            }
            other => Err(SpecError::UnknownCondition(other.to_string())),
        }
    }
}

fn reject_field(condition: &str, field: &'static str, present: bool) -> Result<(), SpecError> {
    if present {
        return Err(SpecError::UnexpectedField {
            condition: condition.to_string(),
            field,
        });
    }
    Ok(())
}

/// Converts a positive, finite number of seconds into a `Duration`.
///
/// # Errors
///
/// Returns `SpecError::InvalidValue` for zero, negative, NaN, infinite or
/// out-of-range values.
pub fn positive_seconds(field: &'static str, seconds: f64) -> Result<Duration, SpecError> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(SpecError::InvalidValue {
            field,
            reason: format!("expected a positive number of seconds, got {seconds}"),
        });
    }

    Duration::try_from_secs_f64(seconds).map_err(|e| SpecError::InvalidValue {
        field,
        reason: e.to_string(),
    })
}
