//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;
use pagewait::{BrowserError, SpecError, WaitError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Spec(e) => spec_error_to_miette(&e),
        CliError::Wait(WaitError::Spec(e)) => spec_error_to_miette(&e),
        CliError::Wait(WaitError::Timeout {
            predicate,
            elapsed,
            timeout,
        }) => miette::miette!(
            help = "Raise --timeout or check that the page can ever satisfy the predicate",
            "Timed out after {:?} (timeout {:?}) waiting for `{}`",
            elapsed,
            timeout,
            predicate
        ),
        CliError::Browser(BrowserError::LaunchFailed { reason, .. }) => miette::miette!(
            help = "Install Chrome/Chromium or pass --chrome-path",
            "Failed to launch browser: {}",
            reason
        ),
        CliError::Config(e) => miette::miette!(
            help = "Check pagewait.toml syntax and field types",
            "Configuration error: {}",
            e
        ),
        other => miette::miette!("{}", other),
    }
}

fn spec_error_to_miette(err: &SpecError) -> Report {
    let help = match err {
        SpecError::MissingField { field: "condition", .. } => {
            "Pass --condition duration or --condition javascript"
        }
        SpecError::MissingField { field: "seconds", .. } => {
            "A duration wait needs --seconds"
        }
        SpecError::MissingField { .. } => "A javascript wait needs --javascript",
        SpecError::UnexpectedField { .. } => {
            "duration takes only --seconds; javascript takes --javascript and --timeout"
        }
        SpecError::UnknownCondition(_) | SpecError::InvalidValue { .. } => {
            "Valid conditions are 'duration' and 'javascript' with positive numbers of seconds"
        }
    };
    miette::miette!(help = help, "Invalid wait: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_errors_carry_help() {
        let report = cli_error_to_miette(CliError::Spec(SpecError::MissingField {
            condition: "duration".to_string(),
            field: "seconds",
        }));
        let help = report.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("A duration wait needs --seconds"));
    }

    #[test]
    fn other_errors_keep_their_message() {
        let report = cli_error_to_miette(CliError::InvalidArgument("bad".to_string()));
        assert_eq!(report.to_string(), "Invalid argument: bad");
    }
}
