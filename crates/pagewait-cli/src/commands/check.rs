//! Check command implementation.
//!
//! Validates a config file and its wait steps without launching anything.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load and validate settings from the config file
/// 2. Validate every wait step, reporting all failures
/// 3. List the steps when everything is valid
///
/// # Errors
///
/// Returns `InvalidPlan` if any step is invalid, or a config error if the
/// file is missing or malformed.
pub async fn execute(args: CheckArgs) -> Result<()> {
    let path = utils::locate_config(args.config.as_deref())?;
    ui::info(&format!("Checking {}...", path.display()));

    let config = pagewait_config::load_file(&path)?;
    ui::success("Settings are valid");

    let plan = config.plan();
    let errors = plan.check();
    if !errors.is_empty() {
        for err in &errors {
            ui::error(&err.to_string());
        }
        return Err(CliError::InvalidPlan {
            count: errors.len(),
            path: path.display().to_string(),
        });
    }

    let compiled = plan.compile()?;
    if compiled.steps().is_empty() {
        ui::warning("No steps defined");
    }
    for (index, spec) in compiled.steps().iter().enumerate() {
        ui::success(&format!("  step {}: {spec}", index + 1));
    }

    ui::success("Configuration is valid!");
    Ok(())
}
