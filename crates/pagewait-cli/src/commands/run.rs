//! Run command implementation.
//!
//! Runs one wait described by command-line options.

use async_trait::async_trait;
use pagewait::{
    resolve_url, EvaluationError, EvaluationTarget, TestBrowser, WaitAction, WaitOutcome,
    WaitSpec,
};
use serde_json::Value;
use tracing::debug;

use crate::cli::RunArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Stands in for a page when a duration wait has nothing to load.
struct NoPage;

#[async_trait]
impl EvaluationTarget for NoPage {
    async fn evaluate_expression(
        &self,
        _expression: &str,
    ) -> std::result::Result<Value, EvaluationError> {
        Err(EvaluationError::Unavailable("no page is open".to_string()))
    }
}

/// Execute the run command.
///
/// # Steps
///
/// 1. Load settings (`--config`, a discovered `pagewait.toml`, or defaults)
/// 2. Validate the wait options; nothing is launched if they are invalid
/// 3. Open the page (skipped for a duration wait without `--url`)
/// 4. Run the wait and report the outcome
///
/// # Errors
///
/// Returns an error for invalid options, browser failures, a timeout, or a
/// predicate that fails to evaluate.
pub async fn execute(args: RunArgs) -> Result<()> {
    let config = utils::load_optional_config(args.config.as_deref())?;
    let wait_config = utils::wait_config(&config, &args.browser)?;

    let action = WaitAction::from_options(args.wait.to_options())?.with_config(wait_config);
    let spec = action.spec().clone();

    let outcome = if matches!(spec, WaitSpec::Duration { .. }) && args.url.is_none() {
        debug!("duration wait without a page, skipping browser launch");
        ui::info(&format!("Waiting for {spec}"));
        action.run(&NoPage).await?
    } else {
        let url = resolve_url(args.url.as_deref().unwrap_or("about:blank"))?;
        let browser = TestBrowser::launch(utils::browser_config(&config, &args.browser)).await?;

        let result = run_on_page(&browser, &url, action).await;
        let closed = browser.close().await;

        let outcome = result?;
        closed?;
        outcome
    };

    ui::success(&format!(
        "{spec} satisfied in {}",
        ui::format_duration(outcome.elapsed)
    ));
    Ok(())
}

async fn run_on_page(browser: &TestBrowser, url: &str, action: WaitAction) -> Result<WaitOutcome> {
    let page = browser.new_page().await?;

    ui::info(&format!("Opening {url}"));
    page.navigate(url).await?;

    ui::info(&format!("Waiting for {}", action.spec()));
    Ok(action.run(&page).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Condition, WaitArgs};
    use crate::error::CliError;
    use pagewait::{SpecError, WaitError};

    #[tokio::test]
    async fn test_no_page_is_unavailable() {
        let err = NoPage.evaluate_expression("true").await.unwrap_err();
        assert!(matches!(err, EvaluationError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_incomplete_options_fail_before_launch() {
        let args = RunArgs {
            wait: WaitArgs {
                condition: Some(Condition::Javascript),
                ..WaitArgs::default()
            },
            url: Some("http://127.0.0.1:9/never-reached".to_string()),
            ..RunArgs::default()
        };

        let err = execute(args).await.unwrap_err();
        assert!(matches!(
            err,
            CliError::Spec(SpecError::MissingField {
                field: "javascript",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_duration_without_url_needs_no_browser() {
        let args = RunArgs {
            wait: WaitArgs {
                condition: Some(Condition::Duration),
                seconds: Some(0.05),
                ..WaitArgs::default()
            },
            ..RunArgs::default()
        };

        execute(args).await.unwrap();
    }

    #[tokio::test]
    async fn test_no_page_surfaces_evaluation_error() {
        let err = WaitAction::new(WaitSpec::javascript("true"))
            .run(&NoPage)
            .await
            .unwrap_err();
        assert!(matches!(err, WaitError::Evaluation(_)));
    }
}
