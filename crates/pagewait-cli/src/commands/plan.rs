//! Plan command implementation.
//!
//! Runs the ordered wait steps of a config file against one page.

use pagewait::{resolve_url, CompiledPlan, TestBrowser, WaitConfig, WaitOutcome};

use crate::cli::PlanArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the plan command.
///
/// # Steps
///
/// 1. Load the config file
/// 2. Validate every step; nothing runs if one is invalid
/// 3. Launch the browser and open the start URL, if any
/// 4. Run the steps in order, stopping at the first failure
///
/// # Errors
///
/// Returns an error if the config is missing or invalid, the browser fails,
/// or a step times out or fails to evaluate.
pub async fn execute(args: PlanArgs) -> Result<()> {
    let path = utils::locate_config(args.config.as_deref())?;
    let config = pagewait_config::load_file(&path)?;
    let wait_config = utils::wait_config(&config, &args.browser)?;

    let plan = config.plan();
    let compiled = plan.compile()?;

    if compiled.steps().is_empty() {
        ui::warning(&format!("No steps in {}", path.display()));
        return Ok(());
    }

    let url = args
        .url
        .or(plan.url)
        .map(|u| resolve_url(&u))
        .transpose()?;

    let steps = compiled.steps().to_vec();
    ui::info(&format!("Running {} step(s)", steps.len()));

    let browser = TestBrowser::launch(utils::browser_config(&config, &args.browser)).await?;
    let result = run_on_page(&browser, url.as_deref(), compiled, wait_config).await;
    let closed = browser.close().await;

    let outcomes = result?;
    closed?;

    ui::print_plan_summary(&steps, &outcomes);
    ui::success("All steps satisfied");
    Ok(())
}

async fn run_on_page(
    browser: &TestBrowser,
    url: Option<&str>,
    plan: CompiledPlan,
    config: WaitConfig,
) -> Result<Vec<WaitOutcome>> {
    let page = browser.new_page().await?;

    if let Some(url) = url {
        ui::info(&format!("Opening {url}"));
        page.navigate(url).await?;
    }

    Ok(plan.run(&page, config).await?)
}
