use clap::{Args, Subcommand};
use pagewait::WaitOptions;
use std::path::PathBuf;

use crate::cli::enums::Condition;
use crate::cli::validation::parse_seconds;

/// Available pagewait subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a single wait against a page
    ///
    /// The wait options are validated before any browser is launched. A
    /// duration wait without --url runs without a browser at all.
    Run(RunArgs),

    /// Run the wait steps listed in a config file
    ///
    /// Every step is validated before the first one runs; steps then run in
    /// order against one page and stop at the first failure.
    Plan(PlanArgs),

    /// Validate a config file without running anything
    Check(CheckArgs),
}

/// Options describing one wait
#[derive(Args, Debug, Clone, Default)]
pub struct WaitArgs {
    /// Condition to wait for
    #[arg(short = 'c', long, value_enum)]
    pub condition: Option<Condition>,

    /// Seconds to sleep (duration)
    #[arg(short = 's', long, value_parser = parse_seconds, value_name = "SECONDS")]
    pub seconds: Option<f64>,

    /// Predicate expression to poll (javascript)
    ///
    /// Examples:
    ///   --javascript "document.readyState === 'complete'"
    ///   --javascript "window.appReady"
    #[arg(short = 'j', long, value_name = "EXPR")]
    pub javascript: Option<String>,

    /// Seconds before a javascript wait gives up (default: settings.default_timeout)
    #[arg(short = 't', long, value_parser = parse_seconds, value_name = "SECONDS")]
    pub timeout: Option<f64>,
}

impl WaitArgs {
    /// The raw options, validated later into a `WaitSpec`.
    #[must_use]
    pub fn to_options(&self) -> WaitOptions {
        WaitOptions {
            condition: self.condition.map(|c| c.as_str().to_string()),
            seconds: self.seconds,
            javascript: self.javascript.clone(),
            timeout: self.timeout,
        }
    }
}

/// Browser launch overrides
#[derive(Args, Debug, Clone, Default)]
pub struct BrowserArgs {
    /// Show the browser window instead of running headless
    #[arg(long)]
    pub visible: bool,

    /// Path to the Chrome/Chromium executable
    #[arg(long, value_name = "PATH")]
    pub chrome_path: Option<String>,

    /// Delay between predicate evaluations in milliseconds
    #[arg(long, value_name = "MS")]
    pub poll_interval_ms: Option<u64>,
}

/// Arguments for the run command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub wait: WaitArgs,

    /// Page to open first: a URL or a local file path (default: about:blank)
    #[arg(short = 'u', long, value_name = "URL")]
    pub url: Option<String>,

    /// Config file for settings and browser options
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub browser: BrowserArgs,
}

/// Arguments for the plan command
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    /// Config file (default: pagewait.toml in the current directory)
    #[arg(value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the config's start URL
    #[arg(short = 'u', long, value_name = "URL")]
    pub url: Option<String>,

    #[command(flatten)]
    pub browser: BrowserArgs,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Config file (default: pagewait.toml in the current directory)
    #[arg(value_name = "FILE")]
    pub config: Option<PathBuf>,
}
