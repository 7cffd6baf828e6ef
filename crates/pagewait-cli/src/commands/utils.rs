//! Config loading and flag overrides shared by the commands.

use std::path::{Path, PathBuf};
use std::time::Duration;

use pagewait::{TestBrowserConfig, WaitConfig};
use pagewait_config::{load_file, ConfigDiscovery, ConfigError, PagewaitConfig};

use crate::cli::BrowserArgs;
use crate::error::{CliError, Result};

/// The explicit config path, or the one discovered in the current directory.
pub(crate) fn locate_config(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => ConfigDiscovery::new(".")
            .find()
            .ok_or_else(|| ConfigError::NotFound(PathBuf::from(".")).into()),
    }
}

/// Loads the explicit config file, or falls back to defaults when there is
/// neither a flag nor a discoverable file.
pub(crate) fn load_optional_config(explicit: Option<&Path>) -> Result<PagewaitConfig> {
    let config = match explicit {
        Some(path) => load_file(path)?,
        None => ConfigDiscovery::new(".").load_or_default()?,
    };
    Ok(config)
}

/// Evaluator settings with `--poll-interval-ms` applied.
pub(crate) fn wait_config(config: &PagewaitConfig, args: &BrowserArgs) -> Result<WaitConfig> {
    let base = config.settings.to_wait_config()?;

    match args.poll_interval_ms {
        None => Ok(base),
        Some(0) => Err(CliError::InvalidArgument(
            "--poll-interval-ms must be at least 1".to_string(),
        )),
        Some(ms) => Ok(WaitConfig::new(base.timeout, Duration::from_millis(ms))),
    }
}

/// Browser launch options with `--visible` and `--chrome-path` applied.
pub(crate) fn browser_config(config: &PagewaitConfig, args: &BrowserArgs) -> TestBrowserConfig {
    let mut browser = config.browser.to_browser_config();

    if args.visible {
        browser = browser.visible();
    }
    if let Some(path) = &args.chrome_path {
        browser = browser.with_chrome_path(path.clone());
    }

    browser
}
