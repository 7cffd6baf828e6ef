//! Logging setup for the pagewait CLI.
//!
//! The libraries log through `tracing`; this module installs the subscriber.
//!
//! # Verbosity Levels
//!
//! 1. `--verbose`: DEBUG for pagewait crates (every poll cycle is visible)
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG`: custom filter
//! 4. Default: INFO for pagewait crates

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "pagewait=debug,pagewait_config=debug,pagewait_cli=debug";
const QUIET_FILTER: &str = "pagewait=error,pagewait_config=error,pagewait_cli=error";
const DEFAULT_FILTER: &str = "pagewait=info,pagewait_config=info,pagewait_cli=info";

/// Builds the filter for the given flags.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// # Example
///
/// ```rust,no_run
/// use pagewait_cli::logger::init_logger;
///
/// // Debug logging, no colors
/// init_logger(true, false, true);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so these
    // only exercise filter construction.

    #[test]
    fn test_env_filter_verbose() {
        let filter = build_filter(true, false);
        assert!(filter.to_string().contains("pagewait=debug"));
    }

    #[test]
    fn test_env_filter_quiet() {
        let filter = build_filter(false, true);
        assert!(filter.to_string().contains("pagewait=error"));
    }
}
