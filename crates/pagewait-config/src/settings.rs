//! Settings shared by every wait a config runs.

use pagewait::spec::positive_seconds;
use pagewait::{TestBrowserConfig, WaitConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ConfigError, Result};

fn default_timeout() -> f64 {
    pagewait::DEFAULT_TIMEOUT.as_secs_f64()
}

fn default_poll_interval_ms() -> u64 {
    u64::try_from(pagewait::DEFAULT_POLL_INTERVAL.as_millis()).unwrap_or(100)
}

fn default_headless() -> bool {
    true
}

fn default_window_size() -> (u32, u32) {
    (1920, 1080)
}

/// Evaluator tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitSettings {
    /// Timeout in seconds for predicate waits that don't set one.
    #[serde(default = "default_timeout")]
    pub default_timeout: f64,

    /// Delay between predicate evaluations, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            default_timeout: default_timeout(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl WaitSettings {
    /// Converts to the evaluator's configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` for a non-positive timeout or a zero interval.
    pub fn to_wait_config(&self) -> Result<WaitConfig> {
        let timeout = positive_seconds("default_timeout", self.default_timeout).map_err(|e| {
            ConfigError::InvalidValue {
                field: "settings.default_timeout".to_string(),
                hint: Some(e.to_string()),
            }
        })?;

        if self.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "settings.poll_interval_ms".to_string(),
                hint: Some("poll interval must be at least 1ms".to_string()),
            });
        }

        Ok(WaitConfig::new(
            timeout,
            Duration::from_millis(self.poll_interval_ms),
        ))
    }
}

/// How to launch the browser that hosts the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// Run without a window.
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Chrome/Chromium executable; auto-detected when unset.
    #[serde(default)]
    pub chrome_path: Option<String>,

    /// Extra Chrome arguments, appended to the defaults.
    #[serde(default)]
    pub args: Vec<String>,

    /// Window width and height in pixels.
    #[serde(default = "default_window_size")]
    pub window_size: (u32, u32),
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: default_headless(),
            chrome_path: None,
            args: Vec::new(),
            window_size: default_window_size(),
        }
    }
}

impl BrowserSettings {
    /// Converts to launch options for `TestBrowser`.
    #[must_use]
    pub fn to_browser_config(&self) -> TestBrowserConfig {
        let mut config = TestBrowserConfig::default()
            .with_window_size(self.window_size.0, self.window_size.1)
            .with_args(self.args.clone());

        if !self.headless {
            config = config.visible();
        }
        if let Some(path) = &self.chrome_path {
            config = config.with_chrome_path(path.clone());
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_evaluator_defaults() {
        let config = WaitSettings::default().to_wait_config().unwrap();
        assert_eq!(config, WaitConfig::default());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let settings = WaitSettings {
            poll_interval_ms: 0,
            ..WaitSettings::default()
        };
        assert!(matches!(
            settings.to_wait_config(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn negative_timeout_is_rejected() {
        let settings = WaitSettings {
            default_timeout: -1.0,
            ..WaitSettings::default()
        };
        let err = settings.to_wait_config().unwrap_err();
        assert!(err.to_string().contains("settings.default_timeout"));
    }

    #[test]
    fn browser_settings_carry_over() {
        let settings = BrowserSettings {
            headless: false,
            chrome_path: Some("/opt/chrome".to_string()),
            args: vec!["--mute-audio".to_string()],
            window_size: (1024, 768),
        };
        let config = settings.to_browser_config();
        assert!(!config.headless);
        assert_eq!(config.chrome_path.as_deref(), Some("/opt/chrome"));
        assert_eq!(config.window_size, (1024, 768));
        assert!(config.args.iter().any(|a| a == "--no-sandbox"));
        assert!(config.args.iter().any(|a| a == "--mute-audio"));
    }
}
