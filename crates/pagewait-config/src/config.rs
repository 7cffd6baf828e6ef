//! Top-level configuration structure.

use pagewait::{WaitOptions, WaitPlan};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::settings::{BrowserSettings, WaitSettings};

/// Everything a `pagewait.toml` can hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagewaitConfig {
    /// Page to open before running steps (URL or local path).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Evaluator timing.
    #[serde(default)]
    pub settings: WaitSettings,

    /// Browser launch options.
    #[serde(default)]
    pub browser: BrowserSettings,

    /// Wait steps, run in order by `pagewait plan`.
    #[serde(default)]
    pub steps: Vec<WaitOptions>,
}

impl PagewaitConfig {
    /// The url and steps as a runnable plan.
    #[must_use]
    pub fn plan(&self) -> WaitPlan {
        WaitPlan {
            url: self.url.clone(),
            steps: self.steps.clone(),
        }
    }

    /// Validates settings. Steps are validated when the plan is compiled.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` for unusable settings.
    pub fn validate(&self) -> Result<()> {
        self.settings.to_wait_config()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_copies_url_and_steps() {
        let config = PagewaitConfig {
            url: Some("blank.html".to_string()),
            steps: vec![WaitOptions::duration(1.0)],
            ..PagewaitConfig::default()
        };

        let plan = config.plan();
        assert_eq!(plan.url.as_deref(), Some("blank.html"));
        assert_eq!(plan.steps, vec![WaitOptions::duration(1.0)]);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(PagewaitConfig::default().validate().is_ok());
    }
}
