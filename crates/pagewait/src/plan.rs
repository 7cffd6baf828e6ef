//! Ordered sequences of waits run against one target.
//!
//! A plan is validated as a whole before anything runs: one bad step means
//! no step waits at all.

use crate::error::{SpecError, WaitError};
use crate::spec::{WaitOptions, WaitSpec};
use crate::target::EvaluationTarget;
use crate::wait::{WaitAction, WaitConfig, WaitOutcome};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// A plan step failed validation or execution.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Step `index` (zero-based) has invalid options.
    #[error("step {}: {source}", .index + 1)]
    InvalidStep {
        /// Zero-based step index
        index: usize,
        /// What was wrong with it
        source: SpecError,
    },

    /// Step `index` (zero-based) failed while waiting.
    #[error("step {} ({spec}) failed: {source}", .index + 1)]
    StepFailed {
        /// Zero-based step index
        index: usize,
        /// The step that failed
        spec: WaitSpec,
        /// Why it failed
        source: WaitError,
    },
}

/// An optional start URL and the waits to run after loading it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaitPlan {
    /// Page to open before the first step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Steps, run in order.
    #[serde(default)]
    pub steps: Vec<WaitOptions>,
}

impl WaitPlan {
    /// Validates every step.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStep` for the first step that fails validation.
    pub fn compile(&self) -> Result<CompiledPlan, PlanError> {
        let steps = self
            .steps
            .iter()
            .enumerate()
            .map(|(index, options)| {
                WaitSpec::try_from(options.clone())
                    .map_err(|source| PlanError::InvalidStep { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CompiledPlan { steps })
    }

    /// Validates every step and collects all failures.
    #[must_use]
    pub fn check(&self) -> Vec<PlanError> {
        self.steps
            .iter()
            .enumerate()
            .filter_map(|(index, options)| {
                WaitSpec::try_from(options.clone())
                    .err()
                    .map(|source| PlanError::InvalidStep { index, source })
            })
            .collect()
    }
}

/// A plan whose steps have all been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPlan {
    steps: Vec<WaitSpec>,
}

impl CompiledPlan {
    /// The validated steps.
    #[must_use]
    pub fn steps(&self) -> &[WaitSpec] {
        &self.steps
    }

    /// Runs the steps in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns `StepFailed` naming the step that timed out or failed to
    /// evaluate.
    pub async fn run<T>(
        self,
        target: &T,
        config: WaitConfig,
    ) -> Result<Vec<WaitOutcome>, PlanError>
    where
        T: EvaluationTarget + ?Sized,
    {
        let total = self.steps.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, spec) in self.steps.into_iter().enumerate() {
            info!(step = index + 1, total, %spec, "running wait step");
            let outcome = WaitAction::new(spec.clone())
                .with_config(config)
                .run(target)
                .await
                .map_err(|source| PlanError::StepFailed {
                    index,
                    spec,
                    source,
                })?;
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_validates_all_steps() {
        let plan = WaitPlan {
            url: None,
            steps: vec![
                WaitOptions::duration(0.5),
                WaitOptions::javascript("window.ready === true").with_timeout(2.0),
            ],
        };

        let compiled = plan.compile().unwrap();
        assert_eq!(compiled.steps().len(), 2);
        assert_eq!(compiled.steps()[0].condition(), "duration");
        assert_eq!(compiled.steps()[1].condition(), "javascript");
    }

    #[test]
    fn compile_reports_first_bad_step() {
        let plan = WaitPlan {
            url: None,
            steps: vec![
                WaitOptions::duration(1.0),
                WaitOptions {
                    condition: Some("duration".to_string()),
                    ..WaitOptions::default()
                },
                WaitOptions::default(),
            ],
        };

        let err = plan.compile().unwrap_err();
        assert!(matches!(err, PlanError::InvalidStep { index: 1, .. }));
        assert!(err.to_string().starts_with("step 2:"));
    }

    #[test]
    fn check_collects_every_bad_step() {
        let plan = WaitPlan {
            url: None,
            steps: vec![
                WaitOptions::default(),
                WaitOptions::duration(1.0),
                WaitOptions::javascript(""),
            ],
        };

        let errors = plan.check();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], PlanError::InvalidStep { index: 0, .. }));
        assert!(matches!(errors[1], PlanError::InvalidStep { index: 2, .. }));
    }

    #[test]
    fn plan_deserializes_from_toml_shaped_json() {
        let plan: WaitPlan = serde_json::from_str(
            r#"{
                "url": "blank.html",
                "steps": [
                    { "condition": "duration", "seconds": 1 },
                    { "condition": "javascript", "javascript": "1 + 1 === 2" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(plan.url.as_deref(), Some("blank.html"));
        assert_eq!(plan.steps.len(), 2);
    }
}
