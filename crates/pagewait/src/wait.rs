//! The wait evaluator.
//!
//! A [`WaitAction`] consumes one [`WaitSpec`] and suspends the calling task
//! until the condition holds:
//!
//! - `Duration` sleeps for the requested time and always succeeds.
//! - `JavaScript` evaluates the predicate against an [`EvaluationTarget`]
//!   every `poll_interval` until it is truthy or the timeout expires.
//!
//! # Design
//!
//! Every predicate wait is built on `poll_until`: evaluate, check the deadline, sleep
//! for the poll interval clamped to the time remaining, repeat. Each
//! evaluation is itself bounded by the deadline, so a target that hangs
//! cannot stretch the wait past its timeout. Evaluation errors end the wait
//! immediately; they are never retried. A timeout too large for the clock
//! is clamped to a deadline decades away.
//!
//! Each unmet poll logs at DEBUG, completion at INFO and a timeout at WARN.

use crate::error::{EvaluationError, SpecError, WaitError};
use crate::spec::{WaitOptions, WaitSpec};
use crate::target::{is_truthy, EvaluationTarget};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, timeout_at, Instant};
use tracing::{debug, info, warn};

/// Default timeout for predicate waits that don't set one (60 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default poll interval for checking conditions (100ms).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

// Deadline used when `start + timeout` does not fit in an `Instant`. Same
// horizon tokio uses for unrepresentable sleeps.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Configuration for wait operations.
///
/// `timeout` applies to predicate waits whose spec has no timeout of its
/// own, and to the generic helpers [`wait_for`] and [`wait_for_result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    /// Maximum time to wait when no explicit timeout is given.
    pub timeout: Duration,

    /// How often to re-evaluate the condition.
    pub poll_interval: Duration,
}

impl WaitConfig {
    /// Creates a new wait configuration.
    #[must_use]
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// Creates a config with custom timeout and default poll interval.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(timeout, DEFAULT_POLL_INTERVAL)
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_POLL_INTERVAL)
    }
}

/// Result of a successful wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOutcome {
    /// Wall time spent in the wait.
    pub elapsed: Duration,

    /// Number of predicate evaluations (zero for duration waits).
    pub evaluations: u32,
}

/// A single wait, ready to run once.
#[derive(Debug, Clone)]
pub struct WaitAction {
    spec: WaitSpec,
    config: WaitConfig,
}

impl WaitAction {
    /// Creates an action with the default [`WaitConfig`].
    #[must_use]
    pub fn new(spec: WaitSpec) -> Self {
        Self {
            spec,
            config: WaitConfig::default(),
        }
    }

    /// Validates raw options into an action.
    ///
    /// # Errors
    ///
    /// Returns a [`SpecError`] if the options don't describe exactly one
    /// complete condition.
    pub fn from_options(options: WaitOptions) -> Result<Self, SpecError> {
        WaitSpec::try_from(options).map(Self::new)
    }

    /// Replaces the wait configuration.
    #[must_use]
    pub fn with_config(mut self, config: WaitConfig) -> Self {
        self.config = config;
        self
    }

    /// The condition this action waits for.
    #[must_use]
    pub fn spec(&self) -> &WaitSpec {
        &self.spec
    }

    /// Runs the wait against `target`.
    ///
    /// Duration waits never touch the target.
    ///
    /// # Errors
    ///
    /// - `WaitError::Timeout` if the predicate was never truthy in time.
    /// - `WaitError::Evaluation` if the target failed to evaluate it.
    pub async fn run<T>(self, target: &T) -> Result<WaitOutcome, WaitError>
    where
        T: EvaluationTarget + ?Sized,
    {
        let start = Instant::now();

        match self.spec {
            WaitSpec::Duration { seconds } => {
                debug!(?seconds, "waiting for fixed duration");
                sleep(seconds).await;

                let elapsed = start.elapsed();
                info!(?elapsed, "duration elapsed");
                Ok(WaitOutcome {
                    elapsed,
                    evaluations: 0,
                })
            }
            WaitSpec::JavaScript {
                expression,
                timeout,
            } => {
                let timeout = timeout.unwrap_or(self.config.timeout);
                debug!(%expression, ?timeout, "waiting for predicate");

                let expr = expression.as_str();
                let evaluations = poll_until(
                    move || async move {
                        target
                            .evaluate_expression(expr)
                            .await
                            .map(|value| is_truthy(&value))
                    },
                    timeout,
                    self.config.poll_interval,
                    expr,
                )
                .await?;

                let elapsed = start.elapsed();
                info!(%expression, ?elapsed, evaluations, "predicate satisfied");
                Ok(WaitOutcome {
                    elapsed,
                    evaluations,
                })
            }
        }
    }
}

/// Validates `options` and runs the resulting wait.
///
/// Invalid options fail before any suspension.
///
/// # Errors
///
/// Returns `WaitError::Spec` for invalid options, otherwise whatever
/// [`WaitAction::run`] returns.
pub async fn run_options<T>(
    options: WaitOptions,
    target: &T,
    config: WaitConfig,
) -> Result<WaitOutcome, WaitError>
where
    T: EvaluationTarget + ?Sized,
{
    WaitAction::from_options(options)?
        .with_config(config)
        .run(target)
        .await
}

/// Waits for a condition to become true, with timeout.
///
/// The condition function is called repeatedly at `poll_interval` until
/// it returns true or the timeout expires.
///
/// # Example
///
/// ```ignore
/// wait_for(
///     || async { counter.load(Ordering::SeqCst) > 3 },
///     WaitConfig::default(),
///     "counter > 3"
/// ).await?;
/// ```
///
/// # Errors
///
/// Returns `WaitError::Timeout` if the condition never held.
pub async fn wait_for<F, Fut>(
    mut condition: F,
    config: WaitConfig,
    description: &str,
) -> Result<(), WaitError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    poll_until(
        || {
            let fut = condition();
            async move { Ok::<_, EvaluationError>(fut.await) }
        },
        config.timeout,
        config.poll_interval,
        description,
    )
    .await
    .map(|_| ())
}

/// Waits for a fallible condition to become true.
///
/// Unlike [`wait_for`], an `Err` from the condition ends the wait and is
/// returned as `WaitError::Evaluation`.
///
/// # Errors
///
/// Returns `WaitError::Timeout` or `WaitError::Evaluation`.
pub async fn wait_for_result<F, Fut>(
    condition: F,
    config: WaitConfig,
    description: &str,
) -> Result<(), WaitError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, EvaluationError>>,
{
    poll_until(condition, config.timeout, config.poll_interval, description)
        .await
        .map(|_| ())
}

/// `start + timeout`, clamped for timeouts too large to represent.
fn deadline_after(start: Instant, timeout: Duration) -> Instant {
    start
        .checked_add(timeout)
        .unwrap_or_else(|| start + FAR_FUTURE)
}

/// Polls `condition` until it yields `true`, returning the evaluation count.
async fn poll_until<F, Fut>(
    mut condition: F,
    timeout: Duration,
    poll_interval: Duration,
    description: &str,
) -> Result<u32, WaitError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, EvaluationError>>,
{
    let start = Instant::now();
    let deadline = deadline_after(start, timeout);
    let mut evaluations = 0u32;

    loop {
        evaluations += 1;
        match timeout_at(deadline, condition()).await {
            Ok(Ok(true)) => return Ok(evaluations),
            Ok(Ok(false)) => {
                debug!(condition = description, evaluations, "condition not met yet");
            }
            Ok(Err(err)) => return Err(err.into()),
            // Evaluation still pending at the deadline.
            Err(_) => break,
        }

        let now = Instant::now();
        if now >= deadline {
            break;
        }
        sleep(poll_interval.min(deadline - now)).await;
    }

    let elapsed = start.elapsed();
    warn!(condition = description, ?elapsed, evaluations, "wait timed out");
    Err(WaitError::Timeout {
        predicate: description.to_string(),
        elapsed,
        timeout,
    })
}
