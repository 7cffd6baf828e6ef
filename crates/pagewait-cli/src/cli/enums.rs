use clap::ValueEnum;
use pagewait::spec::{CONDITION_DURATION, CONDITION_JAVASCRIPT};

/// Condition kind for `pagewait run`
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Condition {
    /// Sleep for `--seconds`
    #[value(name = "duration")]
    Duration,

    /// Poll `--javascript` until it is truthy or `--timeout` passes
    #[value(name = "javascript")]
    Javascript,
}

impl Condition {
    /// Name used in config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Duration => CONDITION_DURATION,
            Self::Javascript => CONDITION_JAVASCRIPT,
        }
    }
}
