//! Command implementations for the pagewait CLI.
//!
//! - [`run`] - One wait from command-line options
//! - [`plan`] - The ordered steps of a config file
//! - [`check`] - Config and step validation
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod check;
pub mod plan;
pub mod run;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use plan::execute as plan_execute;
pub use run::execute as run_execute;
