//! Command-line interface definition for pagewait.
//!
//! # Command Structure
//!
//! - `pagewait run` - run a single wait against a page
//! - `pagewait plan` - run the steps from a config file
//! - `pagewait check` - validate a config file without running it

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{BrowserArgs, CheckArgs, Command, PlanArgs, RunArgs, WaitArgs};
pub use enums::*;
pub use validation::parse_seconds;

/// pagewait - wait for a page to reach a condition
#[derive(Parser, Debug)]
#[command(
    name = "pagewait",
    version,
    about = "Wait for a fixed duration or for a script predicate to hold in a headless Chrome page",
    long_about = "pagewait loads a page in headless Chrome and blocks until a condition holds:\n\
                  either a fixed duration elapses, or a JavaScript predicate evaluates truthy\n\
                  before its timeout. It exits non-zero on timeouts and evaluation errors."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
