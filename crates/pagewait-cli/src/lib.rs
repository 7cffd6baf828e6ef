//! pagewait CLI - wait for pages to reach a condition.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - `commands` - `run`, `plan` and `check` implementations
//! - [`error`] - CLI error type and miette rendering
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines and duration formatting
//!
//! # Example
//!
//! ```text
//! pagewait run --url blank.html --condition duration --seconds 1
//! pagewait run --condition javascript --javascript "1 + 1 === 3" --timeout 1
//! pagewait check pagewait.toml
//! pagewait plan
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result};
