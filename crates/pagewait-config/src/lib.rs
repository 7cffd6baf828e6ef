//! Configuration for pagewait: settings, browser launch options and wait
//! steps, discovered from `pagewait.toml` and layered with environment
//! overrides.

#![warn(missing_docs)]

pub mod config;
pub mod discovery;
pub mod error;
pub mod settings;

// Re-export main types
pub use config::*;
pub use error::*;
pub use settings::*;

pub use discovery::{load_file, ConfigDiscovery, CONFIG_FILE, ENV_PREFIX};
