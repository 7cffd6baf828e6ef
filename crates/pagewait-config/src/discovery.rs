//! File-based config discovery and layered loading.
//!
//! Sources, lowest priority first:
//!
//! 1. built-in defaults
//! 2. the config file (`pagewait.toml`)
//! 3. `PAGEWAIT_`-prefixed environment variables, nested with `__`
//!    (`PAGEWAIT_SETTINGS__POLL_INTERVAL_MS=50`)
//!
//! Command-line flags are applied on top by the CLI.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use tracing::debug;

use crate::config::PagewaitConfig;
use crate::error::{ConfigError, Result};

/// Default config file name.
pub const CONFIG_FILE: &str = "pagewait.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "PAGEWAIT_";

/// Finds and loads `pagewait.toml`.
///
/// # Example
///
/// ```no_run
/// use pagewait_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Searches `root` for config files.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Searches for `pagewait.toml`, then `.pagewait.toml`, in the root.
    pub fn find(&self) -> Option<PathBuf> {
        [CONFIG_FILE, ".pagewait.toml"]
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }

    /// Loads the discovered file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<PagewaitConfig> {
        let path = self
            .find()
            .ok_or_else(|| ConfigError::NotFound(self.root.clone()))?;
        load_file(&path)
    }

    /// Loads the discovered file, or defaults plus environment if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but is invalid.
    pub fn load_or_default(&self) -> Result<PagewaitConfig> {
        match self.find() {
            Some(path) => load_file(&path),
            None => {
                debug!(root = %self.root.display(), "no config file, using defaults");
                extract(base_figment())
            }
        }
    }
}

/// Loads a specific config file with defaults and environment layered around it.
///
/// # Errors
///
/// Returns `FileNotFound` if `path` does not exist, or `InvalidValue` if the
/// merged configuration does not deserialize or validate.
pub fn load_file(path: &Path) -> Result<PagewaitConfig> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    debug!(path = %path.display(), "loading config");
    let figment = Figment::from(Serialized::defaults(PagewaitConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider());

    extract(figment)
}

fn base_figment() -> Figment {
    Figment::from(Serialized::defaults(PagewaitConfig::default())).merge(env_provider())
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).split("__")
}

fn extract(figment: Figment) -> Result<PagewaitConfig> {
    let config: PagewaitConfig = figment.extract().map_err(|e| ConfigError::InvalidValue {
        field: if e.path.is_empty() {
            "config".to_string()
        } else {
            e.path.join(".")
        },
        hint: Some(e.to_string()),
    })?;

    config.validate()?;
    Ok(config)
}
