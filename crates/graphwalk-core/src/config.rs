//! Configuration for graphwalk
//!
//! Read from `config.toml` in the graphwalk config directory
//! (`~/.config/graphwalk/` by default, `$GRAPHWALK_CONFIG_DIR` when set),
//! or from an explicit `--config` path.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphwalkError, Result};

pub use types::{AppConfig, LadderConfig, PathsConfig};

const CONFIG_DIR: &str = "graphwalk";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "GRAPHWALK_CONFIG_DIR";

impl AppConfig {
    /// Default config path, honoring the directory override
    pub fn default_path(env_dir: Option<PathBuf>) -> Option<PathBuf> {
        env_dir
            .or_else(|| dirs::config_dir().map(|dir| dir.join(CONFIG_DIR)))
            .map(|dir| dir.join(CONFIG_FILE))
    }

    /// Resolve configuration for a run.
    ///
    /// An explicit path must exist; the implicit default may be absent, in
    /// which case built-in defaults apply.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let env_dir = std::env::var_os(CONFIG_DIR_ENV_VAR).map(PathBuf::from);
        match Self::default_path(env_dir) {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphwalkError::io_operation("read config", path.display(), e))?;

        let config = toml::from_str(&content).map_err(|e| GraphwalkError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
