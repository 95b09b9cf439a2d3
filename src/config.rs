//! Configuration management and validation.
//!
//! Provides the client configuration (endpoint, timeout, retry policy)
//! with TOML file loading and sensible defaults for the public IAEA
//! EXFOR Web API.

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_RETRY_ATTEMPTS, USER_AGENT,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Client configuration for the EXFOR Web API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the EXFOR service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum attempts per request before surfacing an HTTP error
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_retries() -> usize {
    MAX_RETRY_ATTEMPTS
}

fn default_user_agent() -> String {
    USER_AGENT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load configuration, preferring an explicit file, then the default
    /// location, then built-in defaults.
    ///
    /// An explicitly provided path must exist; the default location
    /// (~/.config/exfor_processor/config.toml) is used only if present.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        if let Some(default_path) = Self::default_config_path() {
            if default_path.exists() {
                return Self::from_file(&default_path);
            }
        }

        debug!("No config file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config file {}", path.display()), e))?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })?;

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Default config file location under the user config directory
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("exfor_processor").join("config.toml"))
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::configuration("base_url cannot be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(Error::configuration("timeout_secs must be greater than 0"));
        }

        if self.max_retries == 0 {
            return Err(Error::configuration("max_retries must be greater than 0"));
        }

        Ok(())
    }
}
