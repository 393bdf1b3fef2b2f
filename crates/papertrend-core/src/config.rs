//! Client configuration for papertrend (stored in ~/.config/papertrend/config.toml)
//!
//! Precedence, lowest to highest: built-in defaults, the config file,
//! `PAPERTREND_*` environment variables, command line flags.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TrendError};

pub use types::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS,
    MIN_TIMEOUT_SECONDS,
};

const CONFIG_DIR: &str = "papertrend";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PAPERTREND_CONFIG_DIR";
const BASE_URL_ENV_VAR: &str = "PAPERTREND_BASE_URL";
const TIMEOUT_ENV_VAR: &str = "PAPERTREND_TIMEOUT";

impl ClientConfig {
    /// Location of the config file
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    TrendError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the config file if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        Ok(config.with_env_overrides())
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TrendError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config: ClientConfig = toml::from_str(&content)?;
        config.timeout_seconds = clamp_timeout(config.timeout_seconds);
        debug!(path = %path.display(), "load_config");
        Ok(config)
    }

    /// Apply `PAPERTREND_BASE_URL` and `PAPERTREND_TIMEOUT`
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(BASE_URL_ENV_VAR) {
            if !url.is_empty() {
                self.base_url = url;
            }
        }

        if let Ok(timeout) = std::env::var(TIMEOUT_ENV_VAR) {
            if let Ok(seconds) = timeout.parse::<u64>() {
                self.timeout_seconds = clamp_timeout(seconds);
            }
        }

        self
    }

    /// Base URL without a trailing slash
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn clamp_timeout(seconds: u64) -> u64 {
    seconds.clamp(MIN_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS)
}
