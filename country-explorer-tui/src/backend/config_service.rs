//! Configuration service

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use country_explorer_provider::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::theme::Theme;

/// Environment variable overriding the data endpoint.
pub const ENDPOINT_ENV: &str = "COUNTRY_EXPLORER_ENDPOINT";

const APP_DIR: &str = "country-explorer";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "country-explorer.log";

/// Configuration directory path
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Application configuration
///
/// Every field is optional in the file; missing fields take their default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Data endpoint; `None` means the public REST Countries API
    pub endpoint: Option<String>,
    /// Color theme
    pub theme: Theme,
    /// Log file; `None` means `<config_dir>/country-explorer/country-explorer.log`
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Effective data endpoint.
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Effective log file path.
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| get_config_dir().join(LOG_FILE))
    }

    /// Apply `COUNTRY_EXPLORER_ENDPOINT`, if set.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_endpoint_override(env::var(ENDPOINT_ENV).ok())
    }

    fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(url) = endpoint.filter(|url| !url.trim().is_empty()) {
            self.endpoint = Some(url);
        }
        self
    }
}

/// Configuration service trait
pub trait ConfigService {
    /// Load the configuration.
    ///
    /// A missing file is not an error and yields the defaults.
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// Configuration stored as a JSON file on the local disk
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// Service reading `<config_dir>/country-explorer/config.json`.
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join(CONFIG_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
