//! Configuration management.
//!
//! Settings come from an optional TOML file (`--config`, or
//! `hal-harvest.toml` in the working directory, or
//! `~/.config/hal-harvest/config.toml`) with `HAL_HARVEST_*` environment
//! variables layered on top.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::hal::HAL_API_BASE;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HAL API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Output locations
    #[serde(default)]
    pub output: OutputConfig,
}

/// HAL API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    HAL_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Output locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for exported CSV files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory for the dashboard page and chart files
    #[serde(default = "default_html_dir")]
    pub html_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            html_dir: default_html_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_html_dir() -> PathBuf {
    PathBuf::from("html")
}

impl Config {
    /// Save the configuration as pretty TOML
    pub fn save(&self, path: &PathBuf) -> Result<(), std::io::Error> {
        let content = toml::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, content)
    }
}

/// Load configuration from a file, with environment overrides
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("HAL_HARVEST"))
        .build()?;

    settings.try_deserialize()
}

/// Look for a config file in the default locations
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("hal-harvest.toml");
    if local.exists() {
        return Some(local);
    }

    if let Ok(home) = std::env::var("HOME") {
        let user = PathBuf::from(home)
            .join(".config")
            .join("hal-harvest")
            .join("config.toml");
        if user.exists() {
            return Some(user);
        }
    }

    None
}
