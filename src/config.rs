use anyhow::{Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::script::parse_duration;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "EVENTCAL_CONFIG";

/// Global configuration at ~/.config/eventcal/config.toml
///
/// Every field has a default, so a missing file is the same as an empty one.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Duration for create steps that give neither a duration nor an end
    /// (only used when `fill_missing_duration` is set)
    pub default_duration: String,

    /// Fill in `default_duration` instead of rejecting the step
    pub fill_missing_duration: bool,

    /// Allow overlapping events in every step
    pub allow_overlapping: bool,

    /// Log filter used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_duration: "1h".to_string(),
            fill_missing_duration: false,
            allow_overlapping: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// `default_duration` when filling is enabled, otherwise None.
    pub fn fill_duration(&self) -> Result<Option<Duration>> {
        if !self.fill_missing_duration {
            return Ok(None);
        }
        parse_duration(&self.default_duration)
            .map(Some)
            .context("Invalid default_duration in config")
    }
}

/// Get the config directory path (~/.config/eventcal)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("eventcal");
    Ok(config_dir)
}

/// Get the config file path ($EVENTCAL_CONFIG or ~/.config/eventcal/config.toml)
pub fn config_path() -> Result<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(config_dir()?.join("config.toml")),
    }
}

/// Load config from the default location, falling back to defaults.
pub fn load_config() -> Result<Config> {
    load_from(&config_path()?)
}

pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))
}
