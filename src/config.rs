use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::fuels::FuelType;

/// Application settings persisted in config.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Language code: en-in, gu-in, or "auto" for system detection.
    pub language: String,
    /// Fuel preselected when the calculator opens.
    pub default_fuel: FuelType,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            default_fuel: FuelType::Diesel,
        }
    }
}

/// Errors while loading or saving the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// File I/O error
    Io(std::io::Error),
    /// TOML deserialization error
    Serde(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config file I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// Loads config.toml, creating it with defaults on first run.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// Writes the settings back to config.toml.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
