//! TOML-based application configuration.
//!
//! Stores host preferences that shape how the engine is driven:
//! - which day starts the week (weekly windows, weekly quotas)
//! - whether listings include archived habits
//!
//! Configuration is stored at `~/.config/habitloom/config.toml`.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/habitloom/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// First day of the week, 1 = Sunday .. 7 = Saturday. Drives the
    /// `ThisWeek` filter and weekly quota windows.
    #[serde(default = "default_week_start")]
    pub week_start: u8,
    /// Include archived habits in listings.
    #[serde(default)]
    pub show_archived: bool,
}

fn default_week_start() -> u8 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_start: default_week_start(),
            show_archived: false,
        }
    }
}

impl Config {
    /// Path of the configuration file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config: Config =
            toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.validate()?;
        let path = Self::path()?;
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=7).contains(&self.week_start) {
            return Err(ConfigError::InvalidValue {
                key: "week_start".to_string(),
                message: format!("{} out of range (expected 1..=7)", self.week_start),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_the_week_on_sunday() {
        let config = Config::default();
        assert_eq!(config.week_start, 1);
        assert!(!config.show_archived);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = toml::from_str("week_start = 2\n").unwrap();
        assert_eq!(config.week_start, 2);
        assert!(!config.show_archived);
    }

    #[test]
    fn toml_round_trip() {
        let config = Config {
            week_start: 2,
            show_archived: true,
        };
        let raw = toml::to_string_pretty(&config).unwrap();
        let decoded: Config = toml::from_str(&raw).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn week_start_is_range_checked() {
        let config = Config {
            week_start: 0,
            show_archived: false,
        };
        assert!(config.validate().is_err());
        let config = Config {
            week_start: 8,
            show_archived: false,
        };
        assert!(config.validate().is_err());
    }
}
