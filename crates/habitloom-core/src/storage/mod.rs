//! Persistence gateway: JSON collections plus TOML configuration.
//!
//! The engine itself never does I/O; the host loads collections through
//! [`JsonStore`], calls engine functions, and saves explicitly after a
//! mutation. Keys are opaque collection names; each collection is one
//! JSON file, decoded all-or-nothing.

mod config;

pub use config::Config;

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// Collection key for the habit list.
pub const HABITS_KEY: &str = "habits";
/// Collection key for the task list.
pub const TASKS_KEY: &str = "tasks";
/// Collection key for the completion log.
pub const LOG_KEY: &str = "log";

/// Returns `~/.config/habitloom[-dev]/` based on HABITLOOM_ENV.
///
/// Set HABITLOOM_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABITLOOM_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitloom-dev")
    } else {
        base_dir.join("habitloom")
    };

    fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}

/// JSON-file persistence gateway: one file per collection key.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open the store at the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self { dir: data_dir()? })
    }

    /// Open the store at an explicit directory (tests, custom hosts).
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Load a collection by key.
    ///
    /// An absent file yields the default. A file that fails to decode is
    /// discarded as a whole and the default returned, with a warning:
    /// the engine must never see a partially-decoded collection.
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return T::default(),
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!(
                    "discarding malformed collection '{key}' at {}: {e}",
                    path.display()
                );
                T::default()
            }
        }
    }

    /// Save a collection by key.
    ///
    /// Writes to a temporary file first and renames over the target, so
    /// a crash mid-write leaves the previous collection intact.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::WriteFailed {
            path: self.dir.clone(),
            source,
        })?;
        let json = serde_json::to_string_pretty(value).map_err(|source| {
            StorageError::EncodeFailed {
                key: key.to_string(),
                source,
            }
        })?;
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, json).map_err(|source| StorageError::WriteFailed {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::WriteFailed { path, source })?;
        Ok(())
    }
}
