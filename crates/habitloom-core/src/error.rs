//! Core error types for habitloom-core.
//!
//! The engine itself is pure and total over its documented input domain,
//! so the taxonomy is small: validation failures that callers must reject
//! before construction, and storage/configuration failures at the edges.
//! Unknown item references are deliberately *not* errors; they are
//! logged no-ops (see the habit log and the CLI command handlers).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitloom-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Persistence gateway errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Could not resolve or create the data directory
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),

    /// Writing a collection file failed
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding a collection to JSON failed
    #[error("Failed to encode collection '{key}': {source}")]
    EncodeFailed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A weekday-based rule reached persistence with no days selected
    #[error("Recurrence rule has an empty weekday set")]
    EmptyDaySet,

    /// Weekday numbers must stay within 1..=7 (1 = Sunday)
    #[error("Weekday {0} out of range (expected 1..=7, 1 = Sunday)")]
    WeekdayOutOfRange(u8),

    /// Interval rules need at least one day between occurrences
    #[error("Recurrence interval must be at least 1")]
    ZeroInterval,

    /// A weekly quota of zero can never be satisfied
    #[error("Weekly quota must be at least 1")]
    ZeroWeeklyQuota,

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
