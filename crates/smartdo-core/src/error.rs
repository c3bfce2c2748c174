//! Core error types for smartdo-core.
//!
//! Every error produced by the task core is recoverable: callers report it,
//! re-prompt, and retry. No operation mutates the task store before it has
//! validated its inputs.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for smartdo-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A raw task field failed to parse or normalize
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// A 1-based task index outside the active list
    #[error("Task number {index} out of range (expected 1..={len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Operation requires at least one task
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Whether the caller should re-prompt for the offending field.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoreError::InvalidInput { .. })
    }
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
