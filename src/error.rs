//! Error types and Result aliases for cvterm

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cvterm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cvterm
#[derive(Debug, Error)]
pub enum Error {
    // === Command errors ===
    /// A handler rejected its arguments in a way it could not report itself
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },

    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// Unknown theme name
    #[error("Theme '{theme_name}' not found")]
    ThemeNotFound { theme_name: String },

    // === Content errors ===
    /// Failed to load a CV dataset file
    #[error("Failed to load dataset from '{}': {reason}", path.display())]
    DatasetLoadFailed { path: PathBuf, reason: String },

    /// Failed to read or write the preference store
    #[error("Preference store error at '{}': {reason}", path.display())]
    PreferencesFailed { path: PathBuf, reason: String },

    // === I/O errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
