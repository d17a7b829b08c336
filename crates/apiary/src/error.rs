//! Error types for the Apiary library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Apiary operations.
#[derive(Debug, Error)]
pub enum ApiaryError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Configuration error (missing columns, bad policy fields).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Nothing to curate: no source words survived loading.
    #[error("Empty corpus: {0}")]
    EmptyCorpus(String),

    /// An artifact failed a validation assertion.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl ApiaryError {
    /// Wrap an IO error with the offending path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ApiaryError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for Apiary operations.
pub type Result<T> = std::result::Result<T, ApiaryError>;
