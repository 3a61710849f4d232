//! Error types for the datasieve library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for datasieve operations.
#[derive(Debug, Error)]
pub enum SieveError {
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

    /// Empty file or no columns to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Dataset construction violated a structural invariant.
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// A single analyzer module failed.
    #[error("Analysis module '{module}' failed: {cause}")]
    Module { module: &'static str, cause: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error persisting a report.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type alias for datasieve operations.
pub type Result<T> = std::result::Result<T, SieveError>;
