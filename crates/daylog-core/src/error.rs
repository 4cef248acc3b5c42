//! Error types for Daylog core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages.

use thiserror::Error;

/// Result type alias for Daylog operations.
pub type Result<T> = std::result::Result<T, DaylogError>;

/// Core error type for Daylog operations.
#[derive(Debug, Error)]
pub enum DaylogError {
    /// Argument outside its accepted domain (page size, rating, ids)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for DaylogError {
    fn from(err: std::io::Error) -> Self {
        DaylogError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for DaylogError {
    fn from(err: serde_json::Error) -> Self {
        DaylogError::Validation(err.to_string())
    }
}

impl From<rusqlite::Error> for DaylogError {
    fn from(err: rusqlite::Error) -> Self {
        DaylogError::Storage(format!("SQLite error: {}", err))
    }
}
