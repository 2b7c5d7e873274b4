//! Error types for chatprep.
//!
//! The core text operations are total; errors only arise at the
//! configuration boundary.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for chatprep operations.
#[derive(Error, Debug)]
pub enum ChatprepError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for chatprep operations.
pub type Result<T> = std::result::Result<T, ChatprepError>;

impl From<serde_json::Error> for ChatprepError {
    fn from(err: serde_json::Error) -> Self {
        ChatprepError::Serialization(err.to_string())
    }
}
