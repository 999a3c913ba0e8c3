//! Error types for external-capability operations.

use thiserror::Error;

/// Common error type for record sources, sinks, and baseline stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Requested resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// Parse/deserialization error
    #[error("parse error: {0}")]
    ParseError(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Backing store not available
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::IoError(e.to_string())
    }
}
