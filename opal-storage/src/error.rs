//! Error types for the persistence boundary.

use thiserror::Error;

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors that can occur while persisting or loading store state.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The on-disk snapshot exists but is not in the expected shape.
    #[error("corrupt snapshot: {0}")]
    Corrupt(String),
}
