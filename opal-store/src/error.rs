//! Error types for store operations.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can fail a `set`/`merge`/`clear` call.
///
/// Either way the in-memory entry is unchanged from before the call; the
/// caller decides on retry or user messaging. The store never retries on
/// its own.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The value could not be converted to a JSON tree.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The durable write failed; nothing was committed.
    #[error("persistence error: {0}")]
    Persistence(#[from] opal_storage::PersistenceError),
}
