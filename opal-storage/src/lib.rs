//! Persistence boundary for the Opal state store.
//!
//! The store treats durability as a collaborator: every committed write is
//! handed to a [`Persistence`] implementation, and the write operation only
//! resolves once that implementation reports the value durably applied.
//!
//! Two backends are provided:
//! - [`MemoryPersistence`] — keeps everything in memory; for tests and
//!   ephemeral stores.
//! - [`FilePersistence`] — a single JSON snapshot file, rewritten atomically
//!   (write to a temp file, then rename) on every persisted write.

mod error;
mod file;
mod memory;

pub use error::{PersistenceError, PersistenceResult};
pub use file::FilePersistence;
pub use memory::MemoryPersistence;

use async_trait::async_trait;
use opal_types::StoreKey;
use serde_json::Value;
use std::collections::HashMap;

/// A durable key-value collaborator for the store.
///
/// Implementations must make `persist` atomic per call: either the new value
/// for the key survives a process restart, or the previous one does. The
/// store relies on this to guarantee "no partial application" on failure.
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Loads every persisted entry, called once when the store opens.
    async fn load_all(&self) -> PersistenceResult<HashMap<StoreKey, Value>>;

    /// Durably applies a single entry. A `Value::Null` entry is a cleared
    /// key and must be persisted as such (cleared is distinct from absent).
    async fn persist(&self, key: &StoreKey, value: &Value) -> PersistenceResult<()>;

    /// Durably applies several entries as one logical write.
    ///
    /// The default applies them in order, stopping at the first failure;
    /// backends that can batch more cheaply should override this.
    async fn persist_many(&self, entries: &[(StoreKey, Value)]) -> PersistenceResult<()> {
        for (key, value) in entries {
            self.persist(key, value).await?;
        }
        Ok(())
    }

    /// Flushes any buffered state; called when the store closes.
    async fn flush(&self) -> PersistenceResult<()> {
        Ok(())
    }
}
