//! In-memory persistence backend.

use crate::{Persistence, PersistenceResult};
use async_trait::async_trait;
use opal_types::StoreKey;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A persistence backend that holds entries in memory only.
///
/// Nothing survives process teardown; useful for tests and for stores that
/// deliberately opt out of durability.
#[derive(Default)]
pub struct MemoryPersistence {
    entries: RwLock<HashMap<StoreKey, Value>>,
}

impl MemoryPersistence {
    /// Creates an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-seeded with entries, as if a previous process
    /// had persisted them.
    #[must_use]
    pub fn with_entries(entries: HashMap<StoreKey, Value>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl Persistence for MemoryPersistence {
    async fn load_all(&self) -> PersistenceResult<HashMap<StoreKey, Value>> {
        Ok(self.entries.read().await.clone())
    }

    async fn persist(&self, key: &StoreKey, value: &Value) -> PersistenceResult<()> {
        self.entries.write().await.insert(key.clone(), value.clone());
        Ok(())
    }

    async fn persist_many(&self, entries: &[(StoreKey, Value)]) -> PersistenceResult<()> {
        let mut guard = self.entries.write().await;
        for (key, value) in entries {
            guard.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}
