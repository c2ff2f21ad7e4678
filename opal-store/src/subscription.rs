//! Per-key subscriber registry and the subscription drop-guard.

use opal_types::StoreKey;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, Weak};
use uuid::Uuid;

/// Callback type invoked with the latest entry value.
///
/// `None` means the key is absent; `Some(&Value::Null)` means it was
/// explicitly cleared.
pub type SubscriberCallback = dyn Fn(Option<&Value>) + Send + Sync;

/// Unique identifier for a registered subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct SubscriberEntry {
    id: SubscriptionId,
    callback: Arc<SubscriberCallback>,
}

/// Registry of subscribers, keyed by the store key they watch.
#[derive(Default)]
pub(crate) struct SubscriberRegistry {
    subscribers: RwLock<HashMap<StoreKey, Vec<SubscriberEntry>>>,
}

impl SubscriberRegistry {
    pub(crate) fn insert(
        &self,
        key: StoreKey,
        callback: Arc<SubscriberCallback>,
    ) -> SubscriptionId {
        let id = SubscriptionId::new();
        let mut map = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        map.entry(key).or_default().push(SubscriberEntry { id, callback });
        id
    }

    pub(crate) fn remove(&self, key: &StoreKey, id: SubscriptionId) {
        let mut map = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(entries) = map.get_mut(key) {
            entries.retain(|entry| entry.id != id);
            if entries.is_empty() {
                map.remove(key);
            }
        }
    }

    /// Snapshots the current subscribers of `key`, so callbacks run without
    /// the registry lock held.
    pub(crate) fn snapshot(&self, key: &StoreKey) -> Vec<(SubscriptionId, Arc<SubscriberCallback>)> {
        let map = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        map.get(key)
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| (entry.id, entry.callback.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Handle to a registered subscriber.
///
/// Dropping the handle deregisters the callback; [`Subscription::cancel`]
/// does the same explicitly. The handle does not keep the store alive.
pub struct Subscription {
    registry: Weak<SubscriberRegistry>,
    key: StoreKey,
    id: SubscriptionId,
}

impl Subscription {
    pub(crate) fn new(registry: Weak<SubscriberRegistry>, key: StoreKey, id: SubscriptionId) -> Self {
        Self { registry, key, id }
    }

    /// The key this subscription watches.
    #[must_use]
    pub fn key(&self) -> &StoreKey {
        &self.key
    }

    /// This subscription's identifier, as reported to the [`crate::ErrorSink`].
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Deregisters the callback. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(&self.key, self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key)
            .field("id", &self.id)
            .finish()
    }
}
