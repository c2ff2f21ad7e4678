//! The persisted request queue.
//!
//! Write requests issued while offline are queued under
//! [`keys::PERSISTED_REQUESTS`] and replayed after reconnect. Queue order is
//! part of the data: requests must replay in the order the user acted, so
//! removal only ever takes the first matching request.
//!
//! The handle keeps a read snapshot of the queue, fed by its own
//! subscription, so hot-path reads (`get_all`) never touch the store.

use opal_store::{Store, StoreResult, Subscription};
use opal_types::keys;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// A queued write request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Server command name.
    pub command: String,

    /// Command parameters.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,

    /// Whether the request must go over the secure endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_use_secure: Option<bool>,
}

/// Handle over the persisted request queue.
///
/// Owns a subscription to the queue's key; dropping the handle drops the
/// subscription and freezes the snapshot.
///
/// The handle assumes it is the queue's single writer: `save`, `remove`, and
/// `update` read the snapshot and then write the whole queue back, so a
/// second handle (or a direct write to the key) racing in between can lose
/// an enqueue. Share one handle instead of creating several.
pub struct PersistedRequests {
    store: Store,
    snapshot: Arc<RwLock<Vec<Request>>>,
    _subscription: Subscription,
}

impl PersistedRequests {
    /// Attaches to `store`, seeding the snapshot from the current entry.
    #[must_use]
    pub fn new(store: &Store) -> Self {
        let snapshot: Arc<RwLock<Vec<Request>>> = Arc::new(RwLock::new(Vec::new()));
        let writer = snapshot.clone();
        let subscription = store.subscribe(keys::PERSISTED_REQUESTS, move |value: Option<&Value>| {
            let requests = value
                .map(|v| serde_json::from_value(v.clone()).unwrap_or_default())
                .unwrap_or_default();
            *writer.write().unwrap_or_else(PoisonError::into_inner) = requests;
        });
        Self {
            store: store.clone(),
            snapshot,
            _subscription: subscription,
        }
    }

    /// Current queue contents, in replay order.
    #[must_use]
    pub fn get_all(&self) -> Vec<Request> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Appends requests to the queue, skipping any that are already queued.
    pub async fn save(&self, to_persist: Vec<Request>) -> StoreResult<()> {
        let mut queue = self.get_all();
        let fresh: Vec<Request> = to_persist
            .into_iter()
            .filter(|request| !queue.contains(request))
            .collect();
        debug!("queueing {} new persisted requests", fresh.len());
        queue.extend(fresh);
        self.store.set(keys::PERSISTED_REQUESTS, queue).await
    }

    /// Removes the first request equal to `request`.
    ///
    /// Only the first match: removing all matches could reorder the replay
    /// relative to what the user actually did.
    pub async fn remove(&self, request: &Request) -> StoreResult<()> {
        let mut queue = self.get_all();
        let Some(index) = queue.iter().position(|queued| queued == request) else {
            return Ok(());
        };
        queue.remove(index);
        self.store.set(keys::PERSISTED_REQUESTS, queue).await
    }

    /// Replaces the request at `index` (e.g. after enriching its payload).
    pub async fn update(&self, index: usize, request: Request) -> StoreResult<()> {
        let mut queue = self.get_all();
        if index >= queue.len() {
            return Ok(());
        }
        queue[index] = request;
        self.store.set(keys::PERSISTED_REQUESTS, queue).await
    }

    /// Empties the queue.
    pub async fn clear(&self) -> StoreResult<()> {
        self.store
            .set(keys::PERSISTED_REQUESTS, Vec::<Request>::new())
            .await
    }
}
