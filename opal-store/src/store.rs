//! The keyed observable store.

use crate::error::StoreResult;
use crate::sink::{ErrorSink, TracingErrorSink};
use crate::subscription::{SubscriberCallback, SubscriberRegistry, Subscription, SubscriptionId};
use opal_storage::Persistence;
use opal_types::{StoreKey, shallow_merge};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Process-wide mapping from string keys to JSON values, with per-key
/// subscriber fan-out and persistence-gated writes.
///
/// Cheap to clone; clones share one underlying store. Construct it once at
/// startup with [`Store::open`] and pass it by reference to action modules
/// and UI consumers — there is no implicit global instance.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    /// Current entry per key. An absent key and a `Value::Null` entry are
    /// different states: null means explicitly cleared.
    cache: RwLock<HashMap<StoreKey, Value>>,
    subscribers: Arc<SubscriberRegistry>,
    /// FIFO gate serializing mutations. Holding it across the persistence
    /// await is what makes "call order" and "apply order" the same thing.
    write_gate: Mutex<()>,
    persistence: Arc<dyn Persistence>,
    error_sink: Arc<dyn ErrorSink>,
}

impl Store {
    /// Opens a store over `persistence`, loading the persisted snapshot.
    ///
    /// Subscriber panics are reported through [`TracingErrorSink`]; use
    /// [`Store::open_with_sink`] to supply a different collaborator.
    pub async fn open(persistence: Arc<dyn Persistence>) -> StoreResult<Self> {
        Self::open_with_sink(persistence, Arc::new(TracingErrorSink)).await
    }

    /// Opens a store with an explicit subscriber [`ErrorSink`].
    pub async fn open_with_sink(
        persistence: Arc<dyn Persistence>,
        error_sink: Arc<dyn ErrorSink>,
    ) -> StoreResult<Self> {
        let entries = persistence.load_all().await?;
        info!("store opened with {} persisted entries", entries.len());
        Ok(Self {
            inner: Arc::new(StoreInner {
                cache: RwLock::new(entries),
                subscribers: Arc::new(SubscriberRegistry::default()),
                write_gate: Mutex::new(()),
                persistence,
                error_sink,
            }),
        })
    }

    /// Replaces the entry at `key` unconditionally.
    ///
    /// Resolves only after the value is durably persisted and every current
    /// subscriber of `key` has been notified. On error nothing is committed.
    pub async fn set(&self, key: impl Into<StoreKey>, value: impl Serialize) -> StoreResult<()> {
        let key = key.into();
        let value = serde_json::to_value(value)?;
        let _gate = self.inner.write_gate.lock().await;
        self.inner.persistence.persist(&key, &value).await?;
        self.inner.commit_and_notify(&key, value);
        Ok(())
    }

    /// Shallow-merges `partial` into the entry at `key`.
    ///
    /// Object partials overwrite only the top-level fields they name (a null
    /// field removes that field); any other partial replaces the entry, so
    /// merging a boolean or string behaves exactly like [`Store::set`], and
    /// merging null clears. Sequential merges to one key apply in call
    /// order — last writer wins per field, ordered by call sequence.
    pub async fn merge(&self, key: impl Into<StoreKey>, partial: impl Serialize) -> StoreResult<()> {
        let key = key.into();
        let partial = serde_json::to_value(partial)?;
        let _gate = self.inner.write_gate.lock().await;
        let current = self.inner.read_entry(&key);
        let merged = shallow_merge(current, partial);
        self.inner.persistence.persist(&key, &merged).await?;
        self.inner.commit_and_notify(&key, merged);
        Ok(())
    }

    /// Clears the entry at `key`: the entry becomes `Value::Null`.
    ///
    /// Cleared is distinct from never-set; subscribers observe the
    /// transition to null, and the null is persisted.
    pub async fn clear(&self, key: impl Into<StoreKey>) -> StoreResult<()> {
        let key = key.into();
        let _gate = self.inner.write_gate.lock().await;
        self.inner.persistence.persist(&key, &Value::Null).await?;
        self.inner.commit_and_notify(&key, Value::Null);
        Ok(())
    }

    /// Replaces several entries under a single gate hold.
    ///
    /// The batch persists as one logical write; no other mutation
    /// interleaves between the individual entries.
    pub async fn multi_set(&self, entries: Vec<(StoreKey, Value)>) -> StoreResult<()> {
        let _gate = self.inner.write_gate.lock().await;
        self.inner.persistence.persist_many(&entries).await?;
        for (key, value) in entries {
            self.inner.commit_and_notify(&key, value);
        }
        Ok(())
    }

    /// Snapshot read of the current entry.
    ///
    /// `None` means the key is absent; `Some(Value::Null)` means cleared.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Registers `callback` against `key` and immediately delivers the
    /// current value, so late subscribers are not starved. The callback then
    /// fires on every subsequent change until the returned [`Subscription`]
    /// is cancelled or dropped.
    ///
    /// Callbacks run synchronously on the writer's task while the write gate
    /// is held. A callback must not block on another store write — a write
    /// to any key would deadlock on the gate; spawn (e.g. through
    /// [`crate::task::detach`]) instead.
    pub fn subscribe(
        &self,
        key: impl Into<StoreKey>,
        callback: impl Fn(Option<&Value>) + Send + Sync + 'static,
    ) -> Subscription {
        let key = key.into();
        let callback: Arc<SubscriberCallback> = Arc::new(callback);
        let id = self.inner.subscribers.insert(key.clone(), callback.clone());
        debug!(%key, subscription = %id, "subscriber registered");

        // Initial delivery happens after registration, so a change landing
        // in between is observed rather than lost; it may then coalesce
        // with this first callback.
        let current = self.get(key.as_str());
        self.inner.deliver(&key, id, &callback, current.as_ref());

        Subscription::new(Arc::downgrade(&self.inner.subscribers), key, id)
    }

    /// Flushes the persistence collaborator and consumes the store.
    ///
    /// Clones of this store remain usable; teardown is cooperative, not
    /// forced.
    pub async fn close(self) -> StoreResult<()> {
        let _gate = self.inner.write_gate.lock().await;
        self.inner.persistence.flush().await?;
        info!("store closed");
        Ok(())
    }
}

impl StoreInner {
    fn read_entry(&self, key: &StoreKey) -> Option<Value> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Commits `value` to the cache and notifies every subscriber of `key`.
    /// Caller holds the write gate, so notification order is apply order.
    fn commit_and_notify(&self, key: &StoreKey, value: Value) {
        {
            let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
            cache.insert(key.clone(), value.clone());
        }
        for (id, callback) in self.subscribers.snapshot(key) {
            self.deliver(key, id, &callback, Some(&value));
        }
    }

    /// Invokes one callback, isolating a panic so the remaining subscribers
    /// of the key still get this notification.
    fn deliver(
        &self,
        key: &StoreKey,
        id: SubscriptionId,
        callback: &Arc<SubscriberCallback>,
        value: Option<&Value>,
    ) {
        if let Err(panic) = catch_unwind(AssertUnwindSafe(|| callback.as_ref()(value))) {
            self.error_sink
                .subscriber_panicked(key, id, &panic_message(panic.as_ref()));
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "subscriber panicked".to_string()
    }
}
