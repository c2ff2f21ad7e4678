//! Error-reporting collaborator for subscriber failures.

use crate::subscription::SubscriptionId;
use opal_types::StoreKey;
use tracing::error;

/// External collaborator that receives isolated subscriber failures.
///
/// A subscriber callback that panics must not abort delivery to the other
/// subscribers of its key, so the panic is caught and handed here instead
/// of unwinding through the triggering write.
pub trait ErrorSink: Send + Sync {
    /// Called once per caught subscriber panic.
    fn subscriber_panicked(&self, key: &StoreKey, subscription: SubscriptionId, message: &str);
}

/// Default sink: reports through `tracing::error!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn subscriber_panicked(&self, key: &StoreKey, subscription: SubscriptionId, message: &str) {
        error!(%key, %subscription, "subscriber panicked: {message}");
    }
}
