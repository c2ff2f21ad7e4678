//! Fire-and-forget write submission.
//!
//! Action modules often do not care when a write completes — the UI reacts
//! through its subscription, not through the returned future. Instead of
//! silently discarding the completion signal, callers submit the write here;
//! the unobserved-failure policy is log-and-drop: a failed detached write is
//! reported once through `tracing::warn!` and not retried.

use crate::error::StoreResult;
use std::future::Future;
use tracing::warn;

/// Spawns `write` on the current runtime, logging and dropping any failure.
///
/// `operation` names the write in the log line (e.g. `"session.update"`).
/// The mutation still applies even though no caller observes the result;
/// callers that need to react to failure should await the store call
/// directly instead.
pub fn detach<F>(operation: &'static str, write: F)
where
    F: Future<Output = StoreResult<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(err) = write.await {
            warn!("detached write {operation} failed: {err}");
        }
    });
}
