//! Keyed observable state store with durable persistence.
//!
//! The store is a process-wide mapping from string keys to JSON values.
//! Action modules compute a value and `set`/`merge` it under a well-known
//! key; UI layers subscribe to the same key and re-render from delivered
//! values. Every write is gated on the persistence collaborator, so a
//! resolved write is a durable write.
//!
//! # Guarantees
//!
//! - Per-key program order: writes to one key apply and notify in call
//!   order; subscribers never observe a later write before an earlier one.
//! - No partial application: a failed write leaves the in-memory entry
//!   exactly as it was before the call.
//! - Late subscribers are not starved: `subscribe` delivers the current
//!   value immediately, then every subsequent change.
//! - A panicking subscriber never blocks delivery to the other subscribers
//!   of the same key; panics are routed to the [`ErrorSink`].
//!
//! # Example
//!
//! ```
//! use opal_store::Store;
//! use opal_storage::MemoryPersistence;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> opal_store::StoreResult<()> {
//! let store = Store::open(Arc::new(MemoryPersistence::new())).await?;
//! store.set("isBeta", true).await?;
//! assert_eq!(store.get("isBeta"), Some(serde_json::json!(true)));
//! # Ok(())
//! # }
//! ```

mod error;
mod sink;
mod store;
mod subscription;
pub mod task;

pub use error::{StoreError, StoreResult};
pub use sink::{ErrorSink, TracingErrorSink};
pub use store::Store;
pub use subscription::{Subscription, SubscriptionId};
