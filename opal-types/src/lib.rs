//! Core type definitions for Opal.
//!
//! This crate defines the fundamental, application-agnostic types used by the
//! state store:
//! - `StoreKey`: an opaque string identifying a named slot of state
//! - The well-known key namespace owned by the application (`keys`)
//! - The shallow-merge policy over JSON values (`merge`)
//!
//! Domain-specific payload types (session, network state, share flow, etc.)
//! belong in `opal-actions`, not here.

mod key;
pub mod keys;
mod merge;

pub use key::StoreKey;
pub use merge::shallow_merge;

/// Current wall-clock time as milliseconds since the Unix epoch.
///
/// Used for fields like the session `creationDate`, which the application
/// stores as an integer millisecond timestamp.
#[must_use]
pub fn epoch_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
