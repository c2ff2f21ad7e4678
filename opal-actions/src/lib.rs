//! Typed action modules for the Opal state store.
//!
//! Actions are the only writers of the well-known keys: each module computes
//! a value and `set`s or `merge`s it under its key; UI layers subscribe to
//! the same key and react to delivered values. Actions never read back what
//! they wrote and have no effect beyond the key they target.
//!
//! Every action takes the [`Store`](opal_store::Store) by reference — there
//! is no module-level store instance — and returns the write's
//! [`StoreResult`](opal_store::StoreResult). Callers that do not care about
//! completion submit the call through [`opal_store::task::detach`].

pub mod app_update;
pub mod forms;
pub mod fullscreen;
pub mod network;
pub mod persisted_requests;
pub mod search_phrase;
pub mod selection_mode;
pub mod session;
pub mod share;
pub mod user_location;
