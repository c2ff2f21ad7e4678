//! App-version flags: update available, update required, beta membership.

use opal_store::{Store, StoreResult};
use opal_types::keys;

/// Flags that a newer app version is available for download.
pub async fn trigger_update_available(store: &Store) -> StoreResult<()> {
    store.set(keys::UPDATE_AVAILABLE, true).await
}

/// Flags that the running version is too old to keep talking to the server;
/// the UI blocks on an upgrade prompt while this is true.
pub async fn alert_update_required(store: &Store) -> StoreResult<()> {
    store.set(keys::UPDATE_REQUIRED, true).await
}

/// Records whether the current user is in the beta program.
pub async fn set_is_app_in_beta(store: &Store, is_beta: bool) -> StoreResult<()> {
    store.set(keys::IS_BETA, is_beta).await
}
