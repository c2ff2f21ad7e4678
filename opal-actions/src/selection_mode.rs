//! Mobile multi-selection mode flag.

use opal_store::{Store, StoreResult};
use opal_types::keys;

/// Enters multi-selection mode on mobile list screens.
pub async fn turn_on_mobile_selection_mode(store: &Store) -> StoreResult<()> {
    store.merge(keys::MOBILE_SELECTION_MODE, true).await
}

/// Leaves multi-selection mode.
pub async fn turn_off_mobile_selection_mode(store: &Store) -> StoreResult<()> {
    store.merge(keys::MOBILE_SELECTION_MODE, false).await
}
