//! Fullscreen attachment/video visibility flag.

use opal_store::{Store, StoreResult};
use opal_types::keys;

/// Records whether something is currently shown fullscreen.
pub async fn set_fullscreen_visibility(store: &Store, is_visible: bool) -> StoreResult<()> {
    store.merge(keys::FULLSCREEN_VISIBILITY, is_visible).await
}
