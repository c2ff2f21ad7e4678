//! Room-members search phrase, persisted across screens.

use opal_store::{Store, StoreResult};
use opal_types::keys;

/// Persists the search phrase from the room-members search input.
pub async fn update_user_search_phrase(store: &Store, phrase: &str) -> StoreResult<()> {
    store.merge(keys::ROOM_MEMBERS_USER_SEARCH_PHRASE, phrase).await
}

/// Resets the phrase to an empty string (not to absent — screens coming back
/// expect a string to render).
pub async fn clear_user_search_phrase(store: &Store) -> StoreResult<()> {
    store.merge(keys::ROOM_MEMBERS_USER_SEARCH_PHRASE, "").await
}
