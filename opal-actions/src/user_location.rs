//! The user's last reported geographic location.

use opal_store::{Store, StoreResult};
use opal_types::keys;
use serde::{Deserialize, Serialize};

/// Coordinates stored under [`keys::USER_LOCATION`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub longitude: f64,
    pub latitude: f64,
}

/// Sets the longitude and latitude of the user's current location.
pub async fn set_user_location(store: &Store, location: UserLocation) -> StoreResult<()> {
    store.set(keys::USER_LOCATION, location).await
}

/// Clears the stored location.
pub async fn clear_user_location(store: &Store) -> StoreResult<()> {
    store.clear(keys::USER_LOCATION).await
}
