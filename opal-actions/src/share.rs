//! Share-extension flow state.
//!
//! A natively shared file moves through several screens before it becomes a
//! message; its properties and the chosen recipient live in the store for
//! the duration of the flow.

use opal_store::{Store, StoreResult};
use opal_types::{StoreKey, keys};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Properties of a natively shared file, stored under
/// [`keys::SHARE_TEMP_FILE`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedFile {
    /// Local path of the shared file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Transcription or extracted text, filled in later in the flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_text: Option<String>,
}

/// Path and type of a file going through the share-file flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedFileData {
    /// Shared file path.
    pub content: String,

    /// Shared file type.
    pub mime_type: String,
}

/// A share recipient who has no account yet, stored under
/// [`keys::SHARE_UNKNOWN_USER_DETAILS`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownUserDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(rename = "accountID", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
}

/// Clears stale data from a previous share at the start of the flow.
pub async fn clear_share_data(store: &Store) -> StoreResult<()> {
    store
        .multi_set(vec![
            (StoreKey::new(keys::SHARE_TEMP_FILE), Value::Null),
            (StoreKey::new(keys::SHARE_UNKNOWN_USER_DETAILS), Value::Null),
        ])
        .await
}

/// Stores the shared file's properties for processing across the screens.
pub async fn add_temp_share_file(store: &Store, file: SharedFile) -> StoreResult<()> {
    store.merge(keys::SHARE_TEMP_FILE, file).await
}

/// Stores a previously validated file object for further use.
pub async fn add_validated_share_file(store: &Store, file: Value) -> StoreResult<()> {
    store.set(keys::VALIDATED_FILE_OBJECT, file).await
}

/// Stores the selected recipient's details when their account doesn't exist.
pub async fn save_unknown_user_details(store: &Store, user: UnknownUserDetails) -> StoreResult<()> {
    store.merge(keys::SHARE_UNKNOWN_USER_DETAILS, user).await
}

/// Clears the unknown-recipient details (merge-null clears the entry).
pub async fn clear_unknown_user_details(store: &Store) -> StoreResult<()> {
    store.merge(keys::SHARE_UNKNOWN_USER_DETAILS, Value::Null).await
}

/// Records who will receive the shared file. The receiver is the target
/// report's JSON; this module does not interpret it.
pub async fn set_share_file_receiver(store: &Store, receiver: Value) -> StoreResult<()> {
    store.set(keys::SHARE_FILE, serde_json::json!({"receiver": receiver})).await
}

/// Records the file being shared in the share-file flow.
pub async fn set_share_file_data(store: &Store, file_data: SharedFileData) -> StoreResult<()> {
    store
        .set(keys::SHARE_FILE, serde_json::json!({"fileData": file_data}))
        .await
}

/// Resets the share-file flow.
pub async fn clear_share_file(store: &Store) -> StoreResult<()> {
    store.clear(keys::SHARE_FILE).await
}
