//! Session state: auth tokens and the signed-in user.
//!
//! Tokens and user details arrive from different server responses, so each
//! updater merges only the fields it owns and leaves the rest of the session
//! untouched.

use opal_store::{Store, StoreResult};
use opal_types::{epoch_millis, keys};
use serde::{Deserialize, Serialize};

/// The current user session, stored under [`keys::SESSION`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_auth_token: Option<String>,

    /// Milliseconds since the epoch at which the tokens were issued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<i64>,

    #[serde(rename = "accountID", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Merges fresh auth tokens into the session, stamping their creation date.
pub async fn update_session_auth_tokens(
    store: &Store,
    auth_token: Option<String>,
    encrypted_auth_token: Option<String>,
) -> StoreResult<()> {
    store
        .merge(
            keys::SESSION,
            Session {
                auth_token,
                encrypted_auth_token,
                creation_date: Some(epoch_millis()),
                ..Default::default()
            },
        )
        .await
}

/// Merges the signed-in user's identity into the session.
pub async fn update_session_user(
    store: &Store,
    account_id: Option<i64>,
    email: Option<String>,
) -> StoreResult<()> {
    store
        .merge(
            keys::SESSION,
            Session {
                account_id,
                email,
                ..Default::default()
            },
        )
        .await
}

/// Clears the session on sign-out.
pub async fn clear_session(store: &Store) -> StoreResult<()> {
    store.clear(keys::SESSION).await
}
