//! Generic form state and drafts.
//!
//! Forms are dynamic: each form owns a key, and its draft lives under the
//! derived `<form>Draft` key so submit/reset can drop the draft without
//! touching submission state. Field clears go through merge-with-null so
//! sibling state (e.g. `isLoading`) survives.

use opal_store::{Store, StoreResult};
use opal_types::StoreKey;
use serde_json::{Value, json};
use std::collections::HashMap;

/// Per-field validation errors: field id to message.
pub type ErrorFields = HashMap<String, String>;

/// Marks the form as submitting (or done submitting).
pub async fn set_is_loading(store: &Store, form: &StoreKey, is_loading: bool) -> StoreResult<()> {
    store.merge(form.clone(), json!({"isLoading": is_loading})).await
}

/// Replaces the form-level error message.
pub async fn set_errors(store: &Store, form: &StoreKey, errors: &str) -> StoreResult<()> {
    store.merge(form.clone(), json!({"errors": errors})).await
}

/// Removes the form-level error message, leaving other form state intact.
pub async fn clear_errors(store: &Store, form: &StoreKey) -> StoreResult<()> {
    store.merge(form.clone(), json!({"errors": null})).await
}

/// Replaces the per-field validation errors.
pub async fn set_error_fields(
    store: &Store,
    form: &StoreKey,
    error_fields: &ErrorFields,
) -> StoreResult<()> {
    store.merge(form.clone(), json!({"errorFields": error_fields})).await
}

/// Removes the per-field validation errors.
pub async fn clear_error_fields(store: &Store, form: &StoreKey) -> StoreResult<()> {
    store.merge(form.clone(), json!({"errorFields": null})).await
}

/// Merges draft input values under the form's draft key, so half-filled
/// forms survive navigation (and restarts — drafts persist like any entry).
pub async fn set_draft_values(
    store: &Store,
    form: &StoreKey,
    draft_values: Value,
) -> StoreResult<()> {
    store.merge(form.draft(), draft_values).await
}

/// Drops the saved draft entirely.
pub async fn clear_draft_values(store: &Store, form: &StoreKey) -> StoreResult<()> {
    store.clear(form.draft()).await
}
