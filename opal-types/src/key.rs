//! The store key type.
//!
//! Keys are opaque strings. The store itself attaches no meaning to them;
//! the application owns the namespace (see the `keys` module).

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// An opaque string identifying a named slot of application state.
///
/// Two logical state slots never share a key; uniqueness is a property of the
/// application's key namespace, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreKey(String);

impl StoreKey {
    /// Creates a key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the draft key for a form key (`<form>Draft`).
    ///
    /// Form drafts live under a sibling key so that submitting or resetting a
    /// form can clear the draft without touching the form's own state.
    #[must_use]
    pub fn draft(&self) -> StoreKey {
        StoreKey(format!("{}Draft", self.0))
    }
}

impl From<&str> for StoreKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StoreKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for StoreKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
