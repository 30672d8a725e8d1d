//! Lightweight preference storage contracts and adapters.
//!
//! Preferences are small JSON documents stored as text under a string key. The browser adapter
//! writes them to `localStorage`, which is synchronous, so the contract is synchronous too.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors surfaced by [`PrefsStore`] implementations and the typed helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrefsError {
    /// The backing storage is not reachable on this host (private mode, missing window, ...).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The backing storage rejected a read or write.
    #[error("preference storage `{op}` failed for `{key}`: {message}")]
    Backend {
        /// Storage operation name.
        op: &'static str,
        /// Preference key involved.
        key: String,
        /// Host-provided failure detail.
        message: String,
    },
    /// A stored value could not be decoded into the requested type.
    #[error("preference `{key}` is malformed: {message}")]
    Malformed {
        /// Preference key involved.
        key: String,
        /// Decoder failure detail.
        message: String,
    },
    /// A value could not be encoded for storage.
    #[error("preference `{key}` could not be encoded: {message}")]
    Encode {
        /// Preference key involved.
        key: String,
        /// Encoder failure detail.
        message: String,
    },
}

/// Host service for lightweight preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads the raw JSON text stored for `key`.
    fn load_raw(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Replaces the raw JSON text stored for `key`.
    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), PrefsError>;

    /// Deletes `key`. Deleting a missing key succeeds.
    fn delete(&self, key: &str) -> Result<(), PrefsError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_raw(&self, _key: &str) -> Result<Option<String>, PrefsError> {
        Ok(None)
    }

    fn save_raw(&self, _key: &str, _raw_json: &str) -> Result<(), PrefsError> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<(), PrefsError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string. Clones share the same map.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns a store pre-seeded with one raw entry.
    pub fn with_entry(key: &str, raw_json: &str) -> Self {
        let store = Self::default();
        store
            .inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        store
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), PrefsError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PrefsError> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`].
///
/// # Errors
///
/// Returns [`PrefsError::Malformed`] when the stored text is not valid JSON for `T`, or the
/// store's own error when the read fails.
pub fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, PrefsError> {
    let Some(raw) = store.load_raw(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|err| PrefsError::Malformed {
            key: key.to_string(),
            message: err.to_string(),
        })
}

/// Serializes and saves a typed preference value through a [`PrefsStore`].
///
/// # Errors
///
/// Returns [`PrefsError::Encode`] when serialization fails, or the store's own error when the
/// write fails.
pub fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), PrefsError> {
    let raw = serde_json::to_string(value).map_err(|err| PrefsError::Encode {
        key: key.to_string(),
        message: err.to_string(),
    })?;
    store.save_raw(key, &raw)
}
