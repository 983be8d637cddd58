//! # Key/value storage: the persistence seam of the client
//!
//! Everything the client keeps between page loads (session token, admin
//! flag, theme, saved articles, the locally edited profile) is a small string
//! value under a well-known key. [`KeyValueStore`] abstracts over where those
//! strings live so the stores in this crate can be exercised against
//! [`crate::MemoryStorage`] in tests and against the browser's
//! `localStorage` ([`crate::LocalStorage`]) on the web.
//!
//! ## Keys
//!
//! | Constant | Key | Value |
//! |----------|-----|-------|
//! | [`TOKEN_KEY`] | `mavecode_token` | bearer token |
//! | [`ADMIN_KEY`] | `mavecode_is_admin` | `"true"` / `"false"` |
//! | [`THEME_KEY`] | `mavecode_theme` | `"dark"` / `"light"` |
//! | [`SAVED_ARTICLES_KEY`] | `mavecode_saved_articles` | JSON array of slugs |
//! | [`PROFILE_KEY`] | `mavecode_profile` | JSON profile blob |
//!
//! ## Error handling
//!
//! Reads return `Option` and never fail: an unreadable backend looks like an
//! empty one. Writes return [`StorageError`] so callers can surface a toast,
//! but nothing in the UI treats a failed write as fatal.

use thiserror::Error;

pub const TOKEN_KEY: &str = "mavecode_token";
pub const ADMIN_KEY: &str = "mavecode_is_admin";
pub const THEME_KEY: &str = "mavecode_theme";
pub const SAVED_ARTICLES_KEY: &str = "mavecode_saved_articles";
pub const PROFILE_KEY: &str = "mavecode_profile";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("could not encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for &K {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Read a JSON value stored under `key`, treating corrupt data as absent.
pub fn get_json<T, K>(storage: &K, key: &str) -> Option<T>
where
    T: serde::de::DeserializeOwned,
    K: KeyValueStore + ?Sized,
{
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("ignoring corrupt value under {key}: {e}");
            None
        }
    }
}

/// Store `value` as JSON under `key`.
pub fn set_json<T, K>(storage: &K, key: &str, value: &T) -> Result<(), StorageError>
where
    T: serde::Serialize + ?Sized,
    K: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw)
}
