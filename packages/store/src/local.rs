//! # Browser `localStorage`: web persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It
//! looks up `window.localStorage` on every call rather than caching the
//! handle, which keeps the type zero-size and `Clone`.
//!
//! ## Error handling
//!
//! Private browsing modes and disabled storage make `localStorage` either
//! missing or throwing. Reads degrade to `None`; writes report
//! [`StorageError::Unavailable`] or [`StorageError::Write`].

use crate::storage::{KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}
