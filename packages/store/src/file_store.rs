//! # Filesystem-backed key/value storage
//!
//! [`FileStorage`] is the [`KeyValueStore`] used on native builds (desktop
//! runs of the UI, `dx serve` without the web target). Each key is a file
//! under the base directory containing the raw value.
//!
//! ```text
//! <base_dir>/
//! ├── mavecode_token
//! ├── mavecode_theme
//! └── ...
//! ```
//!
//! Use [`dirs::data_dir()`] joined with `mavecode` for a platform-appropriate
//! base.

use std::path::PathBuf;

use crate::storage::{KeyValueStore, StorageError};

#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self, key: &str) -> PathBuf {
        // keys are fixed identifiers, but never let one escape the base dir
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();
        self.base.join(name)
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base).map_err(|e| StorageError::Write(e.to_string()))?;
        std::fs::write(self.path(key), value).map_err(|e| StorageError::Write(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = std::env::temp_dir().join(format!("mavecode_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let storage = FileStorage::new(dir.clone());
        storage.set("mavecode_token", "t1").unwrap();

        // Re-open from same directory
        let reopened = FileStorage::new(dir.clone());
        assert_eq!(reopened.get("mavecode_token").as_deref(), Some("t1"));

        reopened.remove("mavecode_token").unwrap();
        assert!(storage.get("mavecode_token").is_none());
        // Removing a missing key is fine
        reopened.remove("mavecode_token").unwrap();

        let _ = std::fs::remove_dir_all(&dir);
    }
}
