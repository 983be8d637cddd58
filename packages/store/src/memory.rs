use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::{KeyValueStore, StorageError};

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{get_json, set_json};

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get("mavecode_theme").is_none());

        storage.set("mavecode_theme", "light").unwrap();
        assert_eq!(storage.get("mavecode_theme").as_deref(), Some("light"));

        storage.remove("mavecode_theme").unwrap();
        assert!(storage.get("mavecode_theme").is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clones_share_values() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("k", "v").unwrap();
        assert_eq!(other.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_corrupt_json_reads_as_absent() {
        let storage = MemoryStorage::new();
        storage.set("list", "[not json").unwrap();
        assert!(get_json::<Vec<String>, _>(&storage, "list").is_none());

        set_json(&storage, "list", &vec!["a".to_string()]).unwrap();
        assert_eq!(
            get_json::<Vec<String>, _>(&storage, "list"),
            Some(vec!["a".to_string()])
        );
    }
}
