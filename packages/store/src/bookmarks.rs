//! Saved-article bookmarks, persisted as a JSON array of slugs.

use crate::storage::{get_json, set_json, KeyValueStore, StorageError, SAVED_ARTICLES_KEY};

pub struct Bookmarks<K: KeyValueStore> {
    storage: K,
    slugs: Vec<String>,
}

impl<K: KeyValueStore> Bookmarks<K> {
    pub fn load(storage: K) -> Self {
        let slugs = get_json(&storage, SAVED_ARTICLES_KEY).unwrap_or_default();
        Self { storage, slugs }
    }

    pub fn list(&self) -> &[String] {
        &self.slugs
    }

    pub fn is_saved(&self, slug: &str) -> bool {
        self.slugs.iter().any(|s| s == slug)
    }

    /// Save or unsave `slug`. Returns whether it is saved afterwards.
    pub fn toggle(&mut self, slug: &str) -> Result<bool, StorageError> {
        let saved = if let Some(pos) = self.slugs.iter().position(|s| s == slug) {
            self.slugs.remove(pos);
            false
        } else {
            self.slugs.push(slug.to_string());
            true
        };
        set_json(&self.storage, SAVED_ARTICLES_KEY, &self.slugs)?;
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    #[test]
    fn test_save_then_unsave_restores_original_list() {
        let storage = MemoryStorage::new();
        let mut bookmarks = Bookmarks::load(&storage);
        bookmarks.toggle("intro-rust").unwrap();
        bookmarks.toggle("async-basics").unwrap();
        let original = bookmarks.list().to_vec();

        assert!(bookmarks.toggle("tips-karir").unwrap());
        assert!(bookmarks.is_saved("tips-karir"));
        assert!(!bookmarks.toggle("tips-karir").unwrap());

        assert_eq!(bookmarks.list(), original.as_slice());
        assert_eq!(Bookmarks::load(&storage).list(), original.as_slice());
    }

    #[test]
    fn test_corrupt_storage_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set(SAVED_ARTICLES_KEY, "{oops").unwrap();
        let mut bookmarks = Bookmarks::load(&storage);
        assert!(bookmarks.list().is_empty());

        assert!(bookmarks.toggle("a").unwrap());
        assert_eq!(storage.get(SAVED_ARTICLES_KEY).as_deref(), Some(r#"["a"]"#));
    }
}
