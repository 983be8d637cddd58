//! # Locally edited profile
//!
//! The profile page edits a richer record than the backend stores. It lives
//! only in the browser under `mavecode_profile`; the backend never sees it.
//! The display name and photo are pushed back into the in-memory session user
//! after saving.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::UserInfo;
use crate::storage::{get_json, set_json, KeyValueStore, StorageError, PROFILE_KEY};

/// Largest photo accepted by the upload field.
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

pub const DEFAULT_PHOTO_URL: &str = "https://api.dicebear.com/7.x/adventurer/svg?seed=User";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub organization: String,
    pub position: String,
    pub location: String,
    pub website: String,
    pub github: String,
    pub linkedin: String,
    pub skills: String,
    pub photo_url: String,
}

impl Default for LocalProfile {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            bio: String::new(),
            organization: String::new(),
            position: String::new(),
            location: String::new(),
            website: String::new(),
            github: String::new(),
            linkedin: String::new(),
            skills: String::new(),
            photo_url: DEFAULT_PHOTO_URL.to_string(),
        }
    }
}

impl LocalProfile {
    /// Seed a profile from the signed-in user: the first word of the name is
    /// the first name, the rest is the last name.
    pub fn seeded_from(user: Option<&UserInfo>) -> Self {
        let mut profile = Self::default();
        if let Some(user) = user {
            let mut parts = user.name.split_whitespace();
            profile.first_name = parts.next().unwrap_or_default().to_string();
            profile.last_name = parts.collect::<Vec<_>>().join(" ");
            profile.email = user.email.clone();
            profile.phone = user.phone.clone().unwrap_or_default();
        }
        profile
    }

    /// The stored blob merged over a profile seeded from `user`: fields the
    /// blob does not carry keep their seeded value.
    pub fn load_or_seed<K: KeyValueStore + ?Sized>(storage: &K, user: Option<&UserInfo>) -> Self {
        let seeded = Self::seeded_from(user);
        let Some(Value::Object(stored)) = get_json::<Value, K>(storage, PROFILE_KEY) else {
            return seeded;
        };
        let Ok(Value::Object(mut merged)) = serde_json::to_value(&seeded) else {
            return seeded;
        };
        merged.extend(stored);
        serde_json::from_value(Value::Object(merged)).unwrap_or(seeded)
    }

    pub fn save<K: KeyValueStore + ?Sized>(&self, storage: &K) -> Result<(), StorageError> {
        set_json(storage, PROFILE_KEY, self)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Skills as a trimmed list, split on commas.
    pub fn skill_list(&self) -> Vec<&str> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Reject photo uploads above [`MAX_PHOTO_BYTES`].
pub fn check_photo_size(bytes: usize) -> Result<(), String> {
    if bytes > MAX_PHOTO_BYTES {
        Err("Photo must be 5MB or smaller".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    fn user() -> UserInfo {
        UserInfo {
            id: "u1".into(),
            email: "budi@example.com".into(),
            name: "Budi Santoso Putra".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_seed_splits_name() {
        let profile = LocalProfile::seeded_from(Some(&user()));
        assert_eq!(profile.first_name, "Budi");
        assert_eq!(profile.last_name, "Santoso Putra");
        assert_eq!(profile.email, "budi@example.com");
        assert_eq!(profile.full_name(), "Budi Santoso Putra");
    }

    #[test]
    fn test_stored_profile_wins_over_seed() {
        let storage = MemoryStorage::new();
        let mut profile = LocalProfile::seeded_from(Some(&user()));
        profile.bio = "Rustacean".into();
        profile.skills = "rust, wasm, ,dioxus".into();
        profile.save(&storage).unwrap();

        let loaded = LocalProfile::load_or_seed(&storage, None);
        assert_eq!(loaded.bio, "Rustacean");
        assert_eq!(loaded.skill_list(), vec!["rust", "wasm", "dioxus"]);
    }

    #[test]
    fn test_partial_blob_keeps_defaults() {
        let storage = MemoryStorage::new();
        storage.set(PROFILE_KEY, r#"{"firstName":"Sari"}"#).unwrap();
        let loaded = LocalProfile::load_or_seed(&storage, None);
        assert_eq!(loaded.first_name, "Sari");
        assert_eq!(loaded.photo_url, DEFAULT_PHOTO_URL);
    }

    #[test]
    fn test_partial_blob_merges_over_seed() {
        let storage = MemoryStorage::new();
        storage
            .set(PROFILE_KEY, r#"{"firstName":"Budi","bio":"Backend dev"}"#)
            .unwrap();
        let loaded = LocalProfile::load_or_seed(&storage, Some(&user()));
        assert_eq!(loaded.bio, "Backend dev");
        assert_eq!(loaded.email, "budi@example.com");
        assert_eq!(loaded.last_name, "Santoso Putra");
    }

    #[test]
    fn test_photo_size_limit() {
        assert!(check_photo_size(MAX_PHOTO_BYTES).is_ok());
        assert!(check_photo_size(MAX_PHOTO_BYTES + 1).is_err());
    }
}
