//! Theme preference. Dark unless the visitor picked light before.

use crate::storage::{KeyValueStore, StorageError, THEME_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn load<K: KeyValueStore + ?Sized>(storage: &K) -> Self {
        match storage.get(THEME_KEY).as_deref() {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn save<K: KeyValueStore + ?Sized>(&self, storage: &K) -> Result<(), StorageError> {
        storage.set(THEME_KEY, self.as_str())
    }
}

/// Theme plus the in-memory study mode flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub theme: Theme,
    pub study_mode: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    #[test]
    fn test_default_is_dark() {
        let storage = MemoryStorage::new();
        assert_eq!(Theme::load(&storage), Theme::Dark);
        storage.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(Theme::load(&storage), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let storage = MemoryStorage::new();
        let theme = Theme::load(&storage).toggled();
        theme.save(&storage).unwrap();
        assert_eq!(Theme::load(&storage), Theme::Light);
        assert!(Theme::load(&storage).toggled().is_dark());
    }
}
