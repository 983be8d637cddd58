//! # Session store: bearer token, admin flag and current user
//!
//! [`SessionStore`] owns the in-memory [`Session`] and mirrors the token and
//! admin flag into a [`KeyValueStore`]. The user profile itself is never
//! persisted: on reload the token is restored and the UI re-fetches the user
//! with `GET /auth/me`, logging out if that fails.
//!
//! Memory and storage always move together: a successful login sets and
//! persists both, and [`SessionStore::logout`] clears both even if the
//! storage backend misbehaves.

use serde::{Deserialize, Serialize};

use crate::models::UserInfo;
use crate::storage::{KeyValueStore, StorageError, ADMIN_KEY, TOKEN_KEY};

/// Response of `/auth/login`, `/auth/register` and `/auth/google`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Response of `/auth/admin`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminAuthResponse {
    pub token: String,
    #[serde(default = "default_true")]
    pub is_admin: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
    pub is_admin: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// The synthetic user shown while signed in as administrator.
pub fn admin_user() -> UserInfo {
    UserInfo {
        id: "admin".to_string(),
        email: "admin@mavecode.id".to_string(),
        name: "Admin".to_string(),
        ..Default::default()
    }
}

pub struct SessionStore<K: KeyValueStore> {
    storage: K,
    session: Session,
}

impl<K: KeyValueStore> SessionStore<K> {
    /// Restore the token and admin flag persisted by a previous visit.
    pub fn open(storage: K) -> Self {
        let token = storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let is_admin = token.is_some() && storage.get(ADMIN_KEY).as_deref() == Some("true");
        let user = is_admin.then(admin_user);
        Self {
            storage,
            session: Session {
                token,
                user,
                is_admin,
            },
        }
    }

    /// Wrap an existing in-memory session without reading storage.
    pub fn with_session(storage: K, session: Session) -> Self {
        Self { storage, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    /// Record a user login, registration or social login.
    pub fn apply_login(&mut self, response: &AuthResponse) -> Result<(), StorageError> {
        self.session = Session {
            token: Some(response.token.clone()),
            user: Some(response.user.clone()),
            is_admin: false,
        };
        self.persist()
    }

    /// Record an administrator login.
    pub fn apply_admin(&mut self, response: &AdminAuthResponse) -> Result<(), StorageError> {
        self.session = Session {
            token: Some(response.token.clone()),
            user: Some(admin_user()),
            is_admin: true,
        };
        self.persist()
    }

    /// Replace the current user after `/auth/me` or a profile edit.
    pub fn set_user(&mut self, user: UserInfo) {
        self.session.user = Some(user);
    }

    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.session = Session::default();
        let token = self.storage.remove(TOKEN_KEY);
        let admin = self.storage.remove(ADMIN_KEY);
        token.and(admin)
    }

    fn persist(&self) -> Result<(), StorageError> {
        if let Some(token) = &self.session.token {
            self.storage.set(TOKEN_KEY, token)?;
        }
        self.storage
            .set(ADMIN_KEY, if self.session.is_admin { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;
    use serde_json::json;

    fn login_response() -> AuthResponse {
        serde_json::from_value(json!({
            "token": "t1",
            "user": { "id": 1, "name": "A" }
        }))
        .unwrap()
    }

    #[test]
    fn test_login_persists_token_and_user() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::open(&storage);
        assert!(!store.session().is_authenticated());

        store.apply_login(&login_response()).unwrap();

        assert_eq!(store.token(), Some("t1"));
        assert_eq!(store.session().user.as_ref().unwrap().id, "1");
        assert_eq!(store.session().user.as_ref().unwrap().name, "A");
        assert!(!store.session().is_admin);
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(storage.get(ADMIN_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_logout_clears_memory_and_storage() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::open(&storage);
        store.apply_login(&login_response()).unwrap();

        store.logout().unwrap();

        assert!(store.session().user.is_none());
        assert!(store.token().is_none());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(ADMIN_KEY).is_none());
    }

    #[test]
    fn test_reopen_restores_token() {
        let storage = MemoryStorage::new();
        SessionStore::open(&storage)
            .apply_login(&login_response())
            .unwrap();

        let reopened = SessionStore::open(&storage);
        assert_eq!(reopened.token(), Some("t1"));
        // the user is re-fetched from /auth/me, not persisted
        assert!(reopened.session().user.is_none());
        assert!(!reopened.session().is_admin);
    }

    #[test]
    fn test_admin_login_sets_flag_and_synthetic_user() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::open(&storage);
        store
            .apply_admin(&AdminAuthResponse {
                token: "admin-token".into(),
                is_admin: true,
            })
            .unwrap();

        assert!(store.session().is_admin);
        assert_eq!(store.session().user.as_ref().unwrap().id, "admin");
        assert_eq!(storage.get(ADMIN_KEY).as_deref(), Some("true"));

        let reopened = SessionStore::open(&storage);
        assert!(reopened.session().is_admin);
        assert_eq!(reopened.session().user, Some(admin_user()));
    }

    #[test]
    fn test_admin_flag_without_token_is_ignored() {
        let storage = MemoryStorage::new();
        storage.set(ADMIN_KEY, "true").unwrap();
        let store = SessionStore::open(&storage);
        assert!(!store.session().is_admin);
        assert!(store.session().user.is_none());
    }
}
