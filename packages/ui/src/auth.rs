//! Authentication context and actions for the UI.
//!
//! [`AuthProvider`] owns the [`Session`] in a signal and mirrors every change
//! into platform storage through [`SessionStore`]. Views read it with
//! [`use_auth`] and call the async actions below from event handlers.

use std::time::Duration;

use api::{auth::RegisterRequest, ApiClient, ApiError, UserInfo};
use dioxus::prelude::*;
use store::session::{Session, SessionStore};
use store::AppConfig;

use crate::platform::{self, make_storage};

/// Authentication state for the application.
#[derive(Debug, Clone)]
pub struct AuthState {
    pub session: Session,
    /// A stored token is still being checked against `/auth/me`.
    pub loading: bool,
    /// Whether the last background check reached the backend.
    pub online: bool,
    api: ApiClient,
}

impl AuthState {
    /// An API client carrying the current bearer token.
    pub fn api(&self) -> ApiClient {
        self.api.clone().with_token(self.session.token.clone())
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.session.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin
    }

    /// Signed in, but the last background check could not reach the backend.
    pub fn is_offline(&self) -> bool {
        self.is_authenticated() && !self.loading && !self.online
    }
}

/// Get the current authentication state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

fn store_for(state: &AuthState) -> SessionStore<platform::AppStorage> {
    SessionStore::with_session(make_storage(), state.session.clone())
}

fn commit(auth: &mut Signal<AuthState>, store: SessionStore<platform::AppStorage>) {
    let mut state = auth.write();
    state.session = store.into_session();
    state.loading = false;
}

/// Provider component that restores the session and keeps it validated.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context_provider(platform::load_config);

    let mut auth = use_signal(|| {
        let store = SessionStore::open(make_storage());
        let session = store.into_session();
        AuthState {
            // admin sessions carry a synthetic user and are not re-fetched
            loading: session.is_authenticated() && !session.is_admin,
            online: true,
            session,
            api: ApiClient::from_config(&config),
        }
    });

    // Validate a restored token on mount
    use_future(move || async move {
        if !auth.peek().loading {
            return;
        }
        let client = auth.peek().api();
        match client.me().await {
            Ok(user) => {
                let mut state = auth.write();
                state.session.user = Some(user);
                state.loading = false;
            }
            Err(e) => {
                tracing::warn!("stored session rejected, logging out: {e}");
                logout(auth);
            }
        }
    });

    // Periodic re-validation (every 30s)
    use_future(move || async move {
        loop {
            platform::sleep(Duration::from_secs(30)).await;

            let state = auth.peek().clone();
            if state.loading || !state.is_authenticated() || state.is_admin() {
                continue;
            }
            match state.api().me().await {
                Ok(user) => {
                    if state.user() != Some(&user) || !state.online {
                        let mut state = auth.write();
                        state.session.user = Some(user);
                        state.online = true;
                    }
                }
                Err(e) if e.is_unauthorized() => {
                    tracing::warn!("session expired: {e}");
                    logout(auth);
                }
                Err(_) => {
                    if state.online {
                        auth.write().online = false;
                    }
                }
            }
        }
    });

    use_context_provider(|| auth);

    rsx! {
        {children}
    }
}

pub async fn login(mut auth: Signal<AuthState>, email: &str, password: &str) -> Result<(), ApiError> {
    let client = auth.peek().api();
    let response = client.login(email, password).await?;
    let mut store = store_for(&auth.peek());
    if let Err(e) = store.apply_login(&response) {
        tracing::warn!("could not persist session: {e}");
    }
    commit(&mut auth, store);
    Ok(())
}

pub async fn register(
    mut auth: Signal<AuthState>,
    request: RegisterRequest<'_>,
) -> Result<(), ApiError> {
    let client = auth.peek().api();
    let response = client.register(&request).await?;
    let mut store = store_for(&auth.peek());
    if let Err(e) = store.apply_login(&response) {
        tracing::warn!("could not persist session: {e}");
    }
    commit(&mut auth, store);
    Ok(())
}

pub async fn google_login(mut auth: Signal<AuthState>, id_token: &str) -> Result<(), ApiError> {
    let client = auth.peek().api();
    let response = client.google_login(id_token).await?;
    let mut store = store_for(&auth.peek());
    if let Err(e) = store.apply_login(&response) {
        tracing::warn!("could not persist session: {e}");
    }
    commit(&mut auth, store);
    Ok(())
}

pub async fn admin_login(
    mut auth: Signal<AuthState>,
    username: &str,
    password: &str,
) -> Result<(), ApiError> {
    let client = auth.peek().api();
    let response = client.admin_login(username, password).await?;
    let mut store = store_for(&auth.peek());
    if let Err(e) = store.apply_admin(&response) {
        tracing::warn!("could not persist admin session: {e}");
    }
    commit(&mut auth, store);
    Ok(())
}

/// Clear the session from memory and storage.
pub fn logout(mut auth: Signal<AuthState>) {
    let mut store = store_for(&auth.peek());
    if let Err(e) = store.logout() {
        tracing::warn!("could not clear stored session: {e}");
    }
    commit(&mut auth, store);
}

/// Replace the signed-in user's display data after a local profile edit.
pub fn set_user(mut auth: Signal<AuthState>, user: UserInfo) {
    auth.write().session.user = Some(user);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(token: Option<&str>, loading: bool, online: bool) -> AuthState {
        AuthState {
            session: Session {
                token: token.map(str::to_string),
                ..Default::default()
            },
            loading,
            online,
            api: ApiClient::new("http://localhost:8000/api"),
        }
    }

    #[test]
    fn test_offline_only_for_checked_sessions() {
        assert!(state(Some("t"), false, false).is_offline());
        assert!(!state(Some("t"), false, true).is_offline());
        assert!(!state(Some("t"), true, false).is_offline());
        assert!(!state(None, false, false).is_offline());
    }
}
