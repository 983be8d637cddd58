//! Member login page with an email/password form.

use dioxus::prelude::*;
use ui::use_auth;

use super::google::GoogleSignIn;
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the dashboard
    if !auth().loading && auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match ui::auth::login(auth, &e, &p).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::warn!("login failed: {err}");
                    error.set(Some(err.user_message()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: handle_login,
                h1 { "Welcome back" }
                p { class: "muted", "Sign in to continue learning." }

                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }

                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    class: "input",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    class: "input",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }

                GoogleSignIn {}

                p {
                    class: "auth-switch",
                    "No account yet? "
                    Link { to: Route::Register {}, "Create one" }
                }
            }
        }
    }
}
