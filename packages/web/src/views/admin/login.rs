use dioxus::prelude::*;
use ui::icons::FaLock;
use ui::{toast_success, use_auth, use_toasts, Icon};

use crate::Route;

#[component]
pub fn AdminLogin() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if auth().is_admin() {
        nav.replace(Route::AdminDashboard {});
    }

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match ui::auth::admin_login(auth, username().trim(), &password()).await {
                Ok(()) => {
                    toast_success(&mut toasts, "Welcome back, admin");
                    nav.replace(Route::AdminDashboard {});
                }
                Err(e) => {
                    tracing::warn!("admin login failed: {e}");
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page admin-login",
            form {
                class: "auth-card",
                onsubmit: submit,
                Icon { icon: FaLock, width: 28, height: 28 }
                h1 { "Admin panel" }
                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }
                label { "Username" }
                input {
                    class: "input",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                label { "Password" }
                input {
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
                Link { class: "link-button", to: Route::Landing {}, "← Back to site" }
            }
        }
    }
}
