//! "Continue with Google" for the login and register pages.
//!
//! The Google Identity script is loaded on demand; the ID token it hands back
//! is exchanged at `POST /auth/google`. Hidden when no client id is configured.

use dioxus::prelude::*;
use ui::icons::FaGoogle;
use ui::{toast_error, use_auth, use_config, use_toasts, Icon};

use crate::Route;

const GOOGLE_PROMPT: &str = r#"
    const clientId = await dioxus.recv();
    if (!window.google || !window.google.accounts) {
        await new Promise((resolve, reject) => {
            const script = document.createElement("script");
            script.src = "https://accounts.google.com/gsi/client";
            script.onload = resolve;
            script.onerror = reject;
            document.head.appendChild(script);
        });
    }
    google.accounts.id.initialize({
        client_id: clientId,
        callback: (response) => dioxus.send(response.credential),
    });
    google.accounts.id.prompt();
"#;

#[component]
pub fn GoogleSignIn() -> Element {
    let config = use_config();
    let auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();
    let mut busy = use_signal(|| false);

    let Some(client_id) = config.auth.google_client_id.clone() else {
        return rsx! {};
    };

    let start = move |_| {
        let client_id = client_id.clone();
        busy.set(true);
        spawn(async move {
            let mut prompt = document::eval(GOOGLE_PROMPT);
            let token = match prompt.send(client_id) {
                Ok(()) => prompt.recv::<String>().await,
                Err(e) => Err(e),
            };
            match token {
                Ok(token) => match ui::auth::google_login(auth, &token).await {
                    Ok(()) => {
                        nav.replace(Route::Dashboard {});
                    }
                    Err(e) => toast_error(&mut toasts, &e.user_message()),
                },
                Err(e) => {
                    tracing::warn!("google sign-in did not complete: {e}");
                    toast_error(&mut toasts, "Google sign-in was cancelled or failed");
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "divider", span { "or" } }
        button {
            class: "btn btn-outline btn-block",
            r#type: "button",
            disabled: busy(),
            onclick: start,
            Icon { icon: FaGoogle, width: 14, height: 14 }
            " Continue with Google"
        }
    }
}
