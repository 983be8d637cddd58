//! Registration page view with email/password form.

use api::auth::RegisterRequest;
use dioxus::prelude::*;
use ui::use_auth;

use super::google::GoogleSignIn;
use crate::Route;

/// Check the form before it is sent. Returns the first problem found.
fn validate(name: &str, email: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Name is required");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if !auth().loading && auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let ph = phone().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if let Err(message) = validate(&n, &e, &p, &cp) {
                error.set(Some(message.to_string()));
                return;
            }

            loading.set(true);
            let request = RegisterRequest {
                name: &n,
                email: &e,
                password: &p,
                phone: (!ph.is_empty()).then_some(ph.as_str()),
            };
            match ui::auth::register(auth, request).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::warn!("registration failed: {err}");
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
                onsubmit: handle_register,
                h1 { "Create your account" }
                p { class: "muted", "Start with the free courses today." }

                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }

                label { "Full name" }
                input { class: "input", value: "{name}", oninput: move |evt| name.set(evt.value()) }
                label { "Email" }
                input { class: "input", r#type: "email", value: "{email}", oninput: move |evt| email.set(evt.value()) }
                label { "Phone (optional)" }
                input { class: "input", r#type: "tel", value: "{phone}", oninput: move |evt| phone.set(evt.value()) }
                label { "Password" }
                input { class: "input", r#type: "password", value: "{password}", oninput: move |evt| password.set(evt.value()) }
                label { "Confirm password" }
                input {
                    class: "input",
                    r#type: "password",
                    value: "{confirm_password}",
                    oninput: move |evt| confirm_password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Create account" }
                }

                GoogleSignIn {}

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_register_form() {
        assert_eq!(validate("", "a@b.c", "secret", "secret"), Err("Name is required"));
        assert_eq!(validate("Sari", "sari", "secret", "secret"), Err("Please enter a valid email"));
        assert!(validate("Sari", "sari@x.id", "123", "123").is_err());
        assert_eq!(validate("Sari", "sari@x.id", "secret", "secrets"), Err("Passwords do not match"));
        assert_eq!(validate("Sari", "sari@x.id", "secret", "secret"), Ok(()));
    }
}
