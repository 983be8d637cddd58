//! Profile editor. The record lives in local storage only; the display name
//! is pushed back into the in-memory session user after saving.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dioxus::prelude::*;
use store::profile::{check_photo_size, LocalProfile};
use ui::icons::{FaCamera, FaFloppyDisk};
use ui::platform::make_storage;
use ui::{toast_error, toast_success, use_auth, use_toasts, Icon};

/// Guess an image MIME type from a file name.
fn image_mime(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "image/jpeg",
    }
}

fn data_url(file_name: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", image_mime(file_name), STANDARD.encode(bytes))
}

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let mut toasts = use_toasts();
    let mut profile = use_signal(|| {
        let user = auth.peek().user().cloned();
        LocalProfile::load_or_seed(&make_storage(), user.as_ref())
    });

    let upload_photo = move |evt: FormEvent| async move {
        let Some(files) = evt.files() else {
            return;
        };
        let Some(name) = files.files().into_iter().next() else {
            return;
        };
        let Some(bytes) = files.read_file(&name).await else {
            toast_error(&mut toasts, "Could not read the selected photo");
            return;
        };
        if let Err(message) = check_photo_size(bytes.len()) {
            toast_error(&mut toasts, &message);
            return;
        }
        profile.write().photo_url = data_url(&name, &bytes);
        toast_success(&mut toasts, "Photo uploaded");
    };

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let current = profile.peek().clone();
        if let Err(e) = current.save(&make_storage()) {
            toast_error(&mut toasts, &format!("Could not save profile: {e}"));
            return;
        }
        let user = auth.peek().user().cloned();
        if let Some(mut user) = user {
            let full_name = current.full_name();
            if !full_name.is_empty() {
                user.name = full_name;
            }
            ui::auth::set_user(auth, user);
        }
        toast_success(&mut toasts, "Profile saved! 🎉");
    };

    let p = profile();

    rsx! {
        div {
            class: "page-header",
            h1 { "My profile" }
        }
        form {
            class: "profile-layout",
            onsubmit: save,
            aside {
                class: "card profile-card",
                img { class: "avatar-lg", src: "{p.photo_url}", alt: "Profile photo" }
                label {
                    class: "btn btn-outline btn-sm",
                    Icon { icon: FaCamera, width: 12, height: 12 }
                    " Change photo"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        hidden: true,
                        onchange: upload_photo,
                    }
                }
                h3 { "{p.full_name()}" }
                if !p.position.is_empty() {
                    span { class: "muted", "{p.position}" }
                }
                div {
                    class: "chip-row",
                    for skill in p.skill_list() {
                        span { key: "{skill}", class: "chip", "{skill}" }
                    }
                }
            }
            div {
                class: "card form profile-form",
                div {
                    class: "form-row",
                    Field { label: "First name", value: p.first_name.clone(), on_input: move |v| profile.write().first_name = v }
                    Field { label: "Last name", value: p.last_name.clone(), on_input: move |v| profile.write().last_name = v }
                }
                div {
                    class: "form-row",
                    Field { label: "Email", value: p.email.clone(), on_input: move |v| profile.write().email = v }
                    Field { label: "Phone", value: p.phone.clone(), on_input: move |v| profile.write().phone = v }
                }
                label { "Bio" }
                textarea {
                    class: "input",
                    rows: "4",
                    value: "{p.bio}",
                    oninput: move |evt| profile.write().bio = evt.value(),
                }
                div {
                    class: "form-row",
                    Field { label: "Organization", value: p.organization.clone(), on_input: move |v| profile.write().organization = v }
                    Field { label: "Position", value: p.position.clone(), on_input: move |v| profile.write().position = v }
                }
                Field { label: "Location", value: p.location.clone(), on_input: move |v| profile.write().location = v }
                div {
                    class: "form-row",
                    Field { label: "Website", value: p.website.clone(), on_input: move |v| profile.write().website = v }
                    Field { label: "GitHub", value: p.github.clone(), on_input: move |v| profile.write().github = v }
                    Field { label: "LinkedIn", value: p.linkedin.clone(), on_input: move |v| profile.write().linkedin = v }
                }
                Field { label: "Skills (comma separated)", value: p.skills.clone(), on_input: move |v| profile.write().skills = v }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                    " Save profile"
                }
            }
        }
    }
}

#[component]
fn Field(label: &'static str, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "field",
            label { "{label}" }
            input {
                class: "input",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_data_url() {
        assert_eq!(data_url("me.PNG", b"hi"), "data:image/png;base64,aGk=");
        assert_eq!(image_mime("avatar"), "image/jpeg");
    }
}
