use dioxus::prelude::*;
use store::club::{Club, TEXT_CHANNELS};
use ui::icons::{FaHashtag, FaPaperPlane};
use ui::{use_auth, Icon};

/// Community chat. Messages stay in this browser tab.
#[component]
pub fn ClubPage() -> Element {
    let auth = use_auth();
    let mut club = use_signal(Club::new);
    let mut draft = use_signal(String::new);

    let mut send = move || {
        let author = auth
            .peek()
            .user()
            .map(|u| u.display_name().to_string())
            .unwrap_or_else(|| "Guest".to_string());
        let text = draft.peek().clone();
        if club.write().send(&author, &text) {
            draft.set(String::new());
        }
    };

    let state = club.read();
    let active = state.active();
    let messages = state.messages().to_vec();
    drop(state);

    rsx! {
        div {
            class: "club",
            aside {
                class: "club-channels",
                h3 { "Mavecode Club" }
                p { class: "muted", "Text channels" }
                for channel in TEXT_CHANNELS {
                    button {
                        key: "{channel.id}",
                        class: if channel.id == active.id { "club-channel active" } else { "club-channel" },
                        onclick: move |_| {
                            club.write().switch(channel.id);
                        },
                        Icon { icon: FaHashtag, width: 12, height: 12 }
                        " {channel.name}"
                    }
                }
            }
            section {
                class: "club-main",
                header {
                    class: "club-header",
                    Icon { icon: FaHashtag, width: 14, height: 14 }
                    h2 { "{active.name}" }
                }
                div {
                    class: "club-messages",
                    if messages.is_empty() {
                        p { class: "muted", "No messages yet. Say hi!" }
                    }
                    for message in messages {
                        div {
                            key: "{message.id}",
                            class: "club-message",
                            div {
                                class: "club-message-meta",
                                strong { "{message.author}" }
                                if let Some(tag) = &message.tag {
                                    span { class: "chip", "{tag}" }
                                }
                                span { class: "muted", "{stamp(&message.time)}" }
                            }
                            p { "{message.text}" }
                        }
                    }
                }
                form {
                    class: "club-composer",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        send();
                    },
                    input {
                        class: "input",
                        placeholder: "Message #{active.name}",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: draft().trim().is_empty(),
                        Icon { icon: FaPaperPlane, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}

fn stamp(time: &Option<String>) -> &str {
    time.as_deref().unwrap_or("now")
}
