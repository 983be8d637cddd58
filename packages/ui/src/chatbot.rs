//! Floating chat assistant.

use dioxus::prelude::*;
use store::chat::{ChatSession, Role};

use crate::auth::use_auth;
use crate::icons::{FaComments, FaPaperPlane, FaRobot, FaXmark};
use crate::Icon;

#[component]
pub fn Chatbot() -> Element {
    let auth = use_auth();
    let mut open = use_signal(|| false);
    let mut chat = use_signal(ChatSession::new);
    let mut input = use_signal(String::new);

    let mut send = move || {
        let Some(request) = chat.write().begin_send(&input.peek()) else {
            return;
        };
        input.set(String::new());
        spawn(async move {
            let client = auth.peek().api();
            match client.chat(&request).await {
                Ok(reply) => chat.write().receive(reply),
                Err(e) => {
                    tracing::warn!("chat request failed: {e}");
                    chat.write().fail();
                }
            }
        });
    };

    if !open() {
        return rsx! {
            button {
                class: "chatbot-launcher",
                title: "Ask the assistant",
                onclick: move |_| open.set(true),
                Icon { icon: FaComments, width: 22, height: 22 }
            }
        };
    }

    let pending = chat.read().is_pending();

    rsx! {
        div {
            class: "chatbot-panel",
            header {
                class: "chatbot-header",
                Icon { icon: FaRobot, width: 18, height: 18 }
                span { "Mavecode Assistant" }
                button {
                    class: "icon-button",
                    onclick: move |_| open.set(false),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }
            div {
                class: "chatbot-messages",
                for (i, message) in chat.read().messages().iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if message.role == Role::User { "chat-bubble user" } else { "chat-bubble assistant" },
                        "{message.content}"
                    }
                }
                if pending {
                    div { class: "chat-bubble assistant typing", "…" }
                }
            }
            form {
                class: "chatbot-input",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    send();
                },
                input {
                    r#type: "text",
                    placeholder: "Type a message...",
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "icon-button",
                    disabled: pending || input.read().trim().is_empty(),
                    Icon { icon: FaPaperPlane, width: 14, height: 14 }
                }
            }
        }
    }
}
