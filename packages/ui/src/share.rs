//! Share links for articles and certificates.

use dioxus::prelude::*;

use crate::footer::WHATSAPP_URL;
use crate::icons::{FaLink, FaLinkedin, FaTwitter, FaWhatsapp};
use crate::platform;
use crate::toast::{toast_success, use_toasts};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareTarget {
    WhatsApp,
    Twitter,
    LinkedIn,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [ShareTarget::WhatsApp, ShareTarget::Twitter, ShareTarget::LinkedIn];

    pub fn label(&self) -> &'static str {
        match self {
            ShareTarget::WhatsApp => "WhatsApp",
            ShareTarget::Twitter => "X / Twitter",
            ShareTarget::LinkedIn => "LinkedIn",
        }
    }

    pub fn url(&self, page: &str, title: &str) -> String {
        let page = urlencoding::encode(page);
        let title = urlencoding::encode(title);
        match self {
            ShareTarget::WhatsApp => format!("https://wa.me/?text={title}%20{page}"),
            ShareTarget::Twitter => {
                format!("https://twitter.com/intent/tweet?text={title}&url={page}")
            }
            ShareTarget::LinkedIn => {
                format!("https://www.linkedin.com/sharing/share-offsite/?url={page}")
            }
        }
    }
}

/// A WhatsApp link to the Mavecode support number with a prefilled message.
pub fn whatsapp_chat_url(message: &str) -> String {
    format!("{WHATSAPP_URL}?text={}", urlencoding::encode(message))
}

fn share_icon(target: ShareTarget) -> Element {
    match target {
        ShareTarget::WhatsApp => rsx! { Icon { icon: FaWhatsapp, width: 16, height: 16 } },
        ShareTarget::Twitter => rsx! { Icon { icon: FaTwitter, width: 16, height: 16 } },
        ShareTarget::LinkedIn => rsx! { Icon { icon: FaLinkedin, width: 16, height: 16 } },
    }
}

#[component]
pub fn ShareButtons(url: String, title: String) -> Element {
    let mut toasts = use_toasts();
    let copy_url = url.clone();

    rsx! {
        div {
            class: "share-buttons",
            for target in ShareTarget::ALL {
                a {
                    key: "{target.label()}",
                    class: "icon-button",
                    href: target.url(&url, &title),
                    target: "_blank",
                    rel: "noopener",
                    title: target.label(),
                    {share_icon(target)}
                }
            }
            button {
                class: "icon-button",
                title: "Copy link",
                onclick: move |_| {
                    platform::copy_to_clipboard(&copy_url);
                    toast_success(&mut toasts, "Link copied");
                },
                Icon { icon: FaLink, width: 16, height: 16 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_urls_are_encoded() {
        let url = ShareTarget::Twitter.url("https://mavecode.id/articles/a b", "Belajar Rust & WASM");
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?text=Belajar%20Rust%20%26%20WASM&url=https%3A%2F%2Fmavecode.id%2Farticles%2Fa%20b"
        );
        assert!(ShareTarget::WhatsApp.url("x", "y").starts_with("https://wa.me/?text=y%20x"));
    }

    #[test]
    fn test_whatsapp_chat_url() {
        assert_eq!(
            whatsapp_chat_url("Hi, Pro plan"),
            "https://wa.me/6285191769521?text=Hi%2C%20Pro%20plan"
        );
    }
}
