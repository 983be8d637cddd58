//! Course completion certificate.

use dioxus::prelude::*;
use ui::icons::{FaAward, FaPrint};
use ui::platform::{current_url, short_date};
use ui::{toast_error, use_auth, use_toasts, ContentPlaceholder, Icon, ShareButtons};

use crate::Route;

#[component]
pub fn CertificatePage(course_id: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();

    let certificate = use_resource(use_reactive!(|course_id| async move {
        let client = auth.peek().api();
        let result = client.certificate(&course_id).await;
        if let Err(e) = &result {
            toast_error(&mut toasts, &e.user_message());
            // not eligible yet
            if e.status() == Some(403) {
                nav.replace(Route::Dashboard {});
            }
        }
        result.ok()
    }));

    let Some(loaded) = certificate.read().clone() else {
        return rsx! { div { class: "page-loading", "Loading..." } };
    };
    let Some(cert) = loaded else {
        return rsx! {
            ContentPlaceholder {
                title: "Certificate unavailable",
                message: "Finish every lesson of the course to earn it.",
            }
        };
    };

    let issued = cert.issued_at.as_deref().map(short_date).unwrap_or("-").to_string();
    let share_url = current_url().unwrap_or_default();
    let share_title = format!("I just completed {} on Mavecode!", cert.course_title);

    rsx! {
        div {
            class: "certificate-page",
            div {
                class: "certificate",
                Icon { icon: FaAward, width: 48, height: 48 }
                span { class: "certificate-kicker", "Certificate of Completion" }
                p { class: "muted", "This certifies that" }
                h1 { class: "certificate-name", "{cert.user_name}" }
                p { class: "muted", "has successfully completed" }
                h2 { "{cert.course_title}" }
                div {
                    class: "certificate-footer",
                    span { "No. {cert.certificate_number}" }
                    span { "Issued {issued}" }
                    if cert.signed {
                        span { class: "certificate-signed", "Signed by Mavecode" }
                    } else {
                        span { class: "muted", "Awaiting signature" }
                    }
                }
            }
            div {
                class: "certificate-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        let _ = document::eval("window.print()");
                    },
                    Icon { icon: FaPrint, width: 14, height: 14 }
                    " Print"
                }
                if !share_url.is_empty() {
                    ShareButtons { url: share_url, title: share_title }
                }
            }
        }
    }
}
