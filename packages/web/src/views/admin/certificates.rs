use dioxus::prelude::*;
use ui::icons::{FaCircleCheck, FaSignature};
use ui::platform::short_date;
use ui::{toast_error, toast_success, use_auth, use_toasts, Icon};

use super::AdminHeader;

/// Issued certificates; unsigned ones get a sign button.
#[component]
pub fn AdminCertificates() -> Element {
    let auth = use_auth();
    let mut toasts = use_toasts();
    let mut signing = use_signal(|| Option::<String>::None);
    let mut show_unsigned = use_signal(|| false);

    let mut certificates = use_resource(move || async move {
        let client = auth.peek().api();
        client.admin_certificates().await
    });

    let mut sign = move |id: String| {
        if signing.peek().is_some() {
            return;
        }
        signing.set(Some(id.clone()));
        spawn(async move {
            let client = auth.peek().api();
            match client.sign_certificate(&id).await {
                Ok(()) => {
                    toast_success(&mut toasts, "Certificate signed");
                    certificates.restart();
                }
                Err(e) => toast_error(&mut toasts, &e.user_message()),
            }
            signing.set(None);
        });
    };

    let list = match &*certificates.read() {
        None => rsx! { p { class: "muted", "Loading..." } },
        Some(Err(e)) => rsx! { p { class: "form-error", "{e.user_message()}" } },
        Some(Ok(list)) => {
            let unsigned = list.iter().filter(|c| !c.signed).count();
            rsx! {
                div {
                    class: "chip-row",
                    button {
                        class: if !show_unsigned() { "chip active" } else { "chip" },
                        onclick: move |_| show_unsigned.set(false),
                        "All ({list.len()})"
                    }
                    button {
                        class: if show_unsigned() { "chip active" } else { "chip" },
                        onclick: move |_| show_unsigned.set(true),
                        "Awaiting signature ({unsigned})"
                    }
                }
                table {
                    class: "admin-table",
                    thead {
                        tr { th { "Number" } th { "Student" } th { "Course" } th { "Issued" } th {} }
                    }
                    tbody {
                        for cert in list.iter().filter(|c| !show_unsigned() || !c.signed).cloned() {
                            tr {
                                key: "{cert.id}",
                                td { class: "mono", "{cert.certificate_number}" }
                                td { "{cert.user_name}" }
                                td { "{cert.course_title}" }
                                td { "{issued(&cert.issued_at)}" }
                                td {
                                    class: "row-actions",
                                    if cert.signed {
                                        span {
                                            class: "badge success",
                                            Icon { icon: FaCircleCheck, width: 12, height: 12 }
                                            " Signed"
                                        }
                                    } else {
                                        button {
                                            class: "btn btn-primary btn-small",
                                            disabled: signing().as_deref() == Some(cert.id.as_str()),
                                            onclick: {
                                                let id = cert.id.clone();
                                                move |_| sign(id.clone())
                                            },
                                            Icon { icon: FaSignature, width: 12, height: 12 }
                                            " Sign"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        AdminHeader { title: "Certificates" }
        {list}
    }
}

fn issued(issued_at: &Option<String>) -> &str {
    issued_at.as_deref().map(short_date).unwrap_or("-")
}
