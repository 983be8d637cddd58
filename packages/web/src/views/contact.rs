use dioxus::prelude::*;
use store::models::ContactMessage;
use ui::icons::{FaEnvelope, FaLocationDot, FaWhatsapp};
use ui::{toast_error, toast_success, use_auth, use_toasts, Icon, WHATSAPP_URL};

#[component]
pub fn Contact() -> Element {
    let auth = use_auth();
    let mut toasts = use_toasts();
    let mut form = use_signal(ContactMessage::default);
    let mut sending = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let message = form.peek().clone();
        if message.name.trim().is_empty() || !message.email.contains('@') || message.message.trim().is_empty() {
            toast_error(&mut toasts, "Please fill in your name, a valid email and a message");
            return;
        }
        sending.set(true);
        spawn(async move {
            let client = auth.peek().api();
            match client.send_contact(&message).await {
                Ok(()) => {
                    toast_success(&mut toasts, "Message sent! We'll get back to you soon.");
                    form.set(ContactMessage::default());
                }
                Err(e) => toast_error(&mut toasts, &e.user_message()),
            }
            sending.set(false);
        });
    };

    let current = form();

    rsx! {
        div {
            class: "page-header",
            h1 { "Contact us" }
            p { class: "muted", "Questions about courses, partnerships or billing? Drop us a line." }
        }
        div {
            class: "contact-layout",
            form {
                class: "form card",
                onsubmit: submit,
                label { "Name" }
                input {
                    class: "input",
                    value: "{current.name}",
                    oninput: move |evt| form.write().name = evt.value(),
                }
                label { "Email" }
                input {
                    class: "input",
                    r#type: "email",
                    value: "{current.email}",
                    oninput: move |evt| form.write().email = evt.value(),
                }
                label { "Subject" }
                input {
                    class: "input",
                    value: "{current.subject}",
                    oninput: move |evt| form.write().subject = evt.value(),
                }
                label { "Message" }
                textarea {
                    class: "input",
                    rows: "6",
                    value: "{current.message}",
                    oninput: move |evt| form.write().message = evt.value(),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: sending(),
                    if sending() { "Sending..." } else { "Send message" }
                }
            }
            aside {
                class: "contact-info",
                p { Icon { icon: FaEnvelope, width: 14, height: 14 } " hello@mavecode.my.id" }
                p { Icon { icon: FaLocationDot, width: 14, height: 14 } " Indonesia" }
                a {
                    class: "btn btn-outline",
                    href: WHATSAPP_URL,
                    target: "_blank",
                    Icon { icon: FaWhatsapp, width: 14, height: 14 }
                    " +62 851 9176 9521"
                }
            }
        }
    }
}
