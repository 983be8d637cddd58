use dioxus::prelude::*;
use store::models::FaqInput;
use ui::icons::{FaPen, FaTrash};
use ui::views::ModalOverlay;
use ui::{toast_error, toast_success, use_auth, use_toasts, Icon};

use super::{use_public_refresh, AdminHeader, ConfirmDelete};

const FAQ_CATEGORIES: [&str; 4] = ["general", "courses", "payment", "technical"];

#[derive(Clone, PartialEq)]
struct Editing {
    id: Option<String>,
    input: FaqInput,
}

#[component]
pub fn AdminFaqs() -> Element {
    let auth = use_auth();
    let mut toasts = use_toasts();
    let mut refresh_public = use_public_refresh();
    let mut editing = use_signal(|| Option::<Editing>::None);
    let mut deleting = use_signal(|| Option::<(String, String)>::None);

    let mut faqs = use_resource(move || async move {
        let client = auth.peek().api();
        client.faqs().await.map(|mut list| {
            list.sort_by_key(|faq| faq.order);
            list
        })
    });

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(Editing { id, input }) = editing.peek().clone() else {
            return;
        };
        spawn(async move {
            let client = auth.peek().api();
            let result = match &id {
                Some(id) => client.update_faq(id, &input).await,
                None => client.create_faq(&input).await,
            };
            match result {
                Ok(_) => {
                    toast_success(&mut toasts, "FAQ saved");
                    editing.set(None);
                    faqs.restart();
                    refresh_public();
                }
                Err(e) => toast_error(&mut toasts, &e.user_message()),
            }
        });
    };

    let confirm_delete = move |_| {
        let Some((id, _)) = deleting.take() else {
            return;
        };
        spawn(async move {
            let client = auth.peek().api();
            match client.delete_faq(&id).await {
                Ok(()) => {
                    toast_success(&mut toasts, "FAQ deleted");
                    faqs.restart();
                    refresh_public();
                }
                Err(e) => toast_error(&mut toasts, &e.user_message()),
            }
        });
    };

    let next_order = faqs
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().ok())
        .and_then(|list| list.iter().map(|f| f.order).max())
        .map_or(0, |max| max + 1);

    let list = match &*faqs.read() {
        None => rsx! { p { class: "muted", "Loading..." } },
        Some(Err(e)) => rsx! { p { class: "form-error", "{e.user_message()}" } },
        Some(Ok(list)) => rsx! {
            table {
                class: "admin-table",
                thead {
                    tr { th { "#" } th { "Question" } th { "Category" } th {} }
                }
                tbody {
                    for faq in list.iter().cloned() {
                        tr {
                            key: "{faq.id}",
                            td { "{faq.order}" }
                            td { "{faq.question}" }
                            td { "{faq.category}" }
                            td {
                                class: "row-actions",
                                button {
                                    class: "icon-button",
                                    onclick: {
                                        let faq = faq.clone();
                                        move |_| editing.set(Some(Editing {
                                            id: Some(faq.id.clone()),
                                            input: FaqInput::from(&faq),
                                        }))
                                    },
                                    Icon { icon: FaPen, width: 12, height: 12 }
                                }
                                button {
                                    class: "icon-button danger",
                                    onclick: {
                                        let target = (faq.id.clone(), faq.question.clone());
                                        move |_| deleting.set(Some(target.clone()))
                                    },
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        AdminHeader {
            title: "FAQ",
            on_new: move |_| editing.set(Some(Editing {
                id: None,
                input: FaqInput { order: next_order, ..Default::default() },
            })),
        }
        {list}

        if let Some(current) = editing() {
            ModalOverlay {
                on_close: move |_| editing.set(None),
                form {
                    class: "modal-body form",
                    onsubmit: save,
                    h3 { if current.id.is_some() { "Edit FAQ" } else { "New FAQ" } }
                    label { "Question" }
                    input {
                        class: "input",
                        required: true,
                        value: "{current.input.question}",
                        oninput: move |evt| edit(editing, |i| i.question = evt.value()),
                    }
                    label { "Answer" }
                    textarea {
                        class: "input",
                        rows: "5",
                        required: true,
                        value: "{current.input.answer}",
                        oninput: move |evt| edit(editing, |i| i.answer = evt.value()),
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "field",
                            label { "Category" }
                            select {
                                class: "input",
                                value: "{current.input.category}",
                                onchange: move |evt| edit(editing, |i| i.category = evt.value()),
                                for cat in FAQ_CATEGORIES {
                                    option { value: cat, selected: current.input.category == cat, "{cat}" }
                                }
                            }
                        }
                        div {
                            class: "field",
                            label { "Order" }
                            input {
                                class: "input",
                                r#type: "number",
                                value: "{current.input.order}",
                                oninput: move |evt| {
                                    let order = evt.value().parse().unwrap_or(0);
                                    edit(editing, |i| i.order = order);
                                },
                            }
                        }
                    }
                    div {
                        class: "modal-actions",
                        button { class: "btn btn-outline", r#type: "button", onclick: move |_| editing.set(None), "Cancel" }
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }

        if let Some((_, question)) = deleting() {
            ConfirmDelete {
                what: question,
                on_confirm: confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

fn edit(mut editing: Signal<Option<Editing>>, change: impl FnOnce(&mut FaqInput)) {
    if let Some(current) = editing.write().as_mut() {
        change(&mut current.input);
    }
}
