use dioxus::prelude::*;
use store::models::{LiveSessionInput, SessionStatus};
use ui::icons::FaTrash;
use ui::platform::short_date;
use ui::views::ModalOverlay;
use ui::{toast_error, toast_success, use_auth, use_toasts, Icon};

use super::{use_public_refresh, AdminHeader, ConfirmDelete};

/// Live classes can only be scheduled and cancelled; there is no edit.
#[component]
pub fn AdminLive() -> Element {
    let auth = use_auth();
    let mut toasts = use_toasts();
    let mut refresh_public = use_public_refresh();
    let mut draft = use_signal(|| Option::<LiveSessionInput>::None);
    let mut deleting = use_signal(|| Option::<(String, String)>::None);

    let mut sessions = use_resource(move || async move {
        let client = auth.peek().api();
        client.live_classes().await
    });

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(input) = draft.peek().clone() else {
            return;
        };
        if input.scheduled_at.is_empty() {
            toast_error(&mut toasts, "Pick a start time");
            return;
        }
        spawn(async move {
            let client = auth.peek().api();
            match client.create_live_class(&input).await {
                Ok(_) => {
                    toast_success(&mut toasts, "Live class scheduled");
                    draft.set(None);
                    sessions.restart();
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
            match client.delete_live_class(&id).await {
                Ok(()) => {
                    toast_success(&mut toasts, "Live class removed");
                    sessions.restart();
                    refresh_public();
                }
                Err(e) => toast_error(&mut toasts, &e.user_message()),
            }
        });
    };

    let list = match &*sessions.read() {
        None => rsx! { p { class: "muted", "Loading..." } },
        Some(Err(e)) => rsx! { p { class: "form-error", "{e.user_message()}" } },
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "No live classes yet." } },
        Some(Ok(list)) => rsx! {
            table {
                class: "admin-table",
                thead {
                    tr { th { "Title" } th { "Instructor" } th { "When" } th { "Seats" } th { "Status" } th {} }
                }
                tbody {
                    for session in list.iter().cloned() {
                        tr {
                            key: "{session.id}",
                            td { "{session.title}" }
                            td { "{session.instructor}" }
                            td { "{when(&session.scheduled_at)}" }
                            td { "{session.participants_count}/{session.max_participants}" }
                            td { span { class: "badge", "{status_label(session.status)}" } }
                            td {
                                class: "row-actions",
                                button {
                                    class: "icon-button danger",
                                    onclick: {
                                        let target = (session.id.clone(), session.title.clone());
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
            title: "Live classes",
            on_new: move |_| draft.set(Some(LiveSessionInput::default())),
        }
        {list}

        if let Some(input) = draft() {
            ModalOverlay {
                on_close: move |_| draft.set(None),
                form {
                    class: "modal-body form",
                    onsubmit: save,
                    h3 { "Schedule live class" }
                    label { "Title" }
                    input {
                        class: "input",
                        required: true,
                        value: "{input.title}",
                        oninput: move |evt| edit(draft, |i| i.title = evt.value()),
                    }
                    label { "Description" }
                    textarea {
                        class: "input",
                        rows: "3",
                        value: input.description.clone().unwrap_or_default(),
                        oninput: move |evt| {
                            let text = evt.value();
                            edit(draft, |i| i.description = (!text.trim().is_empty()).then_some(text));
                        },
                    }
                    label { "Instructor" }
                    input {
                        class: "input",
                        value: "{input.instructor}",
                        oninput: move |evt| edit(draft, |i| i.instructor = evt.value()),
                    }
                    label { "Starts at" }
                    input {
                        class: "input",
                        r#type: "datetime-local",
                        required: true,
                        value: "{input.scheduled_at}",
                        oninput: move |evt| edit(draft, |i| i.scheduled_at = evt.value()),
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "field",
                            label { "Duration (minutes)" }
                            input {
                                class: "input",
                                r#type: "number",
                                min: "15",
                                value: "{input.duration_minutes}",
                                oninput: move |evt| {
                                    let minutes = evt.value().parse().unwrap_or(60);
                                    edit(draft, |i| i.duration_minutes = minutes);
                                },
                            }
                        }
                        div {
                            class: "field",
                            label { "Max participants" }
                            input {
                                class: "input",
                                r#type: "number",
                                min: "1",
                                value: "{input.max_participants}",
                                oninput: move |evt| {
                                    let seats = evt.value().parse().unwrap_or(100);
                                    edit(draft, |i| i.max_participants = seats);
                                },
                            }
                        }
                    }
                    label { "Meeting URL" }
                    input {
                        class: "input",
                        r#type: "url",
                        placeholder: "https://meet.google.com/...",
                        value: input.meeting_url.clone().unwrap_or_default(),
                        oninput: move |evt| {
                            let url = evt.value();
                            edit(draft, |i| i.meeting_url = (!url.trim().is_empty()).then_some(url));
                        },
                    }
                    div {
                        class: "modal-actions",
                        button { class: "btn btn-outline", r#type: "button", onclick: move |_| draft.set(None), "Cancel" }
                        button { class: "btn btn-primary", r#type: "submit", "Schedule" }
                    }
                }
            }
        }

        if let Some((_, title)) = deleting() {
            ConfirmDelete {
                what: title,
                on_confirm: confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

fn when(scheduled_at: &Option<String>) -> &str {
    scheduled_at.as_deref().map(short_date).unwrap_or("TBA")
}

fn status_label(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Scheduled => "Scheduled",
        SessionStatus::Live => "Live",
        SessionStatus::Completed => "Completed",
    }
}

fn edit(mut draft: Signal<Option<LiveSessionInput>>, change: impl FnOnce(&mut LiveSessionInput)) {
    if let Some(input) = draft.write().as_mut() {
        change(input);
    }
}
