use dioxus::prelude::*;
use store::models::{format_rupiah, CourseInput};
use ui::icons::{FaPen, FaTrash};
use ui::views::ModalOverlay;
use ui::{toast_error, toast_success, use_auth, use_content, use_toasts, Icon};

use super::{use_public_refresh, AdminHeader, ConfirmDelete};

/// Course editor state: `None` id means a new course.
#[derive(Clone, PartialEq)]
struct Editing {
    id: Option<String>,
    input: CourseInput,
}

#[component]
pub fn AdminCourses() -> Element {
    let auth = use_auth();
    let content = use_content();
    let mut toasts = use_toasts();
    let mut refresh_public = use_public_refresh();
    let mut editing = use_signal(|| Option::<Editing>::None);
    let mut deleting = use_signal(|| Option::<(String, String)>::None);

    let mut courses = use_resource(move || async move {
        let client = auth.peek().api();
        client.courses(None).await
    });

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(Editing { id, input }) = editing.peek().clone() else {
            return;
        };
        spawn(async move {
            let client = auth.peek().api();
            let result = match &id {
                Some(id) => client.update_course(id, &input).await,
                None => client.create_course(&input).await,
            };
            match result {
                Ok(_) => {
                    toast_success(&mut toasts, if id.is_some() { "Course updated" } else { "Course created" });
                    editing.set(None);
                    courses.restart();
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
            match client.delete_course(&id).await {
                Ok(()) => {
                    toast_success(&mut toasts, "Course deleted");
                    courses.restart();
                    refresh_public();
                }
                Err(e) => toast_error(&mut toasts, &e.user_message()),
            }
        });
    };

    let categories = content.read().categories.clone();

    let list = match &*courses.read() {
        None => rsx! { p { class: "muted", "Loading..." } },
        Some(Err(e)) => rsx! { p { class: "form-error", "{e.user_message()}" } },
        Some(Ok(list)) => rsx! {
            table {
                class: "admin-table",
                thead {
                    tr { th { "Title" } th { "Category" } th { "Level" } th { "Price" } th {} }
                }
                tbody {
                    for course in list.iter().cloned() {
                        tr {
                            key: "{course.id}",
                            td { "{course.title}" }
                            td { "{course.category}" }
                            td { "{course.level}" }
                            td { if course.is_free { "Free" } else { "{format_rupiah(course.price)}" } }
                            td {
                                class: "row-actions",
                                button {
                                    class: "icon-button",
                                    onclick: {
                                        let course = course.clone();
                                        move |_| editing.set(Some(Editing {
                                            id: Some(course.id.clone()),
                                            input: CourseInput::from(&course),
                                        }))
                                    },
                                    Icon { icon: FaPen, width: 12, height: 12 }
                                }
                                button {
                                    class: "icon-button danger",
                                    onclick: {
                                        let target = (course.id.clone(), course.title.clone());
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
            title: "Courses",
            on_new: move |_| editing.set(Some(Editing { id: None, input: CourseInput::default() })),
        }
        {list}

        if let Some(current) = editing() {
            ModalOverlay {
                on_close: move |_| editing.set(None),
                form {
                    class: "modal-body form",
                    onsubmit: save,
                    h3 { if current.id.is_some() { "Edit course" } else { "New course" } }
                    label { "Title" }
                    input {
                        class: "input",
                        required: true,
                        value: "{current.input.title}",
                        oninput: move |evt| edit(editing, |i| i.title = evt.value()),
                    }
                    label { "Description" }
                    textarea {
                        class: "input",
                        rows: "4",
                        value: "{current.input.description}",
                        oninput: move |evt| edit(editing, |i| i.description = evt.value()),
                    }
                    label { "Thumbnail URL" }
                    input {
                        class: "input",
                        value: current.input.thumbnail.clone().unwrap_or_default(),
                        oninput: move |evt| {
                            let url = evt.value();
                            edit(editing, |i| i.thumbnail = (!url.trim().is_empty()).then_some(url));
                        },
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
                                option { value: "", "Choose..." }
                                for cat in categories.iter() {
                                    option { key: "{cat.id}", value: "{cat.id}", "{cat.name}" }
                                }
                            }
                        }
                        div {
                            class: "field",
                            label { "Level" }
                            select {
                                class: "input",
                                value: "{current.input.level}",
                                onchange: move |evt| edit(editing, |i| i.level = evt.value()),
                                option { value: "beginner", "Beginner" }
                                option { value: "intermediate", "Intermediate" }
                                option { value: "advanced", "Advanced" }
                            }
                        }
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "field",
                            label { "Price (Rp)" }
                            input {
                                class: "input",
                                r#type: "number",
                                min: "0",
                                value: "{current.input.price}",
                                oninput: move |evt| {
                                    let price = evt.value().parse().unwrap_or(0.0);
                                    edit(editing, |i| i.price = price);
                                },
                            }
                        }
                        div {
                            class: "field",
                            label { "Duration (hours)" }
                            input {
                                class: "input",
                                r#type: "number",
                                min: "0",
                                value: "{current.input.duration_hours}",
                                oninput: move |evt| {
                                    let hours = evt.value().parse().unwrap_or(0);
                                    edit(editing, |i| i.duration_hours = hours);
                                },
                            }
                        }
                    }
                    label { "Instructor" }
                    input {
                        class: "input",
                        value: "{current.input.instructor}",
                        oninput: move |evt| edit(editing, |i| i.instructor = evt.value()),
                    }
                    label {
                        class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: current.input.is_free,
                            onchange: move |evt| edit(editing, |i| i.is_free = evt.checked()),
                        }
                        " Free course"
                    }
                    div {
                        class: "modal-actions",
                        button { class: "btn btn-outline", r#type: "button", onclick: move |_| editing.set(None), "Cancel" }
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
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

fn edit(mut editing: Signal<Option<Editing>>, change: impl FnOnce(&mut CourseInput)) {
    if let Some(current) = editing.write().as_mut() {
        change(&mut current.input);
    }
}
