use dioxus::prelude::*;
use store::models::ArticleInput;
use ui::icons::{FaPen, FaTrash};
use ui::platform::short_date;
use ui::views::ModalOverlay;
use ui::{render_markdown, toast_error, toast_success, use_auth, use_toasts, Icon};

use super::{use_public_refresh, AdminHeader, ConfirmDelete};

#[derive(Clone, PartialEq)]
struct Editing {
    id: Option<String>,
    input: ArticleInput,
    tags: String,
    preview: bool,
}

impl Editing {
    fn new(id: Option<String>, input: ArticleInput) -> Self {
        let tags = input.tags.join(", ");
        Self {
            id,
            input,
            tags,
            preview: false,
        }
    }

    /// The body to send, with the comma-separated tag field split out.
    fn body(&self) -> ArticleInput {
        let mut input = self.input.clone();
        input.tags = self
            .tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        input
    }
}

#[component]
pub fn AdminArticles() -> Element {
    let auth = use_auth();
    let mut toasts = use_toasts();
    let mut refresh_public = use_public_refresh();
    let mut editing = use_signal(|| Option::<Editing>::None);
    let mut deleting = use_signal(|| Option::<(String, String)>::None);

    let mut articles = use_resource(move || async move {
        let client = auth.peek().api();
        client.articles(None).await
    });

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(current) = editing.peek().clone() else {
            return;
        };
        let body = current.body();
        spawn(async move {
            let client = auth.peek().api();
            let result = match &current.id {
                Some(id) => client.update_article(id, &body).await,
                None => client.create_article(&body).await,
            };
            match result {
                Ok(_) => {
                    toast_success(&mut toasts, "Article saved");
                    editing.set(None);
                    articles.restart();
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
            match client.delete_article(&id).await {
                Ok(()) => {
                    toast_success(&mut toasts, "Article deleted");
                    articles.restart();
                    refresh_public();
                }
                Err(e) => toast_error(&mut toasts, &e.user_message()),
            }
        });
    };

    let list = match &*articles.read() {
        None => rsx! { p { class: "muted", "Loading..." } },
        Some(Err(e)) => rsx! { p { class: "form-error", "{e.user_message()}" } },
        Some(Ok(list)) => rsx! {
            table {
                class: "admin-table",
                thead {
                    tr { th { "Title" } th { "Category" } th { "Author" } th { "Views" } th { "Published" } th {} }
                }
                tbody {
                    for article in list.iter().cloned() {
                        tr {
                            key: "{article.id}",
                            td { "{article.title}" }
                            td { "{article.category}" }
                            td { "{article.author}" }
                            td { "{article.views}" }
                            td { "{published(&article.created_at)}" }
                            td {
                                class: "row-actions",
                                button {
                                    class: "icon-button",
                                    onclick: {
                                        let article = article.clone();
                                        move |_| editing.set(Some(Editing::new(
                                            Some(article.id.clone()),
                                            ArticleInput::from(&article),
                                        )))
                                    },
                                    Icon { icon: FaPen, width: 12, height: 12 }
                                }
                                button {
                                    class: "icon-button danger",
                                    onclick: {
                                        let target = (article.id.clone(), article.title.clone());
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
            title: "Articles",
            on_new: move |_| editing.set(Some(Editing::new(None, ArticleInput::default()))),
        }
        {list}

        if let Some(current) = editing() {
            ModalOverlay {
                on_close: move |_| editing.set(None),
                form {
                    class: "modal-body form wide",
                    onsubmit: save,
                    h3 { if current.id.is_some() { "Edit article" } else { "New article" } }
                    label { "Title" }
                    input {
                        class: "input",
                        required: true,
                        value: "{current.input.title}",
                        oninput: move |evt| edit(editing, |e| e.input.title = evt.value()),
                    }
                    label { "Excerpt" }
                    input {
                        class: "input",
                        value: current.input.excerpt.clone().unwrap_or_default(),
                        oninput: move |evt| {
                            let text = evt.value();
                            edit(editing, |e| e.input.excerpt = (!text.trim().is_empty()).then_some(text));
                        },
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "field",
                            label { "Category" }
                            input {
                                class: "input",
                                value: "{current.input.category}",
                                oninput: move |evt| edit(editing, |e| e.input.category = evt.value()),
                            }
                        }
                        div {
                            class: "field",
                            label { "Author" }
                            input {
                                class: "input",
                                value: "{current.input.author}",
                                oninput: move |evt| edit(editing, |e| e.input.author = evt.value()),
                            }
                        }
                    }
                    label { "Thumbnail URL" }
                    input {
                        class: "input",
                        value: current.input.thumbnail.clone().unwrap_or_default(),
                        oninput: move |evt| {
                            let url = evt.value();
                            edit(editing, |e| e.input.thumbnail = (!url.trim().is_empty()).then_some(url));
                        },
                    }
                    label { "Tags (comma separated)" }
                    input {
                        class: "input",
                        value: "{current.tags}",
                        oninput: move |evt| edit(editing, |e| e.tags = evt.value()),
                    }
                    div {
                        class: "editor-tabs",
                        button {
                            r#type: "button",
                            class: if !current.preview { "chip active" } else { "chip" },
                            onclick: move |_| edit(editing, |e| e.preview = false),
                            "Markdown"
                        }
                        button {
                            r#type: "button",
                            class: if current.preview { "chip active" } else { "chip" },
                            onclick: move |_| edit(editing, |e| e.preview = true),
                            "Preview"
                        }
                    }
                    if current.preview {
                        div {
                            class: "article-body prose preview",
                            dangerous_inner_html: render_markdown(&current.input.content),
                        }
                    } else {
                        textarea {
                            class: "input mono",
                            rows: "14",
                            value: "{current.input.content}",
                            oninput: move |evt| edit(editing, |e| e.input.content = evt.value()),
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

        if let Some((_, title)) = deleting() {
            ConfirmDelete {
                what: title,
                on_confirm: confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

fn published(created_at: &Option<String>) -> &str {
    created_at.as_deref().map(short_date).unwrap_or("-")
}

fn edit(mut editing: Signal<Option<Editing>>, change: impl FnOnce(&mut Editing)) {
    if let Some(current) = editing.write().as_mut() {
        change(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_split_and_trimmed() {
        let mut editing = Editing::new(None, ArticleInput::default());
        editing.tags = "rust,  wasm , ,dioxus".to_string();
        assert_eq!(editing.body().tags, vec!["rust", "wasm", "dioxus"]);

        let input = ArticleInput {
            tags: vec!["a".into(), "b".into()],
            ..Default::default()
        };
        assert_eq!(Editing::new(None, input).tags, "a, b");
    }
}
