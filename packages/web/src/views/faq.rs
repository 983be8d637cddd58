use dioxus::prelude::*;
use ui::icons::{FaChevronDown, FaChevronUp, FaWhatsapp};
use ui::{list_state, use_content, ContentPlaceholder, Icon, ListState, SkeletonGrid, WHATSAPP_URL};

/// FAQ accordion grouped by category, one answer open at a time.
#[component]
pub fn FaqPage() -> Element {
    let content = use_content();
    let mut open = use_signal(|| Option::<String>::None);
    let mut search = use_signal(String::new);

    let store = content.read();
    let needle = search().trim().to_lowercase();
    let mut groups: Vec<(String, Vec<store::models::Faq>)> = Vec::new();
    for faq in store.faqs.iter().filter(|f| {
        needle.is_empty()
            || f.question.to_lowercase().contains(&needle)
            || f.answer.to_lowercase().contains(&needle)
    }) {
        match groups.iter_mut().find(|(category, _)| *category == faq.category) {
            Some((_, items)) => items.push(faq.clone()),
            None => groups.push((faq.category.clone(), vec![faq.clone()])),
        }
    }
    let loading = store.loading;
    drop(store);

    rsx! {
        div {
            class: "page-header",
            h1 { "Frequently asked questions" }
            input {
                class: "input",
                r#type: "search",
                placeholder: "Search questions...",
                value: "{search}",
                oninput: move |evt| search.set(evt.value()),
            }
        }
        {match list_state(loading, groups.len()) {
            ListState::Loading => rsx! { SkeletonGrid { count: 2 } },
            ListState::Empty => rsx! { ContentPlaceholder { title: "No matching questions" } },
            ListState::Ready => rsx! {
                for (category, items) in groups {
                    section {
                        key: "{category}",
                        class: "faq-group",
                        h2 { class: "faq-category", "{category}" }
                        for faq in items {
                            div {
                                key: "{faq.id}",
                                class: "faq-item",
                                button {
                                    class: "faq-question",
                                    onclick: {
                                        let id = faq.id.clone();
                                        move |_| {
                                            let next = if open.peek().as_deref() == Some(id.as_str()) {
                                                None
                                            } else {
                                                Some(id.clone())
                                            };
                                            open.set(next);
                                        }
                                    },
                                    span { "{faq.question}" }
                                    if open.read().as_deref() == Some(faq.id.as_str()) {
                                        Icon { icon: FaChevronUp, width: 12, height: 12 }
                                    } else {
                                        Icon { icon: FaChevronDown, width: 12, height: 12 }
                                    }
                                }
                                if open.read().as_deref() == Some(faq.id.as_str()) {
                                    p { class: "faq-answer", "{faq.answer}" }
                                }
                            }
                        }
                    }
                }
            },
        }}
        div {
            class: "cta",
            p { "Still have a question?" }
            a {
                class: "btn btn-outline",
                href: WHATSAPP_URL,
                target: "_blank",
                Icon { icon: FaWhatsapp, width: 14, height: 14 }
                " Ask us on WhatsApp"
            }
        }
    }
}
