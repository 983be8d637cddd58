use dioxus::prelude::*;
use store::Bookmarks;
use ui::icons::FaMagnifyingGlass;
use ui::platform::make_storage;
use ui::{list_state, use_content, ArticleCard, ContentPlaceholder, Icon, ListState, SkeletonGrid};

/// Article index with search and a category filter. Saved articles are badged.
#[component]
pub fn Articles(category: String) -> Element {
    let content = use_content();
    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| category.clone());
    let saved = use_hook(|| Bookmarks::load(make_storage()).list().to_vec());

    use_effect(use_reactive!(|category| selected.set(category)));

    let store = content.read();
    let needle = search();
    let active = selected();
    let articles: Vec<_> = store
        .articles
        .iter()
        .filter(|a| active.is_empty() || a.category == active)
        .filter(|a| a.matches_search(&needle))
        .cloned()
        .collect();
    let mut categories: Vec<String> = store.articles.iter().map(|a| a.category.clone()).collect();
    categories.sort();
    categories.dedup();
    let loading = store.loading;
    drop(store);

    rsx! {
        div {
            class: "page-header",
            h1 { "Articles" }
            p { class: "muted", "Tutorials, career notes and deep dives from the team." }
        }
        div {
            class: "filter-bar",
            label {
                class: "search-input",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    r#type: "search",
                    placeholder: "Search articles...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }
            div {
                class: "chip-row",
                button {
                    class: if active.is_empty() { "chip active" } else { "chip" },
                    onclick: move |_| selected.set(String::new()),
                    "All"
                }
                for cat in categories {
                    button {
                        key: "{cat}",
                        class: if active == cat { "chip active" } else { "chip" },
                        onclick: {
                            let cat = cat.clone();
                            move |_| selected.set(cat.clone())
                        },
                        "{cat}"
                    }
                }
            }
        }
        {match list_state(loading, articles.len()) {
            ListState::Loading => rsx! { SkeletonGrid {} },
            ListState::Empty => rsx! {
                ContentPlaceholder {
                    title: "No articles found",
                    message: "Try another keyword or category.",
                }
            },
            ListState::Ready => rsx! {
                div {
                    class: "card-grid",
                    for article in articles {
                        ArticleCard {
                            key: "{article.id}",
                            saved: saved.contains(&article.slug),
                            article,
                        }
                    }
                }
            },
        }}
    }
}
