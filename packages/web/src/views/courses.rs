use dioxus::prelude::*;
use ui::icons::FaMagnifyingGlass;
use ui::{list_state, use_content, ContentPlaceholder, CourseCard, Icon, ListState, SkeletonGrid};

/// Course catalog with text search and a category filter.
#[component]
pub fn Courses(category: String) -> Element {
    let content = use_content();
    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| category.clone());

    // the category in the URL wins when navigating between filters
    use_effect(use_reactive!(|category| selected.set(category)));

    let store = content.read();
    let needle = search();
    let active = selected();
    let courses: Vec<_> = store
        .courses
        .iter()
        .filter(|c| active.is_empty() || c.category == active)
        .filter(|c| c.matches_search(&needle))
        .cloned()
        .collect();
    let categories = store.categories.clone();
    let loading = store.loading;
    drop(store);

    rsx! {
        div {
            class: "page-header",
            h1 { "Courses" }
            p { class: "muted", "Structured paths from your first line of code to production." }
        }
        div {
            class: "filter-bar",
            label {
                class: "search-input",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    r#type: "search",
                    placeholder: "Search courses...",
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
                        key: "{cat.id}",
                        class: if active == cat.id { "chip active" } else { "chip" },
                        onclick: {
                            let id = cat.id.clone();
                            move |_| selected.set(id.clone())
                        },
                        "{cat.name}"
                    }
                }
            }
        }
        {match list_state(loading, courses.len()) {
            ListState::Loading => rsx! { SkeletonGrid {} },
            ListState::Empty => rsx! {
                ContentPlaceholder {
                    title: "No courses found",
                    message: "Try another keyword or category.",
                }
            },
            ListState::Ready => rsx! {
                div {
                    class: "card-grid",
                    for course in courses {
                        CourseCard { key: "{course.id}", course }
                    }
                }
            },
        }}
    }
}
