//! Member dashboard: continue learning, saved articles and the focus timer.

use dioxus::prelude::*;
use store::Bookmarks;
use ui::icons::{FaBookOpen, FaBookmark, FaBrain, FaChevronRight, FaStopwatch};
use ui::platform::make_storage;
use ui::{
    toggle_study_mode, use_auth, use_content, use_theme, ArticleCard, CourseCard, Icon,
    PomodoroTimer, SkeletonGrid,
};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let content = use_content();
    let theme = use_theme();
    let mut show_timer = use_signal(|| false);
    let saved_slugs = use_hook(|| Bookmarks::load(make_storage()).list().to_vec());

    let name = auth()
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "there".to_string());
    let study_mode = theme().study_mode;

    let store = content.read();
    let courses: Vec<_> = store.courses.iter().take(4).cloned().collect();
    let saved: Vec<_> = saved_slugs
        .iter()
        .filter_map(|slug| store.article_by_slug(slug).cloned())
        .collect();
    let sessions = store.upcoming_sessions().len();
    let loading = store.loading;
    drop(store);

    rsx! {
        div {
            class: "page-header dashboard-header",
            div {
                h1 { "Hi, {name}! 👋" }
                p { class: "muted", "Ready to level up your coding today?" }
            }
            div {
                class: "header-actions",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| show_timer.toggle(),
                    Icon { icon: FaStopwatch, width: 14, height: 14 }
                    " Focus mode"
                }
                button {
                    class: if study_mode { "btn btn-primary" } else { "btn btn-outline" },
                    onclick: move |_| toggle_study_mode(theme),
                    Icon { icon: FaBrain, width: 14, height: 14 }
                    if study_mode { " Study mode on" } else { " Study mode" }
                }
                Link {
                    class: "btn btn-primary",
                    to: Route::Courses { category: String::new() },
                    "Explore courses "
                    Icon { icon: FaChevronRight, width: 12, height: 12 }
                }
            }
        }

        div {
            class: "stats-row",
            div { class: "stat-tile", Icon { icon: FaBookOpen, width: 20, height: 20 } strong { "{courses.len()}" } span { class: "muted", "Courses to continue" } }
            div { class: "stat-tile", Icon { icon: FaBookmark, width: 20, height: 20 } strong { "{saved.len()}" } span { class: "muted", "Saved articles" } }
            div { class: "stat-tile", Icon { icon: FaStopwatch, width: 20, height: 20 } strong { "{sessions}" } span { class: "muted", "Upcoming live classes" } }
        }

        if show_timer() {
            section {
                class: "section",
                PomodoroTimer {}
            }
        }

        section {
            class: "section",
            h2 { "Continue learning" }
            if loading && courses.is_empty() {
                SkeletonGrid { count: 4 }
            } else {
                div {
                    class: "card-grid",
                    for course in courses {
                        CourseCard { key: "{course.id}", course }
                    }
                }
            }
        }

        section {
            class: "section",
            h2 { "Saved articles" }
            if saved.is_empty() {
                p {
                    class: "muted",
                    "Bookmark articles to read later. "
                    Link { to: Route::Articles { category: String::new() }, "Browse articles" }
                }
            } else {
                div {
                    class: "card-grid",
                    for article in saved {
                        ArticleCard { key: "{article.id}", saved: true, article }
                    }
                }
            }
        }
    }
}
