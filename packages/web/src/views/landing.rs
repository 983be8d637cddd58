//! Landing page: hero, stats, categories and previews of every collection.

use dioxus::prelude::*;
use ui::icons::{FaArrowRight, FaBookOpen, FaChalkboardUser, FaUserGraduate, FaVideo};
use ui::{
    list_state, use_content, ArticleCard, CourseCard, Icon, ListState, LiveSessionCard,
    SkeletonGrid,
};

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let content = use_content();
    let store = content.read();
    let stats = store.stats();
    let hero = store.hero.clone();
    let courses: Vec<_> = store.courses.iter().take(6).cloned().collect();
    let articles: Vec<_> = store.articles.iter().take(3).cloned().collect();
    let sessions: Vec<_> = store.upcoming_sessions().into_iter().take(3).cloned().collect();
    let mentors: Vec<_> = store.mentors.iter().take(4).cloned().collect();
    let categories = store.categories.clone();
    let faqs: Vec<_> = store.faqs.iter().take(4).cloned().collect();
    let loading = store.loading;
    drop(store);

    let hero_style = hero
        .background_image
        .as_ref()
        .map(|url| format!("background-image: url('{url}')"))
        .unwrap_or_default();

    rsx! {
        section {
            class: "hero",
            style: "{hero_style}",
            span { class: "hero-badge", "{hero.badge_text}" }
            h1 { "{hero.title}" }
            p { class: "hero-subtitle", "{hero.subtitle}" }
            div {
                class: "hero-actions",
                Link { class: "btn btn-primary btn-lg", to: Route::Courses { category: String::new() }, "{hero.cta_text} " Icon { icon: FaArrowRight, width: 14, height: 14 } }
                Link { class: "btn btn-outline btn-lg", to: Route::Articles { category: String::new() }, "Read articles" }
            }
        }

        section {
            class: "stats-row",
            StatTile { label: "Courses", value: stats.courses, icon: rsx! { Icon { icon: FaBookOpen, width: 20, height: 20 } } }
            StatTile { label: "Students", value: stats.students, icon: rsx! { Icon { icon: FaUserGraduate, width: 20, height: 20 } } }
            StatTile { label: "Articles", value: stats.articles, icon: rsx! { Icon { icon: FaVideo, width: 20, height: 20 } } }
            StatTile { label: "Mentors", value: stats.mentors, icon: rsx! { Icon { icon: FaChalkboardUser, width: 20, height: 20 } } }
        }

        section {
            class: "section",
            h2 { "Browse by category" }
            div {
                class: "chip-row",
                for category in categories {
                    Link {
                        key: "{category.id}",
                        class: "chip",
                        to: Route::Courses { category: category.id.clone() },
                        "{category.name}"
                    }
                }
            }
        }

        section {
            class: "section",
            SectionHeader { title: "Popular courses", to: Route::Courses { category: String::new() } }
            {match list_state(loading, courses.len()) {
                ListState::Loading => rsx! { SkeletonGrid { count: 3 } },
                ListState::Empty => rsx! { p { class: "muted", "New courses are coming soon." } },
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

        if !sessions.is_empty() {
            section {
                class: "section",
                SectionHeader { title: "Upcoming live classes", to: Route::Live {} }
                div {
                    class: "card-grid",
                    for session in sessions {
                        LiveSessionCard { key: "{session.id}", session }
                    }
                }
            }
        }

        if !mentors.is_empty() {
            section {
                class: "section",
                h2 { "Learn from our mentors" }
                div {
                    class: "mentor-grid",
                    for mentor in mentors {
                        div {
                            key: "{mentor.id}",
                            class: "mentor-card",
                            if let Some(photo) = &mentor.photo_url {
                                img { src: "{photo}", alt: "{mentor.name}" }
                            }
                            h4 { "{mentor.name}" }
                            span { class: "muted", "{mentor.role}" }
                        }
                    }
                }
            }
        }

        section {
            class: "section",
            SectionHeader { title: "Latest articles", to: Route::Articles { category: String::new() } }
            {match list_state(loading, articles.len()) {
                ListState::Loading => rsx! { SkeletonGrid { count: 3 } },
                ListState::Empty => rsx! { p { class: "muted", "No articles yet." } },
                ListState::Ready => rsx! {
                    div {
                        class: "card-grid",
                        for article in articles {
                            ArticleCard { key: "{article.id}", article }
                        }
                    }
                },
            }}
        }

        if !faqs.is_empty() {
            section {
                class: "section",
                SectionHeader { title: "Frequently asked", to: Route::FaqPage {} }
                div {
                    class: "faq-list",
                    for faq in faqs {
                        details {
                            key: "{faq.id}",
                            summary { "{faq.question}" }
                            p { "{faq.answer}" }
                        }
                    }
                }
            }
        }

        section {
            class: "cta",
            h2 { "Ready to ship your first project?" }
            Link { class: "btn btn-primary btn-lg", to: Route::Register {}, "Join for free" }
        }
    }
}

#[component]
fn StatTile(label: &'static str, value: u64, icon: Element) -> Element {
    rsx! {
        div {
            class: "stat-tile",
            {icon}
            strong { "{value}+" }
            span { class: "muted", "{label}" }
        }
    }
}

#[component]
fn SectionHeader(title: &'static str, to: Route) -> Element {
    rsx! {
        div {
            class: "section-header",
            h2 { "{title}" }
            Link { class: "link-button", to, "See all " Icon { icon: FaArrowRight, width: 12, height: 12 } }
        }
    }
}
