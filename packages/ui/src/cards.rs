//! Course and article cards used by the catalog pages and the landing page.

use dioxus::prelude::*;
use store::models::{format_rupiah, Article, Course, LiveSession};

use crate::icons::{FaBookmark, FaClock, FaEye, FaUser, FaUsers};
use crate::platform::short_date;
use crate::Icon;

const PLACEHOLDER_THUMB: &str =
    "https://images.unsplash.com/photo-1515879218367-8466d910aaa4?w=800&q=80";

#[component]
pub fn CourseCard(course: Course) -> Element {
    let thumb = course
        .thumbnail
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_THUMB.to_string());
    let price = if course.is_free {
        "Free".to_string()
    } else {
        format_rupiah(course.price)
    };

    rsx! {
        Link {
            class: "card course-card",
            to: "/courses/{course.id}",
            div {
                class: "card-thumb",
                img { src: "{thumb}", alt: "{course.title}", loading: "lazy" }
                span { class: "badge level", "{course.level}" }
            }
            div {
                class: "card-body",
                span { class: "card-category", "{course.category}" }
                h3 { class: "card-title", "{course.title}" }
                p { class: "card-text line-clamp-2", "{course.description}" }
                div {
                    class: "card-meta",
                    span { Icon { icon: FaUser, width: 12, height: 12 } " {course.instructor}" }
                    span { Icon { icon: FaClock, width: 12, height: 12 } " {course.duration_hours} hours" }
                }
                div {
                    class: if course.is_free { "card-price free" } else { "card-price" },
                    "{price}"
                }
            }
        }
    }
}

#[component]
pub fn ArticleCard(article: Article, #[props(default)] saved: bool) -> Element {
    let thumb = article
        .thumbnail
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_THUMB.to_string());
    let date = article.created_at.as_deref().map(short_date).unwrap_or_default().to_string();
    let minutes = article.reading_minutes();

    rsx! {
        Link {
            class: "card article-card",
            to: "/articles/{article.slug}",
            div {
                class: "card-thumb",
                img { src: "{thumb}", alt: "{article.title}", loading: "lazy" }
                if saved {
                    span { class: "badge saved", Icon { icon: FaBookmark, width: 12, height: 12 } }
                }
            }
            div {
                class: "card-body",
                span { class: "card-category", "{article.category}" }
                h3 { class: "card-title", "{article.title}" }
                if let Some(excerpt) = &article.excerpt {
                    p { class: "card-text line-clamp-2", "{excerpt}" }
                }
                div {
                    class: "card-meta",
                    span { "{date}" }
                    span { Icon { icon: FaClock, width: 12, height: 12 } " {minutes} min read" }
                    span { Icon { icon: FaEye, width: 12, height: 12 } " {article.views}" }
                }
            }
        }
    }
}

/// A live class row with an optional join action.
#[component]
pub fn LiveSessionCard(session: LiveSession, on_join: Option<EventHandler<String>>) -> Element {
    let when = session.scheduled_at.as_deref().map(short_date).unwrap_or("TBA").to_string();
    let full = session.is_full();
    let id = session.id.clone();

    rsx! {
        div {
            class: "card live-card",
            div {
                class: "live-card-head",
                if session.status == store::models::SessionStatus::Live {
                    span { class: "badge live", "LIVE" }
                }
                h3 { class: "card-title", "{session.title}" }
            }
            if let Some(description) = &session.description {
                p { class: "card-text", "{description}" }
            }
            div {
                class: "card-meta",
                span { Icon { icon: FaUser, width: 12, height: 12 } " {session.instructor}" }
                span { Icon { icon: FaClock, width: 12, height: 12 } " {when} · {session.duration_minutes} min" }
                span { Icon { icon: FaUsers, width: 12, height: 12 } " {session.participants_count}/{session.max_participants}" }
            }
            if let Some(on_join) = on_join {
                button {
                    class: "btn btn-primary",
                    disabled: full,
                    onclick: move |_| on_join.call(id.clone()),
                    if full { "Class full" } else { "Join class" }
                }
            }
        }
    }
}
