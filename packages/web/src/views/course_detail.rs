//! Course detail page with the enrollment and checkout entry point.

use dioxus::prelude::*;
use store::models::{format_rupiah, Course};
use ui::icons::{FaCirclePlay, FaClock, FaLock, FaSignal, FaUser};
use ui::{use_auth, use_content, ContentPlaceholder, Icon, PaymentModal};

use crate::Route;

#[component]
pub fn CourseDetail(id: String) -> Element {
    let content = use_content();
    let auth = use_auth();
    let nav = use_navigator();
    let mut show_payment = use_signal(|| false);

    let cached = content.read().course_by_id(&id).cloned();
    let course_id = id.clone();
    let fetched = use_resource(use_reactive!(|course_id| async move {
        let client = auth.peek().api();
        futures::join!(client.course(&course_id), client.videos(&course_id))
    }));

    let (remote, videos) = match &*fetched.read() {
        Some((course, videos)) => (
            course.as_ref().ok().cloned(),
            videos.as_ref().cloned().unwrap_or_default(),
        ),
        None => (None, Vec::new()),
    };
    let Some(course) = remote.or(cached) else {
        return if fetched.read().is_none() {
            rsx! { div { class: "page-loading", "Loading..." } }
        } else {
            rsx! {
                ContentPlaceholder {
                    title: "Course not found",
                    message: "It may have been removed or unpublished.",
                }
            }
        };
    };

    let enroll = {
        let course = course.clone();
        move |_| {
            if !auth.peek().is_authenticated() {
                nav.push(Route::Login {});
            } else if course.is_free {
                nav.push(Route::CoursePlayer { id: course.id.clone() });
            } else {
                show_payment.set(true);
            }
        }
    };

    let total_minutes: u32 = videos.iter().map(|v| v.duration_minutes).sum();

    rsx! {
        section {
            class: "course-hero",
            div {
                class: "course-hero-text",
                span { class: "card-category", "{course.category}" }
                h1 { "{course.title}" }
                p { class: "muted", "{course.description}" }
                div {
                    class: "card-meta",
                    span { Icon { icon: FaUser, width: 12, height: 12 } " {course.instructor}" }
                    span { Icon { icon: FaSignal, width: 12, height: 12 } " {course.level}" }
                    span { Icon { icon: FaClock, width: 12, height: 12 } " {course.duration_hours} hours" }
                }
            }
            PriceBox { course: course.clone(), on_enroll: enroll }
        }

        section {
            class: "section",
            h2 { "Curriculum" }
            if videos.is_empty() {
                p { class: "muted", "The curriculum is being prepared." }
            } else {
                p { class: "muted", "{videos.len()} lessons, {total_minutes} minutes" }
                ol {
                    class: "lesson-list",
                    for video in videos {
                        li {
                            key: "{video.id}",
                            if video.is_preview || course.is_free {
                                Icon { icon: FaCirclePlay, width: 14, height: 14 }
                            } else {
                                Icon { icon: FaLock, width: 14, height: 14 }
                            }
                            span { " {video.title}" }
                            span { class: "muted", "{video.duration_minutes} min" }
                        }
                    }
                }
            }
        }

        if show_payment() {
            PaymentModal {
                course: course.clone(),
                on_close: move |_| show_payment.set(false),
                on_success: {
                    let id = course.id.clone();
                    move |_| {
                        show_payment.set(false);
                        nav.push(Route::CoursePlayer { id: id.clone() });
                    }
                },
            }
        }
    }
}

#[component]
fn PriceBox(course: Course, on_enroll: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "price-box",
            if let Some(thumb) = &course.thumbnail {
                img { src: "{thumb}", alt: "{course.title}" }
            }
            if course.is_free {
                strong { class: "card-price free", "Free" }
            } else {
                strong { class: "card-price", "{format_rupiah(course.price)}" }
            }
            button {
                class: "btn btn-primary btn-block",
                onclick: move |evt| on_enroll.call(evt),
                if course.is_free { "Start learning" } else { "Buy course" }
            }
        }
    }
}
