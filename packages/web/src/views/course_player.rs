//! Lesson player: video, lesson list with completion, and the module quiz.

use dioxus::prelude::*;
use store::models::{Course, Video};
use store::progress::ProgressBook;
use ui::icons::{FaArrowLeft, FaAward, FaCircle, FaCircleCheck};
use ui::{
    toast_error, toast_success, use_auth, use_content, use_toasts, ContentPlaceholder, Icon,
    QuizView,
};

use crate::Route;

/// Rewrite YouTube watch and short links into their embeddable form.
fn embed_url(url: &str) -> String {
    let id = url
        .split_once("youtube.com/watch?v=")
        .or_else(|| url.split_once("youtu.be/"))
        .map(|(_, rest)| rest.split(['&', '?']).next().unwrap_or(rest));
    match id {
        Some(id) if !id.is_empty() => format!("https://www.youtube.com/embed/{id}"),
        _ => url.to_string(),
    }
}

struct PlayerData {
    course: Option<Course>,
    videos: Vec<Video>,
}

#[component]
pub fn CoursePlayer(id: String) -> Element {
    let auth = use_auth();
    let content = use_content();
    let mut toasts = use_toasts();
    let mut current = use_signal(|| 0usize);
    let mut book = use_signal(ProgressBook::default);
    let mut show_quiz = use_signal(|| false);

    let course_id = id.clone();
    let data = use_resource(use_reactive!(|course_id| async move {
        let client = auth.peek().api();
        let (course, videos, progress) = futures::join!(
            client.course(&course_id),
            client.videos(&course_id),
            client.progress(&course_id)
        );
        let records = progress.unwrap_or_else(|e| {
            tracing::warn!("could not load progress for {course_id}: {e}");
            Vec::new()
        });
        book.set(ProgressBook::new(course_id.clone(), records));
        let videos = videos.unwrap_or_else(|e| {
            tracing::error!("could not load lessons for {course_id}: {e}");
            Vec::new()
        });
        PlayerData {
            course: course.ok(),
            videos,
        }
    }));

    let guard = data.read();
    let Some(loaded) = &*guard else {
        return rsx! { div { class: "page-loading", "Loading..." } };
    };
    let Some(course) = loaded
        .course
        .clone()
        .or_else(|| content.read().course_by_id(&id).cloned())
    else {
        return rsx! {
            ContentPlaceholder { title: "Course not found" }
        };
    };
    let videos = loaded.videos.clone();
    drop(guard);

    let index = current().min(videos.len().saturating_sub(1));
    let lesson = videos.get(index).cloned();
    let percent = book.read().percent(videos.len());

    let toggle_lesson = move |video_id: String| {
        let record = book.peek().toggled_record(&video_id);
        spawn(async move {
            let client = auth.peek().api();
            match client.save_progress(&record).await {
                Ok(()) => {
                    let completed = record.completed;
                    book.write().apply(record);
                    if completed {
                        toast_success(&mut toasts, "Lesson completed");
                    }
                }
                Err(e) => toast_error(&mut toasts, &e.user_message()),
            }
        });
    };

    rsx! {
        div {
            class: "player",
            aside {
                class: "player-sidebar",
                Link {
                    class: "link-button",
                    to: Route::CourseDetail { id: course.id.clone() },
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    " Back to course"
                }
                h2 { "{course.title}" }
                div {
                    class: "progress-bar",
                    div { class: "progress-bar-fill", style: "width: {percent}%" }
                }
                span { class: "muted", "{percent}% complete" }
                ol {
                    class: "lesson-list",
                    for (i, video) in videos.iter().enumerate() {
                        li {
                            key: "{video.id}",
                            class: if i == index { "lesson active" } else { "lesson" },
                            button {
                                class: "lesson-check",
                                title: "Toggle completed",
                                onclick: {
                                    let video_id = video.id.clone();
                                    let mut toggle_lesson = toggle_lesson;
                                    move |_| toggle_lesson(video_id.clone())
                                },
                                if book.read().is_completed(&video.id) {
                                    Icon { icon: FaCircleCheck, width: 14, height: 14 }
                                } else {
                                    Icon { icon: FaCircle, width: 14, height: 14 }
                                }
                            }
                            button {
                                class: "lesson-title",
                                onclick: move |_| {
                                    current.set(i);
                                    show_quiz.set(false);
                                },
                                "{video.title}"
                            }
                        }
                    }
                }
                button {
                    class: "btn btn-outline btn-block",
                    onclick: move |_| show_quiz.set(true),
                    "Take the quiz"
                }
                if percent == 100 {
                    Link {
                        class: "btn btn-primary btn-block",
                        to: Route::CertificatePage { course_id: course.id.clone() },
                        Icon { icon: FaAward, width: 14, height: 14 }
                        " View certificate"
                    }
                }
            }
            section {
                class: "player-main",
                if show_quiz() {
                    QuizView {
                        on_complete: move |score: usize| {
                            toast_success(&mut toasts, &format!("Quiz finished: {score} correct"));
                        },
                    }
                } else if let Some(lesson) = lesson {
                    div {
                        class: "video-frame",
                        iframe {
                            src: embed_url(&lesson.video_url),
                            title: "{lesson.title}",
                            allow: "accelerometer; autoplay; encrypted-media; picture-in-picture",
                            allowfullscreen: true,
                        }
                    }
                    h2 { "{lesson.title}" }
                    if let Some(description) = &lesson.description {
                        p { class: "muted", "{description}" }
                    }
                    div {
                        class: "player-nav",
                        button {
                            class: "btn btn-outline",
                            disabled: index == 0,
                            onclick: move |_| current.set(index.saturating_sub(1)),
                            "Previous"
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: index + 1 >= videos.len(),
                            onclick: move |_| current.set(index + 1),
                            "Next lesson"
                        }
                    }
                } else {
                    ContentPlaceholder {
                        title: "No lessons yet",
                        message: "Lessons for this course will appear here.",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_url() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=abc123&t=10"),
            "https://www.youtube.com/embed/abc123"
        );
        assert_eq!(embed_url("https://youtu.be/xyz?si=1"), "https://www.youtube.com/embed/xyz");
        assert_eq!(embed_url("https://cdn.example.com/a.mp4"), "https://cdn.example.com/a.mp4");
    }
}
