use dioxus::prelude::*;
use ui::platform::open_in_new_tab;
use ui::{
    list_state, toast_error, toast_success, use_auth, use_content, use_toasts, ContentPlaceholder,
    ListState, LiveSessionCard, SkeletonGrid,
};

use crate::Route;

/// Live classes: what is on now and what is coming up.
#[component]
pub fn Live() -> Element {
    let content = use_content();
    let auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();

    let store = content.read();
    let live_now: Vec<_> = store.active_sessions().into_iter().cloned().collect();
    let upcoming: Vec<_> = store.upcoming_sessions().into_iter().cloned().collect();
    let loading = store.loading;
    drop(store);

    let join = move |id: String| {
        if !auth.peek().is_authenticated() {
            nav.push(Route::Login {});
            return;
        }
        spawn(async move {
            let client = auth.peek().api();
            match client.join_live_class(&id).await {
                Ok(result) => match result.meeting_url {
                    Some(url) => {
                        toast_success(&mut toasts, "You're in! Opening the meeting room");
                        open_in_new_tab(&url);
                    }
                    None => toast_success(&mut toasts, "Registered. The link will be shared before class"),
                },
                Err(e) => toast_error(&mut toasts, &e.user_message()),
            }
        });
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Live classes" }
            p { class: "muted", "Code along with mentors and ask questions in real time." }
        }
        if !live_now.is_empty() {
            section {
                class: "section",
                h2 { "Live now" }
                div {
                    class: "card-grid",
                    for session in live_now {
                        LiveSessionCard { key: "{session.id}", session, on_join: join }
                    }
                }
            }
        }
        section {
            class: "section",
            h2 { "Upcoming" }
            {match list_state(loading, upcoming.len()) {
                ListState::Loading => rsx! { SkeletonGrid { count: 3 } },
                ListState::Empty => rsx! {
                    ContentPlaceholder {
                        title: "No classes scheduled",
                        message: "New sessions are announced every week.",
                    }
                },
                ListState::Ready => rsx! {
                    div {
                        class: "card-grid",
                        for session in upcoming {
                            LiveSessionCard { key: "{session.id}", session, on_join: join }
                        }
                    }
                },
            }}
        }
    }
}
