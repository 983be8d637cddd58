//! Admin overview: backend stats, the hero editor and the seed action.

use dioxus::prelude::*;
use store::models::HeroContent;
use ui::icons::{FaBookOpen, FaChalkboardUser, FaDatabase, FaNewspaper, FaUserGraduate};
use ui::{toast_error, toast_success, use_auth, use_content, use_toasts, Icon};

use super::{use_public_refresh, AdminHeader};

#[component]
pub fn AdminDashboard() -> Element {
    let auth = use_auth();
    let content = use_content();
    let mut toasts = use_toasts();
    let mut refresh_public = use_public_refresh();
    let mut seeding = use_signal(|| false);
    let mut hero = use_signal(|| content.peek().hero.clone());

    let mut stats = use_resource(move || async move {
        let client = auth.peek().api();
        client.stats().await
    });
    // fall back to the content store's counts when /stats is down
    let numbers = match &*stats.read() {
        Some(Ok(stats)) => *stats,
        _ => content.read().stats(),
    };

    let seed = move |_| {
        seeding.set(true);
        spawn(async move {
            let client = auth.peek().api();
            match client.seed().await {
                Ok(()) => {
                    toast_success(&mut toasts, "Template data inserted");
                    stats.restart();
                    refresh_public();
                }
                Err(e) => toast_error(&mut toasts, &e.user_message()),
            }
            seeding.set(false);
        });
    };

    let save_hero = move |evt: FormEvent| {
        evt.prevent_default();
        let value: HeroContent = hero.peek().clone();
        spawn(async move {
            let client = auth.peek().api();
            match client.update_hero(&value).await {
                Ok(()) => {
                    toast_success(&mut toasts, "Hero updated");
                    refresh_public();
                }
                Err(e) => toast_error(&mut toasts, &e.user_message()),
            }
        });
    };

    let h = hero();

    rsx! {
        AdminHeader { title: "Dashboard" }
        div {
            class: "stats-row",
            div { class: "stat-tile", Icon { icon: FaBookOpen, width: 20, height: 20 } strong { "{numbers.courses}" } span { class: "muted", "Courses" } }
            div { class: "stat-tile", Icon { icon: FaUserGraduate, width: 20, height: 20 } strong { "{numbers.students}" } span { class: "muted", "Students" } }
            div { class: "stat-tile", Icon { icon: FaNewspaper, width: 20, height: 20 } strong { "{numbers.articles}" } span { class: "muted", "Articles" } }
            div { class: "stat-tile", Icon { icon: FaChalkboardUser, width: 20, height: 20 } strong { "{numbers.mentors}" } span { class: "muted", "Mentors" } }
        }

        section {
            class: "card admin-section",
            h2 { "Landing hero" }
            form {
                class: "form",
                onsubmit: save_hero,
                label { "Badge" }
                input { class: "input", value: "{h.badge_text}", oninput: move |evt| hero.write().badge_text = evt.value() }
                label { "Title" }
                input { class: "input", value: "{h.title}", oninput: move |evt| hero.write().title = evt.value() }
                label { "Subtitle" }
                textarea { class: "input", rows: "3", value: "{h.subtitle}", oninput: move |evt| hero.write().subtitle = evt.value() }
                label { "Button text" }
                input { class: "input", value: "{h.cta_text}", oninput: move |evt| hero.write().cta_text = evt.value() }
                label { "Background image URL" }
                input {
                    class: "input",
                    value: h.background_image.clone().unwrap_or_default(),
                    oninput: move |evt| {
                        let url = evt.value();
                        hero.write().background_image = (!url.trim().is_empty()).then_some(url);
                    },
                }
                button { class: "btn btn-primary", r#type: "submit", "Save hero" }
            }
        }

        section {
            class: "card admin-section",
            h2 { "Template data" }
            p { class: "muted", "Insert sample courses, articles, live classes and FAQs into an empty backend." }
            button {
                class: "btn btn-outline",
                disabled: seeding(),
                onclick: seed,
                Icon { icon: FaDatabase, width: 14, height: 14 }
                if seeding() { " Inserting..." } else { " Insert template data" }
            }
        }
    }
}
