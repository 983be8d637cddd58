use dioxus::prelude::*;
use store::models::format_rupiah;
use ui::icons::FaCheck;
use ui::platform::open_in_new_tab;
use ui::{use_auth, whatsapp_chat_url, ContentPlaceholder, Icon, SkeletonGrid};

use crate::Route;

/// Subscription plans with a monthly/yearly switch.
#[component]
pub fn Pricing() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut yearly = use_signal(|| false);

    let plans = use_resource(move || async move {
        let client = auth.peek().api();
        client.subscriptions().await
    });

    let body = match &*plans.read() {
        None => rsx! { SkeletonGrid { count: 3 } },
        Some(Err(e)) => {
            let message = e.user_message();
            rsx! { ContentPlaceholder { title: "Plans are unavailable", message } }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            ContentPlaceholder { title: "No plans yet", message: "Check back soon." }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "pricing-grid",
                for plan in list.iter().cloned() {
                    div {
                        key: "{plan.id}",
                        class: if plan.is_popular { "pricing-card popular" } else { "pricing-card" },
                        if plan.is_popular {
                            span { class: "badge popular", "Most popular" }
                        }
                        h3 { "{plan.name}" }
                        strong {
                            class: "pricing-amount",
                            if yearly() {
                                "{format_rupiah(plan.price_yearly)} / year"
                            } else {
                                "{format_rupiah(plan.price_monthly)} / month"
                            }
                        }
                        ul {
                            for feature in plan.features.iter() {
                                li { key: "{feature}", Icon { icon: FaCheck, width: 12, height: 12 } " {feature}" }
                            }
                        }
                        button {
                            class: "btn btn-primary btn-block",
                            onclick: {
                                let name = plan.name.clone();
                                move |_| {
                                    if !auth.peek().is_authenticated() {
                                        nav.push(Route::Register {});
                                        return;
                                    }
                                    let message = format!("Hi, I want to subscribe to the {name} plan");
                                    open_in_new_tab(&whatsapp_chat_url(&message));
                                }
                            },
                            "Choose plan"
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Pricing" }
            p { class: "muted", "One subscription, every course and live class." }
            div {
                class: "segmented",
                button {
                    class: if !yearly() { "active" } else { "" },
                    onclick: move |_| yearly.set(false),
                    "Monthly"
                }
                button {
                    class: if yearly() { "active" } else { "" },
                    onclick: move |_| yearly.set(true),
                    "Yearly"
                }
            }
        }
        {body}
    }
}
