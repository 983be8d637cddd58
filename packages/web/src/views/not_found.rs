use dioxus::prelude::*;
use ui::icons::FaHouse;
use ui::Icon;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("no route for /{path}");

    rsx! {
        div {
            class: "not-found",
            h1 { class: "not-found-code", "404" }
            h2 { "Page not found" }
            p { class: "muted", "We couldn't find /{path}. It may have moved." }
            Link {
                class: "btn btn-primary",
                to: Route::Landing {},
                Icon { icon: FaHouse, width: 14, height: 14 }
                " Back home"
            }
        }
    }
}
