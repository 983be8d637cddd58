use dioxus::prelude::*;

use crate::icons::{FaBars, FaXmark};
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top bar with the brand, a link area and a right-hand action area. On
/// narrow screens the links collapse behind a menu button.
#[component]
pub fn Navbar(children: Element, actions: Element) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        header {
            class: "navbar",
            Link {
                class: "navbar-brand",
                to: "/",
                span { class: "brand-mark", "</>" }
                span { "Mavecode" }
            }
            nav {
                class: if menu_open() { "navbar-links open" } else { "navbar-links" },
                onclick: move |_| menu_open.set(false),
                {children}
            }
            div {
                class: "navbar-actions",
                {actions}
                button {
                    class: "icon-button navbar-menu",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() {
                        Icon { icon: FaXmark, width: 18, height: 18 }
                    } else {
                        Icon { icon: FaBars, width: 18, height: 18 }
                    }
                }
            }
        }
    }
}
