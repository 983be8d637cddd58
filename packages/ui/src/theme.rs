//! Theme context: dark/light preference plus the in-memory study mode.

use dioxus::prelude::*;
use store::theme::{Theme, ThemeState};

use crate::icons::{FaMoon, FaSun};
use crate::platform::make_storage;
use crate::Icon;

pub fn use_theme() -> Signal<ThemeState> {
    use_context::<Signal<ThemeState>>()
}

pub fn toggle_theme(mut theme: Signal<ThemeState>) {
    let next = theme.peek().theme.toggled();
    if let Err(e) = next.save(&make_storage()) {
        tracing::warn!("could not save theme: {e}");
    }
    theme.write().theme = next;
}

pub fn toggle_study_mode(mut theme: Signal<ThemeState>) {
    let mut state = theme.write();
    state.study_mode = !state.study_mode;
}

/// Provides the theme and applies it as a class on the app root.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let theme = use_context_provider(|| {
        Signal::new(ThemeState {
            theme: Theme::load(&make_storage()),
            study_mode: false,
        })
    });
    let state = theme();

    rsx! {
        div {
            class: "app-root",
            "data-theme": state.theme.as_str(),
            "data-study-mode": if state.study_mode { "on" } else { "off" },
            {children}
        }
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let dark = theme().theme.is_dark();

    rsx! {
        button {
            class: "icon-button",
            title: if dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| toggle_theme(theme),
            if dark {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}
