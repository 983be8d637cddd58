//! Focus mode context and widgets.
//!
//! [`FocusModeProvider`] owns the [`FocusTimer`] and runs the one-second
//! tick loop only while the timer is running. The loop's [`TickGuard`] lives
//! in a signal of the provider, so pausing, finishing an interval or
//! unmounting the provider all stop it.

use std::f64::consts::PI;
use std::time::Duration;

use dioxus::prelude::*;
use store::focus::{tick_loop, FocusPanel, FocusTimer, TickGuard};

use crate::icons::{
    FaBookOpen, FaMaximize, FaMinimize, FaMugHot, FaPause, FaPlay, FaRotateLeft, FaStopwatch,
    FaXmark,
};
use crate::platform;
use crate::toast::{push_toast, use_toasts, ToastKind};
use crate::Icon;

const RING_RADIUS: f64 = 66.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FocusState {
    pub timer: FocusTimer,
    pub panel: FocusPanel,
}

pub fn use_focus() -> Signal<FocusState> {
    use_context::<Signal<FocusState>>()
}

#[component]
pub fn FocusModeProvider(children: Element) -> Element {
    let focus = use_context_provider(|| Signal::new(FocusState::default()));
    let toasts = use_toasts();
    let mut ticker = use_signal(|| Option::<TickGuard>::None);
    let running = use_memo(move || focus.read().timer.is_running());

    use_effect(move || {
        if !running() {
            ticker.set(None);
            return;
        }
        let mut focus = focus;
        let mut toasts = toasts;
        let (run, guard) = tick_loop(
            || platform::sleep(Duration::from_secs(1)),
            move || {
                let event = focus.write().timer.tick();
                if let Some(event) = event {
                    push_toast(&mut toasts, ToastKind::Success, event.message());
                }
                focus.peek().timer.is_running()
            },
        );
        spawn(run);
        ticker.set(Some(guard));
    });

    rsx! {
        {children}
        FocusModeWidget {}
    }
}

/// Navbar button that opens the floating widget.
#[component]
pub fn FocusModeButton() -> Element {
    let mut focus = use_focus();

    rsx! {
        button {
            class: "icon-button",
            title: "Focus mode",
            onclick: move |_| focus.write().panel.open(),
            Icon { icon: FaStopwatch, width: 16, height: 16 }
        }
    }
}

#[component]
fn ProgressRing(progress: f64, on_break: bool) -> Element {
    let circumference = 2.0 * PI * RING_RADIUS;
    let offset = circumference * (1.0 - progress / 100.0);

    rsx! {
        svg {
            class: "focus-ring",
            view_box: "0 0 144 144",
            circle {
                class: "focus-ring-track",
                cx: "72",
                cy: "72",
                r: "{RING_RADIUS}",
                fill: "none",
                stroke_width: "6",
            }
            circle {
                class: if on_break { "focus-ring-bar break" } else { "focus-ring-bar" },
                cx: "72",
                cy: "72",
                r: "{RING_RADIUS}",
                fill: "none",
                stroke_width: "6",
                stroke_linecap: "round",
                stroke_dasharray: "{circumference}",
                stroke_dashoffset: "{offset}",
            }
        }
    }
}

#[component]
pub fn FocusModeWidget() -> Element {
    let mut focus = use_focus();
    let state = focus();
    let timer = &state.timer;

    if !state.panel.open {
        return rsx! {};
    }

    if state.panel.minimized {
        return rsx! {
            div {
                class: "focus-pill",
                span { class: if timer.is_running() { "focus-dot running" } else { "focus-dot" } }
                span {
                    class: if timer.is_break() { "focus-time break" } else { "focus-time" },
                    "{timer.format_time()}"
                }
                button {
                    class: "icon-button",
                    onclick: move |_| focus.write().timer.toggle(),
                    if timer.is_running() {
                        Icon { icon: FaPause, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaPlay, width: 14, height: 14 }
                    }
                }
                button {
                    class: "icon-button",
                    onclick: move |_| focus.write().panel.expand(),
                    Icon { icon: FaMaximize, width: 14, height: 14 }
                }
            }
        };
    }

    rsx! {
        div {
            class: "focus-widget",
            div {
                class: "focus-widget-header",
                span { class: "font-bold text-sm", "Focus Mode" }
                div {
                    button {
                        class: "icon-button",
                        onclick: move |_| focus.write().panel.minimize(),
                        Icon { icon: FaMinimize, width: 12, height: 12 }
                    }
                    button {
                        class: "icon-button danger",
                        onclick: move |_| focus.write().panel.close(),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
            div {
                class: "focus-widget-body",
                div {
                    class: if timer.is_break() { "focus-mode-badge break" } else { "focus-mode-badge" },
                    if timer.is_break() {
                        Icon { icon: FaMugHot, width: 12, height: 12 }
                        " Break"
                    } else {
                        Icon { icon: FaBookOpen, width: 12, height: 12 }
                        " Study"
                    }
                }
                div {
                    class: "focus-dial",
                    ProgressRing { progress: timer.progress(), on_break: timer.is_break() }
                    span { class: "focus-dial-time", "{timer.format_time()}" }
                }
                TimerControls {}
                p { class: "focus-sessions", "Sessions completed: {timer.sessions()}" }
            }
        }
    }
}

#[component]
fn TimerControls() -> Element {
    let mut focus = use_focus();
    let running = focus().timer.is_running();

    rsx! {
        div {
            class: "focus-controls",
            button {
                class: "round-button outline",
                title: "Reset",
                onclick: move |_| focus.write().timer.reset(),
                Icon { icon: FaRotateLeft, width: 16, height: 16 }
            }
            button {
                class: "round-button primary",
                title: if running { "Pause" } else { "Start" },
                onclick: move |_| focus.write().timer.toggle(),
                if running {
                    Icon { icon: FaPause, width: 20, height: 20 }
                } else {
                    Icon { icon: FaPlay, width: 20, height: 20 }
                }
            }
        }
    }
}

/// The large dashboard timer. Shares state with the floating widget.
#[component]
pub fn PomodoroTimer() -> Element {
    let mut focus = use_focus();
    let state = focus();
    let timer = &state.timer;

    rsx! {
        div {
            class: "card pomodoro",
            div {
                class: "pomodoro-header",
                h3 { "Pomodoro Timer" }
                span {
                    class: if timer.is_break() { "focus-mode-badge break" } else { "focus-mode-badge" },
                    if timer.is_break() { "Break" } else { "Study" }
                }
            }
            div {
                class: "focus-dial large",
                ProgressRing { progress: timer.progress(), on_break: timer.is_break() }
                span { class: "focus-dial-time", "{timer.format_time()}" }
            }
            TimerControls {}
            div {
                class: "pomodoro-footer",
                span { "{timer.sessions()} sessions today" }
                button {
                    class: "link-button",
                    onclick: move |_| focus.write().timer.reset_all(),
                    "Start over"
                }
            }
        }
    }
}
