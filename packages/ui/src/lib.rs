//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod platform;
pub mod views;

pub const UI_CSS: Asset = asset!("/assets/styling/ui.css");

mod toast;
pub use toast::{push_toast, toast_error, toast_success, use_toasts, ToastKind, ToastProvider, Toasts};

pub mod auth;
pub use auth::{use_auth, use_config, AuthProvider, AuthState};

mod theme;
pub use theme::{toggle_study_mode, toggle_theme, use_theme, ThemeProvider, ThemeToggle};

mod content;
pub use content::{refresh_from_rest, use_content, ContentProvider, FeedHandle};

mod focus;
pub use focus::{use_focus, FocusModeButton, FocusModeProvider, FocusState, PomodoroTimer};

mod online_indicator;
pub use online_indicator::OnlineIndicator;

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::{Footer, WHATSAPP_URL};

mod cards;
pub use cards::{ArticleCard, CourseCard, LiveSessionCard};

mod skeleton;
pub use skeleton::{list_state, CardSkeleton, ContentPlaceholder, ListState, SkeletonGrid};

mod markdown;
pub use markdown::render_markdown;

mod share;
pub use share::{whatsapp_chat_url, ShareButtons, ShareTarget};

mod chatbot;
pub use chatbot::Chatbot;

mod payment_modal;
pub use payment_modal::PaymentModal;

mod quiz;
pub use quiz::QuizView;
