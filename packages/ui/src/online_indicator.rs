//! Connection badge for the navbar.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::icons::FaCloudArrowUp;
use crate::Icon;

/// Shown while a signed-in session cannot reach the backend; the 30 s
/// re-validation loop in [`AuthProvider`](crate::AuthProvider) clears it.
#[component]
pub fn OnlineIndicator() -> Element {
    let auth = use_auth();

    if !auth().is_offline() {
        return rsx! {};
    }

    rsx! {
        span {
            class: "online-indicator offline",
            title: "Offline: cannot reach Mavecode, retrying",
            Icon { icon: FaCloudArrowUp, width: 14, height: 14 }
            " Offline"
        }
    }
}
