//! Admin CMS: layout gate, login and the CRUD pages.

use dioxus::prelude::*;
use ui::icons::{
    FaArrowRightFromBracket, FaAward, FaBookOpen, FaChartLine, FaCircleQuestion, FaNewspaper,
    FaVideo,
};
use ui::views::ModalOverlay;
use ui::{refresh_from_rest, use_auth, use_content, use_toasts, Icon};

use crate::Route;

mod articles;
pub use articles::AdminArticles;

mod certificates;
pub use certificates::AdminCertificates;

mod courses;
pub use courses::AdminCourses;

mod dashboard;
pub use dashboard::AdminDashboard;

mod faqs;
pub use faqs::AdminFaqs;

mod live;
pub use live::AdminLive;

mod login;
pub use login::AdminLogin;

/// Sidebar shell for `/admin/*`. Anyone without the admin flag is sent to
/// the admin login.
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let state = auth();

    if !state.is_admin() {
        nav.replace(Route::AdminLogin {});
        return rsx! {};
    }

    let links = [
        (Route::AdminDashboard {}, "Dashboard"),
        (Route::AdminCourses {}, "Courses"),
        (Route::AdminArticles {}, "Articles"),
        (Route::AdminLive {}, "Live classes"),
        (Route::AdminFaqs {}, "FAQ"),
        (Route::AdminCertificates {}, "Certificates"),
    ];

    rsx! {
        div {
            class: "admin-shell",
            aside {
                class: "admin-sidebar",
                Link { class: "navbar-brand", to: Route::Landing {}, span { class: "brand-mark", "</>" } " Mavecode Admin" }
                nav {
                    for (target, label) in links {
                        Link {
                            key: "{label}",
                            class: if route == target { "admin-link active" } else { "admin-link" },
                            to: target.clone(),
                            {nav_icon(&target)}
                            " {label}"
                        }
                    }
                }
                button {
                    class: "admin-link",
                    onclick: move |_| {
                        ui::auth::logout(auth);
                        nav.replace(Route::AdminLogin {});
                    },
                    Icon { icon: FaArrowRightFromBracket, width: 14, height: 14 }
                    " Sign out"
                }
            }
            main {
                class: "admin-main",
                Outlet::<Route> {}
            }
        }
    }
}

fn nav_icon(route: &Route) -> Element {
    match route {
        Route::AdminCourses {} => rsx! { Icon { icon: FaBookOpen, width: 14, height: 14 } },
        Route::AdminArticles {} => rsx! { Icon { icon: FaNewspaper, width: 14, height: 14 } },
        Route::AdminLive {} => rsx! { Icon { icon: FaVideo, width: 14, height: 14 } },
        Route::AdminFaqs {} => rsx! { Icon { icon: FaCircleQuestion, width: 14, height: 14 } },
        Route::AdminCertificates {} => rsx! { Icon { icon: FaAward, width: 14, height: 14 } },
        _ => rsx! { Icon { icon: FaChartLine, width: 14, height: 14 } },
    }
}

/// Push admin edits to the public pages by re-reading the REST lists.
pub(crate) fn use_public_refresh() -> impl FnMut() + Copy {
    let auth = use_auth();
    let content = use_content();
    let toasts = use_toasts();
    move || {
        let api = auth.peek().api();
        spawn(refresh_from_rest(content, api, toasts));
    }
}

/// Title row with an optional "new" button.
#[component]
pub(crate) fn AdminHeader(title: &'static str, on_new: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "admin-header",
            h1 { "{title}" }
            if let Some(on_new) = on_new {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_new.call(()),
                    "+ New"
                }
            }
        }
    }
}

/// Yes/no dialog in front of destructive actions.
#[component]
pub(crate) fn ConfirmDelete(what: String, on_confirm: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "modal-body",
                h3 { "Delete {what}?" }
                p { class: "muted", "This cannot be undone." }
                div {
                    class: "modal-actions",
                    button { class: "btn btn-outline", onclick: move |_| on_cancel.call(()), "Cancel" }
                    button { class: "btn btn-danger", onclick: move |_| on_confirm.call(()), "Delete" }
                }
            }
        }
    }
}
