use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::icons::{FaArrowRightFromBracket, FaUser};
use ui::{
    use_auth, AuthProvider, Chatbot, ContentProvider, FocusModeButton, FocusModeProvider, Footer,
    Icon, Navbar, OnlineIndicator, ThemeProvider, ThemeToggle, ToastProvider,
};
use views::admin::{
    AdminArticles, AdminCertificates, AdminCourses, AdminDashboard, AdminFaqs, AdminLayout,
    AdminLive, AdminLogin,
};
use views::{
    ArticleDetail, Articles, BlockPage, CertificatePage, ClubPage, Contact, CourseDetail,
    CoursePlayer, Courses, Dashboard, FaqPage, Landing, Live, Login, NotFound, Pricing, Privacy,
    Profile, Register, Terms,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Landing {},
        #[route("/courses?:category")]
        Courses { category: String },
        #[route("/courses/:id")]
        CourseDetail { id: String },
        #[route("/articles?:category")]
        Articles { category: String },
        #[route("/articles/:slug")]
        ArticleDetail { slug: String },
        #[route("/pricing")]
        Pricing {},
        #[route("/faq")]
        FaqPage {},
        #[route("/live")]
        Live {},
        #[route("/club")]
        ClubPage {},
        #[route("/block")]
        BlockPage {},
        #[route("/contact")]
        Contact {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/terms")]
        Terms {},
        #[route("/privacy")]
        Privacy {},
        #[layout(RequireAuth)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/profile")]
            Profile {},
            #[route("/certificate/:course_id")]
            CertificatePage { course_id: String },
        #[end_layout]
    #[end_layout]
    #[layout(RequireAuth)]
        #[route("/courses/:id/learn")]
        CoursePlayer { id: String },
    #[end_layout]
    #[route("/admin/login")]
    AdminLogin {},
    #[layout(AdminLayout)]
        #[route("/admin")]
        AdminDashboard {},
        #[route("/admin/courses")]
        AdminCourses {},
        #[route("/admin/articles")]
        AdminArticles {},
        #[route("/admin/live")]
        AdminLive {},
        #[route("/admin/faq")]
        AdminFaqs {},
        #[route("/admin/certificates")]
        AdminCertificates {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                tracing::error!("render error: {errors:?}");
                rsx! { CrashScreen {} }
            },
            ToastProvider {
                AuthProvider {
                    ThemeProvider {
                        ContentProvider {
                            FocusModeProvider {
                                Router::<Route> {}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CrashScreen() -> Element {
    rsx! {
        div {
            class: "crash-screen",
            h1 { "Something went wrong" }
            p { class: "muted", "The page hit an unexpected error. Reloading usually fixes it." }
            button {
                class: "btn btn-primary",
                onclick: move |_| reload_page(),
                "Reload page"
            }
        }
    }
}

fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Public chrome: navbar, footer and the chat assistant.
#[component]
fn MainLayout() -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        Navbar {
            actions: rsx! {
                OnlineIndicator {}
                FocusModeButton {}
                ThemeToggle {}
                if state.is_authenticated() && !state.is_admin() {
                    Link {
                        class: "icon-button",
                        to: Route::Profile {},
                        Icon { icon: FaUser, width: 16, height: 16 }
                    }
                    button {
                        class: "icon-button",
                        title: "Sign out",
                        onclick: move |_| ui::auth::logout(auth),
                        Icon { icon: FaArrowRightFromBracket, width: 16, height: 16 }
                    }
                } else if !state.is_authenticated() {
                    Link { class: "btn btn-primary btn-sm", to: Route::Login {}, "Sign in" }
                }
            },
            Link { to: Route::Courses { category: String::new() }, "Courses" }
            Link { to: Route::Articles { category: String::new() }, "Articles" }
            Link { to: Route::Live {}, "Live Class" }
            Link { to: Route::ClubPage {}, "Club" }
            Link { to: Route::BlockPage {}, "Block" }
            Link { to: Route::Pricing {}, "Pricing" }
            Link { to: Route::FaqPage {}, "FAQ" }
            if state.is_authenticated() && !state.is_admin() {
                Link { to: Route::Dashboard {}, "Dashboard" }
            }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
        Footer {}
        Chatbot {}
    }
}

/// Gate for member pages: waits for session restore, then requires a token.
#[component]
fn RequireAuth() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();

    if state.loading {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }
    if !state.is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
