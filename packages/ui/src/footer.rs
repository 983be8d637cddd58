use dioxus::prelude::*;

use crate::icons::{FaGithub, FaInstagram, FaLinkedin, FaWhatsapp, FaYoutube};
use crate::Icon;

pub const WHATSAPP_URL: &str = "https://wa.me/6285191769521";

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-grid",
                div {
                    h4 { "Mavecode" }
                    p { class: "muted", "Learn to code from zero to job-ready with mentors who ship." }
                    div {
                        class: "footer-social",
                        a { href: "https://github.com/mavecode", target: "_blank", Icon { icon: FaGithub, width: 18, height: 18 } }
                        a { href: "https://instagram.com/mavecode", target: "_blank", Icon { icon: FaInstagram, width: 18, height: 18 } }
                        a { href: "https://youtube.com/@mavecode", target: "_blank", Icon { icon: FaYoutube, width: 18, height: 18 } }
                        a { href: "https://linkedin.com/company/mavecode", target: "_blank", Icon { icon: FaLinkedin, width: 18, height: 18 } }
                        a { href: WHATSAPP_URL, target: "_blank", Icon { icon: FaWhatsapp, width: 18, height: 18 } }
                    }
                }
                div {
                    h4 { "Learn" }
                    Link { to: "/courses", "Courses" }
                    Link { to: "/articles", "Articles" }
                    Link { to: "/live", "Live classes" }
                }
                div {
                    h4 { "Company" }
                    Link { to: "/pricing", "Pricing" }
                    Link { to: "/faq", "FAQ" }
                    Link { to: "/contact", "Contact" }
                }
                div {
                    h4 { "Legal" }
                    Link { to: "/terms", "Terms" }
                    Link { to: "/privacy", "Privacy" }
                }
            }
            p { class: "footer-copy muted", "© Mavecode. All rights reserved." }
        }
    }
}
