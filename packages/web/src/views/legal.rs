use dioxus::prelude::*;

#[component]
fn StaticPage(title: &'static str, sections: &'static [(&'static str, &'static str)]) -> Element {
    rsx! {
        article {
            class: "static-page prose",
            h1 { "{title}" }
            for (heading, body) in sections.iter() {
                section {
                    key: "{heading}",
                    h2 { "{heading}" }
                    p { "{body}" }
                }
            }
        }
    }
}

const TERMS: &[(&str, &str)] = &[
    ("Accounts", "You are responsible for keeping your login credentials private. One account is for one learner."),
    ("Purchases", "Course purchases grant lifetime access to the purchased course. Subscriptions renew until cancelled."),
    ("Content", "Course material is for personal learning and may not be redistributed."),
    ("Certificates", "Certificates are issued after every lesson of a course is completed and are signed by the Mavecode team."),
];

const PRIVACY: &[(&str, &str)] = &[
    ("What we collect", "Your name, email, optional phone number and learning progress."),
    ("What stays on your device", "Your theme, saved articles and extended profile are stored in your browser only."),
    ("How we use it", "To run your account, track course progress and issue certificates. We never sell your data."),
    ("Contact", "Reach us at hello@mavecode.my.id for any privacy request."),
];

#[component]
pub fn Terms() -> Element {
    rsx! { StaticPage { title: "Terms & Conditions", sections: TERMS } }
}

#[component]
pub fn Privacy() -> Element {
    rsx! { StaticPage { title: "Privacy Policy", sections: PRIVACY } }
}
