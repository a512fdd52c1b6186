//! Landing page hero section.

use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "container hero-content",
                h1 { class: "hero-title",
                    "Your Trusted"
                    span { class: "hero-accent", "Financial Partner" }
                }

                p { class: "hero-lead",
                    "Welcome to Crestline Lending. Get instant customer support through our \
                     assistant, answers to your loan inquiries, and a direct line to our \
                     expert team, around the clock."
                }

                div { class: "hero-cta",
                    a { class: "btn btn-hero btn-lg", href: "/chat", "Start Chat Now" }
                    a { class: "btn btn-outline-light btn-lg", href: "/auth", "Login to Account" }
                }

                div { class: "hero-features",
                    div { class: "hero-feature",
                        h3 { "24/7 Support" }
                        p { "Round-the-clock assistance for all your loan inquiries and customer service needs." }
                    }
                    div { class: "hero-feature",
                        h3 { "Secure & Trusted" }
                        p { "Your data is protected with bank-level security and confidentiality standards." }
                    }
                    div { class: "hero-feature",
                        h3 { "Expert Team" }
                        p { "Connect with our experienced loan specialists for personalized financial solutions." }
                    }
                }
            }
        }
    }
}
