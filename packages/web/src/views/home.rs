//! Landing page: header, hero, services, FAQs, and the floating chat widget.

use api::FaqInfo;
use dioxus::prelude::*;
use ui::{ChatWidget, Header, Hero, Services};

#[component]
pub fn Home() -> Element {
    let faqs = use_resource(|| async { api::support::list_faqs().await.unwrap_or_default() });

    rsx! {
        div { class: "page",
            Header {}

            main {
                section { id: "home", Hero {} }
                section { id: "services", Services {} }

                if let Some(list) = faqs() {
                    if !list.is_empty() {
                        section { id: "faqs", class: "faqs",
                            div { class: "container",
                                h2 { "Frequently Asked Questions" }
                                for faq in list.iter() {
                                    FaqEntry { key: "{faq.id}", faq: faq.clone() }
                                }
                            }
                        }
                    }
                }
            }

            ChatWidget { start_minimized: true }
        }
    }
}

#[component]
fn FaqEntry(faq: FaqInfo) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "faq-entry",
            button {
                class: "faq-question",
                onclick: move |_| open.toggle(),
                "{faq.question}"
            }
            if open() {
                p { class: "faq-answer text-muted", "{faq.answer}" }
            }
        }
    }
}
