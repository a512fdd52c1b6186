//! Full-page chat with the assistant. Authenticated users only.

use dioxus::prelude::*;
use ui::{ChatWidget, Header, RequireAuth};

#[component]
pub fn ChatPage() -> Element {
    rsx! {
        RequireAuth {
            div { class: "page",
                Header {}

                main { class: "container chat-page",
                    div { class: "chat-page-intro",
                        h1 { "Chat with the Crestline Assistant" }
                        p { class: "text-muted",
                            "Get instant help with loans, applications, and customer service."
                        }
                    }

                    ChatWidget { full_page: true }
                }
            }
        }
    }
}
