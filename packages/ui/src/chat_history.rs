//! Chat history card: one saved conversation, expandable.

use api::{ChatSessionInfo, Sender};
use dioxus::prelude::*;

/// Keep the date part of an RFC 3339 timestamp for display.
pub(crate) fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

#[component]
pub fn ChatHistoryCard(session: ChatSessionInfo) -> Element {
    let mut expanded = use_signal(|| false);

    let message_count = session.messages.len();
    let user_count = session.user_message_count();

    rsx! {
        div { class: "card chat-history-card",
            div { class: "chat-history-head",
                h3 { "{session.title}" }
                span { class: "text-muted", "{date_part(&session.updated_at)}" }
            }
            p { class: "text-muted",
                "{message_count} messages ({user_count} from you)"
            }
            button {
                class: "btn btn-outline btn-sm",
                onclick: move |_| expanded.toggle(),
                if expanded() { "Hide conversation" } else { "View conversation" }
            }

            if expanded() {
                div { class: "chat-history-messages",
                    for (i, message) in session.messages.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: if message.sender == Sender::User { "chat-row chat-row-user" } else { "chat-row chat-row-bot" },
                            div { class: "chat-message", p { "{message.content}" } }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_part_strips_the_time() {
        assert_eq!(date_part("2025-03-04T12:30:00+00:00"), "2025-03-04");
        assert_eq!(date_part("not a timestamp"), "not a timestamp");
    }
}
