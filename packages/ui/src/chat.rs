//! Chat widget and the canned-response assistant.
//!
//! The "assistant" is a deterministic keyword lookup over the user's message,
//! not an inference engine; [`bot_response`] is a pure function so its mapping
//! is unit-testable. The widget itself handles the floating/minimized and
//! full-page presentations and offers to save the conversation for signed-in
//! users.

use api::{ChatMessage, Sender};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::toast::{show_toast, use_toasts, ToastLevel};

/// Greeting shown when the widget opens.
pub const WELCOME_MESSAGE: &str = "Hello! Welcome to Crestline Lending. I'm your virtual \
assistant, here to help with loan inquiries, applications, and customer service. How can I \
assist you today?";

/// One-tap prompts under the message list.
pub const QUICK_REPLIES: [&str; 5] = [
    "Loan Requirements",
    "Interest Rates",
    "Office Hours",
    "Submit Complaint",
    "Speak to Agent",
];

/// Map a user message to a canned reply. First matching keyword group wins.
pub fn bot_response(user_input: &str) -> &'static str {
    let input = user_input.to_lowercase();

    if input.contains("loan") || input.contains("borrow") {
        return "We offer Personal Loans, Home Loans, Auto Loans, Education Loans, and \
            Business Loans, each with competitive interest rates and flexible repayment \
            options. Which type of loan are you interested in?";
    }

    if input.contains("interest") || input.contains("rate") {
        return "Our interest rates vary by loan type and range from 12% to 18% annually. \
            Personal loans start at 15%, while home loans can be as low as 12%. Would you \
            like specific rate information for a particular loan type?";
    }

    if input.contains("requirement") || input.contains("document") {
        return "For loan applications you typically need: a valid ID, proof of income, \
            bank statements (3-6 months), a utility bill for address proof, and employment \
            verification. Requirements may vary by loan type. Which loan are you applying \
            for?";
    }

    if input.contains("office") || input.contains("location") || input.contains("address") {
        return "Our main office is open Monday to Friday, 8:00 AM to 6:00 PM. You can also \
            reach us at support@crestline-lending.example for any inquiries.";
    }

    if input.contains("complaint") || input.contains("problem") || input.contains("issue") {
        return "I'm sorry to hear you're experiencing an issue. You can submit a formal \
            complaint from your dashboard, or describe the problem here and I'll point you \
            to the right team.";
    }

    "Thank you for your question. I can help with information on our loans, requirements, \
        interest rates, and office hours. If you'd like to speak with a human agent, let me \
        know and I'll connect you with our support team."
}

fn clock_now() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        format!(
            "{:02}:{:02}",
            date.get_hours(),
            date.get_minutes()
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

fn welcome() -> Vec<ChatMessage> {
    vec![ChatMessage {
        content: WELCOME_MESSAGE.to_string(),
        sender: Sender::Bot,
        sent_at: clock_now(),
    }]
}

/// The chat interface. Floating bubble when `start_minimized`, inline panel on
/// the full chat page.
#[component]
pub fn ChatWidget(
    #[props(default = false)] start_minimized: bool,
    #[props(default = false)] full_page: bool,
) -> Element {
    let auth = use_auth();
    let mut toasts = use_toasts();
    let mut minimized = use_signal(move || start_minimized);
    let mut messages = use_signal(welcome);
    let mut input = use_signal(String::new);
    let mut typing = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let mut send = move |text: String| {
        let text = text.trim().to_string();
        if text.is_empty() || typing() {
            return;
        }

        messages.write().push(ChatMessage {
            content: text.clone(),
            sender: Sender::User,
            sent_at: clock_now(),
        });
        input.set(String::new());
        typing.set(true);

        spawn(async move {
            // Simulated think time before the canned reply.
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(std::time::Duration::from_millis(1200)).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_millis(1200)).await;

            messages.write().push(ChatMessage {
                content: bot_response(&text).to_string(),
                sender: Sender::Bot,
                sent_at: clock_now(),
            });
            typing.set(false);
        });
    };

    let save_conversation = move |_| {
        if saving() {
            return;
        }
        let msgs = messages();
        // Nothing worth saving until the customer has said something.
        let Some(first_user) = msgs.iter().find(|m| m.sender == Sender::User) else {
            return;
        };
        let title: String = first_user.content.chars().take(60).collect();

        saving.set(true);
        spawn(async move {
            match api::support::save_chat_session(title, msgs).await {
                Ok(_) => {
                    show_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Conversation saved",
                        "You can find it under Chat History on your dashboard",
                    );
                }
                Err(e) => {
                    show_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Could not save conversation",
                        &e.to_string(),
                    );
                }
            }
            saving.set(false);
        });
    };

    if minimized() && !full_page {
        return rsx! {
            div { class: "chat-bubble",
                button {
                    class: "btn btn-primary btn-round",
                    onclick: move |_| minimized.set(false),
                    "\u{1f4ac}"
                }
            }
        };
    }

    let panel_class = if full_page {
        "chat-panel chat-panel-full"
    } else {
        "chat-panel chat-panel-floating"
    };

    rsx! {
        div { class: "{panel_class}",
            div { class: "chat-header",
                div {
                    h3 { "Crestline Assistant" }
                    p { class: "chat-subtitle", "Online \u{2022} Crestline Lending" }
                }
                div { class: "chat-header-actions",
                    if auth().user.is_some() {
                        button {
                            class: "btn btn-ghost btn-sm",
                            disabled: saving(),
                            onclick: save_conversation,
                            if saving() { "Saving..." } else { "Save" }
                        }
                    }
                    if !full_page {
                        button {
                            class: "btn btn-ghost btn-sm",
                            onclick: move |_| minimized.set(true),
                            "\u{2013}"
                        }
                    }
                }
            }

            div { class: "chat-messages",
                for (i, message) in messages().iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if message.sender == Sender::User { "chat-row chat-row-user" } else { "chat-row chat-row-bot" },
                        div { class: "chat-message",
                            p { "{message.content}" }
                            if !message.sent_at.is_empty() {
                                span { class: "chat-time", "{message.sent_at}" }
                            }
                        }
                    }
                }
                if typing() {
                    div { class: "chat-row chat-row-bot",
                        div { class: "chat-message chat-typing", "\u{2026}" }
                    }
                }
            }

            div { class: "chat-quick-replies",
                for reply in QUICK_REPLIES.iter() {
                    button {
                        key: "{reply}",
                        class: "btn btn-outline btn-xs",
                        onclick: move |_| input.set(reply.to_string()),
                        "{reply}"
                    }
                }
            }

            div { class: "chat-input-row",
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Type your message...",
                    value: input(),
                    oninput: move |evt: FormEvent| input.set(evt.value()),
                    onkeypress: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            send(input());
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| send(input()),
                    "Send"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_map_to_their_topics() {
        assert!(bot_response("I want to borrow money").contains("Personal Loans"));
        assert!(bot_response("What is your INTEREST rate?").contains("12% to 18%"));
        assert!(bot_response("which documents do I need").contains("valid ID"));
        assert!(bot_response("where is your office located").contains("Monday to Friday"));
        assert!(bot_response("I have a problem with my account").contains("complaint"));
    }

    #[test]
    fn loan_keyword_wins_over_later_groups() {
        // "loan" appears before the rate group in the lookup order.
        let reply = bot_response("what is the rate on a home loan?");
        assert!(reply.contains("Home Loans"));
    }

    #[test]
    fn unknown_input_gets_the_fallback() {
        let reply = bot_response("tell me a joke");
        assert!(reply.contains("human agent"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(bot_response("LOAN"), bot_response("loan"));
    }
}
