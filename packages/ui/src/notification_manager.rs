//! Admin tool for broadcasting a notification to every customer.

use api::NOTIFICATION_KINDS;
use dioxus::prelude::*;

use crate::toast::{show_toast, use_toasts, ToastLevel};

#[component]
pub fn NotificationManager(on_sent: EventHandler<()>) -> Element {
    let mut toasts = use_toasts();
    let mut open = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut kind = use_signal(|| NOTIFICATION_KINDS[0].0.to_string());
    let mut sending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if title().trim().is_empty() || message().trim().is_empty() {
                show_toast(
                    &mut toasts,
                    ToastLevel::Error,
                    "Missing fields",
                    "Please provide a title and a message",
                );
                return;
            }

            sending.set(true);
            match api::support::broadcast_notification(title(), message(), kind()).await {
                Ok(count) => {
                    show_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Notifications sent",
                        &format!("Sent {} notification(s) to customers", count),
                    );
                    title.set(String::new());
                    message.set(String::new());
                    open.set(false);
                    on_sent.call(());
                }
                Err(e) => {
                    show_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Error sending notifications",
                        &e.to_string(),
                    );
                }
            }
            sending.set(false);
        });
    };

    rsx! {
        button {
            class: "btn btn-primary",
            onclick: move |_| open.set(true),
            "Send Notification"
        }

        if open() {
            div { class: "modal-overlay", onclick: move |_| open.set(false),
                div { class: "modal", onclick: move |evt| evt.stop_propagation(),
                    h2 { "Broadcast a Notification" }
                    p { class: "text-muted", "Delivered to every customer account." }

                    form { class: "form", onsubmit: handle_submit,
                        label { r#for: "notif-title", "Title *" }
                        input {
                            id: "notif-title",
                            class: "input",
                            r#type: "text",
                            value: title(),
                            oninput: move |evt: FormEvent| title.set(evt.value()),
                        }

                        label { r#for: "notif-kind", "Type" }
                        select {
                            id: "notif-kind",
                            class: "input",
                            value: kind(),
                            onchange: move |evt: FormEvent| kind.set(evt.value()),
                            for (value, label) in NOTIFICATION_KINDS.iter() {
                                option { key: "{value}", value: "{value}", "{label}" }
                            }
                        }

                        label { r#for: "notif-message", "Message *" }
                        textarea {
                            id: "notif-message",
                            class: "input",
                            rows: 4,
                            value: message(),
                            oninput: move |evt: FormEvent| message.set(evt.value()),
                        }

                        div { class: "form-actions",
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: move |_| open.set(false),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: sending(),
                                if sending() { "Sending..." } else { "Send" }
                            }
                        }
                    }
                }
            }
        }
    }
}
