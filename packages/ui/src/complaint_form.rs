//! Complaint submission dialog for the customer dashboard.

use api::{Priority, COMPLAINT_CATEGORIES};
use dioxus::prelude::*;

use crate::toast::{show_toast, use_toasts, ToastLevel};

const PRIORITIES: [Priority; 4] = [
    Priority::Low,
    Priority::Medium,
    Priority::High,
    Priority::Urgent,
];

/// Button plus modal form. `on_submitted` fires after a successful insert so
/// the dashboard can reload its lists.
#[component]
pub fn ComplaintForm(on_submitted: EventHandler<()>) -> Element {
    let mut toasts = use_toasts();
    let mut open = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut category = use_signal(|| COMPLAINT_CATEGORIES[0].0.to_string());
    let mut description = use_signal(String::new);
    let mut priority = use_signal(|| Priority::Medium.as_str().to_string());
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if title().trim().is_empty() || description().trim().is_empty() {
                show_toast(
                    &mut toasts,
                    ToastLevel::Error,
                    "Missing fields",
                    "Please provide a title and a description",
                );
                return;
            }

            submitting.set(true);
            match api::support::submit_complaint(title(), category(), description(), priority())
                .await
            {
                Ok(_) => {
                    show_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Complaint submitted successfully",
                        "We will review your complaint and get back to you soon",
                    );
                    title.set(String::new());
                    description.set(String::new());
                    priority.set(Priority::Medium.as_str().to_string());
                    open.set(false);
                    on_submitted.call(());
                }
                Err(e) => {
                    show_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Error submitting complaint",
                        &e.to_string(),
                    );
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        button {
            class: "btn btn-primary",
            onclick: move |_| open.set(true),
            "Submit New Complaint"
        }

        if open() {
            div { class: "modal-overlay", onclick: move |_| open.set(false),
                div { class: "modal", onclick: move |evt| evt.stop_propagation(),
                    h2 { "Submit a Complaint or Request" }
                    p { class: "text-muted",
                        "Fill out this form and we'll get back to you as soon as possible."
                    }

                    form { class: "form", onsubmit: handle_submit,
                        label { r#for: "complaint-title", "Title *" }
                        input {
                            id: "complaint-title",
                            class: "input",
                            r#type: "text",
                            placeholder: "Brief summary of your issue",
                            value: title(),
                            oninput: move |evt: FormEvent| title.set(evt.value()),
                        }

                        label { r#for: "complaint-category", "Category *" }
                        select {
                            id: "complaint-category",
                            class: "input",
                            value: category(),
                            onchange: move |evt: FormEvent| category.set(evt.value()),
                            for (value, label) in COMPLAINT_CATEGORIES.iter() {
                                option { key: "{value}", value: "{value}", "{label}" }
                            }
                        }

                        label { r#for: "complaint-priority", "Priority" }
                        select {
                            id: "complaint-priority",
                            class: "input",
                            value: priority(),
                            onchange: move |evt: FormEvent| priority.set(evt.value()),
                            for p in PRIORITIES.iter() {
                                option { key: "{p}", value: "{p.as_str()}", "{p.label()}" }
                            }
                        }

                        label { r#for: "complaint-description", "Description *" }
                        textarea {
                            id: "complaint-description",
                            class: "input",
                            rows: 5,
                            placeholder: "Describe your issue in detail",
                            value: description(),
                            oninput: move |evt: FormEvent| description.set(evt.value()),
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
                                disabled: submitting(),
                                if submitting() { "Submitting..." } else { "Submit" }
                            }
                        }
                    }
                }
            }
        }
    }
}
