//! Admin tool for managing FAQ entries.

use api::{FaqInfo, FAQ_CATEGORIES};
use dioxus::prelude::*;

use crate::toast::{show_toast, use_toasts, ToastLevel};

#[component]
pub fn FaqManager() -> Element {
    let mut toasts = use_toasts();
    let mut faqs = use_signal(Vec::<FaqInfo>::new);
    let mut open = use_signal(|| false);
    // Some(id) while editing an existing entry, None for a new one.
    let mut editing = use_signal(|| Option::<String>::None);
    let mut question = use_signal(String::new);
    let mut answer = use_signal(String::new);
    let mut category = use_signal(|| FAQ_CATEGORIES[0].0.to_string());
    let mut is_active = use_signal(|| true);
    let mut saving = use_signal(|| false);

    let mut reload = move || {
        spawn(async move {
            match api::support::all_faqs().await {
                Ok(list) => faqs.set(list),
                Err(e) => {
                    show_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Error fetching FAQs",
                        &e.to_string(),
                    );
                }
            }
        });
    };

    use_effect(move || {
        reload();
    });

    let mut open_editor = move |faq: Option<FaqInfo>| {
        match faq {
            Some(faq) => {
                editing.set(Some(faq.id.clone()));
                question.set(faq.question);
                answer.set(faq.answer);
                category.set(faq.category);
                is_active.set(faq.is_active);
            }
            None => {
                editing.set(None);
                question.set(String::new());
                answer.set(String::new());
                category.set(FAQ_CATEGORIES[0].0.to_string());
                is_active.set(true);
            }
        }
        open.set(true);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            saving.set(true);
            match api::support::upsert_faq(editing(), question(), answer(), category(), is_active())
                .await
            {
                Ok(_) => {
                    show_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        if editing().is_some() { "FAQ updated" } else { "FAQ created" },
                        "The FAQ list is up to date",
                    );
                    open.set(false);
                    reload();
                }
                Err(e) => {
                    show_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Error saving FAQ",
                        &e.to_string(),
                    );
                }
            }
            saving.set(false);
        });
    };

    let mut delete = move |id: String| {
        spawn(async move {
            match api::support::delete_faq(id).await {
                Ok(()) => {
                    show_toast(&mut toasts, ToastLevel::Success, "FAQ deleted", "");
                    reload();
                }
                Err(e) => {
                    show_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Error deleting FAQ",
                        &e.to_string(),
                    );
                }
            }
        });
    };

    rsx! {
        div { class: "faq-manager",
            div { class: "section-head",
                h2 { "FAQs" }
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| open_editor(None),
                    "New FAQ"
                }
            }

            if faqs().is_empty() {
                p { class: "text-muted", "No FAQ entries yet." }
            }

            for faq in faqs().iter().cloned() {
                div { key: "{faq.id}", class: "card faq-card",
                    div { class: "faq-head",
                        h3 { "{faq.question}" }
                        span {
                            class: if faq.is_active { "badge badge-success" } else { "badge badge-muted" },
                            if faq.is_active { "Active" } else { "Hidden" }
                        }
                    }
                    p { class: "text-muted", "{faq.answer}" }
                    div { class: "faq-actions",
                        {
                            let edit_faq = faq.clone();
                            rsx! {
                                button {
                                    class: "btn btn-outline btn-sm",
                                    onclick: move |_| open_editor(Some(edit_faq.clone())),
                                    "Edit"
                                }
                            }
                        }
                        {
                            let id = faq.id.clone();
                            rsx! {
                                button {
                                    class: "btn btn-ghost btn-sm",
                                    onclick: move |_| delete(id.clone()),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }

        if open() {
            div { class: "modal-overlay", onclick: move |_| open.set(false),
                div { class: "modal", onclick: move |evt| evt.stop_propagation(),
                    h2 { if editing().is_some() { "Edit FAQ" } else { "New FAQ" } }

                    form { class: "form", onsubmit: handle_submit,
                        label { r#for: "faq-question", "Question *" }
                        input {
                            id: "faq-question",
                            class: "input",
                            r#type: "text",
                            value: question(),
                            oninput: move |evt: FormEvent| question.set(evt.value()),
                        }

                        label { r#for: "faq-answer", "Answer *" }
                        textarea {
                            id: "faq-answer",
                            class: "input",
                            rows: 4,
                            value: answer(),
                            oninput: move |evt: FormEvent| answer.set(evt.value()),
                        }

                        label { r#for: "faq-category", "Category" }
                        select {
                            id: "faq-category",
                            class: "input",
                            value: category(),
                            onchange: move |evt: FormEvent| category.set(evt.value()),
                            for (value, label) in FAQ_CATEGORIES.iter() {
                                option { key: "{value}", value: "{value}", "{label}" }
                            }
                        }

                        label { class: "checkbox-row",
                            input {
                                r#type: "checkbox",
                                checked: is_active(),
                                onchange: move |evt: FormEvent| is_active.set(evt.checked()),
                            }
                            "Visible on the landing page"
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
                                disabled: saving(),
                                if saving() { "Saving..." } else { "Save" }
                            }
                        }
                    }
                }
            }
        }
    }
}
