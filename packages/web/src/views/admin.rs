//! Staff dashboard: complaint triage, customer list, chat review, broadcasts,
//! FAQ management.

use api::{ChatSessionInfo, ComplaintInfo, ComplaintStatus, ProfileInfo, Role};
use dioxus::prelude::*;
use ui::{
    show_toast, use_auth, use_toasts, ChatHistoryCard, FaqManager, NotificationManager,
    RequireRole, SignOutButton, ToastLevel,
};

use crate::views::dashboard::{priority_class, status_class};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Complaints,
    Customers,
    Chats,
    Faqs,
}

fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        RequireRole { allowed: vec![Role::Staff, Role::Admin],
            AdminInner {}
        }
    }
}

#[component]
fn AdminInner() -> Element {
    let auth = use_auth();
    let mut complaints = use_signal(Vec::<ComplaintInfo>::new);
    let mut customers = use_signal(Vec::<ProfileInfo>::new);
    let mut chats = use_signal(Vec::<ChatSessionInfo>::new);
    let mut loading_data = use_signal(|| true);
    let mut tab = use_signal(|| Tab::Complaints);

    let mut reload = move || {
        spawn(async move {
            loading_data.set(true);
            match api::support::all_complaints().await {
                Ok(list) => complaints.set(list),
                Err(e) => tracing::error!("Failed to fetch complaints: {}", e),
            }
            match api::support::customer_profiles().await {
                Ok(list) => customers.set(list),
                Err(e) => tracing::error!("Failed to fetch customers: {}", e),
            }
            match api::support::all_chat_sessions().await {
                Ok(list) => chats.set(list),
                Err(e) => tracing::error!("Failed to fetch chat sessions: {}", e),
            }
            loading_data.set(false);
        });
    };

    use_effect(move || {
        reload();
    });

    let greeting = auth()
        .profile
        .as_ref()
        .map(|p| p.display_name().to_string())
        .unwrap_or_default();

    let open_count = complaints()
        .iter()
        .filter(|c| c.status != ComplaintStatus::Resolved)
        .count();

    rsx! {
        div { class: "page",
            header { class: "site-header",
                div { class: "container header-row",
                    div {
                        h1 { "Admin Dashboard" }
                        p { class: "text-muted", "Signed in as {greeting}" }
                    }
                    div { class: "header-actions",
                        NotificationManager { on_sent: move |_| reload() }
                        a { class: "btn btn-outline btn-sm", href: "/dashboard", "My Dashboard" }
                        SignOutButton { class: "btn btn-outline btn-sm" }
                    }
                }
            }

            main { class: "container",
                div { class: "stats-grid",
                    div { class: "card stat-card",
                        span { class: "stat-label", "Total Complaints" }
                        span { class: "stat-value", "{complaints().len()}" }
                    }
                    div { class: "card stat-card",
                        span { class: "stat-label", "Open" }
                        span { class: "stat-value text-warning", "{open_count}" }
                    }
                    div { class: "card stat-card",
                        span { class: "stat-label", "Customers" }
                        span { class: "stat-value", "{customers().len()}" }
                    }
                    div { class: "card stat-card",
                        span { class: "stat-label", "Chat Sessions" }
                        span { class: "stat-value", "{chats().len()}" }
                    }
                }

                div { class: "tabs",
                    button {
                        class: if tab() == Tab::Complaints { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Complaints),
                        "Complaints"
                    }
                    button {
                        class: if tab() == Tab::Customers { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Customers),
                        "Customers"
                    }
                    button {
                        class: if tab() == Tab::Chats { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Chats),
                        "Chat Sessions"
                    }
                    button {
                        class: if tab() == Tab::Faqs { "tab tab-active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Faqs),
                        "FAQs"
                    }
                }

                if loading_data() {
                    div { class: "loading-row",
                        span { class: "spinner spinner-sm" }
                        span { class: "text-muted", "Loading..." }
                    }
                } else {
                    match tab() {
                        Tab::Complaints => rsx! {
                            if complaints().is_empty() {
                                div { class: "empty-state",
                                    h3 { "No complaints" }
                                    p { class: "text-muted", "Customer complaints will appear here" }
                                }
                            } else {
                                div { class: "list",
                                    for complaint in complaints().iter() {
                                        ComplaintTriageCard {
                                            key: "{complaint.id}",
                                            complaint: complaint.clone(),
                                            on_updated: move |_| reload(),
                                        }
                                    }
                                }
                            }
                        },
                        Tab::Customers => rsx! {
                            if customers().is_empty() {
                                div { class: "empty-state",
                                    h3 { "No customers yet" }
                                }
                            } else {
                                div { class: "card",
                                    table { class: "data-table",
                                        thead {
                                            tr {
                                                th { "Name" }
                                                th { "Role" }
                                                th { "Joined" }
                                            }
                                        }
                                        tbody {
                                            for customer in customers().iter() {
                                                tr { key: "{customer.id}",
                                                    td { "{customer.display_name()}" }
                                                    td { span { class: "badge badge-muted", "{customer.role}" } }
                                                    td { "{date_part(&customer.created_at)}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        Tab::Chats => rsx! {
                            if chats().is_empty() {
                                div { class: "empty-state",
                                    h3 { "No chat sessions yet" }
                                }
                            } else {
                                div { class: "history-grid",
                                    for session in chats().iter() {
                                        ChatHistoryCard { key: "{session.id}", session: session.clone() }
                                    }
                                }
                            }
                        },
                        Tab::Faqs => rsx! {
                            FaqManager {}
                        },
                    }
                }
            }
        }
    }
}

/// A complaint card with an inline status/notes editor.
#[component]
fn ComplaintTriageCard(complaint: ComplaintInfo, on_updated: EventHandler<()>) -> Element {
    let mut toasts = use_toasts();
    let mut editing = use_signal(|| false);
    let mut status = use_signal(|| complaint.status.as_str().to_string());
    let mut notes = use_signal(|| complaint.admin_notes.clone().unwrap_or_default());
    let mut saving = use_signal(|| false);

    let complaint_id = complaint.id.clone();
    let save = move |_| {
        let complaint_id = complaint_id.clone();
        spawn(async move {
            saving.set(true);
            match api::support::update_complaint(complaint_id, status(), notes()).await {
                Ok(_) => {
                    show_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Complaint updated",
                        "Status and notes saved",
                    );
                    editing.set(false);
                    on_updated.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to update complaint: {}", e);
                    show_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        "Update failed",
                        "Could not save the complaint. Please try again.",
                    );
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "card complaint-card",
            div { class: "complaint-head",
                h3 { "{complaint.title}" }
                div { class: "badges",
                    span { class: priority_class(complaint.priority), "{complaint.priority.label()}" }
                    span { class: status_class(complaint.status), "{complaint.status.label()}" }
                }
            }
            p { class: "text-muted", "{complaint.description}" }
            div { class: "complaint-meta text-muted",
                span { "Category: {complaint.category_label()}" }
                span { "Submitted: {date_part(&complaint.created_at)}" }
            }
            if let Some(existing) = complaint.admin_notes.as_ref() {
                if !editing() {
                    div { class: "admin-notes",
                        strong { "Admin Notes:" }
                        p { class: "text-muted", "{existing}" }
                    }
                }
            }

            if editing() {
                div { class: "form",
                    div { class: "form-field",
                        label { "Status" }
                        select {
                            class: "input",
                            value: "{status}",
                            onchange: move |e| status.set(e.value()),
                            option { value: "pending", "Pending" }
                            option { value: "in_progress", "In Progress" }
                            option { value: "resolved", "Resolved" }
                        }
                    }
                    div { class: "form-field",
                        label { "Admin Notes" }
                        textarea {
                            class: "input",
                            rows: 3,
                            placeholder: "Notes visible to the customer",
                            value: "{notes}",
                            oninput: move |e| notes.set(e.value()),
                        }
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn btn-primary btn-sm",
                            disabled: saving(),
                            onclick: save,
                            if saving() { "Saving..." } else { "Save" }
                        }
                        button {
                            class: "btn btn-ghost btn-sm",
                            onclick: move |_| editing.set(false),
                            "Cancel"
                        }
                    }
                }
            } else {
                button {
                    class: "btn btn-outline btn-sm",
                    onclick: move |_| editing.set(true),
                    "Update"
                }
            }
        }
    }
}
