//! Customer dashboard: complaints, chat history, notifications.

use api::{ChatSessionInfo, ComplaintInfo, ComplaintStatus, NotificationInfo, Priority};
use dioxus::prelude::*;
use ui::{use_auth, ChatHistoryCard, ChatWidget, ComplaintForm, RequireAuth, SignOutButton};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Complaints,
    Chats,
    Notifications,
}

pub(crate) fn status_class(status: ComplaintStatus) -> &'static str {
    match status {
        ComplaintStatus::Pending => "badge badge-warning",
        ComplaintStatus::InProgress => "badge badge-info",
        ComplaintStatus::Resolved => "badge badge-success",
    }
}

pub(crate) fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::Urgent => "badge badge-danger",
        Priority::High => "badge badge-warning",
        Priority::Medium => "badge badge-info",
        Priority::Low => "badge badge-muted",
    }
}

fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RequireAuth {
            DashboardInner {}
        }
    }
}

#[component]
fn DashboardInner() -> Element {
    let auth = use_auth();
    let mut complaints = use_signal(Vec::<ComplaintInfo>::new);
    let mut chats = use_signal(Vec::<ChatSessionInfo>::new);
    let mut notifications = use_signal(Vec::<NotificationInfo>::new);
    let mut loading_data = use_signal(|| true);
    let mut tab = use_signal(|| Tab::Complaints);
    let mut chat_open = use_signal(|| false);

    let mut reload = move || {
        spawn(async move {
            loading_data.set(true);
            match api::support::my_complaints().await {
                Ok(list) => complaints.set(list),
                Err(e) => tracing::error!("Failed to fetch complaints: {}", e),
            }
            match api::support::my_chat_sessions().await {
                Ok(list) => chats.set(list),
                Err(e) => tracing::error!("Failed to fetch chat sessions: {}", e),
            }
            match api::support::my_notifications().await {
                Ok(list) => notifications.set(list),
                Err(e) => tracing::error!("Failed to fetch notifications: {}", e),
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
        .or_else(|| auth().user.as_ref().map(|u| u.display_name().to_string()))
        .unwrap_or_default();

    let total = complaints().len();
    let pending = complaints()
        .iter()
        .filter(|c| c.status == ComplaintStatus::Pending)
        .count();
    let in_progress = complaints()
        .iter()
        .filter(|c| c.status == ComplaintStatus::InProgress)
        .count();
    let resolved = complaints()
        .iter()
        .filter(|c| c.status == ComplaintStatus::Resolved)
        .count();

    rsx! {
        div { class: "page",
            header { class: "site-header",
                div { class: "container header-row",
                    div {
                        h1 { "Customer Dashboard" }
                        p { class: "text-muted", "Welcome back, {greeting}" }
                    }
                    div { class: "header-actions",
                        a { class: "btn btn-outline btn-sm", href: "/", "Home" }
                        SignOutButton { class: "btn btn-outline btn-sm" }
                    }
                }
            }

            main { class: "container",
                div { class: "section-head",
                    div {
                        h2 { "Your Account Overview" }
                        p { class: "text-muted",
                            "Manage your complaints, view chat history, and track notifications"
                        }
                    }
                    div { class: "header-actions",
                        ComplaintForm { on_submitted: move |_| reload() }
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| chat_open.set(true),
                            "Start Chatting"
                        }
                    }
                }

                div { class: "stats-grid",
                    div { class: "card stat-card",
                        span { class: "stat-label", "Total Complaints" }
                        span { class: "stat-value", "{total}" }
                    }
                    div { class: "card stat-card",
                        span { class: "stat-label", "Pending" }
                        span { class: "stat-value text-warning", "{pending}" }
                    }
                    div { class: "card stat-card",
                        span { class: "stat-label", "In Progress" }
                        span { class: "stat-value text-info", "{in_progress}" }
                    }
                    div { class: "card stat-card",
                        span { class: "stat-label", "Resolved" }
                        span { class: "stat-value text-success", "{resolved}" }
                    }
                }

                if loading_data() {
                    div { class: "loading-row",
                        span { class: "spinner spinner-sm" }
                        span { class: "text-muted", "Loading your data..." }
                    }
                } else {
                    div { class: "tabs",
                        button {
                            class: if tab() == Tab::Complaints { "tab tab-active" } else { "tab" },
                            onclick: move |_| tab.set(Tab::Complaints),
                            "Complaints & Requests"
                        }
                        button {
                            class: if tab() == Tab::Chats { "tab tab-active" } else { "tab" },
                            onclick: move |_| tab.set(Tab::Chats),
                            "Chat History"
                        }
                        button {
                            class: if tab() == Tab::Notifications { "tab tab-active" } else { "tab" },
                            onclick: move |_| tab.set(Tab::Notifications),
                            "Notifications"
                        }
                    }

                    match tab() {
                        Tab::Complaints => rsx! {
                            if complaints().is_empty() {
                                div { class: "empty-state",
                                    h3 { "No complaints submitted yet" }
                                    p { class: "text-muted",
                                        "Get started by submitting your first complaint or service request"
                                    }
                                    ComplaintForm { on_submitted: move |_| reload() }
                                }
                            } else {
                                div { class: "list",
                                    for complaint in complaints().iter() {
                                        div { key: "{complaint.id}", class: "card complaint-card",
                                            div { class: "complaint-head",
                                                h3 { "{complaint.title}" }
                                                div { class: "badges",
                                                    span { class: priority_class(complaint.priority),
                                                        "{complaint.priority.label()}"
                                                    }
                                                    span { class: status_class(complaint.status),
                                                        "{complaint.status.label()}"
                                                    }
                                                }
                                            }
                                            p { class: "text-muted", "{complaint.description}" }
                                            div { class: "complaint-meta text-muted",
                                                span { "Category: {complaint.category_label()}" }
                                                span { "Submitted: {date_part(&complaint.created_at)}" }
                                            }
                                            if let Some(notes) = complaint.admin_notes.as_ref() {
                                                div { class: "admin-notes",
                                                    strong { "Admin Notes:" }
                                                    p { class: "text-muted", "{notes}" }
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
                                    p { class: "text-muted",
                                        "Start a conversation with our assistant or support team"
                                    }
                                    button {
                                        class: "btn btn-outline",
                                        onclick: move |_| chat_open.set(true),
                                        "Start Chatting"
                                    }
                                }
                            } else {
                                div { class: "history-grid",
                                    for session in chats().iter() {
                                        ChatHistoryCard { key: "{session.id}", session: session.clone() }
                                    }
                                }
                            }
                        },
                        Tab::Notifications => rsx! {
                            if notifications().is_empty() {
                                div { class: "empty-state",
                                    h3 { "No notifications yet" }
                                    p { class: "text-muted",
                                        "You'll see important updates and messages here"
                                    }
                                }
                            } else {
                                div { class: "list",
                                    for notification in notifications().iter() {
                                        NotificationRow {
                                            key: "{notification.id}",
                                            notification: notification.clone(),
                                            on_read: move |_| reload(),
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }

            if chat_open() {
                ChatWidget {}
            }
        }
    }
}

#[component]
fn NotificationRow(notification: NotificationInfo, on_read: EventHandler<()>) -> Element {
    let id = notification.id.clone();

    let mark_read = move |_| {
        let id = id.clone();
        spawn(async move {
            if let Err(e) = api::support::mark_notification_read(id).await {
                tracing::error!("Failed to mark notification read: {}", e);
            }
            on_read.call(());
        });
    };

    rsx! {
        div {
            class: if notification.read { "card notification-card" } else { "card notification-card notification-unread" },
            div { class: "notification-head",
                h3 { "{notification.title}" }
                if !notification.read {
                    button { class: "btn btn-ghost btn-xs", onclick: mark_read, "Mark read" }
                }
            }
            p { class: "text-muted", "{notification.message}" }
            span { class: "text-muted", "{date_part(&notification.created_at)}" }
        }
    }
}
