//! Toast notifications, shared app-wide through a context signal.

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn show_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, title: &str, message: &str) {
    let ts = current_time();
    let mut state = toasts.write();
    let id = state.next_id;
    state.next_id += 1;
    state.entries.push(Toast {
        id,
        level,
        title: title.to_string(),
        message: message.to_string(),
        timestamp: ts,
    });
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}

/// Provider + fixed-position renderer for toasts. Mount once, near the root.
#[component]
pub fn ToastHost(children: Element) -> Element {
    let mut toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        div { class: "toast-stack",
            for toast in toasts().entries.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Info => "toast toast-info",
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    },
                    div { class: "toast-body",
                        strong { "{toast.title}" }
                        p { "{toast.message}" }
                        span { class: "toast-time", "{toast.timestamp}" }
                    }
                    {
                        let id = toast.id;
                        rsx! {
                            button {
                                class: "toast-dismiss",
                                onclick: move |_| {
                                    toasts.write().entries.retain(|t| t.id != id);
                                },
                                "\u{00d7}"
                            }
                        }
                    }
                }
            }
        }
    }
}
