//! Shared UI for the support-desk workspace.

pub mod auth;
pub use auth::{
    refresh_profile, sign_in, sign_out, sign_up, use_auth, AuthProvider, AuthState, LoadingScreen,
    RequireAuth, RequireRole, SessionChange, SignOutButton,
};

mod toast;
pub use toast::{show_toast, use_toasts, Toast, ToastHost, ToastLevel, Toasts};

mod chat;
pub use chat::{bot_response, ChatWidget, QUICK_REPLIES, WELCOME_MESSAGE};

mod header;
pub use header::Header;

mod hero;
pub use hero::Hero;

mod services;
pub use services::Services;

mod complaint_form;
pub use complaint_form::ComplaintForm;

mod chat_history;
pub use chat_history::ChatHistoryCard;

mod notification_manager;
pub use notification_manager::NotificationManager;

mod faq_manager;
pub use faq_manager::FaqManager;
