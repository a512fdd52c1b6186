//! Data models for the application.
//!
//! Each table has a server-only row type (deriving [`sqlx::FromRow`], gated behind
//! the `server` feature) and a client-safe `*Info` projection that crosses the
//! server boundary via Dioxus server functions. Projections carry ids and
//! timestamps as `String` so they work in WASM builds.

mod chat;
mod complaint;
mod faq;
mod notification;
mod profile;
mod user;

#[cfg(feature = "server")]
pub use chat::ChatSession;
pub use chat::{ChatMessage, ChatSessionInfo, Sender};
#[cfg(feature = "server")]
pub use complaint::Complaint;
pub use complaint::{ComplaintInfo, ComplaintStatus, Priority, COMPLAINT_CATEGORIES};
#[cfg(feature = "server")]
pub use faq::Faq;
pub use faq::{FaqInfo, FAQ_CATEGORIES};
#[cfg(feature = "server")]
pub use notification::Notification;
pub use notification::{NotificationInfo, NOTIFICATION_KINDS};
#[cfg(feature = "server")]
pub use profile::Profile;
pub use profile::{ProfileInfo, Role};
#[cfg(feature = "server")]
pub use user::User;
pub use user::{SessionInfo, UserInfo};
