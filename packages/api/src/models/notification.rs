//! Notification model: per-user messages broadcast by staff.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Notification kinds offered in the broadcast form, `(value, label)` pairs.
pub const NOTIFICATION_KINDS: [(&str, &str); 4] = [
    ("general", "General"),
    ("complaint_update", "Complaint Update"),
    ("system", "System"),
    ("promotion", "Promotion"),
];

/// Full notification record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Notification {
    /// Convert to NotificationInfo for client consumption.
    pub fn to_info(&self) -> NotificationInfo {
        NotificationInfo {
            id: self.id.to_string(),
            user_id: self.user_id.to_string(),
            title: self.title.clone(),
            message: self.message.clone(),
            kind: self.kind.clone(),
            read: self.read,
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Notification information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationInfo {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub read: bool,
    pub created_at: String,
}
