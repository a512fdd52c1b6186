//! Chat session model: a saved conversation between a customer and the
//! assistant, stored as a JSONB message list.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One message in a conversation. `sent_at` is a preformatted clock string;
/// messages are display data, not something the application computes with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub content: String,
    pub sender: Sender,
    pub sent_at: String,
}

/// Full chat session record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct ChatSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub messages: sqlx::types::Json<Vec<ChatMessage>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl ChatSession {
    /// Convert to ChatSessionInfo for client consumption.
    pub fn to_info(&self) -> ChatSessionInfo {
        ChatSessionInfo {
            id: self.id.to_string(),
            user_id: self.user_id.to_string(),
            title: self.title.clone(),
            messages: self.messages.0.clone(),
            created_at: self.created_at.to_rfc3339(),
            updated_at: self.updated_at.to_rfc3339(),
        }
    }
}

/// Chat session information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatSessionInfo {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub messages: Vec<ChatMessage>,
    pub created_at: String,
    pub updated_at: String,
}

impl ChatSessionInfo {
    /// Number of messages sent by the customer (used on history cards).
    pub fn user_message_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.sender == Sender::User)
            .count()
    }
}
