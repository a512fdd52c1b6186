//! FAQ model: question/answer entries managed by staff and shown on the
//! landing page.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// FAQ categories offered in the manager form, `(value, label)` pairs.
pub const FAQ_CATEGORIES: [(&str, &str); 5] = [
    ("loans", "Loans"),
    ("general", "General"),
    ("documentation", "Documentation"),
    ("process", "Process"),
    ("contact", "Contact"),
];

/// Full FAQ record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Faq {
    /// Convert to FaqInfo for client consumption.
    pub fn to_info(&self) -> FaqInfo {
        FaqInfo {
            id: self.id.to_string(),
            question: self.question.clone(),
            answer: self.answer.clone(),
            category: self.category.clone(),
            is_active: self.is_active,
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// FAQ information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqInfo {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub is_active: bool,
    pub created_at: String,
}
