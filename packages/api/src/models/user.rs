//! # User model and session projection
//!
//! Two representations of an account holder:
//!
//! - [`User`] (server only) — the full `users` row, including the Argon2 password
//!   hash and audit timestamps. [`User::to_info`] projects it for the client.
//! - [`UserInfo`] — the client-safe subset `{ id, email, full_name }`.
//!
//! [`SessionInfo`] pairs the authenticated user with the cookie session's expiry;
//! it is what `current_session` hands to the auth controller.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if the name is not set.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}

/// An established cookie session as seen by the client: the authenticated user
/// plus the session's validity window. The session itself is owned by the
/// session store; this is only a reference to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionInfo {
    pub user: UserInfo,
    pub expires_at: Option<String>,
}
