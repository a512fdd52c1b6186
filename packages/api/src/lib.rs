//! # API crate — shared fullstack server functions for the support desk
//!
//! This crate is the backbone of the fullstack architecture. It defines every
//! Dioxus server function the web frontend calls, along with the supporting
//! modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Session key, credential validation, Argon2id password hashing |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) and migrations |
//! | [`models`] | — | Database rows and their client-safe `*Info` projections |
//! | [`support`] | — | Complaints, chat sessions, notifications, and FAQ server functions |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server
//! logic (behind `#[cfg(feature = "server")]`) and once as a thin client stub.
//!
//! - **Session**: `current_session` — the one explicit "who is signed in" check.
//! - **Credentials**: `sign_up`, `sign_in`, `sign_out`.
//! - **Profile**: `fetch_profile` — zero-or-one read of the caller's profile row.
//!
//! A missing profile row is `Ok(None)`, not an error: a freshly registered user
//! may not have been provisioned yet, and authorization fails closed on `None`.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;
pub mod support;

pub use models::{
    ChatMessage, ChatSessionInfo, ComplaintInfo, ComplaintStatus, FaqInfo, NotificationInfo,
    Priority, ProfileInfo, Role, Sender, SessionInfo, UserInfo, COMPLAINT_CATEGORIES,
    FAQ_CATEGORIES, NOTIFICATION_KINDS,
};

/// Get the current session, if any: the authenticated user plus the cookie
/// session's expiry. Returns `None` when signed out.
#[cfg(feature = "server")]
#[get("/api/auth/session", session: tower_sessions::Session)]
pub async fn current_session() -> Result<Option<SessionInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // A session pointing at a deleted user is as good as no session.
    Ok(user.map(|u| SessionInfo {
        user: u.to_info(),
        expires_at: Some(session.expiry_date().to_string()),
    }))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/session")]
pub async fn current_session() -> Result<Option<SessionInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new account with email, password, and full name. The profile row
/// is provisioned by a database trigger, never inserted here.
#[cfg(feature = "server")]
#[post("/api/auth/sign-up", session: tower_sessions::Session)]
pub async fn sign_up(
    email: String,
    password: String,
    full_name: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    auth::validate_sign_up(&email, &password, &full_name)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let email = auth::normalize_email(&email);
    let full_name = full_name.trim().to_string();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(|e| ServerFnError::new(e))?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, full_name, password_hash) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&email)
    .bind(&full_name)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-up")]
pub async fn sign_up(
    email: String,
    password: String,
    full_name: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign in with email and password. The error message is identical for an
/// unknown email and a wrong password.
#[cfg(feature = "server")]
#[post("/api/auth/sign-in", session: tower_sessions::Session)]
pub async fn sign_in(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = auth::normalize_email(&email);

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid =
        auth::verify_password(&password, &user.password_hash).map_err(|e| ServerFnError::new(e))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-in")]
pub async fn sign_in(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign out the current user by flushing the session.
#[cfg(feature = "server")]
#[post("/api/auth/sign-out", session: tower_sessions::Session)]
pub async fn sign_out() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-out")]
pub async fn sign_out() -> Result<(), ServerFnError> {
    Ok(())
}

/// Fetch the caller's profile row. Zero-or-one semantics: `Ok(None)` both when
/// signed out and when the row has not been provisioned yet.
#[cfg(feature = "server")]
#[get("/api/auth/profile", session: tower_sessions::Session)]
pub async fn fetch_profile() -> Result<Option<ProfileInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Profile;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile: Option<Profile> = sqlx::query_as("SELECT * FROM profiles WHERE user_id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profile.map(|p| p.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/profile")]
pub async fn fetch_profile() -> Result<Option<ProfileInfo>, ServerFnError> {
    Ok(None)
}
