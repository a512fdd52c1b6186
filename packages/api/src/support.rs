//! # Support-desk server functions
//!
//! Complaints, saved chat sessions, notifications, and FAQs. Every function here
//! requires an authenticated session; the staff-only functions additionally load
//! the caller's profile row and check its role server-side, so a client that
//! bypasses the route guards still gets an error rather than data.

use dioxus::prelude::*;

use crate::models::{ChatMessage, ChatSessionInfo, ComplaintInfo, FaqInfo, NotificationInfo};

/// Helper: resolve the session to a user id, or fail with "Not authenticated".
#[cfg(feature = "server")]
async fn require_user(session: &tower_sessions::Session) -> Result<uuid::Uuid, ServerFnError> {
    let user_id: Option<String> = session
        .get(crate::auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Helper: like [`require_user`], but also checks the caller's profile role.
/// A missing profile row denies access the same way a customer role does.
#[cfg(feature = "server")]
async fn require_staff(session: &tower_sessions::Session) -> Result<uuid::Uuid, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Profile;

    let user_uuid = require_user(session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile: Option<Profile> = sqlx::query_as("SELECT * FROM profiles WHERE user_id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let is_staff = profile
        .map(|p| p.to_info().role.is_staff())
        .unwrap_or(false);

    if !is_staff {
        return Err(ServerFnError::new("Staff access required"));
    }

    Ok(user_uuid)
}

/// Submit a new complaint for the current user. Status always starts `pending`.
#[cfg(feature = "server")]
#[post("/api/complaints", session: tower_sessions::Session)]
pub async fn submit_complaint(
    title: String,
    category: String,
    description: String,
    priority: String,
) -> Result<ComplaintInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::{Complaint, Priority};

    let user_uuid = require_user(&session).await?;

    let title = title.trim().to_string();
    let description = description.trim().to_string();
    if title.is_empty() || description.is_empty() {
        return Err(ServerFnError::new("Title and description are required"));
    }

    let priority: Priority = priority
        .parse()
        .map_err(|e: String| ServerFnError::new(e))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let complaint: Complaint = sqlx::query_as(
        "INSERT INTO complaints (user_id, title, category, description, priority, status)
         VALUES ($1, $2, $3, $4, $5, 'pending') RETURNING *",
    )
    .bind(user_uuid)
    .bind(&title)
    .bind(&category)
    .bind(&description)
    .bind(priority.as_str())
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(complaint.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/complaints")]
pub async fn submit_complaint(
    title: String,
    category: String,
    description: String,
    priority: String,
) -> Result<ComplaintInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the current user's complaints, newest first.
#[cfg(feature = "server")]
#[get("/api/complaints/mine", session: tower_sessions::Session)]
pub async fn my_complaints() -> Result<Vec<ComplaintInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Complaint;

    let user_uuid = require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let complaints: Vec<Complaint> =
        sqlx::query_as("SELECT * FROM complaints WHERE user_id = $1 ORDER BY created_at DESC")
            .bind(user_uuid)
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(complaints.iter().map(|c| c.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/complaints/mine")]
pub async fn my_complaints() -> Result<Vec<ComplaintInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List every complaint, newest first. Staff only.
#[cfg(feature = "server")]
#[get("/api/complaints/all", session: tower_sessions::Session)]
pub async fn all_complaints() -> Result<Vec<ComplaintInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Complaint;

    require_staff(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let complaints: Vec<Complaint> =
        sqlx::query_as("SELECT * FROM complaints ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(complaints.iter().map(|c| c.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/complaints/all")]
pub async fn all_complaints() -> Result<Vec<ComplaintInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update a complaint's status and admin notes, assigning it to the caller.
/// Staff only.
#[cfg(feature = "server")]
#[post("/api/complaints/update", session: tower_sessions::Session)]
pub async fn update_complaint(
    complaint_id: String,
    status: String,
    admin_notes: String,
) -> Result<ComplaintInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::{Complaint, ComplaintStatus};

    let staff_uuid = require_staff(&session).await?;

    let complaint_uuid =
        uuid::Uuid::parse_str(&complaint_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let status: ComplaintStatus = status.parse().map_err(|e: String| ServerFnError::new(e))?;

    let admin_notes = match admin_notes.trim() {
        "" => None,
        notes => Some(notes.to_string()),
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let complaint: Option<Complaint> = sqlx::query_as(
        "UPDATE complaints
         SET status = $2, admin_notes = $3, assigned_to = $4, updated_at = NOW()
         WHERE id = $1 RETURNING *",
    )
    .bind(complaint_uuid)
    .bind(status.as_str())
    .bind(&admin_notes)
    .bind(staff_uuid)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(complaint) = complaint else {
        return Err(ServerFnError::new("Complaint not found"));
    };

    Ok(complaint.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/complaints/update")]
pub async fn update_complaint(
    complaint_id: String,
    status: String,
    admin_notes: String,
) -> Result<ComplaintInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Save a finished chat conversation for the current user.
#[cfg(feature = "server")]
#[post("/api/chats", session: tower_sessions::Session)]
pub async fn save_chat_session(
    title: String,
    messages: Vec<ChatMessage>,
) -> Result<ChatSessionInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ChatSession;

    let user_uuid = require_user(&session).await?;

    if messages.is_empty() {
        return Err(ServerFnError::new("Cannot save an empty conversation"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let chat: ChatSession = sqlx::query_as(
        "INSERT INTO chat_sessions (user_id, title, messages) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(user_uuid)
    .bind(title.trim())
    .bind(sqlx::types::Json(&messages))
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(chat.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/chats")]
pub async fn save_chat_session(
    title: String,
    messages: Vec<ChatMessage>,
) -> Result<ChatSessionInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the current user's saved conversations, most recently updated first.
#[cfg(feature = "server")]
#[get("/api/chats/mine", session: tower_sessions::Session)]
pub async fn my_chat_sessions() -> Result<Vec<ChatSessionInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ChatSession;

    let user_uuid = require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let chats: Vec<ChatSession> =
        sqlx::query_as("SELECT * FROM chat_sessions WHERE user_id = $1 ORDER BY updated_at DESC")
            .bind(user_uuid)
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(chats.iter().map(|c| c.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/chats/mine")]
pub async fn my_chat_sessions() -> Result<Vec<ChatSessionInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List every saved conversation. Staff only.
#[cfg(feature = "server")]
#[get("/api/chats/all", session: tower_sessions::Session)]
pub async fn all_chat_sessions() -> Result<Vec<ChatSessionInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ChatSession;

    require_staff(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let chats: Vec<ChatSession> =
        sqlx::query_as("SELECT * FROM chat_sessions ORDER BY updated_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(chats.iter().map(|c| c.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/chats/all")]
pub async fn all_chat_sessions() -> Result<Vec<ChatSessionInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The current user's ten most recent notifications.
#[cfg(feature = "server")]
#[get("/api/notifications", session: tower_sessions::Session)]
pub async fn my_notifications() -> Result<Vec<NotificationInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Notification;

    let user_uuid = require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let notifications: Vec<Notification> = sqlx::query_as(
        "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC LIMIT 10",
    )
    .bind(user_uuid)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(notifications.iter().map(|n| n.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/notifications")]
pub async fn my_notifications() -> Result<Vec<NotificationInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Mark one of the current user's notifications as read.
#[cfg(feature = "server")]
#[post("/api/notifications/read", session: tower_sessions::Session)]
pub async fn mark_notification_read(notification_id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user_uuid = require_user(&session).await?;

    let notification_uuid =
        uuid::Uuid::parse_str(&notification_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE notifications SET read = TRUE WHERE id = $1 AND user_id = $2")
        .bind(notification_uuid)
        .bind(user_uuid)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/notifications/read")]
pub async fn mark_notification_read(notification_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Broadcast a notification to every customer. Staff only. Returns the number
/// of rows written.
#[cfg(feature = "server")]
#[post("/api/notifications/broadcast", session: tower_sessions::Session)]
pub async fn broadcast_notification(
    title: String,
    message: String,
    kind: String,
) -> Result<u32, ServerFnError> {
    use crate::db::get_pool;

    require_staff(&session).await?;

    let title = title.trim().to_string();
    let message = message.trim().to_string();
    if title.is_empty() || message.is_empty() {
        return Err(ServerFnError::new("Title and message are required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query(
        "INSERT INTO notifications (user_id, title, message, kind)
         SELECT user_id, $1, $2, $3 FROM profiles WHERE role = 'customer'",
    )
    .bind(&title)
    .bind(&message)
    .bind(&kind)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(result.rows_affected() as u32)
}

#[cfg(not(feature = "server"))]
#[post("/api/notifications/broadcast")]
pub async fn broadcast_notification(
    title: String,
    message: String,
    kind: String,
) -> Result<u32, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List every customer profile, newest first. Staff only.
#[cfg(feature = "server")]
#[get("/api/profiles/customers", session: tower_sessions::Session)]
pub async fn customer_profiles() -> Result<Vec<crate::models::ProfileInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Profile;

    require_staff(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profiles: Vec<Profile> =
        sqlx::query_as("SELECT * FROM profiles WHERE role = 'customer' ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profiles.iter().map(|p| p.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/profiles/customers")]
pub async fn customer_profiles() -> Result<Vec<crate::models::ProfileInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List active FAQs for public display.
#[cfg(feature = "server")]
#[get("/api/faqs")]
pub async fn list_faqs() -> Result<Vec<FaqInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Faq;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let faqs: Vec<Faq> =
        sqlx::query_as("SELECT * FROM faqs WHERE is_active = TRUE ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(faqs.iter().map(|f| f.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/faqs")]
pub async fn list_faqs() -> Result<Vec<FaqInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List every FAQ, active or not. Staff only.
#[cfg(feature = "server")]
#[get("/api/faqs/all", session: tower_sessions::Session)]
pub async fn all_faqs() -> Result<Vec<FaqInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Faq;

    require_staff(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let faqs: Vec<Faq> = sqlx::query_as("SELECT * FROM faqs ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(faqs.iter().map(|f| f.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/faqs/all")]
pub async fn all_faqs() -> Result<Vec<FaqInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create or update an FAQ entry. Staff only.
#[cfg(feature = "server")]
#[post("/api/faqs/upsert", session: tower_sessions::Session)]
pub async fn upsert_faq(
    faq_id: Option<String>,
    question: String,
    answer: String,
    category: String,
    is_active: bool,
) -> Result<FaqInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Faq;

    require_staff(&session).await?;

    let question = question.trim().to_string();
    let answer = answer.trim().to_string();
    if question.is_empty() || answer.is_empty() {
        return Err(ServerFnError::new("Question and answer are required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let faq: Faq = match faq_id {
        Some(id) => {
            let faq_uuid =
                uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;
            let updated: Option<Faq> = sqlx::query_as(
                "UPDATE faqs
                 SET question = $2, answer = $3, category = $4, is_active = $5, updated_at = NOW()
                 WHERE id = $1 RETURNING *",
            )
            .bind(faq_uuid)
            .bind(&question)
            .bind(&answer)
            .bind(&category)
            .bind(is_active)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

            match updated {
                Some(faq) => faq,
                None => return Err(ServerFnError::new("FAQ not found")),
            }
        }
        None => sqlx::query_as(
            "INSERT INTO faqs (question, answer, category, is_active)
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&question)
        .bind(&answer)
        .bind(&category)
        .bind(is_active)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?,
    };

    Ok(faq.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/faqs/upsert")]
pub async fn upsert_faq(
    faq_id: Option<String>,
    question: String,
    answer: String,
    category: String,
    is_active: bool,
) -> Result<FaqInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete an FAQ entry. Staff only.
#[cfg(feature = "server")]
#[post("/api/faqs/delete", session: tower_sessions::Session)]
pub async fn delete_faq(faq_id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    require_staff(&session).await?;

    let faq_uuid =
        uuid::Uuid::parse_str(&faq_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM faqs WHERE id = $1")
        .bind(faq_uuid)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/faqs/delete")]
pub async fn delete_faq(faq_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
