//! Complaint model: customer-submitted complaints and service requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Categories offered in the complaint form, `(value, label)` pairs.
pub const COMPLAINT_CATEGORIES: [(&str, &str); 7] = [
    ("loan_issue", "Loan Issue"),
    ("customer_service", "Customer Service"),
    ("account_update", "Account Update"),
    ("payment_issue", "Payment Issue"),
    ("documentation", "Documentation"),
    ("technical_support", "Technical Support"),
    ("general_inquiry", "General Inquiry"),
];

/// Workflow state of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::InProgress => "in_progress",
            ComplaintStatus::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ComplaintStatus::Pending),
            "in_progress" => Ok(ComplaintStatus::InProgress),
            "resolved" => Ok(ComplaintStatus::Resolved),
            other => Err(format!("unknown complaint status: {}", other)),
        }
    }
}

/// Urgency assigned by the customer at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

/// Full complaint record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Complaint {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub category: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub admin_notes: Option<String>,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Complaint {
    /// Convert to ComplaintInfo for client consumption. Unparseable enum columns
    /// degrade to the mildest value rather than failing the whole listing.
    pub fn to_info(&self) -> ComplaintInfo {
        ComplaintInfo {
            id: self.id.to_string(),
            user_id: self.user_id.to_string(),
            title: self.title.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            priority: self.priority.parse().unwrap_or(Priority::Low),
            status: self.status.parse().unwrap_or(ComplaintStatus::Pending),
            admin_notes: self.admin_notes.clone(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Complaint information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplaintInfo {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub priority: Priority,
    pub status: ComplaintStatus,
    pub admin_notes: Option<String>,
    pub created_at: String,
}

impl ComplaintInfo {
    /// Human-readable category label.
    pub fn category_label(&self) -> String {
        COMPLAINT_CATEGORIES
            .iter()
            .find(|(value, _)| *value == self.category)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| self.category.replace('_', " "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            ComplaintStatus::Pending,
            ComplaintStatus::InProgress,
            ComplaintStatus::Resolved,
        ] {
            assert_eq!(status.as_str().parse::<ComplaintStatus>().unwrap(), status);
        }
    }

    #[test]
    fn priority_round_trips_through_str() {
        for priority in [
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Urgent,
        ] {
            assert_eq!(priority.as_str().parse::<Priority>().unwrap(), priority);
        }
    }

    #[test]
    fn category_label_falls_back_for_unknown_values() {
        let info = ComplaintInfo {
            id: "1".into(),
            user_id: "2".into(),
            title: "t".into(),
            category: "legacy_category".into(),
            description: "d".into(),
            priority: Priority::Low,
            status: ComplaintStatus::Pending,
            admin_notes: None,
            created_at: String::new(),
        };
        assert_eq!(info.category_label(), "legacy category");

        let known = ComplaintInfo {
            category: "loan_issue".into(),
            ..info
        };
        assert_eq!(known.category_label(), "Loan Issue");
    }
}
