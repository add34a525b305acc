use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a project.
///
/// `Completed` and `Cancelled` are terminal: no moderation transition leaves
/// them. "Blocking" an open project is a status-level demotion to `Rejected`
/// with a reason; there is no separate blocked state for projects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Pending,
    Open,
    InProgress,
    Completed,
    Cancelled,
    Rejected,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "pending",
            ProjectStatus::Open => "open",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
            ProjectStatus::Rejected => "rejected",
        }
    }

    /// Parses a stored status value; `None` for unrecognized strings.
    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(ProjectStatus::Pending),
            "open" => Some(ProjectStatus::Open),
            "in_progress" => Some(ProjectStatus::InProgress),
            "completed" => Some(ProjectStatus::Completed),
            "cancelled" => Some(ProjectStatus::Cancelled),
            "rejected" => Some(ProjectStatus::Rejected),
            _ => None,
        }
    }

    /// A project counts as active while a team can still be working in it.
    pub fn is_active(&self) -> bool {
        matches!(self, ProjectStatus::Open | ProjectStatus::InProgress)
    }

    /// Terminal states accept no further moderation transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProjectStatus::Completed | ProjectStatus::Cancelled)
    }
}

/// Moderation snapshot of one project row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectModeration {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    pub status: ProjectStatus,
    pub rejection_reason: Option<String>,
    pub can_resubmit: bool,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
}

/// The single-row update produced by a legal project transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStatusUpdate {
    pub status: ProjectStatus,
    pub rejection_reason: Option<String>,
    pub can_resubmit: bool,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
}
