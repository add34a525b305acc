use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Moderation status of an organization account.
///
/// The stored column is nullable and NULL means "pending review"; that
/// convention is normalized to [`OrganizationStatus::Pending`] exactly once
/// at the data-access boundary via [`OrganizationStatus::from_db`], so no
/// other code ever special-cases NULL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Blocked,
}

impl OrganizationStatus {
    /// The stored string value for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganizationStatus::Pending => "pending",
            OrganizationStatus::Approved => "approved",
            OrganizationStatus::Rejected => "rejected",
            OrganizationStatus::Blocked => "blocked",
        }
    }

    /// Normalizes a stored status value. `None` (NULL column) is `Pending`;
    /// an unrecognized string returns `None` so the caller can raise a typed
    /// error.
    pub fn from_db(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("pending") => Some(OrganizationStatus::Pending),
            Some("approved") => Some(OrganizationStatus::Approved),
            Some("rejected") => Some(OrganizationStatus::Rejected),
            Some("blocked") => Some(OrganizationStatus::Blocked),
            Some(_) => None,
        }
    }
}

/// Moderation snapshot of one organization account row.
///
/// This is the state the status machine validates transitions against; it is
/// re-fetched immediately before every write so decisions are never made on
/// stale client-side state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationModeration {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: OrganizationStatus,
    pub rejection_reason: Option<String>,
    pub can_resubmit: bool,
    pub blocked: bool,
    pub blocked_reason: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
}

/// The single-row update produced by a legal organization transition.
///
/// Carries every moderation field so the write is one UPDATE statement;
/// `verified_at` is only `Some` on approval and the store keeps the existing
/// value otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationStatusUpdate {
    pub status: OrganizationStatus,
    pub rejection_reason: Option<String>,
    pub can_resubmit: bool,
    pub blocked: bool,
    pub blocked_reason: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
}
