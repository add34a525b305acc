//! Repository-local types returned by the impact aggregation queries.

use chrono::{DateTime, Utc};

/// Raw dependency aggregation for one deletion candidate, straight from the
/// store and not yet classified.
///
/// Counts that do not apply to the target type stay zero. The analyzer turns
/// this into a `DeletionAnalysis`; nothing else consumes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDeletionImpact {
    pub target_name: String,
    pub target_email: Option<String>,
    pub member_since: Option<DateTime<Utc>>,
    pub verified_at: Option<DateTime<Utc>>,
    pub projects: u64,
    pub active_projects: u64,
    pub applications: u64,
    pub pending_applications: u64,
    pub active_applications: u64,
    pub messages: u64,
    pub team_activities: u64,
    /// Titles of projects in which a developer target currently holds an
    /// accepted application. Empty for other target types.
    pub active_project_titles: Vec<String>,
}
