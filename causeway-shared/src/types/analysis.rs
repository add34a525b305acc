use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn is_zero(n: &u64) -> bool {
    *n == 0
}

/// Qualitative risk classification of a deletion.
///
/// Ordered so callers can compare severities directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionImpact {
    Minimal,
    Low,
    Medium,
    High,
}

/// Dependent-record counts for a deletion candidate.
///
/// Zero-valued counts are skipped during serialization so the audit snapshot
/// only carries the categories that apply to the target type and are
/// actually populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyCounts {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub projects: u64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub active_projects: u64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub applications: u64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub pending_applications: u64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub active_applications: u64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub messages: u64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub team_activities: u64,
}

impl DependencyCounts {
    /// Whether any in-flight dependent exists. Pending or historical-only
    /// dependents warn but never block a deletion; these do.
    pub fn has_active_dependents(&self) -> bool {
        self.active_projects > 0 || self.active_applications > 0
    }
}

/// Identifying metadata about the deletion target, shown to the operator
/// alongside the counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_since: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
}

/// The computed impact report for one deletion candidate.
///
/// Transient: never persisted as its own row, but serialized verbatim into
/// the audit entry written at execution time. `safe_to_delete` is derived
/// from the counts, never set independently, so the UI and the backend
/// cannot disagree about risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletionAnalysis {
    pub target: TargetSummary,
    pub safe_to_delete: bool,
    pub deletion_impact: DeletionImpact,
    pub dependencies: DependencyCounts,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_required: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_project_titles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_are_omitted_from_snapshots() {
        let counts = DependencyCounts {
            projects: 2,
            ..Default::default()
        };
        let json = serde_json::to_value(&counts).unwrap();
        assert_eq!(json, serde_json::json!({ "projects": 2 }));
    }

    #[test]
    fn impact_levels_are_ordered() {
        assert!(DeletionImpact::High > DeletionImpact::Medium);
        assert!(DeletionImpact::Medium > DeletionImpact::Low);
        assert!(DeletionImpact::Low > DeletionImpact::Minimal);
    }
}
