//! The deletion impact analyzer.
//!
//! Read-only and side-effect-free: it aggregates dependent counts through
//! the impact repository and classifies the risk. Warnings are generated
//! deterministically from the same counts the caller sees, so the UI and
//! the backend can never disagree about risk. `safe_to_delete` is derived,
//! never set independently.
use causeway_repository::{ImpactRepository, ImpactRepositoryError, RawDeletionImpact};
use causeway_shared::types::{
    DeletionAnalysis, DeletionImpact, DeletionTarget, DependencyCounts, TargetSummary,
};
use std::sync::Arc;

use crate::errors::AnalysisError;

/// Applications + messages at or above this volume push a project deletion
/// from low to medium impact.
const MEDIUM_VOLUME_THRESHOLD: u64 = 10;

/// Computes the impact report for one deletion candidate.
pub struct DeletionAnalyzer {
    impact: Arc<dyn ImpactRepository>,
}

impl DeletionAnalyzer {
    pub fn new(impact: Arc<dyn ImpactRepository>) -> Self {
        Self { impact }
    }

    /// Analyzes the dependents of `target` and classifies the deletion.
    ///
    /// Completes even when the target has no dependents at all: the empty
    /// case reports `safe_to_delete = true` with `Minimal` impact.
    ///
    /// # Errors
    ///
    /// * `AnalysisError::TargetNotFound` - the target is already gone.
    /// * `AnalysisError::Query` - the aggregation failed; deletion stays
    ///   blocked until it can be analyzed.
    pub async fn analyze(&self, target: DeletionTarget) -> Result<DeletionAnalysis, AnalysisError> {
        let raw = self
            .impact
            .get_deletion_impact(target)
            .await
            .map_err(|err| match err {
                ImpactRepositoryError::TargetNotFound { kind, id } => {
                    AnalysisError::TargetNotFound { kind, id }
                }
                other => AnalysisError::Query(other),
            })?;

        Ok(build_analysis(target, raw))
    }
}

fn build_analysis(target: DeletionTarget, raw: RawDeletionImpact) -> DeletionAnalysis {
    let dependencies = DependencyCounts {
        projects: raw.projects,
        active_projects: raw.active_projects,
        applications: raw.applications,
        pending_applications: raw.pending_applications,
        active_applications: raw.active_applications,
        messages: raw.messages,
        team_activities: raw.team_activities,
    };

    let deletion_impact = match target {
        DeletionTarget::Organization(_) => classify_organization(&dependencies),
        DeletionTarget::Project(_) => classify_project(&dependencies),
        DeletionTarget::Developer(_) => classify_developer(&dependencies),
    };

    let warnings = build_warnings(&target, &dependencies);
    let action_required = match target {
        DeletionTarget::Developer(_) if dependencies.active_applications > 0 => Some(format!(
            "This developer is an active team member; reassign their work in {} project(s) before deleting: {}",
            raw.active_project_titles.len(),
            raw.active_project_titles.join(", "),
        )),
        _ => None,
    };

    DeletionAnalysis {
        target: TargetSummary {
            name: raw.target_name,
            email: raw.target_email,
            kind: target.kind().to_string(),
            member_since: raw.member_since,
            verified_at: raw.verified_at,
        },
        safe_to_delete: !dependencies.has_active_dependents(),
        deletion_impact,
        dependencies,
        warnings,
        action_required,
        active_project_titles: raw.active_project_titles,
    }
}

/// Organizations are classified by what their projects would take down with
/// them: any active project is high impact, any project at all is medium.
pub fn classify_organization(counts: &DependencyCounts) -> DeletionImpact {
    if counts.active_projects > 0 {
        DeletionImpact::High
    } else if counts.projects > 0 {
        DeletionImpact::Medium
    } else {
        DeletionImpact::Minimal
    }
}

/// Projects are high impact while anyone holds an accepted application;
/// otherwise impact scales with message/application volume.
pub fn classify_project(counts: &DependencyCounts) -> DeletionImpact {
    let volume = counts.applications + counts.messages;
    if counts.active_applications > 0 {
        DeletionImpact::High
    } else if volume >= MEDIUM_VOLUME_THRESHOLD {
        DeletionImpact::Medium
    } else if volume > 0 || counts.team_activities > 0 {
        DeletionImpact::Low
    } else {
        DeletionImpact::Minimal
    }
}

/// Developers are high impact while they hold an accepted application — an
/// in-flight team member — and low while only history exists.
pub fn classify_developer(counts: &DependencyCounts) -> DeletionImpact {
    if counts.active_applications > 0 {
        DeletionImpact::High
    } else if counts.applications > 0 || counts.messages > 0 {
        DeletionImpact::Low
    } else {
        DeletionImpact::Minimal
    }
}

fn build_warnings(target: &DeletionTarget, counts: &DependencyCounts) -> Vec<String> {
    let mut warnings = Vec::new();
    match target {
        DeletionTarget::Organization(_) => {
            if counts.active_projects > 0 {
                warnings.push(format!(
                    "{} active project(s) will be cancelled and their teams will lose access",
                    counts.active_projects
                ));
            }
            if counts.projects > 0 {
                warnings.push(format!(
                    "{} project(s) and their full history will be permanently removed",
                    counts.projects
                ));
            }
            if counts.pending_applications > 0 {
                warnings.push(format!(
                    "{} pending application(s) will be discarded",
                    counts.pending_applications
                ));
            }
            if counts.messages > 0 {
                warnings.push(format!(
                    "{} message(s) will be permanently removed",
                    counts.messages
                ));
            }
        }
        DeletionTarget::Project(_) => {
            if counts.active_applications > 0 {
                warnings.push(format!(
                    "{} accepted team member(s) will lose access to this project",
                    counts.active_applications
                ));
            }
            if counts.applications > 0 {
                warnings.push(format!(
                    "{} application(s) will be permanently removed",
                    counts.applications
                ));
            }
            if counts.messages > 0 {
                warnings.push(format!(
                    "{} message(s) will be permanently removed",
                    counts.messages
                ));
            }
            if counts.team_activities > 0 {
                warnings.push(format!(
                    "{} team activity record(s) will be permanently removed",
                    counts.team_activities
                ));
            }
        }
        DeletionTarget::Developer(_) => {
            if counts.active_applications > 0 {
                warnings.push(format!(
                    "{} accepted application(s) are in flight; those teams lose a member",
                    counts.active_applications
                ));
            }
            if counts.applications > 0 {
                warnings.push(format!(
                    "{} application(s) will be withdrawn and retained as history",
                    counts.applications
                ));
            }
            if counts.messages > 0 {
                warnings.push(format!(
                    "{} message(s) authored by this developer remain in project archives",
                    counts.messages
                ));
            }
        }
    }
    warnings
}
