//! Moderation status machines for organizations, projects, and account
//! roles.
//!
//! Everything here is pure: a transition takes the current persisted
//! snapshot and a requested action and either produces the single-row
//! update to apply or fails with a [`TransitionError`]. Callers re-fetch
//! the snapshot immediately before committing so decisions are never made
//! on stale client-side state.
use causeway_shared::types::{
    OrganizationModeration, OrganizationStatus, OrganizationStatusUpdate, ProjectModeration,
    ProjectStatus, ProjectStatusUpdate, Role,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::TransitionError;

/// A moderation action requested against an organization.
#[derive(Debug, Clone, PartialEq)]
pub enum OrganizationAction {
    Approve,
    Reject { reason: String, can_resubmit: bool },
    Block { reason: String },
    Unblock,
    Resubmit,
}

impl OrganizationAction {
    fn name(&self) -> &'static str {
        match self {
            OrganizationAction::Approve => "approved",
            OrganizationAction::Reject { .. } => "rejected",
            OrganizationAction::Block { .. } => "blocked",
            OrganizationAction::Unblock => "unblocked",
            OrganizationAction::Resubmit => "resubmitted",
        }
    }
}

/// A moderation action requested against a project.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectAction {
    Approve { approved_by: Uuid },
    Reject { reason: String, can_resubmit: bool },
    Block { reason: String },
    Resubmit,
}

impl ProjectAction {
    fn name(&self) -> &'static str {
        match self {
            ProjectAction::Approve { .. } => "approved",
            ProjectAction::Reject { .. } => "rejected",
            ProjectAction::Block { .. } => "blocked",
            ProjectAction::Resubmit => "resubmitted",
        }
    }
}

fn require_reason(reason: &str) -> Result<String, TransitionError> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        return Err(TransitionError::EmptyReason);
    }
    Ok(trimmed.to_string())
}

/// Validates an organization moderation action against the current snapshot
/// and produces the update to persist.
///
/// Legal transitions: pending → approved | rejected; approved → blocked;
/// rejected → blocked | pending (resubmit, gated by `can_resubmit`);
/// blocked → approved (unblock). Anything else fails fast.
pub fn organization_transition(
    current: &OrganizationModeration,
    action: &OrganizationAction,
    now: DateTime<Utc>,
) -> Result<OrganizationStatusUpdate, TransitionError> {
    let illegal = || TransitionError::InvalidOrganizationTransition {
        id: current.id,
        status: current.status,
        action: action.name(),
    };

    match (current.status, action) {
        (OrganizationStatus::Pending, OrganizationAction::Approve) => {
            Ok(OrganizationStatusUpdate {
                status: OrganizationStatus::Approved,
                rejection_reason: None,
                can_resubmit: true,
                blocked: false,
                blocked_reason: None,
                verified_at: Some(now),
            })
        }
        (OrganizationStatus::Pending, OrganizationAction::Reject { reason, can_resubmit }) => {
            Ok(OrganizationStatusUpdate {
                status: OrganizationStatus::Rejected,
                rejection_reason: Some(require_reason(reason)?),
                can_resubmit: *can_resubmit,
                blocked: false,
                blocked_reason: None,
                verified_at: None,
            })
        }
        (
            OrganizationStatus::Approved | OrganizationStatus::Rejected,
            OrganizationAction::Block { reason },
        ) => Ok(OrganizationStatusUpdate {
            status: OrganizationStatus::Blocked,
            rejection_reason: current.rejection_reason.clone(),
            can_resubmit: false,
            blocked: true,
            blocked_reason: Some(require_reason(reason)?),
            verified_at: None,
        }),
        (OrganizationStatus::Blocked, OrganizationAction::Unblock) => {
            Ok(OrganizationStatusUpdate {
                status: OrganizationStatus::Approved,
                rejection_reason: None,
                can_resubmit: true,
                blocked: false,
                blocked_reason: None,
                verified_at: None,
            })
        }
        (OrganizationStatus::Rejected, OrganizationAction::Resubmit) => {
            if !current.can_resubmit {
                return Err(TransitionError::ResubmitNotAllowed { id: current.id });
            }
            Ok(OrganizationStatusUpdate {
                status: OrganizationStatus::Pending,
                rejection_reason: None,
                can_resubmit: true,
                blocked: false,
                blocked_reason: None,
                verified_at: None,
            })
        }
        _ => Err(illegal()),
    }
}

/// Validates a project moderation action against the current snapshot and
/// produces the update to persist.
///
/// `Completed` and `Cancelled` are terminal. Blocking an open or
/// in-progress project demotes it to `rejected` with a reason; that
/// overload matches how the rest of the platform reads project state.
pub fn project_transition(
    current: &ProjectModeration,
    action: &ProjectAction,
    now: DateTime<Utc>,
) -> Result<ProjectStatusUpdate, TransitionError> {
    let illegal = || TransitionError::InvalidProjectTransition {
        id: current.id,
        status: current.status,
        action: action.name(),
    };

    if current.status.is_terminal() {
        return Err(illegal());
    }

    match (current.status, action) {
        (ProjectStatus::Pending, ProjectAction::Approve { approved_by }) => {
            Ok(ProjectStatusUpdate {
                status: ProjectStatus::Open,
                rejection_reason: None,
                can_resubmit: true,
                approved_by: Some(*approved_by),
                approved_at: Some(now),
            })
        }
        (ProjectStatus::Pending, ProjectAction::Reject { reason, can_resubmit }) => {
            Ok(ProjectStatusUpdate {
                status: ProjectStatus::Rejected,
                rejection_reason: Some(require_reason(reason)?),
                can_resubmit: *can_resubmit,
                approved_by: None,
                approved_at: None,
            })
        }
        (
            ProjectStatus::Open | ProjectStatus::InProgress,
            ProjectAction::Block { reason },
        ) => Ok(ProjectStatusUpdate {
            status: ProjectStatus::Rejected,
            rejection_reason: Some(require_reason(reason)?),
            can_resubmit: false,
            approved_by: None,
            approved_at: None,
        }),
        (ProjectStatus::Rejected, ProjectAction::Resubmit) => {
            if !current.can_resubmit {
                return Err(TransitionError::ResubmitNotAllowed { id: current.id });
            }
            Ok(ProjectStatusUpdate {
                status: ProjectStatus::Pending,
                rejection_reason: None,
                can_resubmit: true,
                approved_by: None,
                approved_at: None,
            })
        }
        _ => Err(illegal()),
    }
}

/// Validates a promotion to admin. Only developer accounts are promotable;
/// organizations never are.
pub fn promote_role(id: Uuid, current: Role) -> Result<Role, TransitionError> {
    match current {
        Role::Developer => Ok(Role::Admin),
        role => Err(TransitionError::NotPromotable { id, role }),
    }
}

/// Validates a demotion back to developer.
pub fn demote_role(id: Uuid, current: Role) -> Result<Role, TransitionError> {
    match current {
        Role::Admin => Ok(Role::Developer),
        role => Err(TransitionError::NotDemotable { id, role }),
    }
}

/// Whether a rejected organization may return to review.
pub fn can_resubmit_organization(current: &OrganizationModeration) -> bool {
    current.status == OrganizationStatus::Rejected && current.can_resubmit
}

/// Whether a rejected project may return to review.
pub fn can_resubmit_project(current: &ProjectModeration) -> bool {
    current.status == ProjectStatus::Rejected && current.can_resubmit
}

/// Whether a project still accepts moderation actions at all.
pub fn project_is_moderatable(status: ProjectStatus) -> bool {
    !status.is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organization(status: OrganizationStatus, can_resubmit: bool) -> OrganizationModeration {
        OrganizationModeration {
            id: Uuid::new_v4(),
            name: "Shelter Network".to_string(),
            email: "ops@shelter.example".to_string(),
            status,
            rejection_reason: None,
            can_resubmit,
            blocked: status == OrganizationStatus::Blocked,
            blocked_reason: None,
            verified_at: None,
        }
    }

    fn project(status: ProjectStatus, can_resubmit: bool) -> ProjectModeration {
        ProjectModeration {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            title: "Volunteer portal".to_string(),
            status,
            rejection_reason: None,
            can_resubmit,
            approved_by: None,
            approved_at: None,
        }
    }

    #[test]
    fn pending_organization_can_be_approved() {
        let current = organization(OrganizationStatus::Pending, true);
        let now = Utc::now();

        let update =
            organization_transition(&current, &OrganizationAction::Approve, now).unwrap();

        assert_eq!(update.status, OrganizationStatus::Approved);
        assert_eq!(update.rejection_reason, None);
        assert_eq!(update.verified_at, Some(now));
        assert!(!update.blocked);
    }

    #[test]
    fn approving_an_approved_organization_fails() {
        let current = organization(OrganizationStatus::Approved, true);

        let result = organization_transition(&current, &OrganizationAction::Approve, Utc::now());

        assert!(matches!(
            result,
            Err(TransitionError::InvalidOrganizationTransition {
                status: OrganizationStatus::Approved,
                ..
            })
        ));
    }

    #[test]
    fn rejecting_requires_a_reason() {
        let current = organization(OrganizationStatus::Pending, true);
        let action = OrganizationAction::Reject {
            reason: "   ".to_string(),
            can_resubmit: true,
        };

        assert_eq!(
            organization_transition(&current, &action, Utc::now()),
            Err(TransitionError::EmptyReason)
        );
    }

    #[test]
    fn rejection_records_reason_and_resubmit_flag() {
        let current = organization(OrganizationStatus::Pending, true);
        let action = OrganizationAction::Reject {
            reason: "mission statement missing".to_string(),
            can_resubmit: false,
        };

        let update = organization_transition(&current, &action, Utc::now()).unwrap();

        assert_eq!(update.status, OrganizationStatus::Rejected);
        assert_eq!(
            update.rejection_reason.as_deref(),
            Some("mission statement missing")
        );
        assert!(!update.can_resubmit);
    }

    #[test]
    fn approved_and_rejected_organizations_can_be_blocked() {
        for status in [OrganizationStatus::Approved, OrganizationStatus::Rejected] {
            let current = organization(status, true);
            let action = OrganizationAction::Block {
                reason: "fraud report".to_string(),
            };

            let update = organization_transition(&current, &action, Utc::now()).unwrap();

            assert_eq!(update.status, OrganizationStatus::Blocked);
            assert!(update.blocked);
            assert_eq!(update.blocked_reason.as_deref(), Some("fraud report"));
            assert!(!update.can_resubmit);
        }
    }

    #[test]
    fn pending_organization_cannot_be_blocked() {
        let current = organization(OrganizationStatus::Pending, true);
        let action = OrganizationAction::Block {
            reason: "fraud report".to_string(),
        };

        assert!(organization_transition(&current, &action, Utc::now()).is_err());
    }

    #[test]
    fn blocked_organization_can_be_unblocked_to_approved() {
        let current = organization(OrganizationStatus::Blocked, false);

        let update =
            organization_transition(&current, &OrganizationAction::Unblock, Utc::now()).unwrap();

        assert_eq!(update.status, OrganizationStatus::Approved);
        assert!(!update.blocked);
        assert_eq!(update.blocked_reason, None);
    }

    #[test]
    fn resubmission_returns_rejected_organization_to_pending() {
        let mut current = organization(OrganizationStatus::Rejected, true);
        current.rejection_reason = Some("incomplete profile".to_string());

        let update =
            organization_transition(&current, &OrganizationAction::Resubmit, Utc::now()).unwrap();

        assert_eq!(update.status, OrganizationStatus::Pending);
        assert_eq!(update.rejection_reason, None);
    }

    #[test]
    fn resubmission_without_permission_fails_and_changes_nothing() {
        let current = organization(OrganizationStatus::Rejected, false);

        let result =
            organization_transition(&current, &OrganizationAction::Resubmit, Utc::now());

        assert_eq!(
            result,
            Err(TransitionError::ResubmitNotAllowed { id: current.id })
        );
    }

    #[test]
    fn pending_project_approval_sets_approver_and_timestamp() {
        let current = project(ProjectStatus::Pending, true);
        let admin = Uuid::new_v4();
        let now = Utc::now();

        let update = project_transition(
            &current,
            &ProjectAction::Approve { approved_by: admin },
            now,
        )
        .unwrap();

        assert_eq!(update.status, ProjectStatus::Open);
        assert_eq!(update.approved_by, Some(admin));
        assert_eq!(update.approved_at, Some(now));
        assert_eq!(update.rejection_reason, None);
        assert!(update.can_resubmit);
    }

    #[test]
    fn open_and_in_progress_projects_can_be_blocked_via_rejection() {
        for status in [ProjectStatus::Open, ProjectStatus::InProgress] {
            let current = project(status, true);
            let action = ProjectAction::Block {
                reason: "reported content".to_string(),
            };

            let update = project_transition(&current, &action, Utc::now()).unwrap();

            assert_eq!(update.status, ProjectStatus::Rejected);
            assert_eq!(update.rejection_reason.as_deref(), Some("reported content"));
            assert!(!update.can_resubmit);
        }
    }

    #[test]
    fn terminal_projects_accept_no_transitions() {
        for status in [ProjectStatus::Completed, ProjectStatus::Cancelled] {
            let current = project(status, true);
            for action in [
                ProjectAction::Approve {
                    approved_by: Uuid::new_v4(),
                },
                ProjectAction::Reject {
                    reason: "r".to_string(),
                    can_resubmit: true,
                },
                ProjectAction::Block {
                    reason: "r".to_string(),
                },
                ProjectAction::Resubmit,
            ] {
                assert!(project_transition(&current, &action, Utc::now()).is_err());
            }
        }
    }

    #[test]
    fn rejected_project_resubmission_is_gated() {
        let allowed = project(ProjectStatus::Rejected, true);
        let update = project_transition(&allowed, &ProjectAction::Resubmit, Utc::now()).unwrap();
        assert_eq!(update.status, ProjectStatus::Pending);
        assert_eq!(update.rejection_reason, None);

        let denied = project(ProjectStatus::Rejected, false);
        assert_eq!(
            project_transition(&denied, &ProjectAction::Resubmit, Utc::now()),
            Err(TransitionError::ResubmitNotAllowed { id: denied.id })
        );
    }

    #[test]
    fn only_developers_are_promotable() {
        let id = Uuid::new_v4();
        assert_eq!(promote_role(id, Role::Developer), Ok(Role::Admin));
        assert_eq!(
            promote_role(id, Role::Organization),
            Err(TransitionError::NotPromotable {
                id,
                role: Role::Organization
            })
        );
        assert_eq!(
            promote_role(id, Role::Admin),
            Err(TransitionError::NotPromotable {
                id,
                role: Role::Admin
            })
        );
    }

    #[test]
    fn only_admins_are_demotable() {
        let id = Uuid::new_v4();
        assert_eq!(demote_role(id, Role::Admin), Ok(Role::Developer));
        assert!(demote_role(id, Role::Developer).is_err());
    }

    #[test]
    fn resubmission_predicates_match_transitions() {
        assert!(can_resubmit_organization(&organization(
            OrganizationStatus::Rejected,
            true
        )));
        assert!(!can_resubmit_organization(&organization(
            OrganizationStatus::Rejected,
            false
        )));
        assert!(!can_resubmit_organization(&organization(
            OrganizationStatus::Approved,
            true
        )));
        assert!(can_resubmit_project(&project(ProjectStatus::Rejected, true)));
        assert!(!can_resubmit_project(&project(ProjectStatus::Open, true)));
        assert!(!project_is_moderatable(ProjectStatus::Completed));
        assert!(project_is_moderatable(ProjectStatus::Rejected));
    }
}
