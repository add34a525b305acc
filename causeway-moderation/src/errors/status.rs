//! Error types for the moderation status machines.
//! An illegal transition fails fast with one of these; no partial write is
//! ever emitted.
use causeway_shared::types::{OrganizationStatus, ProjectStatus, Role};
use thiserror::Error;
use uuid::Uuid;

/// Represents a rejected state transition.
///
/// Carries the observed persisted state and the requested action so the
/// operator sees exactly why the request was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransitionError {
    #[error("organization {id} is {status:?} and cannot be {action}")]
    InvalidOrganizationTransition {
        id: Uuid,
        status: OrganizationStatus,
        action: &'static str,
    },

    #[error("project {id} is {status:?} and cannot be {action}")]
    InvalidProjectTransition {
        id: Uuid,
        status: ProjectStatus,
        action: &'static str,
    },

    #[error("resubmission is not permitted for {id}")]
    ResubmitNotAllowed { id: Uuid },

    #[error("a reason is required for this action")]
    EmptyReason,

    #[error("only developer accounts can be promoted to admin; {id} is {role:?}")]
    NotPromotable { id: Uuid, role: Role },

    #[error("only admin accounts can be demoted; {id} is {role:?}")]
    NotDemotable { id: Uuid, role: Role },

    #[error("administrators cannot demote themselves")]
    SelfDemotion,
}
