//! Error types for the moderation service.
use causeway_repository::{AccountsRepositoryError, ProjectsRepositoryError};
use thiserror::Error;
use uuid::Uuid;

use crate::errors::{AuthorizationError, TransitionError};

/// Represents errors from the moderation service.
///
/// Transition and authorization failures surface verbatim so the operator
/// can correct the input or escalate; repository failures carry the
/// underlying error.
#[derive(Debug, Error)]
pub enum ModerationError {
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("organization {0} was not found")]
    OrganizationNotFound(Uuid),

    #[error("project {0} was not found")]
    ProjectNotFound(Uuid),

    #[error("account {0} was not found")]
    AccountNotFound(Uuid),

    #[error("account update failed: {0}")]
    Accounts(#[from] AccountsRepositoryError),

    #[error("project update failed: {0}")]
    Projects(#[from] ProjectsRepositoryError),
}
