//! Error types for the admin authorization gate.
use causeway_repository::AccountsRepositoryError;
use causeway_shared::types::Role;
use thiserror::Error;
use uuid::Uuid;

/// Represents an authorization failure.
///
/// Fatal to the requested operation; never retried automatically.
#[derive(Debug, Error)]
pub enum AuthorizationError {
    #[error("account {id} has role {role:?}; administrator privilege is required")]
    NotAdmin { id: Uuid, role: Role },

    #[error("account {0} does not exist")]
    UnknownAccount(Uuid),

    #[error("account {0} is not the designated super admin")]
    NotSuperAdmin(Uuid),

    #[error("could not verify administrator privilege: {0}")]
    Repository(#[from] AccountsRepositoryError),
}
