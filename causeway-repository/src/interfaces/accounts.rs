//! This module defines the `AccountsRepository` trait, which provides an
//! interface for interacting with the underlying data store for accounts:
//! role lookups, organization moderation state, and account removal.
use crate::errors::AccountsRepositoryError;
use causeway_shared::types::{OrganizationModeration, OrganizationStatusUpdate, Role};
use uuid::Uuid;

/// A trait that defines the interface for interacting with account rows.
///
/// Implementors provide role lookups (used by the authorization gate on
/// every destructive call), organization moderation snapshots and updates,
/// and the composite account removal used by the deletion executor.
#[async_trait::async_trait]
pub trait AccountsRepository: Send + Sync {
    /// Fetches the current persisted role of an account.
    ///
    /// The authorization gate calls this immediately before every
    /// destructive or role-changing operation; the result must never be
    /// served from a cache.
    ///
    /// # Arguments
    ///
    /// * `id` - The account to look up.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the account does not exist, `Ok(Some(role))`
    /// otherwise, or an `AccountsRepositoryError` if the query fails.
    async fn get_account_role(&self, id: Uuid) -> Result<Option<Role>, AccountsRepositoryError>;

    /// Fetches the moderation snapshot of an organization account.
    ///
    /// A NULL stored status is normalized to `Pending` here, at the
    /// data-access boundary, so callers never see the null convention.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no organization account with this id exists.
    async fn get_organization_moderation(
        &self,
        id: Uuid,
    ) -> Result<Option<OrganizationModeration>, AccountsRepositoryError>;

    /// Applies a moderation transition as a single-row update.
    ///
    /// # Returns
    ///
    /// `AccountsRepositoryError::AccountNotFound` if the row vanished
    /// between the snapshot read and this write.
    async fn update_organization_status(
        &self,
        id: Uuid,
        update: OrganizationStatusUpdate,
    ) -> Result<(), AccountsRepositoryError>;

    /// Sets the role of an account as a single-row update.
    async fn update_account_role(&self, id: Uuid, role: Role)
    -> Result<(), AccountsRepositoryError>;

    /// Completely removes an account: profile row, authentication identity,
    /// and — for organizations — owned projects with their applications,
    /// messages, and team activities, in one composite transactional
    /// operation.
    ///
    /// Application and message rows authored by a deleted developer are
    /// retained; they are resolved separately before this call.
    ///
    /// # Returns
    ///
    /// `AccountsRepositoryError::AccountNotFound` when the account is
    /// already gone, so a repeated deletion fails cleanly instead of
    /// silently succeeding.
    async fn cascade_delete_account(&self, id: Uuid) -> Result<(), AccountsRepositoryError>;
}
