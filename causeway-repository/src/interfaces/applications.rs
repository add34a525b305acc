//! This module defines the `ApplicationsRepository` trait.
use crate::errors::ApplicationsRepositoryError;
use uuid::Uuid;

/// A trait that defines the interface for interacting with application rows.
#[async_trait::async_trait]
pub trait ApplicationsRepository: Send + Sync {
    /// Marks every non-terminal application of a developer as withdrawn, in
    /// one statement. Rows are never deleted — project history outlives the
    /// account.
    ///
    /// # Returns
    ///
    /// The number of applications that were withdrawn.
    async fn withdraw_active_applications(
        &self,
        developer_id: Uuid,
    ) -> Result<u64, ApplicationsRepositoryError>;
}
