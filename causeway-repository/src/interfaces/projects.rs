//! This module defines the `ProjectsRepository` trait: project moderation
//! snapshots, status updates, and the ordered project cascade delete.
use crate::errors::ProjectsRepositoryError;
use causeway_shared::types::{ProjectModeration, ProjectStatusUpdate};
use uuid::Uuid;

/// A trait that defines the interface for interacting with project rows.
#[async_trait::async_trait]
pub trait ProjectsRepository: Send + Sync {
    /// Fetches the moderation snapshot of a project.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no project with this id exists.
    async fn get_project_moderation(
        &self,
        id: Uuid,
    ) -> Result<Option<ProjectModeration>, ProjectsRepositoryError>;

    /// Applies a moderation transition as a single-row update.
    async fn update_project_status(
        &self,
        id: Uuid,
        update: ProjectStatusUpdate,
    ) -> Result<(), ProjectsRepositoryError>;

    /// Deletes a project and everything it owns in one transaction, strictly
    /// leaf-to-root: team activities, then messages, then applications, then
    /// the project row itself. The order satisfies foreign-key constraints
    /// and must not be parallelized.
    ///
    /// # Returns
    ///
    /// `ProjectsRepositoryError::ProjectNotFound` when the project row is
    /// already gone; the transaction rolls back and no dependent rows are
    /// touched.
    async fn delete_project_cascade(&self, id: Uuid) -> Result<(), ProjectsRepositoryError>;
}
