//! Error types for the projects repository.
use thiserror::Error;
use uuid::Uuid;

/// Represents errors that can occur within the projects repository.
#[derive(Debug, Error)]
pub enum ProjectsRepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Project not found: {0}")]
    ProjectNotFound(Uuid),

    #[error("Invalid project status value: {0}")]
    InvalidStatus(String),
}
