//! Error types for the deletion audit repository.
use thiserror::Error;

/// Represents errors that can occur while appending audit entries.
#[derive(Debug, Error)]
pub enum AuditRepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
