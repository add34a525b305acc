//! Error types for the applications repository.
use thiserror::Error;

/// Represents errors that can occur within the applications repository.
#[derive(Debug, Error)]
pub enum ApplicationsRepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
