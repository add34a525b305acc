//! Error types for the wiring crate.
use thiserror::Error;

/// Represents errors raised while configuring and wiring the services.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("{0} must be set")]
    MissingEnv(&'static str),

    #[error("SUPER_ADMIN_ID is not a valid UUID: {0}")]
    InvalidSuperAdminId(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
