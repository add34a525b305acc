//! Error types for the accounts repository.
//! Defines specific errors that can occur during database operations on
//! account rows.
use thiserror::Error;
use uuid::Uuid;

/// Represents errors that can occur within the accounts repository.
#[derive(Debug, Error)]
pub enum AccountsRepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Account not found: {0}")]
    AccountNotFound(Uuid),

    #[error("Invalid role value: {0}")]
    InvalidRole(String),

    #[error("Invalid organization status value: {0}")]
    InvalidStatus(String),
}
