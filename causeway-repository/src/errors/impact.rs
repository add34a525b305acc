//! Error types for the deletion-impact repository.
use thiserror::Error;
use uuid::Uuid;

/// Represents errors from the impact aggregation queries.
///
/// "Target not found" is a distinct variant rather than a database error so
/// the analyzer can tell a missing (already deleted) target apart from a
/// failed query — the two lead to different operator messages.
#[derive(Debug, Error)]
pub enum ImpactRepositoryError {
    #[error("Impact query failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Target not found: {kind} {id}")]
    TargetNotFound { kind: &'static str, id: Uuid },
}
