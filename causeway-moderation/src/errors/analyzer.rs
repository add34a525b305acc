//! Error types for the deletion impact analyzer.
use causeway_repository::ImpactRepositoryError;
use thiserror::Error;
use uuid::Uuid;

/// Represents a failed impact analysis.
///
/// Both variants block the deletion: an admin is never allowed to delete
/// blind. `TargetNotFound` additionally tells the operator the target is
/// already gone.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("target not found: {kind} {id}")]
    TargetNotFound { kind: &'static str, id: Uuid },

    #[error("could not analyze deletion impact: {0}")]
    Query(#[source] ImpactRepositoryError),
}
