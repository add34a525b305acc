//! Error types for the safe deletion executor.
use causeway_repository::AuditRepositoryError;
use causeway_shared::types::DeletionResult;
use thiserror::Error;
use uuid::Uuid;

use crate::errors::{AnalysisError, AuthorizationError};

/// Represents a failed deletion execution.
///
/// Every variant folds into a structured [`DeletionResult`] at the service
/// boundary via [`ExecutionError::into_result`]; nothing propagates to the
/// caller as an unhandled error. `Cascade` keeps the audit id because the
/// audit entry was already written and remains as evidence of the attempt.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("a deletion reason is required")]
    BlankReason,

    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("failed to serialize the analysis snapshot: {0}")]
    Snapshot(#[source] serde_json::Error),

    #[error("failed to write the audit entry: {0}")]
    Audit(#[source] AuditRepositoryError),

    #[error("deletion failed after audit entry {audit_id} was written")]
    Cascade { audit_id: Uuid, errors: Vec<String> },
}

impl ExecutionError {
    /// Converts the failure into the operator-facing result shape.
    pub fn into_result(self) -> DeletionResult {
        match self {
            ExecutionError::BlankReason => DeletionResult::failed(
                "A reason is required before anything can be deleted.",
                None,
                Vec::new(),
            ),
            ExecutionError::Authorization(err) => DeletionResult::failed(
                "You are not authorized to perform this deletion.",
                None,
                vec![err.to_string()],
            ),
            ExecutionError::Analysis(AnalysisError::TargetNotFound { kind, id }) => {
                DeletionResult::failed(
                    format!("The {kind} {id} was not found; it may already have been deleted."),
                    None,
                    Vec::new(),
                )
            }
            ExecutionError::Analysis(err) => DeletionResult::failed(
                "Could not analyze the deletion impact; nothing was deleted.",
                None,
                vec![err.to_string()],
            ),
            ExecutionError::Snapshot(err) => DeletionResult::failed(
                "Could not record the deletion audit entry; nothing was deleted.",
                None,
                vec![err.to_string()],
            ),
            ExecutionError::Audit(err) => DeletionResult::failed(
                "Could not record the deletion audit entry; nothing was deleted.",
                None,
                vec![err.to_string()],
            ),
            ExecutionError::Cascade { audit_id, errors } => DeletionResult::failed(
                "Deletion failed partway; manual verification is required.",
                Some(audit_id),
                errors,
            ),
        }
    }
}
