//! This module defines the `ImpactRepository` trait, the read-only
//! aggregation behind deletion impact analysis.
use crate::errors::ImpactRepositoryError;
use crate::types::RawDeletionImpact;
use causeway_shared::types::DeletionTarget;

/// A trait that defines the server-side dependency aggregation for a
/// deletion candidate.
///
/// Implementations are read-only and side-effect-free. A missing target is
/// reported as `ImpactRepositoryError::TargetNotFound`, distinct from a
/// failed query, so the analyzer can tell "already deleted" from "cannot
/// analyze".
#[async_trait::async_trait]
pub trait ImpactRepository: Send + Sync {
    /// Counts the dependents of `target` by category and returns them with
    /// the target's display metadata.
    async fn get_deletion_impact(
        &self,
        target: DeletionTarget,
    ) -> Result<RawDeletionImpact, ImpactRepositoryError>;
}
