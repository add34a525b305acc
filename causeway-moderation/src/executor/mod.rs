//! The safe deletion executor.
//!
//! Runs one deletion end to end: reason check, authorization, a fresh
//! impact analysis (a client-supplied analysis is never accepted), the
//! audit entry, and finally the destructive cascade. Steps run strictly in
//! that order with no parallelism — later steps assume earlier ones
//! completed. Every failure is folded into a structured [`DeletionResult`]
//! at the boundary.
use causeway_repository::{AccountsRepository, ApplicationsRepository, AuditRepository,
    ProjectsRepository};
use causeway_shared::types::{DeletionResult, DeletionTarget, NewAuditEntry};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analyzer::DeletionAnalyzer;
use crate::authorize::AdminGate;
use crate::errors::ExecutionError;

/// Executes confirmed deletions in dependency order with an audit trail.
pub struct DeletionExecutor {
    gate: Arc<AdminGate>,
    analyzer: Arc<DeletionAnalyzer>,
    audit: Arc<dyn AuditRepository>,
    accounts: Arc<dyn AccountsRepository>,
    projects: Arc<dyn ProjectsRepository>,
    applications: Arc<dyn ApplicationsRepository>,
}

impl DeletionExecutor {
    pub fn new(
        gate: Arc<AdminGate>,
        analyzer: Arc<DeletionAnalyzer>,
        audit: Arc<dyn AuditRepository>,
        accounts: Arc<dyn AccountsRepository>,
        projects: Arc<dyn ProjectsRepository>,
        applications: Arc<dyn ApplicationsRepository>,
    ) -> Self {
        Self {
            gate,
            analyzer,
            audit,
            accounts,
            projects,
            applications,
        }
    }

    /// Deletes `target` on behalf of `acting_admin_id` for the given reason.
    ///
    /// The reason is mandatory and persisted with the audit entry; a blank
    /// reason is rejected before any store access. Deleting an id that is
    /// already gone fails with a not-found message, never a silent success.
    /// A failure after the audit entry was written reports the entry's id —
    /// the entry remains as evidence of the attempt.
    pub async fn execute(
        &self,
        target: DeletionTarget,
        acting_admin_id: Uuid,
        reason: &str,
    ) -> DeletionResult {
        match self.try_execute(target, acting_admin_id, reason).await {
            Ok(audit_id) => {
                info!(%target, admin_id = %acting_admin_id, %audit_id, "deletion completed");
                DeletionResult::ok(
                    format!("The {} has been permanently deleted.", target.kind()),
                    audit_id,
                )
            }
            Err(err) => {
                warn!(%target, admin_id = %acting_admin_id, error = %err, "deletion failed");
                err.into_result()
            }
        }
    }

    async fn try_execute(
        &self,
        target: DeletionTarget,
        acting_admin_id: Uuid,
        reason: &str,
    ) -> Result<Uuid, ExecutionError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ExecutionError::BlankReason);
        }

        self.gate.ensure_admin(acting_admin_id).await?;

        // Fresh snapshot: the analysis a client confirmed against may be
        // stale by now, and the audit record must reflect reality at
        // execution time.
        let analysis = self.analyzer.analyze(target).await?;
        let snapshot = serde_json::to_value(&analysis).map_err(ExecutionError::Snapshot)?;

        let audit_id = self
            .audit
            .record_entry(NewAuditEntry {
                deletion_kind: target.kind().to_string(),
                target_id: target.id(),
                admin_id: acting_admin_id,
                reason: reason.to_string(),
                snapshot,
            })
            .await
            .map_err(ExecutionError::Audit)?;

        self.run_cascade(target)
            .await
            .map_err(|errors| ExecutionError::Cascade { audit_id, errors })?;

        Ok(audit_id)
    }

    async fn run_cascade(&self, target: DeletionTarget) -> Result<(), Vec<String>> {
        match target {
            DeletionTarget::Project(id) => self
                .projects
                .delete_project_cascade(id)
                .await
                .map_err(|err| vec![err.to_string()]),
            DeletionTarget::Developer(id) => {
                // Non-terminal applications become withdrawn history before
                // the identity disappears.
                let withdrawn = self
                    .applications
                    .withdraw_active_applications(id)
                    .await
                    .map_err(|err| vec![err.to_string()])?;
                if withdrawn > 0 {
                    info!(developer_id = %id, withdrawn, "applications withdrawn before account removal");
                }
                self.accounts
                    .cascade_delete_account(id)
                    .await
                    .map_err(|err| vec![err.to_string()])
            }
            DeletionTarget::Organization(id) => self
                .accounts
                .cascade_delete_account(id)
                .await
                .map_err(|err| vec![err.to_string()]),
        }
    }
}
