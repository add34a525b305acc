//! The moderation service.
//!
//! Wraps the pure status machines with persistence and fire-and-forget
//! notification. Every operation follows the same shape: authorization
//! gate, fresh snapshot read, pure transition, single-row update, then a
//! spawned notification. Writes are not serialized across admin sessions —
//! last write wins — but each write is a single row so no torn state is
//! possible.
use async_trait::async_trait;
use causeway_repository::{AccountsRepository, ProjectsRepository};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::authorize::AdminGate;
use crate::errors::{ModerationError, TransitionError};
use crate::status::{self, OrganizationAction, ProjectAction};

/// A moderation outcome worth telling the affected account about.
#[derive(Debug, Clone, PartialEq)]
pub enum ModerationEvent {
    OrganizationApproved { organization_id: Uuid },
    OrganizationRejected { organization_id: Uuid, reason: String },
    OrganizationBlocked { organization_id: Uuid, reason: String },
    OrganizationUnblocked { organization_id: Uuid },
    OrganizationResubmitted { organization_id: Uuid },
    ProjectApproved { project_id: Uuid },
    ProjectRejected { project_id: Uuid, reason: String },
    ProjectBlocked { project_id: Uuid, reason: String },
    ProjectResubmitted { project_id: Uuid },
    RolePromoted { account_id: Uuid },
    RoleDemoted { account_id: Uuid },
}

/// Delivery seam for moderation notifications.
///
/// Notification is an external collaborator and strictly fire-and-forget:
/// a delivery failure never fails the moderation write it follows.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, event: ModerationEvent);
}

/// Default notifier that records the event in the structured log.
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, event: ModerationEvent) {
        info!(?event, "moderation notification");
    }
}

/// Orchestrates approve/reject/block/resubmit transitions and role changes.
pub struct ModerationService {
    gate: Arc<AdminGate>,
    accounts: Arc<dyn AccountsRepository>,
    projects: Arc<dyn ProjectsRepository>,
    notifier: Arc<dyn Notifier>,
}

impl ModerationService {
    pub fn new(
        gate: Arc<AdminGate>,
        accounts: Arc<dyn AccountsRepository>,
        projects: Arc<dyn ProjectsRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            gate,
            accounts,
            projects,
            notifier,
        }
    }

    fn notify(&self, event: ModerationEvent) {
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            notifier.notify(event).await;
        });
    }

    async fn apply_organization_action(
        &self,
        organization_id: Uuid,
        action: OrganizationAction,
    ) -> Result<(), ModerationError> {
        let current = self
            .accounts
            .get_organization_moderation(organization_id)
            .await?
            .ok_or(ModerationError::OrganizationNotFound(organization_id))?;

        let update = status::organization_transition(&current, &action, Utc::now())?;
        self.accounts
            .update_organization_status(organization_id, update)
            .await?;
        Ok(())
    }

    async fn apply_project_action(
        &self,
        project_id: Uuid,
        action: ProjectAction,
    ) -> Result<(), ModerationError> {
        let current = self
            .projects
            .get_project_moderation(project_id)
            .await?
            .ok_or(ModerationError::ProjectNotFound(project_id))?;

        let update = status::project_transition(&current, &action, Utc::now())?;
        self.projects.update_project_status(project_id, update).await?;
        Ok(())
    }

    /// Approves a pending organization, stamping its verification time.
    pub async fn approve_organization(
        &self,
        organization_id: Uuid,
        acting_admin_id: Uuid,
    ) -> Result<(), ModerationError> {
        self.gate.ensure_admin(acting_admin_id).await?;
        self.apply_organization_action(organization_id, OrganizationAction::Approve)
            .await?;
        self.notify(ModerationEvent::OrganizationApproved { organization_id });
        Ok(())
    }

    /// Rejects a pending organization with a reason; `can_resubmit` decides
    /// whether the organization may return for review later.
    pub async fn reject_organization(
        &self,
        organization_id: Uuid,
        acting_admin_id: Uuid,
        reason: &str,
        can_resubmit: bool,
    ) -> Result<(), ModerationError> {
        self.gate.ensure_admin(acting_admin_id).await?;
        self.apply_organization_action(
            organization_id,
            OrganizationAction::Reject {
                reason: reason.to_string(),
                can_resubmit,
            },
        )
        .await?;
        self.notify(ModerationEvent::OrganizationRejected {
            organization_id,
            reason: reason.trim().to_string(),
        });
        Ok(())
    }

    /// Blocks an approved or rejected organization.
    pub async fn block_organization(
        &self,
        organization_id: Uuid,
        acting_admin_id: Uuid,
        reason: &str,
    ) -> Result<(), ModerationError> {
        self.gate.ensure_admin(acting_admin_id).await?;
        self.apply_organization_action(
            organization_id,
            OrganizationAction::Block {
                reason: reason.to_string(),
            },
        )
        .await?;
        self.notify(ModerationEvent::OrganizationBlocked {
            organization_id,
            reason: reason.trim().to_string(),
        });
        Ok(())
    }

    /// Lifts a block, returning the organization to approved.
    pub async fn unblock_organization(
        &self,
        organization_id: Uuid,
        acting_admin_id: Uuid,
    ) -> Result<(), ModerationError> {
        self.gate.ensure_admin(acting_admin_id).await?;
        self.apply_organization_action(organization_id, OrganizationAction::Unblock)
            .await?;
        self.notify(ModerationEvent::OrganizationUnblocked { organization_id });
        Ok(())
    }

    /// Returns a rejected organization to pending review. Initiated by the
    /// organization itself, so there is no admin gate; the `can_resubmit`
    /// flag set at rejection time is the authorization.
    pub async fn resubmit_organization(
        &self,
        organization_id: Uuid,
    ) -> Result<(), ModerationError> {
        self.apply_organization_action(organization_id, OrganizationAction::Resubmit)
            .await?;
        self.notify(ModerationEvent::OrganizationResubmitted { organization_id });
        Ok(())
    }

    /// Approves a pending project, opening it for applications.
    pub async fn approve_project(
        &self,
        project_id: Uuid,
        acting_admin_id: Uuid,
    ) -> Result<(), ModerationError> {
        self.gate.ensure_admin(acting_admin_id).await?;
        self.apply_project_action(
            project_id,
            ProjectAction::Approve {
                approved_by: acting_admin_id,
            },
        )
        .await?;
        self.notify(ModerationEvent::ProjectApproved { project_id });
        Ok(())
    }

    /// Rejects a pending project with a reason.
    pub async fn reject_project(
        &self,
        project_id: Uuid,
        acting_admin_id: Uuid,
        reason: &str,
        can_resubmit: bool,
    ) -> Result<(), ModerationError> {
        self.gate.ensure_admin(acting_admin_id).await?;
        self.apply_project_action(
            project_id,
            ProjectAction::Reject {
                reason: reason.to_string(),
                can_resubmit,
            },
        )
        .await?;
        self.notify(ModerationEvent::ProjectRejected {
            project_id,
            reason: reason.trim().to_string(),
        });
        Ok(())
    }

    /// Takes an open or in-progress project out of circulation.
    pub async fn block_project(
        &self,
        project_id: Uuid,
        acting_admin_id: Uuid,
        reason: &str,
    ) -> Result<(), ModerationError> {
        self.gate.ensure_admin(acting_admin_id).await?;
        self.apply_project_action(
            project_id,
            ProjectAction::Block {
                reason: reason.to_string(),
            },
        )
        .await?;
        self.notify(ModerationEvent::ProjectBlocked {
            project_id,
            reason: reason.trim().to_string(),
        });
        Ok(())
    }

    /// Returns a rejected project to pending review; may accompany an edit
    /// of the project's content fields. Organization-initiated, no gate.
    pub async fn resubmit_project(&self, project_id: Uuid) -> Result<(), ModerationError> {
        self.apply_project_action(project_id, ProjectAction::Resubmit)
            .await?;
        self.notify(ModerationEvent::ProjectResubmitted { project_id });
        Ok(())
    }

    /// Grants the admin role to a developer account. Restricted to the
    /// designated super admin; the target's role is re-validated against
    /// the store immediately before the write.
    pub async fn promote_to_admin(
        &self,
        target_id: Uuid,
        acting_admin_id: Uuid,
    ) -> Result<(), ModerationError> {
        self.gate.ensure_super_admin(acting_admin_id).await?;
        let current = self
            .accounts
            .get_account_role(target_id)
            .await?
            .ok_or(ModerationError::AccountNotFound(target_id))?;
        let new_role = status::promote_role(target_id, current)?;
        self.accounts.update_account_role(target_id, new_role).await?;
        self.notify(ModerationEvent::RolePromoted { account_id: target_id });
        Ok(())
    }

    /// Revokes the admin role, returning the account to developer.
    /// Self-demotion is forbidden so the platform can never lose its last
    /// administrator to a misclick.
    pub async fn demote_to_developer(
        &self,
        target_id: Uuid,
        acting_admin_id: Uuid,
    ) -> Result<(), ModerationError> {
        if target_id == acting_admin_id {
            return Err(TransitionError::SelfDemotion.into());
        }
        self.gate.ensure_super_admin(acting_admin_id).await?;
        let current = self
            .accounts
            .get_account_role(target_id)
            .await?
            .ok_or(ModerationError::AccountNotFound(target_id))?;
        let new_role = status::demote_role(target_id, current)?;
        self.accounts.update_account_role(target_id, new_role).await?;
        self.notify(ModerationEvent::RoleDemoted { account_id: target_id });
        Ok(())
    }
}
