//! In-memory repository mocks shared by the service test modules.
use async_trait::async_trait;
use causeway_repository::{
    AccountsRepository, AccountsRepositoryError, ApplicationsRepository,
    ApplicationsRepositoryError, AuditRepository, AuditRepositoryError, ImpactRepository,
    ImpactRepositoryError, ProjectsRepository, ProjectsRepositoryError, RawDeletionImpact,
};
use causeway_shared::types::{
    DeletionTarget, NewAuditEntry, OrganizationModeration, OrganizationStatusUpdate,
    ProjectModeration, ProjectStatusUpdate, Role,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Shared, ordered record of repository calls, used to assert execution
/// order across mocks.
pub(crate) type CallLog = Arc<Mutex<Vec<String>>>;

pub(crate) fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

#[derive(Default)]
pub(crate) struct MockAccounts {
    pub roles: Mutex<HashMap<Uuid, Role>>,
    pub organizations: Mutex<HashMap<Uuid, OrganizationModeration>>,
    pub status_updates: Mutex<Vec<(Uuid, OrganizationStatusUpdate)>>,
    pub role_updates: Mutex<Vec<(Uuid, Role)>>,
    pub deleted: Mutex<Vec<Uuid>>,
    pub fail_cascade: bool,
    pub log: Option<CallLog>,
}

impl MockAccounts {
    pub fn with_role(self, id: Uuid, role: Role) -> Self {
        self.roles.lock().unwrap().insert(id, role);
        self
    }

    pub fn with_organization(self, org: OrganizationModeration) -> Self {
        self.roles.lock().unwrap().insert(org.id, Role::Organization);
        self.organizations.lock().unwrap().insert(org.id, org);
        self
    }

    fn record(&self, entry: &str) {
        if let Some(log) = &self.log {
            log.lock().unwrap().push(entry.to_string());
        }
    }
}

#[async_trait]
impl AccountsRepository for MockAccounts {
    async fn get_account_role(&self, id: Uuid) -> Result<Option<Role>, AccountsRepositoryError> {
        Ok(self.roles.lock().unwrap().get(&id).copied())
    }

    async fn get_organization_moderation(
        &self,
        id: Uuid,
    ) -> Result<Option<OrganizationModeration>, AccountsRepositoryError> {
        Ok(self.organizations.lock().unwrap().get(&id).cloned())
    }

    async fn update_organization_status(
        &self,
        id: Uuid,
        update: OrganizationStatusUpdate,
    ) -> Result<(), AccountsRepositoryError> {
        if !self.organizations.lock().unwrap().contains_key(&id) {
            return Err(AccountsRepositoryError::AccountNotFound(id));
        }
        self.status_updates.lock().unwrap().push((id, update));
        Ok(())
    }

    async fn update_account_role(
        &self,
        id: Uuid,
        role: Role,
    ) -> Result<(), AccountsRepositoryError> {
        if !self.roles.lock().unwrap().contains_key(&id) {
            return Err(AccountsRepositoryError::AccountNotFound(id));
        }
        self.role_updates.lock().unwrap().push((id, role));
        Ok(())
    }

    async fn cascade_delete_account(&self, id: Uuid) -> Result<(), AccountsRepositoryError> {
        self.record("cascade_delete_account");
        if self.fail_cascade {
            return Err(AccountsRepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        if self.roles.lock().unwrap().remove(&id).is_none() {
            return Err(AccountsRepositoryError::AccountNotFound(id));
        }
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MockProjects {
    pub projects: Mutex<HashMap<Uuid, ProjectModeration>>,
    pub status_updates: Mutex<Vec<(Uuid, ProjectStatusUpdate)>>,
    pub deleted: Mutex<Vec<Uuid>>,
    pub fail_delete: bool,
    pub log: Option<CallLog>,
}

impl MockProjects {
    pub fn with_project(self, project: ProjectModeration) -> Self {
        self.projects.lock().unwrap().insert(project.id, project);
        self
    }

    fn record(&self, entry: &str) {
        if let Some(log) = &self.log {
            log.lock().unwrap().push(entry.to_string());
        }
    }
}

#[async_trait]
impl ProjectsRepository for MockProjects {
    async fn get_project_moderation(
        &self,
        id: Uuid,
    ) -> Result<Option<ProjectModeration>, ProjectsRepositoryError> {
        Ok(self.projects.lock().unwrap().get(&id).cloned())
    }

    async fn update_project_status(
        &self,
        id: Uuid,
        update: ProjectStatusUpdate,
    ) -> Result<(), ProjectsRepositoryError> {
        if !self.projects.lock().unwrap().contains_key(&id) {
            return Err(ProjectsRepositoryError::ProjectNotFound(id));
        }
        self.status_updates.lock().unwrap().push((id, update));
        Ok(())
    }

    async fn delete_project_cascade(&self, id: Uuid) -> Result<(), ProjectsRepositoryError> {
        self.record("delete_project_cascade");
        if self.fail_delete {
            return Err(ProjectsRepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        if self.projects.lock().unwrap().remove(&id).is_none() {
            return Err(ProjectsRepositoryError::ProjectNotFound(id));
        }
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MockApplications {
    pub withdrawn_for: Mutex<Vec<Uuid>>,
    pub withdraw_count: u64,
    pub fail: bool,
    pub log: Option<CallLog>,
}

#[async_trait]
impl ApplicationsRepository for MockApplications {
    async fn withdraw_active_applications(
        &self,
        developer_id: Uuid,
    ) -> Result<u64, ApplicationsRepositoryError> {
        if let Some(log) = &self.log {
            log.lock().unwrap().push("withdraw_active_applications".to_string());
        }
        if self.fail {
            return Err(ApplicationsRepositoryError::Database(
                sqlx::Error::PoolTimedOut,
            ));
        }
        self.withdrawn_for.lock().unwrap().push(developer_id);
        Ok(self.withdraw_count)
    }
}

#[derive(Default)]
pub(crate) struct MockImpact {
    pub raw: Mutex<Option<RawDeletionImpact>>,
    pub not_found: bool,
    pub fail: bool,
    pub calls: Mutex<u64>,
    pub log: Option<CallLog>,
}

impl MockImpact {
    pub fn returning(raw: RawDeletionImpact) -> Self {
        Self {
            raw: Mutex::new(Some(raw)),
            ..Default::default()
        }
    }
}

#[async_trait]
impl ImpactRepository for MockImpact {
    async fn get_deletion_impact(
        &self,
        target: DeletionTarget,
    ) -> Result<RawDeletionImpact, ImpactRepositoryError> {
        *self.calls.lock().unwrap() += 1;
        if let Some(log) = &self.log {
            log.lock().unwrap().push("get_deletion_impact".to_string());
        }
        if self.fail {
            return Err(ImpactRepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        if self.not_found {
            return Err(ImpactRepositoryError::TargetNotFound {
                kind: target.kind(),
                id: target.id(),
            });
        }
        Ok(self
            .raw
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub(crate) struct MockAudit {
    pub entries: Mutex<Vec<(Uuid, NewAuditEntry)>>,
    pub fail: bool,
    pub log: Option<CallLog>,
}

#[async_trait]
impl AuditRepository for MockAudit {
    async fn record_entry(&self, entry: NewAuditEntry) -> Result<Uuid, AuditRepositoryError> {
        if let Some(log) = &self.log {
            log.lock().unwrap().push("record_entry".to_string());
        }
        if self.fail {
            return Err(AuditRepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        let id = Uuid::new_v4();
        self.entries.lock().unwrap().push((id, entry));
        Ok(id)
    }
}
