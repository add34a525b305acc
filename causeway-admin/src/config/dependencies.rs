use causeway_moderation::{
    AdminGate, DeletionAnalyzer, DeletionExecutor, DeletionWizard, GateConfig, ModerationService,
    TracingNotifier,
};
use causeway_repository::{
    AccountsRepository, ApplicationsRepository, AuditRepository, ImpactRepository,
    PostgresAccountsRepository, PostgresApplicationsRepository, PostgresAuditRepository,
    PostgresImpactRepository, PostgresProjectsRepository, ProjectsRepository,
};
use causeway_shared::types::DeletionTarget;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::AdminConfig;
use crate::errors::AdminError;

/// `Dependencies` holds the wired admin lifecycle services.
///
/// It is the in-process embedding point: the admin UI builds one of these
/// at startup and drives the services directly. Construction wires the
/// connection pool into the PostgreSQL repositories and the repositories
/// into the gate, analyzer, executor, and moderation service.
pub struct Dependencies {
    pub moderation: ModerationService,
    pub analyzer: Arc<DeletionAnalyzer>,
    pub executor: Arc<DeletionExecutor>,
}

impl Dependencies {
    /// Creates the full dependency graph from the environment.
    ///
    /// Loads a `.env` file if one is present, then reads configuration and
    /// connects the pool.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or an
    /// `AdminError` if configuration or the database connection fails.
    pub async fn new() -> Result<Self, AdminError> {
        dotenv::dotenv().ok();
        let config = AdminConfig::from_env()?;
        let pool = sqlx::PgPool::connect(&config.database_url).await?;
        Ok(Self::from_pool(pool, config.super_admin_id))
    }

    /// Wires the services over an existing pool. Useful for embedding and
    /// for integration tests that manage their own database.
    pub fn from_pool(pool: sqlx::PgPool, super_admin_id: Uuid) -> Self {
        let accounts: Arc<dyn AccountsRepository> =
            Arc::new(PostgresAccountsRepository::new(pool.clone()));
        let projects: Arc<dyn ProjectsRepository> =
            Arc::new(PostgresProjectsRepository::new(pool.clone()));
        let applications: Arc<dyn ApplicationsRepository> =
            Arc::new(PostgresApplicationsRepository::new(pool.clone()));
        let impact: Arc<dyn ImpactRepository> =
            Arc::new(PostgresImpactRepository::new(pool.clone()));
        let audit: Arc<dyn AuditRepository> = Arc::new(PostgresAuditRepository::new(pool));

        let gate = Arc::new(AdminGate::new(
            Arc::clone(&accounts),
            GateConfig { super_admin_id },
        ));
        let analyzer = Arc::new(DeletionAnalyzer::new(Arc::clone(&impact)));
        let executor = Arc::new(DeletionExecutor::new(
            Arc::clone(&gate),
            Arc::clone(&analyzer),
            audit,
            Arc::clone(&accounts),
            Arc::clone(&projects),
            applications,
        ));
        let moderation =
            ModerationService::new(gate, accounts, projects, Arc::new(TracingNotifier));

        Self {
            moderation,
            analyzer,
            executor,
        }
    }

    /// Starts a deletion confirmation wizard for one target.
    pub fn deletion_wizard(&self, target: DeletionTarget, acting_admin_id: Uuid) -> DeletionWizard {
        DeletionWizard::new(
            Arc::clone(&self.analyzer),
            Arc::clone(&self.executor),
            target,
            acting_admin_id,
        )
    }
}
