//! PostgreSQL implementation of the applications repository.
use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::ApplicationsRepositoryError;
use crate::interfaces::ApplicationsRepository;

/// PostgreSQL implementation of [`ApplicationsRepository`].
pub struct PostgresApplicationsRepository {
    pool: sqlx::PgPool,
}

impl PostgresApplicationsRepository {
    /// Creates a new repository over a configured connection pool.
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationsRepository for PostgresApplicationsRepository {
    async fn withdraw_active_applications(
        &self,
        developer_id: Uuid,
    ) -> Result<u64, ApplicationsRepositoryError> {
        let result = sqlx::query(
            "UPDATE applications SET status = 'withdrawn' \
             WHERE developer_id = $1 AND status IN ('pending', 'accepted')",
        )
        .bind(developer_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
