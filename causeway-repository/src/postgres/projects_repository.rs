//! PostgreSQL implementation of the projects repository.
use async_trait::async_trait;
use causeway_shared::types::{ProjectModeration, ProjectStatus, ProjectStatusUpdate};
use sqlx::Row;
use uuid::Uuid;

use crate::errors::ProjectsRepositoryError;
use crate::interfaces::ProjectsRepository;

/// PostgreSQL implementation of [`ProjectsRepository`].
pub struct PostgresProjectsRepository {
    pool: sqlx::PgPool,
}

impl PostgresProjectsRepository {
    /// Creates a new repository over a configured connection pool.
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectsRepository for PostgresProjectsRepository {
    async fn get_project_moderation(
        &self,
        id: Uuid,
    ) -> Result<Option<ProjectModeration>, ProjectsRepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, organization_id, title, status, rejection_reason,
                   can_resubmit, approved_by, approved_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let raw_status: String = row.try_get("status")?;
        let status = ProjectStatus::from_db(&raw_status)
            .ok_or(ProjectsRepositoryError::InvalidStatus(raw_status))?;

        Ok(Some(ProjectModeration {
            id: row.try_get("id")?,
            organization_id: row.try_get("organization_id")?,
            title: row.try_get("title")?,
            status,
            rejection_reason: row.try_get("rejection_reason")?,
            can_resubmit: row.try_get("can_resubmit")?,
            approved_by: row.try_get("approved_by")?,
            approved_at: row.try_get("approved_at")?,
        }))
    }

    async fn update_project_status(
        &self,
        id: Uuid,
        update: ProjectStatusUpdate,
    ) -> Result<(), ProjectsRepositoryError> {
        // approved_by/approved_at are only Some on approval; COALESCE keeps
        // the original approval trail across later transitions.
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET status = $2,
                rejection_reason = $3,
                can_resubmit = $4,
                approved_by = COALESCE($5, approved_by),
                approved_at = COALESCE($6, approved_at)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(update.status.as_str())
        .bind(update.rejection_reason)
        .bind(update.can_resubmit)
        .bind(update.approved_by)
        .bind(update.approved_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ProjectsRepositoryError::ProjectNotFound(id));
        }
        Ok(())
    }

    async fn delete_project_cascade(&self, id: Uuid) -> Result<(), ProjectsRepositoryError> {
        let mut tx = self.pool.begin().await?;

        // Strict leaf-to-root order; later statements assume earlier ones
        // completed.
        sqlx::query("DELETE FROM team_activities WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM messages WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM applications WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // Roll back the dependent deletes: the project was already gone
            // and a repeat delete must fail, not half-apply.
            return Err(ProjectsRepositoryError::ProjectNotFound(id));
        }

        tx.commit().await?;
        tracing::debug!(project_id = %id, "project cascade delete committed");
        Ok(())
    }
}
