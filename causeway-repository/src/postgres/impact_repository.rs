//! PostgreSQL implementation of the deletion-impact aggregation.
//!
//! All queries here are read-only. Each target type resolves its display
//! metadata first — a missing row is the `TargetNotFound` sentinel — and
//! then counts dependents by category with scalar subqueries in a single
//! round trip.
use async_trait::async_trait;
use causeway_shared::types::DeletionTarget;
use sqlx::Row;
use uuid::Uuid;

use crate::errors::ImpactRepositoryError;
use crate::interfaces::ImpactRepository;
use crate::types::RawDeletionImpact;

/// PostgreSQL implementation of [`ImpactRepository`].
pub struct PostgresImpactRepository {
    pool: sqlx::PgPool,
}

impl PostgresImpactRepository {
    /// Creates a new repository over a configured connection pool.
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    async fn organization_impact(
        &self,
        id: Uuid,
    ) -> Result<RawDeletionImpact, ImpactRepositoryError> {
        let target = sqlx::query(
            "SELECT name, email, created_at, organization_verified_at \
             FROM accounts WHERE id = $1 AND role = 'organization'",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ImpactRepositoryError::TargetNotFound {
            kind: "organization",
            id,
        })?;

        let counts = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM projects WHERE organization_id = $1) AS projects,
                (SELECT COUNT(*) FROM projects WHERE organization_id = $1
                    AND status IN ('open', 'in_progress')) AS active_projects,
                (SELECT COUNT(*) FROM applications a
                    JOIN projects p ON a.project_id = p.id
                    WHERE p.organization_id = $1 AND a.status = 'pending') AS pending_applications,
                (SELECT COUNT(*) FROM messages m
                    JOIN projects p ON m.project_id = p.id
                    WHERE p.organization_id = $1) AS messages
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(RawDeletionImpact {
            target_name: target.try_get("name")?,
            target_email: target.try_get("email")?,
            member_since: target.try_get("created_at")?,
            verified_at: target.try_get("organization_verified_at")?,
            projects: counts.try_get::<i64, _>("projects")? as u64,
            active_projects: counts.try_get::<i64, _>("active_projects")? as u64,
            pending_applications: counts.try_get::<i64, _>("pending_applications")? as u64,
            messages: counts.try_get::<i64, _>("messages")? as u64,
            ..Default::default()
        })
    }

    async fn project_impact(&self, id: Uuid) -> Result<RawDeletionImpact, ImpactRepositoryError> {
        let target = sqlx::query("SELECT title, created_at FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ImpactRepositoryError::TargetNotFound { kind: "project", id })?;

        let counts = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM applications WHERE project_id = $1) AS applications,
                (SELECT COUNT(*) FROM applications WHERE project_id = $1
                    AND status = 'accepted') AS active_applications,
                (SELECT COUNT(*) FROM messages WHERE project_id = $1) AS messages,
                (SELECT COUNT(*) FROM team_activities WHERE project_id = $1) AS team_activities
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(RawDeletionImpact {
            target_name: target.try_get("title")?,
            member_since: target.try_get("created_at")?,
            applications: counts.try_get::<i64, _>("applications")? as u64,
            active_applications: counts.try_get::<i64, _>("active_applications")? as u64,
            messages: counts.try_get::<i64, _>("messages")? as u64,
            team_activities: counts.try_get::<i64, _>("team_activities")? as u64,
            ..Default::default()
        })
    }

    async fn developer_impact(&self, id: Uuid) -> Result<RawDeletionImpact, ImpactRepositoryError> {
        let target = sqlx::query(
            "SELECT name, email, created_at FROM accounts WHERE id = $1 AND role = 'developer'",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ImpactRepositoryError::TargetNotFound {
            kind: "developer",
            id,
        })?;

        let counts = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM applications WHERE developer_id = $1) AS applications,
                (SELECT COUNT(*) FROM applications WHERE developer_id = $1
                    AND status = 'accepted') AS active_applications,
                (SELECT COUNT(*) FROM messages WHERE sender_id = $1) AS messages
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        // Projects in which this developer currently holds an accepted role;
        // these need reassignment before the deletion is safe.
        let titles: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT p.title FROM projects p
            JOIN applications a ON a.project_id = p.id
            WHERE a.developer_id = $1 AND a.status = 'accepted'
            ORDER BY p.title
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(RawDeletionImpact {
            target_name: target.try_get("name")?,
            target_email: target.try_get("email")?,
            member_since: target.try_get("created_at")?,
            applications: counts.try_get::<i64, _>("applications")? as u64,
            active_applications: counts.try_get::<i64, _>("active_applications")? as u64,
            messages: counts.try_get::<i64, _>("messages")? as u64,
            active_project_titles: titles,
            ..Default::default()
        })
    }
}

#[async_trait]
impl ImpactRepository for PostgresImpactRepository {
    async fn get_deletion_impact(
        &self,
        target: DeletionTarget,
    ) -> Result<RawDeletionImpact, ImpactRepositoryError> {
        match target {
            DeletionTarget::Organization(id) => self.organization_impact(id).await,
            DeletionTarget::Project(id) => self.project_impact(id).await,
            DeletionTarget::Developer(id) => self.developer_impact(id).await,
        }
    }
}
