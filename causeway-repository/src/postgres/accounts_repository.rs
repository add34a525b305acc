//! PostgreSQL implementation of the accounts repository.
//!
//! Provides role lookups, organization moderation reads/writes, and the
//! composite account removal used by the deletion executor. All writes go
//! through `sqlx::PgPool`; the cascade runs inside a single transaction so
//! a failure partway leaves no half-removed account.
use async_trait::async_trait;
use causeway_shared::types::{OrganizationModeration, OrganizationStatus, OrganizationStatusUpdate, Role};
use sqlx::Row;
use uuid::Uuid;

use crate::errors::AccountsRepositoryError;
use crate::interfaces::AccountsRepository;

/// PostgreSQL implementation of [`AccountsRepository`].
pub struct PostgresAccountsRepository {
    pool: sqlx::PgPool,
}

impl PostgresAccountsRepository {
    /// Creates a new repository over a configured connection pool.
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

fn parse_status(raw: Option<&str>) -> Result<OrganizationStatus, AccountsRepositoryError> {
    OrganizationStatus::from_db(raw)
        .ok_or_else(|| AccountsRepositoryError::InvalidStatus(raw.unwrap_or_default().to_string()))
}

#[async_trait]
impl AccountsRepository for PostgresAccountsRepository {
    async fn get_account_role(&self, id: Uuid) -> Result<Option<Role>, AccountsRepositoryError> {
        let row = sqlx::query("SELECT role FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            None => Ok(None),
            Some(row) => {
                let raw: String = row.try_get("role")?;
                Role::from_db(&raw)
                    .map(Some)
                    .ok_or(AccountsRepositoryError::InvalidRole(raw))
            }
        }
    }

    async fn get_organization_moderation(
        &self,
        id: Uuid,
    ) -> Result<Option<OrganizationModeration>, AccountsRepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, organization_status, organization_rejection_reason,
                   can_resubmit, blocked, blocked_reason, organization_verified_at
            FROM accounts
            WHERE id = $1 AND role = 'organization'
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let raw_status: Option<String> = row.try_get("organization_status")?;
        Ok(Some(OrganizationModeration {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            status: parse_status(raw_status.as_deref())?,
            rejection_reason: row.try_get("organization_rejection_reason")?,
            can_resubmit: row.try_get("can_resubmit")?,
            blocked: row.try_get("blocked")?,
            blocked_reason: row.try_get("blocked_reason")?,
            verified_at: row.try_get("organization_verified_at")?,
        }))
    }

    async fn update_organization_status(
        &self,
        id: Uuid,
        update: OrganizationStatusUpdate,
    ) -> Result<(), AccountsRepositoryError> {
        // verified_at is only Some on approval; COALESCE preserves the
        // existing timestamp for every other transition.
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET organization_status = $2,
                organization_rejection_reason = $3,
                can_resubmit = $4,
                blocked = $5,
                blocked_reason = $6,
                organization_verified_at = COALESCE($7, organization_verified_at)
            WHERE id = $1 AND role = 'organization'
            "#,
        )
        .bind(id)
        .bind(update.status.as_str())
        .bind(update.rejection_reason)
        .bind(update.can_resubmit)
        .bind(update.blocked)
        .bind(update.blocked_reason)
        .bind(update.verified_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AccountsRepositoryError::AccountNotFound(id));
        }
        Ok(())
    }

    async fn update_account_role(
        &self,
        id: Uuid,
        role: Role,
    ) -> Result<(), AccountsRepositoryError> {
        let result = sqlx::query("UPDATE accounts SET role = $2 WHERE id = $1")
            .bind(id)
            .bind(role.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AccountsRepositoryError::AccountNotFound(id));
        }
        Ok(())
    }

    async fn cascade_delete_account(&self, id: Uuid) -> Result<(), AccountsRepositoryError> {
        let mut tx = self.pool.begin().await?;

        // Leaf-to-root over everything the account owns. For developer
        // accounts the project-scoped statements match nothing; their
        // application and message history is intentionally left in place.
        sqlx::query(
            "DELETE FROM team_activities WHERE project_id IN \
             (SELECT id FROM projects WHERE organization_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "DELETE FROM messages WHERE project_id IN \
             (SELECT id FROM projects WHERE organization_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "DELETE FROM applications WHERE project_id IN \
             (SELECT id FROM projects WHERE organization_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM projects WHERE organization_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM auth_identities WHERE account_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls everything back.
            return Err(AccountsRepositoryError::AccountNotFound(id));
        }

        tx.commit().await?;
        tracing::debug!(account_id = %id, "account cascade delete committed");
        Ok(())
    }
}
