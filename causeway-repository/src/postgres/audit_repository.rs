//! PostgreSQL implementation of the deletion audit repository.
use async_trait::async_trait;
use causeway_shared::types::NewAuditEntry;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AuditRepositoryError;
use crate::interfaces::AuditRepository;

/// PostgreSQL implementation of [`AuditRepository`].
///
/// Inserts are independent rows keyed by a fresh UUID, so concurrent admin
/// sessions never contend on the log.
pub struct PostgresAuditRepository {
    pool: sqlx::PgPool,
}

impl PostgresAuditRepository {
    /// Creates a new repository over a configured connection pool.
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditRepository for PostgresAuditRepository {
    async fn record_entry(&self, entry: NewAuditEntry) -> Result<Uuid, AuditRepositoryError> {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO deletion_audit
                (id, deletion_kind, target_id, admin_id, reason, snapshot, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id)
        .bind(&entry.deletion_kind)
        .bind(entry.target_id)
        .bind(entry.admin_id)
        .bind(&entry.reason)
        .bind(&entry.snapshot)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }
}
