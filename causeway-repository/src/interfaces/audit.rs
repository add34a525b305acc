//! This module defines the `AuditRepository` trait for the append-only
//! deletion audit log.
use crate::errors::AuditRepositoryError;
use causeway_shared::types::NewAuditEntry;
use uuid::Uuid;

/// A trait that defines the interface for the deletion audit log.
///
/// The log is append-only and multi-writer safe: every call inserts a fresh
/// independent row. The application never updates or deletes entries.
#[async_trait::async_trait]
pub trait AuditRepository: Send + Sync {
    /// Appends one audit entry and returns its id.
    async fn record_entry(&self, entry: NewAuditEntry) -> Result<Uuid, AuditRepositoryError>;
}
