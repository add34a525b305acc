use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A deletion audit entry to be appended to the audit log.
///
/// One entry is written per execution attempt, before the destructive step,
/// with the freshly computed analysis as its snapshot. Entries are never
/// mutated or deleted by the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAuditEntry {
    pub deletion_kind: String,
    pub target_id: Uuid,
    pub admin_id: Uuid,
    pub reason: String,
    pub snapshot: serde_json::Value,
}
