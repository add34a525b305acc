use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured outcome of a deletion execution.
///
/// Every executor failure is folded into this shape at the service boundary;
/// nothing propagates to the caller as an unhandled error. `audit_id` is
/// present whenever the audit entry was written, including attempts that
/// failed afterwards — the entry is evidence of the attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletionResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl DeletionResult {
    /// A successful deletion with its audit trail id.
    pub fn ok(message: impl Into<String>, audit_id: Uuid) -> Self {
        Self {
            success: true,
            message: message.into(),
            audit_id: Some(audit_id),
            errors: Vec::new(),
        }
    }

    /// A failed deletion with the itemized underlying errors.
    pub fn failed(message: impl Into<String>, audit_id: Option<Uuid>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            audit_id,
            errors,
        }
    }
}
