use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A candidate for irreversible deletion.
///
/// The variant determines both how impact is analyzed and which cascade the
/// executor runs; the `kind` string is what lands in audit rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DeletionTarget {
    Organization(Uuid),
    Project(Uuid),
    Developer(Uuid),
}

impl DeletionTarget {
    pub fn id(&self) -> Uuid {
        match self {
            DeletionTarget::Organization(id)
            | DeletionTarget::Project(id)
            | DeletionTarget::Developer(id) => *id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DeletionTarget::Organization(_) => "organization",
            DeletionTarget::Project(_) => "project",
            DeletionTarget::Developer(_) => "developer",
        }
    }
}

impl fmt::Display for DeletionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}
