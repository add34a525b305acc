use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role on the platform.
///
/// Organizations post projects, developers apply to them, admins moderate
/// both. The role column drives which moderation actions are legal, so the
/// string codec here is the single place the stored values are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Developer,
    Organization,
    Admin,
}

impl Role {
    /// The stored string value for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "developer",
            Role::Organization => "organization",
            Role::Admin => "admin",
        }
    }

    /// Parses a stored role value. Returns `None` for unknown values so the
    /// data-access layer can surface a typed error instead of guessing.
    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "developer" => Some(Role::Developer),
            "organization" => Some(Role::Organization),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_stored_values() {
        for role in [Role::Developer, Role::Organization, Role::Admin] {
            assert_eq!(Role::from_db(role.as_str()), Some(role));
        }
    }

    #[test]
    fn rejects_unknown_values() {
        assert_eq!(Role::from_db("superuser"), None);
        assert_eq!(Role::from_db(""), None);
    }
}
