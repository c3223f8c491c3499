//! Project roles and the privileged subset.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of project roles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Created the project; full control
    Owner,

    /// Leads day-to-day work; may mutate project-scoped entities
    Leader,

    /// Manages schedule and membership; may mutate project-scoped entities
    Manager,

    /// Plain member; read-only access
    Member,
}

/// The roles permitted to mutate project-scoped entities.
pub const PRIVILEGED_ROLES: &[Role] = &[Role::Owner, Role::Leader, Role::Manager];

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owner" => Ok(Role::Owner),
            "leader" => Ok(Role::Leader),
            "manager" => Ok(Role::Manager),
            "member" => Ok(Role::Member),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

impl Role {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Leader => "leader",
            Role::Manager => "manager",
            Role::Member => "member",
        }
    }

    /// Whether this role belongs to the mutating set.
    pub fn is_privileged(&self) -> bool {
        PRIVILEGED_ROLES.contains(self)
    }
}
