//! Membership model tying users to projects with a role.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Role;

/// A user's membership record within a project.
///
/// There is at most one record per `(project, user)` pair. Membership is
/// always read fresh from storage when authorization is evaluated; records
/// are never cached across requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    /// ID of the member's user record
    pub user_id: u64,

    /// ID of the project the membership belongs to
    pub project_id: u64,

    /// Role the user holds within the project
    pub role: Role,

    /// Timestamp when the membership was created (UTC)
    pub added_at: Timestamp,
}
