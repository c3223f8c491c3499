//! User identity records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Identity is deliberately minimal: member rows reference users by ID, and
/// token issuance is handled outside this library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the user
    pub id: u64,

    /// Unique login name
    pub username: String,

    /// Timestamp when the user was registered (UTC)
    pub created_at: Timestamp,
}
