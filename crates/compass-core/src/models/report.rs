//! Progress report model.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A progress report filed against a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressReport {
    /// Unique identifier for the report
    pub id: u64,

    /// ID of the project the report belongs to
    pub project_id: u64,

    /// ID of the user who filed the report
    pub author_id: u64,

    /// Report body
    pub body: String,

    /// The day the reported progress refers to
    pub reported_on: Date,

    /// Timestamp when the report was filed (UTC)
    pub created_at: Timestamp,
}
