//! Document model for project-scoped references.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A document attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier for the document
    pub id: u64,

    /// ID of the owning project
    pub project_id: u64,

    /// Title of the document
    pub title: String,

    /// Where the document lives (URL or file path)
    pub location: String,

    /// Optional free-form note about the document
    pub note: Option<String>,

    /// Timestamp when the document was added (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the document was last updated (UTC)
    pub updated_at: Timestamp,
}
