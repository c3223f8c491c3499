//! Append-only activity log models.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// What a tracked mutation did.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrackedAction {
    Created,
    Updated,
    Deleted,
}

impl FromStr for TrackedAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created" => Ok(TrackedAction::Created),
            "updated" => Ok(TrackedAction::Updated),
            "deleted" => Ok(TrackedAction::Deleted),
            _ => Err(format!("Invalid tracked action: {s}")),
        }
    }
}

impl TrackedAction {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackedAction::Created => "created",
            TrackedAction::Updated => "updated",
            TrackedAction::Deleted => "deleted",
        }
    }
}

/// Which kind of project-scoped entity a tracked mutation touched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrackedEntity {
    Project,
    Plan,
    Mission,
    Member,
    Document,
    Report,
}

impl FromStr for TrackedEntity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "project" => Ok(TrackedEntity::Project),
            "plan" => Ok(TrackedEntity::Plan),
            "mission" => Ok(TrackedEntity::Mission),
            "member" => Ok(TrackedEntity::Member),
            "document" => Ok(TrackedEntity::Document),
            "report" => Ok(TrackedEntity::Report),
            _ => Err(format!("Invalid tracked entity: {s}")),
        }
    }
}

impl TrackedEntity {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackedEntity::Project => "project",
            TrackedEntity::Plan => "plan",
            TrackedEntity::Mission => "mission",
            TrackedEntity::Member => "member",
            TrackedEntity::Document => "document",
            TrackedEntity::Report => "report",
        }
    }
}

/// One row of a project's audit trail.
///
/// Entries are appended in the same transaction as the mutation they record
/// and are never updated or individually deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    /// Unique identifier for the entry
    pub id: u64,

    /// ID of the project the mutation belongs to
    pub project_id: u64,

    /// ID of the user who performed the mutation
    pub actor_id: u64,

    /// What the mutation did
    pub action: TrackedAction,

    /// Which kind of entity was touched
    pub entity: TrackedEntity,

    /// ID of the touched entity
    pub entity_id: u64,

    /// Optional human-readable detail (e.g. the title involved)
    pub detail: Option<String>,

    /// Timestamp when the entry was recorded (UTC)
    pub recorded_at: Timestamp,
}
