//! Plan model definition and related functionality.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Mission, ScheduleWindow, Status};

/// Represents a plan within a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// ID of the parent project
    pub project_id: u64,

    /// Title of the plan
    pub title: String,

    /// Detailed multi-line description of the plan
    pub description: Option<String>,

    /// Planned duration of the plan
    pub schedule: ScheduleWindow,

    /// Whether the plan has been explicitly marked complete
    pub completed: bool,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,

    /// Associated missions (lazy-loaded by default)
    #[serde(default)]
    pub missions: Vec<Mission>,
}

impl Plan {
    /// Derive the plan's lifecycle status as observed on `today`.
    pub fn status(&self, today: Date) -> Status {
        self.schedule.status_on(self.completed, today)
    }
}
