//! Mission model definition and related functionality.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ScheduleWindow, Status};

/// Represents an individual mission within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mission {
    /// Unique identifier for the mission
    pub id: u64,

    /// ID of the parent plan
    pub plan_id: u64,

    /// Brief title/summary of the mission
    pub title: String,

    /// Detailed multi-line description of the mission
    pub description: Option<String>,

    /// Planned duration of the mission
    pub schedule: ScheduleWindow,

    /// Whether the mission has been explicitly marked complete
    pub completed: bool,

    /// Timestamp when the mission was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the mission was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Mission {
    /// Derive the mission's lifecycle status as observed on `today`.
    pub fn status(&self, today: Date) -> Status {
        self.schedule.status_on(self.completed, today)
    }
}
