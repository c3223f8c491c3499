//! Project model definition and related functionality.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Member, Plan, ScheduleWindow, Status};

/// Represents a complete project with metadata, plans, and members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Unique identifier for the project
    pub id: u64,

    /// Title of the project
    pub title: String,

    /// Detailed multi-line description of the project
    pub description: Option<String>,

    /// Planned duration of the project
    pub schedule: ScheduleWindow,

    /// Whether the project has been explicitly marked complete
    pub completed: bool,

    /// Timestamp when the project was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the project was last modified (UTC)
    pub updated_at: Timestamp,

    /// Associated plans (lazy-loaded by default)
    #[serde(default)]
    pub plans: Vec<Plan>,

    /// Project membership (lazy-loaded by default)
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Project {
    /// Derive the project's lifecycle status as observed on `today`.
    pub fn status(&self, today: Date) -> Status {
        self.schedule.status_on(self.completed, today)
    }
}
