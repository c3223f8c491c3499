//! Project summary types and functionality.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ScheduleWindow, Status};

/// Summary information about a project for list display.
///
/// The counts come from the `project_summaries` view; the status is derived
/// at query time from the schedule window and completion flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project ID
    pub id: u64,
    /// Title of the project
    pub title: String,
    /// Detailed multi-line description of the project
    pub description: Option<String>,
    /// Planned duration of the project
    pub schedule: ScheduleWindow,
    /// Whether the project has been marked complete
    pub completed: bool,
    /// Lifecycle status derived when the summary was assembled
    pub status: Status,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
    /// Total number of plans
    pub total_plans: u32,
    /// Number of plans marked complete
    pub completed_plans: u32,
    /// Number of project members
    pub member_count: u32,
}

/// Raw summary row as read from the `project_summaries` view, before the
/// status has been derived.
#[derive(Debug, Clone)]
pub struct ProjectSummaryRow {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub schedule: ScheduleWindow,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub total_plans: u32,
    pub completed_plans: u32,
    pub member_count: u32,
}

impl ProjectSummaryRow {
    /// Finish the summary by deriving the status as observed on `today`.
    pub fn into_summary(self, today: Date) -> ProjectSummary {
        let status = self.schedule.status_on(self.completed, today);
        ProjectSummary {
            id: self.id,
            title: self.title,
            description: self.description,
            schedule: self.schedule,
            completed: self.completed,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
            total_plans: self.total_plans,
            completed_plans: self.completed_plans,
            member_count: self.member_count,
        }
    }
}
