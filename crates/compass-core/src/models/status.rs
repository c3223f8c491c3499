//! Derived lifecycle status for schedulable entities.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of derived lifecycle statuses.
///
/// A status is never stored; it is recomputed from a schedule window and a
/// completion flag every time an entity is read or patched. See
/// [`ScheduleWindow::status_on`](crate::models::ScheduleWindow::status_on)
/// for the derivation rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Degenerate window: start and end date coincide, nothing scheduled
    NotSelected,

    /// The window has not opened yet
    Waiting,

    /// Today falls inside the window
    InProgress,

    /// Marked complete after the window closed
    CompletedEarly,

    /// Marked complete exactly on the end date
    FinishedOnTime,

    /// The window closed without the entity being marked complete
    BehindSchedule,

    /// Marked complete while the window is still open
    FinishedLate,
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notselected" | "not_selected" => Ok(Status::NotSelected),
            "waiting" => Ok(Status::Waiting),
            "inprogress" | "in_progress" => Ok(Status::InProgress),
            "completedearly" | "completed_early" => Ok(Status::CompletedEarly),
            "finishedontime" | "finished_on_time" => Ok(Status::FinishedOnTime),
            "behindschedule" | "behind_schedule" => Ok(Status::BehindSchedule),
            "finishedlate" | "finished_late" => Ok(Status::FinishedLate),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}

impl Status {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotSelected => "not_selected",
            Status::Waiting => "waiting",
            Status::InProgress => "in_progress",
            Status::CompletedEarly => "completed_early",
            Status::FinishedOnTime => "finished_on_time",
            Status::BehindSchedule => "behind_schedule",
            Status::FinishedLate => "finished_late",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// Returns a formatted string that includes both an icon and the status
    /// name, keeping the visual representation consistent across all display
    /// contexts.
    pub fn with_icon(&self) -> &'static str {
        match self {
            Status::NotSelected => "○ Not Selected",
            Status::Waiting => "◷ Waiting",
            Status::InProgress => "➤ In Progress",
            Status::CompletedEarly => "✓ Completed Early",
            Status::FinishedOnTime => "✓ Finished On Time",
            Status::BehindSchedule => "⚠ Behind Schedule",
            Status::FinishedLate => "✓ Finished Late",
        }
    }
}
