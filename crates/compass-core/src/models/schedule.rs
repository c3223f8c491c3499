//! Schedule window model and the status derivation rules.

use std::cmp::Ordering;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Status;

/// The planned duration of a schedulable entity as a pair of calendar dates.
///
/// Both bounds are civil dates with no time-of-day component. The window is
/// not validated here: `starts_on` may equal, precede, or follow `ends_on`,
/// and [`status_on`](Self::status_on) is total over all three orderings.
/// Boundary validation belongs to the parameter layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleWindow {
    /// First day of the window
    pub starts_on: Date,

    /// Last day of the window
    pub ends_on: Date,
}

impl ScheduleWindow {
    /// Create a window from its two bounds.
    pub fn new(starts_on: Date, ends_on: Date) -> Self {
        Self { starts_on, ends_on }
    }

    /// Derive the lifecycle status of this window as observed on `today`.
    ///
    /// This is a pure function of `(window, completed, today)`: no side
    /// effects, no clock reads, identical inputs always produce identical
    /// output. Callers read the clock once at the service boundary and pass
    /// the date in, so concurrent evaluations within one request agree.
    ///
    /// Rules, in priority order:
    ///
    /// 1. `starts_on == ends_on` → [`Status::NotSelected`], regardless of
    ///    the completion flag (a degenerate window means nothing was
    ///    scheduled).
    /// 2. `today < starts_on` → [`Status::Waiting`].
    /// 3. `starts_on <= today < ends_on` → [`Status::InProgress`].
    /// 4. Otherwise the window has closed:
    ///    - not completed → [`Status::BehindSchedule`];
    ///    - completed → compare `ends_on` with `today`: before →
    ///      [`Status::CompletedEarly`], equal → [`Status::FinishedOnTime`],
    ///      after → [`Status::FinishedLate`].
    pub fn status_on(&self, completed: bool, today: Date) -> Status {
        if self.starts_on == self.ends_on {
            return Status::NotSelected;
        }
        if today < self.starts_on {
            return Status::Waiting;
        }
        if today < self.ends_on {
            return Status::InProgress;
        }
        if !completed {
            return Status::BehindSchedule;
        }
        match self.ends_on.cmp(&today) {
            Ordering::Less => Status::CompletedEarly,
            Ordering::Equal => Status::FinishedOnTime,
            // Cannot occur once today >= ends_on; the arm keeps the
            // comparison exhaustive.
            Ordering::Greater => Status::FinishedLate,
        }
    }
}
