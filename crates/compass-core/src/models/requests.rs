//! Validated request types for updating models.

use jiff::civil::Date;

use crate::error::TrackerError;
use crate::params;

/// Validated partial update for a schedulable entity (project, plan, or
/// mission). Produced from the corresponding parameter struct via `TryFrom`,
/// which parses the date strings and rejects an inverted window.
#[derive(Debug, Default)]
pub struct ScheduleUpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub starts_on: Option<Date>,
    pub ends_on: Option<Date>,
    pub completed: Option<bool>,
}

impl ScheduleUpdateRequest {
    /// Whether the request changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.starts_on.is_none()
            && self.ends_on.is_none()
            && self.completed.is_none()
    }

    fn from_parts(
        title: Option<String>,
        description: Option<String>,
        starts_on: Option<&str>,
        ends_on: Option<&str>,
        completed: Option<bool>,
    ) -> Result<Self, TrackerError> {
        let starts_on = starts_on
            .map(|s| params::parse_date("starts_on", s))
            .transpose()?;
        let ends_on = ends_on
            .map(|s| params::parse_date("ends_on", s))
            .transpose()?;

        // When the patch supplies both bounds the ordering can be checked
        // here; a single-bound patch is checked against the stored window
        // after the merge.
        if let (Some(start), Some(end)) = (starts_on, ends_on) {
            if end < start {
                return Err(TrackerError::invalid_input(
                    "ends_on",
                    "End date must not precede the start date",
                ));
            }
        }

        Ok(Self {
            title,
            description,
            starts_on,
            ends_on,
            completed,
        })
    }
}

impl TryFrom<params::UpdateProject> for ScheduleUpdateRequest {
    type Error = TrackerError;

    fn try_from(p: params::UpdateProject) -> Result<Self, Self::Error> {
        Self::from_parts(
            p.title,
            p.description,
            p.starts_on.as_deref(),
            p.ends_on.as_deref(),
            p.completed,
        )
    }
}

impl TryFrom<params::UpdatePlan> for ScheduleUpdateRequest {
    type Error = TrackerError;

    fn try_from(p: params::UpdatePlan) -> Result<Self, Self::Error> {
        Self::from_parts(
            p.title,
            p.description,
            p.starts_on.as_deref(),
            p.ends_on.as_deref(),
            p.completed,
        )
    }
}

impl TryFrom<params::UpdateMission> for ScheduleUpdateRequest {
    type Error = TrackerError;

    fn try_from(p: params::UpdateMission) -> Result<Self, Self::Error> {
        Self::from_parts(
            p.title,
            p.description,
            p.starts_on.as_deref(),
            p.ends_on.as_deref(),
            p.completed,
        )
    }
}

/// Validated partial update for a document.
#[derive(Debug, Default)]
pub struct DocumentUpdateRequest {
    pub title: Option<String>,
    pub location: Option<String>,
    pub note: Option<String>,
}

impl DocumentUpdateRequest {
    /// Whether the request changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.location.is_none() && self.note.is_none()
    }
}

impl From<params::UpdateDocument> for DocumentUpdateRequest {
    fn from(p: params::UpdateDocument) -> Self {
        Self {
            title: p.title,
            location: p.location,
            note: p.note,
        }
    }
}
