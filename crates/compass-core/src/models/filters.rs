//! Filter types for querying projects.

use crate::error::TrackerError;
use crate::params::ListProjects;

use super::Status;

/// Filter options for querying projects.
///
/// `title_contains` and `member` translate to SQL conditions; `status` is
/// applied after the query, because a lifecycle status is derived from the
/// schedule window at read time and never stored.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    /// Filter by project title (case-insensitive partial match)
    pub title_contains: Option<String>,

    /// Only projects the given user is a member of
    pub member: Option<u64>,

    /// Filter by derived lifecycle status (applied post-query)
    pub status: Option<Status>,
}

impl TryFrom<&ListProjects> for ProjectFilter {
    type Error = TrackerError;

    /// Convert list parameters into a project filter, parsing the status
    /// string if one was given.
    fn try_from(params: &ListProjects) -> Result<Self, Self::Error> {
        let status = match &params.status {
            Some(s) => Some(s.parse::<Status>().map_err(|_| {
                TrackerError::invalid_input(
                    "status",
                    format!(
                        "Invalid status: {s}. Must be one of 'not_selected', 'waiting', \
                         'in_progress', 'completed_early', 'finished_on_time', \
                         'behind_schedule', or 'finished_late'"
                    ),
                )
            })?),
            None => None,
        };

        Ok(Self {
            title_contains: params.title_contains.clone(),
            member: params.member,
            status,
        })
    }
}
