//! Parameter structures for Compass operations.
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces without framework-specific derives or dependencies.
//! Interface layers (the CLI, or any future surface) define their own wrapper
//! structs with framework derives and convert into these types, keeping core
//! logic free of interface concerns:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │ (clap derives)  │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every mutating parameter struct carries the requesting user as `actor`;
//! the storage layer re-reads that user's membership inside the mutation's
//! transaction and refuses the change unless the user holds a mutating role.
//!
//! Calendar dates travel as ISO strings (`2024-06-01`) and are parsed during
//! validation, so interface layers never need a date dependency of their own.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::models::ScheduleWindow;

/// Parse an ISO calendar date, reporting the offending field on failure.
pub fn parse_date(field: &str, value: &str) -> Result<Date> {
    value.parse::<Date>().map_err(|_| {
        TrackerError::invalid_input(
            field,
            format!("Invalid date: {value}. Expected an ISO calendar date like 2024-06-01"),
        )
    })
}

/// Generic parameters for operations requiring just an ID.
///
/// Used for read operations like show_project, show_plan, show_mission,
/// list_members, list_activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for destructive operations that also need the acting user.
///
/// Used for plan/mission/document/report deletion, where the storage layer
/// must confirm the actor's role before removing the row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorId {
    /// The ID of the resource to operate on
    pub id: u64,
    /// The ID of the requesting user
    pub actor: u64,
}

/// Parameters for registering a new user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterUser {
    /// Unique login name (required)
    pub username: String,
}

/// Parameters for creating a new project.
///
/// The actor becomes the project's owner; no prior membership is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProject {
    /// The ID of the requesting user
    pub actor: u64,
    /// Title of the project (required)
    pub title: String,
    /// Optional detailed description of the project
    pub description: Option<String>,
    /// First day of the schedule window (ISO date)
    pub starts_on: String,
    /// Last day of the schedule window (ISO date)
    pub ends_on: String,
}

impl CreateProject {
    /// Parse and validate the schedule window.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When a date string does not parse
    /// * `TrackerError::InvalidInput` - When the end date precedes the start
    ///   date (equal dates are allowed and mean an unset window)
    pub fn validate(&self) -> Result<ScheduleWindow> {
        validate_window(&self.starts_on, &self.ends_on)
    }
}

/// Parameters for listing projects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProjects {
    /// Filter by project title (case-insensitive partial match)
    pub title_contains: Option<String>,
    /// Only projects the given user is a member of
    pub member: Option<u64>,
    /// Filter by derived lifecycle status (canonical string form)
    pub status: Option<String>,
}

/// Parameters for updating an existing project.
///
/// Allows partial updates; omitted fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    /// Project ID to update (required)
    pub id: u64,
    /// The ID of the requesting user
    pub actor: u64,
    /// Updated title of the project
    pub title: Option<String>,
    /// Updated detailed description of the project
    pub description: Option<String>,
    /// Updated first day of the schedule window (ISO date)
    pub starts_on: Option<String>,
    /// Updated last day of the schedule window (ISO date)
    pub ends_on: Option<String>,
    /// Updated completion flag
    pub completed: Option<bool>,
}

/// Parameters for permanently deleting a project.
///
/// Requires explicit confirmation to prevent accidental deletion; the
/// cascade removes every plan, mission, member, document, report, and
/// activity entry belonging to the project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteProject {
    /// Project ID to delete (required)
    pub id: u64,
    /// The ID of the requesting user
    pub actor: u64,
    /// Must be true for the deletion to proceed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for adding a plan to a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// ID of the project to add the plan to
    pub project_id: u64,
    /// The ID of the requesting user
    pub actor: u64,
    /// Title of the plan (required)
    pub title: String,
    /// Optional detailed description of the plan
    pub description: Option<String>,
    /// First day of the schedule window (ISO date)
    pub starts_on: String,
    /// Last day of the schedule window (ISO date)
    pub ends_on: String,
}

impl CreatePlan {
    /// Parse and validate the schedule window.
    pub fn validate(&self) -> Result<ScheduleWindow> {
        validate_window(&self.starts_on, &self.ends_on)
    }
}

/// Parameters for updating an existing plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlan {
    /// Plan ID to update (required)
    pub id: u64,
    /// The ID of the requesting user
    pub actor: u64,
    /// Updated title of the plan
    pub title: Option<String>,
    /// Updated detailed description of the plan
    pub description: Option<String>,
    /// Updated first day of the schedule window (ISO date)
    pub starts_on: Option<String>,
    /// Updated last day of the schedule window (ISO date)
    pub ends_on: Option<String>,
    /// Updated completion flag
    pub completed: Option<bool>,
}

/// Parameters for adding a mission to a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMission {
    /// ID of the plan to add the mission to
    pub plan_id: u64,
    /// The ID of the requesting user
    pub actor: u64,
    /// Title of the mission (required)
    pub title: String,
    /// Optional detailed description of the mission
    pub description: Option<String>,
    /// First day of the schedule window (ISO date)
    pub starts_on: String,
    /// Last day of the schedule window (ISO date)
    pub ends_on: String,
}

impl CreateMission {
    /// Parse and validate the schedule window.
    pub fn validate(&self) -> Result<ScheduleWindow> {
        validate_window(&self.starts_on, &self.ends_on)
    }
}

/// Parameters for updating an existing mission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMission {
    /// Mission ID to update (required)
    pub id: u64,
    /// The ID of the requesting user
    pub actor: u64,
    /// Updated title of the mission
    pub title: Option<String>,
    /// Updated detailed description of the mission
    pub description: Option<String>,
    /// Updated first day of the schedule window (ISO date)
    pub starts_on: Option<String>,
    /// Updated last day of the schedule window (ISO date)
    pub ends_on: Option<String>,
    /// Updated completion flag
    pub completed: Option<bool>,
}

/// Parameters for adding a member to a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddMember {
    /// ID of the project to add the member to
    pub project_id: u64,
    /// The ID of the requesting user
    pub actor: u64,
    /// ID of the user to add
    pub user_id: u64,
    /// Role to grant ('owner', 'leader', 'manager', or 'member')
    pub role: String,
}

impl AddMember {
    /// Parse and validate the role string.
    pub fn validate(&self) -> Result<crate::models::Role> {
        parse_role(&self.role)
    }
}

/// Parameters for changing an existing member's role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeMemberRole {
    /// ID of the project the membership belongs to
    pub project_id: u64,
    /// The ID of the requesting user
    pub actor: u64,
    /// ID of the member's user record
    pub user_id: u64,
    /// New role ('owner', 'leader', 'manager', or 'member')
    pub role: String,
}

impl ChangeMemberRole {
    /// Parse and validate the role string.
    pub fn validate(&self) -> Result<crate::models::Role> {
        parse_role(&self.role)
    }
}

/// Parameters for removing a member from a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveMember {
    /// ID of the project the membership belongs to
    pub project_id: u64,
    /// The ID of the requesting user
    pub actor: u64,
    /// ID of the member's user record
    pub user_id: u64,
}

/// Parameters for attaching a document to a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddDocument {
    /// ID of the project to attach the document to
    pub project_id: u64,
    /// The ID of the requesting user
    pub actor: u64,
    /// Title of the document (required)
    pub title: String,
    /// Where the document lives (URL or file path)
    pub location: String,
    /// Optional free-form note about the document
    pub note: Option<String>,
}

/// Parameters for updating an existing document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDocument {
    /// Document ID to update (required)
    pub id: u64,
    /// The ID of the requesting user
    pub actor: u64,
    /// Updated title of the document
    pub title: Option<String>,
    /// Updated location of the document
    pub location: Option<String>,
    /// Updated note about the document
    pub note: Option<String>,
}

/// Parameters for filing a progress report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileReport {
    /// ID of the project the report belongs to
    pub project_id: u64,
    /// The ID of the requesting user (recorded as the author)
    pub actor: u64,
    /// Report body (required)
    pub body: String,
    /// The day the report refers to (ISO date); defaults to today
    pub reported_on: Option<String>,
}

impl FileReport {
    /// Parse the reported-on date if one was given.
    pub fn validate(&self) -> Result<Option<Date>> {
        self.reported_on
            .as_deref()
            .map(|s| parse_date("reported_on", s))
            .transpose()
    }
}

fn validate_window(starts_on: &str, ends_on: &str) -> Result<ScheduleWindow> {
    let starts_on = parse_date("starts_on", starts_on)?;
    let ends_on = parse_date("ends_on", ends_on)?;
    if ends_on < starts_on {
        return Err(TrackerError::invalid_input(
            "ends_on",
            "End date must not precede the start date",
        ));
    }
    Ok(ScheduleWindow::new(starts_on, ends_on))
}

fn parse_role(role: &str) -> Result<crate::models::Role> {
    role.parse().map_err(|_| {
        TrackerError::invalid_input(
            "role",
            format!("Invalid role: {role}. Must be 'owner', 'leader', 'manager', or 'member'"),
        )
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Role;
    use crate::TrackerError;

    #[test]
    fn test_create_project_validate_valid_window() {
        let params = CreateProject {
            actor: 1,
            title: "Launch".to_string(),
            description: None,
            starts_on: "2024-01-01".to_string(),
            ends_on: "2024-06-01".to_string(),
        };

        let window = params.validate().expect("window should validate");
        assert_eq!(window.starts_on, date(2024, 1, 1));
        assert_eq!(window.ends_on, date(2024, 6, 1));
    }

    #[test]
    fn test_create_project_validate_equal_dates_allowed() {
        let params = CreateProject {
            actor: 1,
            title: "Unscheduled".to_string(),
            description: None,
            starts_on: "2024-01-01".to_string(),
            ends_on: "2024-01-01".to_string(),
        };

        // A degenerate window is legal input; it derives to NotSelected.
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_create_project_validate_inverted_window() {
        let params = CreateProject {
            actor: 1,
            title: "Backwards".to_string(),
            description: None,
            starts_on: "2024-06-01".to_string(),
            ends_on: "2024-01-01".to_string(),
        };

        match params.validate().unwrap_err() {
            TrackerError::InvalidInput { field, reason } => {
                assert_eq!(field, "ends_on");
                assert!(reason.contains("must not precede"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_create_project_validate_bad_date() {
        let params = CreateProject {
            actor: 1,
            title: "Bad".to_string(),
            description: None,
            starts_on: "01/06/2024".to_string(),
            ends_on: "2024-06-01".to_string(),
        };

        match params.validate().unwrap_err() {
            TrackerError::InvalidInput { field, .. } => assert_eq!(field, "starts_on"),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_add_member_validate_role() {
        let mut params = AddMember {
            project_id: 1,
            actor: 1,
            user_id: 2,
            role: "leader".to_string(),
        };
        assert_eq!(params.validate().unwrap(), Role::Leader);

        params.role = "intern".to_string();
        match params.validate().unwrap_err() {
            TrackerError::InvalidInput { field, reason } => {
                assert_eq!(field, "role");
                assert!(reason.contains("Invalid role: intern"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_file_report_validate_default_date() {
        let params = FileReport {
            project_id: 1,
            actor: 1,
            body: "On track".to_string(),
            reported_on: None,
        };
        assert_eq!(params.validate().unwrap(), None);
    }

    #[test]
    fn test_file_report_validate_explicit_date() {
        let params = FileReport {
            project_id: 1,
            actor: 1,
            body: "On track".to_string(),
            reported_on: Some("2024-03-15".to_string()),
        };
        assert_eq!(params.validate().unwrap(), Some(date(2024, 3, 15)));
    }
}
