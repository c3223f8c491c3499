//! Error types for the tracker library.

use std::path::PathBuf;

use thiserror::Error;

use crate::authz::AccessDenial;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Project not found for the given ID
    #[error("Project with ID {id} not found")]
    ProjectNotFound { id: u64 },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// Mission not found for the given ID
    #[error("Mission with ID {id} not found")]
    MissionNotFound { id: u64 },
    /// User not found for the given ID
    #[error("User with ID {id} not found")]
    UserNotFound { id: u64 },
    /// No membership record for the given user in the given project
    #[error("User {user_id} is not a member of project {project_id}")]
    MemberNotFound { user_id: u64, project_id: u64 },
    /// The acting user may not mutate the project-scoped entity.
    ///
    /// Denial is an expected business outcome: both variants of
    /// [`AccessDenial`] map to the same refusal, but the distinction is
    /// preserved for diagnostics.
    #[error("User {user_id} may not modify project {project_id}: {denial}")]
    AccessDenied {
        user_id: u64,
        project_id: u64,
        denial: AccessDenial,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TrackerError {
    /// Creates a database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Extension trait for mapping rusqlite Results with a message.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::database_error(message, e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
