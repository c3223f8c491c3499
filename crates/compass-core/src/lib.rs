//! Core library for the Compass project-management tracker.
//!
//! This crate provides the business logic for managing projects, plans, and
//! missions, together with project membership, documents, progress reports,
//! and an append-only activity log.
//!
//! Two pieces carry the actual decisions; everything else is plumbing
//! around them:
//!
//! - **Status derivation** ([`models::ScheduleWindow::status_on`]): a pure
//!   function computing an entity's lifecycle status from its schedule
//!   window, its completion flag, and an injected "today". Statuses are
//!   recomputed on every read and never stored.
//! - **Authorization** ([`authz::authorize_mutation`]): a fail-closed,
//!   pure decision over a project's member list determining whether the
//!   acting user holds a mutating role. The storage layer re-reads
//!   membership inside every mutation's transaction, so a revoked role is
//!   effective immediately.
//!
//! # Quick Start
//!
//! ```rust
//! use compass_core::{TrackerBuilder, params::{CreateProject, RegisterUser}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a tracker instance
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Register a user and create a project they own
//! let user = tracker.register_user(&RegisterUser {
//!     username: "ada".to_string(),
//! }).await?;
//!
//! let project = tracker.create_project_result(&CreateProject {
//!     actor: user.id,
//!     title: "Launch".to_string(),
//!     description: Some("Q3 launch".to_string()),
//!     starts_on: "2024-01-01".to_string(),
//!     ends_on: "2024-06-01".to_string(),
//! }).await?;
//! println!("Created project: {}", project.title);
//! # Ok(())
//! # }
//! ```

pub mod authz;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod tracker;

// Re-export commonly used types
pub use authz::{authorize_default, authorize_mutation, AccessDecision, AccessDenial};
pub use db::Database;
pub use display::{
    ActivityLog, CreateResult, DeleteResult, Documents, Members, OperationStatus,
    ProjectSummaries, Reports, UpdateResult, Users,
};
pub use error::{Result, TrackerError};
pub use models::{
    ActivityEntry, Document, Member, Mission, Plan, ProgressReport, Project, ProjectFilter,
    ProjectSummary, Role, ScheduleWindow, Status, TrackedAction, TrackedEntity, User,
    PRIVILEGED_ROLES,
};
pub use params::{
    ActorId, AddDocument, AddMember, ChangeMemberRole, CreateMission, CreatePlan, CreateProject,
    DeleteProject, FileReport, Id, ListProjects, RegisterUser, RemoveMember, UpdateDocument,
    UpdateMission, UpdatePlan, UpdateProject,
};
pub use tracker::{Tracker, TrackerBuilder};
