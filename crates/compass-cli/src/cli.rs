//! Command-line interface definitions and handlers.
//!
//! This module implements the parameter wrapper pattern: each command has a
//! clap argument struct that converts into the matching core parameter type,
//! so clap-specific concerns (flags, help text, env fallbacks) never reach
//! `compass-core`.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker handlers
//! ```
//!
//! Mutating commands resolve the acting user from the global `--user` flag
//! (or `COMPASS_USER`); conversions for those take the actor explicitly via
//! `into_params(actor)` rather than a plain `From` impl, which keeps the
//! requirement visible at the call site.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use compass_core::params::{
    ActorId, AddDocument, AddMember, ChangeMemberRole, CreateMission, CreatePlan, CreateProject,
    DeleteProject, FileReport, Id, ListProjects, RegisterUser, RemoveMember, UpdateDocument,
    UpdateMission, UpdatePlan, UpdateProject,
};
use compass_core::{CreateResult, DeleteResult, OperationStatus, Tracker, UpdateResult};
use serde::Serialize;

use crate::renderer::TerminalRenderer;

// ============================================================================
// User commands
// ============================================================================

/// Register a new user
#[derive(Args)]
pub struct RegisterUserArgs {
    /// Unique login name for the new user
    pub username: String,
}

impl From<RegisterUserArgs> for RegisterUser {
    fn from(val: RegisterUserArgs) -> Self {
        RegisterUser {
            username: val.username,
        }
    }
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    #[command(alias = "r")]
    Register(RegisterUserArgs),
    /// List all registered users
    #[command(aliases = ["l", "ls"])]
    List,
}

// ============================================================================
// Project commands
// ============================================================================

/// Create a new project owned by the acting user
#[derive(Args)]
pub struct CreateProjectArgs {
    /// Title of the project
    pub title: String,
    /// Optional description providing more context about the project
    #[arg(short, long)]
    pub description: Option<String>,
    /// First day of the schedule window (ISO date, e.g. 2024-06-01)
    #[arg(long)]
    pub starts_on: String,
    /// Last day of the schedule window (ISO date, e.g. 2024-12-01)
    #[arg(long)]
    pub ends_on: String,
}

impl CreateProjectArgs {
    fn into_params(self, actor: u64) -> CreateProject {
        CreateProject {
            actor,
            title: self.title,
            description: self.description,
            starts_on: self.starts_on,
            ends_on: self.ends_on,
        }
    }
}

/// List projects
///
/// Shows every project by default. The status filter matches the *derived*
/// lifecycle status as of today, e.g. `--status behind_schedule`.
#[derive(Args)]
pub struct ListProjectsArgs {
    /// Filter by project title (partial match)
    #[arg(long)]
    pub title: Option<String>,
    /// Only projects the given user is a member of
    #[arg(long)]
    pub member: Option<u64>,
    /// Filter by derived status (e.g. waiting, in_progress, behind_schedule)
    #[arg(long)]
    pub status: Option<String>,
}

impl From<ListProjectsArgs> for ListProjects {
    fn from(val: ListProjectsArgs) -> Self {
        ListProjects {
            title_contains: val.title,
            member: val.member,
            status: val.status,
        }
    }
}

/// Show details of a specific project
///
/// Displays the project with its derived status, members, plans, and each
/// plan's missions.
#[derive(Args)]
pub struct ShowProjectArgs {
    /// ID of the project to display
    pub id: u64,
}

impl From<ShowProjectArgs> for Id {
    fn from(val: ShowProjectArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a project's details, schedule, or completion flag
#[derive(Args)]
pub struct UpdateProjectArgs {
    /// ID of the project to update
    pub id: u64,
    /// Updated title for the project
    #[arg(short, long)]
    pub title: Option<String>,
    /// Updated description for the project
    #[arg(short, long)]
    pub description: Option<String>,
    /// Updated first day of the schedule window (ISO date)
    #[arg(long)]
    pub starts_on: Option<String>,
    /// Updated last day of the schedule window (ISO date)
    #[arg(long)]
    pub ends_on: Option<String>,
    /// Mark the project complete (true) or not complete (false)
    #[arg(long)]
    pub completed: Option<bool>,
}

impl UpdateProjectArgs {
    fn into_params(self, actor: u64) -> UpdateProject {
        UpdateProject {
            id: self.id,
            actor,
            title: self.title,
            description: self.description,
            starts_on: self.starts_on,
            ends_on: self.ends_on,
            completed: self.completed,
        }
    }

    fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if self.title.is_some() {
            changes.push("Updated title".to_string());
        }
        if self.description.is_some() {
            changes.push("Updated description".to_string());
        }
        if self.starts_on.is_some() || self.ends_on.is_some() {
            changes.push("Updated schedule window".to_string());
        }
        match self.completed {
            Some(true) => changes.push("Marked complete".to_string()),
            Some(false) => changes.push("Marked not complete".to_string()),
            None => {}
        }
        changes
    }
}

/// Delete a project permanently
#[derive(Args)]
pub struct DeleteProjectArgs {
    /// ID of the project to permanently delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl DeleteProjectArgs {
    fn into_params(self, actor: u64) -> DeleteProject {
        DeleteProject {
            id: self.id,
            actor,
            confirmed: self.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    #[command(alias = "c")]
    Create(CreateProjectArgs),
    /// List projects
    #[command(aliases = ["l", "ls"])]
    List(ListProjectsArgs),
    /// Show details of a specific project
    #[command(alias = "s")]
    Show(ShowProjectArgs),
    /// Update a project
    #[command(alias = "u")]
    Update(UpdateProjectArgs),
    /// Delete a project permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteProjectArgs),
}

// ============================================================================
// Plan commands
// ============================================================================

/// Add a new plan to a project
#[derive(Args)]
pub struct AddPlanArgs {
    /// ID of the project to add the plan to
    pub project_id: u64,
    /// Title of the plan
    pub title: String,
    /// Optional description of the plan
    #[arg(short, long)]
    pub description: Option<String>,
    /// First day of the schedule window (ISO date)
    #[arg(long)]
    pub starts_on: String,
    /// Last day of the schedule window (ISO date)
    #[arg(long)]
    pub ends_on: String,
}

impl AddPlanArgs {
    fn into_params(self, actor: u64) -> CreatePlan {
        CreatePlan {
            project_id: self.project_id,
            actor,
            title: self.title,
            description: self.description,
            starts_on: self.starts_on,
            ends_on: self.ends_on,
        }
    }
}

/// Show details of a specific plan
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a plan's details, schedule, or completion flag
#[derive(Args)]
pub struct UpdatePlanArgs {
    /// ID of the plan to update
    pub id: u64,
    /// Updated title for the plan
    #[arg(short, long)]
    pub title: Option<String>,
    /// Updated description for the plan
    #[arg(short, long)]
    pub description: Option<String>,
    /// Updated first day of the schedule window (ISO date)
    #[arg(long)]
    pub starts_on: Option<String>,
    /// Updated last day of the schedule window (ISO date)
    #[arg(long)]
    pub ends_on: Option<String>,
    /// Mark the plan complete (true) or not complete (false)
    #[arg(long)]
    pub completed: Option<bool>,
}

impl UpdatePlanArgs {
    fn into_params(self, actor: u64) -> UpdatePlan {
        UpdatePlan {
            id: self.id,
            actor,
            title: self.title,
            description: self.description,
            starts_on: self.starts_on,
            ends_on: self.ends_on,
            completed: self.completed,
        }
    }
}

/// Delete a plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to permanently delete (removes its missions too)
    pub id: u64,
}

impl DeletePlanArgs {
    fn into_params(self, actor: u64) -> ActorId {
        ActorId { id: self.id, actor }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Add a new plan to a project
    #[command(alias = "a")]
    Add(AddPlanArgs),
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Update a plan
    #[command(alias = "u")]
    Update(UpdatePlanArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

// ============================================================================
// Mission commands
// ============================================================================

/// Add a new mission to a plan
#[derive(Args)]
pub struct AddMissionArgs {
    /// ID of the plan to add the mission to
    pub plan_id: u64,
    /// Title of the mission
    pub title: String,
    /// Optional description of the mission
    #[arg(short, long)]
    pub description: Option<String>,
    /// First day of the schedule window (ISO date)
    #[arg(long)]
    pub starts_on: String,
    /// Last day of the schedule window (ISO date)
    #[arg(long)]
    pub ends_on: String,
}

impl AddMissionArgs {
    fn into_params(self, actor: u64) -> CreateMission {
        CreateMission {
            plan_id: self.plan_id,
            actor,
            title: self.title,
            description: self.description,
            starts_on: self.starts_on,
            ends_on: self.ends_on,
        }
    }
}

/// Show details of a specific mission
#[derive(Args)]
pub struct ShowMissionArgs {
    /// ID of the mission to display
    pub id: u64,
}

impl From<ShowMissionArgs> for Id {
    fn from(val: ShowMissionArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a mission's details, schedule, or completion flag
#[derive(Args)]
pub struct UpdateMissionArgs {
    /// ID of the mission to update
    pub id: u64,
    /// Updated title for the mission
    #[arg(short, long)]
    pub title: Option<String>,
    /// Updated description for the mission
    #[arg(short, long)]
    pub description: Option<String>,
    /// Updated first day of the schedule window (ISO date)
    #[arg(long)]
    pub starts_on: Option<String>,
    /// Updated last day of the schedule window (ISO date)
    #[arg(long)]
    pub ends_on: Option<String>,
    /// Mark the mission complete (true) or not complete (false)
    #[arg(long)]
    pub completed: Option<bool>,
}

impl UpdateMissionArgs {
    fn into_params(self, actor: u64) -> UpdateMission {
        UpdateMission {
            id: self.id,
            actor,
            title: self.title,
            description: self.description,
            starts_on: self.starts_on,
            ends_on: self.ends_on,
            completed: self.completed,
        }
    }
}

/// Delete a mission permanently
#[derive(Args)]
pub struct DeleteMissionArgs {
    /// ID of the mission to permanently delete
    pub id: u64,
}

impl DeleteMissionArgs {
    fn into_params(self, actor: u64) -> ActorId {
        ActorId { id: self.id, actor }
    }
}

#[derive(Subcommand)]
pub enum MissionCommands {
    /// Add a new mission to a plan
    #[command(alias = "a")]
    Add(AddMissionArgs),
    /// Show details of a specific mission
    #[command(alias = "s")]
    Show(ShowMissionArgs),
    /// Update a mission
    #[command(alias = "u")]
    Update(UpdateMissionArgs),
    /// Delete a mission permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteMissionArgs),
}

// ============================================================================
// Member commands
// ============================================================================

/// Add a user to a project
#[derive(Args)]
pub struct AddMemberArgs {
    /// ID of the project
    pub project_id: u64,
    /// ID of the user to add
    pub user_id: u64,
    /// Role to grant: owner, leader, manager, or member
    #[arg(short, long, default_value = "member")]
    pub role: String,
}

impl AddMemberArgs {
    fn into_params(self, actor: u64) -> AddMember {
        AddMember {
            project_id: self.project_id,
            actor,
            user_id: self.user_id,
            role: self.role,
        }
    }
}

/// Change an existing member's role
#[derive(Args)]
pub struct SetRoleArgs {
    /// ID of the project
    pub project_id: u64,
    /// ID of the member's user record
    pub user_id: u64,
    /// New role: owner, leader, manager, or member
    pub role: String,
}

impl SetRoleArgs {
    fn into_params(self, actor: u64) -> ChangeMemberRole {
        ChangeMemberRole {
            project_id: self.project_id,
            actor,
            user_id: self.user_id,
            role: self.role,
        }
    }
}

/// Remove a member from a project
#[derive(Args)]
pub struct RemoveMemberArgs {
    /// ID of the project
    pub project_id: u64,
    /// ID of the member's user record
    pub user_id: u64,
}

impl RemoveMemberArgs {
    fn into_params(self, actor: u64) -> RemoveMember {
        RemoveMember {
            project_id: self.project_id,
            actor,
            user_id: self.user_id,
        }
    }
}

/// List a project's members
#[derive(Args)]
pub struct ListMembersArgs {
    /// ID of the project
    pub project_id: u64,
}

impl From<ListMembersArgs> for Id {
    fn from(val: ListMembersArgs) -> Self {
        Id { id: val.project_id }
    }
}

#[derive(Subcommand)]
pub enum MemberCommands {
    /// Add a user to a project
    #[command(alias = "a")]
    Add(AddMemberArgs),
    /// Change an existing member's role
    SetRole(SetRoleArgs),
    /// Remove a member from a project
    #[command(alias = "rm")]
    Remove(RemoveMemberArgs),
    /// List a project's members
    #[command(aliases = ["l", "ls"])]
    List(ListMembersArgs),
}

// ============================================================================
// Document commands
// ============================================================================

/// Attach a document to a project
#[derive(Args)]
pub struct AddDocArgs {
    /// ID of the project
    pub project_id: u64,
    /// Title of the document
    pub title: String,
    /// Where the document lives (URL or file path)
    pub location: String,
    /// Optional note about the document
    #[arg(short, long)]
    pub note: Option<String>,
}

impl AddDocArgs {
    fn into_params(self, actor: u64) -> AddDocument {
        AddDocument {
            project_id: self.project_id,
            actor,
            title: self.title,
            location: self.location,
            note: self.note,
        }
    }
}

/// Update a document's details
#[derive(Args)]
pub struct UpdateDocArgs {
    /// ID of the document to update
    pub id: u64,
    /// Updated title for the document
    #[arg(short, long)]
    pub title: Option<String>,
    /// Updated location for the document
    #[arg(short, long)]
    pub location: Option<String>,
    /// Updated note for the document
    #[arg(short, long)]
    pub note: Option<String>,
}

impl UpdateDocArgs {
    fn into_params(self, actor: u64) -> UpdateDocument {
        UpdateDocument {
            id: self.id,
            actor,
            title: self.title,
            location: self.location,
            note: self.note,
        }
    }
}

/// Delete a document permanently
#[derive(Args)]
pub struct DeleteDocArgs {
    /// ID of the document to permanently delete
    pub id: u64,
}

impl DeleteDocArgs {
    fn into_params(self, actor: u64) -> ActorId {
        ActorId { id: self.id, actor }
    }
}

/// List a project's documents
#[derive(Args)]
pub struct ListDocsArgs {
    /// ID of the project
    pub project_id: u64,
}

impl From<ListDocsArgs> for Id {
    fn from(val: ListDocsArgs) -> Self {
        Id { id: val.project_id }
    }
}

#[derive(Subcommand)]
pub enum DocCommands {
    /// Attach a document to a project
    #[command(alias = "a")]
    Add(AddDocArgs),
    /// Update a document
    #[command(alias = "u")]
    Update(UpdateDocArgs),
    /// Delete a document permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteDocArgs),
    /// List a project's documents
    #[command(aliases = ["l", "ls"])]
    List(ListDocsArgs),
}

// ============================================================================
// Report commands
// ============================================================================

/// File a progress report against a project
#[derive(Args)]
pub struct FileReportArgs {
    /// ID of the project
    pub project_id: u64,
    /// Report body
    pub body: String,
    /// The day the report refers to (ISO date); defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

impl FileReportArgs {
    fn into_params(self, actor: u64) -> FileReport {
        FileReport {
            project_id: self.project_id,
            actor,
            body: self.body,
            reported_on: self.date,
        }
    }
}

/// List a project's progress reports
#[derive(Args)]
pub struct ListReportsArgs {
    /// ID of the project
    pub project_id: u64,
}

impl From<ListReportsArgs> for Id {
    fn from(val: ListReportsArgs) -> Self {
        Id { id: val.project_id }
    }
}

/// Delete a progress report permanently
#[derive(Args)]
pub struct DeleteReportArgs {
    /// ID of the report to permanently delete
    pub id: u64,
}

impl DeleteReportArgs {
    fn into_params(self, actor: u64) -> ActorId {
        ActorId { id: self.id, actor }
    }
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// File a progress report
    #[command(alias = "f")]
    File(FileReportArgs),
    /// List a project's progress reports
    #[command(aliases = ["l", "ls"])]
    List(ListReportsArgs),
    /// Delete a progress report permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteReportArgs),
}

/// Show a project's activity log
#[derive(Args)]
pub struct ActivityArgs {
    /// ID of the project
    pub project_id: u64,
}

impl From<ActivityArgs> for Id {
    fn from(val: ActivityArgs) -> Self {
        Id { id: val.project_id }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// CLI handler driving the tracker and rendering results.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
    json: bool,
    actor: Option<u64>,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(tracker: Tracker, renderer: TerminalRenderer, json: bool, actor: Option<u64>) -> Self {
        Self {
            tracker,
            renderer,
            json,
            actor,
        }
    }

    /// Resolve the acting user for a mutating command.
    fn require_actor(&self) -> Result<u64> {
        self.actor.context(
            "This command modifies project data; specify the acting user with --user <id> \
             or the COMPASS_USER environment variable",
        )
    }

    fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    fn render(&self, markdown: &str) -> Result<()> {
        self.renderer.render(markdown)
    }

    fn render_not_found(&self, what: &str, id: u64) -> Result<()> {
        self.render(&OperationStatus::failure(format!("{what} with ID {id} not found")).to_string())
    }

    /// Handle user subcommands.
    pub async fn handle_user_command(&self, command: UserCommands) -> Result<()> {
        match command {
            UserCommands::Register(args) => {
                let user = self.tracker.register_user(&args.into()).await?;
                if self.json {
                    self.print_json(&user)
                } else {
                    self.render(&CreateResult::new(user).to_string())
                }
            }
            UserCommands::List => {
                let users = self.tracker.list_all_users().await?;
                if self.json {
                    self.print_json(&users.0)
                } else {
                    self.render(&users.to_string())
                }
            }
        }
    }

    /// Handle project subcommands.
    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Create(args) => {
                let actor = self.require_actor()?;
                let project = self
                    .tracker
                    .create_project_result(&args.into_params(actor))
                    .await?;
                if self.json {
                    self.print_json(&project)
                } else {
                    self.render(&CreateResult::new(project).to_string())
                }
            }
            ProjectCommands::List(args) => self.list_projects(&args.into()).await,
            ProjectCommands::Show(args) => {
                let params = args.into();
                match self.tracker.show_project(&params).await? {
                    Some(project) => {
                        if self.json {
                            self.print_json(&project)
                        } else {
                            self.render(&project.to_string())
                        }
                    }
                    None => self.render_not_found("Project", params.id),
                }
            }
            ProjectCommands::Update(args) => {
                let actor = self.require_actor()?;
                let changes = args.changes();
                let params = args.into_params(actor);
                match self.tracker.update_project_validated(&params).await? {
                    Some(project) => {
                        if self.json {
                            self.print_json(&project)
                        } else {
                            self.render(&UpdateResult::with_changes(project, changes).to_string())
                        }
                    }
                    None => self.render_not_found("Project", params.id),
                }
            }
            ProjectCommands::Delete(args) => {
                let actor = self.require_actor()?;
                let params = args.into_params(actor);
                match self.tracker.delete_project_confirmed(&params).await? {
                    Some(project) => {
                        if self.json {
                            self.print_json(&project)
                        } else {
                            self.render(&DeleteResult::new(project).to_string())
                        }
                    }
                    None => self.render_not_found("Project", params.id),
                }
            }
        }
    }

    /// List projects as summaries; also the default command.
    pub async fn list_projects(&self, params: &ListProjects) -> Result<()> {
        let summaries = self.tracker.list_projects_summary(params).await?;
        if self.json {
            self.print_json(&summaries.0)
        } else {
            self.render(&summaries.to_string())
        }
    }

    /// Handle plan subcommands.
    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Add(args) => {
                let actor = self.require_actor()?;
                let plan = self
                    .tracker
                    .add_plan_to_project(&args.into_params(actor))
                    .await?;
                if self.json {
                    self.print_json(&plan)
                } else {
                    self.render(&CreateResult::new(plan).to_string())
                }
            }
            PlanCommands::Show(args) => {
                let params = args.into();
                match self.tracker.show_plan_with_missions(&params).await? {
                    Some(plan) => {
                        if self.json {
                            self.print_json(&plan)
                        } else {
                            self.render(&plan.to_string())
                        }
                    }
                    None => self.render_not_found("Plan", params.id),
                }
            }
            PlanCommands::Update(args) => {
                let actor = self.require_actor()?;
                let params = args.into_params(actor);
                match self.tracker.update_plan_validated(&params).await? {
                    Some(plan) => {
                        if self.json {
                            self.print_json(&plan)
                        } else {
                            self.render(&UpdateResult::new(plan).to_string())
                        }
                    }
                    None => self.render_not_found("Plan", params.id),
                }
            }
            PlanCommands::Delete(args) => {
                let actor = self.require_actor()?;
                let params = args.into_params(actor);
                match self.tracker.remove_plan(&params).await? {
                    Some(plan) => {
                        if self.json {
                            self.print_json(&plan)
                        } else {
                            self.render(&DeleteResult::new(plan).to_string())
                        }
                    }
                    None => self.render_not_found("Plan", params.id),
                }
            }
        }
    }

    /// Handle mission subcommands.
    pub async fn handle_mission_command(&self, command: MissionCommands) -> Result<()> {
        match command {
            MissionCommands::Add(args) => {
                let actor = self.require_actor()?;
                let mission = self
                    .tracker
                    .add_mission_to_plan(&args.into_params(actor))
                    .await?;
                if self.json {
                    self.print_json(&mission)
                } else {
                    self.render(&CreateResult::new(mission).to_string())
                }
            }
            MissionCommands::Show(args) => {
                let params = args.into();
                match self.tracker.show_mission_details(&params).await? {
                    Some(mission) => {
                        if self.json {
                            self.print_json(&mission)
                        } else {
                            self.render(&mission.to_string())
                        }
                    }
                    None => self.render_not_found("Mission", params.id),
                }
            }
            MissionCommands::Update(args) => {
                let actor = self.require_actor()?;
                let params = args.into_params(actor);
                match self.tracker.update_mission_validated(&params).await? {
                    Some(mission) => {
                        if self.json {
                            self.print_json(&mission)
                        } else {
                            self.render(&UpdateResult::new(mission).to_string())
                        }
                    }
                    None => self.render_not_found("Mission", params.id),
                }
            }
            MissionCommands::Delete(args) => {
                let actor = self.require_actor()?;
                let params = args.into_params(actor);
                match self.tracker.remove_mission(&params).await? {
                    Some(mission) => {
                        if self.json {
                            self.print_json(&mission)
                        } else {
                            self.render(&DeleteResult::new(mission).to_string())
                        }
                    }
                    None => self.render_not_found("Mission", params.id),
                }
            }
        }
    }

    /// Handle member subcommands.
    pub async fn handle_member_command(&self, command: MemberCommands) -> Result<()> {
        match command {
            MemberCommands::Add(args) => {
                let actor = self.require_actor()?;
                let member = self
                    .tracker
                    .add_member_validated(&args.into_params(actor))
                    .await?;
                if self.json {
                    self.print_json(&member)
                } else {
                    self.render(&CreateResult::new(member).to_string())
                }
            }
            MemberCommands::SetRole(args) => {
                let actor = self.require_actor()?;
                let member = self
                    .tracker
                    .change_member_role_validated(&args.into_params(actor))
                    .await?;
                if self.json {
                    self.print_json(&member)
                } else {
                    self.render(&UpdateResult::new(member).to_string())
                }
            }
            MemberCommands::Remove(args) => {
                let actor = self.require_actor()?;
                let params = args.into_params(actor);
                self.tracker.remove_member_checked(&params).await?;
                self.render(
                    &OperationStatus::success(format!(
                        "Removed user {} from project {}",
                        params.user_id, params.project_id
                    ))
                    .to_string(),
                )
            }
            MemberCommands::List(args) => {
                let members = self.tracker.list_project_members(&args.into()).await?;
                if self.json {
                    self.print_json(&members.0)
                } else {
                    self.render(&members.to_string())
                }
            }
        }
    }

    /// Handle document subcommands.
    pub async fn handle_doc_command(&self, command: DocCommands) -> Result<()> {
        match command {
            DocCommands::Add(args) => {
                let actor = self.require_actor()?;
                let document = self
                    .tracker
                    .attach_document(&args.into_params(actor))
                    .await?;
                if self.json {
                    self.print_json(&document)
                } else {
                    self.render(&CreateResult::new(document).to_string())
                }
            }
            DocCommands::Update(args) => {
                let actor = self.require_actor()?;
                let params = args.into_params(actor);
                match self.tracker.update_document_validated(&params).await? {
                    Some(document) => {
                        if self.json {
                            self.print_json(&document)
                        } else {
                            self.render(&UpdateResult::new(document).to_string())
                        }
                    }
                    None => self.render_not_found("Document", params.id),
                }
            }
            DocCommands::Delete(args) => {
                let actor = self.require_actor()?;
                let params = args.into_params(actor);
                self.tracker.remove_document(&params).await?;
                self.render(
                    &OperationStatus::success(format!("Deleted document {}", params.id))
                        .to_string(),
                )
            }
            DocCommands::List(args) => {
                let documents = self.tracker.list_project_documents(&args.into()).await?;
                if self.json {
                    self.print_json(&documents.0)
                } else {
                    self.render(&documents.to_string())
                }
            }
        }
    }

    /// Handle report subcommands.
    pub async fn handle_report_command(&self, command: ReportCommands) -> Result<()> {
        match command {
            ReportCommands::File(args) => {
                let actor = self.require_actor()?;
                let report = self
                    .tracker
                    .file_report_validated(&args.into_params(actor))
                    .await?;
                if self.json {
                    self.print_json(&report)
                } else {
                    self.render(&CreateResult::new(report).to_string())
                }
            }
            ReportCommands::List(args) => {
                let reports = self.tracker.list_project_reports(&args.into()).await?;
                if self.json {
                    self.print_json(&reports.0)
                } else {
                    self.render(&reports.to_string())
                }
            }
            ReportCommands::Delete(args) => {
                let actor = self.require_actor()?;
                let params = args.into_params(actor);
                self.tracker.remove_report(&params).await?;
                self.render(
                    &OperationStatus::success(format!("Deleted report {}", params.id)).to_string(),
                )
            }
        }
    }

    /// Handle the activity log command.
    pub async fn handle_activity(&self, args: ActivityArgs) -> Result<()> {
        let activity = self.tracker.show_activity(&args.into()).await?;
        if self.json {
            self.print_json(&activity.0)
        } else {
            self.render(&activity.to_string())
        }
    }
}
