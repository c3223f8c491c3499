use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    ActivityArgs, DocCommands, MemberCommands, MissionCommands, PlanCommands, ProjectCommands,
    ReportCommands, UserCommands,
};

/// Main command-line interface for the Compass project tracker
///
/// Compass tracks projects, their plans, and each plan's missions, along
/// with project members, documents, progress reports, and an audit log.
/// Lifecycle statuses are derived from each entity's schedule window and
/// completion flag every time it is read. Mutations are authorized against
/// the acting user's project role, so most write commands need `--user`.
#[derive(Parser)]
#[command(version, about, name = "cps")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/compass/compass.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// ID of the acting user (required for mutations)
    #[arg(long, global = true, env = "COMPASS_USER")]
    pub user: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of rendered markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Compass CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage users
    #[command(alias = "u")]
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Manage plans within projects
    #[command(alias = "pl")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage missions within plans
    #[command(alias = "m")]
    Mission {
        #[command(subcommand)]
        command: MissionCommands,
    },
    /// Manage project members
    Member {
        #[command(subcommand)]
        command: MemberCommands,
    },
    /// Manage project documents
    Doc {
        #[command(subcommand)]
        command: DocCommands,
    },
    /// Manage progress reports
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Show a project's activity log
    #[command(alias = "log")]
    Activity(ActivityArgs),
}
