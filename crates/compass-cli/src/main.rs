//! Compass CLI Application
//!
//! Command-line interface for the Compass project-management tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use compass_core::params::ListProjects;
use compass_core::TrackerBuilder;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        user,
        no_color,
        json,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(tracker, renderer, json, user);

    info!("Compass started");

    match command {
        Some(Commands::User { command }) => cli.handle_user_command(command).await,
        Some(Commands::Project { command }) => cli.handle_project_command(command).await,
        Some(Commands::Plan { command }) => cli.handle_plan_command(command).await,
        Some(Commands::Mission { command }) => cli.handle_mission_command(command).await,
        Some(Commands::Member { command }) => cli.handle_member_command(command).await,
        Some(Commands::Doc { command }) => cli.handle_doc_command(command).await,
        Some(Commands::Report { command }) => cli.handle_report_command(command).await,
        Some(Commands::Activity(args)) => cli.handle_activity(args).await,
        None => cli.list_projects(&ListProjects::default()).await,
    }
}
