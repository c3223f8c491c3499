//! High-level tracker API for managing projects, plans, and missions.
//!
//! This module provides the main [`Tracker`] interface for interacting with
//! the Compass project-management system. The tracker is the central
//! coordinator between interface layers and the database, implementing the
//! business workflows for every operation.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (*_handlers)    │───▶│ (*_ops)         │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   validation, status     blocking bridge        persistence +
//!   derivation, logging                           authorization
//! ```
//!
//! Handlers validate parameters, derive statuses with a single clock read
//! per call, and log outcomes; operations bridge onto a blocking thread;
//! the database enforces membership-based authorization inside each
//! mutation's transaction.

use std::path::PathBuf;

use tokio::task;

use crate::db::Database;
use crate::error::{Result, TrackerError};

pub mod builder;
pub mod member_handlers;
pub mod member_ops;
pub mod mission_handlers;
pub mod mission_ops;
pub mod plan_handlers;
pub mod plan_ops;
pub mod project_handlers;
pub mod project_ops;
pub mod record_handlers;
pub mod record_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;

/// Main tracker interface for managing projects and their entities.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    /// Creates a new tracker with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Run a database operation on the blocking thread pool.
    ///
    /// Opens a fresh connection per operation, which also re-runs the
    /// idempotent schema bootstrap.
    pub(crate) async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Log authorization denials before propagating them.
    ///
    /// Denial is an expected outcome; it is surfaced to the caller as a
    /// typed error and recorded at warn level for diagnostics.
    pub(crate) fn warn_on_denial<T>(result: Result<T>) -> Result<T> {
        if let Err(TrackerError::AccessDenied {
            user_id,
            project_id,
            denial,
        }) = &result
        {
            log::warn!("Denied mutation of project {project_id} by user {user_id}: {denial}");
        }
        result
    }
}
