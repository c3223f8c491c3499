//! Database operations and SQLite management for the tracker.
//!
//! This module provides low-level database operations for projects, plans,
//! missions, members, documents, reports, and the activity log. It handles
//! SQLite connections, schema bootstrap, and specialized query interfaces
//! per entity.
//!
//! Authorization is enforced here: every mutating query re-reads the acting
//! user's membership inside its own transaction (see
//! [`member_queries::require_mutation_access`]) so a revoked role is
//! effective immediately.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod activity_queries;
pub mod document_queries;
pub mod member_queries;
pub mod mission_queries;
pub mod plan_queries;
pub mod project_queries;
pub mod report_queries;
pub mod schema;
pub mod user_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
