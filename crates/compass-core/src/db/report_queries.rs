//! Progress report operations and queries.

use jiff::civil::Date;
use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result, TrackerError};
use crate::models::{ProgressReport, TrackedAction, TrackedEntity};

use super::activity_queries::record_activity;
use super::member_queries::require_mutation_access;
use super::utils::{date_column, timestamp_column};

const INSERT_REPORT_SQL: &str = "INSERT INTO reports (project_id, author_id, body, reported_on, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_REPORT_SQL: &str = "SELECT id, project_id, author_id, body, reported_on, created_at FROM reports WHERE id = ?1";
const SELECT_REPORTS_BY_PROJECT_SQL: &str = "SELECT id, project_id, author_id, body, reported_on, created_at FROM reports WHERE project_id = ?1 ORDER BY reported_on DESC, id DESC";
const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const DELETE_REPORT_SQL: &str = "DELETE FROM reports WHERE id = ?1";

fn build_report_from_row(row: &rusqlite::Row) -> rusqlite::Result<ProgressReport> {
    Ok(ProgressReport {
        id: row.get::<_, i64>(0)? as u64,
        project_id: row.get::<_, i64>(1)? as u64,
        author_id: row.get::<_, i64>(2)? as u64,
        body: row.get(3)?,
        reported_on: date_column(row, 4)?,
        created_at: timestamp_column(row, 5)?,
    })
}

impl super::Database {
    /// Files a progress report against a project, authored by the actor.
    pub fn file_report(
        &mut self,
        project_id: u64,
        actor: u64,
        body: &str,
        reported_on: Date,
    ) -> Result<ProgressReport> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let project_exists: bool = tx
            .query_row(CHECK_PROJECT_EXISTS_SQL, params![project_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check project existence")?;
        if !project_exists {
            return Err(TrackerError::ProjectNotFound { id: project_id });
        }

        require_mutation_access(&tx, actor, project_id)?;

        let now = Timestamp::now();
        tx.execute(
            INSERT_REPORT_SQL,
            params![
                project_id as i64,
                actor as i64,
                body,
                &reported_on.to_string(),
                &now.to_string()
            ],
        )
        .db_context("Failed to insert report")?;

        let id = tx.last_insert_rowid() as u64;

        record_activity(
            &tx,
            project_id,
            actor,
            TrackedAction::Created,
            TrackedEntity::Report,
            id,
            None,
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(ProgressReport {
            id,
            project_id,
            author_id: actor,
            body: body.into(),
            reported_on,
            created_at: now,
        })
    }

    /// Lists a project's progress reports, most recent first.
    pub fn list_reports(&self, project_id: u64) -> Result<Vec<ProgressReport>> {
        let exists: bool = self
            .connection
            .query_row(CHECK_PROJECT_EXISTS_SQL, params![project_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check project existence")?;
        if !exists {
            return Err(TrackerError::ProjectNotFound { id: project_id });
        }

        let mut stmt = self
            .connection
            .prepare(SELECT_REPORTS_BY_PROJECT_SQL)
            .db_context("Failed to prepare reports query")?;

        let reports = stmt
            .query_map(params![project_id as i64], build_report_from_row)
            .db_context("Failed to query reports")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch reports")?;

        Ok(reports)
    }

    /// Permanently deletes a progress report.
    pub fn delete_report(&mut self, id: u64, actor: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(SELECT_REPORT_SQL, params![id as i64], build_report_from_row)
            .optional()
            .db_context("Failed to query report")?;

        let Some(current) = current else {
            return Err(TrackerError::invalid_input(
                "id",
                format!("Report {id} not found"),
            ));
        };

        require_mutation_access(&tx, actor, current.project_id)?;

        tx.execute(DELETE_REPORT_SQL, params![id as i64])
            .db_context("Failed to delete report")?;

        record_activity(
            &tx,
            current.project_id,
            actor,
            TrackedAction::Deleted,
            TrackedEntity::Report,
            id,
            None,
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
