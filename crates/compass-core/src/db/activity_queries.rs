//! Activity log append and read operations.

use jiff::Timestamp;
use rusqlite::{params, Connection};

use crate::error::{DatabaseResultExt, Result, TrackerError};
use crate::models::{ActivityEntry, TrackedAction, TrackedEntity};

use super::utils::{enum_column, timestamp_column};

const INSERT_ACTIVITY_SQL: &str = "INSERT INTO activity (project_id, actor_id, action, entity, entity_id, detail, recorded_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_ACTIVITY_SQL: &str = "SELECT id, project_id, actor_id, action, entity, entity_id, detail, recorded_at FROM activity WHERE project_id = ?1 ORDER BY id DESC";
const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";

fn build_entry_from_row(row: &rusqlite::Row) -> rusqlite::Result<ActivityEntry> {
    Ok(ActivityEntry {
        id: row.get::<_, i64>(0)? as u64,
        project_id: row.get::<_, i64>(1)? as u64,
        actor_id: row.get::<_, i64>(2)? as u64,
        action: enum_column::<TrackedAction>(row, 3)?,
        entity: enum_column::<TrackedEntity>(row, 4)?,
        entity_id: row.get::<_, i64>(5)? as u64,
        detail: row.get(6)?,
        recorded_at: timestamp_column(row, 7)?,
    })
}

/// Append one audit entry.
///
/// Runs on the caller's connection so the append commits or rolls back with
/// the mutation it records.
pub(crate) fn record_activity(
    conn: &Connection,
    project_id: u64,
    actor_id: u64,
    action: TrackedAction,
    entity: TrackedEntity,
    entity_id: u64,
    detail: Option<&str>,
) -> Result<()> {
    conn.execute(
        INSERT_ACTIVITY_SQL,
        params![
            project_id as i64,
            actor_id as i64,
            action.as_str(),
            entity.as_str(),
            entity_id as i64,
            detail,
            &Timestamp::now().to_string()
        ],
    )
    .db_context("Failed to record activity")?;

    Ok(())
}

impl super::Database {
    /// Lists a project's activity log, newest entries first.
    pub fn list_activity(&self, project_id: u64) -> Result<Vec<ActivityEntry>> {
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
            .prepare(SELECT_ACTIVITY_SQL)
            .db_context("Failed to prepare activity query")?;

        let entries = stmt
            .query_map(params![project_id as i64], build_entry_from_row)
            .db_context("Failed to query activity")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch activity")?;

        Ok(entries)
    }
}
