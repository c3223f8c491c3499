//! Mission CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{DatabaseResultExt, Result, TrackerError};
use crate::models::{
    Mission, ScheduleUpdateRequest, ScheduleWindow, TrackedAction, TrackedEntity,
};

use super::activity_queries::record_activity;
use super::member_queries::require_mutation_access;
use super::plan_queries::project_id_for_plan;
use super::utils::{date_column, timestamp_column};

const INSERT_MISSION_SQL: &str = "INSERT INTO missions (plan_id, title, description, starts_on, ends_on, completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7)";
const SELECT_MISSION_SQL: &str = "SELECT id, plan_id, title, description, starts_on, ends_on, completed, created_at, updated_at FROM missions WHERE id = ?1";
const SELECT_MISSIONS_BY_PLAN_SQL: &str = "SELECT id, plan_id, title, description, starts_on, ends_on, completed, created_at, updated_at FROM missions WHERE plan_id = ?1 ORDER BY starts_on, id";
const UPDATE_MISSION_SQL: &str = "UPDATE missions SET title = ?1, description = ?2, starts_on = ?3, ends_on = ?4, completed = ?5, updated_at = ?6 WHERE id = ?7";
const UPDATE_PLAN_TIMESTAMP_SQL: &str = "UPDATE plans SET updated_at = ?1 WHERE id = ?2";
const DELETE_MISSION_SQL: &str = "DELETE FROM missions WHERE id = ?1";

pub(crate) fn build_mission_from_row(row: &rusqlite::Row) -> rusqlite::Result<Mission> {
    Ok(Mission {
        id: row.get::<_, i64>(0)? as u64,
        plan_id: row.get::<_, i64>(1)? as u64,
        title: row.get(2)?,
        description: row.get(3)?,
        schedule: ScheduleWindow {
            starts_on: date_column(row, 4)?,
            ends_on: date_column(row, 5)?,
        },
        completed: row.get(6)?,
        created_at: timestamp_column(row, 7)?,
        updated_at: timestamp_column(row, 8)?,
    })
}

/// Load all missions belonging to a plan.
pub(crate) fn load_missions_for_plan(conn: &Connection, plan_id: u64) -> Result<Vec<Mission>> {
    let mut stmt = conn
        .prepare(SELECT_MISSIONS_BY_PLAN_SQL)
        .db_context("Failed to prepare missions query")?;

    let missions = stmt
        .query_map(params![plan_id as i64], build_mission_from_row)
        .db_context("Failed to query missions")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch missions")?;

    Ok(missions)
}

impl super::Database {
    /// Adds a new mission to the specified plan.
    ///
    /// Authorization resolves the owning project through the plan.
    pub fn create_mission(
        &mut self,
        plan_id: u64,
        actor: u64,
        title: &str,
        description: Option<&str>,
        window: ScheduleWindow,
    ) -> Result<Mission> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let project_id = match project_id_for_plan(&tx, plan_id)? {
            Some(project_id) => project_id,
            None => return Err(TrackerError::PlanNotFound { id: plan_id }),
        };

        require_mutation_access(&tx, actor, project_id)?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_MISSION_SQL,
            params![
                plan_id as i64,
                title,
                description,
                &window.starts_on.to_string(),
                &window.ends_on.to_string(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert mission")?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(UPDATE_PLAN_TIMESTAMP_SQL, params![&now_str, plan_id as i64])
            .db_context("Failed to update plan timestamp")?;

        record_activity(
            &tx,
            project_id,
            actor,
            TrackedAction::Created,
            TrackedEntity::Mission,
            id,
            Some(title),
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Mission {
            id,
            plan_id,
            title: title.into(),
            description: description.map(String::from),
            schedule: window,
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a single mission by its ID.
    pub fn get_mission(&self, id: u64) -> Result<Option<Mission>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_MISSION_SQL)
            .db_context("Failed to prepare mission query")?;

        let mission = stmt
            .query_row(params![id as i64], build_mission_from_row)
            .optional()
            .db_context("Failed to query mission")?;

        Ok(mission)
    }

    /// Applies a partial update to a mission.
    ///
    /// Returns the updated mission, or `None` if no mission has the given
    /// ID.
    pub fn update_mission(
        &mut self,
        id: u64,
        actor: u64,
        request: &ScheduleUpdateRequest,
    ) -> Result<Option<Mission>> {
        if request.is_empty() {
            return self.get_mission(id);
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(SELECT_MISSION_SQL, params![id as i64], build_mission_from_row)
            .optional()
            .db_context("Failed to query mission")?;

        let Some(current) = current else {
            return Ok(None);
        };

        let project_id = match project_id_for_plan(&tx, current.plan_id)? {
            Some(project_id) => project_id,
            None => return Err(TrackerError::PlanNotFound { id: current.plan_id }),
        };

        require_mutation_access(&tx, actor, project_id)?;

        let title = request.title.clone().unwrap_or(current.title);
        let description = request.description.clone().or(current.description);
        let starts_on = request.starts_on.unwrap_or(current.schedule.starts_on);
        let ends_on = request.ends_on.unwrap_or(current.schedule.ends_on);
        let completed = request.completed.unwrap_or(current.completed);

        if ends_on < starts_on {
            return Err(TrackerError::invalid_input(
                "ends_on",
                "End date must not precede the start date",
            ));
        }

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_MISSION_SQL,
            params![
                &title,
                &description,
                &starts_on.to_string(),
                &ends_on.to_string(),
                completed,
                &now_str,
                id as i64
            ],
        )
        .db_context("Failed to update mission")?;

        tx.execute(
            UPDATE_PLAN_TIMESTAMP_SQL,
            params![&now_str, current.plan_id as i64],
        )
        .db_context("Failed to update plan timestamp")?;

        record_activity(
            &tx,
            project_id,
            actor,
            TrackedAction::Updated,
            TrackedEntity::Mission,
            id,
            Some(&title),
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_mission(id)
    }

    /// Permanently deletes a mission.
    pub fn delete_mission(&mut self, id: u64, actor: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(SELECT_MISSION_SQL, params![id as i64], build_mission_from_row)
            .optional()
            .db_context("Failed to query mission")?;

        let Some(current) = current else {
            return Err(TrackerError::MissionNotFound { id });
        };

        let project_id = match project_id_for_plan(&tx, current.plan_id)? {
            Some(project_id) => project_id,
            None => return Err(TrackerError::PlanNotFound { id: current.plan_id }),
        };

        require_mutation_access(&tx, actor, project_id)?;

        tx.execute(DELETE_MISSION_SQL, params![id as i64])
            .db_context("Failed to delete mission")?;

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_PLAN_TIMESTAMP_SQL,
            params![&now_str, current.plan_id as i64],
        )
        .db_context("Failed to update plan timestamp")?;

        record_activity(
            &tx,
            project_id,
            actor,
            TrackedAction::Deleted,
            TrackedEntity::Mission,
            id,
            Some(&current.title),
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
