//! Plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{DatabaseResultExt, Result, TrackerError};
use crate::models::{
    Plan, ScheduleUpdateRequest, ScheduleWindow, TrackedAction, TrackedEntity,
};

use super::activity_queries::record_activity;
use super::member_queries::require_mutation_access;
use super::mission_queries::load_missions_for_plan;
use super::utils::{date_column, timestamp_column};

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (project_id, title, description, starts_on, ends_on, completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7)";
const SELECT_PLAN_SQL: &str = "SELECT id, project_id, title, description, starts_on, ends_on, completed, created_at, updated_at FROM plans WHERE id = ?1";
const SELECT_PLANS_BY_PROJECT_SQL: &str = "SELECT id, project_id, title, description, starts_on, ends_on, completed, created_at, updated_at FROM plans WHERE project_id = ?1 ORDER BY starts_on, id";
const SELECT_PLAN_PROJECT_SQL: &str = "SELECT project_id FROM plans WHERE id = ?1";
const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const UPDATE_PLAN_SQL: &str = "UPDATE plans SET title = ?1, description = ?2, starts_on = ?3, ends_on = ?4, completed = ?5, updated_at = ?6 WHERE id = ?7";
const UPDATE_PROJECT_TIMESTAMP_SQL: &str = "UPDATE projects SET updated_at = ?1 WHERE id = ?2";
const DELETE_PLAN_MISSIONS_SQL: &str = "DELETE FROM missions WHERE plan_id = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

pub(crate) fn build_plan_from_row(row: &rusqlite::Row) -> rusqlite::Result<Plan> {
    Ok(Plan {
        id: row.get::<_, i64>(0)? as u64,
        project_id: row.get::<_, i64>(1)? as u64,
        title: row.get(2)?,
        description: row.get(3)?,
        schedule: ScheduleWindow {
            starts_on: date_column(row, 4)?,
            ends_on: date_column(row, 5)?,
        },
        completed: row.get(6)?,
        created_at: timestamp_column(row, 7)?,
        updated_at: timestamp_column(row, 8)?,
        missions: Vec::new(),
    })
}

/// Load a project's plans with their missions.
pub(crate) fn load_plans_for_project(conn: &Connection, project_id: u64) -> Result<Vec<Plan>> {
    let mut stmt = conn
        .prepare(SELECT_PLANS_BY_PROJECT_SQL)
        .db_context("Failed to prepare plans query")?;

    let mut plans = stmt
        .query_map(params![project_id as i64], build_plan_from_row)
        .db_context("Failed to query plans")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch plans")?;

    for plan in &mut plans {
        plan.missions = load_missions_for_plan(conn, plan.id)?;
    }

    Ok(plans)
}

/// Resolve the project a plan belongs to.
pub(crate) fn project_id_for_plan(conn: &Connection, plan_id: u64) -> Result<Option<u64>> {
    conn.query_row(SELECT_PLAN_PROJECT_SQL, params![plan_id as i64], |row| {
        row.get::<_, i64>(0).map(|id| id as u64)
    })
    .optional()
    .db_context("Failed to resolve plan's project")
}

impl super::Database {
    /// Adds a new plan to the specified project.
    pub fn create_plan(
        &mut self,
        project_id: u64,
        actor: u64,
        title: &str,
        description: Option<&str>,
        window: ScheduleWindow,
    ) -> Result<Plan> {
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
        let now_str = now.to_string();

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                project_id as i64,
                title,
                description,
                &window.starts_on.to_string(),
                &window.ends_on.to_string(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert plan")?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(
            UPDATE_PROJECT_TIMESTAMP_SQL,
            params![&now_str, project_id as i64],
        )
        .db_context("Failed to update project timestamp")?;

        record_activity(
            &tx,
            project_id,
            actor,
            TrackedAction::Created,
            TrackedEntity::Plan,
            id,
            Some(title),
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plan {
            id,
            project_id,
            title: title.into(),
            description: description.map(String::from),
            schedule: window,
            completed: false,
            created_at: now,
            updated_at: now,
            missions: Vec::new(),
        })
    }

    /// Retrieves a plan by its ID with missions eagerly loaded.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SQL)
            .db_context("Failed to prepare plan query")?;

        let mut plan = stmt
            .query_row(params![id as i64], build_plan_from_row)
            .optional()
            .db_context("Failed to query plan")?;

        if let Some(ref mut plan) = plan {
            plan.missions = load_missions_for_plan(&self.connection, plan.id)?;
        }

        Ok(plan)
    }

    /// Applies a partial update to a plan.
    ///
    /// Returns the updated plan, or `None` if no plan has the given ID.
    pub fn update_plan(
        &mut self,
        id: u64,
        actor: u64,
        request: &ScheduleUpdateRequest,
    ) -> Result<Option<Plan>> {
        if request.is_empty() {
            return self.get_plan(id);
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(SELECT_PLAN_SQL, params![id as i64], build_plan_from_row)
            .optional()
            .db_context("Failed to query plan")?;

        let Some(current) = current else {
            return Ok(None);
        };

        require_mutation_access(&tx, actor, current.project_id)?;

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
            UPDATE_PLAN_SQL,
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
        .db_context("Failed to update plan")?;

        tx.execute(
            UPDATE_PROJECT_TIMESTAMP_SQL,
            params![&now_str, current.project_id as i64],
        )
        .db_context("Failed to update project timestamp")?;

        record_activity(
            &tx,
            current.project_id,
            actor,
            TrackedAction::Updated,
            TrackedEntity::Plan,
            id,
            Some(&title),
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_plan(id)
    }

    /// Permanently deletes a plan and its missions.
    pub fn delete_plan(&mut self, id: u64, actor: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let project_id = match project_id_for_plan(&tx, id)? {
            Some(project_id) => project_id,
            None => return Err(TrackerError::PlanNotFound { id }),
        };

        require_mutation_access(&tx, actor, project_id)?;

        tx.execute(DELETE_PLAN_MISSIONS_SQL, params![id as i64])
            .db_context("Failed to delete plan missions")?;
        tx.execute(DELETE_PLAN_SQL, params![id as i64])
            .db_context("Failed to delete plan")?;

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_PROJECT_TIMESTAMP_SQL,
            params![&now_str, project_id as i64],
        )
        .db_context("Failed to update project timestamp")?;

        record_activity(
            &tx,
            project_id,
            actor,
            TrackedAction::Deleted,
            TrackedEntity::Plan,
            id,
            None,
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
