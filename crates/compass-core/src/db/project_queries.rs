//! Project CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result, TrackerError};
use crate::models::{
    Member, Project, ProjectFilter, ProjectSummaryRow, Role, ScheduleUpdateRequest,
    ScheduleWindow, TrackedAction, TrackedEntity,
};

use super::activity_queries::record_activity;
use super::member_queries::{load_members, require_mutation_access};
use super::plan_queries::load_plans_for_project;
use super::utils::{date_column, timestamp_column};

const INSERT_PROJECT_SQL: &str = "INSERT INTO projects (title, description, starts_on, ends_on, completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, 0, ?5, ?6)";
const INSERT_OWNER_SQL: &str =
    "INSERT INTO members (project_id, user_id, role, added_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_PROJECT_SQL: &str = "SELECT id, title, description, starts_on, ends_on, completed, created_at, updated_at FROM projects WHERE id = ?1";
const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const CHECK_USER_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM users WHERE id = ?1)";
const UPDATE_PROJECT_SQL: &str = "UPDATE projects SET title = ?1, description = ?2, starts_on = ?3, ends_on = ?4, completed = ?5, updated_at = ?6 WHERE id = ?7";
const DELETE_PROJECT_MISSIONS_SQL: &str =
    "DELETE FROM missions WHERE plan_id IN (SELECT id FROM plans WHERE project_id = ?1)";
const DELETE_PROJECT_PLANS_SQL: &str = "DELETE FROM plans WHERE project_id = ?1";
const DELETE_PROJECT_MEMBERS_SQL: &str = "DELETE FROM members WHERE project_id = ?1";
const DELETE_PROJECT_DOCUMENTS_SQL: &str = "DELETE FROM documents WHERE project_id = ?1";
const DELETE_PROJECT_REPORTS_SQL: &str = "DELETE FROM reports WHERE project_id = ?1";
const DELETE_PROJECT_ACTIVITY_SQL: &str = "DELETE FROM activity WHERE project_id = ?1";
const DELETE_PROJECT_SQL: &str = "DELETE FROM projects WHERE id = ?1";

const SUMMARY_COLUMNS: &str = "id, title, description, starts_on, ends_on, completed, created_at, updated_at, total_plans, completed_plans, member_count";
const SUMMARIES_VIEW: &str = "project_summaries";

pub(crate) fn build_project_from_row(row: &rusqlite::Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        description: row.get(2)?,
        schedule: ScheduleWindow {
            starts_on: date_column(row, 3)?,
            ends_on: date_column(row, 4)?,
        },
        completed: row.get(5)?,
        created_at: timestamp_column(row, 6)?,
        updated_at: timestamp_column(row, 7)?,
        plans: Vec::new(),
        members: Vec::new(),
    })
}

impl super::Database {
    /// Creates a new project and records the acting user as its owner.
    ///
    /// The project row, the owner membership, and the audit entry commit in
    /// one transaction; creation requires no prior membership anywhere.
    pub fn create_project(
        &mut self,
        actor: u64,
        title: &str,
        description: Option<&str>,
        window: ScheduleWindow,
    ) -> Result<Project> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let user_exists: bool = tx
            .query_row(CHECK_USER_EXISTS_SQL, params![actor as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check user existence")?;
        if !user_exists {
            return Err(TrackerError::UserNotFound { id: actor });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PROJECT_SQL,
            params![
                title,
                description,
                &window.starts_on.to_string(),
                &window.ends_on.to_string(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert project")?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(
            INSERT_OWNER_SQL,
            params![id as i64, actor as i64, Role::Owner.as_str(), &now_str],
        )
        .db_context("Failed to insert owner membership")?;

        record_activity(
            &tx,
            id,
            actor,
            TrackedAction::Created,
            TrackedEntity::Project,
            id,
            Some(title),
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Project {
            id,
            title: title.into(),
            description: description.map(String::from),
            schedule: window,
            completed: false,
            created_at: now,
            updated_at: now,
            plans: Vec::new(),
            members: vec![Member {
                user_id: actor,
                project_id: id,
                role: Role::Owner,
                added_at: now,
            }],
        })
    }

    /// Retrieves a project by its ID with plans (including their missions)
    /// and members eagerly loaded.
    pub fn get_project(&self, id: u64) -> Result<Option<Project>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PROJECT_SQL)
            .db_context("Failed to prepare project query")?;

        let mut project = stmt
            .query_row(params![id as i64], build_project_from_row)
            .optional()
            .db_context("Failed to query project")?;

        if let Some(ref mut project) = project {
            project.plans = load_plans_for_project(&self.connection, project.id)?;
            project.members = load_members(&self.connection, project.id)?;
        }

        Ok(project)
    }

    /// Lists project summary rows with optional filtering.
    ///
    /// The derived-status filter is not applied here; status is computed
    /// from the returned rows by the caller.
    pub fn list_project_summaries(
        &self,
        filter: Option<&ProjectFilter>,
    ) -> Result<Vec<ProjectSummaryRow>> {
        let mut query = format!("SELECT {SUMMARY_COLUMNS} FROM {SUMMARIES_VIEW}");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(ref title) = f.title_contains {
                conditions.push("title LIKE ?");
                params_vec.push(Box::new(format!("%{title}%")));
            }

            if let Some(user_id) = f.member {
                conditions.push(
                    "EXISTS(SELECT 1 FROM members m \
                     WHERE m.project_id = project_summaries.id AND m.user_id = ?)",
                );
                params_vec.push(Box::new(user_id as i64));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY created_at DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare summaries query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let rows = stmt
            .query_map(&params_refs[..], |row| {
                Ok(ProjectSummaryRow {
                    id: row.get::<_, i64>(0)? as u64,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    schedule: ScheduleWindow {
                        starts_on: date_column(row, 3)?,
                        ends_on: date_column(row, 4)?,
                    },
                    completed: row.get(5)?,
                    created_at: timestamp_column(row, 6)?,
                    updated_at: timestamp_column(row, 7)?,
                    total_plans: row.get::<_, i64>(8)? as u32,
                    completed_plans: row.get::<_, i64>(9)? as u32,
                    member_count: row.get::<_, i64>(10)? as u32,
                })
            })
            .db_context("Failed to query project summaries")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch project summaries")?;

        Ok(rows)
    }

    /// Applies a partial update to a project.
    ///
    /// Returns the updated project, or `None` if no project has the given
    /// ID. The actor's membership is checked inside the update transaction.
    pub fn update_project(
        &mut self,
        id: u64,
        actor: u64,
        request: &ScheduleUpdateRequest,
    ) -> Result<Option<Project>> {
        if request.is_empty() {
            return self.get_project(id);
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(SELECT_PROJECT_SQL, params![id as i64], build_project_from_row)
            .optional()
            .db_context("Failed to query project")?;

        let Some(current) = current else {
            return Ok(None);
        };

        require_mutation_access(&tx, actor, id)?;

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
            UPDATE_PROJECT_SQL,
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
        .db_context("Failed to update project")?;

        record_activity(
            &tx,
            id,
            actor,
            TrackedAction::Updated,
            TrackedEntity::Project,
            id,
            Some(&title),
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_project(id)
    }

    /// Permanently deletes a project and everything scoped to it.
    /// This operation cannot be undone.
    pub fn delete_project(&mut self, id: u64, actor: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PROJECT_EXISTS_SQL, params![id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check project existence")?;
        if !exists {
            return Err(TrackerError::ProjectNotFound { id });
        }

        require_mutation_access(&tx, actor, id)?;

        // Foreign key cascades would handle most of this, but the deletes
        // are explicit so the cascade order is visible and auditable.
        tx.execute(DELETE_PROJECT_MISSIONS_SQL, params![id as i64])
            .db_context("Failed to delete project missions")?;
        tx.execute(DELETE_PROJECT_PLANS_SQL, params![id as i64])
            .db_context("Failed to delete project plans")?;
        tx.execute(DELETE_PROJECT_MEMBERS_SQL, params![id as i64])
            .db_context("Failed to delete project members")?;
        tx.execute(DELETE_PROJECT_DOCUMENTS_SQL, params![id as i64])
            .db_context("Failed to delete project documents")?;
        tx.execute(DELETE_PROJECT_REPORTS_SQL, params![id as i64])
            .db_context("Failed to delete project reports")?;
        tx.execute(DELETE_PROJECT_ACTIVITY_SQL, params![id as i64])
            .db_context("Failed to delete project activity")?;
        tx.execute(DELETE_PROJECT_SQL, params![id as i64])
            .db_context("Failed to delete project")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
