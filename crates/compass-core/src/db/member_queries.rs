//! Membership CRUD operations and the in-transaction mutation guard.

use jiff::Timestamp;
use rusqlite::{params, Connection};

use crate::authz;
use crate::error::{DatabaseResultExt, Result, TrackerError};
use crate::models::{Member, Role, TrackedAction, TrackedEntity};

use super::activity_queries::record_activity;
use super::utils::{enum_column, timestamp_column};

const SELECT_MEMBERS_SQL: &str =
    "SELECT user_id, project_id, role, added_at FROM members WHERE project_id = ?1 ORDER BY added_at";
const INSERT_MEMBER_SQL: &str =
    "INSERT INTO members (project_id, user_id, role, added_at) VALUES (?1, ?2, ?3, ?4)";
const CHECK_MEMBER_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM members WHERE project_id = ?1 AND user_id = ?2)";
const SELECT_MEMBER_SQL: &str =
    "SELECT user_id, project_id, role, added_at FROM members WHERE project_id = ?1 AND user_id = ?2";
const UPDATE_MEMBER_ROLE_SQL: &str =
    "UPDATE members SET role = ?1 WHERE project_id = ?2 AND user_id = ?3";
const DELETE_MEMBER_SQL: &str = "DELETE FROM members WHERE project_id = ?1 AND user_id = ?2";
const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const CHECK_USER_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM users WHERE id = ?1)";

fn build_member_from_row(row: &rusqlite::Row) -> rusqlite::Result<Member> {
    Ok(Member {
        user_id: row.get::<_, i64>(0)? as u64,
        project_id: row.get::<_, i64>(1)? as u64,
        role: enum_column::<Role>(row, 2)?,
        added_at: timestamp_column(row, 3)?,
    })
}

/// Load the current membership of a project.
///
/// Takes a plain connection reference so it composes with open transactions
/// (`Transaction` derefs to `Connection`).
pub(crate) fn load_members(conn: &Connection, project_id: u64) -> Result<Vec<Member>> {
    let mut stmt = conn
        .prepare(SELECT_MEMBERS_SQL)
        .db_context("Failed to prepare membership query")?;

    let members = stmt
        .query_map(params![project_id as i64], build_member_from_row)
        .db_context("Failed to query members")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch members")?;

    Ok(members)
}

/// Refuse the calling mutation unless `actor` holds a mutating role in the
/// project.
///
/// Membership is read fresh from the given connection; when called inside a
/// mutation's transaction this makes the check and the mutation atomic, and
/// guarantees a revoked role is effective on the next request.
pub(crate) fn require_mutation_access(
    conn: &Connection,
    actor: u64,
    project_id: u64,
) -> Result<()> {
    let members = load_members(conn, project_id)?;
    match authz::authorize_default(actor, project_id, &members).denial() {
        None => Ok(()),
        Some(denial) => Err(TrackerError::AccessDenied {
            user_id: actor,
            project_id,
            denial,
        }),
    }
}

impl super::Database {
    /// Lists the members of a project.
    pub fn list_members(&self, project_id: u64) -> Result<Vec<Member>> {
        let exists: bool = self
            .connection
            .query_row(CHECK_PROJECT_EXISTS_SQL, params![project_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check project existence")?;

        if !exists {
            return Err(TrackerError::ProjectNotFound { id: project_id });
        }

        load_members(&self.connection, project_id)
    }

    /// Adds a member to a project with the given role.
    pub fn add_member(
        &mut self,
        project_id: u64,
        actor: u64,
        user_id: u64,
        role: Role,
    ) -> Result<Member> {
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

        let user_exists: bool = tx
            .query_row(CHECK_USER_EXISTS_SQL, params![user_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check user existence")?;
        if !user_exists {
            return Err(TrackerError::UserNotFound { id: user_id });
        }

        let already_member: bool = tx
            .query_row(
                CHECK_MEMBER_EXISTS_SQL,
                params![project_id as i64, user_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check membership")?;
        if already_member {
            return Err(TrackerError::invalid_input(
                "user_id",
                format!("User {user_id} is already a member of project {project_id}"),
            ));
        }

        let now = Timestamp::now();
        tx.execute(
            INSERT_MEMBER_SQL,
            params![
                project_id as i64,
                user_id as i64,
                role.as_str(),
                &now.to_string()
            ],
        )
        .db_context("Failed to insert member")?;

        record_activity(
            &tx,
            project_id,
            actor,
            TrackedAction::Created,
            TrackedEntity::Member,
            user_id,
            Some(role.as_str()),
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Member {
            user_id,
            project_id,
            role,
            added_at: now,
        })
    }

    /// Changes an existing member's role.
    pub fn change_member_role(
        &mut self,
        project_id: u64,
        actor: u64,
        user_id: u64,
        role: Role,
    ) -> Result<Member> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        require_mutation_access(&tx, actor, project_id)?;

        let rows_affected = tx
            .execute(
                UPDATE_MEMBER_ROLE_SQL,
                params![role.as_str(), project_id as i64, user_id as i64],
            )
            .db_context("Failed to update member role")?;

        if rows_affected == 0 {
            return Err(TrackerError::MemberNotFound {
                user_id,
                project_id,
            });
        }

        let member = tx
            .query_row(
                SELECT_MEMBER_SQL,
                params![project_id as i64, user_id as i64],
                build_member_from_row,
            )
            .db_context("Failed to query updated member")?;

        record_activity(
            &tx,
            project_id,
            actor,
            TrackedAction::Updated,
            TrackedEntity::Member,
            user_id,
            Some(role.as_str()),
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(member)
    }

    /// Removes a member from a project.
    pub fn remove_member(&mut self, project_id: u64, actor: u64, user_id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        require_mutation_access(&tx, actor, project_id)?;

        let rows_affected = tx
            .execute(DELETE_MEMBER_SQL, params![project_id as i64, user_id as i64])
            .db_context("Failed to delete member")?;

        if rows_affected == 0 {
            return Err(TrackerError::MemberNotFound {
                user_id,
                project_id,
            });
        }

        record_activity(
            &tx,
            project_id,
            actor,
            TrackedAction::Deleted,
            TrackedEntity::Member,
            user_id,
            None,
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
