//! User registry operations.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result, TrackerError};
use crate::models::User;

use super::utils::timestamp_column;

const INSERT_USER_SQL: &str = "INSERT INTO users (username, created_at) VALUES (?1, ?2)";
const CHECK_USERNAME_SQL: &str = "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1)";
const SELECT_USER_SQL: &str = "SELECT id, username, created_at FROM users WHERE id = ?1";
const SELECT_USERS_SQL: &str = "SELECT id, username, created_at FROM users ORDER BY id";

fn build_user_from_row(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get::<_, i64>(0)? as u64,
        username: row.get(1)?,
        created_at: timestamp_column(row, 2)?,
    })
}

impl super::Database {
    /// Registers a new user with a unique username.
    pub fn create_user(&mut self, username: &str) -> Result<User> {
        if username.trim().is_empty() {
            return Err(TrackerError::invalid_input(
                "username",
                "Username must not be empty",
            ));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let taken: bool = tx
            .query_row(CHECK_USERNAME_SQL, params![username], |row| row.get(0))
            .db_context("Failed to check username")?;
        if taken {
            return Err(TrackerError::invalid_input(
                "username",
                format!("Username '{username}' is already registered"),
            ));
        }

        let now = Timestamp::now();
        tx.execute(INSERT_USER_SQL, params![username, &now.to_string()])
            .db_context("Failed to insert user")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(User {
            id,
            username: username.into(),
            created_at: now,
        })
    }

    /// Retrieves a user by ID.
    pub fn get_user(&self, id: u64) -> Result<Option<User>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_USER_SQL)
            .db_context("Failed to prepare user query")?;

        let user = stmt
            .query_row(params![id as i64], build_user_from_row)
            .optional()
            .db_context("Failed to query user")?;

        Ok(user)
    }

    /// Lists all registered users.
    pub fn list_users(&self) -> Result<Vec<User>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_USERS_SQL)
            .db_context("Failed to prepare users query")?;

        let users = stmt
            .query_map([], build_user_from_row)
            .db_context("Failed to query users")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch users")?;

        Ok(users)
    }
}
