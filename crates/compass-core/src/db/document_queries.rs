//! Document CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result, TrackerError};
use crate::models::{Document, DocumentUpdateRequest, TrackedAction, TrackedEntity};

use super::activity_queries::record_activity;
use super::member_queries::require_mutation_access;
use super::utils::timestamp_column;

const INSERT_DOCUMENT_SQL: &str = "INSERT INTO documents (project_id, title, location, note, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_DOCUMENT_SQL: &str = "SELECT id, project_id, title, location, note, created_at, updated_at FROM documents WHERE id = ?1";
const SELECT_DOCUMENTS_BY_PROJECT_SQL: &str = "SELECT id, project_id, title, location, note, created_at, updated_at FROM documents WHERE project_id = ?1 ORDER BY id";
const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const UPDATE_DOCUMENT_SQL: &str = "UPDATE documents SET title = ?1, location = ?2, note = ?3, updated_at = ?4 WHERE id = ?5";
const DELETE_DOCUMENT_SQL: &str = "DELETE FROM documents WHERE id = ?1";

fn build_document_from_row(row: &rusqlite::Row) -> rusqlite::Result<Document> {
    Ok(Document {
        id: row.get::<_, i64>(0)? as u64,
        project_id: row.get::<_, i64>(1)? as u64,
        title: row.get(2)?,
        location: row.get(3)?,
        note: row.get(4)?,
        created_at: timestamp_column(row, 5)?,
        updated_at: timestamp_column(row, 6)?,
    })
}

impl super::Database {
    /// Attaches a document to a project.
    pub fn add_document(
        &mut self,
        project_id: u64,
        actor: u64,
        title: &str,
        location: &str,
        note: Option<&str>,
    ) -> Result<Document> {
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
            INSERT_DOCUMENT_SQL,
            params![project_id as i64, title, location, note, &now_str, &now_str],
        )
        .db_context("Failed to insert document")?;

        let id = tx.last_insert_rowid() as u64;

        record_activity(
            &tx,
            project_id,
            actor,
            TrackedAction::Created,
            TrackedEntity::Document,
            id,
            Some(title),
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Document {
            id,
            project_id,
            title: title.into(),
            location: location.into(),
            note: note.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// Lists the documents attached to a project.
    pub fn list_documents(&self, project_id: u64) -> Result<Vec<Document>> {
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
            .prepare(SELECT_DOCUMENTS_BY_PROJECT_SQL)
            .db_context("Failed to prepare documents query")?;

        let documents = stmt
            .query_map(params![project_id as i64], build_document_from_row)
            .db_context("Failed to query documents")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch documents")?;

        Ok(documents)
    }

    /// Applies a partial update to a document.
    ///
    /// Returns the updated document, or `None` if no document has the given
    /// ID.
    pub fn update_document(
        &mut self,
        id: u64,
        actor: u64,
        request: &DocumentUpdateRequest,
    ) -> Result<Option<Document>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(SELECT_DOCUMENT_SQL, params![id as i64], build_document_from_row)
            .optional()
            .db_context("Failed to query document")?;

        let Some(current) = current else {
            return Ok(None);
        };

        require_mutation_access(&tx, actor, current.project_id)?;

        if request.is_empty() {
            return Ok(Some(current));
        }

        let title = request.title.clone().unwrap_or(current.title);
        let location = request.location.clone().unwrap_or(current.location);
        let note = request.note.clone().or(current.note);

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_DOCUMENT_SQL,
            params![&title, &location, &note, &now_str, id as i64],
        )
        .db_context("Failed to update document")?;

        record_activity(
            &tx,
            current.project_id,
            actor,
            TrackedAction::Updated,
            TrackedEntity::Document,
            id,
            Some(&title),
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        let mut stmt = self
            .connection
            .prepare(SELECT_DOCUMENT_SQL)
            .db_context("Failed to prepare document query")?;
        stmt.query_row(params![id as i64], build_document_from_row)
            .optional()
            .db_context("Failed to query updated document")
    }

    /// Permanently deletes a document.
    pub fn delete_document(&mut self, id: u64, actor: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(SELECT_DOCUMENT_SQL, params![id as i64], build_document_from_row)
            .optional()
            .db_context("Failed to query document")?;

        let Some(current) = current else {
            return Err(TrackerError::invalid_input(
                "id",
                format!("Document {id} not found"),
            ));
        };

        require_mutation_access(&tx, actor, current.project_id)?;

        tx.execute(DELETE_DOCUMENT_SQL, params![id as i64])
            .db_context("Failed to delete document")?;

        record_activity(
            &tx,
            current.project_id,
            actor,
            TrackedAction::Deleted,
            TrackedEntity::Document,
            id,
            Some(&current.title),
        )?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
