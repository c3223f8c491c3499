//! Document, report, and activity operations for the Tracker.

use jiff::civil::Date;

use super::Tracker;
use crate::error::Result;
use crate::models::{ActivityEntry, Document, DocumentUpdateRequest, ProgressReport};
use crate::params::Id;

impl Tracker {
    /// Attaches a document to a project.
    pub async fn add_document(
        &self,
        project_id: u64,
        actor: u64,
        title: String,
        location: String,
        note: Option<String>,
    ) -> Result<Document> {
        self.with_db(move |db| {
            db.add_document(project_id, actor, &title, &location, note.as_deref())
        })
        .await
    }

    /// Lists the documents attached to a project.
    pub async fn list_documents(&self, params: &Id) -> Result<Vec<Document>> {
        let project_id = params.id;
        self.with_db(move |db| db.list_documents(project_id)).await
    }

    /// Applies a validated partial update to a document.
    pub async fn update_document(
        &self,
        id: u64,
        actor: u64,
        request: DocumentUpdateRequest,
    ) -> Result<Option<Document>> {
        self.with_db(move |db| db.update_document(id, actor, &request))
            .await
    }

    /// Permanently deletes a document.
    pub async fn delete_document(&self, id: u64, actor: u64) -> Result<()> {
        self.with_db(move |db| db.delete_document(id, actor)).await
    }

    /// Files a progress report authored by the actor.
    pub async fn file_report(
        &self,
        project_id: u64,
        actor: u64,
        body: String,
        reported_on: Date,
    ) -> Result<ProgressReport> {
        self.with_db(move |db| db.file_report(project_id, actor, &body, reported_on))
            .await
    }

    /// Lists a project's progress reports.
    pub async fn list_reports(&self, params: &Id) -> Result<Vec<ProgressReport>> {
        let project_id = params.id;
        self.with_db(move |db| db.list_reports(project_id)).await
    }

    /// Permanently deletes a progress report.
    pub async fn delete_report(&self, id: u64, actor: u64) -> Result<()> {
        self.with_db(move |db| db.delete_report(id, actor)).await
    }

    /// Lists a project's activity log, newest entries first.
    pub async fn list_activity(&self, params: &Id) -> Result<Vec<ActivityEntry>> {
        let project_id = params.id;
        self.with_db(move |db| db.list_activity(project_id)).await
    }
}
