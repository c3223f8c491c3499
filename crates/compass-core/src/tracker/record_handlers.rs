//! Document, report, and activity handler workflows for the Tracker.

use jiff::Zoned;
use log::info;

use super::Tracker;
use crate::display::{ActivityLog, Documents, Reports};
use crate::error::Result;
use crate::models::{Document, DocumentUpdateRequest, ProgressReport};
use crate::params::{ActorId, AddDocument, FileReport, Id, UpdateDocument};

impl Tracker {
    /// Handle attaching a document to a project.
    pub async fn attach_document(&self, params: &AddDocument) -> Result<Document> {
        let result = self
            .add_document(
                params.project_id,
                params.actor,
                params.title.clone(),
                params.location.clone(),
                params.note.clone(),
            )
            .await;

        if let Ok(document) = &result {
            info!(
                "User {} attached document {} to project {}",
                params.actor, document.id, document.project_id
            );
        }
        Self::warn_on_denial(result)
    }

    /// Handle listing a project's documents.
    pub async fn list_project_documents(&self, params: &Id) -> Result<Documents> {
        Ok(Documents(self.list_documents(params).await?))
    }

    /// Handle updating a document.
    pub async fn update_document_validated(
        &self,
        params: &UpdateDocument,
    ) -> Result<Option<Document>> {
        let request = DocumentUpdateRequest::from(params.clone());
        let result = self.update_document(params.id, params.actor, request).await;

        if let Ok(Some(document)) = &result {
            info!("User {} updated document {}", params.actor, document.id);
        }
        Self::warn_on_denial(result)
    }

    /// Handle removing a document.
    pub async fn remove_document(&self, params: &ActorId) -> Result<()> {
        let result = self.delete_document(params.id, params.actor).await;

        if result.is_ok() {
            info!("User {} deleted document {}", params.actor, params.id);
        }
        Self::warn_on_denial(result)
    }

    /// Handle filing a progress report.
    ///
    /// The reported-on date defaults to today when the parameter omits it.
    pub async fn file_report_validated(&self, params: &FileReport) -> Result<ProgressReport> {
        let reported_on = match params.validate()? {
            Some(date) => date,
            None => Zoned::now().date(),
        };

        let result = self
            .file_report(
                params.project_id,
                params.actor,
                params.body.clone(),
                reported_on,
            )
            .await;

        if let Ok(report) = &result {
            info!(
                "User {} filed report {} for project {}",
                params.actor, report.id, report.project_id
            );
        }
        Self::warn_on_denial(result)
    }

    /// Handle listing a project's progress reports.
    pub async fn list_project_reports(&self, params: &Id) -> Result<Reports> {
        Ok(Reports(self.list_reports(params).await?))
    }

    /// Handle removing a progress report.
    pub async fn remove_report(&self, params: &ActorId) -> Result<()> {
        let result = self.delete_report(params.id, params.actor).await;

        if result.is_ok() {
            info!("User {} deleted report {}", params.actor, params.id);
        }
        Self::warn_on_denial(result)
    }

    /// Handle showing a project's activity log.
    pub async fn show_activity(&self, params: &Id) -> Result<ActivityLog> {
        Ok(ActivityLog(self.list_activity(params).await?))
    }
}
