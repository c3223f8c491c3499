//! Project operations for the Tracker.

use super::Tracker;
use crate::error::Result;
use crate::models::{Project, ProjectFilter, ProjectSummaryRow, ScheduleUpdateRequest, ScheduleWindow};
use crate::params::Id;

impl Tracker {
    /// Creates a new project owned by the acting user.
    pub async fn create_project(
        &self,
        actor: u64,
        title: String,
        description: Option<String>,
        window: ScheduleWindow,
    ) -> Result<Project> {
        self.with_db(move |db| db.create_project(actor, &title, description.as_deref(), window))
            .await
    }

    /// Retrieves a project by its ID.
    pub async fn get_project(&self, params: &Id) -> Result<Option<Project>> {
        let project_id = params.id;
        self.with_db(move |db| db.get_project(project_id)).await
    }

    /// Lists project summary rows with optional filtering.
    pub async fn list_projects(
        &self,
        filter: Option<ProjectFilter>,
    ) -> Result<Vec<ProjectSummaryRow>> {
        self.with_db(move |db| db.list_project_summaries(filter.as_ref()))
            .await
    }

    /// Applies a validated partial update to a project.
    pub async fn update_project(
        &self,
        id: u64,
        actor: u64,
        request: ScheduleUpdateRequest,
    ) -> Result<Option<Project>> {
        self.with_db(move |db| db.update_project(id, actor, &request))
            .await
    }

    /// Permanently deletes a project and everything scoped to it.
    /// This operation cannot be undone.
    pub async fn delete_project(&self, id: u64, actor: u64) -> Result<()> {
        self.with_db(move |db| db.delete_project(id, actor)).await
    }
}
