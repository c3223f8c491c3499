//! Project handler workflows for the Tracker.

use jiff::Zoned;
use log::info;

use super::Tracker;
use crate::display::ProjectSummaries;
use crate::error::{Result, TrackerError};
use crate::models::{Project, ProjectFilter, ProjectSummary, ScheduleUpdateRequest};
use crate::params::{CreateProject, DeleteProject, Id, ListProjects, UpdateProject};

impl Tracker {
    /// Handle creating a new project.
    ///
    /// Validates the schedule window, creates the project, and records the
    /// acting user as its owner.
    pub async fn create_project_result(&self, params: &CreateProject) -> Result<Project> {
        let window = params.validate()?;
        let project = self
            .create_project(
                params.actor,
                params.title.clone(),
                params.description.clone(),
                window,
            )
            .await?;

        info!(
            "User {} created project {} '{}'",
            params.actor, project.id, project.title
        );
        Ok(project)
    }

    /// Handle showing a complete project.
    ///
    /// Retrieves a project with plans, missions, and members eagerly
    /// loaded, or `None` if the project doesn't exist. Statuses are derived
    /// by the display layer from the returned schedule windows.
    pub async fn show_project(&self, params: &Id) -> Result<Option<Project>> {
        self.get_project(params).await
    }

    /// Handle listing projects as summaries.
    ///
    /// Fetches summary rows, derives each project's status with a single
    /// clock read, and applies the derived-status filter afterwards —
    /// status is computed, never stored, so it cannot be filtered in SQL.
    pub async fn list_projects_summary(&self, params: &ListProjects) -> Result<ProjectSummaries> {
        let filter = ProjectFilter::try_from(params)?;
        let wanted_status = filter.status;

        let rows = self.list_projects(Some(filter)).await?;

        let today = Zoned::now().date();
        let summaries: Vec<ProjectSummary> = rows
            .into_iter()
            .map(|row| row.into_summary(today))
            .filter(|summary| wanted_status.map_or(true, |wanted| summary.status == wanted))
            .collect();

        Ok(ProjectSummaries(summaries))
    }

    /// Handle updating a project with validation.
    ///
    /// Parses and validates the patch, then applies it; the storage layer
    /// re-checks the actor's membership inside the update transaction.
    pub async fn update_project_validated(&self, params: &UpdateProject) -> Result<Option<Project>> {
        let request = ScheduleUpdateRequest::try_from(params.clone())?;
        let result = self
            .update_project(params.id, params.actor, request)
            .await;

        if let Ok(Some(project)) = &result {
            info!("User {} updated project {}", params.actor, project.id);
        }
        Self::warn_on_denial(result)
    }

    /// Handle permanently deleting a project with confirmation.
    ///
    /// Requires explicit confirmation via the `confirmed` field to prevent
    /// accidental deletion. Uses get-before-delete so the caller receives
    /// the details of what was removed, or `None` if the project doesn't
    /// exist.
    pub async fn delete_project_confirmed(
        &self,
        params: &DeleteProject,
    ) -> Result<Option<Project>> {
        if !params.confirmed {
            return Err(TrackerError::invalid_input(
                "confirmed",
                "Project deletion requires explicit confirmation. Set 'confirmed' to true to \
                 proceed with permanent deletion.",
            ));
        }

        let id_params = Id { id: params.id };
        let project = self.get_project(&id_params).await?;

        if project.is_some() {
            Self::warn_on_denial(self.delete_project(params.id, params.actor).await)?;
            info!("User {} deleted project {}", params.actor, params.id);
        }

        Ok(project)
    }
}
