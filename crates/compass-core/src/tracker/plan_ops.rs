//! Plan operations for the Tracker.

use super::Tracker;
use crate::error::Result;
use crate::models::{Plan, ScheduleUpdateRequest, ScheduleWindow};
use crate::params::Id;

impl Tracker {
    /// Adds a new plan to a project.
    pub async fn add_plan(
        &self,
        project_id: u64,
        actor: u64,
        title: String,
        description: Option<String>,
        window: ScheduleWindow,
    ) -> Result<Plan> {
        self.with_db(move |db| {
            db.create_plan(project_id, actor, &title, description.as_deref(), window)
        })
        .await
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<Plan>> {
        let plan_id = params.id;
        self.with_db(move |db| db.get_plan(plan_id)).await
    }

    /// Applies a validated partial update to a plan.
    pub async fn update_plan(
        &self,
        id: u64,
        actor: u64,
        request: ScheduleUpdateRequest,
    ) -> Result<Option<Plan>> {
        self.with_db(move |db| db.update_plan(id, actor, &request))
            .await
    }

    /// Permanently deletes a plan and its missions.
    pub async fn delete_plan(&self, id: u64, actor: u64) -> Result<()> {
        self.with_db(move |db| db.delete_plan(id, actor)).await
    }
}
