//! Plan handler workflows for the Tracker.

use log::info;

use super::Tracker;
use crate::error::Result;
use crate::models::{Plan, ScheduleUpdateRequest};
use crate::params::{ActorId, CreatePlan, Id, UpdatePlan};

impl Tracker {
    /// Handle adding a plan to a project.
    pub async fn add_plan_to_project(&self, params: &CreatePlan) -> Result<Plan> {
        let window = params.validate()?;
        let result = self
            .add_plan(
                params.project_id,
                params.actor,
                params.title.clone(),
                params.description.clone(),
                window,
            )
            .await;

        if let Ok(plan) = &result {
            info!(
                "User {} added plan {} to project {}",
                params.actor, plan.id, plan.project_id
            );
        }
        Self::warn_on_denial(result)
    }

    /// Handle showing a plan with its missions.
    pub async fn show_plan_with_missions(&self, params: &Id) -> Result<Option<Plan>> {
        self.get_plan(params).await
    }

    /// Handle updating a plan with validation.
    pub async fn update_plan_validated(&self, params: &UpdatePlan) -> Result<Option<Plan>> {
        let request = ScheduleUpdateRequest::try_from(params.clone())?;
        let result = self.update_plan(params.id, params.actor, request).await;

        if let Ok(Some(plan)) = &result {
            info!("User {} updated plan {}", params.actor, plan.id);
        }
        Self::warn_on_denial(result)
    }

    /// Handle removing a plan.
    ///
    /// Uses get-before-delete so the caller receives the removed plan's
    /// details, or `None` if the plan doesn't exist.
    pub async fn remove_plan(&self, params: &ActorId) -> Result<Option<Plan>> {
        let id_params = Id { id: params.id };
        let plan = self.get_plan(&id_params).await?;

        if plan.is_some() {
            Self::warn_on_denial(self.delete_plan(params.id, params.actor).await)?;
            info!("User {} deleted plan {}", params.actor, params.id);
        }

        Ok(plan)
    }
}
