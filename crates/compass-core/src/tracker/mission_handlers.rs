//! Mission handler workflows for the Tracker.

use log::info;

use super::Tracker;
use crate::error::Result;
use crate::models::{Mission, ScheduleUpdateRequest};
use crate::params::{ActorId, CreateMission, Id, UpdateMission};

impl Tracker {
    /// Handle adding a mission to a plan.
    pub async fn add_mission_to_plan(&self, params: &CreateMission) -> Result<Mission> {
        let window = params.validate()?;
        let result = self
            .add_mission(
                params.plan_id,
                params.actor,
                params.title.clone(),
                params.description.clone(),
                window,
            )
            .await;

        if let Ok(mission) = &result {
            info!(
                "User {} added mission {} to plan {}",
                params.actor, mission.id, mission.plan_id
            );
        }
        Self::warn_on_denial(result)
    }

    /// Handle showing a specific mission.
    pub async fn show_mission_details(&self, params: &Id) -> Result<Option<Mission>> {
        self.get_mission(params).await
    }

    /// Handle updating a mission with validation.
    pub async fn update_mission_validated(&self, params: &UpdateMission) -> Result<Option<Mission>> {
        let request = ScheduleUpdateRequest::try_from(params.clone())?;
        let result = self.update_mission(params.id, params.actor, request).await;

        if let Ok(Some(mission)) = &result {
            info!("User {} updated mission {}", params.actor, mission.id);
        }
        Self::warn_on_denial(result)
    }

    /// Handle removing a mission.
    ///
    /// Uses get-before-delete so the caller receives the removed mission's
    /// details, or `None` if the mission doesn't exist.
    pub async fn remove_mission(&self, params: &ActorId) -> Result<Option<Mission>> {
        let id_params = Id { id: params.id };
        let mission = self.get_mission(&id_params).await?;

        if mission.is_some() {
            Self::warn_on_denial(self.delete_mission(params.id, params.actor).await)?;
            info!("User {} deleted mission {}", params.actor, params.id);
        }

        Ok(mission)
    }
}
