//! Mission operations for the Tracker.

use super::Tracker;
use crate::error::Result;
use crate::models::{Mission, ScheduleUpdateRequest, ScheduleWindow};
use crate::params::Id;

impl Tracker {
    /// Adds a new mission to a plan.
    pub async fn add_mission(
        &self,
        plan_id: u64,
        actor: u64,
        title: String,
        description: Option<String>,
        window: ScheduleWindow,
    ) -> Result<Mission> {
        self.with_db(move |db| {
            db.create_mission(plan_id, actor, &title, description.as_deref(), window)
        })
        .await
    }

    /// Retrieves a mission by its ID.
    pub async fn get_mission(&self, params: &Id) -> Result<Option<Mission>> {
        let mission_id = params.id;
        self.with_db(move |db| db.get_mission(mission_id)).await
    }

    /// Applies a validated partial update to a mission.
    pub async fn update_mission(
        &self,
        id: u64,
        actor: u64,
        request: ScheduleUpdateRequest,
    ) -> Result<Option<Mission>> {
        self.with_db(move |db| db.update_mission(id, actor, &request))
            .await
    }

    /// Permanently deletes a mission.
    pub async fn delete_mission(&self, id: u64, actor: u64) -> Result<()> {
        self.with_db(move |db| db.delete_mission(id, actor)).await
    }
}
