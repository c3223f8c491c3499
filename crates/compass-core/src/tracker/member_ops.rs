//! User and membership operations for the Tracker.

use super::Tracker;
use crate::error::Result;
use crate::models::{Member, Role, User};
use crate::params::Id;

impl Tracker {
    /// Registers a new user.
    pub async fn create_user(&self, username: String) -> Result<User> {
        self.with_db(move |db| db.create_user(&username)).await
    }

    /// Lists all registered users.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.with_db(|db| db.list_users()).await
    }

    /// Lists the members of a project.
    pub async fn list_members(&self, params: &Id) -> Result<Vec<Member>> {
        let project_id = params.id;
        self.with_db(move |db| db.list_members(project_id)).await
    }

    /// Adds a member to a project.
    pub async fn add_member(
        &self,
        project_id: u64,
        actor: u64,
        user_id: u64,
        role: Role,
    ) -> Result<Member> {
        self.with_db(move |db| db.add_member(project_id, actor, user_id, role))
            .await
    }

    /// Changes an existing member's role.
    pub async fn change_member_role(
        &self,
        project_id: u64,
        actor: u64,
        user_id: u64,
        role: Role,
    ) -> Result<Member> {
        self.with_db(move |db| db.change_member_role(project_id, actor, user_id, role))
            .await
    }

    /// Removes a member from a project.
    pub async fn remove_member(&self, project_id: u64, actor: u64, user_id: u64) -> Result<()> {
        self.with_db(move |db| db.remove_member(project_id, actor, user_id))
            .await
    }
}
