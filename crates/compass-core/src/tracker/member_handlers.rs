//! User and membership handler workflows for the Tracker.

use log::info;

use super::Tracker;
use crate::display::{Members, Users};
use crate::error::Result;
use crate::models::{Member, User};
use crate::params::{AddMember, ChangeMemberRole, Id, RegisterUser, RemoveMember};

impl Tracker {
    /// Handle registering a new user.
    pub async fn register_user(&self, params: &RegisterUser) -> Result<User> {
        let user = self.create_user(params.username.clone()).await?;
        info!("Registered user {} '{}'", user.id, user.username);
        Ok(user)
    }

    /// Handle listing all registered users.
    pub async fn list_all_users(&self) -> Result<Users> {
        Ok(Users(self.list_users().await?))
    }

    /// Handle listing a project's members.
    pub async fn list_project_members(&self, params: &Id) -> Result<Members> {
        Ok(Members(self.list_members(params).await?))
    }

    /// Handle adding a member to a project with role validation.
    pub async fn add_member_validated(&self, params: &AddMember) -> Result<Member> {
        let role = params.validate()?;
        let result = self
            .add_member(params.project_id, params.actor, params.user_id, role)
            .await;

        if let Ok(member) = &result {
            info!(
                "User {} added user {} to project {} as {}",
                params.actor,
                member.user_id,
                member.project_id,
                member.role.as_str()
            );
        }
        Self::warn_on_denial(result)
    }

    /// Handle changing a member's role with role validation.
    pub async fn change_member_role_validated(&self, params: &ChangeMemberRole) -> Result<Member> {
        let role = params.validate()?;
        let result = self
            .change_member_role(params.project_id, params.actor, params.user_id, role)
            .await;

        if let Ok(member) = &result {
            info!(
                "User {} changed user {}'s role in project {} to {}",
                params.actor,
                member.user_id,
                member.project_id,
                member.role.as_str()
            );
        }
        Self::warn_on_denial(result)
    }

    /// Handle removing a member from a project.
    ///
    /// Removal takes effect immediately: the next mutation attempt by the
    /// removed user re-reads membership and fails closed.
    pub async fn remove_member_checked(&self, params: &RemoveMember) -> Result<()> {
        let result = self
            .remove_member(params.project_id, params.actor, params.user_id)
            .await;

        if result.is_ok() {
            info!(
                "User {} removed user {} from project {}",
                params.actor, params.user_id, params.project_id
            );
        }
        Self::warn_on_denial(result)
    }
}
