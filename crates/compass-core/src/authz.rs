//! Ownership/role authorization for project-scoped mutations.
//!
//! The check is a pure function over a member list: no queries, no caching,
//! no clock. Callers load the project's current membership inside the same
//! transaction as the mutation they are guarding, so a membership change
//! takes effect on the very next request.
//!
//! Denial is an expected outcome, not a failure: the decision distinguishes
//! "not a member" from "member without a mutating role" for diagnostics,
//! but both deny.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Member, Role, PRIVILEGED_ROLES};

/// Why a mutation was refused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccessDenial {
    /// No membership record for the user in the project
    NotAMember,

    /// The user is a member but the held role may not mutate
    InsufficientRole {
        /// The role the member actually holds
        held: Role,
    },
}

impl fmt::Display for AccessDenial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessDenial::NotAMember => write!(f, "not a project member"),
            AccessDenial::InsufficientRole { held } => {
                write!(f, "role '{}' may not modify the project", held.as_str())
            }
        }
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The user holds a mutating role in the project
    Granted,

    /// The mutation is refused; the payload says why
    Denied(AccessDenial),
}

impl AccessDecision {
    /// Whether the mutation may proceed.
    pub fn is_authorized(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }

    /// The denial reason, if the decision denies.
    pub fn denial(&self) -> Option<AccessDenial> {
        match self {
            AccessDecision::Granted => None,
            AccessDecision::Denied(denial) => Some(*denial),
        }
    }
}

/// Decide whether `user_id` may mutate entities scoped to `project_id`.
///
/// Scans `members` for a record matching both the user and the project;
/// absence of a match denies (fail-closed), and a match authorizes only if
/// the held role is in `privileged`. The member slice may contain records
/// from other projects; they are ignored.
pub fn authorize_mutation(
    user_id: u64,
    project_id: u64,
    members: &[Member],
    privileged: &[Role],
) -> AccessDecision {
    let record = members
        .iter()
        .find(|m| m.user_id == user_id && m.project_id == project_id);

    match record {
        None => AccessDecision::Denied(AccessDenial::NotAMember),
        Some(member) if privileged.contains(&member.role) => AccessDecision::Granted,
        Some(member) => AccessDecision::Denied(AccessDenial::InsufficientRole {
            held: member.role,
        }),
    }
}

/// [`authorize_mutation`] with the default privileged set
/// ({Owner, Leader, Manager}).
pub fn authorize_default(user_id: u64, project_id: u64, members: &[Member]) -> AccessDecision {
    authorize_mutation(user_id, project_id, members, PRIVILEGED_ROLES)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn member(user_id: u64, project_id: u64, role: Role) -> Member {
        Member {
            user_id,
            project_id,
            role,
            added_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_owner_is_authorized() {
        let members = vec![member(1, 1, Role::Owner)];
        assert_eq!(authorize_default(1, 1, &members), AccessDecision::Granted);
    }

    #[test]
    fn test_leader_and_manager_are_authorized() {
        let members = vec![member(1, 1, Role::Leader), member(2, 1, Role::Manager)];
        assert!(authorize_default(1, 1, &members).is_authorized());
        assert!(authorize_default(2, 1, &members).is_authorized());
    }

    #[test]
    fn test_plain_member_is_denied_with_held_role() {
        let members = vec![member(1, 1, Role::Member)];
        let decision = authorize_default(1, 1, &members);
        assert_eq!(
            decision,
            AccessDecision::Denied(AccessDenial::InsufficientRole { held: Role::Member })
        );
        assert!(!decision.is_authorized());
    }

    #[test]
    fn test_absent_user_fails_closed() {
        let members = vec![member(1, 1, Role::Owner)];
        let decision = authorize_default(2, 1, &members);
        assert_eq!(decision, AccessDecision::Denied(AccessDenial::NotAMember));
    }

    #[test]
    fn test_empty_member_list_fails_closed() {
        let decision = authorize_default(1, 1, &[]);
        assert_eq!(decision, AccessDecision::Denied(AccessDenial::NotAMember));
    }

    #[test]
    fn test_membership_in_other_project_does_not_authorize() {
        // Owner of project 2, but project 1 is being mutated.
        let members = vec![member(1, 2, Role::Owner)];
        let decision = authorize_default(1, 1, &members);
        assert_eq!(decision, AccessDecision::Denied(AccessDenial::NotAMember));
    }

    #[test]
    fn test_custom_privileged_set() {
        let members = vec![member(1, 1, Role::Manager)];
        let owners_only = [Role::Owner];
        let decision = authorize_mutation(1, 1, &members, &owners_only);
        assert_eq!(
            decision,
            AccessDecision::Denied(AccessDenial::InsufficientRole {
                held: Role::Manager
            })
        );
    }

    #[test]
    fn test_decision_is_deterministic() {
        let members = vec![member(1, 1, Role::Member), member(2, 1, Role::Owner)];
        let first = authorize_default(2, 1, &members);
        let second = authorize_default(2, 1, &members);
        assert_eq!(first, second);
    }
}
