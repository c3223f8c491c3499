//! Tests for the tracker module.

use tempfile::TempDir;

use super::*;
use crate::authz::AccessDenial;
use crate::models::{Role, Status, TrackedAction, TrackedEntity};
use crate::params::{
    ActorId, AddDocument, AddMember, ChangeMemberRole, CreateMission, CreatePlan, CreateProject,
    DeleteProject, FileReport, Id, ListProjects, RegisterUser, RemoveMember, UpdateProject,
};

/// Helper to create a test tracker backed by a temp database.
async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Helper to register a user and return its ID.
async fn register(tracker: &Tracker, username: &str) -> u64 {
    tracker
        .register_user(&RegisterUser {
            username: username.to_string(),
        })
        .await
        .expect("Failed to register user")
        .id
}

/// Helper to create a project owned by `actor` with a wide-open window.
async fn create_project(tracker: &Tracker, actor: u64, title: &str) -> u64 {
    tracker
        .create_project_result(&CreateProject {
            actor,
            title: title.to_string(),
            description: None,
            starts_on: "2024-01-01".to_string(),
            ends_on: "2099-01-01".to_string(),
        })
        .await
        .expect("Failed to create project")
        .id
}

#[tokio::test]
async fn test_create_project_records_owner_membership() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;

    let project = tracker
        .create_project_result(&CreateProject {
            actor: ada,
            title: "Launch".to_string(),
            description: Some("Q3 launch".to_string()),
            starts_on: "2024-01-01".to_string(),
            ends_on: "2024-06-01".to_string(),
        })
        .await
        .expect("Failed to create project");

    assert_eq!(project.members.len(), 1);
    assert_eq!(project.members[0].user_id, ada);
    assert_eq!(project.members[0].role, Role::Owner);

    // Creation is audited.
    let activity = tracker
        .show_activity(&Id { id: project.id })
        .await
        .expect("Failed to list activity");
    assert_eq!(activity.0.len(), 1);
    assert_eq!(activity.0[0].action, TrackedAction::Created);
    assert_eq!(activity.0[0].entity, TrackedEntity::Project);
}

#[tokio::test]
async fn test_create_project_requires_registered_actor() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker
        .create_project_result(&CreateProject {
            actor: 999,
            title: "Ghost".to_string(),
            description: None,
            starts_on: "2024-01-01".to_string(),
            ends_on: "2024-06-01".to_string(),
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        TrackerError::UserNotFound { id: 999 }
    ));
}

#[tokio::test]
async fn test_non_member_mutation_fails_closed() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;
    let eve = register(&tracker, "eve").await;
    let project_id = create_project(&tracker, ada, "Launch").await;

    let result = tracker
        .update_project_validated(&UpdateProject {
            id: project_id,
            actor: eve,
            title: Some("Hijacked".to_string()),
            ..Default::default()
        })
        .await;

    match result.unwrap_err() {
        TrackerError::AccessDenied {
            user_id,
            project_id: denied_project,
            denial,
        } => {
            assert_eq!(user_id, eve);
            assert_eq!(denied_project, project_id);
            assert_eq!(denial, AccessDenial::NotAMember);
        }
        other => panic!("Expected AccessDenied, got {other:?}"),
    }

    // The denied mutation must leave no trace: title unchanged, no
    // activity entry beyond the creation one.
    let project = tracker
        .show_project(&Id { id: project_id })
        .await
        .expect("Failed to show project")
        .expect("Project should exist");
    assert_eq!(project.title, "Launch");

    let activity = tracker
        .show_activity(&Id { id: project_id })
        .await
        .expect("Failed to list activity");
    assert_eq!(activity.0.len(), 1);
}

#[tokio::test]
async fn test_plain_member_cannot_mutate() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;
    let bob = register(&tracker, "bob").await;
    let project_id = create_project(&tracker, ada, "Launch").await;

    tracker
        .add_member_validated(&AddMember {
            project_id,
            actor: ada,
            user_id: bob,
            role: "member".to_string(),
        })
        .await
        .expect("Failed to add member");

    let result = tracker
        .update_project_validated(&UpdateProject {
            id: project_id,
            actor: bob,
            completed: Some(true),
            ..Default::default()
        })
        .await;

    match result.unwrap_err() {
        TrackerError::AccessDenied { denial, .. } => {
            assert_eq!(
                denial,
                AccessDenial::InsufficientRole { held: Role::Member }
            );
        }
        other => panic!("Expected AccessDenied, got {other:?}"),
    }
}

#[tokio::test]
async fn test_promoted_member_can_mutate() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;
    let bob = register(&tracker, "bob").await;
    let project_id = create_project(&tracker, ada, "Launch").await;

    tracker
        .add_member_validated(&AddMember {
            project_id,
            actor: ada,
            user_id: bob,
            role: "leader".to_string(),
        })
        .await
        .expect("Failed to add member");

    let updated = tracker
        .update_project_validated(&UpdateProject {
            id: project_id,
            actor: bob,
            title: Some("Relaunch".to_string()),
            ..Default::default()
        })
        .await
        .expect("Leader should be authorized")
        .expect("Project should exist");

    assert_eq!(updated.title, "Relaunch");
}

#[tokio::test]
async fn test_member_removal_revokes_access_immediately() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;
    let bob = register(&tracker, "bob").await;
    let project_id = create_project(&tracker, ada, "Launch").await;

    tracker
        .add_member_validated(&AddMember {
            project_id,
            actor: ada,
            user_id: bob,
            role: "manager".to_string(),
        })
        .await
        .expect("Failed to add member");

    tracker
        .remove_member_checked(&RemoveMember {
            project_id,
            actor: ada,
            user_id: bob,
        })
        .await
        .expect("Failed to remove member");

    // Membership is re-read on every mutation, so the revocation is
    // effective on bob's very next attempt.
    let result = tracker
        .update_project_validated(&UpdateProject {
            id: project_id,
            actor: bob,
            completed: Some(true),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        TrackerError::AccessDenied {
            denial: AccessDenial::NotAMember,
            ..
        }
    ));
}

#[tokio::test]
async fn test_change_member_role() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;
    let bob = register(&tracker, "bob").await;
    let project_id = create_project(&tracker, ada, "Launch").await;

    tracker
        .add_member_validated(&AddMember {
            project_id,
            actor: ada,
            user_id: bob,
            role: "member".to_string(),
        })
        .await
        .expect("Failed to add member");

    let member = tracker
        .change_member_role_validated(&ChangeMemberRole {
            project_id,
            actor: ada,
            user_id: bob,
            role: "manager".to_string(),
        })
        .await
        .expect("Failed to change role");

    assert_eq!(member.role, Role::Manager);
}

#[tokio::test]
async fn test_duplicate_membership_rejected() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;
    let bob = register(&tracker, "bob").await;
    let project_id = create_project(&tracker, ada, "Launch").await;

    tracker
        .add_member_validated(&AddMember {
            project_id,
            actor: ada,
            user_id: bob,
            role: "member".to_string(),
        })
        .await
        .expect("Failed to add member");

    let result = tracker
        .add_member_validated(&AddMember {
            project_id,
            actor: ada,
            user_id: bob,
            role: "leader".to_string(),
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        TrackerError::InvalidInput { .. }
    ));
}

#[tokio::test]
async fn test_plan_and_mission_lifecycle() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;
    let project_id = create_project(&tracker, ada, "Launch").await;

    let plan = tracker
        .add_plan_to_project(&CreatePlan {
            project_id,
            actor: ada,
            title: "Design".to_string(),
            description: None,
            starts_on: "2024-01-01".to_string(),
            ends_on: "2024-03-01".to_string(),
        })
        .await
        .expect("Failed to add plan");

    let mission = tracker
        .add_mission_to_plan(&CreateMission {
            plan_id: plan.id,
            actor: ada,
            title: "Wireframes".to_string(),
            description: Some("All key screens".to_string()),
            starts_on: "2024-01-01".to_string(),
            ends_on: "2024-02-01".to_string(),
        })
        .await
        .expect("Failed to add mission");

    let shown = tracker
        .show_project(&Id { id: project_id })
        .await
        .expect("Failed to show project")
        .expect("Project should exist");
    assert_eq!(shown.plans.len(), 1);
    assert_eq!(shown.plans[0].missions.len(), 1);
    assert_eq!(shown.plans[0].missions[0].title, "Wireframes");

    let removed = tracker
        .remove_mission(&ActorId {
            id: mission.id,
            actor: ada,
        })
        .await
        .expect("Failed to remove mission")
        .expect("Mission should exist");
    assert_eq!(removed.id, mission.id);

    let shown = tracker
        .show_plan_with_missions(&Id { id: plan.id })
        .await
        .expect("Failed to show plan")
        .expect("Plan should exist");
    assert!(shown.missions.is_empty());
}

#[tokio::test]
async fn test_list_projects_summary_counts_and_status() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;
    let project_id = create_project(&tracker, ada, "Launch").await;

    tracker
        .add_plan_to_project(&CreatePlan {
            project_id,
            actor: ada,
            title: "Design".to_string(),
            description: None,
            starts_on: "2024-01-01".to_string(),
            ends_on: "2024-03-01".to_string(),
        })
        .await
        .expect("Failed to add plan");

    let summaries = tracker
        .list_projects_summary(&ListProjects::default())
        .await
        .expect("Failed to list projects");

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].title, "Launch");
    assert_eq!(summaries[0].total_plans, 1);
    assert_eq!(summaries[0].completed_plans, 0);
    assert_eq!(summaries[0].member_count, 1);
    // The helper creates windows that span well past the test's run date.
    assert_eq!(summaries[0].status, Status::InProgress);
}

#[tokio::test]
async fn test_list_projects_summary_status_filter() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;
    create_project(&tracker, ada, "Running").await;

    // A degenerate window always derives NotSelected.
    tracker
        .create_project_result(&CreateProject {
            actor: ada,
            title: "Unscheduled".to_string(),
            description: None,
            starts_on: "2024-01-01".to_string(),
            ends_on: "2024-01-01".to_string(),
        })
        .await
        .expect("Failed to create project");

    let unscheduled = tracker
        .list_projects_summary(&ListProjects {
            status: Some("not_selected".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to list projects");

    assert_eq!(unscheduled.len(), 1);
    assert_eq!(unscheduled[0].title, "Unscheduled");
}

#[tokio::test]
async fn test_list_projects_summary_member_filter() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;
    let bob = register(&tracker, "bob").await;
    create_project(&tracker, ada, "Ada's").await;
    create_project(&tracker, bob, "Bob's").await;

    let bobs = tracker
        .list_projects_summary(&ListProjects {
            member: Some(bob),
            ..Default::default()
        })
        .await
        .expect("Failed to list projects");

    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs[0].title, "Bob's");
}

#[tokio::test]
async fn test_delete_project_requires_confirmation() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;
    let project_id = create_project(&tracker, ada, "Launch").await;

    let result = tracker
        .delete_project_confirmed(&DeleteProject {
            id: project_id,
            actor: ada,
            confirmed: false,
        })
        .await;

    match result.unwrap_err() {
        TrackerError::InvalidInput { field, .. } => assert_eq!(field, "confirmed"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }

    // Still there.
    assert!(tracker
        .show_project(&Id { id: project_id })
        .await
        .expect("Failed to show project")
        .is_some());
}

#[tokio::test]
async fn test_delete_project_cascades() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;
    let project_id = create_project(&tracker, ada, "Launch").await;

    let plan = tracker
        .add_plan_to_project(&CreatePlan {
            project_id,
            actor: ada,
            title: "Design".to_string(),
            description: None,
            starts_on: "2024-01-01".to_string(),
            ends_on: "2024-03-01".to_string(),
        })
        .await
        .expect("Failed to add plan");

    let deleted = tracker
        .delete_project_confirmed(&DeleteProject {
            id: project_id,
            actor: ada,
            confirmed: true,
        })
        .await
        .expect("Failed to delete project")
        .expect("Project should exist");
    assert_eq!(deleted.id, project_id);

    assert!(tracker
        .show_project(&Id { id: project_id })
        .await
        .expect("Failed to show project")
        .is_none());
    assert!(tracker
        .show_plan_with_missions(&Id { id: plan.id })
        .await
        .expect("Failed to show plan")
        .is_none());
}

#[tokio::test]
async fn test_documents_and_reports() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;
    let project_id = create_project(&tracker, ada, "Launch").await;

    let document = tracker
        .attach_document(&AddDocument {
            project_id,
            actor: ada,
            title: "Brief".to_string(),
            location: "https://docs.example.com/brief".to_string(),
            note: None,
        })
        .await
        .expect("Failed to attach document");

    let report = tracker
        .file_report_validated(&FileReport {
            project_id,
            actor: ada,
            body: "Design is on track".to_string(),
            reported_on: Some("2024-02-01".to_string()),
        })
        .await
        .expect("Failed to file report");
    assert_eq!(report.author_id, ada);

    let documents = tracker
        .list_project_documents(&Id { id: project_id })
        .await
        .expect("Failed to list documents");
    assert_eq!(documents.0.len(), 1);
    assert_eq!(documents.0[0].id, document.id);

    let reports = tracker
        .list_project_reports(&Id { id: project_id })
        .await
        .expect("Failed to list reports");
    assert_eq!(reports.0.len(), 1);

    tracker
        .remove_document(&ActorId {
            id: document.id,
            actor: ada,
        })
        .await
        .expect("Failed to remove document");

    let documents = tracker
        .list_project_documents(&Id { id: project_id })
        .await
        .expect("Failed to list documents");
    assert!(documents.0.is_empty());
}

#[tokio::test]
async fn test_update_project_rejects_merged_inverted_window() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let ada = register(&tracker, "ada").await;
    let project_id = create_project(&tracker, ada, "Launch").await;

    // Window is 2024-01-01 to 2099-01-01; moving only the end date before
    // the stored start date must be rejected after the merge.
    let result = tracker
        .update_project_validated(&UpdateProject {
            id: project_id,
            actor: ada,
            ends_on: Some("2023-06-01".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        TrackerError::InvalidInput { .. }
    ));
}
