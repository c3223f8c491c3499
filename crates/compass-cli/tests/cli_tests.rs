//! End-to-end tests for the `cps` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run `cps` against a database file inside the given temp dir.
fn cps(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cps").expect("Failed to find cps binary");
    cmd.env_remove("COMPASS_USER")
        .arg("--database-file")
        .arg(temp_dir.path().join("test.db"))
        .arg("--no-color");
    cmd
}

/// Register a user and return nothing; tests rely on IDs being sequential
/// from 1 in a fresh database.
fn register_user(temp_dir: &TempDir, username: &str) {
    cps(temp_dir)
        .args(["user", "register", username])
        .assert()
        .success();
}

fn create_project(temp_dir: &TempDir, user: &str, title: &str) {
    cps(temp_dir)
        .args([
            "--user",
            user,
            "project",
            "create",
            title,
            "--starts-on",
            "2024-01-01",
            "--ends-on",
            "2099-01-01",
        ])
        .assert()
        .success();
}

#[test]
fn test_register_and_list_users() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    cps(&temp_dir)
        .args(["user", "register", "ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered user with ID: 1"));

    cps(&temp_dir)
        .args(["user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ada"));
}

#[test]
fn test_default_command_lists_projects() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    cps(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn test_create_project_requires_actor() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    register_user(&temp_dir, "ada");

    cps(&temp_dir)
        .args([
            "project",
            "create",
            "Launch",
            "--starts-on",
            "2024-01-01",
            "--ends-on",
            "2024-06-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--user"));
}

#[test]
fn test_create_and_show_project() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    register_user(&temp_dir, "ada");
    create_project(&temp_dir, "1", "Launch");

    cps(&temp_dir)
        .args(["project", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Launch"))
        .stdout(predicate::str::contains("In Progress"))
        .stdout(predicate::str::contains("User 1 (owner)"));
}

#[test]
fn test_unauthorized_update_is_denied() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    register_user(&temp_dir, "ada");
    register_user(&temp_dir, "eve");
    create_project(&temp_dir, "1", "Launch");

    cps(&temp_dir)
        .args([
            "--user",
            "2",
            "project",
            "update",
            "1",
            "--title",
            "Hijacked",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a project member"));

    // Title must be unchanged.
    cps(&temp_dir)
        .args(["project", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Launch"));
}

#[test]
fn test_member_role_gates_mutations() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    register_user(&temp_dir, "ada");
    register_user(&temp_dir, "bob");
    create_project(&temp_dir, "1", "Launch");

    // Bob joins as a plain member: read-only.
    cps(&temp_dir)
        .args(["--user", "1", "member", "add", "1", "2", "--role", "member"])
        .assert()
        .success();

    cps(&temp_dir)
        .args(["--user", "2", "project", "update", "1", "--completed", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("may not modify"));

    // Promoted to leader, the same mutation goes through.
    cps(&temp_dir)
        .args(["--user", "1", "member", "set-role", "1", "2", "leader"])
        .assert()
        .success();

    cps(&temp_dir)
        .args(["--user", "2", "project", "update", "1", "--completed", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated project with ID: 1"));
}

#[test]
fn test_project_delete_requires_confirmation() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    register_user(&temp_dir, "ada");
    create_project(&temp_dir, "1", "Launch");

    cps(&temp_dir)
        .args(["--user", "1", "project", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmation"));

    cps(&temp_dir)
        .args(["--user", "1", "project", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted project 'Launch'"));

    cps(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn test_plan_and_mission_flow() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    register_user(&temp_dir, "ada");
    create_project(&temp_dir, "1", "Launch");

    cps(&temp_dir)
        .args([
            "--user",
            "1",
            "plan",
            "add",
            "1",
            "Design",
            "--starts-on",
            "2024-01-01",
            "--ends-on",
            "2099-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 1"));

    cps(&temp_dir)
        .args([
            "--user",
            "1",
            "mission",
            "add",
            "1",
            "Wireframes",
            "--starts-on",
            "2024-01-01",
            "--ends-on",
            "2099-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created mission with ID: 1"));

    cps(&temp_dir)
        .args(["plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Design"))
        .stdout(predicate::str::contains("Wireframes"));
}

#[test]
fn test_degenerate_window_shows_not_selected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    register_user(&temp_dir, "ada");

    cps(&temp_dir)
        .args([
            "--user",
            "1",
            "project",
            "create",
            "Unscheduled",
            "--starts-on",
            "2024-01-01",
            "--ends-on",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not Selected"));
}

#[test]
fn test_inverted_window_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    register_user(&temp_dir, "ada");

    cps(&temp_dir)
        .args([
            "--user",
            "1",
            "project",
            "create",
            "Backwards",
            "--starts-on",
            "2024-06-01",
            "--ends-on",
            "2024-01-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not precede"));
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    register_user(&temp_dir, "ada");
    create_project(&temp_dir, "1", "Launch");

    let output = cps(&temp_dir)
        .args(["--json", "project", "list"])
        .output()
        .expect("Failed to run cps");
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    let summaries = parsed.as_array().expect("Expected a JSON array");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0]["title"], "Launch");
    assert_eq!(summaries[0]["status"], "in_progress");
}

#[test]
fn test_activity_log_records_mutations() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    register_user(&temp_dir, "ada");
    create_project(&temp_dir, "1", "Launch");

    cps(&temp_dir)
        .args([
            "--user",
            "1",
            "doc",
            "add",
            "1",
            "Brief",
            "https://docs.example.com/brief",
        ])
        .assert()
        .success();

    cps(&temp_dir)
        .args(["activity", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created project"))
        .stdout(predicate::str::contains("created document"));
}
