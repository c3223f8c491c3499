//! Tests for the data models, centered on the status derivation rules.

use jiff::civil::{date, Date};

use super::*;

fn window(starts_on: Date, ends_on: Date) -> ScheduleWindow {
    ScheduleWindow { starts_on, ends_on }
}

#[test]
fn test_degenerate_window_is_not_selected() {
    let w = window(date(2024, 1, 1), date(2024, 1, 1));
    let today = date(2024, 6, 1);

    // The completion flag is irrelevant for a degenerate window.
    assert_eq!(w.status_on(false, today), Status::NotSelected);
    assert_eq!(w.status_on(true, today), Status::NotSelected);
}

#[test]
fn test_degenerate_window_wins_over_waiting() {
    let w = window(date(2024, 6, 1), date(2024, 6, 1));
    // Today precedes the window, but the degenerate check has priority.
    assert_eq!(w.status_on(false, date(2024, 1, 1)), Status::NotSelected);
}

#[test]
fn test_before_window_is_waiting() {
    let w = window(date(2024, 6, 1), date(2024, 12, 1));
    assert_eq!(w.status_on(false, date(2024, 1, 1)), Status::Waiting);
    assert_eq!(w.status_on(true, date(2024, 1, 1)), Status::Waiting);
}

#[test]
fn test_day_before_start_is_waiting() {
    let w = window(date(2024, 6, 1), date(2024, 12, 1));
    assert_eq!(w.status_on(false, date(2024, 5, 31)), Status::Waiting);
}

#[test]
fn test_inside_window_is_in_progress() {
    let w = window(date(2024, 1, 1), date(2024, 12, 1));
    assert_eq!(w.status_on(false, date(2024, 6, 1)), Status::InProgress);
}

#[test]
fn test_start_day_is_in_progress() {
    let w = window(date(2024, 1, 1), date(2024, 12, 1));
    assert_eq!(w.status_on(false, date(2024, 1, 1)), Status::InProgress);
}

#[test]
fn test_last_day_before_end_is_in_progress() {
    let w = window(date(2024, 1, 1), date(2024, 12, 1));
    assert_eq!(w.status_on(false, date(2024, 11, 30)), Status::InProgress);
}

#[test]
fn test_past_deadline_incomplete_is_behind_schedule() {
    let w = window(date(2024, 1, 1), date(2024, 6, 1));
    assert_eq!(w.status_on(false, date(2024, 7, 1)), Status::BehindSchedule);
}

#[test]
fn test_end_day_incomplete_is_behind_schedule() {
    let w = window(date(2024, 1, 1), date(2024, 6, 1));
    assert_eq!(w.status_on(false, date(2024, 6, 1)), Status::BehindSchedule);
}

#[test]
fn test_past_deadline_completed_is_completed_early() {
    let w = window(date(2024, 1, 1), date(2024, 6, 1));
    assert_eq!(w.status_on(true, date(2024, 7, 1)), Status::CompletedEarly);
}

#[test]
fn test_end_day_completed_is_finished_on_time() {
    let w = window(date(2024, 1, 1), date(2024, 6, 1));
    assert_eq!(w.status_on(true, date(2024, 6, 1)), Status::FinishedOnTime);
}

#[test]
fn test_inverted_window_does_not_panic() {
    // An inverted window is rejected at the parameter boundary, but the
    // derivation itself must stay total over whatever is stored.
    let w = window(date(2024, 6, 1), date(2024, 1, 1));
    assert_eq!(w.status_on(false, date(2023, 12, 1)), Status::Waiting);
    assert_eq!(w.status_on(false, date(2024, 7, 1)), Status::BehindSchedule);
    assert_eq!(w.status_on(true, date(2024, 7, 1)), Status::CompletedEarly);
}

#[test]
fn test_derivation_is_idempotent() {
    let w = window(date(2024, 1, 1), date(2024, 6, 1));
    let today = date(2024, 3, 1);
    assert_eq!(w.status_on(false, today), w.status_on(false, today));
}

#[test]
fn test_status_string_round_trip() {
    let statuses = [
        Status::NotSelected,
        Status::Waiting,
        Status::InProgress,
        Status::CompletedEarly,
        Status::FinishedOnTime,
        Status::BehindSchedule,
        Status::FinishedLate,
    ];
    for status in statuses {
        assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
    }
}

#[test]
fn test_status_from_str_rejects_unknown() {
    assert!("done".parse::<Status>().is_err());
}

#[test]
fn test_role_string_round_trip() {
    for role in [Role::Owner, Role::Leader, Role::Manager, Role::Member] {
        assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
    }
}

#[test]
fn test_privileged_roles() {
    assert!(Role::Owner.is_privileged());
    assert!(Role::Leader.is_privileged());
    assert!(Role::Manager.is_privileged());
    assert!(!Role::Member.is_privileged());
}

#[test]
fn test_entity_status_delegates_to_window() {
    use jiff::Timestamp;

    let mission = Mission {
        id: 1,
        plan_id: 1,
        title: "Ship it".to_string(),
        description: None,
        schedule: window(date(2024, 1, 1), date(2024, 6, 1)),
        completed: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    };

    assert_eq!(mission.status(date(2024, 7, 1)), Status::CompletedEarly);
    assert_eq!(mission.status(date(2024, 3, 1)), Status::InProgress);
}

#[test]
fn test_summary_row_derives_status() {
    use jiff::Timestamp;

    let row = ProjectSummaryRow {
        id: 1,
        title: "Compass".to_string(),
        description: None,
        schedule: window(date(2024, 1, 1), date(2024, 12, 1)),
        completed: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        total_plans: 3,
        completed_plans: 1,
        member_count: 2,
    };

    let summary = row.into_summary(date(2024, 6, 1));
    assert_eq!(summary.status, Status::InProgress);
    assert_eq!(summary.total_plans, 3);
    assert_eq!(summary.completed_plans, 1);
    assert_eq!(summary.member_count, 2);
}
