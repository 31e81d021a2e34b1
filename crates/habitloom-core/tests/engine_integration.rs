//! Integration tests for the habit engine.
//!
//! Exercises the full workflow from recording completions through streak
//! calculation and daily aggregation, the way a host application drives
//! the engine.

use chrono::NaiveDate;
use habitloom_core::{
    current_streak, longest_streak, stats, CompletionLog, Habit, RecurrenceRule,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn full_habit_workflow() {
    let water = {
        let mut habit = Habit::new("Drink water", RecurrenceRule::Daily);
        habit.target_count = Some(8);
        habit
    };
    let run = Habit::new("Morning run", RecurrenceRule::TimesPerWeek { count: 3 });
    let journal = Habit::new("Journal", RecurrenceRule::Daily);

    let habits = vec![water.clone(), run.clone(), journal.clone()];
    let mut log = CompletionLog::new();

    // Monday 2024-05-13: water logged in three increments, run done,
    // journal skipped.
    let monday = d(2024, 5, 13);
    log.record(&water.id, monday, true, Some(3), None);
    log.record(&water.id, monday, true, Some(3), None);
    log.record(&water.id, monday, true, Some(2), None);
    log.record(&run.id, monday, true, None, Some(25));

    // Water reached its target through partial increments.
    assert!(log.is_completed_on(&water, monday));
    assert!(log.is_completed_on(&run, monday));
    assert!(!log.is_completed_on(&journal, monday));

    // All three are due (Daily, Daily, TimesPerWeek-as-always-due).
    let summary = stats::daily_summary(&habits, &log, monday);
    assert_eq!(summary.due, 3);
    assert_eq!(summary.completed, 2);
    assert!((summary.percentage - 200.0 / 3.0).abs() < 1e-9);

    // Tuesday and Wednesday: only water, and under target on Wednesday.
    log.record(&water.id, d(2024, 5, 14), true, Some(8), None);
    log.record(&water.id, d(2024, 5, 15), true, Some(5), None);

    let days = log.completed_days(&water);
    assert_eq!(days.len(), 2); // Wednesday misses the target
    assert_eq!(longest_streak(days.iter().copied()), 2);
    // Evaluated on Wednesday with Wednesday not (fully) done: the streak
    // built through Tuesday still stands.
    assert_eq!(current_streak(days.iter().copied(), d(2024, 5, 15)), 2);

    // Weekly quota: run completed once in the week of May 12-18.
    assert_eq!(stats::weekly_quota_met(&run, &log, monday, 1), Some(false));
    log.record(&run.id, d(2024, 5, 15), true, None, None);
    log.record(&run.id, d(2024, 5, 17), true, None, None);
    assert_eq!(stats::weekly_quota_met(&run, &log, monday, 1), Some(true));
}

#[test]
fn archiving_removes_from_due_but_keeps_history() {
    let mut habit = Habit::new("Stretch", RecurrenceRule::Daily);
    let mut log = CompletionLog::new();
    let today = d(2024, 5, 15);
    log.record(&habit.id, today, true, None, None);

    habit.archive();
    let habits = vec![habit.clone()];
    assert!(stats::due_on(&habits, today).is_empty());
    assert!(log.is_completed_on(&habit, today));
}

#[test]
fn deleting_a_habit_cascades_its_log() {
    let habit = Habit::new("Meditate", RecurrenceRule::Daily);
    let other = Habit::new("Read", RecurrenceRule::Daily);
    let mut log = CompletionLog::new();
    log.record(&habit.id, d(2024, 5, 13), true, None, None);
    log.record(&habit.id, d(2024, 5, 14), true, None, None);
    log.record(&other.id, d(2024, 5, 13), true, None, None);

    let removed = log.remove_habit(&habit.id);
    assert_eq!(removed, 2);
    assert!(log.completed_days(&habit).is_empty());
    assert_eq!(log.completed_days(&other).len(), 1);
}

#[test]
fn every_n_days_habit_over_a_month() {
    let mut habit = Habit::new("Water plants", RecurrenceRule::EveryNDays { interval: 3 });
    habit.created_at = chrono::TimeZone::from_utc_datetime(
        &chrono::Utc,
        &d(2024, 1, 1).and_hms_opt(8, 0, 0).unwrap(),
    );

    let due: Vec<NaiveDate> = (0..31)
        .map(|offset| d(2024, 1, 1) + chrono::Duration::days(offset))
        .filter(|date| habit.is_due_on(*date))
        .collect();
    assert_eq!(due.first(), Some(&d(2024, 1, 1)));
    assert_eq!(due.get(1), Some(&d(2024, 1, 4)));
    assert_eq!(due.get(2), Some(&d(2024, 1, 7)));
    assert_eq!(due.len(), 11);
}
