//! Aggregation over habits, tasks, and the completion log.
//!
//! Everything here is a pure read over collections the caller owns: what
//! is due on a day, how much of it got done, how far along a
//! quantitative goal is, and whether a weekly quota was met. Percentages
//! are returned as exact ratios; rounding is the presentation layer's
//! job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::habit::log::CompletionLog;
use crate::habit::{Habit, RecurrenceRule};
use crate::task::filter::TaskFilter;
use crate::task::Task;

/// Snapshot of one day's habit progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    /// The day the summary covers
    pub date: NaiveDate,
    /// Habits due on this day (archived excluded)
    pub due: usize,
    /// Due habits that count as completed
    pub completed: usize,
    /// Exact completion ratio × 100, 0.0 when nothing is due
    pub percentage: f64,
}

/// Completed/total counts for a task period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// Matching tasks that are completed
    pub completed: usize,
    /// All matching tasks
    pub total: usize,
}

/// Habits due on `date`, excluding archived ones.
pub fn due_on(habits: &[Habit], date: NaiveDate) -> Vec<&Habit> {
    habits
        .iter()
        .filter(|habit| !habit.archived && habit.is_due_on(date))
        .collect()
}

/// Percentage of due habits completed on `date`, in `[0, 100]`.
///
/// 0.0 when no habits are due (never divides by zero).
pub fn daily_completion_percentage(habits: &[Habit], log: &CompletionLog, date: NaiveDate) -> f64 {
    daily_summary(habits, log, date).percentage
}

/// Build the [`DailySummary`] for `date`.
pub fn daily_summary(habits: &[Habit], log: &CompletionLog, date: NaiveDate) -> DailySummary {
    let due = due_on(habits, date);
    let completed = due
        .iter()
        .filter(|habit| log.is_completed_on(habit, date))
        .count();
    let percentage = if due.is_empty() {
        0.0
    } else {
        completed as f64 / due.len() as f64 * 100.0
    };
    DailySummary {
        date,
        due: due.len(),
        completed,
        percentage,
    }
}

/// Completed/total counts for the tasks matching `filter`.
pub fn period_stats(
    tasks: &[Task],
    filter: &TaskFilter,
    reference: NaiveDate,
    week_start_day: u8,
) -> PeriodStats {
    let mut stats = PeriodStats::default();
    for task in tasks {
        if filter.matches(task, reference, week_start_day) {
            stats.total += 1;
            if task.completed {
                stats.completed += 1;
            }
        }
    }
    stats
}

/// Progress toward the habit's quantitative goal on `date`, in `[0, 1]`.
///
/// Quantity target when set, else duration target, else binary 0/1 from
/// the day's completed flag.
pub fn goal_progress(habit: &Habit, log: &CompletionLog, date: NaiveDate) -> f64 {
    let entry = log.entry(&habit.id, date);
    if let Some(target) = habit.target_count.filter(|t| *t > 0) {
        let quantity = entry.map_or(0, |e| e.quantity);
        return (f64::from(quantity) / f64::from(target)).min(1.0);
    }
    if let Some(target) = habit.target_duration_min.filter(|t| *t > 0) {
        let duration = entry.map_or(0, |e| e.duration_min);
        return (f64::from(duration) / f64::from(target)).min(1.0);
    }
    if entry.is_some_and(|e| e.completed) {
        1.0
    } else {
        0.0
    }
}

/// Whether a `TimesPerWeek` habit met its quota in the week containing
/// `reference`. `None` for every other rule; this is the only place
/// weekly compliance is computed (the per-day predicate always says
/// "due").
pub fn weekly_quota_met(
    habit: &Habit,
    log: &CompletionLog,
    reference: NaiveDate,
    week_start_day: u8,
) -> Option<bool> {
    match habit.rule {
        RecurrenceRule::TimesPerWeek { count } => {
            Some(log.completed_in_week(habit, reference, week_start_day) >= count)
        }
        _ => None,
    }
}
