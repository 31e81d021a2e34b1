//! Named time-window and goal-horizon filters over tasks.
//!
//! A filter selects tasks matching its predicate relative to a reference
//! day, then hands the result to the deterministic comparator in
//! [`super::order`]; callers never see an unordered selection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::{next_three_months, same_month, week_window};

use super::order;
use super::{GoalHorizon, Task};

/// Which tasks to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskFilter {
    /// Due date falls on the given calendar day.
    OnDay { day: NaiveDate },
    /// Due date is the reference day.
    Today,
    /// Due date within the week containing the reference day.
    ThisWeek,
    /// Due date within the reference month, or tagged with the month
    /// horizon.
    ThisMonth,
    /// Due date in `[reference, reference + 3 months)`.
    NextThreeMonths,
    /// Exactly the given goal horizon; no due-date fallback.
    Horizon { horizon: GoalHorizon },
    /// The inbox: no due date and no horizon.
    Inbox,
}

impl TaskFilter {
    /// Whether `task` matches this filter relative to `reference`.
    ///
    /// `week_start_day` (1 = Sunday) only affects [`TaskFilter::ThisWeek`].
    pub fn matches(&self, task: &Task, reference: NaiveDate, week_start_day: u8) -> bool {
        match self {
            TaskFilter::OnDay { day } => task.due_date == Some(*day),
            TaskFilter::Today => task.due_date == Some(reference),
            TaskFilter::ThisWeek => {
                let (start, end) = week_window(reference, week_start_day);
                task.due_date.is_some_and(|due| start <= due && due < end)
            }
            TaskFilter::ThisMonth => {
                task.due_date.is_some_and(|due| same_month(due, reference))
                    || task.horizon == Some(GoalHorizon::Month)
            }
            TaskFilter::NextThreeMonths => {
                let (start, end) = next_three_months(reference);
                task.due_date.is_some_and(|due| start <= due && due < end)
            }
            TaskFilter::Horizon { horizon } => task.horizon == Some(*horizon),
            TaskFilter::Inbox => task.due_date.is_none() && task.horizon.is_none(),
        }
    }
}

/// Select tasks matching `filter` and return them ordered.
///
/// With `active_only`, completed tasks are dropped before the predicate
/// is applied.
pub fn select_and_order(
    tasks: &[Task],
    filter: &TaskFilter,
    reference: NaiveDate,
    week_start_day: u8,
    active_only: bool,
) -> Vec<Task> {
    let mut selected: Vec<Task> = tasks
        .iter()
        .filter(|task| !(active_only && task.completed))
        .filter(|task| filter.matches(task, reference, week_start_day))
        .cloned()
        .collect();
    order::sort_tasks(&mut selected);
    selected
}
