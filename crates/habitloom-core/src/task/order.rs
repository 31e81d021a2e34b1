//! Deterministic multi-key ordering for tasks.
//!
//! A single comparator applies the tie-break chain below, each key
//! returning as soon as it discriminates:
//!
//! 1. incomplete before completed
//! 2. important before unimportant (within the same completed state only)
//! 3. items with a due date before items without
//! 4. earlier due date first (calendar-day granularity)
//! 5. higher priority first
//! 6. case-insensitive title order, the final deterministic tiebreak
//!
//! Implemented as one comparator rather than successive sorts so the
//! composition stays associative and a single stable sort suffices.

use std::cmp::Ordering;

use super::Task;

/// Compare two tasks by the fixed tie-break chain.
pub fn compare(a: &Task, b: &Task) -> Ordering {
    // 1. Incomplete before completed (false < true).
    match a.completed.cmp(&b.completed) {
        Ordering::Equal => {}
        other => return other,
    }
    // 2. Important before unimportant.
    match b.important.cmp(&a.important) {
        Ordering::Equal => {}
        other => return other,
    }
    // 3./4. Due-date presence, then the date itself.
    match (a.due_date, b.due_date) {
        (Some(_), None) => return Ordering::Less,
        (None, Some(_)) => return Ordering::Greater,
        (Some(da), Some(db)) => match da.cmp(&db) {
            Ordering::Equal => {}
            other => return other,
        },
        (None, None) => {}
    }
    // 5. Higher priority first.
    match b.priority.cmp(&a.priority) {
        Ordering::Equal => {}
        other => return other,
    }
    // 6. Case-insensitive title.
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

/// Sort tasks in place by [`compare`] (stable).
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(compare);
}
