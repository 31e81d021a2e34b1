//! Streak calculation over sparse sets of completed days.
//!
//! Both functions are pure and tolerate unsorted and duplicate-containing
//! input; days are deduped into an ordered set before scanning.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Longest run of consecutive calendar days in `days`.
///
/// A single day yields 1; no days yield 0.
pub fn longest_streak<I>(days: I) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: BTreeSet<NaiveDate> = days.into_iter().collect();
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for day in days {
        run = match prev {
            Some(p) if (day - p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }
    longest
}

/// Length of the streak ending at (or just before) `today`.
///
/// Walks backward from `today` while each day is present. When `today`
/// itself is absent the walk starts from yesterday instead: a day not
/// yet logged must not zero out the streak built up to yesterday.
pub fn current_streak<I>(days: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: BTreeSet<NaiveDate> = days.into_iter().collect();
    // pred_opt returns None at the calendar floor; the walk just stops.
    let mut cursor = if days.contains(&today) {
        Some(today)
    } else {
        today.pred_opt()
    };
    let mut streak = 0u32;
    while let Some(day) = cursor {
        if !days.contains(&day) {
            break;
        }
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}
