//! Per-habit, per-day completion log.
//!
//! The log holds at most one entry per (habit, calendar day); recording
//! is an idempotent upsert, never an append. Quantity and duration
//! deltas are additive so a day can be built up from partial increments
//! ("drank another glass of water"). Un-completing a day without a delta
//! clears the accumulated duration but keeps the quantity: quantity is
//! accumulate-forward-only, a deliberate asymmetry carried over from the
//! original tracking behavior.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::date::week_window;

use super::Habit;

/// One day's record for one habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Whether the day was marked done
    pub completed: bool,
    /// Accumulated quantity for the day (e.g. glasses, pages)
    #[serde(default)]
    pub quantity: u32,
    /// Accumulated duration for the day, in minutes
    #[serde(default)]
    pub duration_min: u32,
    /// When the entry was last touched
    pub logged_at: DateTime<Utc>,
}

/// Completion log for all habits.
///
/// Dates are calendar days ([`NaiveDate`]); callers flooring instants to
/// days before recording is an invariant of every date-keyed structure
/// in this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionLog {
    #[serde(default)]
    entries: HashMap<String, BTreeMap<NaiveDate, LogEntry>>,
}

impl CompletionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or update the entry for (`habit_id`, `date`).
    ///
    /// - an existing entry is updated in place; `quantity_delta` and
    ///   `duration_delta` are added to the running totals
    /// - `completed = false` with no delta clears the day's accumulated
    ///   duration (quantity is kept, see module docs)
    /// - a missing entry is only created when `completed = true`;
    ///   un-completing a day that was never logged is a no-op
    pub fn record(
        &mut self,
        habit_id: &str,
        date: NaiveDate,
        completed: bool,
        quantity_delta: Option<u32>,
        duration_delta: Option<u32>,
    ) {
        if let Some(entry) = self
            .entries
            .get_mut(habit_id)
            .and_then(|days| days.get_mut(&date))
        {
            entry.completed = completed;
            if let Some(quantity) = quantity_delta {
                entry.quantity = entry.quantity.saturating_add(quantity);
            }
            if let Some(duration) = duration_delta {
                entry.duration_min = entry.duration_min.saturating_add(duration);
            }
            if !completed && quantity_delta.is_none() && duration_delta.is_none() {
                entry.duration_min = 0;
            }
            entry.logged_at = Utc::now();
            return;
        }

        // No entry yet: only a completion may materialize one. The outer
        // per-habit bucket must not be touched on the no-op path either,
        // or un-completing unknown ids would leak empty buckets into the
        // persisted log.
        if !completed {
            log::debug!("ignoring un-complete for '{habit_id}' on {date}: no entry");
            return;
        }
        self.entries.entry(habit_id.to_string()).or_default().insert(
            date,
            LogEntry {
                completed: true,
                quantity: quantity_delta.unwrap_or(0),
                duration_min: duration_delta.unwrap_or(0),
                logged_at: Utc::now(),
            },
        );
    }

    /// The entry for (`habit_id`, `date`), if any.
    pub fn entry(&self, habit_id: &str, date: NaiveDate) -> Option<&LogEntry> {
        self.entries.get(habit_id).and_then(|days| days.get(&date))
    }

    /// Whether the habit counts as completed on `date`.
    ///
    /// The raw completed flag is necessary but not always sufficient:
    /// when the habit declares a quantity target the day's running
    /// quantity must reach it, and otherwise when it declares a duration
    /// target the logged minutes must reach that. With both targets set
    /// the quantity target is authoritative.
    pub fn is_completed_on(&self, habit: &Habit, date: NaiveDate) -> bool {
        let Some(entry) = self.entry(&habit.id, date) else {
            return false;
        };
        if !entry.completed {
            return false;
        }
        if let Some(target) = habit.target_count.filter(|t| *t > 0) {
            return entry.quantity >= target;
        }
        if let Some(target) = habit.target_duration_min.filter(|t| *t > 0) {
            return entry.duration_min >= target;
        }
        true
    }

    /// The distinct calendar days on which the habit counts as
    /// completed, in ascending order. Input for the streak calculator.
    pub fn completed_days(&self, habit: &Habit) -> BTreeSet<NaiveDate> {
        self.entries
            .get(&habit.id)
            .map(|days| {
                days.keys()
                    .copied()
                    .filter(|day| self.is_completed_on(habit, *day))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// How many days in the week containing `reference` count as
    /// completed. This is the weekly-aggregate side of `TimesPerWeek`
    /// compliance.
    pub fn completed_in_week(&self, habit: &Habit, reference: NaiveDate, week_start_day: u8) -> u32 {
        let (start, end) = week_window(reference, week_start_day);
        self.entries
            .get(&habit.id)
            .map(|days| {
                days.range(start..end)
                    .filter(|(day, _)| self.is_completed_on(habit, **day))
                    .count() as u32
            })
            .unwrap_or(0)
    }

    /// Remove every entry for `habit_id` (cascade on habit deletion).
    /// Returns the number of entries removed.
    pub fn remove_habit(&mut self, habit_id: &str) -> usize {
        self.entries
            .remove(habit_id)
            .map(|days| days.len())
            .unwrap_or(0)
    }

    /// Total number of entries across all habits.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    /// Whether the log holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
