//! Habit model and recurrence rules.
//!
//! A [`Habit`] is a recurring commitment with a [`RecurrenceRule`] that
//! decides, for any calendar day, whether the habit is due. Rules are a
//! closed set of variants matched exhaustively; there is no dynamic
//! dispatch. Evaluation is pure and works for past and future dates
//! alike (editing and preview both ask about future days).

pub mod log;
pub mod streak;

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::date::{day_of, days_between, weekday_number};
use crate::error::ValidationError;

/// How often a habit recurs.
///
/// Weekdays are numbered 1..=7 with 1 = Sunday, matching
/// [`crate::date::weekday_number`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecurrenceRule {
    /// Due every day.
    Daily,
    /// Due on a fixed set of weekdays.
    DaysOfWeek { days: BTreeSet<u8> },
    /// A weekly quota ("n times per week"). At single-day granularity the
    /// engine cannot know which specific days satisfy the quota, so this
    /// evaluates as due every day; weekly compliance is judged by
    /// [`crate::stats::weekly_quota_met`] against the completed count for
    /// the week, never by this predicate.
    TimesPerWeek { count: u32 },
    /// Due every `interval` days, counted from the habit's creation day.
    EveryNDays { interval: u32 },
}

impl RecurrenceRule {
    /// Whether a habit with this rule, created on `created`, is due on
    /// `date`.
    ///
    /// Pure and side-effect free. An empty `DaysOfWeek` set evaluates as
    /// never due; [`RecurrenceRule::validate`] rejects it before it can
    /// be persisted.
    pub fn is_due_on(&self, date: NaiveDate, created: NaiveDate) -> bool {
        match self {
            RecurrenceRule::Daily => true,
            RecurrenceRule::DaysOfWeek { days } => days.contains(&weekday_number(date)),
            RecurrenceRule::TimesPerWeek { .. } => true,
            RecurrenceRule::EveryNDays { interval } => {
                if date < created {
                    return false;
                }
                let step = i64::from((*interval).max(1));
                days_between(created, date) % step == 0
            }
        }
    }

    /// Check construction-time invariants.
    ///
    /// Callers must reject invalid rules before persisting them; the
    /// evaluator only degrades gracefully (empty set = never due,
    /// interval clamped to 1) so that stale data cannot panic.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            RecurrenceRule::Daily => Ok(()),
            RecurrenceRule::DaysOfWeek { days } => {
                if days.is_empty() {
                    return Err(ValidationError::EmptyDaySet);
                }
                if let Some(&bad) = days.iter().find(|d| !(1..=7).contains(*d)) {
                    return Err(ValidationError::WeekdayOutOfRange(bad));
                }
                Ok(())
            }
            RecurrenceRule::TimesPerWeek { count } => {
                if *count == 0 {
                    return Err(ValidationError::ZeroWeeklyQuota);
                }
                Ok(())
            }
            RecurrenceRule::EveryNDays { interval } => {
                if *interval == 0 {
                    return Err(ValidationError::ZeroInterval);
                }
                Ok(())
            }
        }
    }
}

/// A recurring commitment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier
    pub id: String,
    /// Habit title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Recurrence rule deciding when the habit is due
    pub rule: RecurrenceRule,
    /// Archived habits keep their history but stop counting as due
    #[serde(default)]
    pub archived: bool,
    /// Daily quantity target (e.g. glasses of water); 0/None means the
    /// raw completed flag is enough
    #[serde(default)]
    pub target_count: Option<u32>,
    /// Daily duration target in minutes
    #[serde(default)]
    pub target_duration_min: Option<u32>,
    /// Creation timestamp; `EveryNDays` counts from this day
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with the given rule.
    pub fn new(title: impl Into<String>, rule: RecurrenceRule) -> Self {
        let now = Utc::now();
        Habit {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            rule,
            archived: false,
            target_count: None,
            target_duration_min: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The calendar day the habit was created on.
    pub fn created_day(&self) -> NaiveDate {
        day_of(self.created_at)
    }

    /// Whether the habit's rule fires on `date`.
    ///
    /// Archiving is not considered here; aggregation excludes archived
    /// habits itself.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.rule.is_due_on(date, self.created_day())
    }

    /// Check the habit's invariants before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.rule.validate()
    }

    /// Archive the habit, keeping its log history.
    pub fn archive(&mut self) {
        self.archived = true;
        self.updated_at = Utc::now();
    }

    /// Replace the recurrence rule.
    pub fn set_rule(&mut self, rule: RecurrenceRule) -> Result<(), ValidationError> {
        rule.validate()?;
        self.rule = rule;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn habit_created_on(date: NaiveDate, rule: RecurrenceRule) -> Habit {
        let mut habit = Habit::new("Test", rule);
        habit.created_at = Utc
            .from_utc_datetime(&date.and_hms_opt(9, 30, 0).unwrap());
        habit
    }

    #[test]
    fn daily_is_always_due() {
        let rule = RecurrenceRule::Daily;
        assert!(rule.is_due_on(d(2024, 1, 1), d(2024, 1, 1)));
        assert!(rule.is_due_on(d(2030, 12, 31), d(2024, 1, 1)));
        // Also callable for dates before creation.
        assert!(rule.is_due_on(d(2020, 1, 1), d(2024, 1, 1)));
    }

    #[test]
    fn days_of_week_matches_weekday() {
        // {1, 4} = Sunday and Wednesday
        let rule = RecurrenceRule::DaysOfWeek {
            days: [1u8, 4].into_iter().collect(),
        };
        let created = d(2024, 1, 1);
        assert!(rule.is_due_on(d(2024, 1, 7), created)); // Sunday
        assert!(rule.is_due_on(d(2024, 1, 10), created)); // Wednesday
        assert!(!rule.is_due_on(d(2024, 1, 8), created)); // Monday
    }

    #[test]
    fn empty_day_set_is_never_due() {
        let rule = RecurrenceRule::DaysOfWeek {
            days: BTreeSet::new(),
        };
        for offset in 0..7 {
            let date = d(2024, 1, 7) + chrono::Duration::days(offset);
            assert!(!rule.is_due_on(date, d(2024, 1, 1)));
        }
    }

    #[test]
    fn times_per_week_is_due_every_day() {
        let rule = RecurrenceRule::TimesPerWeek { count: 3 };
        for offset in 0..14 {
            let date = d(2024, 1, 1) + chrono::Duration::days(offset);
            assert!(rule.is_due_on(date, d(2024, 1, 1)));
        }
    }

    #[test]
    fn every_n_days_schedule() {
        // Created 2024-01-01, every 3 days: due 01, 04, 07; not 02, 03.
        let rule = RecurrenceRule::EveryNDays { interval: 3 };
        let created = d(2024, 1, 1);
        assert!(rule.is_due_on(d(2024, 1, 1), created));
        assert!(rule.is_due_on(d(2024, 1, 4), created));
        assert!(rule.is_due_on(d(2024, 1, 7), created));
        assert!(!rule.is_due_on(d(2024, 1, 2), created));
        assert!(!rule.is_due_on(d(2024, 1, 3), created));
    }

    #[test]
    fn every_n_days_never_due_before_creation() {
        let rule = RecurrenceRule::EveryNDays { interval: 3 };
        let created = d(2024, 1, 10);
        assert!(!rule.is_due_on(d(2024, 1, 9), created));
        assert!(!rule.is_due_on(d(2024, 1, 7), created));
        assert!(rule.is_due_on(created, created));
    }

    #[test]
    fn every_n_days_zero_interval_clamps_to_one() {
        let rule = RecurrenceRule::EveryNDays { interval: 0 };
        let created = d(2024, 1, 1);
        assert!(rule.is_due_on(d(2024, 1, 2), created));
        assert!(rule.is_due_on(d(2024, 1, 3), created));
    }

    #[test]
    fn validate_rejects_invalid_rules() {
        assert!(matches!(
            RecurrenceRule::DaysOfWeek {
                days: BTreeSet::new()
            }
            .validate(),
            Err(ValidationError::EmptyDaySet)
        ));
        assert!(matches!(
            RecurrenceRule::DaysOfWeek {
                days: [8u8].into_iter().collect()
            }
            .validate(),
            Err(ValidationError::WeekdayOutOfRange(8))
        ));
        assert!(matches!(
            RecurrenceRule::EveryNDays { interval: 0 }.validate(),
            Err(ValidationError::ZeroInterval)
        ));
        assert!(matches!(
            RecurrenceRule::TimesPerWeek { count: 0 }.validate(),
            Err(ValidationError::ZeroWeeklyQuota)
        ));
        assert!(RecurrenceRule::Daily.validate().is_ok());
    }

    #[test]
    fn habit_due_uses_creation_day() {
        let habit = habit_created_on(d(2024, 1, 1), RecurrenceRule::EveryNDays { interval: 2 });
        assert!(habit.is_due_on(d(2024, 1, 1)));
        assert!(habit.is_due_on(d(2024, 1, 3)));
        assert!(!habit.is_due_on(d(2024, 1, 2)));
        assert!(!habit.is_due_on(d(2023, 12, 31)));
    }

    #[test]
    fn habit_archive_keeps_rule() {
        let mut habit = Habit::new("Read", RecurrenceRule::Daily);
        habit.archive();
        assert!(habit.archived);
        assert!(habit.is_due_on(d(2024, 1, 1)));
    }

    #[test]
    fn set_rule_validates() {
        let mut habit = Habit::new("Read", RecurrenceRule::Daily);
        let err = habit.set_rule(RecurrenceRule::DaysOfWeek {
            days: BTreeSet::new(),
        });
        assert!(err.is_err());
        assert_eq!(habit.rule, RecurrenceRule::Daily);
    }

    #[test]
    fn rule_serialization_round_trip() {
        let rule = RecurrenceRule::DaysOfWeek {
            days: [2u8, 6].into_iter().collect(),
        };
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("days_of_week"));
        let decoded: RecurrenceRule = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, rule);
    }
}
