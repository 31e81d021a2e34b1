//! Task model: scheduled and goal-oriented items.
//!
//! Unlike habits, tasks are one-shot: they carry an optional due date, a
//! priority, an importance flag, and optionally a goal horizon that
//! groups long-term objectives independent of any due date.

pub mod filter;
pub mod order;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Coarse classification for long-term objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalHorizon {
    /// Goals for the current month
    Month,
    /// Goals for the current year
    Year,
    /// Three-year goals
    ThreeYears,
    /// Five-year goals
    FiveYears,
    /// Ten-year goals
    TenYears,
}

impl fmt::Display for GoalHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalHorizon::Month => write!(f, "month"),
            GoalHorizon::Year => write!(f, "year"),
            GoalHorizon::ThreeYears => write!(f, "3y"),
            GoalHorizon::FiveYears => write!(f, "5y"),
            GoalHorizon::TenYears => write!(f, "10y"),
        }
    }
}

impl FromStr for GoalHorizon {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(GoalHorizon::Month),
            "year" => Ok(GoalHorizon::Year),
            "3y" => Ok(GoalHorizon::ThreeYears),
            "5y" => Ok(GoalHorizon::FiveYears),
            "10y" => Ok(GoalHorizon::TenYears),
            other => Err(ValidationError::InvalidValue {
                field: "horizon".to_string(),
                message: format!("unknown horizon '{other}' (expected month, year, 3y, 5y, 10y)"),
            }),
        }
    }
}

/// A scheduled or goal-oriented item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task title
    pub title: String,
    /// Whether the task is completed
    pub completed: bool,
    /// Optional due date (calendar day)
    pub due_date: Option<NaiveDate>,
    /// Priority value, higher = more urgent
    #[serde(default)]
    pub priority: i32,
    /// Important tasks sort ahead of unimportant ones
    #[serde(default)]
    pub important: bool,
    /// Goal horizon tag, independent of the due date
    #[serde(default)]
    pub horizon: Option<GoalHorizon>,
    /// Completion timestamp; set iff `completed` is true
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new, active task.
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
            due_date: None,
            priority: 0,
            important: false,
            horizon: None,
            completed_at: None,
            created_at: Utc::now(),
        }
    }

    /// Toggle completion, stamping or clearing the completion timestamp
    /// in the same step. `completed == true` with no timestamp (or the
    /// reverse) never occurs.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        self.completed_at = if completed { Some(Utc::now()) } else { None };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_active() {
        let task = Task::new("Write report");
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
        assert!(task.due_date.is_none());
        assert_eq!(task.priority, 0);
    }

    #[test]
    fn completion_stamps_and_clears_atomically() {
        let mut task = Task::new("Write report");
        task.set_completed(true);
        assert!(task.completed);
        assert!(task.completed_at.is_some());

        task.set_completed(false);
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn horizon_round_trips_through_strings() {
        for s in ["month", "year", "3y", "5y", "10y"] {
            let horizon: GoalHorizon = s.parse().unwrap();
            assert_eq!(horizon.to_string(), s);
        }
        assert!("decade".parse::<GoalHorizon>().is_err());
    }

    #[test]
    fn task_serialization_round_trip() {
        let mut task = Task::new("Plan trip");
        task.due_date = NaiveDate::from_ymd_opt(2024, 5, 20);
        task.horizon = Some(GoalHorizon::Year);
        task.important = true;

        let json = serde_json::to_string(&task).unwrap();
        let decoded: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, task.id);
        assert_eq!(decoded.due_date, task.due_date);
        assert_eq!(decoded.horizon, Some(GoalHorizon::Year));
        assert!(decoded.important);
    }
}
