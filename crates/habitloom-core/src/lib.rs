//! # Habitloom Core Library
//!
//! This library provides the recurrence and progress engine behind
//! Habitloom: recurring habits with due-date evaluation, a per-day
//! completion log with quantitative progress, streak calculation, and
//! deterministic ordering/filtering of one-shot tasks. All engine
//! functions are pure transformations over in-memory collections owned
//! by the host; persistence is an explicit, caller-invoked side effect
//! through the JSON gateway.
//!
//! ## Key Components
//!
//! - [`RecurrenceRule`]: closed set of recurrence variants with a pure
//!   `is_due_on` evaluator
//! - [`CompletionLog`]: idempotent per-habit, per-day progress records
//! - [`longest_streak`] / [`current_streak`]: streaks over sparse day sets
//! - [`stats`]: due-today, daily percentage, period stats, goal progress
//! - [`TaskFilter`] + [`task::order`]: time-window selection with a
//!   six-key total order
//! - [`JsonStore`] / [`Config`]: collection persistence and TOML settings

pub mod date;
pub mod error;
pub mod habit;
pub mod stats;
pub mod storage;
pub mod task;

pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use habit::log::{CompletionLog, LogEntry};
pub use habit::streak::{current_streak, longest_streak};
pub use habit::{Habit, RecurrenceRule};
pub use stats::{DailySummary, PeriodStats};
pub use storage::{Config, JsonStore};
pub use task::filter::TaskFilter;
pub use task::{GoalHorizon, Task};
