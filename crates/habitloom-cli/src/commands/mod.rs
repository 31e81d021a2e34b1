pub mod config;
pub mod habit;
pub mod stats;
pub mod task;

use chrono::{Local, NaiveDate};

/// Resolve an optional `--date` argument, defaulting to today.
pub fn resolve_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
