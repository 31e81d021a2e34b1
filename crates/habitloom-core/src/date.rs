//! Calendar helpers shared by the recurrence, streak, and filter code.
//!
//! Every date-keyed structure in this crate operates on `NaiveDate`
//! values: instants are floored to their calendar day before they are
//! used as map keys or set members. Weekdays are numbered 1..=7 with
//! **1 = Sunday** (convention carried over from the original data; it is
//! applied consistently here, in the recurrence rules, and in the weekly
//! windows).

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};

/// Floor an instant to its calendar day.
pub fn day_of(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Weekday number for a date: 1 = Sunday .. 7 = Saturday.
pub fn weekday_number(date: NaiveDate) -> u8 {
    (date.weekday().num_days_from_sunday() + 1) as u8
}

/// Whole-day distance from `from` to `to`.
///
/// Negative when `to` precedes `from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Half-open `[start, end)` window of the week containing `date`.
///
/// `week_start_day` uses the same 1 = Sunday numbering as
/// [`weekday_number`]; out-of-range values fall back to Sunday.
pub fn week_window(date: NaiveDate, week_start_day: u8) -> (NaiveDate, NaiveDate) {
    let start_day = if (1..=7).contains(&week_start_day) {
        week_start_day
    } else {
        1
    };
    let offset = (i64::from(weekday_number(date)) + 7 - i64::from(start_day)) % 7;
    let start = date - Duration::days(offset);
    (start, start + Duration::days(7))
}

/// Whether two dates fall in the same calendar month.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Half-open `[start, start + 3 months)` window beginning at `date`.
pub fn next_three_months(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = date
        .checked_add_months(Months::new(3))
        .unwrap_or(NaiveDate::MAX);
    (date, end)
}
