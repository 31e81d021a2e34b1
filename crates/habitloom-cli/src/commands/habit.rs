//! Habit management commands for CLI.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use clap::Subcommand;
use habitloom_core::{
    current_streak, longest_streak, CompletionLog, Config, Habit, JsonStore, RecurrenceRule,
};
use serde::Serialize;

use super::resolve_date;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Create {
        /// Habit title
        title: String,
        /// Recurrence rule: daily | days:1,4,6 (1 = Sunday) | weekly:3 | every:2
        #[arg(long, default_value = "daily")]
        rule: String,
        /// Habit description
        #[arg(long)]
        description: Option<String>,
        /// Daily quantity target (e.g. glasses of water)
        #[arg(long)]
        target_count: Option<u32>,
        /// Daily duration target in minutes
        #[arg(long)]
        target_duration: Option<u32>,
    },
    /// List habits
    List {
        /// Include archived habits
        #[arg(long)]
        all: bool,
    },
    /// Get habit details
    Get {
        /// Habit ID
        id: String,
    },
    /// Record progress for a day
    Log {
        /// Habit ID
        id: String,
        /// Day to log (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Quantity to add to the day's running total
        #[arg(long)]
        quantity: Option<u32>,
        /// Minutes to add to the day's running total
        #[arg(long)]
        duration: Option<u32>,
        /// Mark the day as not done instead
        #[arg(long)]
        undone: bool,
    },
    /// Show current and longest streak
    Streak {
        /// Habit ID
        id: String,
        /// Evaluate as of this day (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Archive a habit, keeping its history
    Archive {
        /// Habit ID
        id: String,
    },
    /// Delete a habit and its log entries
    Delete {
        /// Habit ID
        id: String,
    },
}

#[derive(Serialize)]
struct StreakReport {
    habit_id: String,
    title: String,
    current: u32,
    longest: u32,
}

/// Parse a `--rule` argument.
///
/// Accepted forms: `daily`, `days:1,4,6` (1 = Sunday), `weekly:3`,
/// `every:2`.
pub fn parse_rule(raw: &str) -> Result<RecurrenceRule, String> {
    if raw == "daily" {
        return Ok(RecurrenceRule::Daily);
    }
    if let Some(list) = raw.strip_prefix("days:") {
        let days: BTreeSet<u8> = list
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<u8>()
                    .map_err(|_| format!("invalid weekday '{part}'"))
            })
            .collect::<Result<_, _>>()?;
        return Ok(RecurrenceRule::DaysOfWeek { days });
    }
    if let Some(count) = raw.strip_prefix("weekly:") {
        let count = count
            .parse::<u32>()
            .map_err(|_| format!("invalid weekly count '{count}'"))?;
        return Ok(RecurrenceRule::TimesPerWeek { count });
    }
    if let Some(interval) = raw.strip_prefix("every:") {
        let interval = interval
            .parse::<u32>()
            .map_err(|_| format!("invalid interval '{interval}'"))?;
        return Ok(RecurrenceRule::EveryNDays { interval });
    }
    Err(format!(
        "unknown rule '{raw}' (expected daily, days:1,4, weekly:3, or every:2)"
    ))
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonStore::open()?;
    let config = Config::load()?;
    let mut habits: Vec<Habit> = store.load(habitloom_core::storage::HABITS_KEY);

    match action {
        HabitAction::Create {
            title,
            rule,
            description,
            target_count,
            target_duration,
        } => {
            let rule = parse_rule(&rule)?;
            let mut habit = Habit::new(title, rule);
            habit.description = description;
            habit.target_count = target_count;
            habit.target_duration_min = target_duration;
            habit.validate()?;

            println!("Habit created: {}", habit.id);
            println!("{}", serde_json::to_string_pretty(&habit)?);
            habits.push(habit);
            store.save(habitloom_core::storage::HABITS_KEY, &habits)?;
        }
        HabitAction::List { all } => {
            let visible: Vec<&Habit> = habits
                .iter()
                .filter(|h| all || config.show_archived || !h.archived)
                .collect();
            println!("{}", serde_json::to_string_pretty(&visible)?);
        }
        HabitAction::Get { id } => match habits.iter().find(|h| h.id == id) {
            Some(habit) => println!("{}", serde_json::to_string_pretty(habit)?),
            None => println!("Habit not found: {id}"),
        },
        HabitAction::Log {
            id,
            date,
            quantity,
            duration,
            undone,
        } => {
            let Some(habit) = habits.iter().find(|h| h.id == id) else {
                log::warn!("log requested for unknown habit '{id}'");
                println!("Habit not found: {id}");
                return Ok(());
            };
            let day = resolve_date(date);
            let mut log_book: CompletionLog = store.load(habitloom_core::storage::LOG_KEY);
            log_book.record(&habit.id, day, !undone, quantity, duration);
            store.save(habitloom_core::storage::LOG_KEY, &log_book)?;

            match log_book.entry(&habit.id, day) {
                Some(entry) => println!("{}", serde_json::to_string_pretty(entry)?),
                None => println!("No entry for {day}"),
            }
        }
        HabitAction::Streak { id, date } => {
            let Some(habit) = habits.iter().find(|h| h.id == id) else {
                println!("Habit not found: {id}");
                return Ok(());
            };
            let day = resolve_date(date);
            let log_book: CompletionLog = store.load(habitloom_core::storage::LOG_KEY);
            let days = log_book.completed_days(habit);
            let report = StreakReport {
                habit_id: habit.id.clone(),
                title: habit.title.clone(),
                current: current_streak(days.iter().copied(), day),
                longest: longest_streak(days.iter().copied()),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        HabitAction::Archive { id } => {
            match habits.iter_mut().find(|h| h.id == id) {
                Some(habit) => {
                    habit.archive();
                    println!("Habit archived: {id}");
                    store.save(habitloom_core::storage::HABITS_KEY, &habits)?;
                }
                None => {
                    log::warn!("archive requested for unknown habit '{id}'");
                    println!("Habit not found: {id}");
                }
            }
        }
        HabitAction::Delete { id } => {
            let before = habits.len();
            habits.retain(|h| h.id != id);
            if habits.len() == before {
                log::warn!("delete requested for unknown habit '{id}'");
                println!("Habit not found: {id}");
                return Ok(());
            }
            let mut log_book: CompletionLog = store.load(habitloom_core::storage::LOG_KEY);
            let removed = log_book.remove_habit(&id);
            store.save(habitloom_core::storage::HABITS_KEY, &habits)?;
            store.save(habitloom_core::storage::LOG_KEY, &log_book)?;
            println!("Habit deleted: {id} ({removed} log entries removed)");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rule_accepts_all_forms() {
        assert_eq!(parse_rule("daily").unwrap(), RecurrenceRule::Daily);
        assert_eq!(
            parse_rule("days:1,4,6").unwrap(),
            RecurrenceRule::DaysOfWeek {
                days: [1u8, 4, 6].into_iter().collect()
            }
        );
        assert_eq!(
            parse_rule("weekly:3").unwrap(),
            RecurrenceRule::TimesPerWeek { count: 3 }
        );
        assert_eq!(
            parse_rule("every:2").unwrap(),
            RecurrenceRule::EveryNDays { interval: 2 }
        );
    }

    #[test]
    fn parse_rule_rejects_garbage() {
        assert!(parse_rule("sometimes").is_err());
        assert!(parse_rule("days:x").is_err());
        assert!(parse_rule("weekly:").is_err());
        assert!(parse_rule("every:-1").is_err());
    }
}
