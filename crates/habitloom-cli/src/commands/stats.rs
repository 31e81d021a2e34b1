//! Progress statistics commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use habitloom_core::{stats, CompletionLog, Config, Habit, JsonStore, RecurrenceRule, Task};
use serde::Serialize;

use super::resolve_date;
use super::task::parse_filter;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Daily completion summary for due habits
    Today {
        /// Day to summarize (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Weekly quota status for times-per-week habits
    Week {
        /// Reference day inside the week (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Goal progress for one habit on one day
    Progress {
        /// Habit ID
        id: String,
        /// Day to evaluate (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Completed/total counts for a task period
    Period {
        /// Filter: today | week | month | quarter | inbox | horizon:<h> | day:<date>
        filter: String,
        /// Reference date for the filter (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Serialize)]
struct WeekRow {
    habit_id: String,
    title: String,
    quota: u32,
    completed: u32,
    met: bool,
}

#[derive(Serialize)]
struct ProgressReport {
    habit_id: String,
    title: String,
    date: NaiveDate,
    progress: f64,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonStore::open()?;
    let config = Config::load()?;
    let habits: Vec<Habit> = store.load(habitloom_core::storage::HABITS_KEY);
    let log: CompletionLog = store.load(habitloom_core::storage::LOG_KEY);

    match action {
        StatsAction::Today { date } => {
            let day = resolve_date(date);
            let summary = stats::daily_summary(&habits, &log, day);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Week { date } => {
            let day = resolve_date(date);
            let rows: Vec<WeekRow> = habits
                .iter()
                .filter(|h| !h.archived)
                .filter_map(|habit| match habit.rule {
                    RecurrenceRule::TimesPerWeek { count } => Some(WeekRow {
                        habit_id: habit.id.clone(),
                        title: habit.title.clone(),
                        quota: count,
                        completed: log.completed_in_week(habit, day, config.week_start),
                        met: stats::weekly_quota_met(habit, &log, day, config.week_start)
                            .unwrap_or(false),
                    }),
                    _ => None,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        StatsAction::Progress { id, date } => {
            let Some(habit) = habits.iter().find(|h| h.id == id) else {
                println!("Habit not found: {id}");
                return Ok(());
            };
            let day = resolve_date(date);
            let report = ProgressReport {
                habit_id: habit.id.clone(),
                title: habit.title.clone(),
                date: day,
                progress: stats::goal_progress(habit, &log, day),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatsAction::Period { filter, date } => {
            let tasks: Vec<Task> = store.load(habitloom_core::storage::TASKS_KEY);
            let filter = parse_filter(&filter)?;
            let reference = resolve_date(date);
            let period = stats::period_stats(&tasks, &filter, reference, config.week_start);
            println!("{}", serde_json::to_string_pretty(&period)?);
        }
    }

    Ok(())
}
