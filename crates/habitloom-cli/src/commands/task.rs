//! Task management commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use habitloom_core::task::filter::select_and_order;
use habitloom_core::{Config, GoalHorizon, JsonStore, Task, TaskFilter};

use super::resolve_date;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Create {
        /// Task title
        title: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Priority, higher = more urgent
        #[arg(long, default_value = "0")]
        priority: i32,
        /// Mark as important
        #[arg(long)]
        important: bool,
        /// Goal horizon: month, year, 3y, 5y, 10y
        #[arg(long)]
        horizon: Option<String>,
    },
    /// List tasks, filtered and ordered
    List {
        /// Filter: today | week | month | quarter | inbox | horizon:<h> | day:<date>
        #[arg(long)]
        filter: Option<String>,
        /// Reference date for the filter (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Include completed tasks
        #[arg(long)]
        all: bool,
    },
    /// Get task details
    Get {
        /// Task ID
        id: String,
    },
    /// Mark a task complete (or undo with --undo)
    Complete {
        /// Task ID
        id: String,
        /// Revert to not completed
        #[arg(long)]
        undo: bool,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

/// Parse a `--filter` argument.
pub fn parse_filter(raw: &str) -> Result<TaskFilter, String> {
    match raw {
        "today" => return Ok(TaskFilter::Today),
        "week" => return Ok(TaskFilter::ThisWeek),
        "month" => return Ok(TaskFilter::ThisMonth),
        "quarter" => return Ok(TaskFilter::NextThreeMonths),
        "inbox" => return Ok(TaskFilter::Inbox),
        _ => {}
    }
    if let Some(h) = raw.strip_prefix("horizon:") {
        let horizon: GoalHorizon = h.parse().map_err(|e| format!("{e}"))?;
        return Ok(TaskFilter::Horizon { horizon });
    }
    if let Some(day) = raw.strip_prefix("day:") {
        let day: NaiveDate = day
            .parse()
            .map_err(|_| format!("invalid date '{day}' (expected YYYY-MM-DD)"))?;
        return Ok(TaskFilter::OnDay { day });
    }
    Err(format!(
        "unknown filter '{raw}' (expected today, week, month, quarter, inbox, horizon:<h>, day:<date>)"
    ))
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonStore::open()?;
    let config = Config::load()?;
    let mut tasks: Vec<Task> = store.load(habitloom_core::storage::TASKS_KEY);

    match action {
        TaskAction::Create {
            title,
            due,
            priority,
            important,
            horizon,
        } => {
            let mut task = Task::new(title);
            task.due_date = due;
            task.priority = priority;
            task.important = important;
            task.horizon = horizon
                .as_deref()
                .map(|h| h.parse::<GoalHorizon>())
                .transpose()?;

            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
            tasks.push(task);
            store.save(habitloom_core::storage::TASKS_KEY, &tasks)?;
        }
        TaskAction::List { filter, date, all } => {
            let reference = resolve_date(date);
            let selected = match filter {
                Some(raw) => {
                    let filter = parse_filter(&raw)?;
                    select_and_order(&tasks, &filter, reference, config.week_start, !all)
                }
                None => {
                    let mut every: Vec<Task> = tasks
                        .iter()
                        .filter(|t| all || !t.completed)
                        .cloned()
                        .collect();
                    habitloom_core::task::order::sort_tasks(&mut every);
                    every
                }
            };
            println!("{}", serde_json::to_string_pretty(&selected)?);
        }
        TaskAction::Get { id } => match tasks.iter().find(|t| t.id == id) {
            Some(task) => println!("{}", serde_json::to_string_pretty(task)?),
            None => println!("Task not found: {id}"),
        },
        TaskAction::Complete { id, undo } => {
            match tasks.iter_mut().find(|t| t.id == id) {
                Some(task) => {
                    task.set_completed(!undo);
                    println!("{}", serde_json::to_string_pretty(task)?);
                    store.save(habitloom_core::storage::TASKS_KEY, &tasks)?;
                }
                None => {
                    log::warn!("complete requested for unknown task '{id}'");
                    println!("Task not found: {id}");
                }
            }
        }
        TaskAction::Delete { id } => {
            let before = tasks.len();
            tasks.retain(|t| t.id != id);
            if tasks.len() == before {
                log::warn!("delete requested for unknown task '{id}'");
                println!("Task not found: {id}");
                return Ok(());
            }
            store.save(habitloom_core::storage::TASKS_KEY, &tasks)?;
            println!("Task deleted: {id}");
        }
    }

    Ok(())
}
