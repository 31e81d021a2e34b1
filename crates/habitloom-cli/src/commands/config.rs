//! Configuration commands for CLI.

use clap::Subcommand;
use habitloom_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Set the first day of the week (1 = Sunday .. 7 = Saturday)
    SetWeekStart {
        /// Weekday number
        day: u8,
    },
    /// Toggle whether listings include archived habits
    SetShowArchived {
        /// true or false
        value: bool,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::SetWeekStart { day } => {
            let mut config = Config::load()?;
            config.week_start = day;
            config.save()?;
            println!("week_start = {day}");
        }
        ConfigAction::SetShowArchived { value } => {
            let mut config = Config::load()?;
            config.show_archived = value;
            config.save()?;
            println!("show_archived = {value}");
        }
    }

    Ok(())
}
