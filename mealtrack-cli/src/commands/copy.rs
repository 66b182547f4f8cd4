use chrono::Duration;
use clap::Args;

use super::parse_date_arg;
use crate::config::Config;
use crate::storage;

/// Copy one day's effective content onto another day.
///
/// The overwrite confirmation lives here, not in the diary: the diary only
/// answers "would this copy discard explicit content?" and this command
/// decides whether to proceed.
#[derive(Args)]
pub struct CopyCommand {
    /// Destination date (YYYY-MM-DD), defaults to today
    #[arg(long, short)]
    pub date: Option<String>,

    /// Source date (YYYY-MM-DD), defaults to the day before the destination
    #[arg(long, short = 'F')]
    pub from: Option<String>,

    /// Overwrite the destination even if it already has logged food
    #[arg(long, short = 'f')]
    pub force: bool,
}

impl CopyCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let dest = parse_date_arg(&self.date)?;
        let source = match &self.from {
            Some(_) => parse_date_arg(&self.from)?,
            None => dest - Duration::days(1),
        };
        let (mut diary, goals) = storage::load_diary(&config.data_path.value)?;

        let content = diary.resolve(source).clone();
        if content.is_empty() {
            return Err(format!("Nothing to copy: {} has no logged food", source).into());
        }
        if diary.would_overwrite(dest) && !self.force {
            return Err(format!(
                "{} already has logged food; pass --force to overwrite it",
                dest
            )
            .into());
        }

        let copied = content.entry_count();
        diary.replace_day(dest, content);
        storage::save_diary(&config.data_path.value, &diary, &goals)?;

        println!("Copied {} entries from {} to {}", copied, source, dest);
        Ok(())
    }
}
