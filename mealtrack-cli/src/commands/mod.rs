use chrono::{Local, NaiveDate};

mod copy;
mod data;
mod day;
mod goals;
mod log;
mod plan;

pub use copy::CopyCommand;
pub use data::{ExportCommand, ImportCommand};
pub use day::DayCommand;
pub use goals::GoalsCommand;
pub use log::{LogCommand, RemoveCommand};
pub use plan::PlanCommand;

/// Parse a `YYYY-MM-DD` argument, defaulting to today in local time.
pub(crate) fn parse_date_arg(date: &Option<String>) -> Result<NaiveDate, String> {
    match date {
        Some(s) => s
            .parse()
            .map_err(|_| format!("Invalid date '{}'. Expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}
