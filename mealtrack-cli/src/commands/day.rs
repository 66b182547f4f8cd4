use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use serde::Serialize;

use mealtrack_core::{aggregate, DayContent, FoodCatalog, GoalReport, NutrientTotals};

use super::parse_date_arg;
use crate::config::Config;
use crate::storage;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct DayCommand {
    /// Date (YYYY-MM-DD), defaults to today
    #[arg(long, short)]
    pub date: Option<String>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// JSON shape of a resolved day view.
#[derive(Serialize)]
struct DayView<'a> {
    date: NaiveDate,
    inherited: bool,
    content: &'a DayContent,
    totals: &'a NutrientTotals,
    progress: &'a GoalReport,
}

impl DayCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let date = parse_date_arg(&self.date)?;
        let catalog = storage::load_catalog(&config.catalog_path.value)?;
        let (diary, goals) = storage::load_diary(&config.data_path.value)?;

        let state = diary.day_state(date);
        let content = state.content();
        let totals = aggregate(content, &catalog);
        let progress = GoalReport::compare(&totals, &goals);

        match self.format {
            OutputFormat::Json => {
                let view = DayView {
                    date,
                    inherited: !state.is_explicit(),
                    content,
                    totals: &totals,
                    progress: &progress,
                };
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
            OutputFormat::Text => {
                let header = if state.is_explicit() {
                    format!("{}", date)
                } else {
                    format!("{} (from plan)", date)
                };
                println!("{}", header);
                println!("{}", "=".repeat(header.len()));
                print_day_content(content, &catalog);
                println!();
                print_goal_report(&totals, &progress);
            }
        }
        Ok(())
    }
}

/// Render every slot with resolved food names and per-entry calories.
/// Entries whose food is gone from the catalog are shown but marked.
pub(crate) fn print_day_content(content: &DayContent, catalog: &FoodCatalog) {
    for slot in mealtrack_core::MealSlot::ALL {
        let entries = content.entries(slot);
        println!("\n{}:", slot);
        if entries.is_empty() {
            println!("  (no food logged)");
            continue;
        }
        for entry in entries {
            match catalog.lookup(&entry.food_id) {
                Some(food) => println!(
                    "  - {} x {} ({})  {:.0} kcal  [entry {}]",
                    entry.servings,
                    food.name,
                    food.serving_size,
                    food.calories * entry.servings,
                    entry.id
                ),
                None => println!(
                    "  - {} x {} (not in catalog)  [entry {}]",
                    entry.servings, entry.food_id, entry.id
                ),
            }
        }
    }
}

pub(crate) fn print_goal_report(totals: &NutrientTotals, progress: &GoalReport) {
    println!("Totals: {}", totals);
    for (name, macro_progress) in [
        ("Calories", &progress.calories),
        ("Protein", &progress.protein),
        ("Carbs", &progress.carbs),
        ("Fat", &progress.fat),
    ] {
        println!(
            "  {:<8} {:>7.0} / {:<6.0} {:>3.0}%",
            name,
            macro_progress.consumed,
            macro_progress.goal,
            macro_progress.fraction * 100.0
        );
    }
    if !totals.micronutrients.is_empty() {
        let tags: Vec<&str> = totals.micronutrients.iter().map(String::as_str).collect();
        println!("Micronutrients: {}", tags.join(", "));
    }
}
