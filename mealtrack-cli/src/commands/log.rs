use clap::Args;
use std::str::FromStr;
use uuid::Uuid;

use mealtrack_core::MealSlot;

use super::parse_date_arg;
use crate::config::Config;
use crate::storage;

#[derive(Args)]
pub struct LogCommand {
    /// Catalog food id (e.g. food-3)
    pub food_id: String,

    /// Meal slot (breakfast, lunch, dinner, post-workout, snacks)
    #[arg(long, short)]
    pub slot: String,

    /// Date (YYYY-MM-DD), defaults to today
    #[arg(long, short)]
    pub date: Option<String>,

    /// Number of servings
    #[arg(long, short = 'n', default_value_t = 1.0)]
    pub servings: f64,
}

impl LogCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let date = parse_date_arg(&self.date)?;
        let slot = MealSlot::from_str(&self.slot)?;
        let catalog = storage::load_catalog(&config.catalog_path.value)?;
        let (mut diary, goals) = storage::load_diary(&config.data_path.value)?;

        if catalog.lookup(&self.food_id).is_none() {
            // Still accepted: the catalog can change independently and the
            // aggregator skips entries it cannot resolve.
            eprintln!(
                "Warning: '{}' is not in the food catalog; it will not count toward totals",
                self.food_id
            );
        }

        let entry_id = diary.log_food(date, slot, &self.food_id, self.servings)?;
        storage::save_diary(&config.data_path.value, &diary, &goals)?;

        let name = catalog
            .lookup(&self.food_id)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| self.food_id.clone());
        println!(
            "Logged {} x {} for {} ({})  [entry {}]",
            self.servings, name, slot, date, entry_id
        );
        Ok(())
    }
}

#[derive(Args)]
pub struct RemoveCommand {
    /// Entry id to remove (printed when the entry was logged)
    pub entry_id: Uuid,

    /// Meal slot the entry lives in
    #[arg(long, short)]
    pub slot: String,

    /// Date (YYYY-MM-DD), defaults to today
    #[arg(long, short)]
    pub date: Option<String>,
}

impl RemoveCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let date = parse_date_arg(&self.date)?;
        let slot = MealSlot::from_str(&self.slot)?;
        let (mut diary, goals) = storage::load_diary(&config.data_path.value)?;

        let removed = diary.remove_food(date, slot, self.entry_id);
        storage::save_diary(&config.data_path.value, &diary, &goals)?;

        if removed {
            println!("Removed entry {} from {} on {}", self.entry_id, slot, date);
        } else {
            println!("No entry {} in {} on {}", self.entry_id, slot, date);
        }
        Ok(())
    }
}
