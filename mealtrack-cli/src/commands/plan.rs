use clap::{Args, Subcommand};
use std::str::FromStr;
use uuid::Uuid;

use mealtrack_core::{aggregate, DayContent, GoalReport, LoggedFood, MealSlot};

use super::day::{print_day_content, print_goal_report};
use crate::config::Config;
use crate::storage;

#[derive(Args)]
pub struct PlanCommand {
    #[command(subcommand)]
    pub command: PlanSubcommand,
}

#[derive(Subcommand)]
pub enum PlanSubcommand {
    /// Show the base plan and its nutrient totals
    Show,

    /// Add a food to the base plan
    Add {
        /// Catalog food id
        food_id: String,

        /// Meal slot (breakfast, lunch, dinner, post-workout, snacks)
        #[arg(long, short)]
        slot: String,

        /// Number of servings
        #[arg(long, short = 'n', default_value_t = 1.0)]
        servings: f64,
    },

    /// Remove an entry from the base plan
    Remove {
        /// Entry id to remove
        entry_id: Uuid,

        /// Meal slot the entry lives in
        #[arg(long, short)]
        slot: String,
    },

    /// Empty the base plan entirely
    Clear,
}

impl PlanCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            PlanSubcommand::Show => self.show(config),
            PlanSubcommand::Add {
                food_id,
                slot,
                servings,
            } => self.add(food_id, slot, *servings, config),
            PlanSubcommand::Remove { entry_id, slot } => self.remove(*entry_id, slot, config),
            PlanSubcommand::Clear => self.clear(config),
        }
    }

    fn show(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let catalog = storage::load_catalog(&config.catalog_path.value)?;
        let (diary, goals) = storage::load_diary(&config.data_path.value)?;

        println!("Base plan");
        println!("=========");
        print_day_content(diary.plan(), &catalog);
        println!();
        let totals = aggregate(diary.plan(), &catalog);
        print_goal_report(&totals, &GoalReport::compare(&totals, &goals));
        Ok(())
    }

    // Plan edits go through set_plan: edit a copy, install it wholesale.
    // Dates someone already touched keep their own content.
    fn add(
        &self,
        food_id: &str,
        slot: &str,
        servings: f64,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let slot = MealSlot::from_str(slot)?;
        if !servings.is_finite() || servings <= 0.0 {
            return Err(format!("Servings must be a positive number, got {}", servings).into());
        }
        let (mut diary, goals) = storage::load_diary(&config.data_path.value)?;

        let mut plan = diary.plan().clone();
        let entry = LoggedFood::new(food_id, servings);
        let entry_id = entry.id;
        plan.push(slot, entry);
        diary.set_plan(plan);
        storage::save_diary(&config.data_path.value, &diary, &goals)?;

        println!(
            "Added {} x {} to the plan's {}  [entry {}]",
            servings, food_id, slot, entry_id
        );
        Ok(())
    }

    fn remove(
        &self,
        entry_id: Uuid,
        slot: &str,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let slot = MealSlot::from_str(slot)?;
        let (mut diary, goals) = storage::load_diary(&config.data_path.value)?;

        let mut plan = diary.plan().clone();
        let removed = plan.remove(slot, entry_id);
        diary.set_plan(plan);
        storage::save_diary(&config.data_path.value, &diary, &goals)?;

        if removed {
            println!("Removed entry {} from the plan's {}", entry_id, slot);
        } else {
            println!("No entry {} in the plan's {}", entry_id, slot);
        }
        Ok(())
    }

    fn clear(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let (mut diary, goals) = storage::load_diary(&config.data_path.value)?;
        diary.set_plan(DayContent::new());
        storage::save_diary(&config.data_path.value, &diary, &goals)?;
        println!("Base plan cleared");
        Ok(())
    }
}
