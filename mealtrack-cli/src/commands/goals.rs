use clap::{Args, Subcommand};

use crate::config::Config;
use crate::storage;

#[derive(Args)]
pub struct GoalsCommand {
    #[command(subcommand)]
    pub command: GoalsSubcommand,
}

#[derive(Subcommand)]
pub enum GoalsSubcommand {
    /// Show the configured daily goals
    Show,

    /// Update one or more daily goals (zero disables a target)
    Set {
        #[arg(long)]
        calories: Option<f64>,

        #[arg(long)]
        protein: Option<f64>,

        #[arg(long)]
        carbs: Option<f64>,

        #[arg(long)]
        fat: Option<f64>,
    },
}

impl GoalsCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let (diary, mut goals) = storage::load_diary(&config.data_path.value)?;
        match &self.command {
            GoalsSubcommand::Show => {
                println!("Daily goals:");
                println!("  Calories: {:.0} kcal", goals.calories);
                println!("  Protein:  {:.0} g", goals.protein);
                println!("  Carbs:    {:.0} g", goals.carbs);
                println!("  Fat:      {:.0} g", goals.fat);
            }
            GoalsSubcommand::Set {
                calories,
                protein,
                carbs,
                fat,
            } => {
                for (name, value) in [
                    ("calories", calories),
                    ("protein", protein),
                    ("carbs", carbs),
                    ("fat", fat),
                ] {
                    if let Some(v) = value {
                        if !v.is_finite() || *v < 0.0 {
                            return Err(
                                format!("Goal for {} must be non-negative, got {}", name, v).into()
                            );
                        }
                    }
                }
                if let Some(v) = calories {
                    goals.calories = *v;
                }
                if let Some(v) = protein {
                    goals.protein = *v;
                }
                if let Some(v) = carbs {
                    goals.carbs = *v;
                }
                if let Some(v) = fat {
                    goals.fat = *v;
                }
                storage::save_diary(&config.data_path.value, &diary, &goals)?;
                println!(
                    "Goals updated: {:.0} kcal, {:.0}g protein, {:.0}g carbs, {:.0}g fat",
                    goals.calories, goals.protein, goals.carbs, goals.fat
                );
            }
        }
        Ok(())
    }
}
