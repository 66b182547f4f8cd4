use clap::Args;
use std::path::PathBuf;

use mealtrack_core::ExportBundle;

use crate::config::Config;
use crate::storage;

#[derive(Args)]
pub struct ExportCommand {
    /// Write the bundle to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl ExportCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let catalog = storage::load_catalog(&config.catalog_path.value)?;
        let (diary, goals) = storage::load_diary(&config.data_path.value)?;

        let bundle = ExportBundle::capture(&diary, &goals, &catalog);
        let json = serde_json::to_string_pretty(&bundle)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, json)?;
                println!("Exported to {}", path.display());
            }
            None => println!("{}", json),
        }
        Ok(())
    }
}

#[derive(Args)]
pub struct ImportCommand {
    /// Bundle file to import
    pub file: PathBuf,
}

impl ImportCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(&self.file)?;
        let bundle: ExportBundle = serde_json::from_str(&contents)?;

        // Wholesale replacement, never a merge.
        let food_count = bundle.food_database.len();
        let (diary, goals, _catalog) = bundle.into_state();
        storage::save_diary(&config.data_path.value, &diary, &goals)?;

        println!(
            "Imported plan, {} day log(s), and goals from {}",
            diary.days().len(),
            self.file.display()
        );
        if food_count > 0 {
            println!(
                "Note: the bundle's {} food item(s) were not written; the catalog at {} is managed externally",
                food_count,
                config.catalog_path.value.display()
            );
        }
        Ok(())
    }
}
