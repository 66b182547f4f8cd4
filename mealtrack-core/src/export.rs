//! Whole-value export/import of the diary state.
//!
//! The application export document carries the diary's two values under
//! `dietPlan` and `dailyDietLogs`, next to the goal record and the food
//! catalog. Unrelated top-level fields (workout data and the like) are
//! ignored on import. Import always replaces state wholesale; there is no
//! merging.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::FoodCatalog;
use crate::diary::DietDiary;
use crate::models::{DayContent, FoodItem};
use crate::nutrition::NutritionGoals;

/// The diet-tracking slice of the application export document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportBundle {
    pub diet_plan: DayContent,
    pub daily_diet_logs: BTreeMap<NaiveDate, DayContent>,
    pub nutrition_goals: Option<NutritionGoals>,
    pub food_database: Vec<FoodItem>,
}

impl ExportBundle {
    /// Snapshot the current state into an exportable value.
    pub fn capture(diary: &DietDiary, goals: &NutritionGoals, catalog: &FoodCatalog) -> Self {
        let mut food_database: Vec<FoodItem> = catalog.iter().cloned().collect();
        food_database.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            diet_plan: diary.plan().clone(),
            daily_diet_logs: diary.days().clone(),
            nutrition_goals: Some(*goals),
            food_database,
        }
    }

    /// Turn an imported bundle back into live state. Every date key in
    /// `dailyDietLogs` comes back explicit, empty or not.
    pub fn into_state(self) -> (DietDiary, NutritionGoals, FoodCatalog) {
        (
            DietDiary::from_parts(self.diet_plan, self.daily_diet_logs),
            self.nutrition_goals.unwrap_or_default(),
            FoodCatalog::from_items(self.food_database),
        )
    }
}
