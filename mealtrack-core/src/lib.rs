//! Mealtrack Core Library
//!
//! Diet diary resolution and nutrient aggregation: a recurring base plan,
//! per-date overrides, and the totals used to compare a day against goals.

pub mod catalog;
pub mod diary;
pub mod export;
pub mod models;
pub mod nutrition;

pub use catalog::FoodCatalog;
pub use diary::{DayState, DiaryError, DietDiary};
pub use export::ExportBundle;
pub use models::{DayContent, FoodItem, LoggedFood, MealSlot};
pub use nutrition::{aggregate, GoalReport, MacroProgress, NutrientTotals, NutritionGoals};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
