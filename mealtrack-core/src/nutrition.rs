//! Nutrient aggregation over a day's entries, and comparison against goals.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::catalog::FoodCatalog;
use crate::models::DayContent;

/// Macro totals for one day plus every micronutrient tag present.
///
/// Totals are plain floating-point sums; rounding is left to whoever
/// renders them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub micronutrients: BTreeSet<String>,
}

impl NutrientTotals {
    /// Fold one catalog food, scaled by servings, into the totals.
    /// Commutative, so the order entries arrive in never matters.
    fn add_serving(&mut self, food: &crate::models::FoodItem, servings: f64) {
        self.calories += food.calories * servings;
        self.protein += food.protein * servings;
        self.carbs += food.carbs * servings;
        self.fat += food.fat * servings;
        for tag in &food.micronutrients {
            self.micronutrients.insert(tag.clone());
        }
    }
}

impl fmt::Display for NutrientTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} kcal, {:.1}g protein, {:.1}g carbs, {:.1}g fat",
            self.calories, self.protein, self.carbs, self.fat
        )
    }
}

/// Sum a day's entries against the catalog.
///
/// Entries whose food id no longer resolves are skipped without comment;
/// a dangling reference contributes nothing and never fails the whole
/// aggregation. The diary guarantees servings are positive, so any entry
/// that resolves also counts toward the micronutrient tag set.
pub fn aggregate(day: &DayContent, catalog: &FoodCatalog) -> NutrientTotals {
    let mut totals = NutrientTotals::default();
    for (_, entry) in day.iter_entries() {
        if let Some(food) = catalog.lookup(&entry.food_id) {
            totals.add_serving(food, entry.servings);
        }
    }
    totals
}

/// Configured daily macro targets. All values non-negative; zero means
/// "no target set" for that macro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein: 150.0,
            carbs: 250.0,
            fat: 65.0,
        }
    }
}

/// One macro's consumed/goal pair with a render-ready completion fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroProgress {
    pub consumed: f64,
    pub goal: f64,
    /// Completion in `[0, 1]`; a zero goal reads as 0 rather than dividing.
    pub fraction: f64,
}

impl MacroProgress {
    fn compare(consumed: f64, goal: f64) -> Self {
        let fraction = if goal > 0.0 {
            (consumed / goal).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            consumed,
            goal,
            fraction,
        }
    }
}

/// Per-macro progress for one day's totals against the configured goals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalReport {
    pub calories: MacroProgress,
    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fat: MacroProgress,
}

impl GoalReport {
    pub fn compare(totals: &NutrientTotals, goals: &NutritionGoals) -> Self {
        Self {
            calories: MacroProgress::compare(totals.calories, goals.calories),
            protein: MacroProgress::compare(totals.protein, goals.protein),
            carbs: MacroProgress::compare(totals.carbs, goals.carbs),
            fat: MacroProgress::compare(totals.fat, goals.fat),
        }
    }
}
