use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog entry with macros denominated per one serving.
///
/// Food items are owned by the external catalog and referenced from the
/// diary by their string id only. Catalog edits happen elsewhere; the core
/// treats every item as read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Human-readable serving description, e.g. "100g" or "1 cup"
    pub serving_size: String,
    /// Micronutrient tag names, e.g. "Vitamin C", "Iron"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub micronutrients: Vec<String>,
    /// Search keywords (used by external catalog search, round-tripped here)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl FoodItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        serving_size: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            calories,
            protein,
            carbs,
            fat,
            serving_size: serving_size.into(),
            micronutrients: Vec::new(),
            keywords: Vec::new(),
        }
    }

    pub fn with_micronutrients(mut self, micronutrients: Vec<String>) -> Self {
        self.micronutrients = micronutrients;
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }
}

impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} kcal, {}g protein, {}g carbs, {}g fat",
            self.name, self.serving_size, self.calories, self.protein, self.carbs, self.fat
        )
    }
}
