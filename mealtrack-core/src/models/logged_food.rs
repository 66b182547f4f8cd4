use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single logged serving of a catalog food within one meal slot.
///
/// Entries reference the catalog by id (live lookup) rather than embedding
/// the food data, so catalog edits show up in later aggregations and a
/// deleted food leaves the entry behind as a dangling reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggedFood {
    pub id: Uuid,
    pub food_id: String,
    pub servings: f64,
}

impl LoggedFood {
    /// Mint a new entry with a fresh id. Servings validation is the
    /// diary's job; this constructor does not reject anything.
    pub fn new(food_id: impl Into<String>, servings: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            food_id: food_id.into(),
            servings,
        }
    }
}

impl fmt::Display for LoggedFood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.servings, self.food_id)
    }
}
