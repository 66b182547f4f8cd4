use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed meal categories a logged food belongs to.
///
/// The set is closed; serialization uses the camelCase names the diary
/// export format expects (`"postWorkout"`, not `"post_workout"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    PostWorkout,
    Snacks,
}

impl MealSlot {
    /// All slots in display order.
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::PostWorkout,
        MealSlot::Snacks,
    ];
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealSlot::Breakfast => write!(f, "breakfast"),
            MealSlot::Lunch => write!(f, "lunch"),
            MealSlot::Dinner => write!(f, "dinner"),
            MealSlot::PostWorkout => write!(f, "post-workout"),
            MealSlot::Snacks => write!(f, "snacks"),
        }
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "post-workout" | "postworkout" | "post_workout" => Ok(MealSlot::PostWorkout),
            "snacks" | "snack" => Ok(MealSlot::Snacks),
            _ => Err(format!(
                "Invalid meal slot '{}'. Valid options: breakfast, lunch, dinner, post-workout, snacks",
                s
            )),
        }
    }
}
