pub mod day_content;
pub mod food_item;
pub mod logged_food;
pub mod meal_slot;

pub use day_content::DayContent;
pub use food_item::FoodItem;
pub use logged_food::LoggedFood;
pub use meal_slot::MealSlot;
