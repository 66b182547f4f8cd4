//! JSON file storage for the diary document and the read-only food catalog.
//!
//! The diary file is the sole source of truth at load time: the whole
//! document is read into memory on startup and written back whole after a
//! mutation. The catalog file is never written.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use mealtrack_core::{DayContent, DietDiary, FoodCatalog, FoodItem, NutritionGoals};

/// On-disk shape of the diary document.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DiaryFile {
    diet_plan: DayContent,
    daily_diet_logs: BTreeMap<NaiveDate, DayContent>,
    nutrition_goals: Option<NutritionGoals>,
}

#[derive(Debug)]
pub enum StorageError {
    ReadError(PathBuf, std::io::Error),
    WriteError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::ReadError(path, e) => {
                write!(f, "Failed to read {}: {}", path.display(), e)
            }
            StorageError::WriteError(path, e) => {
                write!(f, "Failed to write {}: {}", path.display(), e)
            }
            StorageError::ParseError(path, e) => {
                write!(f, "Failed to parse {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Load the diary document, or start fresh when the file does not exist yet.
pub fn load_diary(path: &Path) -> Result<(DietDiary, NutritionGoals), StorageError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no diary file, starting fresh");
        return Ok((DietDiary::new(), NutritionGoals::default()));
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| StorageError::ReadError(path.to_path_buf(), e))?;
    let file: DiaryFile = serde_json::from_str(&contents)
        .map_err(|e| StorageError::ParseError(path.to_path_buf(), e))?;

    let diary = DietDiary::from_parts(file.diet_plan, file.daily_diet_logs);
    let goals = file.nutrition_goals.unwrap_or_default();
    tracing::debug!(days = diary.days().len(), "diary loaded");
    Ok((diary, goals))
}

/// Write the diary document back whole, creating parent directories on
/// first save.
pub fn save_diary(
    path: &Path,
    diary: &DietDiary,
    goals: &NutritionGoals,
) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| StorageError::WriteError(path.to_path_buf(), e))?;
    }
    let file = DiaryFile {
        diet_plan: diary.plan().clone(),
        daily_diet_logs: diary.days().clone(),
        nutrition_goals: Some(*goals),
    };
    let contents = serde_json::to_string_pretty(&file)
        .map_err(|e| StorageError::ParseError(path.to_path_buf(), e))?;
    std::fs::write(path, contents).map_err(|e| StorageError::WriteError(path.to_path_buf(), e))?;
    tracing::debug!(path = %path.display(), "diary saved");
    Ok(())
}

/// Load the food catalog from a JSON array of items. A missing file is an
/// empty catalog, not an error; diary entries then simply fail to resolve.
pub fn load_catalog(path: &Path) -> Result<FoodCatalog, StorageError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no catalog file, using empty catalog");
        return Ok(FoodCatalog::new());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| StorageError::ReadError(path.to_path_buf(), e))?;
    let items: Vec<FoodItem> = serde_json::from_str(&contents)
        .map_err(|e| StorageError::ParseError(path.to_path_buf(), e))?;
    Ok(FoodCatalog::from_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealtrack_core::{LoggedFood, MealSlot};

    #[test]
    fn test_missing_diary_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let (diary, goals) = load_diary(&dir.path().join("diary.json")).unwrap();
        assert!(diary.plan().is_empty());
        assert!(diary.days().is_empty());
        assert_eq!(goals, NutritionGoals::default());
    }

    #[test]
    fn test_diary_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/diary.json");

        let mut diary = DietDiary::new();
        diary.set_plan(
            DayContent::new().with_slot(MealSlot::Breakfast, vec![LoggedFood::new("food-3", 2.0)]),
        );
        diary
            .log_food("2024-01-01".parse().unwrap(), MealSlot::Lunch, "food-rice", 1.0)
            .unwrap();
        let goals = NutritionGoals {
            calories: 1800.0,
            ..NutritionGoals::default()
        };

        save_diary(&path, &diary, &goals).unwrap();
        let (loaded, loaded_goals) = load_diary(&path).unwrap();

        assert_eq!(loaded, diary);
        assert_eq!(loaded_goals.calories, 1800.0);
    }

    #[test]
    fn test_empty_override_survives_roundtrip_as_explicit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diary.json");
        let day: NaiveDate = "2024-03-03".parse().unwrap();

        let mut diary = DietDiary::new();
        diary.replace_day(day, DayContent::new());
        save_diary(&path, &diary, &NutritionGoals::default()).unwrap();

        let (loaded, _) = load_diary(&path).unwrap();
        assert!(loaded.day_state(day).is_explicit());
    }

    #[test]
    fn test_corrupt_diary_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diary.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_diary(&path).unwrap_err();
        assert!(matches!(err, StorageError::ParseError(_, _)));
    }

    #[test]
    fn test_load_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foods.json");
        std::fs::write(
            &path,
            r#"[{"id": "food-3", "name": "Boiled egg", "calories": 78,
                "protein": 6, "carbs": 0.6, "fat": 5,
                "servingSize": "1 large (50g)",
                "micronutrients": ["Vitamin D"]}]"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("food-3").unwrap().name, "Boiled egg");
    }

    #[test]
    fn test_missing_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog(&dir.path().join("foods.json")).unwrap();
        assert!(catalog.is_empty());
    }
}
