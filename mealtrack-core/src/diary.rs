//! The diet diary: one recurring base plan plus per-date overrides.
//!
//! A date that has never been touched has no override and resolves to the
//! plan. The first mutation aimed at a date copies whatever that date
//! currently resolves to into an override and edits the copy; from then on
//! the date is pinned to its own content and later plan edits no longer
//! reach it. An override is never dropped automatically, so a cleared day
//! stays an explicit empty day rather than falling back to the plan.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{DayContent, LoggedFood, MealSlot};

/// Errors reported at the diary's mutation boundary.
#[derive(Error, Debug)]
pub enum DiaryError {
    #[error("Servings must be a positive number, got {0}")]
    NonPositiveServings(f64),
}

/// How a date's content came to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DayState<'a> {
    /// No override exists; the date shows the base plan.
    Inherited(&'a DayContent),
    /// The date has its own authoritative content, even if empty.
    Explicit(&'a DayContent),
}

impl<'a> DayState<'a> {
    pub fn content(&self) -> &'a DayContent {
        match self {
            DayState::Inherited(content) | DayState::Explicit(content) => content,
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, DayState::Explicit(_))
    }
}

/// The single mutation surface over the plan and the per-date overrides.
///
/// All reads are pure and may be repeated freely; all mutations run to
/// completion in memory with no intermediate visible state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DietDiary {
    plan: DayContent,
    days: BTreeMap<NaiveDate, DayContent>,
}

impl DietDiary {
    /// A diary with an empty plan and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a diary from persisted state. Every date key present in
    /// `days` is explicit, including keys mapping to all-empty content.
    pub fn from_parts(plan: DayContent, days: BTreeMap<NaiveDate, DayContent>) -> Self {
        Self { plan, days }
    }

    /// The base plan shown for every untouched date.
    pub fn plan(&self) -> &DayContent {
        &self.plan
    }

    /// The per-date overrides, keyed by calendar date.
    pub fn days(&self) -> &BTreeMap<NaiveDate, DayContent> {
        &self.days
    }

    /// The content a date actually shows: its override if one exists,
    /// the plan otherwise.
    pub fn resolve(&self, date: NaiveDate) -> &DayContent {
        self.days.get(&date).unwrap_or(&self.plan)
    }

    /// Like [`resolve`](Self::resolve), but keeps the inherited/explicit
    /// distinction visible to the caller.
    pub fn day_state(&self, date: NaiveDate) -> DayState<'_> {
        match self.days.get(&date) {
            Some(content) => DayState::Explicit(content),
            None => DayState::Inherited(&self.plan),
        }
    }

    /// True when copying over this date would discard explicit, non-empty
    /// content. Callers that copy a day in should confirm with the user
    /// first; the diary itself never blocks the copy.
    pub fn would_overwrite(&self, date: NaiveDate) -> bool {
        self.days.get(&date).is_some_and(|day| !day.is_empty())
    }

    /// Log a food against a date and slot. Returns the minted entry id.
    ///
    /// The food id is not checked against any catalog here: the catalog can
    /// change independently, so validity is resolved at aggregation time.
    pub fn log_food(
        &mut self,
        date: NaiveDate,
        slot: MealSlot,
        food_id: impl Into<String>,
        servings: f64,
    ) -> Result<Uuid, DiaryError> {
        if !servings.is_finite() || servings <= 0.0 {
            return Err(DiaryError::NonPositiveServings(servings));
        }
        let entry = LoggedFood::new(food_id, servings);
        let id = entry.id;
        self.materialize(date).push(slot, entry);
        Ok(id)
    }

    /// Remove the entry with `entry_id` from a date's slot. Returns whether
    /// an entry was removed; an unknown id is a silent no-op.
    ///
    /// An untouched date is materialized first, so removing a plan-inherited
    /// entry pins the date without touching the plan itself.
    pub fn remove_food(&mut self, date: NaiveDate, slot: MealSlot, entry_id: Uuid) -> bool {
        self.materialize(date).remove(slot, entry_id)
    }

    /// Replace the base plan wholesale. Takes effect for every date without
    /// an override, past or future, and for no date with one.
    pub fn set_plan(&mut self, plan: DayContent) {
        self.plan = plan;
    }

    /// Install `content` as a date's explicit content, replacing whatever
    /// was there. The diary applies this unconditionally; see
    /// [`would_overwrite`](Self::would_overwrite) for the confirmation gate.
    pub fn replace_day(&mut self, date: NaiveDate, content: DayContent) {
        self.days.insert(date, content);
    }

    /// The override for `date`, created on first touch by copying whatever
    /// the date resolves to right now (an absent key resolves to the plan).
    fn materialize(&mut self, date: NaiveDate) -> &mut DayContent {
        self.days.entry(date).or_insert_with(|| self.plan.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn plan_with_breakfast() -> (DayContent, Uuid) {
        let egg = LoggedFood::new("food-egg", 2.0);
        let egg_id = egg.id;
        let plan = DayContent::new().with_slot(MealSlot::Breakfast, vec![egg]);
        (plan, egg_id)
    }

    #[test]
    fn test_untouched_date_resolves_to_plan() {
        let (plan, _) = plan_with_breakfast();
        let diary = DietDiary::from_parts(plan.clone(), BTreeMap::new());

        assert_eq!(diary.resolve(date("2024-01-01")), &plan);
        assert_eq!(diary.resolve(date("1999-12-31")), &plan);
        assert!(!diary.day_state(date("2024-01-01")).is_explicit());
    }

    #[test]
    fn test_plan_edit_reaches_untouched_dates_retroactively() {
        let (plan, _) = plan_with_breakfast();
        let mut diary = DietDiary::from_parts(plan, BTreeMap::new());

        let new_plan = DayContent::new().with_slot(MealSlot::Dinner, vec![]);
        diary.set_plan(new_plan.clone());

        // Past and future untouched dates both follow the new plan
        assert_eq!(diary.resolve(date("2020-06-15")), &new_plan);
        assert_eq!(diary.resolve(date("2030-06-15")), &new_plan);
    }

    #[test]
    fn test_log_food_materializes_from_plan() {
        let (plan, egg_id) = plan_with_breakfast();
        let mut diary = DietDiary::from_parts(plan, BTreeMap::new());
        let day = date("2024-01-01");

        diary.log_food(day, MealSlot::Lunch, "food-rice", 1.0).unwrap();

        // The inherited breakfast came along with the new lunch entry
        let resolved = diary.resolve(day);
        assert_eq!(resolved.entries(MealSlot::Breakfast)[0].id, egg_id);
        assert_eq!(resolved.entries(MealSlot::Lunch)[0].food_id, "food-rice");
        assert!(diary.day_state(day).is_explicit());

        // A neighboring date is still untouched
        assert!(!diary.day_state(date("2024-01-02")).is_explicit());
    }

    #[test]
    fn test_materialized_date_frozen_against_plan_edits() {
        let (plan, _) = plan_with_breakfast();
        let mut diary = DietDiary::from_parts(plan, BTreeMap::new());
        let day = date("2024-01-01");

        diary.log_food(day, MealSlot::Lunch, "food-rice", 1.0).unwrap();
        let before = diary.resolve(day).clone();

        diary.set_plan(DayContent::new());

        assert_eq!(diary.resolve(day), &before);
        // Untouched dates see the cleared plan immediately
        assert!(diary.resolve(date("2024-01-02")).is_empty());
    }

    #[test]
    fn test_log_food_rejects_non_positive_servings() {
        let mut diary = DietDiary::new();
        let day = date("2024-01-01");

        assert!(diary.log_food(day, MealSlot::Lunch, "food-1", 0.0).is_err());
        assert!(diary.log_food(day, MealSlot::Lunch, "food-1", -1.5).is_err());
        assert!(diary.log_food(day, MealSlot::Lunch, "food-1", f64::NAN).is_err());

        // Rejection happens before any state change: the date stays untouched
        assert!(!diary.day_state(day).is_explicit());
    }

    #[test]
    fn test_log_food_accepts_unknown_food_id() {
        let mut diary = DietDiary::new();
        let id = diary
            .log_food(date("2024-01-01"), MealSlot::Snacks, "no-such-food", 1.0)
            .unwrap();
        let entries = diary.resolve(date("2024-01-01")).entries(MealSlot::Snacks);
        assert_eq!(entries[0].id, id);
    }

    #[test]
    fn test_remove_inherited_entry_leaves_plan_intact() {
        let (plan, egg_id) = plan_with_breakfast();
        let mut diary = DietDiary::from_parts(plan, BTreeMap::new());
        let day = date("2024-01-01");

        assert!(diary.remove_food(day, MealSlot::Breakfast, egg_id));

        assert!(diary.resolve(day).is_empty());
        assert!(diary.day_state(day).is_explicit());
        // The plan still has the egg, and other dates still inherit it
        assert_eq!(diary.plan().entries(MealSlot::Breakfast).len(), 1);
        assert_eq!(
            diary.resolve(date("2024-01-02")).entries(MealSlot::Breakfast).len(),
            1
        );
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (plan, egg_id) = plan_with_breakfast();
        let mut diary = DietDiary::from_parts(plan, BTreeMap::new());
        let day = date("2024-01-01");

        assert!(diary.remove_food(day, MealSlot::Breakfast, egg_id));
        let after_first = diary.resolve(day).clone();

        assert!(!diary.remove_food(day, MealSlot::Breakfast, egg_id));
        assert_eq!(diary.resolve(day), &after_first);
    }

    #[test]
    fn test_remove_unknown_id_still_materializes() {
        let (plan, _) = plan_with_breakfast();
        let mut diary = DietDiary::from_parts(plan, BTreeMap::new());
        let day = date("2024-01-01");

        assert!(!diary.remove_food(day, MealSlot::Dinner, Uuid::new_v4()));
        // The date is now pinned to a copy of the plan
        assert!(diary.day_state(day).is_explicit());
        assert_eq!(diary.resolve(day).entries(MealSlot::Breakfast).len(), 1);
    }

    #[test]
    fn test_replace_day_copy_semantics() {
        let (plan, _) = plan_with_breakfast();
        let mut diary = DietDiary::from_parts(plan, BTreeMap::new());
        let yesterday = date("2024-01-01");
        let today = date("2024-01-02");

        diary
            .log_food(yesterday, MealSlot::Dinner, "food-salmon", 1.0)
            .unwrap();
        let source = diary.resolve(yesterday).clone();

        diary.replace_day(today, source.clone());
        assert_eq!(diary.resolve(today), &source);

        // Mutating the copy does not reach back into the source day
        diary.log_food(today, MealSlot::Snacks, "food-nuts", 1.0).unwrap();
        assert_eq!(diary.resolve(yesterday), &source);
    }

    #[test]
    fn test_replace_day_overwrites_explicit_content() {
        let mut diary = DietDiary::new();
        let day = date("2024-01-01");
        diary.log_food(day, MealSlot::Lunch, "food-1", 1.0).unwrap();

        diary.replace_day(day, DayContent::new());
        assert!(diary.resolve(day).is_empty());
        assert!(diary.day_state(day).is_explicit());
    }

    #[test]
    fn test_would_overwrite() {
        let mut diary = DietDiary::new();
        let day = date("2024-01-01");

        // Untouched: nothing to lose
        assert!(!diary.would_overwrite(day));

        // Explicit but empty: still nothing to lose
        diary.replace_day(day, DayContent::new());
        assert!(!diary.would_overwrite(day));

        diary.log_food(day, MealSlot::Lunch, "food-1", 1.0).unwrap();
        assert!(diary.would_overwrite(day));
    }

    #[test]
    fn test_cleared_day_does_not_fall_back_to_plan() {
        let (plan, egg_id) = plan_with_breakfast();
        let mut diary = DietDiary::from_parts(plan, BTreeMap::new());
        let day = date("2024-01-01");

        diary.remove_food(day, MealSlot::Breakfast, egg_id);
        assert!(diary.resolve(day).is_empty());

        // A later plan change must not resurface on the cleared day
        let (richer_plan, _) = plan_with_breakfast();
        diary.set_plan(richer_plan);
        assert!(diary.resolve(day).is_empty());
    }

    #[test]
    fn test_restored_empty_override_is_explicit() {
        let (plan, _) = plan_with_breakfast();
        let mut days = BTreeMap::new();
        days.insert(date("2024-01-01"), DayContent::new());
        let diary = DietDiary::from_parts(plan, days);

        assert!(diary.day_state(date("2024-01-01")).is_explicit());
        assert!(diary.resolve(date("2024-01-01")).is_empty());
        assert!(!diary.resolve(date("2024-01-02")).is_empty());
    }

    // The walkthrough from the product behavior: an egg-only plan, a rice
    // lunch logged on Jan 1, then the plan cleared.
    #[test]
    fn test_plan_and_log_walkthrough() {
        let (plan, _) = plan_with_breakfast();
        let mut diary = DietDiary::from_parts(plan.clone(), BTreeMap::new());
        let jan1 = date("2024-01-01");
        let jan2 = date("2024-01-02");

        assert_eq!(diary.resolve(jan1), &plan);

        diary.log_food(jan1, MealSlot::Lunch, "food-rice", 1.0).unwrap();
        assert_eq!(diary.resolve(jan1).entries(MealSlot::Breakfast).len(), 1);
        assert_eq!(diary.resolve(jan1).entries(MealSlot::Lunch).len(), 1);
        assert_eq!(diary.resolve(jan2), &plan);

        diary.set_plan(DayContent::new().with_slot(MealSlot::Breakfast, vec![]));
        assert!(diary.resolve(jan2).is_empty());
        assert_eq!(diary.resolve(jan1).entries(MealSlot::Breakfast).len(), 1);
        assert_eq!(diary.resolve(jan1).entries(MealSlot::Lunch).len(), 1);
    }
}
