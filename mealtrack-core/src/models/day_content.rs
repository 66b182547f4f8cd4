use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::logged_food::LoggedFood;
use super::meal_slot::MealSlot;

/// Everything eaten (or planned) on one day: an ordered entry list per
/// meal slot.
///
/// A slot that is absent from the map and a slot mapped to an empty list
/// both mean "no food in that slot"; every accessor treats them the same.
/// `Clone` is a full structural copy, which is what the diary relies on
/// when it materializes a day from the plan.
///
/// Serializes as a plain slot-name -> entry-array object, the `dietPlan`
/// shape of the export format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct DayContent {
    slots: BTreeMap<MealSlot, Vec<LoggedFood>>,
}

impl DayContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style slot assignment, mostly for tests and plan editing.
    pub fn with_slot(mut self, slot: MealSlot, entries: Vec<LoggedFood>) -> Self {
        self.slots.insert(slot, entries);
        self
    }

    /// Entries in a slot, in insertion order. Absent slots yield an
    /// empty slice.
    pub fn entries(&self, slot: MealSlot) -> &[LoggedFood] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when no slot holds any entry.
    pub fn is_empty(&self) -> bool {
        self.slots.values().all(Vec::is_empty)
    }

    /// Total entry count across all slots.
    pub fn entry_count(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// Append an entry to a slot, creating the slot on first use.
    pub fn push(&mut self, slot: MealSlot, entry: LoggedFood) {
        self.slots.entry(slot).or_default().push(entry);
    }

    /// Remove the entry with the given id from a slot. Returns whether
    /// anything was removed; a missing id is a no-op.
    pub fn remove(&mut self, slot: MealSlot, entry_id: Uuid) -> bool {
        match self.slots.get_mut(&slot) {
            Some(entries) => {
                let before = entries.len();
                entries.retain(|e| e.id != entry_id);
                entries.len() != before
            }
            None => false,
        }
    }

    /// Replace a slot's entries wholesale.
    pub fn set_slot(&mut self, slot: MealSlot, entries: Vec<LoggedFood>) {
        self.slots.insert(slot, entries);
    }

    /// Every entry across every slot, slot by slot.
    pub fn iter_entries(&self) -> impl Iterator<Item = (MealSlot, &LoggedFood)> {
        self.slots
            .iter()
            .flat_map(|(slot, entries)| entries.iter().map(move |e| (*slot, e)))
    }
}
