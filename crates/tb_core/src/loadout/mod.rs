//! Loadout state: equipment slots and technique slots.
//!
//! A loadout is always in a consistent state: four equipment slots (one per
//! category, independently empty or filled) and an ordered technique list of
//! at most [`MAX_TECHNIQUES`] entries. It is created empty when a character
//! becomes active, reset on character switch, and never persisted.

pub mod manager;
pub mod notifications;

pub use manager::LoadoutManager;
pub use notifications::{LoadoutEvent, NotificationSink, TracingSink};

use crate::error::{BuilderError, Result};
use crate::models::{EquipmentCategory, EquipmentItem, StatName, TechniqueItem};
use serde::{Deserialize, Serialize};

/// Maximum number of technique slots per character.
pub const MAX_TECHNIQUES: usize = 4;

/// The combined equipment + technique selection applied to a character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loadout {
    /// One slot per category, indexed by `EquipmentCategory::index()`.
    equipment: [Option<EquipmentItem>; 4],
    /// Slotted techniques, order is meaningful (index = slot).
    techniques: Vec<TechniqueItem>,
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item currently occupying a category slot, if any.
    pub fn equipment(&self, category: EquipmentCategory) -> Option<&EquipmentItem> {
        self.equipment[category.index()].as_ref()
    }

    /// All filled equipment slots.
    pub fn equipped_items(&self) -> impl Iterator<Item = &EquipmentItem> {
        self.equipment.iter().filter_map(|slot| slot.as_ref())
    }

    pub fn techniques(&self) -> &[TechniqueItem] {
        &self.techniques
    }

    pub fn technique_count(&self) -> usize {
        self.techniques.len()
    }

    pub fn has_free_technique_slot(&self) -> bool {
        self.techniques.len() < MAX_TECHNIQUES
    }

    /// True when no equipment is set and no technique is slotted.
    pub fn is_empty(&self) -> bool {
        self.equipment.iter().all(|slot| slot.is_none()) && self.techniques.is_empty()
    }

    /// Summed equipment bonus for one stat across all filled slots.
    pub fn bonus_for(&self, stat: StatName) -> i32 {
        self.equipped_items().map(|item| item.bonus_for(stat) as i32).sum()
    }

    /// Place an item in its category slot, returning the displaced item.
    /// Last write wins; overwriting is not an error.
    pub fn equip(&mut self, category: EquipmentCategory, item: EquipmentItem) -> Option<EquipmentItem> {
        self.equipment[category.index()].replace(item)
    }

    /// Empty one category slot, returning the removed item.
    pub fn unequip(&mut self, category: EquipmentCategory) -> Option<EquipmentItem> {
        self.equipment[category.index()].take()
    }

    /// Clear all equipment slots and the technique list.
    pub fn clear(&mut self) {
        self.equipment = Default::default();
        self.techniques.clear();
    }

    /// Append a technique at the next free index, returning that index.
    pub fn add_technique(&mut self, technique: TechniqueItem) -> Result<usize> {
        if self.techniques.len() >= MAX_TECHNIQUES {
            return Err(BuilderError::CapacityExceeded {
                what: "technique slots",
                limit: MAX_TECHNIQUES,
            });
        }
        self.techniques.push(technique);
        Ok(self.techniques.len() - 1)
    }

    /// Overwrite the technique at `index` in place, returning the displaced one.
    pub fn replace_technique(&mut self, index: usize, technique: TechniqueItem) -> Result<TechniqueItem> {
        if index >= self.techniques.len() {
            return Err(BuilderError::IndexOutOfRange { index, len: self.techniques.len() });
        }
        Ok(std::mem::replace(&mut self.techniques[index], technique))
    }

    /// Remove the technique at `index`; later entries shift left by one.
    pub fn remove_technique(&mut self, index: usize) -> Result<TechniqueItem> {
        if index >= self.techniques.len() {
            return Err(BuilderError::IndexOutOfRange { index, len: self.techniques.len() });
        }
        Ok(self.techniques.remove(index))
    }
}
