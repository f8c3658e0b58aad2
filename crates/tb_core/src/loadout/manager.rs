//! Loadout state machine.
//!
//! Wraps the [`Loadout`] entity with the mutation API the presentation layer
//! drives, and emits confirmation events through an optional
//! [`NotificationSink`]. Every mutating call either applies fully or leaves
//! the loadout untouched; there is no intermediate state visible to readers.

use super::notifications::{LoadoutEvent, NotificationSink};
use super::Loadout;
use crate::error::Result;
use crate::models::{EquipmentCategory, EquipmentItem, TechniqueItem};
use std::fmt;

pub struct LoadoutManager {
    loadout: Loadout,
    sink: Option<Box<dyn NotificationSink>>,
}

impl fmt::Debug for LoadoutManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadoutManager")
            .field("loadout", &self.loadout)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

impl Default for LoadoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadoutManager {
    pub fn new() -> Self {
        Self { loadout: Loadout::new(), sink: None }
    }

    /// Attach a notification sink for user-facing confirmations.
    pub fn with_sink(sink: Box<dyn NotificationSink>) -> Self {
        Self { loadout: Loadout::new(), sink: Some(sink) }
    }

    pub fn set_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sink = Some(sink);
    }

    /// Current loadout snapshot.
    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    /// Place an item in its category slot. Whatever occupied the slot is
    /// replaced (last write wins) and returned. Notifies the sink.
    pub fn equip(&mut self, category: EquipmentCategory, item: EquipmentItem) -> Option<EquipmentItem> {
        let item_name = item.name.clone();
        let displaced = self.loadout.equip(category, item);
        self.emit(LoadoutEvent::ItemEquipped { category, item_name });
        displaced
    }

    /// Empty one category slot. Absence is valid; returns `None` when the
    /// slot was already empty.
    pub fn unequip(&mut self, category: EquipmentCategory) -> Option<EquipmentItem> {
        self.loadout.unequip(category)
    }

    /// Clear all equipment slots and the technique list. Called on every
    /// character switch.
    pub fn reset(&mut self) {
        self.loadout.clear();
    }

    /// Append a technique at the next free slot, returning its index.
    /// Fails with `CapacityExceeded` when all slots are filled.
    pub fn add_technique(&mut self, technique: TechniqueItem) -> Result<usize> {
        let technique_name = technique.name.clone();
        let slot = self.loadout.add_technique(technique)?;
        self.emit(LoadoutEvent::TechniqueAdded { slot, technique_name });
        Ok(slot)
    }

    /// Overwrite the technique at `index`, returning the displaced one.
    pub fn replace_technique(&mut self, index: usize, technique: TechniqueItem) -> Result<TechniqueItem> {
        self.loadout.replace_technique(index, technique)
    }

    /// Remove the technique at `index`; later slots shift left by one.
    pub fn remove_technique(&mut self, index: usize) -> Result<TechniqueItem> {
        self.loadout.remove_technique(index)
    }

    fn emit(&self, event: LoadoutEvent) {
        if let Some(sink) = &self.sink {
            sink.notify(&event);
        }
    }
}
