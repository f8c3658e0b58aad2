//! Fire-and-forget loadout notifications.
//!
//! The presentation layer registers a sink to show confirmation toasts
//! ("item equipped", "added to team"). Sinks receive events after the state
//! change has been applied and must not influence manager state.

use crate::models::EquipmentCategory;
use serde::Serialize;
use tracing::info;

/// User-facing confirmation events emitted by the loadout manager.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LoadoutEvent {
    ItemEquipped { category: EquipmentCategory, item_name: String },
    TechniqueAdded { slot: usize, technique_name: String },
}

/// Notification receiver for loadout confirmations. Fire-and-forget: no
/// return value, no error channel.
pub trait NotificationSink {
    fn notify(&self, event: &LoadoutEvent);
}

/// Default sink that logs events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, event: &LoadoutEvent) {
        match event {
            LoadoutEvent::ItemEquipped { category, item_name } => {
                info!(category = category.as_str(), item = %item_name, "item equipped");
            }
            LoadoutEvent::TechniqueAdded { slot, technique_name } => {
                info!(slot, technique = %technique_name, "technique added");
            }
        }
    }
}

/// Test sink that records every event it receives. Clones share the same
/// event buffer, so a test can keep one handle and give the manager another.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingSink {
    events: std::rc::Rc<std::cell::RefCell<Vec<LoadoutEvent>>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LoadoutEvent> {
        self.events.borrow().clone()
    }
}

#[cfg(test)]
impl NotificationSink for RecordingSink {
    fn notify(&self, event: &LoadoutEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
