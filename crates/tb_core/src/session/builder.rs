//! Builder session.
//!
//! Owns the state behind the character customization view: the roster
//! navigator, the loadout manager, and the user-adjustable level and rarity.
//! Every navigation resets the loadout and restores the new character's base
//! level/rarity; loadouts are never carried across characters.

use crate::error::{BuilderError, Result};
use crate::loadout::{Loadout, LoadoutManager, NotificationSink};
use crate::models::{Character, EquipmentCategory, EquipmentItem, Rarity, StatBlock, TechniqueItem};
use crate::session::navigator::CharacterNavigator;
use crate::stats::{StatEngine, MAX_LEVEL, MIN_LEVEL};

#[derive(Debug)]
pub struct BuilderSession {
    navigator: CharacterNavigator,
    manager: LoadoutManager,
    level: u8,
    rarity: Rarity,
}

impl BuilderSession {
    /// Open a session over an ordered roster, starting at the first
    /// character with its base defaults and an empty loadout.
    pub fn new(roster: Vec<Character>) -> Result<Self> {
        let navigator = CharacterNavigator::new(roster)?;
        let level = navigator.current().base_level;
        let rarity = navigator.current().base_rarity;
        Ok(Self { navigator, manager: LoadoutManager::new(), level, rarity })
    }

    /// Open a session with a notification sink attached to the loadout
    /// manager (confirmation toasts in the presentation layer).
    pub fn with_sink(roster: Vec<Character>, sink: Box<dyn NotificationSink>) -> Result<Self> {
        let mut session = Self::new(roster)?;
        session.manager.set_sink(sink);
        Ok(session)
    }

    // ========================
    // Character access & navigation
    // ========================

    pub fn character(&self) -> &Character {
        self.navigator.current()
    }

    pub fn character_index(&self) -> usize {
        self.navigator.current_index()
    }

    pub fn roster(&self) -> &[Character] {
        self.navigator.roster()
    }

    /// Switch to the next character (wraparound), resetting the loadout and
    /// restoring that character's base level/rarity.
    pub fn next_character(&mut self) -> &Character {
        self.navigator.advance();
        self.apply_character_defaults();
        self.navigator.current()
    }

    /// Switch to the previous character (wraparound), with the same reset.
    pub fn previous_character(&mut self) -> &Character {
        self.navigator.rewind();
        self.apply_character_defaults();
        self.navigator.current()
    }

    /// Jump to a roster index, with the same reset. A failed jump leaves
    /// the session untouched.
    pub fn select_character(&mut self, index: usize) -> Result<&Character> {
        self.navigator.select(index)?;
        self.apply_character_defaults();
        Ok(self.navigator.current())
    }

    fn apply_character_defaults(&mut self) {
        let (level, rarity) = {
            let character = self.navigator.current();
            (character.base_level, character.base_rarity)
        };
        self.manager.reset();
        self.level = level;
        self.rarity = rarity;
    }

    // ========================
    // Level / rarity overrides
    // ========================

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn set_level(&mut self, level: u8) -> Result<()> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(BuilderError::invalid_input(format!(
                "Level must be between {} and {}, got {}",
                MIN_LEVEL, MAX_LEVEL, level
            )));
        }
        self.level = level;
        Ok(())
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn set_rarity(&mut self, rarity: Rarity) {
        self.rarity = rarity;
    }

    // ========================
    // Loadout mutation (delegates to the manager)
    // ========================

    pub fn loadout(&self) -> &Loadout {
        self.manager.loadout()
    }

    pub fn equip(&mut self, category: EquipmentCategory, item: EquipmentItem) -> Option<EquipmentItem> {
        self.manager.equip(category, item)
    }

    pub fn unequip(&mut self, category: EquipmentCategory) -> Option<EquipmentItem> {
        self.manager.unequip(category)
    }

    pub fn add_technique(&mut self, technique: TechniqueItem) -> Result<usize> {
        self.manager.add_technique(technique)
    }

    pub fn replace_technique(&mut self, index: usize, technique: TechniqueItem) -> Result<TechniqueItem> {
        self.manager.replace_technique(index, technique)
    }

    pub fn remove_technique(&mut self, index: usize) -> Result<TechniqueItem> {
        self.manager.remove_technique(index)
    }

    pub fn reset_loadout(&mut self) {
        self.manager.reset();
    }

    // ========================
    // Derived stats
    // ========================

    /// Current character's stats with the session's level, rarity and
    /// loadout applied.
    pub fn computed_stats(&self) -> Result<StatBlock> {
        StatEngine::compute_stats(
            self.navigator.current(),
            self.manager.loadout(),
            self.level,
            self.rarity,
        )
    }
}
