//! Roster navigation.
//!
//! Cycles through an ordered character list with wraparound in both
//! directions. Navigation itself carries no loadout logic; the session
//! layered on top performs the reset (see `BuilderSession`).

use crate::error::{BuilderError, Result};
use crate::models::Character;

#[derive(Debug, Clone)]
pub struct CharacterNavigator {
    roster: Vec<Character>,
    current: usize,
}

impl CharacterNavigator {
    /// Build a navigator over an ordered roster. The roster must not be
    /// empty; there is always an active character.
    pub fn new(roster: Vec<Character>) -> Result<Self> {
        if roster.is_empty() {
            return Err(BuilderError::invalid_input("Roster must contain at least one character"));
        }
        Ok(Self { roster, current: 0 })
    }

    pub fn current(&self) -> &Character {
        &self.roster[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        false // construction rejects empty rosters
    }

    pub fn roster(&self) -> &[Character] {
        &self.roster
    }

    /// Move to the next character, wrapping at the end.
    pub fn advance(&mut self) -> &Character {
        self.current = (self.current + 1) % self.roster.len();
        self.current()
    }

    /// Move to the previous character, wrapping at the start.
    pub fn rewind(&mut self) -> &Character {
        self.current = (self.current + self.roster.len() - 1) % self.roster.len();
        self.current()
    }

    /// Jump to a specific roster index.
    pub fn select(&mut self, index: usize) -> Result<&Character> {
        if index >= self.roster.len() {
            return Err(BuilderError::IndexOutOfRange { index, len: self.roster.len() });
        }
        self.current = index;
        Ok(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Element, Position, StatBlock};

    fn roster(names: &[&str]) -> Vec<Character> {
        names
            .iter()
            .map(|n| Character::new(n, Position::FW, Element::Fire, StatBlock::default()))
            .collect()
    }

    #[test]
    fn test_empty_roster_is_rejected() {
        assert!(CharacterNavigator::new(Vec::new()).is_err());
    }

    #[test]
    fn test_advance_wraps_around() {
        let mut nav = CharacterNavigator::new(roster(&["A", "B", "C"])).unwrap();
        assert_eq!(nav.current().name, "A");
        assert_eq!(nav.advance().name, "B");
        assert_eq!(nav.advance().name, "C");
        assert_eq!(nav.advance().name, "A");
    }

    #[test]
    fn test_rewind_wraps_around() {
        let mut nav = CharacterNavigator::new(roster(&["A", "B", "C"])).unwrap();
        assert_eq!(nav.rewind().name, "C");
        assert_eq!(nav.rewind().name, "B");
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut nav = CharacterNavigator::new(roster(&["A", "B", "C", "D"])).unwrap();
        for _ in 0..nav.len() {
            nav.advance();
        }
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_select_validates_index() {
        let mut nav = CharacterNavigator::new(roster(&["A", "B"])).unwrap();
        assert_eq!(nav.select(1).unwrap().name, "B");
        assert_eq!(nav.select(2).unwrap_err().code(), "INDEX_OUT_OF_RANGE");
        // Failed select leaves the position unchanged.
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_single_character_roster_cycles_to_itself() {
        let mut nav = CharacterNavigator::new(roster(&["Solo"])).unwrap();
        assert_eq!(nav.advance().name, "Solo");
        assert_eq!(nav.rewind().name, "Solo");
    }
}
