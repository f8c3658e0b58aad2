//! Stat scaling engine.
//!
//! Pure computation: (character base stats, loadout, level, rarity) → final
//! stat block. No internal state, no logging, inputs are never mutated.
//!
//! Scaling formula:
//!
//! ```text
//! level_factor(level) = 1 + (level - 1) / 98        // 1.0 at level 1, 2.0 at level 99
//! scaled              = floor(base * level_factor * rarity_multiplier)
//! final               = max(0, scaled + sum of equipment bonuses for the stat)
//! ```
//!
//! The level factor is linear, so values grow monotonically with level and a
//! character exactly doubles its base stats at the level cap. Rarity
//! multipliers are 1.0 / 1.1 / 1.25 / 1.4 (see [`Rarity::multiplier`]).
//! Equipment bonuses are flat post-scaling adjustments applied to both the
//! main and secondary value of a pair.

use crate::error::{BuilderError, Result};
use crate::loadout::Loadout;
use crate::models::{Character, Rarity, StatBlock, StatName, StatPair};

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 99;

/// Stateless stat calculator.
#[derive(Debug)]
pub struct StatEngine;

impl StatEngine {
    /// Compute the display-ready stat block for a character at the given
    /// level and rarity with the given loadout applied.
    ///
    /// Fails with `InvalidInput` when the level is outside `[1, 99]`.
    /// An empty loadout is valid and yields the base-scaled stats.
    pub fn compute_stats(
        character: &Character,
        loadout: &Loadout,
        level: u8,
        rarity: Rarity,
    ) -> Result<StatBlock> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(BuilderError::invalid_input(format!(
                "Level must be between {} and {}, got {}",
                MIN_LEVEL, MAX_LEVEL, level
            )));
        }

        let mut out = StatBlock::default();
        for stat in StatName::all() {
            let base = character.base_stats.get(*stat);
            let bonus = loadout.bonus_for(*stat);
            out.set(
                *stat,
                StatPair {
                    main: Self::scale_value(base.main, level, rarity, bonus),
                    secondary: Self::scale_value(base.secondary, level, rarity, bonus),
                },
            );
        }
        Ok(out)
    }

    /// Linear level factor: 1.0 at level 1, 2.0 at level 99.
    fn level_factor(level: u8) -> f32 {
        1.0 + (level - 1) as f32 / 98.0
    }

    fn scale_value(base: u16, level: u8, rarity: Rarity, bonus: i32) -> u16 {
        let scaled = (base as f32 * Self::level_factor(level) * rarity.multiplier()).floor() as i32;
        (scaled + bonus).clamp(0, u16::MAX as i32) as u16
    }
}
