//! Stat block model
//!
//! Seven named stats, each carrying a main and a secondary display value.
//! Field names follow the catalog JSON (`"kick": {"main": 95, "secondary": 100}`).

use serde::{Deserialize, Serialize};

/// The seven character stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatName {
    Kick,
    Control,
    Technique,
    Intelligence,
    Pressure,
    Agility,
    Physical,
}

impl StatName {
    /// All stats in display order.
    pub fn all() -> &'static [StatName] {
        &[
            StatName::Kick,
            StatName::Control,
            StatName::Technique,
            StatName::Intelligence,
            StatName::Pressure,
            StatName::Agility,
            StatName::Physical,
        ]
    }

    /// Catalog/JSON key for this stat.
    pub fn key(&self) -> &'static str {
        match self {
            StatName::Kick => "kick",
            StatName::Control => "control",
            StatName::Technique => "technique",
            StatName::Intelligence => "intelligence",
            StatName::Pressure => "pressure",
            StatName::Agility => "agility",
            StatName::Physical => "physical",
        }
    }

    /// Reverse lookup from a catalog key. Unknown keys yield `None`; callers
    /// iterating equipment bonus maps skip them.
    pub fn from_key(key: &str) -> Option<StatName> {
        match key {
            "kick" => Some(StatName::Kick),
            "control" => Some(StatName::Control),
            "technique" => Some(StatName::Technique),
            "intelligence" => Some(StatName::Intelligence),
            "pressure" => Some(StatName::Pressure),
            "agility" => Some(StatName::Agility),
            "physical" => Some(StatName::Physical),
            _ => None,
        }
    }
}

/// A single stat value pair (main value plus secondary display value).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatPair {
    pub main: u16,
    pub secondary: u16,
}

impl StatPair {
    pub fn new(main: u16, secondary: u16) -> Self {
        Self { main, secondary }
    }
}

/// Full stat block for a character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub kick: StatPair,
    pub control: StatPair,
    pub technique: StatPair,
    pub intelligence: StatPair,
    pub pressure: StatPair,
    pub agility: StatPair,
    pub physical: StatPair,
}

impl StatBlock {
    pub fn get(&self, stat: StatName) -> StatPair {
        match stat {
            StatName::Kick => self.kick,
            StatName::Control => self.control,
            StatName::Technique => self.technique,
            StatName::Intelligence => self.intelligence,
            StatName::Pressure => self.pressure,
            StatName::Agility => self.agility,
            StatName::Physical => self.physical,
        }
    }

    pub fn set(&mut self, stat: StatName, value: StatPair) {
        match stat {
            StatName::Kick => self.kick = value,
            StatName::Control => self.control = value,
            StatName::Technique => self.technique = value,
            StatName::Intelligence => self.intelligence = value,
            StatName::Pressure => self.pressure = value,
            StatName::Agility => self.agility = value,
            StatName::Physical => self.physical = value,
        }
    }

    /// Sum of the seven main values (used for list sorting in the UI).
    pub fn total_main(&self) -> u32 {
        StatName::all().iter().map(|s| self.get(*s).main as u32).sum()
    }

    /// Per-stat main-value differences (`self` minus `other`), for
    /// before/after comparison when the loadout changes.
    pub fn diff(&self, other: &StatBlock) -> StatBlockDiff {
        StatBlockDiff {
            kick: self.kick.main as i32 - other.kick.main as i32,
            control: self.control.main as i32 - other.control.main as i32,
            technique: self.technique.main as i32 - other.technique.main as i32,
            intelligence: self.intelligence.main as i32 - other.intelligence.main as i32,
            pressure: self.pressure.main as i32 - other.pressure.main as i32,
            agility: self.agility.main as i32 - other.agility.main as i32,
            physical: self.physical.main as i32 - other.physical.main as i32,
        }
    }
}

/// Main-value differences between two stat blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlockDiff {
    pub kick: i32,
    pub control: i32,
    pub technique: i32,
    pub intelligence: i32,
    pub pressure: i32,
    pub agility: i32,
    pub physical: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_key_roundtrip() {
        for stat in StatName::all() {
            assert_eq!(StatName::from_key(stat.key()), Some(*stat));
        }
        assert_eq!(StatName::from_key("stamina"), None);
        assert_eq!(StatName::from_key(""), None);
    }

    #[test]
    fn test_get_set_cover_all_stats() {
        let mut block = StatBlock::default();
        for (i, stat) in StatName::all().iter().enumerate() {
            block.set(*stat, StatPair::new(i as u16 + 1, 0));
        }
        for (i, stat) in StatName::all().iter().enumerate() {
            assert_eq!(block.get(*stat).main, i as u16 + 1);
        }
        assert_eq!(block.total_main(), (1..=7).sum::<u32>());
    }

    #[test]
    fn test_diff_is_signed() {
        let mut a = StatBlock::default();
        let mut b = StatBlock::default();
        a.set(StatName::Kick, StatPair::new(100, 0));
        b.set(StatName::Kick, StatPair::new(120, 0));
        assert_eq!(a.diff(&b).kick, -20);
        assert_eq!(b.diff(&a).kick, 20);
    }

    #[test]
    fn test_serde_field_names_match_catalog() {
        let json = r#"{
            "kick": {"main": 95, "secondary": 100},
            "control": {"main": 85, "secondary": 90},
            "technique": {"main": 90, "secondary": 95},
            "intelligence": {"main": 80, "secondary": 85},
            "pressure": {"main": 75, "secondary": 80},
            "agility": {"main": 85, "secondary": 90},
            "physical": {"main": 80, "secondary": 85}
        }"#;
        let block: StatBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.kick, StatPair::new(95, 100));
        assert_eq!(block.physical, StatPair::new(80, 85));
    }
}
