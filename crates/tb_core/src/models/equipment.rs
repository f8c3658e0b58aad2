//! Equipment items
//!
//! Each item occupies one of the four fixed slot categories and contributes
//! flat per-stat bonuses. Bonus maps are keyed by stat name strings so the
//! catalog can carry keys this engine does not know about; those are ignored.

use super::character::Rarity;
use super::stats::StatName;
use crate::error::BuilderError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

/// The four fixed equipment slot categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentCategory {
    Boots,
    Bracelet,
    Pendant,
    Special,
}

impl EquipmentCategory {
    /// All categories, in slot order.
    pub fn all() -> &'static [EquipmentCategory] {
        &[
            EquipmentCategory::Boots,
            EquipmentCategory::Bracelet,
            EquipmentCategory::Pendant,
            EquipmentCategory::Special,
        ]
    }

    /// Fixed slot index for this category.
    pub fn index(&self) -> usize {
        match self {
            EquipmentCategory::Boots => 0,
            EquipmentCategory::Bracelet => 1,
            EquipmentCategory::Pendant => 2,
            EquipmentCategory::Special => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentCategory::Boots => "Boots",
            EquipmentCategory::Bracelet => "Bracelet",
            EquipmentCategory::Pendant => "Pendant",
            EquipmentCategory::Special => "Special",
        }
    }
}

impl FromStr for EquipmentCategory {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "boots" => Ok(EquipmentCategory::Boots),
            "bracelet" => Ok(EquipmentCategory::Bracelet),
            "pendant" => Ok(EquipmentCategory::Pendant),
            "special" => Ok(EquipmentCategory::Special),
            other => {
                Err(BuilderError::invalid_input(format!("Unknown equipment category: {}", other)))
            }
        }
    }
}

/// Equipment catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    pub category: EquipmentCategory,
    pub rarity: Rarity,
    /// Flat per-stat bonus, keyed by stat name (`"kick": 20`).
    #[serde(default)]
    pub stats: HashMap<String, i16>,
}

impl EquipmentItem {
    pub fn new(name: &str, category: EquipmentCategory, rarity: Rarity) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            icon: String::new(),
            description: String::new(),
            category,
            rarity,
            stats: HashMap::new(),
        }
    }

    pub fn with_bonus(mut self, stat: StatName, bonus: i16) -> Self {
        self.stats.insert(stat.key().to_string(), bonus);
        self
    }

    /// Bonus this item grants for one stat. Keys the engine does not know
    /// about never match a `StatName` and therefore never contribute.
    pub fn bonus_for(&self, stat: StatName) -> i16 {
        self.stats.get(stat.key()).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_indices_are_distinct() {
        let mut seen = [false; 4];
        for cat in EquipmentCategory::all() {
            assert!(!seen[cat.index()]);
            seen[cat.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Boots".parse::<EquipmentCategory>().unwrap(), EquipmentCategory::Boots);
        assert_eq!("pendant".parse::<EquipmentCategory>().unwrap(), EquipmentCategory::Pendant);
        assert!("Gloves".parse::<EquipmentCategory>().is_err());
    }

    #[test]
    fn test_bonus_lookup_ignores_unknown_keys() {
        let mut item =
            EquipmentItem::new("Lightning Boots", EquipmentCategory::Boots, Rarity::Legendary)
                .with_bonus(StatName::Kick, 20)
                .with_bonus(StatName::Agility, 15);
        item.stats.insert("luck".to_string(), 99);

        assert_eq!(item.bonus_for(StatName::Kick), 20);
        assert_eq!(item.bonus_for(StatName::Agility), 15);
        assert_eq!(item.bonus_for(StatName::Control), 0);
    }

    #[test]
    fn test_item_deserializes_from_catalog_json() {
        let json = r#"{
            "id": "eq_lightning_boots",
            "name": "Lightning Boots",
            "category": "Boots",
            "rarity": "Legendary",
            "description": "Boots that enhance kicking power and agility",
            "stats": {"kick": 20, "agility": 15}
        }"#;
        let item: EquipmentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, EquipmentCategory::Boots);
        assert_eq!(item.bonus_for(StatName::Kick), 20);
        assert!(item.icon.is_empty());
    }
}
