//! Read-only item catalogs.
//!
//! Catalogs are immutable reference data supplied externally (JSON). The
//! query surface mirrors what the collection screens need: lookups by id,
//! category/element/rarity filters, name search, and summary counts.

use crate::error::Result;
use crate::models::{
    Character, Element, EquipmentCategory, EquipmentItem, Position, Rarity, TechniqueItem,
    TechniqueType,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All selectable characters, in roster order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterCatalog {
    characters: Vec<Character>,
}

impl CharacterCatalog {
    pub fn new(characters: Vec<Character>) -> Self {
        Self { characters }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Case-insensitive exact name match.
    pub fn find_by_name(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn by_position(&self, position: Position) -> Vec<&Character> {
        self.characters.iter().filter(|c| c.position == position).collect()
    }

    pub fn by_element(&self, element: Element) -> Vec<&Character> {
        self.characters.iter().filter(|c| c.element == element).collect()
    }

    pub fn by_rarity(&self, rarity: Rarity) -> Vec<&Character> {
        self.characters.iter().filter(|c| c.base_rarity == rarity).collect()
    }

    /// Case-insensitive substring search over name and nickname.
    pub fn search(&self, query: &str) -> Vec<&Character> {
        let needle = query.to_lowercase();
        self.characters
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.nickname.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Collection-wide counts for the overview screen.
    pub fn summary(&self) -> CatalogSummary {
        let mut by_position = HashMap::new();
        let mut by_element = HashMap::new();
        let mut by_rarity = HashMap::new();
        for character in &self.characters {
            *by_position.entry(character.position).or_insert(0) += 1;
            *by_element.entry(character.element).or_insert(0) += 1;
            *by_rarity.entry(character.base_rarity).or_insert(0) += 1;
        }
        CatalogSummary {
            total_characters: self.characters.len(),
            by_position,
            by_element,
            by_rarity,
        }
    }
}

/// Counts per position/element/rarity across the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub total_characters: usize,
    pub by_position: HashMap<Position, usize>,
    pub by_element: HashMap<Element, usize>,
    pub by_rarity: HashMap<Rarity, usize>,
}

/// All obtainable equipment items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentCatalog {
    items: Vec<EquipmentItem>,
}

impl EquipmentCatalog {
    pub fn new(items: Vec<EquipmentItem>) -> Self {
        Self { items }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[EquipmentItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &EquipmentItem> {
        self.items.iter()
    }

    pub fn get(&self, id: &str) -> Option<&EquipmentItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn by_category(&self, category: EquipmentCategory) -> Vec<&EquipmentItem> {
        self.items.iter().filter(|i| i.category == category).collect()
    }

    pub fn by_rarity(&self, rarity: Rarity) -> Vec<&EquipmentItem> {
        self.items.iter().filter(|i| i.rarity == rarity).collect()
    }
}

/// All learnable techniques.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechniqueCatalog {
    techniques: Vec<TechniqueItem>,
}

impl TechniqueCatalog {
    pub fn new(techniques: Vec<TechniqueItem>) -> Self {
        Self { techniques }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }

    pub fn techniques(&self) -> &[TechniqueItem] {
        &self.techniques
    }

    pub fn iter(&self) -> impl Iterator<Item = &TechniqueItem> {
        self.techniques.iter()
    }

    pub fn get(&self, id: &str) -> Option<&TechniqueItem> {
        self.techniques.iter().find(|t| t.id == id)
    }

    pub fn by_type(&self, technique_type: TechniqueType) -> Vec<&TechniqueItem> {
        self.techniques.iter().filter(|t| t.technique_type == technique_type).collect()
    }
}
