//! Character reference data
//!
//! Characters are immutable catalog entries: identity, position, element,
//! base level/rarity, base stats, team passives and signature techniques.
//! The field set follows the catalog JSON schema.

use super::stats::StatBlock;
use super::technique::TechniqueItem;
use crate::error::BuilderError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Pitch position, generic four-way split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    FW,
    MF,
    DF,
    GK,
}

impl Position {
    pub fn all() -> &'static [Position] {
        &[Position::FW, Position::MF, Position::DF, Position::GK]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::FW => "FW",
            Position::MF => "MF",
            Position::DF => "DF",
            Position::GK => "GK",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }
}

impl FromStr for Position {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FW" => Ok(Position::FW),
            "MF" => Ok(Position::MF),
            "DF" => Ok(Position::DF),
            "GK" => Ok(Position::GK),
            other => Err(BuilderError::invalid_input(format!("Unknown position: {}", other))),
        }
    }
}

/// Elemental affinity of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Wind,
    Wood,
    Void,
}

impl Element {
    pub fn all() -> &'static [Element] {
        &[Element::Fire, Element::Earth, Element::Wind, Element::Wood, Element::Void]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Wind => "Wind",
            Element::Wood => "Wood",
            Element::Void => "Void",
        }
    }
}

impl FromStr for Element {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fire" => Ok(Element::Fire),
            "earth" => Ok(Element::Earth),
            "wind" => Ok(Element::Wind),
            "wood" => Ok(Element::Wood),
            "void" => Ok(Element::Void),
            other => Err(BuilderError::invalid_input(format!("Unknown element: {}", other))),
        }
    }
}

/// Rarity tiers, ordered from most common to rarest.
///
/// Used both as a catalog attribute and as the user-adjustable override that
/// feeds stat scaling (see `StatEngine`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All tiers in ascending order.
    pub fn all() -> &'static [Rarity] {
        &[Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary]
    }

    /// Stat scaling multiplier for this tier.
    pub fn multiplier(&self) -> f32 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.1,
            Rarity::Epic => 1.25,
            Rarity::Legendary => 1.4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl FromStr for Rarity {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "common" => Ok(Rarity::Common),
            "rare" => Ok(Rarity::Rare),
            "epic" => Ok(Rarity::Epic),
            "legendary" => Ok(Rarity::Legendary),
            other => Err(BuilderError::invalid_input(format!("Unknown rarity tier: {}", other))),
        }
    }
}

/// A passive effect the character contributes to the whole team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPassive {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Immutable character catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub position: Position,
    pub element: Element,
    pub jersey_number: u8,
    pub base_level: u8,
    pub base_rarity: Rarity,
    pub base_stats: StatBlock,
    #[serde(default)]
    pub team_passives: Vec<TeamPassive>,
    /// Signature techniques (at most 4).
    #[serde(default)]
    pub hissatsu: Vec<TechniqueItem>,
}

impl Character {
    /// Build a character programmatically (tests, tools). Catalog entries
    /// carry their own ids; this constructor generates one.
    pub fn new(name: &str, position: Position, element: Element, base_stats: StatBlock) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            nickname: String::new(),
            title: String::new(),
            description: String::new(),
            position,
            element,
            jersey_number: 0,
            base_level: 1,
            base_rarity: Rarity::Common,
            base_stats,
            team_passives: Vec::new(),
            hissatsu: Vec::new(),
        }
    }
}
