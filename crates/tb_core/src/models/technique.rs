//! Hissatsu techniques
//!
//! Special techniques a character can slot (max 4, order = slot index).

use crate::error::BuilderError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Technique classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechniqueType {
    Shot,
    Dribble,
    Block,
    Save,
}

impl TechniqueType {
    pub fn all() -> &'static [TechniqueType] {
        &[TechniqueType::Shot, TechniqueType::Dribble, TechniqueType::Block, TechniqueType::Save]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TechniqueType::Shot => "Shot",
            TechniqueType::Dribble => "Dribble",
            TechniqueType::Block => "Block",
            TechniqueType::Save => "Save",
        }
    }
}

impl FromStr for TechniqueType {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shot" => Ok(TechniqueType::Shot),
            "dribble" => Ok(TechniqueType::Dribble),
            "block" => Ok(TechniqueType::Block),
            "save" => Ok(TechniqueType::Save),
            other => Err(BuilderError::invalid_input(format!("Unknown technique type: {}", other))),
        }
    }
}

/// Technique catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub technique_type: TechniqueType,
}

impl TechniqueItem {
    pub fn new(name: &str, technique_type: TechniqueType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            icon: String::new(),
            description: String::new(),
            technique_type,
        }
    }
}
