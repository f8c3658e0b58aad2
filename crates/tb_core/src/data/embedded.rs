//! Embedded sample catalogs.
//!
//! The default catalogs are embedded with `include_str!` so the builder
//! works without any file I/O; consumers that ship their own data load it
//! through the `from_json` constructors instead. Each catalog is parsed once
//! and cached.

use super::catalog::{CharacterCatalog, EquipmentCatalog, TechniqueCatalog};
use std::sync::OnceLock;

/// Character catalog JSON.
pub const CHARACTERS_JSON: &str = include_str!("../../data/characters.json");

/// Equipment catalog JSON.
pub const EQUIPMENT_JSON: &str = include_str!("../../data/equipment.json");

/// Technique catalog JSON.
pub const TECHNIQUES_JSON: &str = include_str!("../../data/techniques.json");

static CHARACTERS: OnceLock<CharacterCatalog> = OnceLock::new();
static EQUIPMENT: OnceLock<EquipmentCatalog> = OnceLock::new();
static TECHNIQUES: OnceLock<TechniqueCatalog> = OnceLock::new();

/// Embedded character catalog. First call parses the JSON, later calls
/// return the cached catalog.
pub fn sample_characters() -> &'static CharacterCatalog {
    CHARACTERS.get_or_init(|| {
        CharacterCatalog::from_json(CHARACTERS_JSON)
            .expect("Embedded character catalog JSON is corrupted")
    })
}

/// Embedded equipment catalog.
pub fn sample_equipment() -> &'static EquipmentCatalog {
    EQUIPMENT.get_or_init(|| {
        EquipmentCatalog::from_json(EQUIPMENT_JSON)
            .expect("Embedded equipment catalog JSON is corrupted")
    })
}

/// Embedded technique catalog.
pub fn sample_techniques() -> &'static TechniqueCatalog {
    TECHNIQUES.get_or_init(|| {
        TechniqueCatalog::from_json(TECHNIQUES_JSON)
            .expect("Embedded technique catalog JSON is corrupted")
    })
}
