//! # tb_core - Character Loadout & Stat Computation Core
//!
//! This library provides the UI-independent core behind the character
//! customization screen of a squad-builder game: stat computation, loadout
//! (equipment + technique) slot management, roster navigation, read-only
//! item catalogs, and a JSON API for easy integration with game engines.
//!
//! ## Features
//! - Pure, deterministic stat scaling (level + rarity + equipment bonuses)
//! - Loadout invariants enforced on every mutation (4 equipment slots,
//!   at most 4 technique slots)
//! - Wraparound roster navigation with automatic loadout reset
//! - JSON API with a stable response envelope

pub mod api;
pub mod data;
pub mod error;
pub mod loadout;
pub mod models;
pub mod session;
pub mod stats;

// Re-export main API functions
pub use api::session_json::{compute_stats_json, manage_loadout_json, navigate_json};

pub use error::{BuilderError, Result};

// Re-export model types
pub use models::{
    Character, Element, EquipmentCategory, EquipmentItem, Position, Rarity, StatBlock,
    StatBlockDiff, StatName, StatPair, TeamPassive, TechniqueItem, TechniqueType,
};

// Re-export loadout system
pub use loadout::{
    Loadout, LoadoutEvent, LoadoutManager, NotificationSink, TracingSink, MAX_TECHNIQUES,
};

// Re-export stat engine
pub use stats::{StatEngine, MAX_LEVEL, MIN_LEVEL};

// Re-export session types
pub use session::{BuilderSession, CharacterNavigator};

// Re-export catalogs
pub use data::{CatalogSummary, CharacterCatalog, EquipmentCatalog, TechniqueCatalog};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
