//! Read-only reference data: catalogs and embedded samples.

pub mod catalog;
pub mod embedded;

pub use catalog::{CatalogSummary, CharacterCatalog, EquipmentCatalog, TechniqueCatalog};
pub use embedded::{sample_characters, sample_equipment, sample_techniques};
