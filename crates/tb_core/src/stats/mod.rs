//! Stat computation.

pub mod engine;

pub use engine::{StatEngine, MAX_LEVEL, MIN_LEVEL};
