//! JSON API surface for presentation-layer integration.

pub mod session_json;

pub use session_json::{
    compute_stats_json, manage_loadout_json, navigate_json, ApiError, ApiResponse, API_VERSION,
};
