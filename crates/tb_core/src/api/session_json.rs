//! JSON API for the builder session.
//!
//! String-in/string-out entry points for presentation layers that talk JSON
//! (game engine bridges, web views). Every response is wrapped in the same
//! envelope: `success`/`data`/`error`/`schema_version`/`timestamp`. Errors
//! are reported in the envelope with stable codes; handlers never panic on
//! bad input.

use crate::error::BuilderError;
use crate::loadout::Loadout;
use crate::models::{
    Character, EquipmentCategory, EquipmentItem, Rarity, StatBlock, StatBlockDiff, TechniqueItem,
};
use crate::session::BuilderSession;
use crate::stats::StatEngine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// API version for schema compatibility.
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Structured API error with a stable code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string() }
    }
}

impl From<&BuilderError> for ApiError {
    fn from(err: &BuilderError) -> Self {
        ApiError::new(err.code(), &err.to_string())
    }
}

fn to_json<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap()
}

fn check_schema_version(version: &Option<String>) -> Result<(), ApiError> {
    match version {
        Some(v) if v != API_VERSION => Err(ApiError::new(
            "INVALID_INPUT",
            &format!("Unsupported schema version: {} (expected {})", v, API_VERSION),
        )),
        _ => Ok(()),
    }
}

// ============================================================================
// Stat computation
// ============================================================================

/// Stat computation request. `rarity` arrives as a string so out-of-domain
/// tiers can be rejected with `INVALID_INPUT` instead of a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeStatsRequest {
    pub schema_version: Option<String>,
    pub character: Character,
    #[serde(default)]
    pub loadout: Option<Loadout>,
    pub level: u8,
    pub rarity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeStatsResponse {
    pub character_id: String,
    pub level: u8,
    pub rarity: Rarity,
    pub stats: StatBlock,
}

/// Compute display-ready stats for a character + loadout snapshot.
pub fn compute_stats_json(request_json: &str) -> String {
    let request: ComputeStatsRequest = match serde_json::from_str(request_json) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "compute_stats: malformed request JSON");
            let error =
                ApiError::new("INVALID_JSON", &format!("Failed to parse request JSON: {}", e));
            return to_json(&ApiResponse::<ComputeStatsResponse>::error(error));
        }
    };

    if let Err(e) = check_schema_version(&request.schema_version) {
        return to_json(&ApiResponse::<ComputeStatsResponse>::error(e));
    }

    let rarity: Rarity = match request.rarity.parse() {
        Ok(r) => r,
        Err(ref e) => {
            warn!(rarity = %request.rarity, "compute_stats: unknown rarity tier");
            return to_json(&ApiResponse::<ComputeStatsResponse>::error(ApiError::from(e)));
        }
    };

    let loadout = request.loadout.unwrap_or_default();
    match StatEngine::compute_stats(&request.character, &loadout, request.level, rarity) {
        Ok(stats) => {
            debug!(
                character = %request.character.name,
                level = request.level,
                rarity = rarity.as_str(),
                "computed stats"
            );
            to_json(&ApiResponse::ok(ComputeStatsResponse {
                character_id: request.character.id.clone(),
                level: request.level,
                rarity,
                stats,
            }))
        }
        Err(ref e) => to_json(&ApiResponse::<ComputeStatsResponse>::error(ApiError::from(e))),
    }
}

// ============================================================================
// Loadout management
// ============================================================================

/// Loadout mutation actions, tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LoadoutAction {
    Equip { category: EquipmentCategory, item: EquipmentItem },
    Unequip { category: EquipmentCategory },
    AddTechnique { technique: TechniqueItem },
    ReplaceTechnique { slot: usize, technique: TechniqueItem },
    RemoveTechnique { slot: usize },
    Reset,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadoutRequest {
    pub schema_version: Option<String>,
    pub action: LoadoutAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadoutResponse {
    pub loadout: Loadout,
    pub stats: StatBlock,
    /// Main-value deltas caused by this action (after minus before).
    pub stat_changes: StatBlockDiff,
    pub messages: Vec<String>,
}

/// Apply a loadout action to the session. On error the session is unchanged
/// and the envelope carries the error code.
pub fn manage_loadout_json(request_json: &str, session: &mut BuilderSession) -> String {
    let request: LoadoutRequest = match serde_json::from_str(request_json) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "manage_loadout: malformed request JSON");
            let error =
                ApiError::new("INVALID_JSON", &format!("Failed to parse request JSON: {}", e));
            return to_json(&ApiResponse::<LoadoutResponse>::error(error));
        }
    };

    if let Err(e) = check_schema_version(&request.schema_version) {
        return to_json(&ApiResponse::<LoadoutResponse>::error(e));
    }

    let stats_before = match session.computed_stats() {
        Ok(s) => s,
        Err(ref e) => return to_json(&ApiResponse::<LoadoutResponse>::error(ApiError::from(e))),
    };

    let mut messages = Vec::new();
    let outcome = match request.action {
        LoadoutAction::Equip { category, item } => {
            let item_name = item.name.clone();
            let displaced = session.equip(category, item);
            match displaced {
                Some(old) => messages
                    .push(format!("Equipped {} (replaced {})", item_name, old.name)),
                None => messages.push(format!("Equipped {}", item_name)),
            }
            Ok(())
        }
        LoadoutAction::Unequip { category } => {
            match session.unequip(category) {
                Some(old) => messages.push(format!("Removed {}", old.name)),
                None => messages.push(format!("{} slot was already empty", category.as_str())),
            }
            Ok(())
        }
        LoadoutAction::AddTechnique { technique } => {
            let name = technique.name.clone();
            session.add_technique(technique).map(|slot| {
                messages.push(format!("Added {} to slot {}", name, slot + 1));
            })
        }
        LoadoutAction::ReplaceTechnique { slot, technique } => {
            let name = technique.name.clone();
            session.replace_technique(slot, technique).map(|old| {
                messages.push(format!("Replaced {} with {}", old.name, name));
            })
        }
        LoadoutAction::RemoveTechnique { slot } => session.remove_technique(slot).map(|old| {
            messages.push(format!("Removed {}", old.name));
        }),
        LoadoutAction::Reset => {
            session.reset_loadout();
            messages.push("Loadout cleared".to_string());
            Ok(())
        }
    };

    if let Err(ref e) = outcome {
        warn!(error = %e, "manage_loadout: action rejected");
        return to_json(&ApiResponse::<LoadoutResponse>::error(ApiError::from(e)));
    }

    let stats = match session.computed_stats() {
        Ok(s) => s,
        Err(ref e) => return to_json(&ApiResponse::<LoadoutResponse>::error(ApiError::from(e))),
    };
    debug!(messages = ?messages, "loadout updated");
    to_json(&ApiResponse::ok(LoadoutResponse {
        loadout: session.loadout().clone(),
        stat_changes: stats.diff(&stats_before),
        stats,
        messages,
    }))
}

// ============================================================================
// Navigation
// ============================================================================

/// Navigation actions, tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NavigateAction {
    Next,
    Previous,
    Select { index: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateRequest {
    pub schema_version: Option<String>,
    pub action: NavigateAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateResponse {
    pub index: usize,
    pub character: Character,
    pub level: u8,
    pub rarity: Rarity,
    pub loadout: Loadout,
}

/// Switch the active character. The loadout in the response is always the
/// freshly reset (empty) one.
pub fn navigate_json(request_json: &str, session: &mut BuilderSession) -> String {
    let request: NavigateRequest = match serde_json::from_str(request_json) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "navigate: malformed request JSON");
            let error =
                ApiError::new("INVALID_JSON", &format!("Failed to parse request JSON: {}", e));
            return to_json(&ApiResponse::<NavigateResponse>::error(error));
        }
    };

    if let Err(e) = check_schema_version(&request.schema_version) {
        return to_json(&ApiResponse::<NavigateResponse>::error(e));
    }

    let outcome = match request.action {
        NavigateAction::Next => {
            session.next_character();
            Ok(())
        }
        NavigateAction::Previous => {
            session.previous_character();
            Ok(())
        }
        NavigateAction::Select { index } => session.select_character(index).map(|_| ()),
    };

    if let Err(ref e) = outcome {
        warn!(error = %e, "navigate: rejected");
        return to_json(&ApiResponse::<NavigateResponse>::error(ApiError::from(e)));
    }

    debug!(character = %session.character().name, "navigated");
    to_json(&ApiResponse::ok(NavigateResponse {
        index: session.character_index(),
        character: session.character().clone(),
        level: session.level(),
        rarity: session.rarity(),
        loadout: session.loadout().clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Element, Position, StatName, StatPair};
    use serde_json::json;

    fn character(name: &str, level: u8) -> Character {
        let mut stats = StatBlock::default();
        stats.set(StatName::Kick, StatPair::new(80, 10));
        let mut c = Character::new(name, Position::FW, Element::Fire, stats);
        c.base_level = level;
        c.base_rarity = Rarity::Rare;
        c
    }

    fn session() -> BuilderSession {
        BuilderSession::new(vec![character("Axel", 50), character("Mark", 95)]).unwrap()
    }

    fn parse(response: &str) -> serde_json::Value {
        serde_json::from_str(response).unwrap()
    }

    #[test]
    fn test_compute_stats_json_happy_path() {
        let request = json!({
            "character": character("Axel", 50),
            "level": 50,
            "rarity": "Rare"
        });

        let response = parse(&compute_stats_json(&request.to_string()));
        assert_eq!(response["success"], true);
        assert_eq!(response["schema_version"], "v1");
        // floor(80 * 1.5 * 1.1) = 132
        assert_eq!(response["data"]["stats"]["kick"]["main"], 132);
    }

    #[test]
    fn test_compute_stats_json_rejects_unknown_rarity() {
        let request = json!({
            "character": character("Axel", 50),
            "level": 50,
            "rarity": "Mythic"
        });

        let response = parse(&compute_stats_json(&request.to_string()));
        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "INVALID_INPUT");
    }

    #[test]
    fn test_compute_stats_json_rejects_bad_level() {
        let request = json!({
            "character": character("Axel", 50),
            "level": 120,
            "rarity": "Common"
        });

        let response = parse(&compute_stats_json(&request.to_string()));
        assert_eq!(response["error"]["code"], "INVALID_INPUT");
    }

    #[test]
    fn test_malformed_json_yields_invalid_json_code() {
        let response = parse(&compute_stats_json("{not json"));
        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "INVALID_JSON");
    }

    #[test]
    fn test_schema_version_mismatch_is_rejected() {
        let request = json!({
            "schema_version": "v9",
            "character": character("Axel", 50),
            "level": 50,
            "rarity": "Rare"
        });
        let response = parse(&compute_stats_json(&request.to_string()));
        assert_eq!(response["error"]["code"], "INVALID_INPUT");
    }

    #[test]
    fn test_manage_loadout_equip_reports_stat_changes() {
        let mut session = session();
        let item = EquipmentItem::new("Lightning Boots", EquipmentCategory::Boots, Rarity::Legendary)
            .with_bonus(StatName::Kick, 20);
        let request = json!({
            "action": {"type": "Equip", "category": "Boots", "item": item}
        });

        let response = parse(&manage_loadout_json(&request.to_string(), &mut session));
        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["stat_changes"]["kick"], 20);
        assert_eq!(response["data"]["messages"][0], "Equipped Lightning Boots");
        assert!(session.loadout().equipment(EquipmentCategory::Boots).is_some());
    }

    #[test]
    fn test_manage_loadout_capacity_error_leaves_session_unchanged() {
        let mut session = session();
        for i in 0..4 {
            let request = json!({
                "action": {
                    "type": "AddTechnique",
                    "technique": TechniqueItem::new(&format!("T{}", i), crate::models::TechniqueType::Shot)
                }
            });
            let response = parse(&manage_loadout_json(&request.to_string(), &mut session));
            assert_eq!(response["success"], true);
        }

        let request = json!({
            "action": {
                "type": "AddTechnique",
                "technique": TechniqueItem::new("Overflow", crate::models::TechniqueType::Shot)
            }
        });
        let response = parse(&manage_loadout_json(&request.to_string(), &mut session));
        assert_eq!(response["error"]["code"], "CAPACITY_EXCEEDED");
        assert_eq!(session.loadout().technique_count(), 4);
    }

    #[test]
    fn test_manage_loadout_bad_slot_index() {
        let mut session = session();
        let request = json!({
            "action": {"type": "RemoveTechnique", "slot": 0}
        });
        let response = parse(&manage_loadout_json(&request.to_string(), &mut session));
        assert_eq!(response["error"]["code"], "INDEX_OUT_OF_RANGE");
    }

    #[test]
    fn test_navigate_json_resets_loadout() {
        let mut session = session();
        session.equip(
            EquipmentCategory::Boots,
            EquipmentItem::new("Boots", EquipmentCategory::Boots, Rarity::Common),
        );

        let request = json!({"action": {"type": "Next"}});
        let response = parse(&navigate_json(&request.to_string(), &mut session));
        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["character"]["name"], "Mark");
        assert_eq!(response["data"]["level"], 95);
        assert_eq!(response["data"]["loadout"]["techniques"], json!([]));
        assert!(session.loadout().is_empty());
    }

    #[test]
    fn test_navigate_json_select_out_of_range() {
        let mut session = session();
        let request = json!({"action": {"type": "Select", "index": 99}});
        let response = parse(&navigate_json(&request.to_string(), &mut session));
        assert_eq!(response["error"]["code"], "INDEX_OUT_OF_RANGE");
        assert_eq!(session.character().name, "Axel");
    }
}
