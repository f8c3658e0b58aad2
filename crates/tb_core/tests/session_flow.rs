//! End-to-end walk through the builder session against the embedded
//! catalogs: navigation resets, loadout rules, and stat recomputation.

use tb_core::{
    data, BuilderSession, EquipmentCategory, Rarity, StatName, MAX_TECHNIQUES,
};

fn session() -> BuilderSession {
    BuilderSession::new(data::sample_characters().characters().to_vec()).unwrap()
}

#[test]
fn session_starts_on_first_catalog_character() {
    let session = session();
    assert_eq!(session.character().id, "char_axel_blaze");
    assert_eq!(session.level(), session.character().base_level);
    assert_eq!(session.rarity(), session.character().base_rarity);
    assert!(session.loadout().is_empty());
}

#[test]
fn full_forward_cycle_returns_to_start_and_resets_each_step() {
    let mut session = session();
    let start_id = session.character().id.clone();
    let n = session.roster().len();

    for _ in 0..n {
        // Dirty the state so the reset is observable.
        let technique = data::sample_techniques().get("ht_fire_tornado").unwrap().clone();
        session.add_technique(technique).unwrap();
        session.next_character();
        assert!(session.loadout().is_empty());
        assert_eq!(session.level(), session.character().base_level);
        assert_eq!(session.rarity(), session.character().base_rarity);
    }

    assert_eq!(session.character().id, start_id);
}

#[test]
fn backward_navigation_wraps_to_roster_end() {
    let mut session = session();
    let last = session.roster().last().unwrap().id.clone();
    session.previous_character();
    assert_eq!(session.character().id, last);
}

#[test]
fn equip_unequip_restores_baseline_stats() {
    let mut session = session();
    let baseline = session.computed_stats().unwrap();

    let boots = data::sample_equipment().get("eq_lightning_boots").unwrap().clone();
    session.equip(EquipmentCategory::Boots, boots);
    let geared = session.computed_stats().unwrap();
    assert_eq!(geared.get(StatName::Kick).main, baseline.get(StatName::Kick).main + 20);
    assert_eq!(geared.get(StatName::Agility).main, baseline.get(StatName::Agility).main + 15);

    session.unequip(EquipmentCategory::Boots);
    assert_eq!(session.computed_stats().unwrap(), baseline);
}

#[test]
fn same_category_equip_overwrites_previous_contribution() {
    let mut session = session();
    let baseline = session.computed_stats().unwrap();

    let lightning = data::sample_equipment().get("eq_lightning_boots").unwrap().clone();
    let sprint = data::sample_equipment().get("eq_sprint_boots").unwrap().clone();

    session.equip(EquipmentCategory::Boots, lightning);
    let displaced = session.equip(EquipmentCategory::Boots, sprint);
    assert_eq!(displaced.unwrap().id, "eq_lightning_boots");

    // Only the second item contributes: sprint boots give agility +5 and
    // nothing else.
    let stats = session.computed_stats().unwrap();
    assert_eq!(stats.get(StatName::Kick), baseline.get(StatName::Kick));
    assert_eq!(stats.get(StatName::Agility).main, baseline.get(StatName::Agility).main + 5);
}

#[test]
fn technique_slots_fill_up_and_reject_a_fifth() {
    let mut session = session();
    let techniques = data::sample_techniques();

    let picks =
        ["ht_fire_tornado", "ht_flame_dance", "ht_god_hand", "ht_illusion_ball", "ht_gale_dash"];
    for id in picks.iter().take(MAX_TECHNIQUES) {
        session.add_technique(techniques.get(id).unwrap().clone()).unwrap();
    }

    let err = session.add_technique(techniques.get(picks[4]).unwrap().clone()).unwrap_err();
    assert_eq!(err.code(), "CAPACITY_EXCEEDED");
    assert_eq!(session.loadout().technique_count(), MAX_TECHNIQUES);
}

#[test]
fn removing_a_technique_shifts_later_slots_left() {
    let mut session = session();
    let techniques = data::sample_techniques();
    for id in ["ht_fire_tornado", "ht_flame_dance", "ht_god_hand"] {
        session.add_technique(techniques.get(id).unwrap().clone()).unwrap();
    }

    session.remove_technique(0).unwrap();
    let ids: Vec<&str> =
        session.loadout().techniques().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["ht_flame_dance", "ht_god_hand"]);
}

#[test]
fn rarity_override_changes_scaling_monotonically() {
    let mut session = session();
    session.set_level(50).unwrap();

    let mut last_total = 0;
    for rarity in Rarity::all() {
        session.set_rarity(*rarity);
        let total = session.computed_stats().unwrap().total_main();
        assert!(total >= last_total, "{:?} should not lower stats", rarity);
        last_total = total;
    }
}

#[test]
fn json_api_drives_the_same_session() {
    let mut session = session();

    let boots = data::sample_equipment().get("eq_lightning_boots").unwrap().clone();
    let equip = serde_json::json!({
        "action": {"type": "Equip", "category": "Boots", "item": boots}
    });
    let response: serde_json::Value =
        serde_json::from_str(&tb_core::manage_loadout_json(&equip.to_string(), &mut session))
            .unwrap();
    assert_eq!(response["success"], true);
    assert_eq!(response["data"]["stat_changes"]["kick"], 20);

    let navigate = serde_json::json!({"action": {"type": "Next"}});
    let response: serde_json::Value =
        serde_json::from_str(&tb_core::navigate_json(&navigate.to_string(), &mut session))
            .unwrap();
    assert_eq!(response["success"], true);
    assert_eq!(response["data"]["character"]["id"], "char_mark_evans");
    assert!(session.loadout().is_empty());
}
