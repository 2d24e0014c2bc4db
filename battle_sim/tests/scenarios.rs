//! End-to-end runs of the bundled demo scenarios

use battle_core::{
    default_skills, default_type_chart, BattleConstants, BattleContext, BattleMode,
    BattleOutcome, Side,
};
use battle_sim::{parse_scenario, render_text, simulate};

const DUEL: &str = include_str!("../../demos/duel.toml");
const RAID: &str = include_str!("../../demos/raid.toml");

#[test]
fn test_demo_scenarios_parse() {
    let duel = parse_scenario(DUEL).unwrap();
    assert_eq!(duel.mode, BattleMode::Duel);
    assert_eq!(duel.seed, Some(7));

    let raid = parse_scenario(RAID).unwrap();
    assert_eq!(raid.mode, BattleMode::Raid);
    assert_eq!(raid.team.len(), 3);
    assert_eq!(raid.enemies.len(), 1);
}

#[test]
fn test_duel_runs_to_completion() {
    let registry = default_skills();
    let chart = default_type_chart();
    let constants = BattleConstants::default();
    let ctx = BattleContext::new(&registry, &chart, &constants);

    let scenario = parse_scenario(DUEL).unwrap();
    let report = simulate(&scenario, ctx, 7).unwrap();

    assert!(report.turns >= 1);
    assert!(report.turns <= constants.duel_max_turns);
    assert!(report.units.iter().all(|u| u.hp >= 0 && u.hp <= u.max_hp));
    if let BattleOutcome::Victory(side) = report.outcome {
        assert!(report.side(side).any(|u| u.is_alive()));
        assert!(report.side(side.opponent()).all(|u| !u.is_alive()));
    }
}

#[test]
fn test_raid_respects_turn_cap() {
    let registry = default_skills();
    let chart = default_type_chart();
    let constants = BattleConstants::default();
    let ctx = BattleContext::new(&registry, &chart, &constants);

    let scenario = parse_scenario(RAID).unwrap();
    for seed in 0..10 {
        let report = simulate(&scenario, ctx, seed).unwrap();
        assert!(report.turns <= constants.raid_max_turns);
        // Passive is applied before the first round
        let warden_line = report.log.entries().iter().find(|e| e.text.contains("Iron Will"));
        assert_eq!(warden_line.map(|e| e.turn), Some(0));
    }
}

#[test]
fn test_same_seed_reproduces_report() {
    let registry = default_skills();
    let chart = default_type_chart();
    let constants = BattleConstants::default();
    let ctx = BattleContext::new(&registry, &chart, &constants);
    let scenario = parse_scenario(RAID).unwrap();

    let first = simulate(&scenario, ctx, 1234).unwrap();
    let second = simulate(&scenario, ctx, 1234).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_report_json_and_text() {
    let registry = default_skills();
    let chart = default_type_chart();
    let constants = BattleConstants::default();
    let ctx = BattleContext::new(&registry, &chart, &constants);
    let scenario = parse_scenario(DUEL).unwrap();
    let report = simulate(&scenario, ctx, 3).unwrap();

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["mode"], "duel");
    assert_eq!(json["units"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["units"][0]["side"], "a");
    assert!(json["units"][0]["atk"].as_i64().is_some());
    assert!(json["units"][0]["effect_details"].is_array());

    let text = render_text(&report);
    assert!(text.contains("Battle begins: Ember Knight vs Rime Jester"));
    assert!(text.contains("Outcome:"));
    assert!(text.contains(" ATK "));
    assert!(text.contains(&format!("{:?}", Side::B)));
}
