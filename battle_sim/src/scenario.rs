//! Scenario files: two rosters of snapshots and a battle mode

use battle_core::config::ConfigError;
use battle_core::{Battle, BattleContext, BattleError, BattleMode, BattleReport, CombatantSnapshot};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Scenario loading error
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("scenario has no {0}")]
    EmptyRoster(&'static str),
}

fn default_mode() -> BattleMode {
    BattleMode::Duel
}

/// A battle to simulate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_mode")]
    pub mode: BattleMode,
    /// Seed used when none is given on the command line
    #[serde(default)]
    pub seed: Option<u64>,
    /// Side A
    #[serde(default)]
    pub team: Vec<CombatantSnapshot>,
    /// Side B
    #[serde(default)]
    pub enemies: Vec<CombatantSnapshot>,
}

impl Scenario {
    fn validate(&self) -> Result<(), ScenarioError> {
        if self.team.is_empty() {
            return Err(ScenarioError::EmptyRoster("team"));
        }
        if self.enemies.is_empty() {
            return Err(ScenarioError::EmptyRoster("enemies"));
        }
        Ok(())
    }
}

/// Load a scenario from a TOML file
pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let scenario: Scenario = battle_core::config::load_toml(path)?;
    scenario.validate()?;
    Ok(scenario)
}

/// Load a scenario from a TOML string
pub fn parse_scenario(content: &str) -> Result<Scenario, ScenarioError> {
    let scenario: Scenario = battle_core::config::parse_toml(content)?;
    scenario.validate()?;
    Ok(scenario)
}

/// Build the scenario's battle with a seeded ChaCha generator
pub fn build_battle<'a>(
    scenario: &Scenario,
    ctx: BattleContext<'a>,
    seed: u64,
) -> Result<Battle<'a, ChaCha8Rng>, BattleError> {
    let rng = ChaCha8Rng::seed_from_u64(seed);
    Battle::from_snapshots(ctx, &scenario.team, &scenario.enemies, scenario.mode, rng)
}

/// Run a scenario to completion
pub fn simulate(
    scenario: &Scenario,
    ctx: BattleContext<'_>,
    seed: u64,
) -> Result<BattleReport, BattleError> {
    build_battle(scenario, ctx, seed)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_scenario() {
        let toml = r#"
[[team]]
name = "Ember"
element = "fire"
stats = { hp = 1000, atk = 120, def = 40, speed = 100 }

[[enemies]]
name = "Frost Imp"
element = "ice"
stats = { hp = 600, atk = 80, def = 20, speed = 90 }
"#;
        let scenario = parse_scenario(toml).unwrap();
        assert_eq!(scenario.mode, BattleMode::Duel);
        assert_eq!(scenario.seed, None);
        assert_eq!(scenario.enemies[0].name, "Frost Imp");
    }

    #[test]
    fn test_empty_roster_rejected() {
        let toml = r#"
mode = "raid"

[[team]]
name = "Ember"
stats = { hp = 1000, atk = 120, def = 40, speed = 100 }
"#;
        assert!(matches!(
            parse_scenario(toml),
            Err(ScenarioError::EmptyRoster("enemies"))
        ));
    }
}
