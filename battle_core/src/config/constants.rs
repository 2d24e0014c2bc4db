//! Tunable battle constants

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable battle constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleConstants {
    /// Hard cap on actions in a one-on-one battle
    #[serde(default = "default_duel_max_turns")]
    pub duel_max_turns: u32,
    /// Hard cap on actions in a team-vs-boss raid
    #[serde(default = "default_raid_max_turns")]
    pub raid_max_turns: u32,
    /// Energy gained at the end of any turn in which the unit did not cast
    #[serde(default = "default_energy_per_turn")]
    pub energy_per_turn: i64,
    /// Crit rate (%) used when a snapshot leaves it unset
    #[serde(default = "default_crit_rate")]
    pub default_crit_rate: i64,
    /// Crit damage (%) used when a snapshot leaves it unset
    #[serde(default = "default_crit_dmg")]
    pub default_crit_dmg: i64,
    /// Per-hit crit multiplier of multi-hit skills (ignores the crit damage stat)
    #[serde(default = "default_multi_hit_crit_multiplier")]
    pub multi_hit_crit_multiplier: f64,
    /// Conditional regen only triggers below this share of max HP (%)
    #[serde(default = "default_regen_threshold_percent")]
    pub regen_threshold_percent: i64,
}

impl Default for BattleConstants {
    fn default() -> Self {
        BattleConstants {
            duel_max_turns: default_duel_max_turns(),
            raid_max_turns: default_raid_max_turns(),
            energy_per_turn: default_energy_per_turn(),
            default_crit_rate: default_crit_rate(),
            default_crit_dmg: default_crit_dmg(),
            multi_hit_crit_multiplier: default_multi_hit_crit_multiplier(),
            regen_threshold_percent: default_regen_threshold_percent(),
        }
    }
}

impl BattleConstants {
    /// Reject values that would make a battle unbounded or meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duel_max_turns == 0 || self.raid_max_turns == 0 {
            return Err(ConfigError::ValidationError(
                "turn caps must be at least 1".to_string(),
            ));
        }
        if self.energy_per_turn < 0 {
            return Err(ConfigError::ValidationError(format!(
                "energy_per_turn must not be negative (got {})",
                self.energy_per_turn
            )));
        }
        if self.multi_hit_crit_multiplier < 1.0 {
            return Err(ConfigError::ValidationError(format!(
                "multi_hit_crit_multiplier must be >= 1.0 (got {})",
                self.multi_hit_crit_multiplier
            )));
        }
        Ok(())
    }
}

fn default_duel_max_turns() -> u32 {
    30
}
fn default_raid_max_turns() -> u32 {
    20
}
fn default_energy_per_turn() -> i64 {
    25
}
fn default_crit_rate() -> i64 {
    5
}
fn default_crit_dmg() -> i64 {
    140
}
fn default_multi_hit_crit_multiplier() -> f64 {
    1.4
}
fn default_regen_threshold_percent() -> i64 {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = BattleConstants::default();
        assert_eq!(constants.duel_max_turns, 30);
        assert_eq!(constants.raid_max_turns, 20);
        assert_eq!(constants.default_crit_rate, 5);
        assert_eq!(constants.default_crit_dmg, 140);
        assert!((constants.multi_hit_crit_multiplier - 1.4).abs() < f64::EPSILON);
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_constants() {
        let toml = r#"
duel_max_turns = 12
energy_per_turn = 40
"#;

        let constants: BattleConstants = toml::from_str(toml).unwrap();
        assert_eq!(constants.duel_max_turns, 12);
        assert_eq!(constants.energy_per_turn, 40);
        // Unset fields fall back to defaults
        assert_eq!(constants.raid_max_turns, 20);
    }

    #[test]
    fn test_bundled_constants_match_defaults() {
        let constants: BattleConstants =
            toml::from_str(include_str!("../../config/battle.toml")).unwrap();
        assert_eq!(constants, BattleConstants::default());
    }

    #[test]
    fn test_zero_turn_cap_rejected() {
        let constants = BattleConstants {
            duel_max_turns: 0,
            ..Default::default()
        };
        assert!(matches!(
            constants.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
