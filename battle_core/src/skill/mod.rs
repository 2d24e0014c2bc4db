//! Skills - definitions, the executor contract, and the registry
//!
//! A skill is split in two:
//! - [`SkillDefinition`]: data loaded from config (name, energy, description,
//!   rarity-indexed scaling values)
//! - [`SkillExecutor`]: the resolution routine, one per skill id
//!
//! The [`SkillRegistry`] pairs them and is passed into the battle by reference.

mod basic;
pub mod executors;
mod registry;
mod scaling;

pub use basic::basic_attack;
pub use registry::{RegisteredSkill, SkillRegistry};
pub use scaling::{RawScaling, ScalingTable};

use crate::chart::TypeChart;
use crate::combatant::Combatant;
use crate::config::BattleConstants;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// How a skill is triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Activation {
    /// Cast instead of a basic attack once energy reaches the threshold
    Active { required_energy: i64 },
    /// Applied once at battle start; never cast through energy
    Passive,
}

/// Skill data as declared in config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub initial_energy: i64,
    /// Cast threshold; absent for passive skills
    #[serde(default)]
    pub required_energy: Option<i64>,
    /// Template with `{0}`, `{1}`, ... placeholders
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub scaling: ScalingTable,
}

impl SkillDefinition {
    pub fn activation(&self) -> Activation {
        match self.required_energy {
            Some(required_energy) => Activation::Active { required_energy },
            None => Activation::Passive,
        }
    }

    /// Fill the description template for a rarity tier.
    ///
    /// `{0}` is the tier's scaling value; `{1}` onward come from `params`
    /// (the executor's fixed parameters). Unknown placeholders are left as-is.
    pub fn describe(&self, tier: usize, params: &[f64]) -> String {
        let mut text = self.description.clone();
        if let Some(value) = self.scaling.value_for(tier) {
            text = text.replace("{0}", &format_number(value));
        }
        for (i, param) in params.iter().enumerate() {
            text = text.replace(&format!("{{{}}}", i + 1), &format_number(*param));
        }
        text
    }
}

/// What a skill or basic attack did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillOutcome {
    /// Damage dealt to the defender (already subtracted from its HP)
    pub damage_dealt: i64,
    pub log_line: String,
}

impl SkillOutcome {
    pub fn new(damage_dealt: i64, log_line: impl Into<String>) -> Self {
        SkillOutcome {
            damage_dealt,
            log_line: log_line.into(),
        }
    }

    /// A no-damage action
    pub fn narrate(log_line: impl Into<String>) -> Self {
        SkillOutcome::new(0, log_line)
    }
}

/// Runtime failure inside a single action; the battle treats it as a no-op
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("{skill}: energy cap is zero")]
    ZeroEnergyCap { skill: String },
    #[error("{skill}: {reason}")]
    Invalid { skill: String, reason: String },
}

/// Everything an executor may read or mutate during one cast
pub struct SkillContext<'a> {
    pub attacker: &'a mut Combatant,
    pub defender: &'a mut Combatant,
    /// Attacker's rarity-selected scaling value, `None` if the table is empty
    pub scaling: Option<f64>,
    pub chart: &'a TypeChart,
    pub constants: &'a BattleConstants,
    pub rng: &'a mut dyn RngCore,
}

impl SkillContext<'_> {
    /// Scaling value, or the executor's documented default
    pub fn scaling_or(&self, default: f64) -> f64 {
        self.scaling.unwrap_or_else(|| {
            tracing::warn!(unit = %self.attacker.name, default, "no scaling value, using skill default");
            default
        })
    }
}

/// A skill's resolution routine
pub trait SkillExecutor: Send + Sync + fmt::Debug {
    /// Resolve one cast. Damage is applied to the defender inside.
    fn execute(&self, ctx: &mut SkillContext<'_>) -> Result<SkillOutcome, ActionError>;

    /// Fixed parameters exposed to description templates as `{1}`, `{2}`, ...
    fn parameters(&self) -> Vec<f64> {
        Vec::new()
    }
}

/// `1.5` -> "1.5", `30.0` -> "30"
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition() -> SkillDefinition {
        SkillDefinition {
            id: "blazing_strike".to_string(),
            name: "Blazing Strike".to_string(),
            icon: String::new(),
            initial_energy: 0,
            required_energy: Some(100),
            description: "Deals {0}x ATK with a {1}% chance to burn for {2}% max HP.".to_string(),
            scaling: ScalingTable::new(vec![1.2, 1.35, 1.5]),
        }
    }

    #[test]
    fn test_activation_from_required_energy() {
        let mut def = definition();
        assert_eq!(def.activation(), Activation::Active { required_energy: 100 });
        def.required_energy = None;
        assert_eq!(def.activation(), Activation::Passive);
    }

    #[test]
    fn test_describe_substitutes_placeholders() {
        let def = definition();
        assert_eq!(
            def.describe(1, &[30.0, 5.0]),
            "Deals 1.35x ATK with a 30% chance to burn for 5% max HP."
        );
        // Tier clamps to the table bounds, same lookup the engine uses
        assert!(def.describe(5, &[30.0, 5.0]).starts_with("Deals 1.5x"));
    }

    #[test]
    fn test_describe_leaves_unknown_placeholders() {
        let def = definition();
        assert!(def.describe(0, &[]).contains("{1}%"));
    }
}
