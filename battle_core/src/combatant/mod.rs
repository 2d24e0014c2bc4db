//! Combatant - the mutable unit that fights in exactly one battle

mod snapshot;

pub use snapshot::{CombatantSnapshot, StatsSnapshot};

use crate::effect::Effect;
use crate::skill::{Activation, ScalingTable};
use crate::types::{Element, Rarity, Stat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid combatant data, rejected before a battle starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombatantError {
    #[error("combatant has no name")]
    EmptyName,
    #[error("{0} has no stats")]
    MissingStats(String),
    #[error("{name} has invalid max HP {max_hp}")]
    InvalidMaxHp { name: String, max_hp: i64 },
    #[error("{name} has negative {stat}: {value}")]
    NegativeStat {
        name: String,
        stat: &'static str,
        value: i64,
    },
}

/// Skill bound to a combatant for this battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillBinding {
    /// Registry id of the skill
    pub id: String,
    pub activation: Activation,
    /// Rarity-indexed values for this skill
    pub scaling: ScalingTable,
}

/// A unit in one battle. Built by copying persisted card/mob data; never
/// shared with that data or with another battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    // === Identity ===
    pub name: String,
    pub element: Element,
    pub rarity: Rarity,
    /// Max HP snapshot taken at battle start
    pub max_hp: i64,

    // === Live Stats ===
    /// Current HP; may dip below zero internally, reported clamped
    pub hp: i64,
    pub atk: i64,
    pub def: i64,
    pub speed: i64,
    /// Critical hit chance (%)
    pub crit_rate: i64,
    /// Critical hit damage (%), 150 = 1.5x
    pub crit_dmg: i64,

    // === Energy ===
    pub energy: i64,
    pub initial_energy: i64,

    // === Skill ===
    pub skill: Option<SkillBinding>,

    // === Active Effects ===
    #[serde(default)]
    pub effects: Vec<Effect>,
}

impl Combatant {
    /// Create a skill-less combatant with default crit stats (5% / 140%)
    pub fn new(
        name: impl Into<String>,
        element: Element,
        max_hp: i64,
        atk: i64,
        def: i64,
        speed: i64,
    ) -> Self {
        Combatant {
            name: name.into(),
            element,
            rarity: Rarity::Common,
            max_hp,
            hp: max_hp,
            atk,
            def,
            speed,
            crit_rate: 5,
            crit_dmg: 140,
            energy: 0,
            initial_energy: 0,
            skill: None,
            effects: Vec::new(),
        }
    }

    pub fn with_crit(mut self, crit_rate: i64, crit_dmg: i64) -> Self {
        self.crit_rate = crit_rate;
        self.crit_dmg = crit_dmg;
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_energy(mut self, energy: i64) -> Self {
        self.energy = energy;
        self.initial_energy = energy;
        self
    }

    pub fn with_skill(mut self, id: impl Into<String>, activation: Activation, scaling: ScalingTable) -> Self {
        self.skill = Some(SkillBinding {
            id: id.into(),
            activation,
            scaling,
        });
        self
    }

    /// Check the fail-fast construction invariants
    pub fn validate(&self) -> Result<(), CombatantError> {
        if self.name.trim().is_empty() {
            return Err(CombatantError::EmptyName);
        }
        if self.max_hp <= 0 {
            return Err(CombatantError::InvalidMaxHp {
                name: self.name.clone(),
                max_hp: self.max_hp,
            });
        }
        for (stat, value) in [("ATK", self.atk), ("DEF", self.def), ("SPD", self.speed)] {
            if value < 0 {
                return Err(CombatantError::NegativeStat {
                    name: self.name.clone(),
                    stat,
                    value,
                });
            }
        }
        Ok(())
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// HP as reported to anyone outside the engine (never negative)
    pub fn display_hp(&self) -> i64 {
        self.hp.max(0)
    }

    /// Subtract HP with no mitigation
    pub fn take_damage(&mut self, amount: i64) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Restore HP up to max; returns the amount actually restored
    pub fn heal(&mut self, amount: i64) -> i64 {
        if amount <= 0 || self.hp >= self.max_hp {
            return 0;
        }
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    pub fn stat(&self, stat: Stat) -> i64 {
        match stat {
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Speed => self.speed,
            Stat::Hp => self.hp,
            Stat::CritRate => self.crit_rate,
            Stat::CritDmg => self.crit_dmg,
        }
    }

    /// Add `delta` to a live stat
    pub fn shift_stat(&mut self, stat: Stat, delta: i64) {
        let slot = match stat {
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::Speed => &mut self.speed,
            Stat::Hp => &mut self.hp,
            Stat::CritRate => &mut self.crit_rate,
            Stat::CritDmg => &mut self.crit_dmg,
        };
        *slot += delta;
    }

    /// Energy needed to cast, `None` for passive or skill-less units
    pub fn required_energy(&self) -> Option<i64> {
        match self.skill.as_ref()?.activation {
            Activation::Active { required_energy } => Some(required_energy),
            Activation::Passive => None,
        }
    }

    /// Whether the bound skill can be cast right now
    pub fn can_cast(&self) -> bool {
        self.required_energy()
            .is_some_and(|required| self.energy >= required)
    }

    pub fn has_passive(&self) -> bool {
        matches!(
            self.skill,
            Some(SkillBinding {
                activation: Activation::Passive,
                ..
            })
        )
    }

    /// Scaling value for this unit's rarity, `None` if the table is empty
    pub fn scaling_value(&self) -> Option<f64> {
        self.skill
            .as_ref()
            .and_then(|s| s.scaling.value_for(self.rarity.tier()))
    }

    /// Names of active effects, in ledger order
    pub fn effect_labels(&self) -> Vec<String> {
        self.effects.iter().map(Effect::label).collect()
    }
}
