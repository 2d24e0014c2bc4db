//! battle_core - Turn-based combat resolution for collectible-unit battles
//!
//! This library provides:
//! - Combatant: a battle-owned unit copied from persisted card/mob data
//! - Effect ledger: timed buffs, debuffs, damage over time and passives
//! - Damage formula: crit, boost, type chart, reduction and defense in a fixed order
//! - Skill registry: config-driven skill data bound to built-in executors
//! - Battle: the turn engine for duels and raids

pub mod battle;
pub mod chart;
pub mod combatant;
pub mod config;
pub mod damage;
pub mod effect;
pub mod prelude;
pub mod roll;
pub mod skill;
pub mod types;

// Re-export core types for convenience
pub use battle::{
    Battle, BattleContext, BattleError, BattleLog, BattleMode, BattleOutcome, BattleReport,
    BattleState, UnitSummary,
};
pub use chart::TypeChart;
pub use combatant::{Combatant, CombatantError, CombatantSnapshot, StatsSnapshot};
pub use config::{default_skills, default_type_chart, BattleConstants, ConfigError};
pub use damage::{resolve_damage, DamageRoll};
pub use effect::{Effect, EffectKind, PERMANENT};
pub use skill::{
    basic_attack, ActionError, Activation, ScalingTable, SkillDefinition, SkillExecutor,
    SkillOutcome, SkillRegistry,
};
pub use types::{Element, Rarity, Side, Stat, UnitId};
