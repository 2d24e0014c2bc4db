//! Built-in skill executors
//!
//! Each executor is a small struct holding the fixed game-design parameters
//! of one skill; the rarity-scaled number arrives through [`SkillContext`].
//!
//! [`SkillContext`]: super::SkillContext

mod buffs;
mod flurry;
mod gamble;
mod mark;
mod passive;
mod strike;

pub use buffs::{StackingBuff, StatBuff, StatusSkill, StatusTemplate, Target};
pub use flurry::Flurry;
pub use gamble::{resolve_gamble, ChaosGambit, GambleResult};
pub use mark::DelayedMark;
pub use passive::{DodgePassive, RegenPassive};
pub use strike::{BurnProc, DamageBase, DirectStrike};

use super::SkillExecutor;
use crate::types::Stat;
use std::sync::Arc;

/// Executor for a built-in skill id
pub fn builtin_executor(id: &str) -> Option<Arc<dyn SkillExecutor>> {
    let executor: Arc<dyn SkillExecutor> = match id {
        "blazing_strike" => Arc::new(DirectStrike {
            base: DamageBase::Atk,
            default_multiplier: 1.2,
            proc: Some(BurnProc {
                chance: 30.0,
                percent: 5.0,
                turns: 2,
            }),
        }),
        "titan_crush" => Arc::new(DirectStrike {
            base: DamageBase::MaxHp,
            default_multiplier: 0.15,
            proc: None,
        }),
        "flurry" => Arc::new(Flurry {
            hits: 3,
            default_multiplier: 0.5,
        }),
        "shadow_mark" => Arc::new(DelayedMark {
            effect_name: "Shadow Mark",
            default_multiplier: 1.5,
            turns: 2,
        }),
        "war_cry" => Arc::new(StatBuff {
            effect_name: "War Cry",
            stat: Stat::Atk,
            target: Target::Caster,
            default_percent: 20.0,
            turns: 3,
        }),
        "armor_break" => Arc::new(StatBuff {
            effect_name: "Armor Break",
            stat: Stat::Def,
            target: Target::Enemy,
            default_percent: 25.0,
            turns: 2,
        }),
        "rising_fury" => Arc::new(StackingBuff {
            effect_name: "Rising Fury",
            stat: Stat::Atk,
            default_percent: 10.0,
            max_stacks: 3,
            turns: 3,
        }),
        "bulwark" => Arc::new(StatusSkill {
            effect_name: "Bulwark",
            template: StatusTemplate::DamageReduction,
            target: Target::Caster,
            default_value: 30.0,
            turns: 2,
        }),
        "empower" => Arc::new(StatusSkill {
            effect_name: "Empower",
            template: StatusTemplate::DamageBoost,
            target: Target::Caster,
            default_value: 40.0,
            turns: 2,
        }),
        "energy_siphon" => Arc::new(StatusSkill {
            effect_name: "Energy Siphon",
            template: StatusTemplate::EnergyDrain,
            target: Target::Enemy,
            default_value: 15.0,
            turns: 3,
        }),
        "blinding_flash" => Arc::new(StatusSkill {
            effect_name: "Blinded",
            template: StatusTemplate::MissChance,
            target: Target::Enemy,
            default_value: 35.0,
            turns: 2,
        }),
        "iron_will" => Arc::new(RegenPassive {
            effect_name: "Iron Will",
            default_percent: 8.0,
        }),
        "phantom_step" => Arc::new(DodgePassive {
            effect_name: "Phantom Step",
            default_chance: 20.0,
            counter_boost: 30.0,
        }),
        "chaos_gambit" => Arc::new(ChaosGambit {
            self_multiplier: 1.0,
            default_multiplier: 0.8,
        }),
        _ => return None,
    };
    Some(executor)
}

/// Ids of every built-in executor
pub const BUILTIN_SKILLS: &[&str] = &[
    "blazing_strike",
    "titan_crush",
    "flurry",
    "shadow_mark",
    "war_cry",
    "armor_break",
    "rising_fury",
    "bulwark",
    "empower",
    "energy_siphon",
    "blinding_flash",
    "iron_will",
    "phantom_step",
    "chaos_gambit",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_resolves() {
        for id in BUILTIN_SKILLS {
            assert!(builtin_executor(id).is_some(), "Missing executor: {}", id);
        }
        assert!(builtin_executor("nope").is_none());
    }
}
