//! Status effects - timed modifiers attached to a single combatant
//!
//! Every effect is one [`EffectKind`] variant carrying only the data it needs.
//! Effects are created through the ledger ([`Combatant::add_effect`] and
//! [`Combatant::add_stacking_buff`]), decay in [`tick::apply_end_of_turn`],
//! and run their recurring logic in [`tick::apply_start_of_turn`].
//!
//! [`Combatant::add_effect`]: crate::combatant::Combatant::add_effect
//! [`Combatant::add_stacking_buff`]: crate::combatant::Combatant::add_stacking_buff

mod ledger;
pub mod tick;

pub use ledger::StackOutcome;
pub use tick::{apply_end_of_turn, apply_start_of_turn, TickReport};

use crate::types::Stat;
use serde::{Deserialize, Serialize};

/// Lifetime of passive effects; never decremented
pub const PERMANENT: u32 = u32::MAX;

/// What an effect does
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectKind {
    /// Flat delta on a live stat. `amount` is the total delta currently applied.
    StatShift { stat: Stat, amount: i64, stacks: u32 },
    /// Start of turn: lose `percent` of max HP (at least 1)
    Burn { percent: f64 },
    /// Start of turn: lose `amount` energy (floored at 0)
    EnergyDrain { amount: i64 },
    /// End of turn: heal `percent` of max HP while below the regen threshold
    ConditionalRegen { percent: f64 },
    /// On expiry: lose `amount` HP, ignoring all mitigation
    DelayedDamage { amount: i64 },
    /// Next damaging action is multiplied by `1 + percent/100`, then consumed
    DamageBoost { percent: f64 },
    /// Incoming formula damage is multiplied by `1 - percent/100`
    DamageReduction { percent: f64 },
    /// Bearer's basic attacks whiff `percent` of the time
    MissChance { percent: f64 },
    /// Evade basic attacks `chance` % of the time; a dodge grants a
    /// one-turn damage boost of `counter_boost` %
    Dodge { chance: f64, counter_boost: f64 },
}

/// A timed modifier on one combatant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// Display name; also the identity used for stacking
    pub name: String,
    pub kind: EffectKind,
    /// Remaining end-of-turn ticks
    pub turns: u32,
}

impl Effect {
    /// Create an effect. Zero-turn effects are invalid and are raised to one turn.
    pub fn new(name: impl Into<String>, kind: EffectKind, turns: u32) -> Self {
        let name = name.into();
        if turns == 0 {
            tracing::warn!(effect = %name, "effect created with 0 turns, using 1");
        }
        Effect {
            name,
            kind,
            turns: turns.max(1),
        }
    }

    pub fn stat_shift(name: impl Into<String>, stat: Stat, amount: i64, turns: u32) -> Self {
        Effect::new(
            name,
            EffectKind::StatShift {
                stat,
                amount,
                stacks: 1,
            },
            turns,
        )
    }

    pub fn burn(name: impl Into<String>, percent: f64, turns: u32) -> Self {
        Effect::new(name, EffectKind::Burn { percent }, turns)
    }

    pub fn energy_drain(name: impl Into<String>, amount: i64, turns: u32) -> Self {
        Effect::new(name, EffectKind::EnergyDrain { amount }, turns)
    }

    pub fn conditional_regen(name: impl Into<String>, percent: f64, turns: u32) -> Self {
        Effect::new(name, EffectKind::ConditionalRegen { percent }, turns)
    }

    pub fn delayed_damage(name: impl Into<String>, amount: i64, turns: u32) -> Self {
        Effect::new(name, EffectKind::DelayedDamage { amount }, turns)
    }

    pub fn damage_boost(name: impl Into<String>, percent: f64, turns: u32) -> Self {
        Effect::new(name, EffectKind::DamageBoost { percent }, turns)
    }

    pub fn damage_reduction(name: impl Into<String>, percent: f64, turns: u32) -> Self {
        Effect::new(name, EffectKind::DamageReduction { percent }, turns)
    }

    pub fn miss_chance(name: impl Into<String>, percent: f64, turns: u32) -> Self {
        Effect::new(name, EffectKind::MissChance { percent }, turns)
    }

    pub fn dodge(name: impl Into<String>, chance: f64, counter_boost: f64, turns: u32) -> Self {
        Effect::new(
            name,
            EffectKind::Dodge {
                chance,
                counter_boost,
            },
            turns,
        )
    }

    pub fn is_permanent(&self) -> bool {
        self.turns == PERMANENT
    }

    /// Stack count for stat shifts, 1 for everything else
    pub fn stacks(&self) -> u32 {
        match self.kind {
            EffectKind::StatShift { stacks, .. } => stacks,
            _ => 1,
        }
    }

    /// Short label for logs and summaries, e.g. `War Cry (2)`
    pub fn label(&self) -> String {
        if self.is_permanent() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.turns)
        }
    }
}
