//! Effect ledger - the only place effects are created, stacked, or consumed

use super::{Effect, EffectKind};
use crate::combatant::Combatant;
use crate::types::Stat;

/// Result of applying a stacking buff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackOutcome {
    /// Stack count after the application
    pub stacks: u32,
    /// Stat delta applied by this application (0 when already capped)
    pub applied: i64,
    /// Total delta now carried by the effect
    pub total: i64,
}

impl Combatant {
    /// Attach an effect. Stat shifts take effect on the live stat immediately.
    pub fn add_effect(&mut self, effect: Effect) {
        if let EffectKind::StatShift { stat, amount, .. } = effect.kind {
            self.shift_stat(stat, amount);
        }
        tracing::trace!(unit = %self.name, effect = %effect.name, turns = effect.turns, "effect added");
        self.effects.push(effect);
    }

    /// Apply one stack of a capped, refreshing stat buff.
    ///
    /// The per-stack increment is `floor(base × percent / 100)` where `base`
    /// is the stat with this buff's own contribution removed, so every stack
    /// adds the same amount. Below the cap a stack is added and the duration
    /// refreshed; at the cap only the duration is refreshed.
    pub fn add_stacking_buff(
        &mut self,
        name: &str,
        stat: Stat,
        percent_per_stack: f64,
        max_stacks: u32,
        turns: u32,
    ) -> StackOutcome {
        let existing = self.effects.iter().position(|e| {
            e.name == name && matches!(e.kind, EffectKind::StatShift { stat: s, .. } if s == stat)
        });

        let current = self.stat(stat);
        let shift = match existing {
            Some(index) => {
                let effect = &mut self.effects[index];
                effect.turns = turns.max(1);
                match &mut effect.kind {
                    EffectKind::StatShift { amount, stacks, .. } => Some((amount, stacks)),
                    _ => None,
                }
            }
            None => None,
        };

        let Some((amount, stacks)) = shift else {
            let increment = percent_of(current, percent_per_stack);
            self.add_effect(Effect::stat_shift(name, stat, increment, turns));
            return StackOutcome {
                stacks: 1,
                applied: increment,
                total: increment,
            };
        };

        if *stacks >= max_stacks {
            return StackOutcome {
                stacks: *stacks,
                applied: 0,
                total: *amount,
            };
        }

        let increment = percent_of(current - *amount, percent_per_stack);
        *stacks += 1;
        *amount += increment;
        let outcome = StackOutcome {
            stacks: *stacks,
            applied: increment,
            total: *amount,
        };
        self.shift_stat(stat, increment);
        outcome
    }

    /// Remove and return the first damage boost (single use)
    pub fn take_damage_boost(&mut self) -> Option<f64> {
        let index = self
            .effects
            .iter()
            .position(|e| matches!(e.kind, EffectKind::DamageBoost { .. }))?;
        match self.effects.remove(index).kind {
            EffectKind::DamageBoost { percent } => Some(percent),
            _ => None,
        }
    }

    /// Percent reduction applied to incoming formula damage
    pub fn damage_reduction(&self) -> Option<f64> {
        self.effects.iter().find_map(|e| match e.kind {
            EffectKind::DamageReduction { percent } => Some(percent),
            _ => None,
        })
    }

    /// Percent chance this unit's basic attack whiffs
    pub fn miss_chance(&self) -> Option<f64> {
        self.effects.iter().find_map(|e| match e.kind {
            EffectKind::MissChance { percent } => Some(percent),
            _ => None,
        })
    }

    /// Dodge chance and counter boost, if this unit can evade
    pub fn dodge(&self) -> Option<(f64, f64)> {
        self.effects.iter().find_map(|e| match e.kind {
            EffectKind::Dodge {
                chance,
                counter_boost,
            } => Some((chance, counter_boost)),
            _ => None,
        })
    }

    pub fn has_effect(&self, name: &str) -> bool {
        self.effects.iter().any(|e| e.name == name)
    }

    pub fn effect(&self, name: &str) -> Option<&Effect> {
        self.effects.iter().find(|e| e.name == name)
    }
}

/// `floor(value × percent / 100)`, rounding toward negative infinity
pub(crate) fn percent_of(value: i64, percent: f64) -> i64 {
    (value as f64 * percent / 100.0).floor() as i64
}
