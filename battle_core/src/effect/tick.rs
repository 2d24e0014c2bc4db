//! Start- and end-of-turn effect processing

use super::{Effect, EffectKind};
use crate::combatant::Combatant;
use crate::config::BattleConstants;
use super::ledger::percent_of;

/// What a tick did to one combatant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Narrative lines, one per effect that did something
    pub lines: Vec<String>,
    /// HP lost this tick
    pub damage: i64,
    /// HP restored this tick
    pub healed: i64,
    /// Energy removed this tick
    pub energy_drained: i64,
    /// Names of effects that expired this tick
    pub expired: Vec<String>,
}

impl TickReport {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Run recurring start-of-turn effects (burn, energy drain).
///
/// Durations are not touched here; they only decrease at end of turn.
pub fn apply_start_of_turn(unit: &mut Combatant) -> TickReport {
    let mut report = TickReport::new();

    // Collect first; the ledger itself does not change during this phase
    let actions: Vec<(String, EffectKind)> = unit
        .effects
        .iter()
        .filter(|e| matches!(e.kind, EffectKind::Burn { .. } | EffectKind::EnergyDrain { .. }))
        .map(|e| (e.name.clone(), e.kind.clone()))
        .collect();

    for (name, kind) in actions {
        match kind {
            EffectKind::EnergyDrain { amount } => {
                let before = unit.energy;
                unit.energy = (unit.energy - amount.max(0)).max(0);
                let drained = before - unit.energy;
                report.energy_drained += drained;
                report.lines.push(format!(
                    "{} loses {} energy to {}.",
                    unit.name, drained, name
                ));
            }
            EffectKind::Burn { percent } => {
                let damage = percent_of(unit.max_hp, percent).max(1);
                unit.take_damage(damage);
                report.damage += damage;
                report.lines.push(format!(
                    "{} burns for {} damage from {}.",
                    unit.name, damage, name
                ));
            }
            _ => {}
        }
    }

    report
}

/// Decay the unit's effects after its action, in ledger order.
///
/// Per effect: conditional regen heals while below the threshold, the
/// duration drops by one, and an expired effect runs its expiry action
/// (delayed damage detonates, stat shifts revert exactly) and is removed.
pub fn apply_end_of_turn(unit: &mut Combatant, constants: &BattleConstants) -> TickReport {
    let mut report = TickReport::new();
    let effects = std::mem::take(&mut unit.effects);
    let mut kept: Vec<Effect> = Vec::with_capacity(effects.len());

    for mut effect in effects {
        if let EffectKind::ConditionalRegen { percent } = effect.kind {
            let hp = i128::from(unit.hp) * 100;
            if hp < i128::from(unit.max_hp) * i128::from(constants.regen_threshold_percent) {
                let heal = unit.heal(percent_of(unit.max_hp, percent));
                report.healed += heal;
                report.lines.push(format!(
                    "{} recovers {} HP from {}.",
                    unit.name, heal, effect.name
                ));
            }
        }

        if effect.is_permanent() {
            kept.push(effect);
            continue;
        }

        effect.turns -= 1;
        if effect.turns > 0 {
            kept.push(effect);
            continue;
        }

        match effect.kind {
            EffectKind::DelayedDamage { amount } => {
                let damage = amount.max(0);
                unit.take_damage(damage);
                report.damage += damage;
                report.lines.push(format!(
                    "{} detonates on {} for {} damage!",
                    effect.name, unit.name, damage
                ));
            }
            EffectKind::StatShift { stat, amount, .. } => {
                unit.shift_stat(stat, -amount);
                report.lines.push(format!(
                    "{}'s {} wore off ({} {}).",
                    unit.name,
                    effect.name,
                    stat.label(),
                    signed(-amount)
                ));
            }
            _ => {
                report
                    .lines
                    .push(format!("{}'s {} wore off.", unit.name, effect.name));
            }
        }
        report.expired.push(effect.name);
    }

    // Nothing above adds effects, but keep anything that did land
    kept.append(&mut unit.effects);
    unit.effects = kept;
    report
}

fn signed(value: i64) -> String {
    if value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}
