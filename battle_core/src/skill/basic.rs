//! Basic attack - what every unit does when it cannot cast

use super::SkillOutcome;
use crate::chart::TypeChart;
use crate::combatant::Combatant;
use crate::damage::resolve_damage;
use crate::effect::Effect;
use crate::roll::roll_percent;
use rand::RngCore;

/// Name of the one-turn boost granted by a successful dodge
pub const COUNTER_EFFECT: &str = "Counter";

/// Resolve a basic attack.
///
/// 1. the attacker's miss chance may whiff the attack outright
/// 2. the defender's dodge may evade it and grant the defender a counter boost
/// 3. otherwise: crit roll on the attacker's crit rate, ATK through the formula
pub fn basic_attack(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    chart: &TypeChart,
    rng: &mut dyn RngCore,
) -> SkillOutcome {
    if let Some(miss) = attacker.miss_chance() {
        if roll_percent(rng, miss) {
            return SkillOutcome::narrate(format!("{}'s attack misses!", attacker.name));
        }
    }

    if let Some((chance, counter_boost)) = defender.dodge() {
        if roll_percent(rng, chance) {
            defender.add_effect(Effect::damage_boost(COUNTER_EFFECT, counter_boost, 1));
            return SkillOutcome::narrate(format!(
                "{} dodges {}'s attack and readies a counter (+{}% damage)!",
                defender.name, attacker.name, counter_boost
            ));
        }
    }

    let is_crit = roll_percent(rng, attacker.crit_rate as f64);
    let raw = attacker.atk as f64;
    let roll = resolve_damage(attacker, defender, raw, is_crit, chart);
    defender.take_damage(roll.amount);

    SkillOutcome::new(
        roll.amount,
        format!(
            "{} attacks {} for {} damage{}.",
            attacker.name,
            defender.name,
            roll.amount,
            roll.suffix()
        ),
    )
}
