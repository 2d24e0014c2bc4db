//! The damage formula
//!
//! Order matters; reordering changes results:
//! 1. crit: `× crit_dmg / 100`
//! 2. damage boost: `× (1 + boost / 100)`, boost consumed
//! 3. type chart multiplier
//! 4. floor
//! 5. defender damage reduction: `× (1 - reduction / 100)`, floor
//! 6. defense: `× 100 / (100 + def)`, floor, minimum 1

use super::DamageRoll;
use crate::chart::TypeChart;
use crate::combatant::Combatant;

/// Resolve `raw` damage from `attacker` against `defender`.
///
/// Consumes the attacker's damage boost if it has one. Does not touch the
/// defender's HP; callers subtract `amount` themselves.
pub fn resolve_damage(
    attacker: &mut Combatant,
    defender: &Combatant,
    raw: f64,
    is_crit: bool,
    chart: &TypeChart,
) -> DamageRoll {
    let crit_multiplier = if is_crit {
        attacker.crit_dmg as f64 / 100.0
    } else {
        1.0
    };
    let boost_consumed = attacker.take_damage_boost();
    let boost_multiplier = boost_consumed.map_or(1.0, |b| 1.0 + b / 100.0);
    let type_multiplier = chart.multiplier(attacker.element, defender.element);

    let mut damage = (raw.max(0.0) * crit_multiplier * boost_multiplier * type_multiplier).floor() as i64;

    let reduction = defender.damage_reduction();
    if let Some(percent) = reduction {
        damage = (damage as f64 * (1.0 - percent / 100.0)).floor().max(0.0) as i64;
    }

    // Negative defense is treated as none
    let def = i128::from(defender.def.max(0));
    let mitigated = i128::from(damage) * 100 / (100 + def);
    let amount = i64::try_from(mitigated).unwrap_or(i64::MAX).max(1);

    DamageRoll {
        amount,
        is_crit,
        boost_consumed,
        type_multiplier,
        reduction,
    }
}
