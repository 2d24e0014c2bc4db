//! Energy gamble: reroll the target's energy and pay out on the difference

use crate::damage::resolve_damage;
use crate::skill::{ActionError, SkillContext, SkillExecutor, SkillOutcome};
use rand::Rng;

/// Which way a reroll went
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GambleResult {
    /// Energy dropped; the caster pays `gap` of its max HP (times the self multiplier)
    Backfire { gap: f64 },
    /// Energy rose; the target takes damage scaled by `gap`
    Payout { gap: f64 },
    Unchanged,
}

/// Compare a reroll against the previous value. `old` is clamped to `cap`.
pub fn resolve_gamble(old: i64, new: i64, cap: i64) -> Result<GambleResult, ActionError> {
    if cap <= 0 {
        return Err(ActionError::ZeroEnergyCap {
            skill: "chaos_gambit".to_string(),
        });
    }
    let old = old.clamp(0, cap);
    let gap = (old - new).abs() as f64 / cap as f64;
    Ok(match new.cmp(&old) {
        std::cmp::Ordering::Less => GambleResult::Backfire { gap },
        std::cmp::Ordering::Greater => GambleResult::Payout { gap },
        std::cmp::Ordering::Equal => GambleResult::Unchanged,
    })
}

#[derive(Debug, Clone)]
pub struct ChaosGambit {
    /// Share of the caster's max HP lost per unit of gap on a backfire
    pub self_multiplier: f64,
    pub default_multiplier: f64,
}

impl ChaosGambit {
    /// Settle the gamble for an already drawn `new` energy value
    pub fn settle(&self, ctx: &mut SkillContext<'_>, new: i64) -> Result<SkillOutcome, ActionError> {
        let cap = ctx.defender.required_energy().unwrap_or(0);
        let old = ctx.defender.energy;
        let result = resolve_gamble(old, new, cap)?;
        let value = ctx.scaling_or(self.default_multiplier);
        ctx.defender.energy = new;

        let reroll = format!(
            "{} rerolls {}'s energy from {} to {}",
            ctx.attacker.name,
            ctx.defender.name,
            old.clamp(0, cap),
            new
        );

        let outcome = match result {
            GambleResult::Backfire { gap } => {
                let damage =
                    (ctx.attacker.max_hp as f64 * gap * self.self_multiplier).floor() as i64;
                ctx.attacker.take_damage(damage);
                SkillOutcome::narrate(format!(
                    "{}. The gamble backfires ({}% gap): {} takes {} damage!",
                    reroll,
                    percent_label(gap),
                    ctx.attacker.name,
                    damage
                ))
            }
            GambleResult::Payout { gap } => {
                let raw = (ctx.attacker.max_hp as f64 * gap * value).floor();
                let roll = resolve_damage(ctx.attacker, ctx.defender, raw, false, ctx.chart);
                ctx.defender.take_damage(roll.amount);
                SkillOutcome::new(
                    roll.amount,
                    format!(
                        "{}. The gamble pays off ({}% gap): {} takes {} damage{}!",
                        reroll,
                        percent_label(gap),
                        ctx.defender.name,
                        roll.amount,
                        roll.suffix()
                    ),
                )
            }
            GambleResult::Unchanged => {
                SkillOutcome::narrate(format!("{}. Nothing happens.", reroll))
            }
        };
        Ok(outcome)
    }
}

impl SkillExecutor for ChaosGambit {
    fn execute(&self, ctx: &mut SkillContext<'_>) -> Result<SkillOutcome, ActionError> {
        let cap = ctx.defender.required_energy().unwrap_or(0);
        if cap <= 0 {
            return Err(ActionError::ZeroEnergyCap {
                skill: "chaos_gambit".to_string(),
            });
        }
        let new = ctx.rng.gen_range(0..=cap);
        self.settle(ctx, new)
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.self_multiplier]
    }
}

fn percent_label(gap: f64) -> String {
    format!("{}", (gap * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::Combatant;
    use crate::config::{default_type_chart, BattleConstants};
    use crate::skill::{Activation, ScalingTable};
    use crate::types::Element;
    use rand::rngs::mock::StepRng;

    fn gambit() -> ChaosGambit {
        ChaosGambit {
            self_multiplier: 1.0,
            default_multiplier: 0.8,
        }
    }

    fn caster_with_cap(cap: i64, energy: i64) -> Combatant {
        Combatant::new("Target", Element::Neutral, 1000, 50, 0, 50)
            .with_skill(
                "war_cry",
                Activation::Active {
                    required_energy: cap,
                },
                ScalingTable::uniform(20.0),
            )
            .with_energy(energy)
    }

    #[test]
    fn test_resolve_gamble_branches() {
        assert_eq!(
            resolve_gamble(80, 20, 100).unwrap(),
            GambleResult::Backfire { gap: 0.6 }
        );
        assert_eq!(
            resolve_gamble(25, 75, 100).unwrap(),
            GambleResult::Payout { gap: 0.5 }
        );
        assert_eq!(resolve_gamble(40, 40, 100).unwrap(), GambleResult::Unchanged);
        // Energy above the cap counts as the cap
        assert_eq!(
            resolve_gamble(250, 100, 100).unwrap(),
            GambleResult::Unchanged
        );
        assert!(matches!(
            resolve_gamble(10, 0, 0),
            Err(ActionError::ZeroEnergyCap { .. })
        ));
    }

    #[test]
    fn test_backfire_damages_caster() {
        let chart = default_type_chart();
        let constants = BattleConstants::default();
        // Low roll: gen_range(0..=100) yields 0
        let mut rng = StepRng::new(0, 0);
        let mut attacker = Combatant::new("Jester", Element::Neutral, 1000, 50, 0, 50);
        let mut defender = caster_with_cap(100, 80);

        let mut ctx = SkillContext {
            attacker: &mut attacker,
            defender: &mut defender,
            scaling: Some(0.8),
            chart: &chart,
            constants: &constants,
            rng: &mut rng,
        };
        let outcome = gambit().execute(&mut ctx).unwrap();
        assert_eq!(outcome.damage_dealt, 0);
        assert!(outcome.log_line.contains("80%"));
        assert_eq!(attacker.hp, 200);
        assert_eq!(defender.energy, 0);
        assert_eq!(defender.hp, 1000);
    }

    #[test]
    fn test_sixty_percent_gap_backfire() {
        let chart = default_type_chart();
        let constants = BattleConstants::default();
        let mut rng = StepRng::new(0, 0);
        let mut attacker = Combatant::new("Jester", Element::Neutral, 1000, 50, 0, 50);
        let mut defender = caster_with_cap(100, 80);

        let mut ctx = SkillContext {
            attacker: &mut attacker,
            defender: &mut defender,
            scaling: Some(0.8),
            chart: &chart,
            constants: &constants,
            rng: &mut rng,
        };
        let outcome = gambit().settle(&mut ctx, 20).unwrap();
        assert_eq!(outcome.damage_dealt, 0);
        assert!(outcome.log_line.contains("60% gap"));
        assert_eq!(attacker.hp, 400);
        assert_eq!(defender.hp, 1000);
        assert_eq!(defender.energy, 20);
    }

    #[test]
    fn test_payout_goes_through_formula() {
        let chart = default_type_chart();
        let constants = BattleConstants::default();
        let mut rng = StepRng::new(0, 0);
        let mut attacker = Combatant::new("Jester", Element::Neutral, 1000, 50, 0, 50);
        let mut defender = caster_with_cap(100, 20);
        defender.def = 100;

        let mut ctx = SkillContext {
            attacker: &mut attacker,
            defender: &mut defender,
            scaling: Some(0.8),
            chart: &chart,
            constants: &constants,
            rng: &mut rng,
        };
        let outcome = gambit().settle(&mut ctx, 70).unwrap();
        // floor(1000 × 0.5 × 0.8) = 400, halved by 100 DEF
        assert_eq!(outcome.damage_dealt, 200);
        assert_eq!(defender.hp, 800);
        assert_eq!(attacker.hp, 1000);
    }

    #[test]
    fn test_zero_cap_is_an_error() {
        let chart = default_type_chart();
        let constants = BattleConstants::default();
        let mut rng = StepRng::new(0, 0);
        let mut attacker = Combatant::new("Jester", Element::Neutral, 1000, 50, 0, 50);
        // No active skill: no energy cap to reroll against
        let mut defender = Combatant::new("Mob", Element::Neutral, 1000, 50, 0, 50);

        let mut ctx = SkillContext {
            attacker: &mut attacker,
            defender: &mut defender,
            scaling: Some(0.8),
            chart: &chart,
            constants: &constants,
            rng: &mut rng,
        };
        assert!(gambit().execute(&mut ctx).is_err());
        assert_eq!(attacker.hp, 1000);
    }
}
