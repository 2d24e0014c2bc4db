//! Direct damage: base stat times the scaling value, optional burn proc

use crate::damage::resolve_damage;
use crate::effect::Effect;
use crate::roll::roll_percent;
use crate::skill::{ActionError, SkillContext, SkillExecutor, SkillOutcome};

/// Stat the raw damage scales from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageBase {
    Atk,
    MaxHp,
}

/// Chance to set the defender burning after the hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnProc {
    pub chance: f64,
    /// Max-HP percent lost per turn
    pub percent: f64,
    pub turns: u32,
}

#[derive(Debug, Clone)]
pub struct DirectStrike {
    pub base: DamageBase,
    pub default_multiplier: f64,
    pub proc: Option<BurnProc>,
}

impl SkillExecutor for DirectStrike {
    fn execute(&self, ctx: &mut SkillContext<'_>) -> Result<SkillOutcome, ActionError> {
        let multiplier = ctx.scaling_or(self.default_multiplier);
        let base = match self.base {
            DamageBase::Atk => ctx.attacker.atk,
            DamageBase::MaxHp => ctx.attacker.max_hp,
        };

        let is_crit = roll_percent(ctx.rng, ctx.attacker.crit_rate as f64);
        let roll = resolve_damage(ctx.attacker, ctx.defender, base as f64 * multiplier, is_crit, ctx.chart);
        ctx.defender.take_damage(roll.amount);

        let mut line = format!(
            "{} strikes {} for {} damage{}.",
            ctx.attacker.name,
            ctx.defender.name,
            roll.amount,
            roll.suffix()
        );

        if let Some(proc) = self.proc {
            if roll_percent(ctx.rng, proc.chance) {
                ctx.defender.add_effect(Effect::burn("Burn", proc.percent, proc.turns));
                line.push_str(&format!(
                    " {} is set ablaze for {} turns!",
                    ctx.defender.name, proc.turns
                ));
            }
        }

        Ok(SkillOutcome::new(roll.amount, line))
    }

    fn parameters(&self) -> Vec<f64> {
        match self.proc {
            Some(proc) => vec![proc.chance, proc.percent, proc.turns as f64],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::Combatant;
    use crate::config::{default_type_chart, BattleConstants};
    use crate::types::Element;
    use rand::rngs::mock::StepRng;

    fn strike(proc: Option<BurnProc>) -> DirectStrike {
        DirectStrike {
            base: DamageBase::Atk,
            default_multiplier: 1.2,
            proc,
        }
    }

    #[test]
    fn test_atk_multiplier_damage() {
        let chart = default_type_chart();
        let constants = BattleConstants::default();
        let mut rng = StepRng::new(u64::MAX, 0);
        let mut attacker = Combatant::new("Pyro", Element::Neutral, 1000, 100, 0, 100);
        let mut defender = Combatant::new("Dummy", Element::Neutral, 1000, 10, 100, 10);

        let mut ctx = SkillContext {
            attacker: &mut attacker,
            defender: &mut defender,
            scaling: Some(2.0),
            chart: &chart,
            constants: &constants,
            rng: &mut rng,
        };
        let outcome = strike(None).execute(&mut ctx).unwrap();
        // floor(200 * 100 / 200)
        assert_eq!(outcome.damage_dealt, 100);
        assert_eq!(defender.hp, 900);
    }

    #[test]
    fn test_max_hp_base() {
        let chart = default_type_chart();
        let constants = BattleConstants::default();
        let mut rng = StepRng::new(u64::MAX, 0);
        let mut attacker = Combatant::new("Titan", Element::Neutral, 4000, 10, 0, 100);
        let mut defender = Combatant::new("Dummy", Element::Neutral, 1000, 10, 0, 10);
        let titan = DirectStrike {
            base: DamageBase::MaxHp,
            default_multiplier: 0.15,
            proc: None,
        };

        let mut ctx = SkillContext {
            attacker: &mut attacker,
            defender: &mut defender,
            scaling: None,
            chart: &chart,
            constants: &constants,
            rng: &mut rng,
        };
        let outcome = titan.execute(&mut ctx).unwrap();
        assert_eq!(outcome.damage_dealt, 600);
    }

    #[test]
    fn test_burn_proc() {
        let chart = default_type_chart();
        let constants = BattleConstants::default();
        // Low rolls: crit and proc both land
        let mut rng = StepRng::new(0, 0);
        let mut attacker = Combatant::new("Pyro", Element::Neutral, 1000, 100, 0, 100);
        let mut defender = Combatant::new("Dummy", Element::Neutral, 1000, 10, 0, 10);

        let mut ctx = SkillContext {
            attacker: &mut attacker,
            defender: &mut defender,
            scaling: Some(1.0),
            chart: &chart,
            constants: &constants,
            rng: &mut rng,
        };
        let outcome = strike(Some(BurnProc {
            chance: 30.0,
            percent: 5.0,
            turns: 2,
        }))
        .execute(&mut ctx)
        .unwrap();

        assert_eq!(outcome.damage_dealt, 140);
        assert!(outcome.log_line.contains("ablaze"));
        assert!(defender.has_effect("Burn"));
    }

    #[test]
    fn test_proc_misses_on_high_roll() {
        let chart = default_type_chart();
        let constants = BattleConstants::default();
        let mut rng = StepRng::new(u64::MAX, 0);
        let mut attacker = Combatant::new("Pyro", Element::Neutral, 1000, 100, 0, 100);
        let mut defender = Combatant::new("Dummy", Element::Neutral, 1000, 10, 0, 10);

        let mut ctx = SkillContext {
            attacker: &mut attacker,
            defender: &mut defender,
            scaling: Some(1.0),
            chart: &chart,
            constants: &constants,
            rng: &mut rng,
        };
        strike(Some(BurnProc {
            chance: 30.0,
            percent: 5.0,
            turns: 2,
        }))
        .execute(&mut ctx)
        .unwrap();
        assert!(!defender.has_effect("Burn"));
    }
}
