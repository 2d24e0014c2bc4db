//! Stat buffs, debuffs and plain status effects

use crate::combatant::Combatant;
use crate::effect::Effect;
use crate::skill::{ActionError, SkillContext, SkillExecutor, SkillOutcome};
use crate::types::Stat;

/// Who receives the effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Caster,
    Enemy,
}

impl Target {
    fn pick<'c>(self, ctx: &'c mut SkillContext<'_>) -> &'c mut Combatant {
        match self {
            Target::Caster => &mut *ctx.attacker,
            Target::Enemy => &mut *ctx.defender,
        }
    }
}

/// Percent change to one stat: a buff on the caster, a debuff on the enemy
#[derive(Debug, Clone)]
pub struct StatBuff {
    pub effect_name: &'static str,
    pub stat: Stat,
    pub target: Target,
    pub default_percent: f64,
    pub turns: u32,
}

impl SkillExecutor for StatBuff {
    fn execute(&self, ctx: &mut SkillContext<'_>) -> Result<SkillOutcome, ActionError> {
        let percent = ctx.scaling_or(self.default_percent);
        let caster = ctx.attacker.name.clone();
        let unit = self.target.pick(ctx);

        let magnitude = (unit.stat(self.stat) as f64 * percent / 100.0).floor() as i64;
        let delta = match self.target {
            Target::Caster => magnitude,
            Target::Enemy => -magnitude,
        };
        unit.add_effect(Effect::stat_shift(self.effect_name, self.stat, delta, self.turns));

        let verb = if delta >= 0 { "raises" } else { "lowers" };
        let line = match self.target {
            Target::Caster => format!(
                "{} uses {} and {} its {} by {} for {} turns.",
                caster,
                self.effect_name,
                verb,
                self.stat.label(),
                delta.abs(),
                self.turns
            ),
            Target::Enemy => format!(
                "{} uses {} and {} {}'s {} by {} for {} turns.",
                caster,
                self.effect_name,
                verb,
                unit.name,
                self.stat.label(),
                delta.abs(),
                self.turns
            ),
        };
        Ok(SkillOutcome::narrate(line))
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.turns as f64]
    }
}

/// Capped, refreshing stat buff on the caster
#[derive(Debug, Clone)]
pub struct StackingBuff {
    pub effect_name: &'static str,
    pub stat: Stat,
    pub default_percent: f64,
    pub max_stacks: u32,
    pub turns: u32,
}

impl SkillExecutor for StackingBuff {
    fn execute(&self, ctx: &mut SkillContext<'_>) -> Result<SkillOutcome, ActionError> {
        let percent = ctx.scaling_or(self.default_percent);
        let outcome = ctx.attacker.add_stacking_buff(
            self.effect_name,
            self.stat,
            percent,
            self.max_stacks,
            self.turns,
        );

        let line = if outcome.applied == 0 && outcome.stacks >= self.max_stacks {
            format!(
                "{}'s {} is at max stacks ({}); duration refreshed to {} turns.",
                ctx.attacker.name, self.effect_name, outcome.stacks, self.turns
            )
        } else {
            format!(
                "{}'s {} grows to {} stack(s): {} +{} (total +{}).",
                ctx.attacker.name,
                self.effect_name,
                outcome.stacks,
                self.stat.label(),
                outcome.applied,
                outcome.total
            )
        };
        Ok(SkillOutcome::narrate(line))
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.max_stacks as f64, self.turns as f64]
    }
}

/// Which status a [`StatusSkill`] applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTemplate {
    DamageReduction,
    DamageBoost,
    EnergyDrain,
    MissChance,
}

/// Applies one non-stat status effect sized by the scaling value
#[derive(Debug, Clone)]
pub struct StatusSkill {
    pub effect_name: &'static str,
    pub template: StatusTemplate,
    pub target: Target,
    pub default_value: f64,
    pub turns: u32,
}

impl StatusSkill {
    fn build(&self, value: f64) -> Effect {
        match self.template {
            StatusTemplate::DamageReduction => {
                Effect::damage_reduction(self.effect_name, value, self.turns)
            }
            StatusTemplate::DamageBoost => Effect::damage_boost(self.effect_name, value, self.turns),
            StatusTemplate::EnergyDrain => {
                Effect::energy_drain(self.effect_name, value.floor() as i64, self.turns)
            }
            StatusTemplate::MissChance => Effect::miss_chance(self.effect_name, value, self.turns),
        }
    }
}

impl SkillExecutor for StatusSkill {
    fn execute(&self, ctx: &mut SkillContext<'_>) -> Result<SkillOutcome, ActionError> {
        let value = ctx.scaling_or(self.default_value);
        let caster = ctx.attacker.name.clone();
        let effect = self.build(value);
        let unit = self.target.pick(ctx);
        unit.add_effect(effect);

        let line = match self.target {
            Target::Caster => format!(
                "{} uses {} for {} turns.",
                caster, self.effect_name, self.turns
            ),
            Target::Enemy => format!(
                "{} afflicts {} with {} for {} turns.",
                caster, unit.name, self.effect_name, self.turns
            ),
        };
        Ok(SkillOutcome::narrate(line))
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.turns as f64]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_type_chart, BattleConstants};
    use crate::effect::EffectKind;
    use crate::types::Element;
    use rand::rngs::mock::StepRng;

    fn pair() -> (Combatant, Combatant) {
        (
            Combatant::new("Warlord", Element::Neutral, 1000, 150, 80, 100),
            Combatant::new("Golem", Element::Earth, 2000, 90, 120, 40),
        )
    }

    fn run(executor: &dyn SkillExecutor, a: &mut Combatant, d: &mut Combatant, value: f64) -> SkillOutcome {
        let chart = default_type_chart();
        let constants = BattleConstants::default();
        let mut rng = StepRng::new(0, 0);
        let mut ctx = SkillContext {
            attacker: a,
            defender: d,
            scaling: Some(value),
            chart: &chart,
            constants: &constants,
            rng: &mut rng,
        };
        executor.execute(&mut ctx).unwrap()
    }

    #[test]
    fn test_self_buff() {
        let (mut a, mut d) = pair();
        let war_cry = StatBuff {
            effect_name: "War Cry",
            stat: Stat::Atk,
            target: Target::Caster,
            default_percent: 20.0,
            turns: 3,
        };
        let outcome = run(&war_cry, &mut a, &mut d, 20.0);
        assert_eq!(a.atk, 180);
        assert_eq!(outcome.damage_dealt, 0);
        assert!(outcome.log_line.contains("raises its ATK by 30"));
        assert_eq!(a.effect("War Cry").unwrap().turns, 3);
    }

    #[test]
    fn test_enemy_debuff() {
        let (mut a, mut d) = pair();
        let armor_break = StatBuff {
            effect_name: "Armor Break",
            stat: Stat::Def,
            target: Target::Enemy,
            default_percent: 25.0,
            turns: 2,
        };
        run(&armor_break, &mut a, &mut d, 25.0);
        assert_eq!(d.def, 90);
        assert_eq!(a.def, 80);
        assert_eq!(
            d.effect("Armor Break").unwrap().kind,
            EffectKind::StatShift {
                stat: Stat::Def,
                amount: -30,
                stacks: 1
            }
        );
    }

    #[test]
    fn test_stacking_caps_and_refreshes() {
        let (mut a, mut d) = pair();
        let fury = StackingBuff {
            effect_name: "Rising Fury",
            stat: Stat::Atk,
            default_percent: 10.0,
            max_stacks: 3,
            turns: 3,
        };
        for _ in 0..3 {
            run(&fury, &mut a, &mut d, 10.0);
        }
        assert_eq!(a.atk, 195);

        a.effects[0].turns = 1;
        let outcome = run(&fury, &mut a, &mut d, 10.0);
        assert_eq!(a.atk, 195);
        assert_eq!(a.effects[0].turns, 3);
        assert_eq!(a.effects[0].stacks(), 3);
        assert!(outcome.log_line.contains("max stacks"));
    }

    #[test]
    fn test_status_templates() {
        let (mut a, mut d) = pair();
        let siphon = StatusSkill {
            effect_name: "Energy Siphon",
            template: StatusTemplate::EnergyDrain,
            target: Target::Enemy,
            default_value: 15.0,
            turns: 3,
        };
        run(&siphon, &mut a, &mut d, 15.7);
        assert_eq!(
            d.effect("Energy Siphon").unwrap().kind,
            EffectKind::EnergyDrain { amount: 15 }
        );

        let bulwark = StatusSkill {
            effect_name: "Bulwark",
            template: StatusTemplate::DamageReduction,
            target: Target::Caster,
            default_value: 30.0,
            turns: 2,
        };
        run(&bulwark, &mut a, &mut d, 30.0);
        assert_eq!(a.damage_reduction(), Some(30.0));

        let flash = StatusSkill {
            effect_name: "Blinded",
            template: StatusTemplate::MissChance,
            target: Target::Enemy,
            default_value: 35.0,
            turns: 2,
        };
        let outcome = run(&flash, &mut a, &mut d, 35.0);
        assert_eq!(d.miss_chance(), Some(35.0));
        assert!(outcome.log_line.contains("afflicts Golem"));
    }
}
