//! Passives: applied once at battle start with a permanent lifetime

use crate::effect::{Effect, PERMANENT};
use crate::skill::{ActionError, SkillContext, SkillExecutor, SkillOutcome};

/// Heals a share of max HP each turn while the bearer is below the regen threshold
#[derive(Debug, Clone)]
pub struct RegenPassive {
    pub effect_name: &'static str,
    pub default_percent: f64,
}

impl SkillExecutor for RegenPassive {
    fn execute(&self, ctx: &mut SkillContext<'_>) -> Result<SkillOutcome, ActionError> {
        let percent = ctx.scaling_or(self.default_percent);
        ctx.attacker
            .add_effect(Effect::conditional_regen(self.effect_name, percent, PERMANENT));
        Ok(SkillOutcome::narrate(format!(
            "{}'s {} is active: regenerates {}% max HP per turn while below {}% HP.",
            ctx.attacker.name, self.effect_name, percent, ctx.constants.regen_threshold_percent
        )))
    }
}

/// Evades basic attacks; each dodge readies a counter boost
#[derive(Debug, Clone)]
pub struct DodgePassive {
    pub effect_name: &'static str,
    pub default_chance: f64,
    pub counter_boost: f64,
}

impl SkillExecutor for DodgePassive {
    fn execute(&self, ctx: &mut SkillContext<'_>) -> Result<SkillOutcome, ActionError> {
        let chance = ctx.scaling_or(self.default_chance);
        ctx.attacker.add_effect(Effect::dodge(
            self.effect_name,
            chance,
            self.counter_boost,
            PERMANENT,
        ));
        Ok(SkillOutcome::narrate(format!(
            "{}'s {} is active: {}% chance to dodge basic attacks.",
            ctx.attacker.name, self.effect_name, chance
        )))
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.counter_boost]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::Combatant;
    use crate::config::{default_type_chart, BattleConstants};
    use crate::effect::apply_end_of_turn;
    use crate::types::Element;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_passives_never_expire() {
        let chart = default_type_chart();
        let constants = BattleConstants::default();
        let mut rng = StepRng::new(0, 0);
        let mut monk = Combatant::new("Monk", Element::Earth, 1000, 80, 40, 90);
        let mut foe = Combatant::new("Foe", Element::Neutral, 1000, 80, 40, 90);

        let iron_will = RegenPassive {
            effect_name: "Iron Will",
            default_percent: 8.0,
        };
        let phantom = DodgePassive {
            effect_name: "Phantom Step",
            default_chance: 20.0,
            counter_boost: 30.0,
        };
        for passive in [&iron_will as &dyn SkillExecutor, &phantom] {
            let mut ctx = SkillContext {
                attacker: &mut monk,
                defender: &mut foe,
                scaling: Some(10.0),
                chart: &chart,
                constants: &constants,
                rng: &mut rng,
            };
            passive.execute(&mut ctx).unwrap();
        }

        for _ in 0..100 {
            apply_end_of_turn(&mut monk, &constants);
        }
        assert_eq!(monk.effects.len(), 2);
        assert!(monk.effects.iter().all(|e| e.is_permanent()));
        assert_eq!(monk.dodge(), Some((10.0, 30.0)));
        assert!(foe.effects.is_empty());
    }
}
