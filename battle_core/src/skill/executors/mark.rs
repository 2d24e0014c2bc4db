//! Delayed mark: damage fixed now from a live stat, dealt on expiry

use crate::effect::Effect;
use crate::skill::{ActionError, SkillContext, SkillExecutor, SkillOutcome};

#[derive(Debug, Clone)]
pub struct DelayedMark {
    pub effect_name: &'static str,
    pub default_multiplier: f64,
    pub turns: u32,
}

impl SkillExecutor for DelayedMark {
    fn execute(&self, ctx: &mut SkillContext<'_>) -> Result<SkillOutcome, ActionError> {
        let multiplier = ctx.scaling_or(self.default_multiplier);
        let amount = (ctx.attacker.speed as f64 * multiplier).floor().max(0.0) as i64;

        ctx.defender
            .add_effect(Effect::delayed_damage(self.effect_name, amount, self.turns));

        Ok(SkillOutcome::narrate(format!(
            "{} places {} on {}. It will detonate for {} damage in {} turns.",
            ctx.attacker.name, self.effect_name, ctx.defender.name, amount, self.turns
        )))
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.turns as f64]
    }
}
