//! Multi-hit: every hit rolls its own crit, the total is resolved once

use crate::damage::resolve_damage;
use crate::roll::roll_percent;
use crate::skill::{ActionError, SkillContext, SkillExecutor, SkillOutcome};

#[derive(Debug, Clone)]
pub struct Flurry {
    pub hits: u32,
    pub default_multiplier: f64,
}

impl SkillExecutor for Flurry {
    fn execute(&self, ctx: &mut SkillContext<'_>) -> Result<SkillOutcome, ActionError> {
        let multiplier = ctx.scaling_or(self.default_multiplier);
        let per_hit = ctx.attacker.atk as f64 * multiplier;

        let mut raw = 0.0;
        let mut crits = 0;
        for _ in 0..self.hits {
            if roll_percent(ctx.rng, ctx.attacker.crit_rate as f64) {
                crits += 1;
                raw += per_hit * ctx.constants.multi_hit_crit_multiplier;
            } else {
                raw += per_hit;
            }
        }

        // Crits are already folded into `raw`; the crit damage stat is not used
        let roll = resolve_damage(ctx.attacker, ctx.defender, raw, false, ctx.chart);
        ctx.defender.take_damage(roll.amount);

        let crit_text = match crits {
            0 => String::new(),
            1 => " (1 critical hit)".to_string(),
            n => format!(" ({} critical hits)", n),
        };
        let line = format!(
            "{} unleashes {} rapid strikes on {} for {} total damage{}{}.",
            ctx.attacker.name,
            self.hits,
            ctx.defender.name,
            roll.amount,
            crit_text,
            roll.suffix()
        );
        Ok(SkillOutcome::new(roll.amount, line))
    }

    fn parameters(&self) -> Vec<f64> {
        vec![self.hits as f64]
    }
}
