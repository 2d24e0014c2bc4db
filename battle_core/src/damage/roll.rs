//! DamageRoll - outcome of one damage formula invocation

use serde::{Deserialize, Serialize};

/// Final damage plus what shaped it, for narrative log text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageRoll {
    /// Final damage, at least 1
    pub amount: i64,
    pub is_crit: bool,
    /// Damage boost consumed by this hit (%)
    pub boost_consumed: Option<f64>,
    /// Type chart multiplier applied
    pub type_multiplier: f64,
    /// Defender damage reduction applied (%)
    pub reduction: Option<f64>,
}

impl DamageRoll {
    /// Narrative tags describing this hit, in formula order
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = Vec::new();
        if self.is_crit {
            tags.push("critical hit");
        }
        if self.boost_consumed.is_some() {
            tags.push("empowered");
        }
        if self.type_multiplier > 1.0 {
            tags.push("super effective");
        } else if self.type_multiplier < 1.0 {
            tags.push("not very effective");
        }
        if self.reduction.is_some() {
            tags.push("reduced");
        }
        tags
    }

    /// Tags formatted as a log suffix, e.g. ` (critical hit, super effective)`
    pub fn suffix(&self) -> String {
        let tags = self.tags();
        if tags.is_empty() {
            String::new()
        } else {
            format!(" ({})", tags.join(", "))
        }
    }
}
