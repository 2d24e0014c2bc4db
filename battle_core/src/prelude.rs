//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Units
pub use crate::combatant::{Combatant, CombatantSnapshot, StatsSnapshot};
pub use crate::types::{Element, Rarity, Side, Stat};

// Effects
pub use crate::effect::{Effect, EffectKind, PERMANENT};

// Skills
pub use crate::skill::{Activation, ScalingTable, SkillContext, SkillExecutor, SkillOutcome, SkillRegistry};

// Battle
pub use crate::battle::{Battle, BattleContext, BattleMode, BattleOutcome, BattleReport};

// Config
pub use crate::chart::TypeChart;
pub use crate::config::{default_skills, default_type_chart, BattleConstants};
