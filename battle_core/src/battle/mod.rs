//! Battle - the turn engine and everything it needs
//!
//! A [`Battle`] owns its combatants outright: they are copied in at
//! construction and never shared with persisted data or another battle.
//! Configuration (skills, type chart, constants) is borrowed read-only
//! through a [`BattleContext`], so any number of battles can share it.

mod engine;
mod log;
mod outcome;

pub use engine::{Battle, BattleState};
pub use log::{BattleLog, LogEntry};
pub use outcome::{BattleOutcome, BattleReport, UnitSummary};

use crate::chart::TypeChart;
use crate::combatant::CombatantError;
use crate::config::BattleConstants;
use crate::skill::SkillRegistry;
use crate::types::Side;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Battle setup or driving error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattleError {
    #[error(transparent)]
    Combatant(#[from] CombatantError),
    #[error("side {0:?} has no combatants")]
    EmptySide(Side),
    #[error("a duel needs exactly one combatant per side, side {side:?} has {count}")]
    DuelSize { side: Side, count: usize },
    #[error("battle has already finished")]
    AlreadyFinished,
}

/// Battle format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleMode {
    /// One unit per side
    Duel,
    /// A team against one or more bosses
    Raid,
}

impl BattleMode {
    /// Hard cap on turns for this mode
    pub fn max_turns(self, constants: &BattleConstants) -> u32 {
        match self {
            BattleMode::Duel => constants.duel_max_turns,
            BattleMode::Raid => constants.raid_max_turns,
        }
    }
}

/// Read-only configuration shared by battles
#[derive(Debug, Clone, Copy)]
pub struct BattleContext<'a> {
    pub registry: &'a SkillRegistry,
    pub chart: &'a TypeChart,
    pub constants: &'a BattleConstants,
}

impl<'a> BattleContext<'a> {
    pub fn new(
        registry: &'a SkillRegistry,
        chart: &'a TypeChart,
        constants: &'a BattleConstants,
    ) -> Self {
        BattleContext {
            registry,
            chart,
            constants,
        }
    }
}
