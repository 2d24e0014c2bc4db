//! BattleOutcome and BattleReport - what a finished battle hands back

use super::{BattleLog, BattleMode};
use crate::combatant::Combatant;
use crate::effect::Effect;
use crate::types::{Element, Rarity, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "side", rename_all = "snake_case")]
pub enum BattleOutcome {
    /// Every unit on the other side fell
    Victory(Side),
    /// Both sides fell on the same turn
    Draw,
    /// The turn cap was reached with both sides standing
    Timeout,
}

impl BattleOutcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            BattleOutcome::Victory(side) => Some(side),
            _ => None,
        }
    }

    pub fn loser(self) -> Option<Side> {
        self.winner().map(Side::opponent)
    }

    pub fn is_decisive(self) -> bool {
        self.winner().is_some()
    }
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleOutcome::Victory(Side::A) => write!(f, "Victory for side A"),
            BattleOutcome::Victory(Side::B) => write!(f, "Victory for side B"),
            BattleOutcome::Draw => write!(f, "Draw"),
            BattleOutcome::Timeout => write!(f, "Timeout"),
        }
    }
}

/// End-of-battle state of one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSummary {
    pub name: String,
    pub side: Side,
    pub element: Element,
    pub rarity: Rarity,
    /// Never negative
    pub hp: i64,
    pub max_hp: i64,
    pub energy: i64,
    /// Live stats at the end of the battle, buffs and debuffs included
    pub atk: i64,
    pub def: i64,
    pub speed: i64,
    pub crit_rate: i64,
    pub crit_dmg: i64,
    /// Labels of effects still active
    pub effects: Vec<String>,
    /// Full state of each active effect: kind, amount, stacks and turns left
    pub effect_details: Vec<Effect>,
}

impl UnitSummary {
    pub fn from_combatant(unit: &Combatant, side: Side) -> Self {
        UnitSummary {
            name: unit.name.clone(),
            side,
            element: unit.element,
            rarity: unit.rarity,
            hp: unit.display_hp(),
            max_hp: unit.max_hp,
            energy: unit.energy,
            atk: unit.atk,
            def: unit.def,
            speed: unit.speed,
            crit_rate: unit.crit_rate,
            crit_dmg: unit.crit_dmg,
            effects: unit.effect_labels(),
            effect_details: unit.effects.clone(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// Everything the caller persists or renders after a battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub mode: BattleMode,
    /// Turns taken across both sides
    pub turns: u32,
    pub rounds: u32,
    pub units: Vec<UnitSummary>,
    pub log: BattleLog,
}

impl BattleReport {
    pub fn side(&self, side: Side) -> impl Iterator<Item = &UnitSummary> {
        self.units.iter().filter(move |u| u.side == side)
    }

    pub fn unit(&self, name: &str) -> Option<&UnitSummary> {
        self.units.iter().find(|u| u.name == name)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
