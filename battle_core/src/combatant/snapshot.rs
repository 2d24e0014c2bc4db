//! CombatantSnapshot - persisted card/mob data handed to the engine

use super::{Combatant, CombatantError, SkillBinding};
use crate::config::BattleConstants;
use crate::skill::{ScalingTable, SkillRegistry};
use crate::types::{Element, Rarity};
use serde::{Deserialize, Serialize};

/// Base stats as stored for a card or mob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub hp: i64,
    pub atk: i64,
    pub def: i64,
    pub speed: i64,
    #[serde(default)]
    pub crit_rate: Option<i64>,
    #[serde(default)]
    pub crit_dmg: Option<i64>,
}

/// Everything the engine needs to build one combatant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantSnapshot {
    pub name: String,
    #[serde(default)]
    pub element: Element,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub stats: Option<StatsSnapshot>,
    /// Registry id of the unit's skill
    #[serde(default)]
    pub skill: Option<String>,
    /// Overrides the registry's scaling table for this unit
    #[serde(default)]
    pub scaling: Option<ScalingTable>,
    /// Overrides the skill's initial energy
    #[serde(default)]
    pub energy: Option<i64>,
}

impl Combatant {
    /// Copy a snapshot into a fresh battle-owned combatant.
    ///
    /// Missing or invalid stats fail here, before any battle starts. An
    /// unknown skill id is not fatal: the unit fights with basic attacks.
    pub fn from_snapshot(
        snapshot: &CombatantSnapshot,
        registry: &SkillRegistry,
        constants: &BattleConstants,
    ) -> Result<Combatant, CombatantError> {
        if snapshot.name.trim().is_empty() {
            return Err(CombatantError::EmptyName);
        }
        let stats = snapshot
            .stats
            .as_ref()
            .ok_or_else(|| CombatantError::MissingStats(snapshot.name.clone()))?;

        let mut combatant = Combatant::new(
            snapshot.name.clone(),
            snapshot.element,
            stats.hp,
            stats.atk,
            stats.def,
            stats.speed,
        )
        .with_rarity(snapshot.rarity)
        .with_crit(
            stats.crit_rate.unwrap_or(constants.default_crit_rate),
            stats.crit_dmg.unwrap_or(constants.default_crit_dmg),
        );
        combatant.validate()?;

        let mut energy = 0;
        if let Some(id) = &snapshot.skill {
            match registry.definition(id) {
                Some(definition) => {
                    let scaling = snapshot
                        .scaling
                        .clone()
                        .unwrap_or_else(|| definition.scaling.clone());
                    if scaling.is_empty() {
                        tracing::warn!(unit = %snapshot.name, skill = %id, "empty scaling table, executor defaults apply");
                    }
                    energy = definition.initial_energy;
                    combatant.skill = Some(SkillBinding {
                        id: id.clone(),
                        activation: definition.activation(),
                        scaling,
                    });
                }
                None => {
                    tracing::warn!(unit = %snapshot.name, skill = %id, "unknown skill, unit will only basic attack");
                }
            }
        }

        let energy = snapshot.energy.unwrap_or(energy).max(0);
        Ok(combatant.with_energy(energy))
    }
}
