//! Turn engine - initiative, per-turn sequence, termination

use super::{
    BattleContext, BattleError, BattleLog, BattleMode, BattleOutcome, BattleReport, UnitSummary,
};
use crate::combatant::{Combatant, CombatantSnapshot};
use crate::effect::{apply_end_of_turn, apply_start_of_turn};
use crate::skill::{basic_attack, ActionError, SkillContext, SkillOutcome};
use crate::types::{Side, UnitId};
use rand::RngCore;
use std::cmp::Reverse;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Lifecycle of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    NotStarted,
    InProgress,
    Finished(BattleOutcome),
}

/// One battle. Owns its combatants and its random source.
pub struct Battle<'a, R: RngCore> {
    ctx: BattleContext<'a>,
    mode: BattleMode,
    team_a: Vec<Combatant>,
    team_b: Vec<Combatant>,
    rng: R,
    state: BattleState,
    turns: u32,
    rounds: u32,
    log: BattleLog,
}

impl<'a, R: RngCore> Battle<'a, R> {
    /// Create a battle from ready-built combatants.
    ///
    /// Every unit is validated here; a duel needs exactly one unit per side.
    pub fn new(
        ctx: BattleContext<'a>,
        team_a: Vec<Combatant>,
        team_b: Vec<Combatant>,
        mode: BattleMode,
        rng: R,
    ) -> Result<Self, BattleError> {
        for (side, team) in [(Side::A, &team_a), (Side::B, &team_b)] {
            if team.is_empty() {
                return Err(BattleError::EmptySide(side));
            }
            if mode == BattleMode::Duel && team.len() != 1 {
                return Err(BattleError::DuelSize {
                    side,
                    count: team.len(),
                });
            }
            for unit in team {
                unit.validate()?;
            }
        }

        Ok(Battle {
            ctx,
            mode,
            team_a,
            team_b,
            rng,
            state: BattleState::NotStarted,
            turns: 0,
            rounds: 0,
            log: BattleLog::new(),
        })
    }

    /// Create a battle by copying persisted snapshots into fresh combatants
    pub fn from_snapshots(
        ctx: BattleContext<'a>,
        team_a: &[CombatantSnapshot],
        team_b: &[CombatantSnapshot],
        mode: BattleMode,
        rng: R,
    ) -> Result<Self, BattleError> {
        let build = |snapshots: &[CombatantSnapshot]| -> Result<Vec<Combatant>, BattleError> {
            snapshots
                .iter()
                .map(|s| Combatant::from_snapshot(s, ctx.registry, ctx.constants).map_err(BattleError::from))
                .collect()
        };
        let team_a = build(team_a)?;
        let team_b = build(team_b)?;
        Self::new(ctx, team_a, team_b, mode, rng)
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn mode(&self) -> BattleMode {
        self.mode
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn team(&self, side: Side) -> &[Combatant] {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub fn combatant(&self, id: UnitId) -> Option<&Combatant> {
        self.team(id.side).get(id.index)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, BattleState::Finished(_))
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.state {
            BattleState::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Apply passives once and enter `InProgress`. Calling it again while in
    /// progress does nothing.
    pub fn start(&mut self) -> Result<(), BattleError> {
        match self.state {
            BattleState::Finished(_) => return Err(BattleError::AlreadyFinished),
            BattleState::InProgress => return Ok(()),
            BattleState::NotStarted => {}
        }

        self.log.push(
            0,
            format!(
                "Battle begins: {} vs {}",
                roster(&self.team_a),
                roster(&self.team_b)
            ),
        );
        tracing::info!(mode = ?self.mode, a = self.team_a.len(), b = self.team_b.len(), "battle started");

        for id in self.unit_ids() {
            if !self.unit(id).has_passive() {
                continue;
            }
            let Some(target) = self.first_living(id.side.opponent()) else {
                continue;
            };
            match self.execute_skill(id, target) {
                Some(Ok(outcome)) => self.log.push(0, outcome.log_line),
                Some(Err(error)) => {
                    tracing::warn!(unit = %self.unit(id).name, %error, "passive failed to apply");
                }
                None => {
                    tracing::warn!(unit = %self.unit(id).name, "passive has no executor");
                }
            }
        }

        self.state = BattleState::InProgress;
        if let Some(outcome) = self.check_outcome() {
            self.finish(outcome);
        }
        Ok(())
    }

    /// Run one initiative round. Returns the outcome if the battle ended
    /// during it.
    pub fn step_round(&mut self) -> Result<Option<BattleOutcome>, BattleError> {
        match self.state {
            BattleState::Finished(_) => return Err(BattleError::AlreadyFinished),
            BattleState::NotStarted => {
                self.start()?;
                if let BattleState::Finished(outcome) = self.state {
                    return Ok(Some(outcome));
                }
            }
            BattleState::InProgress => {}
        }

        self.rounds += 1;
        self.log.push(self.turns, format!("Round {}", self.rounds));

        for id in self.initiative() {
            // Units can fall earlier in the round
            if !self.unit(id).is_alive() {
                continue;
            }
            self.take_turn(id);
            if let Some(outcome) = self.check_outcome() {
                self.finish(outcome);
                return Ok(Some(outcome));
            }
        }
        Ok(None)
    }

    /// Drive the battle to its end and return the report
    pub fn run(&mut self) -> Result<BattleReport, BattleError> {
        let outcome = loop {
            if let Some(outcome) = self.step_round()? {
                break outcome;
            }
        };
        Ok(self.build_report(outcome))
    }

    /// Report of a finished battle
    pub fn report(&self) -> Option<BattleReport> {
        self.outcome().map(|outcome| self.build_report(outcome))
    }

    fn build_report(&self, outcome: BattleOutcome) -> BattleReport {
        let units = self
            .unit_ids()
            .into_iter()
            .map(|id| UnitSummary::from_combatant(self.unit(id), id.side))
            .collect();
        BattleReport {
            outcome,
            mode: self.mode,
            turns: self.turns,
            rounds: self.rounds,
            units,
            log: self.log.clone(),
        }
    }

    /// Living units ordered by current speed, fastest first. Ties keep side A
    /// first, then list order.
    fn initiative(&self) -> Vec<UnitId> {
        let mut order = self.unit_ids();
        order.retain(|id| self.unit(*id).is_alive());
        order.sort_by_key(|id| Reverse(self.unit(*id).speed));
        order
    }

    fn take_turn(&mut self, id: UnitId) {
        self.turns += 1;
        let turn = self.turns;
        let name = self.unit(id).name.clone();

        let report = apply_start_of_turn(self.unit_mut(id));
        self.log.extend(turn, report.lines);
        if !self.unit(id).is_alive() {
            self.log.push(turn, format!("{} collapses before acting.", name));
            return;
        }

        let Some(target) = self.first_living(id.side.opponent()) else {
            return;
        };

        let outcome = if self.unit(id).can_cast() {
            if let Some(definition) = self.skill_name(id) {
                self.log.push(turn, format!("{} casts {}!", name, definition));
            }
            let outcome = match self.execute_skill(id, target) {
                Some(Ok(outcome)) => outcome,
                Some(Err(error)) => {
                    tracing::warn!(unit = %name, %error, "skill failed, action skipped");
                    SkillOutcome::narrate(format!("{}'s skill fizzles.", name))
                }
                None => {
                    tracing::warn!(unit = %name, "skill has no executor, using basic attack");
                    self.attack(id, target)
                }
            };
            self.unit_mut(id).energy = 0;
            outcome
        } else {
            let outcome = self.attack(id, target);
            let gain = self.ctx.constants.energy_per_turn;
            self.unit_mut(id).energy += gain;
            outcome
        };
        tracing::trace!(unit = %name, damage = outcome.damage_dealt, "action resolved");
        self.log.push(turn, outcome.log_line);

        if self.unit(id).is_alive() {
            let constants = self.ctx.constants;
            let report = apply_end_of_turn(self.unit_mut(id), constants);
            self.log.extend(turn, report.lines);
        }
    }

    /// Run the actor's bound skill against `target`. `None` when the actor
    /// has no skill or no executor is registered for it.
    ///
    /// A panicking executor is caught and reported as an `ActionError`.
    /// Whatever it mutated before panicking stays applied.
    fn execute_skill(
        &mut self,
        actor: UnitId,
        target: usize,
    ) -> Option<Result<SkillOutcome, ActionError>> {
        let Battle {
            ctx,
            team_a,
            team_b,
            rng,
            ..
        } = self;
        let (attacker, defender) = pair_mut(team_a, team_b, actor, target);
        let id = attacker.skill.as_ref()?.id.clone();
        let executor = ctx.registry.executor(&id)?;
        let scaling = attacker.scaling_value();

        let mut skill_ctx = SkillContext {
            attacker,
            defender,
            scaling,
            chart: ctx.chart,
            constants: ctx.constants,
            rng,
        };
        let result = catch_unwind(AssertUnwindSafe(|| executor.execute(&mut skill_ctx)));
        Some(result.unwrap_or_else(|payload| {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::warn!(skill = %id, %reason, "skill executor panicked");
            Err(ActionError::Invalid {
                skill: id,
                reason: format!("executor panicked: {}", reason),
            })
        }))
    }

    fn attack(&mut self, actor: UnitId, target: usize) -> SkillOutcome {
        let Battle {
            ctx,
            team_a,
            team_b,
            rng,
            ..
        } = self;
        let (attacker, defender) = pair_mut(team_a, team_b, actor, target);
        basic_attack(attacker, defender, ctx.chart, rng)
    }

    fn skill_name(&self, id: UnitId) -> Option<String> {
        let binding = self.unit(id).skill.as_ref()?;
        let definition = self.ctx.registry.definition(&binding.id)?;
        Some(definition.name.clone())
    }

    fn check_outcome(&self) -> Option<BattleOutcome> {
        let a_alive = self.team_a.iter().any(Combatant::is_alive);
        let b_alive = self.team_b.iter().any(Combatant::is_alive);
        match (a_alive, b_alive) {
            (false, false) => Some(BattleOutcome::Draw),
            (true, false) => Some(BattleOutcome::Victory(Side::A)),
            (false, true) => Some(BattleOutcome::Victory(Side::B)),
            (true, true) if self.turns >= self.mode.max_turns(self.ctx.constants) => {
                Some(BattleOutcome::Timeout)
            }
            (true, true) => None,
        }
    }

    fn finish(&mut self, outcome: BattleOutcome) {
        for unit in self.team_a.iter_mut().chain(self.team_b.iter_mut()) {
            unit.hp = unit.hp.max(0);
        }
        self.state = BattleState::Finished(outcome);
        self.log.push(self.turns, format!("{} after {} turns.", outcome, self.turns));
        tracing::info!(%outcome, turns = self.turns, rounds = self.rounds, "battle finished");
    }

    /// Every unit, side A first, in list order
    fn unit_ids(&self) -> Vec<UnitId> {
        let a = (0..self.team_a.len()).map(|i| UnitId::new(Side::A, i));
        let b = (0..self.team_b.len()).map(|i| UnitId::new(Side::B, i));
        a.chain(b).collect()
    }

    fn first_living(&self, side: Side) -> Option<usize> {
        self.team(side).iter().position(Combatant::is_alive)
    }

    fn unit(&self, id: UnitId) -> &Combatant {
        &self.team(id.side)[id.index]
    }

    fn unit_mut(&mut self, id: UnitId) -> &mut Combatant {
        match id.side {
            Side::A => &mut self.team_a[id.index],
            Side::B => &mut self.team_b[id.index],
        }
    }
}

/// Actor and target are always on opposite sides
fn pair_mut<'t>(
    team_a: &'t mut [Combatant],
    team_b: &'t mut [Combatant],
    actor: UnitId,
    target: usize,
) -> (&'t mut Combatant, &'t mut Combatant) {
    match actor.side {
        Side::A => (&mut team_a[actor.index], &mut team_b[target]),
        Side::B => (&mut team_b[actor.index], &mut team_a[target]),
    }
}

fn roster(team: &[Combatant]) -> String {
    team.iter()
        .map(|u| u.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
