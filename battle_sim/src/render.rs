//! Plain-text rendering of a battle report

use battle_core::{BattleReport, Side};
use std::fmt::Write;

/// Log lines followed by the summary
pub fn render_text(report: &BattleReport) -> String {
    let mut out = String::new();
    for line in report.log.lines() {
        let _ = writeln!(out, "{}", line);
    }
    out.push_str(&render_summary(report));
    out
}

/// Outcome line and the end state of every unit
pub fn render_summary(report: &BattleReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Outcome: {} ({} turns, {} rounds)",
        report.outcome, report.turns, report.rounds
    );
    for side in [Side::A, Side::B] {
        let _ = writeln!(out, "Side {:?}:", side);
        for unit in report.side(side) {
            let effects = if unit.effects.is_empty() {
                String::new()
            } else {
                format!(" [{}]", unit.effects.join(", "))
            };
            let _ = writeln!(
                out,
                "  {} ({}) HP {}/{} energy {} ATK {} DEF {} SPD {} CRIT {}%/{}%{}",
                unit.name,
                unit.element,
                unit.hp,
                unit.max_hp,
                unit.energy,
                unit.atk,
                unit.def,
                unit.speed,
                unit.crit_rate,
                unit.crit_dmg,
                effects
            );
        }
    }
    out
}
