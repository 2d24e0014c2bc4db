//! Type effectiveness chart
//!
//! Directional lookup of attacker element vs defender element:
//! - defender in the attacker's `strong` list: 1.5x
//! - defender in the attacker's `weak` list: 0.5x
//! - anything else, including `Neutral` and unlisted elements: 1.0x
//!
//! Labels in a chart file that name no element are dropped with a warning.

use crate::config::TypeChartConfig;
use crate::types::Element;
use std::collections::HashMap;

pub const STRONG_MULTIPLIER: f64 = 1.5;
pub const WEAK_MULTIPLIER: f64 = 0.5;
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

#[derive(Debug, Clone, Default)]
struct Matchups {
    strong: Vec<Element>,
    weak: Vec<Element>,
}

/// Immutable type chart shared by every battle
#[derive(Debug, Clone, Default)]
pub struct TypeChart {
    entries: HashMap<Element, Matchups>,
}

impl TypeChart {
    /// Create an empty chart (every matchup neutral)
    pub fn new() -> Self {
        TypeChart {
            entries: HashMap::new(),
        }
    }

    pub fn from_config(config: TypeChartConfig) -> Self {
        let mut entries: HashMap<Element, Matchups> = HashMap::new();
        for (label, entry) in config.types {
            let Some(attacker) = known_element(&label) else {
                continue;
            };
            let slot = entries.entry(attacker).or_default();
            slot.strong.extend(entry.strong.iter().filter_map(|l| known_element(l)));
            slot.weak.extend(entry.weak.iter().filter_map(|l| known_element(l)));
        }
        TypeChart { entries }
    }

    /// Declare a one-way matchup. The reverse direction is left untouched.
    pub fn with_matchup(mut self, attacker: Element, defender: Element, strong: bool) -> Self {
        let entry = self.entries.entry(attacker).or_default();
        entry.strong.retain(|e| *e != defender);
        entry.weak.retain(|e| *e != defender);
        if strong {
            entry.strong.push(defender);
        } else {
            entry.weak.push(defender);
        }
        self
    }

    /// Damage multiplier for `attacker` hitting `defender`
    pub fn multiplier(&self, attacker: Element, defender: Element) -> f64 {
        if attacker == Element::Neutral || defender == Element::Neutral {
            return NEUTRAL_MULTIPLIER;
        }
        match self.entries.get(&attacker) {
            Some(entry) if entry.strong.contains(&defender) => STRONG_MULTIPLIER,
            Some(entry) if entry.weak.contains(&defender) => WEAK_MULTIPLIER,
            _ => NEUTRAL_MULTIPLIER,
        }
    }
}

/// Resolve a chart label to a typed element. Unknown and `neutral` labels
/// carry no matchups, so both are dropped.
fn known_element(label: &str) -> Option<Element> {
    match Element::parse(label) {
        Some(Element::Neutral) => None,
        Some(element) => Some(element),
        None => {
            tracing::warn!(label, "unknown element label in type chart, skipped");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_type_chart;

    #[test]
    fn test_directionality() {
        let chart = default_type_chart();
        assert!((chart.multiplier(Element::Fire, Element::Ice) - 1.5).abs() < f64::EPSILON);
        assert!((chart.multiplier(Element::Ice, Element::Fire) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_auto_mirroring() {
        let chart = TypeChart::new().with_matchup(Element::Light, Element::Wind, true);
        assert!((chart.multiplier(Element::Light, Element::Wind) - 1.5).abs() < f64::EPSILON);
        assert!((chart.multiplier(Element::Wind, Element::Light) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_neutral_and_unknown_are_total() {
        let chart = default_type_chart();
        for &a in Element::all() {
            assert!((chart.multiplier(a, Element::Neutral) - 1.0).abs() < f64::EPSILON);
            assert!((chart.multiplier(Element::Neutral, a) - 1.0).abs() < f64::EPSILON);
        }
        assert!((TypeChart::new().multiplier(Element::Fire, Element::Ice) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_neutral_matchups_stay_neutral() {
        let chart = TypeChart::new()
            .with_matchup(Element::Neutral, Element::Fire, true)
            .with_matchup(Element::Fire, Element::Neutral, false);
        assert!((chart.multiplier(Element::Neutral, Element::Fire) - 1.0).abs() < f64::EPSILON);
        assert!((chart.multiplier(Element::Fire, Element::Neutral) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_matchup_replaces_previous() {
        let chart = TypeChart::new()
            .with_matchup(Element::Dark, Element::Fire, true)
            .with_matchup(Element::Dark, Element::Fire, false);
        assert!((chart.multiplier(Element::Dark, Element::Fire) - 0.5).abs() < f64::EPSILON);
    }
}
