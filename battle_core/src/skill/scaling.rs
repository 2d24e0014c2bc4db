//! Rarity-indexed scaling values
//!
//! Skill data arrives in several shapes: a bare number, a flat list with one
//! value per rarity tier, or a list of lists. A single nested row is that
//! row; several rows are one row per tier whose first column is the value.
//! Everything is normalized into a [`ScalingTable`] at load time so executors
//! only ever see one shape.

use crate::types::RARITY_TIERS;
use serde::{Deserialize, Serialize};

/// Scaling values as they appear in config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScaling {
    Single(f64),
    Flat(Vec<f64>),
    Nested(Vec<Vec<f64>>),
}

/// One scaling value per rarity tier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawScaling", into = "Vec<f64>")]
pub struct ScalingTable {
    values: Vec<f64>,
}

impl From<RawScaling> for ScalingTable {
    fn from(raw: RawScaling) -> Self {
        match raw {
            RawScaling::Single(value) => ScalingTable::uniform(value),
            RawScaling::Flat(values) => ScalingTable::new(values),
            RawScaling::Nested(rows) if rows.len() <= 1 => {
                ScalingTable::new(rows.into_iter().next().unwrap_or_default())
            }
            RawScaling::Nested(rows) => {
                let empty = rows.iter().filter(|row| row.is_empty()).count();
                if empty > 0 {
                    tracing::warn!(empty, "nested scaling table has empty rows, skipped");
                }
                ScalingTable::new(rows.iter().filter_map(|row| row.first().copied()).collect())
            }
        }
    }
}

impl From<ScalingTable> for Vec<f64> {
    fn from(table: ScalingTable) -> Self {
        table.values
    }
}

impl ScalingTable {
    /// Build a table, dropping non-finite entries
    pub fn new(values: Vec<f64>) -> Self {
        ScalingTable {
            values: values.into_iter().filter(|v| v.is_finite()).collect(),
        }
    }

    /// Same value at every tier
    pub fn uniform(value: f64) -> Self {
        ScalingTable::new(vec![value; RARITY_TIERS])
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Value for a rarity tier, clamped to the table bounds.
    /// `None` only when the table is empty.
    pub fn value_for(&self, tier: usize) -> Option<f64> {
        let last = self.values.len().checked_sub(1)?;
        self.values.get(tier.min(last)).copied()
    }

    /// Value for a tier, or `default` when the table is empty
    pub fn value_or(&self, tier: usize, default: f64) -> f64 {
        self.value_for(tier).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        scaling: ScalingTable,
    }

    fn parse(body: &str) -> ScalingTable {
        let holder: Holder = toml::from_str(body).unwrap();
        holder.scaling
    }

    #[test]
    fn test_value_for_clamps_to_bounds() {
        let table = ScalingTable::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(table.value_for(0), Some(1.0));
        assert_eq!(table.value_for(2), Some(3.0));
        assert_eq!(table.value_for(5), Some(3.0));
        assert_eq!(table.value_for(usize::MAX), Some(3.0));
    }

    #[test]
    fn test_empty_table_falls_back() {
        let table = ScalingTable::default();
        assert_eq!(table.value_for(0), None);
        assert!((table.value_or(3, 1.25) - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalizes_bare_number() {
        let table = parse("scaling = 1.5");
        assert_eq!(table.len(), RARITY_TIERS);
        assert_eq!(table.value_for(4), Some(1.5));
    }

    #[test]
    fn test_normalizes_flat_list() {
        let table = parse("scaling = [1.0, 1.1, 1.2, 1.3, 1.4, 1.5]");
        assert_eq!(table.value_for(3), Some(1.3));
    }

    #[test]
    fn test_normalizes_nested_list() {
        let table = parse("scaling = [[10, 12, 14, 16, 18, 20]]");
        assert_eq!(table.value_for(1), Some(12.0));
    }

    #[test]
    fn test_nested_rows_are_tiers() {
        let table = parse(
            "scaling = [[1.2, 30], [1.3, 30], [1.45, 30], [1.6, 30], [1.8, 30], [2.0, 30]]",
        );
        assert_eq!(table.len(), RARITY_TIERS);
        assert_eq!(table.value_for(0), Some(1.2));
        assert_eq!(table.value_for(2), Some(1.45));
        assert_eq!(table.value_for(5), Some(2.0));
    }

    #[test]
    fn test_nested_rows_skip_empty() {
        let table = parse("scaling = [[1.0], [], [2.0]]");
        assert_eq!(table.len(), 2);
        assert_eq!(table.value_for(1), Some(2.0));
    }

    #[test]
    fn test_non_finite_values_dropped() {
        let table = ScalingTable::new(vec![1.0, f64::NAN, 2.0]);
        assert_eq!(table.len(), 2);
    }
}
