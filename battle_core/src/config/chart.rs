//! Type chart configuration loading

use super::ConfigError;
use crate::chart::TypeChart;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Matchups declared for one attacking element, as raw labels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeEntry {
    #[serde(default)]
    pub strong: Vec<String>,
    #[serde(default)]
    pub weak: Vec<String>,
}

/// Container for the type chart
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeChartConfig {
    /// Keyed by element label; unknown labels are skipped when the chart is built
    #[serde(default)]
    pub types: HashMap<String, TypeEntry>,
}

impl TypeChartConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (element, entry) in &self.types {
            let contradicts = |label: &String| {
                entry
                    .weak
                    .iter()
                    .any(|w| w.trim().eq_ignore_ascii_case(label.trim()))
            };
            if let Some(both) = entry.strong.iter().find(|e| contradicts(e)) {
                return Err(ConfigError::ValidationError(format!(
                    "{} lists {} as both strong and weak",
                    element, both
                )));
            }
        }
        Ok(())
    }
}

/// Load a type chart from a TOML file
pub fn load_type_chart(path: &Path) -> Result<TypeChart, ConfigError> {
    let config: TypeChartConfig = super::load_toml(path)?;
    config.validate()?;
    Ok(TypeChart::from_config(config))
}

/// Load a type chart from a TOML string
pub fn parse_type_chart(content: &str) -> Result<TypeChart, ConfigError> {
    let config: TypeChartConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(TypeChart::from_config(config))
}

/// Get the bundled type chart
pub fn default_type_chart() -> TypeChart {
    let toml = include_str!("../../config/types.toml");
    parse_type_chart(toml).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "bundled type chart failed to parse, every matchup is neutral");
        TypeChart::new()
    })
}
