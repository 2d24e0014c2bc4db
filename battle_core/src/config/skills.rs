//! Skill configuration loading

use super::ConfigError;
use crate::skill::{SkillDefinition, SkillRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Container for skill configurations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsConfig {
    #[serde(rename = "skills", default)]
    pub skills: Vec<SkillDefinition>,
}

impl SkillsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for skill in &self.skills {
            if !seen.insert(skill.id.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate skill id: {}",
                    skill.id
                )));
            }
            if let Some(required) = skill.required_energy {
                if required < 0 {
                    return Err(ConfigError::ValidationError(format!(
                        "{}: required_energy must not be negative (got {})",
                        skill.id, required
                    )));
                }
            }
            if skill.initial_energy < 0 {
                return Err(ConfigError::ValidationError(format!(
                    "{}: initial_energy must not be negative (got {})",
                    skill.id, skill.initial_energy
                )));
            }
        }
        Ok(())
    }
}

/// Load skill definitions from a TOML file and bind the built-in executors
pub fn load_skill_configs(path: &Path) -> Result<SkillRegistry, ConfigError> {
    let config: SkillsConfig = super::load_toml(path)?;
    config.validate()?;
    Ok(SkillRegistry::from_config(config))
}

/// Load skill definitions from a TOML string and bind the built-in executors
pub fn parse_skill_configs(content: &str) -> Result<SkillRegistry, ConfigError> {
    let config: SkillsConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(SkillRegistry::from_config(config))
}

/// Get the bundled skill catalogue
pub fn default_skills() -> SkillRegistry {
    let toml = include_str!("../../config/skills.toml");
    parse_skill_configs(toml).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "bundled skills failed to parse, every unit will basic attack");
        SkillRegistry::new()
    })
}
