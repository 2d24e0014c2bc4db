//! Skill registry - skill id to definition and executor

use super::executors::builtin_executor;
use super::{SkillDefinition, SkillExecutor};
use crate::config::SkillsConfig;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A definition paired with the routine that resolves it
#[derive(Clone)]
pub struct RegisteredSkill {
    pub definition: SkillDefinition,
    pub executor: Arc<dyn SkillExecutor>,
}

impl fmt::Debug for RegisteredSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredSkill")
            .field("id", &self.definition.id)
            .field("executor", &self.executor)
            .finish()
    }
}

/// Skill registry, shared read-only by every battle
#[derive(Debug, Clone, Default)]
pub struct SkillRegistry {
    skills: HashMap<String, RegisteredSkill>,
}

impl SkillRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        SkillRegistry {
            skills: HashMap::new(),
        }
    }

    /// Register a skill, replacing any previous skill with the same id
    pub fn register(&mut self, definition: SkillDefinition, executor: Arc<dyn SkillExecutor>) {
        self.skills.insert(
            definition.id.clone(),
            RegisteredSkill {
                definition,
                executor,
            },
        );
    }

    /// Bind config definitions to the built-in executors.
    ///
    /// Definitions without a built-in executor are skipped with a warning.
    pub fn from_config(config: SkillsConfig) -> Self {
        let mut registry = Self::new();
        for definition in config.skills {
            match builtin_executor(&definition.id) {
                Some(executor) => registry.register(definition, executor),
                None => {
                    tracing::warn!(skill = %definition.id, "no executor for skill, skipping");
                }
            }
        }
        registry
    }

    /// The bundled skill catalogue
    pub fn with_defaults() -> Self {
        crate::config::default_skills()
    }

    pub fn get(&self, id: &str) -> Option<&RegisteredSkill> {
        self.skills.get(id)
    }

    pub fn definition(&self, id: &str) -> Option<&SkillDefinition> {
        self.get(id).map(|s| &s.definition)
    }

    pub fn executor(&self, id: &str) -> Option<&Arc<dyn SkillExecutor>> {
        self.get(id).map(|s| &s.executor)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skill ids in sorted order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.skills.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Description of a skill at a rarity tier, for previews
    pub fn describe(&self, id: &str, tier: usize) -> Option<String> {
        let skill = self.get(id)?;
        Some(
            skill
                .definition
                .describe(tier, &skill.executor.parameters()),
        )
    }
}
