use std::collections::BTreeMap;
use std::path::Path;

use bevy_ecs::resource::Resource;
use thiserror::Error;

use super::crispiness::{CrispinessLevelSet, DEFAULT_LEVELS};

#[derive(Error, Debug)]
pub enum PrototypeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("duplicate crispiness level id: {0}")]
    Duplicate(String),
}

/// Read-only lookup of crispiness levels by id.
#[derive(Resource, Debug, Clone, Default)]
pub struct PrototypeRegistry {
    crispiness: BTreeMap<String, CrispinessLevelSet>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (id, visual) in DEFAULT_LEVELS {
            registry
                .crispiness
                .insert((*id).to_string(), CrispinessLevelSet::new(*id, *visual));
        }
        registry
    }

    /// Register a level. Fails if the id is already taken.
    pub fn insert(&mut self, level: CrispinessLevelSet) -> Result<(), PrototypeError> {
        if self.crispiness.contains_key(&level.id) {
            return Err(PrototypeError::Duplicate(level.id));
        }
        self.crispiness.insert(level.id.clone(), level);
        Ok(())
    }

    pub fn index(&self, id: &str) -> Option<&CrispinessLevelSet> {
        self.crispiness.get(id)
    }

    pub fn len(&self) -> usize {
        self.crispiness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crispiness.is_empty()
    }

    /// Parse a JSON array of crispiness levels.
    pub fn from_json_str(json: &str) -> Result<Self, PrototypeError> {
        let levels: Vec<CrispinessLevelSet> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for level in levels {
            registry.insert(level)?;
        }
        Ok(registry)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PrototypeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
