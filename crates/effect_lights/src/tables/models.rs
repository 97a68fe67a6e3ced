//! Resource paths of the light addon model for each category

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::builtin;
use crate::lights::LightCategory;

/// Resource path for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPathEntry {
    /// Category the model lights up
    pub light: LightCategory,
    /// Model resource path
    pub path: String,
}

/// Fixed category → model path table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelPaths {
    entries: Vec<ModelPathEntry>,
}

impl ModelPaths {
    /// Create a table from entries
    pub fn new(entries: Vec<ModelPathEntry>) -> Self {
        Self { entries }
    }

    /// Entries in build order
    pub fn entries(&self) -> &[ModelPathEntry] {
        &self.entries
    }

    /// Path registered for a category
    pub fn get(&self, light: LightCategory) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.light == light)
            .map(|entry| entry.path.as_str())
    }

    /// Each category at most once, never `None`, no empty paths
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.light.is_none() {
                return Err("model table has a path for None".to_string());
            }
            if entry.path.is_empty() {
                return Err(format!("model table has an empty path for {}", entry.light));
            }
            if !seen.insert(entry.light) {
                return Err(format!("model table lists {} twice", entry.light));
            }
        }
        Ok(())
    }
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self::new(builtin::model_entries())
    }
}
