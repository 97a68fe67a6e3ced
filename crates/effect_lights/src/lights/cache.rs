//! Decoration model cache
//!
//! Holds one decoration model per light category. The models are built the
//! first time anything asks for them and never change afterwards; concurrent
//! first callers block until the single build finishes.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::LightCategory;
use crate::shader::{DecorationModel, ModelData};
use crate::tables::ModelPaths;

/// Errors produced while building a decoration model
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// No resource path configured
    #[error("Empty model path for {0}")]
    EmptyPath(LightCategory),

    /// The factory refused to build the model
    #[error("Model rejected: {0}")]
    Rejected(String),
}

/// Builds decoration models from resource paths
pub trait ModelFactory: Send + Sync {
    /// Build the decoration model for a category
    fn create(&self, light: LightCategory, path: &str) -> Result<DecorationModel, ModelError>;
}

/// Default factory: one addon model entry per resource path
#[derive(Debug, Clone, Copy, Default)]
pub struct DebrisFactory;

impl ModelFactory for DebrisFactory {
    fn create(&self, light: LightCategory, path: &str) -> Result<DecorationModel, ModelError> {
        if path.is_empty() {
            return Err(ModelError::EmptyPath(light));
        }
        Ok(DecorationModel::new(ModelData::new(path)))
    }
}

/// Lazily built category → decoration model map
pub struct DecorationCache {
    paths: ModelPaths,
    factory: Box<dyn ModelFactory>,
    models: OnceLock<HashMap<LightCategory, DecorationModel>>,
}

impl DecorationCache {
    /// Create an unbuilt cache
    pub fn new(paths: ModelPaths, factory: impl ModelFactory + 'static) -> Self {
        Self {
            paths,
            factory: Box::new(factory),
            models: OnceLock::new(),
        }
    }

    /// All cached models, building them on first access
    pub fn models(&self) -> &HashMap<LightCategory, DecorationModel> {
        self.models.get_or_init(|| self.build())
    }

    /// Cached model for a category
    pub fn get(&self, light: LightCategory) -> Option<&DecorationModel> {
        self.models().get(&light)
    }

    /// Whether the one-time build already ran
    pub fn is_built(&self) -> bool {
        self.models.get().is_some()
    }

    /// Model paths the cache builds from
    pub fn paths(&self) -> &ModelPaths {
        &self.paths
    }

    fn build(&self) -> HashMap<LightCategory, DecorationModel> {
        let mut models = HashMap::with_capacity(self.paths.entries().len());

        for entry in self.paths.entries() {
            if entry.light.is_none() || models.contains_key(&entry.light) {
                continue;
            }
            match self.factory.create(entry.light, &entry.path) {
                Ok(model) => {
                    models.insert(entry.light, model);
                }
                Err(e) => {
                    log::debug!("Skipping {} light model '{}': {}", entry.light, entry.path, e);
                }
            }
        }

        log::info!("Built {} light models", models.len());
        models
    }
}

impl std::fmt::Debug for DecorationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecorationCache")
            .field("paths", &self.paths)
            .field("built", &self.is_built())
            .finish_non_exhaustive()
    }
}
