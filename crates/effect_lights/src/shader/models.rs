//! Addon model lists and the decoration models attached to them
//!
//! A descriptor's addon model list can be shared with the decoration cache
//! and with other descriptors. Lists are copy-on-write: prepending to a
//! shared list clones it first, so one descriptor's attach step never shows
//! up in anybody else's list.

use std::fmt;
use std::sync::Arc;

/// A single addon model resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelData {
    /// Resource path of the model, relative to the meshes folder
    pub path: String,
}

impl ModelData {
    /// Create model data for a resource path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl fmt::Display for ModelData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Ordered, shareable list of addon models
#[derive(Debug, Clone, Default)]
pub struct AddonModels {
    entries: Arc<Vec<Arc<ModelData>>>,
}

impl AddonModels {
    /// Wrap an existing list of model handles
    pub fn new(entries: Vec<Arc<ModelData>>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Build a fresh list with one new model per path
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            paths
                .into_iter()
                .map(|path| Arc::new(ModelData::new(path)))
                .collect(),
        )
    }

    /// Number of models in the list
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First model, if any
    pub fn first(&self) -> Option<&Arc<ModelData>> {
        self.entries.first()
    }

    /// Iterate over the model handles in order
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<ModelData>> {
        self.entries.iter()
    }

    /// Whether this exact model handle is in the list (identity, not path equality)
    pub fn contains(&self, model: &Arc<ModelData>) -> bool {
        self.entries.iter().any(|entry| Arc::ptr_eq(entry, model))
    }

    /// Insert a model at the front of the list
    pub fn prepend(&mut self, model: Arc<ModelData>) {
        Arc::make_mut(&mut self.entries).insert(0, model);
    }

    /// Whether both lists are backed by the same storage
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<'a> IntoIterator for &'a AddonModels {
    type Item = &'a Arc<ModelData>;
    type IntoIter = std::slice::Iter<'a, Arc<ModelData>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Light addon resource built once per light category
#[derive(Debug, Clone)]
pub struct DecorationModel {
    models: AddonModels,
}

impl DecorationModel {
    /// Decoration model holding a single resource
    pub fn new(data: ModelData) -> Self {
        Self {
            models: AddonModels::new(vec![Arc::new(data)]),
        }
    }

    /// Underlying model list
    pub fn models(&self) -> &AddonModels {
        &self.models
    }

    /// The model that gets merged into existing addon lists
    pub fn primary(&self) -> Option<&Arc<ModelData>> {
        self.models.first()
    }
}
