//! Texture path tables

use serde::{Deserialize, Serialize};

use super::builtin;
use crate::foundation::icontains;
use crate::lights::LightCategory;

/// Texture substrings that identify one light category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    /// Category the substrings map to
    pub light: LightCategory,
    /// Case-insensitive path substrings
    pub textures: Vec<String>,
}

impl TableEntry {
    /// Create an entry from a category and its substrings
    pub fn new<I, S>(light: LightCategory, textures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            light,
            textures: textures.into_iter().map(Into::into).collect(),
        }
    }
}

/// Category of the first entry holding a substring of `path`
///
/// Entries are scanned in order and each entry's substrings in order, so the
/// earliest entry wins when several would match.
pub fn match_path(path: &str, entries: &[TableEntry]) -> Option<LightCategory> {
    if path.is_empty() {
        return None;
    }

    entries
        .iter()
        .find(|entry| entry.textures.iter().any(|texture| icontains(path, texture)))
        .map(|entry| entry.light)
}

/// Ordered category → substrings table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    entries: Vec<TableEntry>,
}

impl CategoryTable {
    /// Create a table from entries, keeping their order
    pub fn new(entries: Vec<TableEntry>) -> Self {
        Self { entries }
    }

    /// Entries in match order
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// First category whose substrings occur in `path`
    pub fn find(&self, path: &str) -> Option<LightCategory> {
        match_path(path, &self.entries)
    }

    /// Check the table for entries that can never produce a light
    pub fn validate(&self, name: &str) -> Result<(), String> {
        for entry in &self.entries {
            if entry.light.is_none() {
                return Err(format!("{} table maps textures to None", name));
            }
            if entry.textures.iter().any(String::is_empty) {
                return Err(format!("{} table has an empty texture for {}", name, entry.light));
            }
        }
        Ok(())
    }
}

/// All texture tables used by the classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureTables {
    /// Substrings that veto any light when found in shader or fill textures
    pub blacklist: Vec<String>,
    /// Palette gradients, matched against both palette paths
    pub palette: CategoryTable,
    /// Particle shader textures
    pub particle_shader: CategoryTable,
    /// Membrane fill textures
    pub membrane_shader: CategoryTable,
}

impl TextureTables {
    /// Whether `path` contains any blacklisted substring
    pub fn is_blacklisted(&self, path: &str) -> bool {
        self.blacklist.iter().any(|texture| icontains(path, texture))
    }

    /// Validate every table
    pub fn validate(&self) -> Result<(), String> {
        if self.blacklist.iter().any(String::is_empty) {
            return Err("blacklist contains an empty texture".to_string());
        }
        self.palette.validate("palette")?;
        self.particle_shader.validate("particle_shader")?;
        self.membrane_shader.validate("membrane_shader")?;
        Ok(())
    }
}

impl Default for TextureTables {
    fn default() -> Self {
        Self {
            blacklist: builtin::BLACKLIST.iter().map(|s| (*s).to_string()).collect(),
            palette: builtin::category_table(builtin::PALETTES),
            particle_shader: builtin::category_table(builtin::PARTICLE_SHADERS),
            membrane_shader: builtin::category_table(builtin::MEMBRANE_SHADERS),
        }
    }
}
