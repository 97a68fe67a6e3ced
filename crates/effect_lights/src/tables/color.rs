//! Reference colors per light category

use serde::{Deserialize, Serialize};

use super::builtin;
use crate::foundation::color::{any_unset, Color};
use crate::lights::LightCategory;

/// Reference colors for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Category the colors belong to
    pub light: LightCategory,
    /// Reference colors
    pub colors: Vec<Color>,
}

/// Nearest-color lookup table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTable {
    entries: Vec<ColorEntry>,
}

impl ColorTable {
    /// Create a table from entries, keeping their order
    pub fn new(entries: Vec<ColorEntry>) -> Self {
        Self { entries }
    }

    /// Entries in lookup order
    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// Whether a color is unusable for classification
    pub fn is_invalid(&self, color: Color) -> bool {
        color.is_unset()
    }

    /// Whether a color set is unusable for classification
    pub fn is_invalid_set(&self, colors: &[Color]) -> bool {
        colors.is_empty() || any_unset(colors)
    }

    /// Category holding the nearest reference color, with its distance
    ///
    /// On equal distances the earlier entry wins. An empty table yields
    /// `(None, f32::INFINITY)`.
    pub fn resolve(&self, color: Color) -> (LightCategory, f32) {
        let mut best = (LightCategory::None, f32::INFINITY);

        for entry in &self.entries {
            for reference in &entry.colors {
                let distance = color.distance(*reference);
                if distance < best.1 {
                    best = (entry.light, distance);
                }
            }
        }

        best
    }

    /// Resolve every color of a set, keeping their order
    pub fn resolve_all<const N: usize>(&self, colors: &[Color; N]) -> [(LightCategory, f32); N] {
        colors.map(|color| self.resolve(color))
    }

    /// Check the table for entries that can never produce a light
    pub fn validate(&self) -> Result<(), String> {
        for entry in &self.entries {
            if entry.light.is_none() {
                return Err("color table maps colors to None".to_string());
            }
            if entry.colors.is_empty() {
                return Err(format!("color table has no colors for {}", entry.light));
            }
        }
        Ok(())
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::new(builtin::color_entries())
    }
}
