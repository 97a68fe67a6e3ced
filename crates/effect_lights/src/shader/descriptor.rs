//! Effect shader descriptor

use serde::{Deserialize, Serialize};

use super::{AddonModels, FormRecord, ShaderFlags};
use crate::foundation::Color;

/// Texture paths referenced by an effect shader
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TexturePaths {
    /// Palette used to tint greyscale particle textures
    pub particle_palette: String,
    /// Palette used to tint greyscale membrane textures
    pub membrane_palette: String,
    /// Particle shader texture
    pub particle_shader: String,
    /// Membrane fill texture
    pub membrane_fill: String,
}

/// Colors the classifier can fall back on when textures are inconclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderColors {
    /// Ordered particle color keys
    pub key: [Color; 3],
    /// Membrane edge color
    pub edge: Color,
}

/// Effect shader as seen by light classification
///
/// Everything except `addon_models` is read-only input.
#[derive(Debug, Clone, Default)]
pub struct ShaderDescriptor {
    /// Identity used for reporting and overrides
    pub form: FormRecord,
    /// Texture paths
    pub textures: TexturePaths,
    /// Behaviour flags
    pub flags: ShaderFlags,
    /// Key and edge colors
    pub colors: ShaderColors,
    /// Addon models spawned with the effect
    pub addon_models: Option<AddonModels>,
}

impl ShaderDescriptor {
    /// Create an empty descriptor for a form
    pub fn new(form: FormRecord) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Set the particle palette texture
    pub fn with_particle_palette(mut self, path: impl Into<String>) -> Self {
        self.textures.particle_palette = path.into();
        self
    }

    /// Set the membrane palette texture
    pub fn with_membrane_palette(mut self, path: impl Into<String>) -> Self {
        self.textures.membrane_palette = path.into();
        self
    }

    /// Set the particle shader texture
    pub fn with_particle_shader(mut self, path: impl Into<String>) -> Self {
        self.textures.particle_shader = path.into();
        self
    }

    /// Set the membrane fill texture
    pub fn with_membrane_fill(mut self, path: impl Into<String>) -> Self {
        self.textures.membrane_fill = path.into();
        self
    }

    /// Add flags
    pub fn with_flags(mut self, flags: ShaderFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Set the three key colors
    pub fn with_key_colors(mut self, key: [Color; 3]) -> Self {
        self.colors.key = key;
        self
    }

    /// Set the edge color
    pub fn with_edge_color(mut self, edge: Color) -> Self {
        self.colors.edge = edge;
        self
    }

    /// Set the addon model list
    pub fn with_addon_models(mut self, models: AddonModels) -> Self {
        self.addon_models = Some(models);
        self
    }
}
