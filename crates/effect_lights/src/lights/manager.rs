//! Light manager: decides which light an effect shader gets and attaches it
//!
//! ```rust,no_run
//! use effect_lights::prelude::*;
//!
//! let manager = LightManager::from_config(&LightsConfig::default());
//! let mut shader = ShaderDescriptor::new(FormRecord::from_file("MagicFireFX", 0x1B211, "Skyrim.esm"))
//!     .with_particle_shader("Effects\\FXFire01.dds");
//!
//! assert!(manager.apply_light(&mut shader));
//! ```

use std::sync::Arc;

use super::{DebrisFactory, DecorationCache, LightCategory, LightClassifier};
use crate::foundation::icontains;
use crate::settings::{LightOverrides, LightsConfig};
use crate::shader::{AddonModels, DecorationModel, ShaderDescriptor};

/// Addon models under this folder belong to another mod and are left alone
pub const EXTERNALLY_MANAGED_MARKER: &str = "enb\\";

/// Applies light addon models to effect shaders
///
/// Shared by reference between threads; only the shader passed to
/// [`LightManager::apply_light`] is mutated.
pub struct LightManager {
    classifier: LightClassifier,
    cache: DecorationCache,
    overrides: Box<dyn LightOverrides>,
}

impl LightManager {
    /// Create a manager from its collaborators
    pub fn new(
        classifier: LightClassifier,
        cache: DecorationCache,
        overrides: impl LightOverrides + 'static,
    ) -> Self {
        Self {
            classifier,
            cache,
            overrides: Box::new(overrides),
        }
    }

    /// Create a manager from a config document with the default model factory
    pub fn from_config(config: &LightsConfig) -> Self {
        Self::new(
            LightClassifier::new(config.textures.clone(), config.colors.clone()),
            DecorationCache::new(config.models.clone(), DebrisFactory),
            config.overrides.clone(),
        )
    }

    /// Classifier in use
    pub fn classifier(&self) -> &LightClassifier {
        &self.classifier
    }

    /// Decoration model cache
    pub fn cache(&self) -> &DecorationCache {
        &self.cache
    }

    /// Forced category if any, otherwise the classified one
    pub fn resolve_light(&self, shader: &ShaderDescriptor) -> LightCategory {
        match self.overrides.override_light(shader) {
            LightCategory::None => self.classifier.classify(shader),
            light => light,
        }
    }

    /// Attach the light addon model for `shader`'s category
    ///
    /// Returns `false` only when no category applies, in which case the
    /// shader is untouched. Calling this again on the same shader never adds
    /// a second copy of the model.
    pub fn apply_light(&self, shader: &mut ShaderDescriptor) -> bool {
        let models = self.cache.models();

        let light = self.resolve_light(shader);
        if light.is_none() {
            return false;
        }

        if let Some(decoration) = models.get(&light) {
            match &mut shader.addon_models {
                Some(existing) => merge_decoration(existing, decoration),
                slot @ None => *slot = Some(decoration.models().clone()),
            }
        }

        if let Some(attached) = &shader.addon_models {
            log::info!("{}", shader.form);
            for model in attached {
                log::info!("\t{}", model.path);
            }
        }

        true
    }
}

/// Prepend the decoration's model unless the list already has it or is
/// managed elsewhere
fn merge_decoration(existing: &mut AddonModels, decoration: &DecorationModel) {
    let Some(primary) = decoration.primary() else {
        return;
    };

    let skip = existing.iter().any(|model| {
        icontains(&model.path, EXTERNALLY_MANAGED_MARKER) || Arc::ptr_eq(model, primary)
    });

    if !skip {
        existing.prepend(Arc::clone(primary));
    }
}

impl std::fmt::Debug for LightManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LightManager")
            .field("classifier", &self.classifier)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
