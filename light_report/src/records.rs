//! Effect shader records as stored in RON input files

use anyhow::{Context, Result};
use serde::Deserialize;

use effect_lights::shader::{AddonModels, FormRecord, ShaderColors, ShaderDescriptor, ShaderFlags, TexturePaths};

/// One effect shader in an input file
#[derive(Debug, Deserialize)]
pub struct ShaderRecord {
    pub form: FormRecord,
    #[serde(default)]
    pub textures: TexturePaths,
    #[serde(default)]
    pub flags: ShaderFlags,
    #[serde(default)]
    pub colors: ShaderColors,
    /// Addon models already present on the shader, by resource path
    #[serde(default)]
    pub addon_models: Option<Vec<String>>,
}

impl ShaderRecord {
    pub fn into_descriptor(self) -> ShaderDescriptor {
        ShaderDescriptor {
            form: self.form,
            textures: self.textures,
            flags: self.flags,
            colors: self.colors,
            addon_models: self.addon_models.map(AddonModels::from_paths),
        }
    }
}

/// Read a RON list of shader records
pub fn load_records(path: &str) -> Result<Vec<ShaderRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read shader records from {}", path))?;
    ron::from_str(&contents).with_context(|| format!("Failed to parse shader records in {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use effect_lights::prelude::*;

    #[test]
    fn test_bundled_records_parse() {
        let records: Vec<ShaderRecord> = ron::from_str(include_str!("../data/shaders.ron")).unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[2].flags, ShaderFlags::PARTICLE_GREYSCALE_TO_COLOR);
        assert_eq!(records[6].form.origin, FormOrigin::Runtime);
    }

    #[test]
    fn test_bundled_records_with_bundled_config() {
        let config = LightsConfig::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/lights.toml")).unwrap();
        let manager = LightManager::from_config(&config);
        let records: Vec<ShaderRecord> = ron::from_str(include_str!("../data/shaders.ron")).unwrap();

        let lights: Vec<_> = records
            .into_iter()
            .map(|record| {
                let mut shader = record.into_descriptor();
                let light = manager.resolve_light(&shader);
                (light, manager.apply_light(&mut shader), shader.addon_models.map_or(0, |m| m.len()))
            })
            .collect();

        assert_eq!(
            lights,
            [
                (LightCategory::Orange, true, 1),
                (LightCategory::Cyan, true, 1),
                (LightCategory::Blue, true, 1),
                (LightCategory::Purple, true, 2),
                (LightCategory::Orange, true, 1),
                (LightCategory::White, true, 1),
                (LightCategory::None, false, 0),
            ]
        );
    }
}
