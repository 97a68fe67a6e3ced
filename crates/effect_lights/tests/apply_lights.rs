//! Integration tests for the full override → classify → attach flow
//!
//! Uses the built-in tables, so these double as checks on the shipped data.

use effect_lights::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn skyrim_shader(editor_id: &str, local_id: u32) -> ShaderDescriptor {
    ShaderDescriptor::new(FormRecord::from_file(editor_id, local_id, "Skyrim.esm"))
}

#[test]
fn test_blacklisted_shader_never_gets_a_light() {
    let manager = LightManager::from_config(&LightsConfig::default());
    let mut shader = skyrim_shader("SmokyFireFX", 0x100)
        .with_particle_shader("Effects\\FXSmokeFire01.dds")
        .with_particle_palette("Effects\\Gradients\\GradFire.dds")
        .with_flags(ShaderFlags::PARTICLE_GREYSCALE_TO_COLOR)
        .with_key_colors([Color::new(255, 128, 0); 3])
        .with_edge_color(Color::new(255, 0, 0));

    assert_eq!(manager.classifier().classify(&shader), LightCategory::None);
    assert!(!manager.apply_light(&mut shader));
    assert!(shader.addon_models.is_none());
}

#[test]
fn test_each_texture_stage_alone() {
    let classifier = LightClassifier::default();

    let particle_palette = skyrim_shader("A", 1)
        .with_particle_palette("Effects\\Gradients\\GradShock02.dds")
        .with_flags(ShaderFlags::PARTICLE_GREYSCALE_TO_COLOR);
    assert_eq!(classifier.classify(&particle_palette), LightCategory::Blue);

    let particle_shader = skyrim_shader("B", 2).with_particle_shader("Effects\\FXSnowflake01.dds");
    assert_eq!(classifier.classify(&particle_shader), LightCategory::Cyan);

    let membrane = skyrim_shader("C", 3).with_membrane_fill("Effects\\FXHolyMembrane.dds");
    assert_eq!(classifier.classify(&membrane), LightCategory::White);

    let membrane_palette = skyrim_shader("D", 4)
        .with_membrane_palette("Effects\\Gradients\\GradPoison.dds")
        .with_flags(ShaderFlags::GREYSCALE_TO_COLOR);
    assert_eq!(classifier.classify(&membrane_palette), LightCategory::Green);
}

#[test]
fn test_edge_color_overrides_membrane_table() {
    let classifier = LightClassifier::default();
    let shader = skyrim_shader("FrostCloakFX", 0x200)
        .with_membrane_fill("Effects\\FXFrostMembrane01.dds")
        .with_edge_color(Color::new(255, 0, 255));

    assert_eq!(classifier.classify(&shader), LightCategory::Magenta);
}

#[test]
fn test_key_colors_distinct_and_majority() {
    let classifier = LightClassifier::default();

    let distinct = skyrim_shader("Distinct", 1).with_key_colors([
        Color::new(250, 0, 0),
        Color::new(0, 180, 0),
        Color::new(0, 0, 150),
    ]);
    assert_eq!(classifier.classify(&distinct), LightCategory::Red);

    let majority = skyrim_shader("Majority", 2).with_key_colors([
        Color::new(250, 0, 0),
        Color::new(0, 0, 200),
        Color::new(10, 10, 240),
    ]);
    assert_eq!(classifier.classify(&majority), LightCategory::Blue);
}

#[test]
fn test_apply_twice_does_not_duplicate() {
    let manager = LightManager::from_config(&LightsConfig::default());
    let mut shader = skyrim_shader("SparksFX", 0x300)
        .with_particle_shader("Effects\\FXSpark02.dds")
        .with_addon_models(AddonModels::from_paths(["Effects\\SparkDebris.nif"]));

    assert!(manager.apply_light(&mut shader));
    let first = shader.addon_models.as_ref().unwrap().len();
    assert_eq!(first, 2);

    assert!(manager.apply_light(&mut shader));
    assert_eq!(shader.addon_models.as_ref().unwrap().len(), first);
}

#[test]
fn test_shared_list_is_not_corrupted() {
    let manager = LightManager::from_config(&LightsConfig::default());
    let shared = AddonModels::from_paths(["Effects\\SharedDebris.nif"]);

    let mut fire = skyrim_shader("FireFX", 0x400)
        .with_particle_shader("Effects\\FXFire01.dds")
        .with_addon_models(shared.clone());
    let mut frost = skyrim_shader("FrostFX", 0x401)
        .with_particle_shader("Effects\\FXFrost01.dds")
        .with_addon_models(shared.clone());

    assert!(manager.apply_light(&mut fire));
    assert!(manager.apply_light(&mut frost));

    assert_eq!(shared.len(), 1);
    let fire_first = &fire.addon_models.as_ref().unwrap().first().unwrap().path;
    let frost_first = &frost.addon_models.as_ref().unwrap().first().unwrap().path;
    assert_eq!(fire_first, "Effects\\EffectLights\\OrangeLight.nif");
    assert_eq!(frost_first, "Effects\\EffectLights\\CyanLight.nif");
}

struct CountingFactory(Arc<AtomicUsize>);

impl ModelFactory for CountingFactory {
    fn create(&self, light: LightCategory, path: &str) -> Result<DecorationModel, ModelError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        DebrisFactory.create(light, path)
    }
}

#[test]
fn test_concurrent_apply_builds_each_model_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let config = LightsConfig::default();
    let manager = LightManager::new(
        LightClassifier::new(config.textures.clone(), config.colors.clone()),
        DecorationCache::new(config.models.clone(), CountingFactory(Arc::clone(&calls))),
        NoOverrides,
    );

    std::thread::scope(|scope| {
        for i in 0..16u32 {
            let manager = &manager;
            scope.spawn(move || {
                let mut shader = skyrim_shader("ThreadFX", 0x500 + i)
                    .with_particle_shader("Effects\\FXLightning01.dds");
                assert!(manager.apply_light(&mut shader));
            });
        }
    });

    assert_eq!(calls.load(Ordering::SeqCst), LightCategory::ALL.len());
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = LightsConfig::default();
    config.log_level = "debug".to_string();
    config.overrides = OverrideSettings::from_entries([
        ("MagicFireFX", LightCategory::Red),
        ("0x800~MyEffects.esp", LightCategory::Cyan),
    ])
    .unwrap();

    for name in ["lights.toml", "lights.ron"] {
        let path = dir.path().join(name);
        let path = path.to_str().unwrap();

        config.save_to_file(path).unwrap();
        let loaded = LightsConfig::load(path).unwrap();
        assert_eq!(loaded, config);
    }
}

#[test]
fn test_unsupported_config_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lights.json");
    std::fs::write(&path, "{}").unwrap();

    let result = LightsConfig::load(path.to_str().unwrap());
    assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
}
