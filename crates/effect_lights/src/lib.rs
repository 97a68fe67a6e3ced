//! # Effect Lights
//!
//! Gives light-emitting addon models to visual effect shaders.
//!
//! ## Features
//!
//! - **Classification**: texture path heuristics and color analysis map an
//!   effect shader to a light category
//! - **Overrides**: settings can force a category per editor ID or form key
//! - **Idempotent attachment**: the light model is merged into the shader's
//!   addon list at most once, whatever the number of calls
//! - **Configurable tables**: every reference table can be replaced from a
//!   TOML or RON file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use effect_lights::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LightsConfig::load("lights.toml")?;
//!     let manager = LightManager::from_config(&config);
//!
//!     let mut shader = ShaderDescriptor::new(FormRecord::from_file("MagicFireFX", 0x1B211, "Skyrim.esm"))
//!         .with_particle_shader("Effects\\FXFire01.dds");
//!     manager.apply_light(&mut shader);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod lights;
pub mod settings;
pub mod shader;
pub mod tables;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::Color,
        lights::{
            DebrisFactory, DecorationCache, LightCategory, LightClassifier, LightManager,
            ModelError, ModelFactory,
        },
        settings::{LightOverrides, LightsConfig, NoOverrides, OverrideSettings},
        shader::{
            AddonModels, DecorationModel, FormOrigin, FormRecord, ModelData, ShaderDescriptor,
            ShaderFlags,
        },
        tables::{ColorTable, ModelPaths, TextureTables},
    };
}
