//! # Light Configuration
//!
//! Top-level configuration document. Every section falls back to the
//! built-in tables, so a file only needs to contain what it changes:
//!
//! ```toml
//! log_level = "debug"
//!
//! [overrides]
//! "MagicFireFX" = "Red"
//! "0x800~MyEffects.esp" = "Cyan"
//! ```

use serde::{Deserialize, Serialize};

use super::OverrideSettings;
use crate::config::{Config, ConfigError};
use crate::tables::{ColorTable, ModelPaths, TextureTables};

/// Complete light configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightsConfig {
    /// Default log filter for binaries
    pub log_level: String,
    /// Texture reference tables
    pub textures: TextureTables,
    /// Reference colors
    pub colors: ColorTable,
    /// Light model resource per category
    pub models: ModelPaths,
    /// Forced categories
    pub overrides: OverrideSettings,
}

impl LightsConfig {
    /// Load a config file and validate it
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.textures.validate().map_err(ConfigError::Invalid)?;
        self.colors.validate().map_err(ConfigError::Invalid)?;
        self.models.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}

impl Default for LightsConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            textures: TextureTables::default(),
            colors: ColorTable::default(),
            models: ModelPaths::default(),
            overrides: OverrideSettings::default(),
        }
    }
}

impl Config for LightsConfig {}
