//! Forced light categories, consulted before classification
//!
//! Keys are either an editor ID (`MagicFireFX`) or a load-order independent
//! form key (`0x1B211~Skyrim.esm`). Form keys are checked first. Both kinds
//! of key are matched case-insensitively.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::lights::LightCategory;
use crate::shader::ShaderDescriptor;

/// Source of forced light categories
pub trait LightOverrides: Send + Sync {
    /// Forced category for a shader; `None` means classify normally
    fn override_light(&self, shader: &ShaderDescriptor) -> LightCategory;
}

/// Never overrides anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl LightOverrides for NoOverrides {
    fn override_light(&self, _shader: &ShaderDescriptor) -> LightCategory {
        LightCategory::None
    }
}

/// Errors parsing a form key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormKeyError {
    /// Nothing after the `~`
    #[error("Form key '{0}' has no file name")]
    MissingFile(String),

    /// The part before the `~` is not a hex form ID
    #[error("Form key '{0}' has an invalid form ID")]
    InvalidId(String),
}

/// Local form ID plus plugin file name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormKey {
    /// Form ID without the load-order index
    pub local_id: u32,
    /// Lower-cased plugin file name
    pub file: String,
}

impl FormKey {
    /// Create a key, normalising the file name
    pub fn new(local_id: u32, file: &str) -> Self {
        Self {
            local_id,
            file: file.to_ascii_lowercase(),
        }
    }

    /// Key of a file-backed shader, `None` for runtime forms
    pub fn of(shader: &ShaderDescriptor) -> Option<Self> {
        shader
            .form
            .file_name()
            .map(|file| Self::new(shader.form.local_form_id(), file))
    }
}

impl FromStr for FormKey {
    type Err = FormKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, file) = s
            .split_once('~')
            .ok_or_else(|| FormKeyError::MissingFile(s.to_string()))?;

        let file = file.trim();
        if file.is_empty() {
            return Err(FormKeyError::MissingFile(s.to_string()));
        }

        let id = id.trim();
        let hex = id
            .strip_prefix("0x")
            .or_else(|| id.strip_prefix("0X"))
            .unwrap_or(id);
        let local_id =
            u32::from_str_radix(hex, 16).map_err(|_| FormKeyError::InvalidId(s.to_string()))?;

        Ok(Self::new(local_id, file))
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}~{}", self.local_id, self.file)
    }
}

/// Override table loaded from settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, LightCategory>", into = "BTreeMap<String, LightCategory>")]
pub struct OverrideSettings {
    by_form: HashMap<FormKey, LightCategory>,
    by_editor_id: HashMap<String, LightCategory>,
}

impl OverrideSettings {
    /// Build from raw keys, failing on the first malformed form key
    pub fn from_entries<I, K>(entries: I) -> Result<Self, FormKeyError>
    where
        I: IntoIterator<Item = (K, LightCategory)>,
        K: AsRef<str>,
    {
        let mut settings = Self::default();
        for (key, light) in entries {
            settings.insert(key.as_ref(), light)?;
        }
        Ok(settings)
    }

    /// Add one override; keys containing `~` are form keys
    pub fn insert(&mut self, key: &str, light: LightCategory) -> Result<(), FormKeyError> {
        if key.contains('~') {
            self.by_form.insert(key.parse()?, light);
        } else {
            self.by_editor_id.insert(key.trim().to_ascii_lowercase(), light);
        }
        Ok(())
    }

    /// Number of overrides
    pub fn len(&self) -> usize {
        self.by_form.len() + self.by_editor_id.len()
    }

    /// Whether there are no overrides
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LightOverrides for OverrideSettings {
    fn override_light(&self, shader: &ShaderDescriptor) -> LightCategory {
        if let Some(light) = FormKey::of(shader).and_then(|key| self.by_form.get(&key)) {
            return *light;
        }

        let editor_id = &shader.form.editor_id;
        if editor_id.is_empty() {
            return LightCategory::None;
        }

        self.by_editor_id
            .get(&editor_id.to_ascii_lowercase())
            .copied()
            .unwrap_or(LightCategory::None)
    }
}

impl From<BTreeMap<String, LightCategory>> for OverrideSettings {
    fn from(entries: BTreeMap<String, LightCategory>) -> Self {
        let mut settings = Self::default();
        for (key, light) in entries {
            if let Err(e) = settings.insert(&key, light) {
                log::warn!("Ignoring light override: {}", e);
            }
        }
        settings
    }
}

impl From<OverrideSettings> for BTreeMap<String, LightCategory> {
    fn from(settings: OverrideSettings) -> Self {
        settings
            .by_form
            .into_iter()
            .map(|(key, light)| (key.to_string(), light))
            .chain(settings.by_editor_id)
            .collect()
    }
}
