//! User settings: light overrides and the top-level config document

pub mod config;
pub mod overrides;

pub use config::LightsConfig;
pub use overrides::{FormKey, FormKeyError, LightOverrides, NoOverrides, OverrideSettings};
