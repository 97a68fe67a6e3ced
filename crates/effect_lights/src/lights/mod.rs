//! Light classification and light addon attachment
//!
//! - `LightClassifier`: effect shader → `LightCategory`, from texture tables
//!   and reference colors
//! - `DecorationCache`: one decoration model per category, built on first use
//! - `LightManager`: override lookup, classification and attachment

pub mod cache;
pub mod category;
pub mod classifier;
pub mod manager;

pub use cache::{DebrisFactory, DecorationCache, ModelError, ModelFactory};
pub use category::{LightCategory, UnknownCategory};
pub use classifier::{vote_by_key_colors, LightClassifier};
pub use manager::{LightManager, EXTERNALLY_MANAGED_MARKER};
