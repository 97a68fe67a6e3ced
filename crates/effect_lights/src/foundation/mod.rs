//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Color tuples and color distance
//! - Case-insensitive text matching for texture paths
//! - Logging utilities

pub mod color;
pub mod logging;
pub mod text;

pub use color::Color;
pub use text::icontains;
