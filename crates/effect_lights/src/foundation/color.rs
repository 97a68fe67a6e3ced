//! Color tuples used by effect shader data
//!
//! Colors are compared, never converted: the only operations needed are the
//! "unset" check and a distance that orders reference colors by closeness.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 3D vector used for color-space arithmetic
pub type ColorVec = Vector3<f32>;

/// 8-bit RGB color as stored in effect shader records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Sentinel for a color slot that was never filled in
    pub const UNSET: Self = Self::new(0, 0, 0);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Whether this color is the unset sentinel
    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }

    /// Channels as a float vector in 0..=255 space
    pub fn to_vec(self) -> ColorVec {
        ColorVec::new(f32::from(self.r), f32::from(self.g), f32::from(self.b))
    }

    /// Euclidean distance between two colors in RGB space
    pub fn distance(self, other: Self) -> f32 {
        (self.to_vec() - other.to_vec()).norm()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A set of colors is unusable when any member is unset
pub fn any_unset(colors: &[Color]) -> bool {
    colors.iter().any(Color::is_unset)
}
