//! Light categories an effect shader can be classified into

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of light addon an effect should receive
///
/// `None` is a real variant rather than an `Option` so that classification
/// results, override settings and table entries all share one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum LightCategory {
    /// No applicable light
    #[default]
    None,
    /// Fire and blood effects
    Red,
    /// Flame and ember effects
    Orange,
    /// Sparks and sunlight effects
    Yellow,
    /// Poison and nature effects
    Green,
    /// Frost and water effects
    Cyan,
    /// Shock and magic effects
    Blue,
    /// Conjuration and daedric effects
    Purple,
    /// Illusion effects
    Magenta,
    /// Restoration and holy effects
    White,
}

impl LightCategory {
    /// Every category that maps to a light, in declaration order
    pub const ALL: [Self; 9] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Purple,
        Self::Magenta,
        Self::White,
    ];

    /// Whether this is the "no light" category
    pub fn is_none(self) -> bool {
        self == Self::None
    }

    /// Variant name as used in config files
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Cyan => "Cyan",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Magenta => "Magenta",
            Self::White => "White",
        }
    }
}

impl fmt::Display for LightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a category name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown light category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for LightCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        std::iter::once(Self::None)
            .chain(Self::ALL)
            .find(|category| category.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
