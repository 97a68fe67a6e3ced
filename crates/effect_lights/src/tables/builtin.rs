//! Built-in reference data, used whenever a config file leaves a table out

use super::{CategoryTable, ColorEntry, ModelPathEntry, TableEntry};
use crate::foundation::Color;
use crate::lights::LightCategory::{self, *};

type TextureRow = (LightCategory, &'static [&'static str]);

pub(crate) const BLACKLIST: &[&str] = &[
    "fxsmoke",
    "fxdust",
    "fxfog",
    "fxmist",
    "fxash",
    "fxshadow",
    "fxwaterdrip",
];

// Red must stay ahead of Orange: "gradfirered" contains "gradfire".
pub(crate) const PALETTES: &[TextureRow] = &[
    (Red, &["gradfirered", "gradblood", "gradred"]),
    (Orange, &["gradfire", "gradember", "gradlava"]),
    (Yellow, &["gradspark", "gradsun", "gradgold"]),
    (Green, &["gradpoison", "gradacid", "gradgreen"]),
    (Cyan, &["gradfrost", "gradice", "gradcyan"]),
    (Blue, &["gradshock", "gradlightning", "gradblue"]),
    (Purple, &["gradconj", "graddaedric", "gradsoul", "gradpurple"]),
    (Magenta, &["gradillusion", "gradpink", "gradmagenta"]),
    (White, &["gradrestoration", "gradholy", "gradwhite"]),
];

pub(crate) const PARTICLE_SHADERS: &[TextureRow] = &[
    (Red, &["fxbloodparticle", "fxemberred"]),
    (Orange, &["fxfire", "fxflame", "fxember"]),
    (Yellow, &["fxspark", "fxsunlight"]),
    (Green, &["fxpoison", "fxspore"]),
    (Cyan, &["fxfrost", "fxsnowflake", "fxice"]),
    (Blue, &["fxshock", "fxlightning", "fxelectric"]),
    (Purple, &["fxconjure", "fxsoultrap"]),
    (Magenta, &["fxillusion"]),
    (White, &["fxrestoration", "fxholy", "fxwisp"]),
];

pub(crate) const MEMBRANE_SHADERS: &[TextureRow] = &[
    (Orange, &["fxfiremembrane", "fxlavaskin"]),
    (Cyan, &["fxfrostmembrane", "fxiceskin"]),
    (Blue, &["fxshockmembrane"]),
    (Purple, &["fxetherealmembrane", "fxdaedricmembrane"]),
    (White, &["fxholymembrane"]),
];

pub(crate) const COLORS: &[(LightCategory, &[Color])] = &[
    (Red, &[Color::new(255, 0, 0), Color::new(200, 30, 30)]),
    (Orange, &[Color::new(255, 128, 0), Color::new(255, 100, 20)]),
    (Yellow, &[Color::new(255, 230, 0), Color::new(255, 255, 120)]),
    (Green, &[Color::new(0, 255, 0), Color::new(80, 200, 60)]),
    (Cyan, &[Color::new(0, 255, 255), Color::new(150, 220, 255)]),
    (Blue, &[Color::new(0, 0, 255), Color::new(60, 120, 255)]),
    (Purple, &[Color::new(128, 0, 255), Color::new(100, 40, 160)]),
    (Magenta, &[Color::new(255, 0, 255), Color::new(255, 100, 200)]),
    (White, &[Color::new(255, 255, 255), Color::new(220, 220, 220)]),
];

pub(crate) fn category_table(rows: &[TextureRow]) -> CategoryTable {
    CategoryTable::new(
        rows.iter()
            .map(|(light, textures)| TableEntry::new(*light, textures.iter().copied()))
            .collect(),
    )
}

pub(crate) fn color_entries() -> Vec<ColorEntry> {
    COLORS
        .iter()
        .map(|(light, colors)| ColorEntry {
            light: *light,
            colors: colors.to_vec(),
        })
        .collect()
}

pub(crate) fn model_entries() -> Vec<ModelPathEntry> {
    LightCategory::ALL
        .iter()
        .map(|light| ModelPathEntry {
            light: *light,
            path: format!("Effects\\EffectLights\\{}Light.nif", light),
        })
        .collect()
}
