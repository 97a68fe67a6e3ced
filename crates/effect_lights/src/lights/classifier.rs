//! Effect shader light classification
//!
//! Stages run in a fixed order and the first one that produces a category
//! wins:
//!
//! 1. Blacklisted particle/fill texture → `None`, nothing else is consulted
//! 2. Particle palette (needs `PARTICLE_GREYSCALE_TO_COLOR`)
//! 3. Particle shader texture
//! 4. Membrane fill texture, edge color overrides the table category
//! 5. Membrane palette (needs `GREYSCALE_TO_COLOR`), edge color overrides
//! 6. Key color vote
//! 7. Edge color
//! 8. `None`

use super::LightCategory;
use crate::shader::{ShaderDescriptor, ShaderFlags};
use crate::tables::{ColorTable, TextureTables};

/// Pure classifier over immutable reference tables
#[derive(Debug, Clone, Default)]
pub struct LightClassifier {
    textures: TextureTables,
    colors: ColorTable,
}

impl LightClassifier {
    /// Create a classifier from its reference tables
    pub fn new(textures: TextureTables, colors: ColorTable) -> Self {
        Self { textures, colors }
    }

    /// Texture tables in use
    pub fn textures(&self) -> &TextureTables {
        &self.textures
    }

    /// Color table in use
    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    /// Classify an effect shader. Never fails; undecidable shaders are `None`.
    pub fn classify(&self, shader: &ShaderDescriptor) -> LightCategory {
        let paths = &shader.textures;

        if self.textures.is_blacklisted(&paths.particle_shader)
            || self.textures.is_blacklisted(&paths.membrane_fill)
        {
            log::trace!("{}: blacklisted texture", shader.form);
            return LightCategory::None;
        }

        if shader.flags.contains(ShaderFlags::PARTICLE_GREYSCALE_TO_COLOR) {
            if let Some(light) = self.textures.palette.find(&paths.particle_palette) {
                log::trace!("{}: particle palette -> {}", shader.form, light);
                return light;
            }
        }

        if let Some(light) = self.textures.particle_shader.find(&paths.particle_shader) {
            log::trace!("{}: particle shader -> {}", shader.form, light);
            return light;
        }

        if let Some(light) = self.textures.membrane_shader.find(&paths.membrane_fill) {
            log::trace!("{}: membrane shader -> {}", shader.form, light);
            return self.edge_or(shader, light);
        }

        if shader.flags.contains(ShaderFlags::GREYSCALE_TO_COLOR) {
            if let Some(light) = self.textures.palette.find(&paths.membrane_palette) {
                log::trace!("{}: membrane palette -> {}", shader.form, light);
                return self.edge_or(shader, light);
            }
        }

        let key = &shader.colors.key;
        if !self.colors.is_invalid_set(key) {
            let light = vote_by_key_colors(self.colors.resolve_all(key));
            log::trace!("{}: key colors -> {}", shader.form, light);
            return light;
        }

        let edge = shader.colors.edge;
        if !self.colors.is_invalid(edge) {
            let (light, _) = self.colors.resolve(edge);
            log::trace!("{}: edge color -> {}", shader.form, light);
            return light;
        }

        LightCategory::None
    }

    /// A usable edge color takes precedence over a texture-derived category
    fn edge_or(&self, shader: &ShaderDescriptor, light: LightCategory) -> LightCategory {
        let edge = shader.colors.edge;
        if self.colors.is_invalid(edge) {
            light
        } else {
            self.colors.resolve(edge).0
        }
    }
}

/// Pick a category from three resolved key colors
///
/// Three different categories: the nearest color wins, earliest on a tie.
/// Otherwise the most frequent category wins.
pub fn vote_by_key_colors(resolved: [(LightCategory, f32); 3]) -> LightCategory {
    let [a, b, c] = resolved.map(|(light, _)| light);

    if a != b && a != c && b != c {
        return resolved
            .iter()
            .min_by(|x, y| x.1.total_cmp(&y.1))
            .map_or(LightCategory::None, |(light, _)| *light);
    }

    let mut tally: Vec<(LightCategory, u32)> = Vec::with_capacity(resolved.len());
    for (light, _) in resolved {
        match tally.iter_mut().find(|(counted, _)| *counted == light) {
            Some((_, count)) => *count += 1,
            None => tally.push((light, 1)),
        }
    }

    tally
        .into_iter()
        .fold((LightCategory::None, 0), |best, (light, count)| {
            if count > best.1 {
                (light, count)
            } else {
                best
            }
        })
        .0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Color;
    use crate::shader::FormRecord;
    use crate::tables::{CategoryTable, ColorEntry, TableEntry};

    const RED: Color = Color::new(255, 0, 0);
    const GREEN: Color = Color::new(0, 255, 0);
    const BLUE: Color = Color::new(0, 0, 255);

    fn classifier() -> LightClassifier {
        let textures = TextureTables {
            blacklist: vec!["fxsmoke".to_string()],
            palette: CategoryTable::new(vec![
                TableEntry::new(LightCategory::Red, ["gradfirered"]),
                TableEntry::new(LightCategory::Orange, ["gradfire"]),
                TableEntry::new(LightCategory::Cyan, ["gradfrost"]),
            ]),
            particle_shader: CategoryTable::new(vec![
                TableEntry::new(LightCategory::Yellow, ["fxspark"]),
            ]),
            membrane_shader: CategoryTable::new(vec![
                TableEntry::new(LightCategory::Purple, ["fxethereal"]),
            ]),
        };
        let colors = ColorTable::new(vec![
            ColorEntry { light: LightCategory::Red, colors: vec![RED] },
            ColorEntry { light: LightCategory::Green, colors: vec![GREEN] },
            ColorEntry { light: LightCategory::Blue, colors: vec![BLUE] },
        ]);
        LightClassifier::new(textures, colors)
    }

    fn shader() -> ShaderDescriptor {
        ShaderDescriptor::new(FormRecord::from_file("TestFX", 0x0001_0000, "Test.esp"))
    }

    #[test]
    fn test_empty_shader_is_none() {
        assert_eq!(classifier().classify(&shader()), LightCategory::None);
    }

    #[test]
    fn test_blacklist_overrides_everything() {
        let shader = shader()
            .with_particle_shader("Effects\\FXSpark01.dds")
            .with_membrane_fill("Effects\\FXSmoke01.dds")
            .with_key_colors([RED, RED, RED])
            .with_edge_color(BLUE);
        assert_eq!(classifier().classify(&shader), LightCategory::None);

        let shader = self::shader()
            .with_particle_shader("Effects\\FXSmokeSpark.dds")
            .with_edge_color(BLUE);
        assert_eq!(classifier().classify(&shader), LightCategory::None);
    }

    #[test]
    fn test_palette_is_not_blacklisted() {
        let shader = shader()
            .with_particle_palette("Effects\\FXSmokePalette.dds")
            .with_edge_color(RED);
        assert_eq!(classifier().classify(&shader), LightCategory::Red);
    }

    #[test]
    fn test_particle_palette_requires_flag() {
        let without_flag = shader().with_particle_palette("Effects\\Gradients\\GradFrost.dds");
        assert_eq!(classifier().classify(&without_flag), LightCategory::None);

        let with_flag = without_flag.with_flags(ShaderFlags::PARTICLE_GREYSCALE_TO_COLOR);
        assert_eq!(classifier().classify(&with_flag), LightCategory::Cyan);
    }

    #[test]
    fn test_particle_palette_first_entry_wins() {
        let shader = shader()
            .with_particle_palette("Effects\\Gradients\\GradFireRed.dds")
            .with_flags(ShaderFlags::PARTICLE_GREYSCALE_TO_COLOR);
        assert_eq!(classifier().classify(&shader), LightCategory::Red);
    }

    #[test]
    fn test_particle_palette_beats_particle_shader() {
        let shader = shader()
            .with_particle_palette("gradfrost.dds")
            .with_particle_shader("fxspark.dds")
            .with_flags(ShaderFlags::PARTICLE_GREYSCALE_TO_COLOR);
        assert_eq!(classifier().classify(&shader), LightCategory::Cyan);
    }

    #[test]
    fn test_particle_shader_ignores_edge_color() {
        let shader = shader()
            .with_particle_shader("Effects\\FXSpark01.dds")
            .with_edge_color(BLUE);
        assert_eq!(classifier().classify(&shader), LightCategory::Yellow);
    }

    #[test]
    fn test_membrane_shader_uses_table_without_edge() {
        let shader = shader().with_membrane_fill("Effects\\FXEtherealMembrane.dds");
        assert_eq!(classifier().classify(&shader), LightCategory::Purple);
    }

    #[test]
    fn test_membrane_shader_edge_color_overrides() {
        let shader = shader()
            .with_membrane_fill("Effects\\FXEtherealMembrane.dds")
            .with_edge_color(Color::new(10, 240, 10));
        assert_eq!(classifier().classify(&shader), LightCategory::Green);
    }

    #[test]
    fn test_membrane_palette_requires_flag_and_edge_overrides() {
        let shader = shader().with_membrane_palette("gradfire.dds");
        assert_eq!(classifier().classify(&shader), LightCategory::None);

        let shader = shader.with_flags(ShaderFlags::GREYSCALE_TO_COLOR);
        assert_eq!(classifier().classify(&shader), LightCategory::Orange);

        let shader = shader.with_edge_color(BLUE);
        assert_eq!(classifier().classify(&shader), LightCategory::Blue);
    }

    #[test]
    fn test_particle_flag_does_not_enable_membrane_palette() {
        let shader = shader()
            .with_membrane_palette("gradfire.dds")
            .with_flags(ShaderFlags::PARTICLE_GREYSCALE_TO_COLOR);
        assert_eq!(classifier().classify(&shader), LightCategory::None);
    }

    #[test]
    fn test_key_colors_distinct_nearest_wins() {
        let shader = shader().with_key_colors([
            Color::new(200, 0, 0),
            Color::new(0, 250, 0),
            Color::new(0, 0, 100),
        ]);
        assert_eq!(classifier().classify(&shader), LightCategory::Green);

        let shader = self::shader().with_key_colors([
            Color::new(254, 0, 0),
            Color::new(0, 200, 0),
            Color::new(0, 0, 100),
        ]);
        assert_eq!(classifier().classify(&shader), LightCategory::Red);
    }

    #[test]
    fn test_key_colors_majority_wins() {
        let shader = shader().with_key_colors([BLUE, Color::new(150, 0, 0), Color::new(120, 0, 0)]);
        assert_eq!(classifier().classify(&shader), LightCategory::Red);
    }

    #[test]
    fn test_key_colors_beat_edge_color() {
        let shader = shader()
            .with_key_colors([GREEN, GREEN, GREEN])
            .with_edge_color(BLUE);
        assert_eq!(classifier().classify(&shader), LightCategory::Green);
    }

    #[test]
    fn test_unset_key_color_falls_back_to_edge() {
        let shader = shader()
            .with_key_colors([GREEN, Color::UNSET, GREEN])
            .with_edge_color(BLUE);
        assert_eq!(classifier().classify(&shader), LightCategory::Blue);
    }

    #[test]
    fn test_vote_distinct_by_distance() {
        let lights = [
            (LightCategory::Red, 30.0),
            (LightCategory::Green, 10.0),
            (LightCategory::Blue, 20.0),
        ];
        assert_eq!(vote_by_key_colors(lights), LightCategory::Green);

        let lights = [
            (LightCategory::Red, 30.0),
            (LightCategory::Green, 10.0),
            (LightCategory::Blue, 5.0),
        ];
        assert_eq!(vote_by_key_colors(lights), LightCategory::Blue);
    }

    #[test]
    fn test_vote_distance_tie_prefers_first() {
        let lights = [
            (LightCategory::Red, 10.0),
            (LightCategory::Green, 10.0),
            (LightCategory::Blue, 20.0),
        ];
        assert_eq!(vote_by_key_colors(lights), LightCategory::Red);
    }

    #[test]
    fn test_vote_majority_ignores_distance() {
        let lights = [
            (LightCategory::Red, 0.0),
            (LightCategory::Blue, 90.0),
            (LightCategory::Blue, 80.0),
        ];
        assert_eq!(vote_by_key_colors(lights), LightCategory::Blue);

        let lights = [
            (LightCategory::White, 1.0),
            (LightCategory::White, 2.0),
            (LightCategory::White, 3.0),
        ];
        assert_eq!(vote_by_key_colors(lights), LightCategory::White);
    }
}
