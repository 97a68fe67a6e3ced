//! Effect shader flag bits relevant to palette matching

use bitflags::bitflags;

bitflags! {
    /// Effect shader behaviour flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct ShaderFlags: u32 {
        /// Membrane shader disabled
        const NO_MEMBRANE_SHADER = 1 << 0;
        /// Membrane greyscale texture is tinted through the membrane palette
        const GREYSCALE_TO_COLOR = 1 << 1;
        /// Membrane greyscale texture drives alpha
        const GREYSCALE_TO_ALPHA = 1 << 2;
        /// Particle shader disabled
        const NO_PARTICLE_SHADER = 1 << 3;
        /// Particle greyscale texture is tinted through the particle palette
        const PARTICLE_GREYSCALE_TO_COLOR = 1 << 12;
        /// Particle greyscale texture drives alpha
        const PARTICLE_GREYSCALE_TO_ALPHA = 1 << 13;
    }
}
