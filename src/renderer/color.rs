//! Colors and the fireworks palette

use std::fmt;

/// sRGB color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color at `alpha` (clamped to 0-1)
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` string for canvas fill/stroke styles
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

/// Burst colors, indexed by `Particle::color`
pub const PINK_PALETTE: [Rgba; 5] = [
    Rgba::rgb(255, 92, 168),
    Rgba::rgb(255, 168, 214),
    Rgba::rgb(236, 52, 140),
    Rgba::rgb(255, 130, 196),
    Rgba::rgb(244, 80, 150),
];

/// Rocket head and burst ring
pub const ROCKET_COLOR: Rgba = Rgba::rgb(255, 168, 214);
/// Inner flash of the burst ring
pub const FLASH_COLOR: Rgba = Rgba::rgb(255, 214, 236);
/// Trail-fade overlay
pub const BACKDROP: Rgba = Rgba::rgb(0, 0, 0);

/// Palette lookup that wraps out-of-range indices
pub fn palette(index: u32) -> Rgba {
    PINK_PALETTE[index as usize % PINK_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_format() {
        assert_eq!(Rgba::rgb(255, 0, 10).with_alpha(0.5).css(), "rgba(255, 0, 10, 0.500)");
        assert_eq!(BACKDROP.with_alpha(2.0).a, 1.0);
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette(0), palette(5));
        assert_eq!(PINK_PALETTE.len() as u32, crate::sim::fireworks::PALETTE_SIZE);
    }
}
