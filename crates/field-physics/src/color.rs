//! Colors for particle and link rendering

use bytemuck::{Pod, Zeroable};

use crate::constants::{ACCENT_SRGB, PARTICLE_OPACITY};

/// RGBA color in linear space with values in [0, 1]
///
/// `repr(C)` so it can be copied straight into GPU vertex data.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert an 8-bit sRGB color to linear space
    #[inline]
    pub const fn from_srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Polynomial fit of ((x + 0.055) / 1.055)^2.4, usable in const context
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::new(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::transparent()
    }
}

/// The accent blue, fully opaque
pub const ACCENT: Color = Color::from_srgba(ACCENT_SRGB[0], ACCENT_SRGB[1], ACCENT_SRGB[2], 255);

/// Default particle fill
pub const PARTICLE_FILL: Color = Color::new(ACCENT.r, ACCENT.g, ACCENT.b, PARTICLE_OPACITY);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_srgba_endpoints() {
        let black = Color::from_srgba(0, 0, 0, 255);
        let white = Color::from_srgba(255, 255, 255, 0);

        assert_eq!(black, Color::rgb(0.0, 0.0, 0.0));
        assert!((white.r - 1.0).abs() < 1e-3);
        assert_eq!(white.a, 0.0);
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let faded = ACCENT.with_alpha(0.05);

        assert_eq!(faded.r, ACCENT.r);
        assert_eq!(faded.g, ACCENT.g);
        assert_eq!(faded.b, ACCENT.b);
        assert_eq!(faded.a, 0.05);
    }

    #[test]
    fn test_particle_fill_is_translucent_accent() {
        assert_eq!(PARTICLE_FILL.a, PARTICLE_OPACITY);
        assert_eq!(PARTICLE_FILL.with_alpha(1.0), ACCENT);
        // Blue channel dominates the accent
        assert!(ACCENT.b > ACCENT.g && ACCENT.g > ACCENT.r);
    }
}
