//! Field parameters for runtime tuning

use field_physics::{
    Color, LinkFalloff, ACCENT, LINK_DISTANCE, LINK_LINE_WIDTH, MAX_LINK_OPACITY, MAX_PARTICLES,
    MAX_RADIUS, MAX_SPEED, MIN_RADIUS, PARTICLE_DENSITY, PARTICLE_FILL,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    // Population
    /// Particles per pixel of surface width
    pub density: f32,
    /// Upper bound on the population regardless of width
    pub max_particles: usize,

    // Spawn ranges
    /// Velocity components are drawn from [-max_speed, max_speed)
    pub max_speed: f32,
    /// Radii are drawn from [min_radius, max_radius)
    pub min_radius: f32,
    pub max_radius: f32,

    // Links
    pub link_distance: f32,
    pub max_link_opacity: f32,
    pub line_width: f32,

    // Colors
    pub particle_color: Color,
    /// Alpha is replaced per link by the falloff opacity
    pub link_color: Color,
}

impl FieldParams {
    /// Population for a surface `width` pixels wide, truncated toward zero
    pub fn particle_count(&self, width: u32) -> usize {
        // `as` saturates, so a negative density yields an empty field
        let count = (width as f32 * self.density) as usize;
        count.min(self.max_particles)
    }

    pub fn falloff(&self) -> LinkFalloff {
        LinkFalloff::new(self.link_distance, self.max_link_opacity)
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            density: PARTICLE_DENSITY, // 0.1
            max_particles: MAX_PARTICLES, // 100
            max_speed: MAX_SPEED, // 0.25
            min_radius: MIN_RADIUS, // 1.0
            max_radius: MAX_RADIUS, // 3.0
            link_distance: LINK_DISTANCE, // 100.0
            max_link_opacity: MAX_LINK_OPACITY, // 0.1
            line_width: LINK_LINE_WIDTH, // 1.0
            particle_color: PARTICLE_FILL, // accent @ 0.3
            link_color: ACCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_scales_with_width() {
        let params = FieldParams::default();

        assert_eq!(params.particle_count(300), 30);
        assert_eq!(params.particle_count(500), 50);
        assert_eq!(params.particle_count(505), 50);
    }

    #[test]
    fn test_count_is_capped() {
        let params = FieldParams::default();

        assert_eq!(params.particle_count(1000), 100);
        assert_eq!(params.particle_count(2000), 100);
        assert_eq!(params.particle_count(u32::MAX), 100);
    }

    #[test]
    fn test_count_truncates_to_zero() {
        let params = FieldParams::default();

        assert_eq!(params.particle_count(0), 0);
        assert_eq!(params.particle_count(1), 0);
        assert_eq!(params.particle_count(9), 0);
        assert_eq!(params.particle_count(10), 1);
    }

    #[test]
    fn test_custom_cap() {
        let params = FieldParams {
            max_particles: 12,
            ..Default::default()
        };

        assert_eq!(params.particle_count(1000), 12);
        assert_eq!(params.particle_count(80), 8);
    }

    #[test]
    fn test_falloff_uses_params() {
        let params = FieldParams {
            link_distance: 40.0,
            max_link_opacity: 0.4,
            ..Default::default()
        };

        assert_eq!(params.falloff().opacity(0.0), Some(0.4));
        assert_eq!(params.falloff().opacity(40.0), None);
    }
}
