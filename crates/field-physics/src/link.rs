//! Proximity links between particles

use crate::constants::{LINK_DISTANCE, MAX_LINK_OPACITY};

/// Linear opacity falloff for lines joining nearby particles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkFalloff {
    /// Pairs at or beyond this distance are not linked
    pub distance: f32,
    /// Opacity of a zero-length link
    pub max_opacity: f32,
}

impl LinkFalloff {
    pub const fn new(distance: f32, max_opacity: f32) -> Self {
        Self {
            distance,
            max_opacity,
        }
    }

    /// Line opacity for two particles `distance` apart, or `None` when they are
    /// too far apart to be linked.
    #[inline]
    pub fn opacity(&self, distance: f32) -> Option<f32> {
        if distance < self.distance {
            Some(self.max_opacity * (1.0 - distance / self.distance))
        } else {
            None
        }
    }
}

impl Default for LinkFalloff {
    fn default() -> Self {
        Self::new(LINK_DISTANCE, MAX_LINK_OPACITY)
    }
}

/// Number of unordered pairs checked per frame for `count` particles
pub const fn pair_checks(count: usize) -> usize {
    if count < 2 {
        0
    } else {
        count * (count - 1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_PARTICLES;

    #[test]
    fn test_opacity_at_zero_distance() {
        assert_eq!(LinkFalloff::default().opacity(0.0), Some(0.1));
    }

    #[test]
    fn test_opacity_halfway() {
        let opacity = LinkFalloff::default().opacity(50.0).unwrap();
        assert!((opacity - 0.05).abs() < 1e-7);
    }

    #[test]
    fn test_no_link_at_or_beyond_threshold() {
        let falloff = LinkFalloff::default();

        assert_eq!(falloff.opacity(100.0), None);
        assert_eq!(falloff.opacity(100.5), None);
        assert_eq!(falloff.opacity(f32::INFINITY), None);
    }

    #[test]
    fn test_opacity_decreases_with_distance() {
        let falloff = LinkFalloff::default();
        let near = falloff.opacity(10.0).unwrap();
        let far = falloff.opacity(90.0).unwrap();

        assert!(near > far);
        assert!(far > 0.0);
        assert!(falloff.opacity(99.999).unwrap() > 0.0);
    }

    #[test]
    fn test_pair_checks_at_cap() {
        assert_eq!(pair_checks(0), 0);
        assert_eq!(pair_checks(1), 0);
        assert_eq!(pair_checks(2), 1);
        assert_eq!(pair_checks(MAX_PARTICLES), 4950);
    }
}
