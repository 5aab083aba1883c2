//! Particle type for the background field

use glam::Vec2;

/// A drifting point on the surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position in surface pixels
    pub position: Vec2,
    /// Displacement applied every frame
    pub velocity: Vec2,
    /// Dot radius, fixed for the particle's lifetime
    pub radius: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Advance one frame inside a `bounds.x` × `bounds.y` surface.
    ///
    /// The step is taken with the current velocity; a component is negated when
    /// the new position lies outside `[0, bound]`, so the bounce shows up on the
    /// following frame. Positions are never clamped.
    pub fn update(&mut self, bounds: Vec2) {
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Whether the particle lies inside the surface grown by `margin` on every side
    pub fn within(&self, bounds: Vec2, margin: f32) -> bool {
        self.position.x >= -margin
            && self.position.y >= -margin
            && self.position.x <= bounds.x + margin
            && self.position.y <= bounds.y + margin
    }

    /// Euclidean distance between two particle centers
    #[inline]
    pub fn distance(&self, other: &Particle) -> f32 {
        self.position.distance(other.position)
    }
}
