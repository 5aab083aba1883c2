//! CPU particle field with proximity links

use crate::canvas::Canvas2d;
use crate::FieldParams;
use field_physics::Particle;
use glam::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Pixel dimensions of the drawing surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// What one frame drew
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
}

/// A field of drifting particles sized to a surface.
///
/// The population is reseeded from scratch whenever the surface changes size;
/// particles are never added or removed individually.
pub struct ParticleField<R = StdRng> {
    params: FieldParams,
    surface: Surface,
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleField<StdRng> {
    /// Create a field seeded from OS randomness
    pub fn new(params: FieldParams, width: u32, height: u32) -> Self {
        Self::with_rng(params, width, height, StdRng::from_os_rng())
    }
}

impl<R: Rng> ParticleField<R> {
    /// Create a field drawing from `rng`, already populated for `width` × `height`
    pub fn with_rng(params: FieldParams, width: u32, height: u32, rng: R) -> Self {
        let mut field = Self {
            params,
            surface: Surface::new(width, height),
            particles: Vec::with_capacity(params.max_particles),
            rng,
        };
        field.initialize();
        field
    }

    /// Adopt new surface dimensions and reseed the population for them
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!(
            "resizing field {}x{} -> {}x{}",
            self.surface.width,
            self.surface.height,
            width,
            height
        );
        self.surface = Surface::new(width, height);
        self.initialize();
    }

    /// Discard all particles and spawn a fresh batch for the current surface
    pub fn initialize(&mut self) {
        let count = self.params.particle_count(self.surface.width);

        self.particles.clear();
        for _ in 0..count {
            let particle = self.spawn();
            self.particles.push(particle);
        }

        log::debug!(
            "seeded {} particles on {}x{}",
            count,
            self.surface.width,
            self.surface.height
        );
    }

    fn spawn(&mut self) -> Particle {
        let bounds = self.surface.size();
        let speed = self.params.max_speed;
        let radius_span = self.params.max_radius - self.params.min_radius;

        // `random::<f32>()` is in [0, 1), so every range is half-open and an
        // empty surface collapses to the origin instead of panicking
        let position = Vec2::new(
            self.rng.random::<f32>() * bounds.x,
            self.rng.random::<f32>() * bounds.y,
        );
        let velocity = Vec2::new(
            (self.rng.random::<f32>() - 0.5) * 2.0 * speed,
            (self.rng.random::<f32>() - 0.5) * 2.0 * speed,
        );
        let radius = self.params.min_radius + self.rng.random::<f32>() * radius_span;

        Particle::new(position, velocity, radius)
    }

    /// Advance every particle one frame and draw the result.
    ///
    /// Particles are processed in order: each is moved, drawn, then linked to
    /// every later particle within the link distance. Later particles have not
    /// moved yet this frame when they are linked, matching the draw order.
    pub fn tick<C: Canvas2d + ?Sized>(&mut self, canvas: &mut C) -> FrameStats {
        let bounds = self.surface.size();
        let falloff = self.params.falloff();
        let mut links = 0;

        canvas.clear_rect(0.0, 0.0, bounds.x, bounds.y);
        canvas.set_fill_color(self.params.particle_color);
        canvas.set_line_width(self.params.line_width);

        for i in 0..self.particles.len() {
            self.particles[i].update(bounds);
            let p = self.particles[i];

            canvas.fill_circle(p.position, p.radius);

            for q in &self.particles[i + 1..] {
                if let Some(opacity) = falloff.opacity(p.distance(q)) {
                    canvas.set_stroke_color(self.params.link_color.with_alpha(opacity));
                    canvas.stroke_line(p.position, q.position);
                    links += 1;
                }
            }
        }

        FrameStats {
            particles: self.particles.len(),
            links,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};
    use field_physics::{ACCENT, PARTICLE_FILL};

    fn seeded(width: u32, height: u32) -> ParticleField {
        ParticleField::with_rng(
            FieldParams::default(),
            width,
            height,
            StdRng::seed_from_u64(42),
        )
    }

    fn still(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0)
    }

    #[test]
    fn test_population_follows_width() {
        assert_eq!(seeded(2000, 10).len(), 100);
        assert_eq!(seeded(1000, 700).len(), 100);
        assert_eq!(seeded(500, 500).len(), 50);
        assert_eq!(seeded(300, 900).len(), 30);
        assert!(seeded(1, 1).is_empty());
        assert!(seeded(0, 0).is_empty());
    }

    #[test]
    fn test_spawn_ranges() {
        let field = seeded(1920, 1080);

        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 1920.0);
            assert!(p.position.y >= 0.0 && p.position.y < 1080.0);
            assert!(p.velocity.x >= -0.25 && p.velocity.x < 0.25);
            assert!(p.velocity.y >= -0.25 && p.velocity.y < 0.25);
            assert!(p.radius >= 1.0 && p.radius < 3.0);
        }
    }

    #[test]
    fn test_spawn_is_not_degenerate() {
        let field = seeded(1920, 1080);
        let first = field.particles()[0];

        assert!(field.particles().iter().any(|p| p.position != first.position));
        assert!(field.particles().iter().any(|p| p.radius != first.radius));
    }

    #[test]
    fn test_reflection_on_tick() {
        let mut field = seeded(400, 300);
        field.particles = vec![Particle::new(Vec2::new(0.0, 150.0), Vec2::new(-0.3, 0.0), 1.0)];

        field.tick(&mut RecordingCanvas::new(400, 300));

        let p = field.particles()[0];
        assert!((p.velocity.x - 0.3).abs() < 1e-6);
        assert!((p.position.x + 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_stays_near_bounds() {
        let mut field = seeded(640, 480);
        let mut canvas = RecordingCanvas::new(640, 480);
        let epsilon = 0.25 * std::f32::consts::SQRT_2 + 1e-3;
        let bounds = field.surface().size();

        for _ in 0..2000 {
            field.tick(&mut canvas);
            assert!(field.particles().iter().all(|p| p.within(bounds, epsilon)));
        }
    }

    #[test]
    fn test_resize_reseeds_inside_new_surface() {
        let mut field = seeded(1920, 1080);
        field.resize(320, 200);

        assert_eq!(field.surface(), Surface::new(320, 200));
        assert_eq!(field.len(), 32);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 320.0);
            assert!(p.position.y >= 0.0 && p.position.y < 200.0);
        }
    }

    #[test]
    fn test_initialize_replaces_population() {
        let mut field = seeded(800, 600);
        let before = field.particles().to_vec();
        field.initialize();

        assert_eq!(field.len(), before.len());
        assert_ne!(field.particles(), before.as_slice());
    }

    #[test]
    fn test_tick_draw_order() {
        let mut field = seeded(400, 400);
        field.particles = vec![still(10.0, 10.0), still(60.0, 10.0), still(300.0, 300.0)];
        let mut canvas = RecordingCanvas::new(400, 400);

        let stats = field.tick(&mut canvas);
        assert_eq!(
            stats,
            FrameStats {
                particles: 3,
                links: 1
            }
        );

        let commands = canvas.commands();
        assert!(matches!(commands[0], DrawCommand::Clear { size, .. } if size == Vec2::new(400.0, 400.0)));
        assert!(matches!(commands[1], DrawCommand::Circle { center, .. } if center == Vec2::new(10.0, 10.0)));
        match commands[2] {
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => {
                assert_eq!(from, Vec2::new(10.0, 10.0));
                assert_eq!(to, Vec2::new(60.0, 10.0));
                assert!((color.a - 0.05).abs() < 1e-6);
                assert_eq!(color.with_alpha(1.0), ACCENT);
                assert_eq!(width, 1.0);
            }
            other => panic!("expected a link, got {:?}", other),
        }
        assert!(matches!(commands[3], DrawCommand::Circle { center, .. } if center == Vec2::new(60.0, 10.0)));
        assert!(matches!(commands[4], DrawCommand::Circle { center, .. } if center == Vec2::new(300.0, 300.0)));
        assert_eq!(commands.len(), 5);
    }

    #[test]
    fn test_coincident_particles_link_at_full_opacity() {
        let mut field = seeded(400, 400);
        field.particles = vec![still(50.0, 50.0), still(50.0, 50.0)];
        let mut canvas = RecordingCanvas::new(400, 400);
        field.tick(&mut canvas);

        let line = canvas.lines().next().copied();
        assert!(matches!(line, Some(DrawCommand::Line { color, .. }) if color.a == 0.1));
    }

    #[test]
    fn test_no_link_at_threshold() {
        let mut field = seeded(400, 400);
        field.particles = vec![still(0.0, 0.0), still(100.0, 0.0), still(0.0, 150.0)];
        let mut canvas = RecordingCanvas::new(400, 400);

        let stats = field.tick(&mut canvas);
        assert_eq!(stats.links, 0);
        assert_eq!(canvas.lines().count(), 0);
    }

    #[test]
    fn test_later_particle_linked_before_it_moves() {
        let mut field = seeded(400, 400);
        field.particles = vec![
            Particle::new(Vec2::new(10.0, 10.0), Vec2::new(0.25, 0.0), 1.0),
            Particle::new(Vec2::new(20.0, 10.0), Vec2::new(0.0, 0.25), 1.0),
        ];
        let mut canvas = RecordingCanvas::new(400, 400);
        field.tick(&mut canvas);

        let line = canvas.lines().next().copied();
        assert!(matches!(
            line,
            Some(DrawCommand::Line { from, to, .. })
                if from == Vec2::new(10.25, 10.0) && to == Vec2::new(20.0, 10.0)
        ));
        assert_eq!(field.particles()[1].position, Vec2::new(20.0, 10.25));
    }

    #[test]
    fn test_circles_use_particle_fill() {
        let mut field = seeded(500, 500);
        let mut canvas = RecordingCanvas::new(500, 500);
        field.tick(&mut canvas);

        assert_eq!(canvas.circles().count(), 50);
        assert!(canvas
            .circles()
            .all(|c| matches!(c, DrawCommand::Circle { color, .. } if *color == PARTICLE_FILL)));
    }

    #[test]
    fn test_link_count_is_bounded_at_cap() {
        // Every particle inside a 50px square links with every other
        let params = FieldParams::default();
        let mut field = ParticleField::with_rng(params, 1000, 50, StdRng::seed_from_u64(7));
        field.particles.iter_mut().for_each(|p| {
            p.position.x = p.position.x % 50.0;
            p.velocity = Vec2::ZERO;
        });

        let stats = field.tick(&mut RecordingCanvas::new(1000, 50));
        assert_eq!(stats.particles, 100);
        assert_eq!(stats.links, field_physics::pair_checks(100));
    }

    #[test]
    fn test_empty_field_still_clears() {
        let mut field = seeded(5, 5);
        let mut canvas = RecordingCanvas::new(5, 5);
        canvas.fill_circle(Vec2::ONE, 1.0);

        let stats = field.tick(&mut canvas);
        assert_eq!(stats, FrameStats::default());
        assert_eq!(canvas.commands().len(), 1);
    }
}
