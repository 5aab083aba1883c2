//! Constants for the particle field
//!
//! Units are surface pixels and frames. Velocities are applied once per frame,
//! not scaled by wall-clock time.

/// Particles spawned per pixel of surface width
pub const PARTICLE_DENSITY: f32 = 0.1;

/// Hard ceiling on the particle count.
/// Linking is O(n²) per frame, so this bounds a frame at 4950 pair checks.
pub const MAX_PARTICLES: usize = 100;

/// Largest velocity component magnitude (units/frame)
pub const MAX_SPEED: f32 = 0.25;

/// Particle radius range, lower bound inclusive
pub const MIN_RADIUS: f32 = 1.0;
pub const MAX_RADIUS: f32 = 3.0;

/// Particles closer than this are joined by a line
pub const LINK_DISTANCE: f32 = 100.0;

/// Line opacity at zero distance; falls off linearly to zero at `LINK_DISTANCE`
pub const MAX_LINK_OPACITY: f32 = 0.1;

/// Stroke width of link lines
pub const LINK_LINE_WIDTH: f32 = 1.0;

/// Fill opacity of particle dots
pub const PARTICLE_OPACITY: f32 = 0.3;

/// Accent color (sRGB 8-bit) shared by dots and links
pub const ACCENT_SRGB: [u8; 3] = [88, 166, 255];
