//! # Field Physics
//!
//! Plain data for the particle background: particles, colors, the constants that
//! shape the field, and the distance falloff used to link nearby particles.

pub mod color;
pub mod constants;
pub mod link;
pub mod particle;

pub use color::*;
pub use constants::*;
pub use link::*;
pub use particle::*;
