//! # Particle Field Simulation
//!
//! CPU simulation of the drifting, proximity-linked particle background, plus the
//! frame-loop task that drives it against a host render target and scheduler.

pub mod background;
pub mod canvas;
pub mod params;
pub mod simulation;

pub use background::*;
pub use canvas::*;
pub use params::*;
pub use simulation::*;
