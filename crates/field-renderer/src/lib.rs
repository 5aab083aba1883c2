//! # Field Renderer
//!
//! wgpu backend for the particle background's 2D canvas.

pub mod batch;
pub mod renderer;

pub use batch::*;
pub use renderer::*;
