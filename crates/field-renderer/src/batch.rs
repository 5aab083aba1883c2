//! CPU tessellation of canvas draw calls
//!
//! Every shape becomes two triangles. Draw order is preserved so alpha blending
//! composites exactly like an immediate-mode 2D context.

use bytemuck::{Pod, Zeroable};
use field_physics::Color;
use field_simulation::Canvas2d;
use glam::Vec2;

/// Vertex fed to `canvas.wgsl`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Surface pixels
    pub position: [f32; 2],
    /// Offset from a circle's center in radii, zero for solid shapes
    pub local: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2, 2 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Retained list of shapes drawn since the last full clear
#[derive(Debug, Clone)]
pub struct ShapeBatch {
    width: u32,
    height: u32,
    background: Color,
    fill: Color,
    stroke: Color,
    line_width: f32,
    vertices: Vec<Vertex>,
}

impl ShapeBatch {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            fill: Color::rgb(0.0, 0.0, 0.0),
            stroke: Color::rgb(0.0, 0.0, 0.0),
            line_width: 1.0,
            vertices: Vec::new(),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Corners in the order top-left, top-right, bottom-left, bottom-right
    fn push_quad(&mut self, corners: [Vec2; 4], locals: [Vec2; 4], color: Color) {
        let color = color.to_array();
        for i in [0, 1, 2, 2, 1, 3] {
            self.vertices.push(Vertex {
                position: corners[i].to_array(),
                local: locals[i].to_array(),
                color,
            });
        }
    }

    fn covers_surface(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        x <= 0.0 && y <= 0.0 && x + width >= self.width as f32 && y + height >= self.height as f32
    }
}

impl Canvas2d for ShapeBatch {
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.vertices.clear();
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if self.covers_surface(x, y, width, height) {
            // The render pass clears to the background anyway
            self.vertices.clear();
            return;
        }

        let min = Vec2::new(x, y);
        let max = min + Vec2::new(width, height);
        self.push_quad(
            [min, Vec2::new(max.x, min.y), Vec2::new(min.x, max.y), max],
            [Vec2::ZERO; 4],
            self.background.with_alpha(1.0),
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        if radius <= 0.0 {
            return;
        }

        let r = Vec2::splat(radius);
        let min = center - r;
        let max = center + r;
        self.push_quad(
            [min, Vec2::new(max.x, min.y), Vec2::new(min.x, max.y), max],
            [
                Vec2::new(-1.0, -1.0),
                Vec2::new(1.0, -1.0),
                Vec2::new(-1.0, 1.0),
                Vec2::new(1.0, 1.0),
            ],
            self.fill,
        );
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        let dir = (to - from).normalize_or_zero();
        if dir == Vec2::ZERO || self.line_width <= 0.0 {
            return;
        }

        let offset = dir.perp() * (self.line_width * 0.5);
        self.push_quad(
            [from + offset, to + offset, from - offset, to - offset],
            [Vec2::ZERO; 4],
            self.stroke,
        );
    }
}
