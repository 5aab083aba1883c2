//! Render target abstraction
//!
//! The field draws through [`Canvas2d`], a small subset of an immediate-mode 2D
//! context: stateful fill/stroke colors and line width, rectangle clears, filled
//! circles and straight lines. Coordinates are surface pixels with the origin in
//! the top-left corner.

use field_physics::Color;
use glam::Vec2;

/// A 2D drawing surface the particle field renders into
pub trait Canvas2d {
    /// Resize the backing surface. Implementations may discard existing content.
    fn set_size(&mut self, width: u32, height: u32);

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    /// Reset a rectangle to the background
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fill a circle with the current fill color
    fn fill_circle(&mut self, center: Vec2, radius: f32);

    /// Stroke a segment with the current stroke color and line width
    fn stroke_line(&mut self, from: Vec2, to: Vec2);
}

/// A draw call with the context state it was issued under
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        origin: Vec2,
        size: Vec2,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
}

/// Canvas that keeps its draw calls instead of rasterizing them.
///
/// A clear covering the whole surface drops everything recorded before it, so
/// after a frame the recorder holds exactly what is visible.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    fill: Color,
    stroke: Color,
    line_width: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fill: Color::rgb(0.0, 0.0, 0.0),
            stroke: Color::rgb(0.0, 0.0, 0.0),
            line_width: 1.0,
            commands: Vec::new(),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    fn covers_surface(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        x <= 0.0 && y <= 0.0 && x + width >= self.width as f32 && y + height >= self.height as f32
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Canvas2d for RecordingCanvas {
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
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
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Clear {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: self.fill,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: self.stroke,
            width: self.line_width,
        });
    }
}
