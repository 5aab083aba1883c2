//! Canvas rendering system

use crate::batch::{ShapeBatch, Vertex};
use bytemuck::{Pod, Zeroable};
use field_physics::Color;
use field_simulation::Canvas2d;
use glam::Vec2;

/// Vertices the buffer is created with; grows to the next power of two on demand
const INITIAL_VERTEX_CAPACITY: usize = 4096;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct ViewportUniform {
    size: [f32; 2],
    _padding: [f32; 2],
}

/// Catppuccin Mocha base, the color the surface is cleared to
pub fn background_color() -> Color {
    let rgb = catppuccin::PALETTE.mocha.colors.base.rgb;
    Color::from_srgba(rgb.r, rgb.g, rgb.b, 255)
}

/// GPU-backed [`Canvas2d`].
///
/// Draw calls are tessellated into a [`ShapeBatch`]; [`render`](Self::render)
/// uploads the batch and draws it over a cleared target in one pass.
pub struct CanvasRenderer {
    render_pipeline: wgpu::RenderPipeline,
    viewport_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    batch: ShapeBatch,
}

impl CanvasRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, width: u32, height: u32) -> Self {
        let viewport_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Canvas Viewport Buffer"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let vertex_buffer = Self::create_vertex_buffer(device, INITIAL_VERTEX_CAPACITY);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Canvas Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/canvas.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Canvas Bind Group Layout"),
            entries: &[
                // Viewport (Uniform) - Binding 0
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Canvas Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Canvas Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Canvas Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vertex"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fragment"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Quads are emitted in either winding depending on line direction
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            render_pipeline,
            viewport_buffer,
            bind_group,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            batch: ShapeBatch::new(width, height, background_color()),
        }
    }

    fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Canvas Vertex Buffer"),
            size: (capacity * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn reserve(&mut self, device: &wgpu::Device, vertices: usize) {
        if vertices <= self.vertex_capacity {
            return;
        }

        let capacity = vertices.next_power_of_two();
        log::debug!(
            "growing canvas vertex buffer {} -> {} vertices",
            self.vertex_capacity,
            capacity
        );
        self.vertex_buffer = Self::create_vertex_buffer(device, capacity);
        self.vertex_capacity = capacity;
    }

    pub fn batch(&self) -> &ShapeBatch {
        &self.batch
    }

    /// Draw everything recorded since the last full clear onto `view`
    pub fn render(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, view: &wgpu::TextureView) {
        let (width, height) = self.batch.size();
        queue.write_buffer(
            &self.viewport_buffer,
            0,
            bytemuck::cast_slice(&[ViewportUniform {
                size: [width.max(1) as f32, height.max(1) as f32],
                _padding: [0.0; 2],
            }]),
        );

        let vertex_count = self.batch.vertex_count();
        self.reserve(device, vertex_count as usize);
        if vertex_count > 0 {
            queue.write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(self.batch.vertices()),
            );
        }

        let background = self.batch.background();
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Canvas Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Canvas Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: background.r as f64,
                            g: background.g as f64,
                            b: background.b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if vertex_count > 0 {
                render_pass.set_pipeline(&self.render_pipeline);
                render_pass.set_bind_group(0, &self.bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.draw(0..vertex_count, 0..1);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }
}

impl Canvas2d for CanvasRenderer {
    fn set_size(&mut self, width: u32, height: u32) {
        self.batch.set_size(width, height);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.batch.set_fill_color(color);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.batch.set_stroke_color(color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.batch.set_line_width(width);
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.batch.clear_rect(x, y, width, height);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.batch.fill_circle(center, radius);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.batch.stroke_line(from, to);
    }
}
