//! Neural Field
//!
//! Animated particle background: drifting dots joined by lines that fade with
//! distance. The window plays host to the background, supplying the canvas,
//! the redraw-driven frame loop and resize notifications.

mod error;

use error::GpuError;
use field_renderer::CanvasRenderer;
use field_simulation::{FieldParams, FrameScheduler, FrameStats, ParticleBackground};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const WINDOW_TITLE: &str = "Neural Field";
const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

/// Frames averaged for the FPS readout
const FRAME_WINDOW: usize = 100;

/// Paces the background on the window's redraw requests
struct WindowScheduler(Arc<Window>);

impl FrameScheduler for WindowScheduler {
    fn request_frame(&self) {
        self.0.request_redraw();
    }
}

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    background: ParticleBackground<CanvasRenderer, WindowScheduler>,
    paused: bool,

    frame_times: VecDeque<f32>,
    last_frame_time: Instant,
    last_stats: FrameStats,
}

impl GpuState {
    async fn new(window: Arc<Window>) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;

        // A decorative background has no business waking the discrete GPU
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("✓ Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            // Frames are paced by the display refresh
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let canvas = CanvasRenderer::new(&device, config.format, size.width, size.height);
        log::info!("✓ Canvas renderer initialized");

        let background = ParticleBackground::new(
            canvas,
            WindowScheduler(window),
            FieldParams::default(),
            size.width,
            size.height,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            background,
            paused: false,
            frame_times: VecDeque::with_capacity(FRAME_WINDOW),
            last_frame_time: Instant::now(),
            last_stats: FrameStats::default(),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        // Minimized windows report 0x0; keep the current field until restored
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.background.resize(new_size.width, new_size.height);
        }
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("background {}", if self.paused { "paused" } else { "resumed" });

        if !self.paused {
            // Don't count the pause as one long frame
            self.last_frame_time = Instant::now();
            self.background.start();
        }
    }

    /// Step the field (unless paused) and present the canvas.
    /// Returns the rolling (fps, frame time in ms).
    fn render(&mut self) -> Result<(f32, f32), wgpu::SurfaceError> {
        if !self.paused {
            if let Some(stats) = self.background.tick() {
                self.last_stats = stats;
                self.record_frame_time();
            }
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.background
            .canvas_mut()
            .render(&self.device, &self.queue, &view);

        output.present();
        Ok(self.frame_rate())
    }

    fn record_frame_time(&mut self) {
        let now = Instant::now();
        let frame_time = (now - self.last_frame_time).as_secs_f32() * 1000.0;
        self.last_frame_time = now;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > FRAME_WINDOW {
            self.frame_times.pop_front();
        }
    }

    fn frame_rate(&self) -> (f32, f32) {
        if self.frame_times.is_empty() {
            return (0.0, 0.0);
        }
        let avg_frame_time = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        let fps = if avg_frame_time > 0.0 {
            1000.0 / avg_frame_time
        } else {
            0.0
        };
        (fps, avg_frame_time)
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
}

impl App {
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(gpu_state) = &mut self.gpu_state {
            gpu_state.background.stop();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        match pollster::block_on(GpuState::new(window)) {
            Ok(mut gpu_state) => {
                gpu_state.background.start();
                self.gpu_state = Some(gpu_state);
            }
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.shutdown(event_loop),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Space),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.toggle_pause();
                }
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::KeyR),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.background.initialize();
                    log::debug!("reseeded {} particles", gpu_state.background.field().len());
                }
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) {
                    match gpu_state.render() {
                        Ok((fps, frame_time)) => {
                            let stats = gpu_state.last_stats;
                            window.set_title(&format!(
                                "{} - {:.0} FPS ({:.2}ms) - {} particles, {} links",
                                WINDOW_TITLE, fps, frame_time, stats.particles, stats.links
                            ));
                        }
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu_state.reconfigure()
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            gpu_state.background.stop();
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<(), winit::error::EventLoopError> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting neural field background...");

    let event_loop = EventLoop::new()?;
    // Idle between frames; the background re-arms redraws while it runs
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App {
        window: None,
        gpu_state: None,
    };

    event_loop.run_app(&mut app)
}
