//! Frame-loop task for the particle background
//!
//! The host drives [`ParticleBackground::tick`] from its frame callback. Each tick
//! draws one frame and asks the [`FrameScheduler`] for the next, so the loop keeps
//! itself alive until [`ParticleBackground::stop`] (or any clone of its
//! [`StopHandle`]) cancels it.

use crate::canvas::Canvas2d;
use crate::simulation::{FrameStats, ParticleField};
use crate::FieldParams;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Host hook that schedules a callback for the next display refresh
pub trait FrameScheduler {
    fn request_frame(&self);
}

/// Shared cancellation flag for a running background
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// A particle field bound to the canvas it draws on and the scheduler that paces it
pub struct ParticleBackground<C, S, R = StdRng> {
    field: ParticleField<R>,
    canvas: C,
    scheduler: S,
    stop: StopHandle,
}

impl<C: Canvas2d, S: FrameScheduler> ParticleBackground<C, S, StdRng> {
    pub fn new(canvas: C, scheduler: S, params: FieldParams, width: u32, height: u32) -> Self {
        Self::with_rng(
            canvas,
            scheduler,
            params,
            width,
            height,
            StdRng::from_os_rng(),
        )
    }
}

impl<C: Canvas2d, S: FrameScheduler, R: Rng> ParticleBackground<C, S, R> {
    /// Size `canvas` to the viewport and seed the field. No frame is requested
    /// until [`start`](Self::start).
    pub fn with_rng(
        mut canvas: C,
        scheduler: S,
        params: FieldParams,
        width: u32,
        height: u32,
        rng: R,
    ) -> Self {
        canvas.set_size(width, height);
        let field = ParticleField::with_rng(params, width, height, rng);

        log::info!(
            "particle background ready: {} particles on {}x{}",
            field.len(),
            width,
            height
        );

        Self {
            field,
            canvas,
            scheduler,
            stop: StopHandle::new(),
        }
    }

    /// Arm the first frame. Has no effect once stopped.
    pub fn start(&mut self) {
        if self.stop.is_stopped() {
            log::warn!("particle background was stopped; ignoring start");
            return;
        }
        self.scheduler.request_frame();
    }

    /// Frame callback: draw one frame and re-arm, or do nothing once stopped
    pub fn tick(&mut self) -> Option<FrameStats> {
        if self.stop.is_stopped() {
            return None;
        }

        let stats = self.field.tick(&mut self.canvas);
        log::trace!("frame: {} particles, {} links", stats.particles, stats.links);

        self.scheduler.request_frame();
        Some(stats)
    }

    /// Follow a viewport change: resize the canvas and reseed the field
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_size(width, height);
        self.field.resize(width, height);
    }

    /// Reseed the field for the current surface
    pub fn initialize(&mut self) {
        self.field.initialize();
    }

    /// Cancel the frame loop. The pending frame, if any, becomes a no-op.
    pub fn stop(&mut self) {
        if !self.stop.is_stopped() {
            log::debug!("stopping particle background");
        }
        self.stop.stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// A handle that stops this background from elsewhere
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
