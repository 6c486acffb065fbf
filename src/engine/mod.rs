//! The blob animator: owns the scene and advances it once per frame.
//!
//! [`BlobAnimator`] is constructed by the hosting page with three
//! collaborators: a [`SurfaceHost`] (the container), a [`RenderBackend`]
//! (the rasterizer) and a [`FrameScheduler`] (the repaint callback). Each
//! frame the host calls [`BlobAnimator::on_frame`]; the animator updates the
//! scene, renders it, and requests the next frame unless it has been
//! destroyed.

mod accessors;
pub mod frame_loop;
pub mod host;
mod lifecycle;
mod update;

pub use frame_loop::{FrameHandle, FrameScheduler, FrameStepper, ManualScheduler};
pub use host::{RenderBackend, SurfaceHost};

use crate::animation::{AnimationClock, Choreography};
use crate::input::PointerState;
use crate::options::Options;
use crate::scene::Scene;

/// Animation controller for the morphing blob scene.
pub struct BlobAnimator<H, R, S>
where
    H: SurfaceHost,
    R: RenderBackend,
    S: FrameScheduler,
{
    host: H,
    backend: R,
    scheduler: S,
    options: Options,
    scene: Scene,
    clock: AnimationClock,
    choreography: Choreography,
    pointer: PointerState,
    stepper: FrameStepper,
    pending_frame: Option<FrameHandle>,
    running: bool,
    frame_count: u64,
}

impl<H, R, S> BlobAnimator<H, R, S>
where
    H: SurfaceHost,
    R: RenderBackend,
    S: FrameScheduler,
{
    /// Build the scene inside `host`, size the backend to it, attach the
    /// output surface, start listening for input and request the first
    /// frame.
    ///
    /// A zero-sized container is accepted: the backend receives a 0x0
    /// viewport and the camera keeps a unit aspect until the first real
    /// resize.
    pub fn new(mut host: H, mut backend: R, scheduler: S, options: Options) -> Self {
        let (width, height) = host.client_size();
        if width == 0 || height == 0 {
            log::warn!("blob container has zero size ({width}x{height})");
        }

        let scene = Scene::build(&options, width, height);
        let pixel_ratio = host
            .device_pixel_ratio()
            .min(options.camera.max_pixel_ratio);
        backend.set_pixel_ratio(pixel_ratio);
        backend.set_size(width, height);
        host.attach_surface();

        log::info!(
            "blob animator initialized: {width}x{height}, {} satellites",
            scene.satellites.len()
        );

        let mut animator = Self {
            host,
            backend,
            scheduler,
            clock: AnimationClock::from_options(&options.animation),
            choreography: Choreography::from(&options.animation),
            stepper: FrameStepper::from_options(&options.animation),
            pointer: PointerState::new(),
            options,
            scene,
            pending_frame: None,
            running: true,
            frame_count: 0,
        };
        animator.apply_phase_transitions();
        animator.schedule_next_frame();
        animator
    }

    /// Ask the scheduler for the next frame unless stopped.
    fn schedule_next_frame(&mut self) {
        if !self.running {
            return;
        }
        self.pending_frame = Some(self.scheduler.request_frame());
    }
}

impl<H, R> BlobAnimator<H, R, ManualScheduler>
where
    H: SurfaceHost,
    R: RenderBackend,
{
    /// Deliver the pending frame, if any. Returns whether a frame ran.
    pub fn pump(&mut self, timestamp_ms: f64) -> bool {
        match self.scheduler.take_pending() {
            Some(handle) => {
                self.on_frame(handle, timestamp_ms);
                true
            }
            None => false,
        }
    }
}
