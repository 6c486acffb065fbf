// ── Accessors ──

use super::frame_loop::FrameScheduler;
use super::host::{RenderBackend, SurfaceHost};
use super::BlobAnimator;
use crate::animation::AnimationClock;
use crate::input::PointerState;
use crate::options::Options;
use crate::scene::Scene;

impl<H, R, S> BlobAnimator<H, R, S>
where
    H: SurfaceHost,
    R: RenderBackend,
    S: FrameScheduler,
{
    /// The scene as last updated.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Animation clock.
    #[must_use]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Normalized pointer state.
    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Options the animator was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Surface host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable surface host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Render backend.
    #[must_use]
    pub fn backend(&self) -> &R {
        &self.backend
    }

    /// Mutable render backend.
    pub fn backend_mut(&mut self) -> &mut R {
        &mut self.backend
    }

    /// Frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable frame scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Whether frames are still being scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
