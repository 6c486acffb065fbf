// ── Lifecycle: resize, input, teardown ──

use super::frame_loop::FrameScheduler;
use super::host::{RenderBackend, SurfaceHost};
use super::BlobAnimator;
use crate::input::InputEvent;

impl<H, R, S> BlobAnimator<H, R, S>
where
    H: SurfaceHost,
    R: RenderBackend,
    S: FrameScheduler,
{
    /// Resize the camera and backend to `width` x `height`.
    ///
    /// A zero height keeps the previous aspect. No-op after destroy.
    pub fn resize(&mut self, width: u32, height: u32) {
        if !self.running {
            return;
        }
        if width == 0 || height == 0 {
            log::warn!("blob container resized to zero ({width}x{height})");
        } else {
            log::debug!("blob resize {width}x{height}");
        }
        self.scene.camera.set_viewport(width, height);
        self.backend.set_size(width, height);
    }

    /// Feed one host input event. Ignored after destroy.
    pub fn handle_input(&mut self, event: InputEvent) {
        if !self.running {
            return;
        }
        match event {
            InputEvent::PointerMoved { x, y } => {
                let rect = self.host.bounding_rect();
                self.pointer.handle_move(x, y, rect);
            }
            InputEvent::Resized => {
                let (width, height) = self.host.client_size();
                self.resize(width, height);
            }
        }
    }

    /// Stop the loop and release everything: the pending frame, the
    /// attached surface, every mesh's backend resources, and the backend
    /// itself. Safe to call more than once.
    pub fn destroy(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;

        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.host.detach_surface();
        for mesh in self.scene.meshes() {
            self.backend.release_mesh(mesh.id);
        }
        self.backend.dispose();
        self.scene.clear();

        log::info!(
            "blob animator destroyed after {} frames",
            self.frame_count
        );
    }
}

impl<H, R, S> Drop for BlobAnimator<H, R, S>
where
    H: SurfaceHost,
    R: RenderBackend,
    S: FrameScheduler,
{
    fn drop(&mut self) {
        self.destroy();
    }
}
