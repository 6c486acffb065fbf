// ── Per-frame update ──

use super::frame_loop::{FrameHandle, FrameScheduler};
use super::host::{RenderBackend, SurfaceHost};
use super::BlobAnimator;
use crate::animation::motion::camera_eye;

impl<H, R, S> BlobAnimator<H, R, S>
where
    H: SurfaceHost,
    R: RenderBackend,
    S: FrameScheduler,
{
    /// Frame callback. Advances the clocks, deforms and moves every mesh,
    /// applies the phase table, sways the camera, renders, and requests the
    /// next frame.
    ///
    /// Frames delivered after [`destroy`](Self::destroy), or for a handle
    /// other than the one last requested, are dropped.
    pub fn on_frame(&mut self, handle: FrameHandle, timestamp_ms: f64) {
        if !self.running || self.pending_frame != Some(handle) {
            return;
        }
        self.pending_frame = None;

        let steps = self.stepper.steps(timestamp_ms);
        let animation = &self.options.animation;
        if let Some(phase) = self
            .clock
            .tick(animation.time_step * steps, animation.phase_step * steps)
        {
            log::debug!("blob phase -> {phase}");
        }

        let time = self.clock.elapsed();
        self.update_main_blob(time);
        self.update_satellites(time, steps);
        self.apply_phase_transitions();

        let eye = camera_eye(&self.options.camera, time, self.pointer.position());
        self.scene.camera.look_from(eye);

        self.backend.render(&self.scene);
        self.frame_count += 1;
        self.schedule_next_frame();
    }

    /// Add `delta` to the phase timer, moving to the next phase once the
    /// phase duration is exceeded.
    pub fn advance_phase(&mut self, delta: f32) {
        if let Some(phase) = self.clock.advance_phase(delta) {
            log::debug!("blob phase -> {phase}");
        }
    }

    /// Re-derive the main blob's live shape and rotation at `time`.
    pub(super) fn update_main_blob(&mut self, time: f32) {
        let scale = self
            .choreography
            .phase_scale(self.clock.phase(), self.clock.progress());
        let pointer = self.pointer.position();
        if let Some(main) = self.scene.main.as_mut() {
            main.update(&self.options.blob, time, scale, pointer);
        }
    }

    /// Orbit every satellite around the main blob's offset.
    pub(super) fn update_satellites(&mut self, time: f32, steps: f32) {
        let center_x = self.options.blob.offset[0];
        for satellite in &mut self.scene.satellites {
            satellite.update(&self.options.satellites, time, center_x, steps);
        }
    }

    /// Push this frame's visibility and opacity onto every mesh.
    pub(super) fn apply_phase_transitions(&mut self) {
        let phase = self.clock.phase();
        let progress = self.clock.progress();
        let choreography = &self.choreography;

        if let Some(main) = self.scene.main.as_mut() {
            main.apply_presence(choreography.main_presence(phase, progress));
        }
        for satellite in &mut self.scene.satellites {
            let presence =
                choreography.satellite_presence(phase, progress, satellite.index);
            satellite.apply_presence(presence);
        }
    }
}
