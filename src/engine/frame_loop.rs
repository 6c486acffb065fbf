//! Per-frame scheduling: the host primitive that runs a callback before the
//! next repaint, and the conversion from frame timestamps to clock steps.

use crate::options::AnimationOptions;

/// Token for one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// "Run the frame callback once before the next repaint."
pub trait FrameScheduler {
    /// Ask for one more frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a frame that has not fired yet.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler whose frames fire only when the owner pumps them.
///
/// Used by tests and by hosts that drive their own loop.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    /// Scheduler with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame waiting to fire, if any.
    #[must_use]
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Remove and return the pending frame so it can be delivered.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// Total frames requested.
    #[must_use]
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total frames cancelled before firing.
    #[must_use]
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

/// Turns frame timestamps into a number of clock steps.
///
/// With fixed stepping every frame is exactly one step. Frame-rate
/// independent stepping measures wall time against the reference frame
/// rate and caps the result so a stalled tab does not fast-forward.
#[derive(Debug, Clone)]
pub struct FrameStepper {
    independent: bool,
    reference_fps: f64,
    max_steps: f32,
    last_timestamp_ms: Option<f64>,
}

impl FrameStepper {
    /// Stepper configured from animation options.
    #[must_use]
    pub fn from_options(options: &AnimationOptions) -> Self {
        Self {
            independent: options.frame_rate_independent,
            reference_fps: f64::from(options.reference_fps.max(1.0)),
            max_steps: options.max_catch_up.max(0.0),
            last_timestamp_ms: None,
        }
    }

    /// Steps represented by the frame at `timestamp_ms`.
    pub fn steps(&mut self, timestamp_ms: f64) -> f32 {
        if !self.independent {
            return 1.0;
        }
        let Some(last) = self.last_timestamp_ms.replace(timestamp_ms) else {
            return 1.0;
        };
        let elapsed_ms = (timestamp_ms - last).max(0.0);
        let steps = (elapsed_ms * self.reference_fps / 1000.0) as f32;
        steps.min(self.max_steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_tracks_single_pending_frame() {
        let mut scheduler = ManualScheduler::new();
        let first = scheduler.request_frame();
        assert_eq!(scheduler.pending(), Some(first));
        assert_eq!(scheduler.take_pending(), Some(first));
        assert_eq!(scheduler.pending(), None);

        let second = scheduler.request_frame();
        assert_ne!(first, second);
        scheduler.cancel_frame(first);
        assert_eq!(scheduler.cancelled(), 0);
        scheduler.cancel_frame(second);
        assert_eq!(scheduler.cancelled(), 1);
        assert_eq!(scheduler.pending(), None);
        assert_eq!(scheduler.requested(), 2);
    }

    #[test]
    fn fixed_stepping_ignores_timestamps() {
        let mut stepper = FrameStepper::from_options(&AnimationOptions::default());
        assert_eq!(stepper.steps(0.0), 1.0);
        assert_eq!(stepper.steps(500.0), 1.0);
    }

    #[test]
    fn independent_stepping_scales_and_caps() {
        let options = AnimationOptions {
            frame_rate_independent: true,
            ..AnimationOptions::default()
        };
        let mut stepper = FrameStepper::from_options(&options);
        assert_eq!(stepper.steps(1000.0), 1.0);
        // 30 fps frame counts double at 60 fps reference.
        assert!((stepper.steps(1000.0 + 1000.0 / 30.0) - 2.0).abs() < 1e-4);
        // A long stall is capped.
        assert_eq!(stepper.steps(10_000.0), 4.0);
        // Clock going backwards counts as no time.
        assert_eq!(stepper.steps(9_000.0), 0.0);
    }
}
