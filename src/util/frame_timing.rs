//! Wall-clock frame timing for natively driven hosts.

use web_time::{Duration, Instant};

/// Frame clock for hosts that drive the animator themselves: supplies
/// frame timestamps and a smoothed FPS that is reported periodically.
pub struct FrameTiming {
    /// Origin of frame timestamps
    start: Instant,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// How often `end_frame` hands back an FPS report
    report_interval: Duration,
    last_report: Instant,
}

impl FrameTiming {
    /// Frame timer reporting FPS every `report_interval`.
    #[must_use]
    pub fn new(report_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            report_interval,
            last_report: now,
        }
    }

    /// Milliseconds since the timer was created, in the form frame
    /// callbacks expect.
    #[must_use]
    pub fn timestamp_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Call after rendering. Returns the smoothed FPS when a report is due.
    pub fn end_frame(&mut self) -> Option<f32> {
        self.end_frame_at(Instant::now())
    }

    fn end_frame_at(&mut self, now: Instant) -> Option<f32> {
        let frame_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        if now.duration_since(self.last_report) < self.report_interval {
            return None;
        }
        self.last_report = now;
        Some(self.smoothed_fps)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
