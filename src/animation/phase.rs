//! Break-phase state machine and the clock that drives it.

use std::fmt;

use crate::options::AnimationOptions;

/// Which part of the break-apart / rejoin cycle is active.
///
/// The cycle has no terminal state: `Rejoining` wraps back to `Whole`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BreakPhase {
    /// Main blob shown alone.
    #[default]
    Whole,
    /// Main blob shrinks while satellites fade in one after another.
    Breaking,
    /// Only satellites are shown.
    Separated,
    /// Satellites fade out while the main blob grows back in.
    Rejoining,
}

impl BreakPhase {
    /// All phases in cycle order.
    pub const ALL: [Self; 4] =
        [Self::Whole, Self::Breaking, Self::Separated, Self::Rejoining];

    /// The phase that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Whole => Self::Breaking,
            Self::Breaking => Self::Separated,
            Self::Separated => Self::Rejoining,
            Self::Rejoining => Self::Whole,
        }
    }
}

impl fmt::Display for BreakPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Whole => "whole",
            Self::Breaking => "breaking",
            Self::Separated => "separated",
            Self::Rejoining => "rejoining",
        };
        f.write_str(name)
    }
}

/// Normalized progress through the transition window at the start of a
/// phase, clamped to `[0, 1]`.
///
/// A non-positive window counts as an instant transition.
#[must_use]
pub fn phase_progress(phase_timer: f32, transition_window: f32) -> f32 {
    if transition_window <= 0.0 {
        return 1.0;
    }
    (phase_timer / transition_window).clamp(0.0, 1.0)
}

/// Elapsed-time accumulator plus the per-phase timer.
///
/// `elapsed` only ever grows and feeds the morph/orbit waves; `phase_timer`
/// resets to zero each time the phase advances.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    elapsed: f32,
    phase_timer: f32,
    phase: BreakPhase,
    phase_duration: f32,
    transition_window: f32,
    cycles: u64,
}

impl AnimationClock {
    /// Clock at time zero in [`BreakPhase::Whole`].
    #[must_use]
    pub fn new(phase_duration: f32, transition_window: f32) -> Self {
        Self {
            elapsed: 0.0,
            phase_timer: 0.0,
            phase: BreakPhase::Whole,
            phase_duration,
            transition_window,
            cycles: 0,
        }
    }

    /// Clock configured from animation options.
    #[must_use]
    pub fn from_options(options: &AnimationOptions) -> Self {
        Self::new(options.phase_duration, options.transition_window)
    }

    /// Jump straight to a phase and timer value.
    #[must_use]
    pub fn at(mut self, phase: BreakPhase, phase_timer: f32) -> Self {
        self.phase = phase;
        self.phase_timer = phase_timer.max(0.0);
        self
    }

    /// Advance both clocks. Returns the new phase if a transition happened.
    pub fn tick(
        &mut self,
        time_delta: f32,
        phase_delta: f32,
    ) -> Option<BreakPhase> {
        self.elapsed += time_delta.max(0.0);
        self.advance_phase(phase_delta)
    }

    /// Accumulate the phase timer; once it passes the phase duration the
    /// timer resets and the phase moves on by one.
    ///
    /// Negative (or NaN) deltas are ignored so the timer never runs
    /// backwards.
    pub fn advance_phase(&mut self, delta: f32) -> Option<BreakPhase> {
        self.phase_timer += delta.max(0.0);
        if self.phase_timer <= self.phase_duration {
            return None;
        }
        self.phase_timer = 0.0;
        self.phase = self.phase.next();
        if self.phase == BreakPhase::Whole {
            self.cycles += 1;
        }
        Some(self.phase)
    }

    /// Total accumulated animation time.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Time spent in the current phase.
    #[must_use]
    pub fn phase_timer(&self) -> f32 {
        self.phase_timer
    }

    /// Currently active phase.
    #[must_use]
    pub fn phase(&self) -> BreakPhase {
        self.phase
    }

    /// Progress through the current transition window.
    #[must_use]
    pub fn progress(&self) -> f32 {
        phase_progress(self.phase_timer, self.transition_window)
    }

    /// Number of completed Whole-to-Whole cycles.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::from_options(&AnimationOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_has_period_four() {
        for phase in BreakPhase::ALL {
            let mut p = phase;
            for _ in 0..4 {
                p = p.next();
            }
            assert_eq!(p, phase);
        }
    }

    #[test]
    fn clock_visits_phases_in_order_across_many_cycles() {
        let mut clock = AnimationClock::new(8.0, 2.0);
        let mut seen = Vec::new();
        // 0.5 steps: the 17th step pushes the timer past 8.
        for _ in 0..(17 * 12) {
            if let Some(phase) = clock.tick(0.4, 0.5) {
                seen.push(phase);
            }
        }
        assert_eq!(seen.len(), 12);
        for (i, phase) in seen.iter().enumerate() {
            assert_eq!(*phase, BreakPhase::ALL[(i + 1) % 4]);
        }
        assert_eq!(clock.cycles(), 3);
    }

    #[test]
    fn timer_resets_only_after_exceeding_duration() {
        let mut clock = AnimationClock::new(8.0, 2.0);
        assert_eq!(clock.advance_phase(8.0), None);
        assert_eq!(clock.phase_timer(), 8.0);
        assert_eq!(clock.advance_phase(0.01), Some(BreakPhase::Breaking));
        assert_eq!(clock.phase_timer(), 0.0);
    }

    #[test]
    fn negative_deltas_do_not_rewind() {
        let mut clock = AnimationClock::new(8.0, 2.0);
        let _ = clock.tick(1.0, 1.0);
        let _ = clock.tick(-5.0, -5.0);
        assert_eq!(clock.elapsed(), 1.0);
        assert_eq!(clock.phase_timer(), 1.0);
        let _ = clock.tick(f32::NAN, f32::NAN);
        assert_eq!(clock.elapsed(), 1.0);
    }

    #[test]
    fn progress_is_clamped_to_transition_window() {
        let clock = AnimationClock::new(8.0, 2.0).at(BreakPhase::Breaking, 1.0);
        assert_eq!(clock.progress(), 0.5);
        let clock = clock.at(BreakPhase::Breaking, 6.0);
        assert_eq!(clock.progress(), 1.0);
        assert_eq!(phase_progress(1.0, 0.0), 1.0);
    }

    #[test]
    fn display_names() {
        assert_eq!(BreakPhase::Rejoining.to_string(), "rejoining");
        assert_eq!(BreakPhase::default(), BreakPhase::Whole);
    }
}
