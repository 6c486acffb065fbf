//! Visibility, opacity and scale of every mesh as a pure function of the
//! break phase, the transition progress and the satellite index.
//!
//! | phase      | main visible | main opacity     | satellite i visible | satellite i opacity         |
//! |------------|--------------|------------------|---------------------|-----------------------------|
//! | Whole      | yes          | 1                | no                  | 0                           |
//! | Breaking   | yes          | 1                | `p > i * stagger` (i = 0: always) | `(p - i * stagger) * rate`  |
//! | Separated  | no           | 0                | yes                 | 1                           |
//! | Rejoining  | `p > 0.5`    | `(p - 0.5) * 2`  | opacity > threshold | `1 - (p - i * stagger) * rate` |
//!
//! All opacities are clamped into `[0, 1]`.

use super::phase::BreakPhase;
use crate::options::AnimationOptions;

/// Point in the rejoin transition at which the main blob reappears.
const REJOIN_MAIN_START: f32 = 0.5;

/// Whether a mesh is drawn this frame and with what opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presence {
    /// Whether the mesh is drawn at all.
    pub visible: bool,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

impl Presence {
    /// Not drawn.
    pub const HIDDEN: Self = Self {
        visible: false,
        opacity: 0.0,
    };

    /// Drawn fully opaque.
    pub const OPAQUE: Self = Self {
        visible: true,
        opacity: 1.0,
    };

    /// Whether the material needs alpha blending.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// Tuning for the break/rejoin table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choreography {
    /// Main blob scale while separated.
    pub separated_scale: f32,
    /// Progress offset between consecutive satellites.
    pub stagger: f32,
    /// Opacity change per unit of progress.
    pub fade_rate: f32,
    /// Opacity at or below which a fading satellite is hidden.
    pub fade_threshold: f32,
}

impl Default for Choreography {
    fn default() -> Self {
        Self::from(&AnimationOptions::default())
    }
}

impl From<&AnimationOptions> for Choreography {
    fn from(options: &AnimationOptions) -> Self {
        Self {
            separated_scale: options.separated_scale,
            stagger: options.satellite_stagger,
            fade_rate: options.satellite_fade_rate,
            fade_threshold: options.fade_threshold,
        }
    }
}

impl Choreography {
    /// Uniform scale applied to the main blob's reference shape.
    ///
    /// 1.0 when whole, linear down to `separated_scale` while breaking,
    /// held while separated, linear back up while rejoining.
    #[must_use]
    pub fn phase_scale(&self, phase: BreakPhase, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        let shrink = 1.0 - self.separated_scale;
        match phase {
            BreakPhase::Whole => 1.0,
            BreakPhase::Breaking => 1.0 - shrink * p,
            BreakPhase::Separated => self.separated_scale,
            BreakPhase::Rejoining => self.separated_scale + shrink * p,
        }
    }

    /// Presence of the main blob.
    #[must_use]
    pub fn main_presence(&self, phase: BreakPhase, progress: f32) -> Presence {
        let p = progress.clamp(0.0, 1.0);
        match phase {
            BreakPhase::Whole | BreakPhase::Breaking => Presence::OPAQUE,
            BreakPhase::Separated => Presence::HIDDEN,
            BreakPhase::Rejoining => Presence {
                visible: p > REJOIN_MAIN_START,
                opacity: ((p - REJOIN_MAIN_START) * 2.0).clamp(0.0, 1.0),
            },
        }
    }

    /// Presence of satellite `index`.
    #[must_use]
    pub fn satellite_presence(
        &self,
        phase: BreakPhase,
        progress: f32,
        index: usize,
    ) -> Presence {
        let p = progress.clamp(0.0, 1.0);
        let start = index as f32 * self.stagger;
        match phase {
            BreakPhase::Whole => Presence::HIDDEN,
            // The first satellite appears at the very start of the phase;
            // later ones only once their fade has begun.
            BreakPhase::Breaking => Presence {
                visible: p > start || start == 0.0,
                opacity: ((p - start) * self.fade_rate).clamp(0.0, 1.0),
            },
            BreakPhase::Separated => Presence::OPAQUE,
            BreakPhase::Rejoining => {
                let opacity =
                    (1.0 - (p - start) * self.fade_rate).clamp(0.0, 1.0);
                Presence {
                    visible: opacity > self.fade_threshold,
                    opacity,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::phase::phase_progress;

    fn progress_samples() -> impl Iterator<Item = f32> {
        (0..=100).map(|i| i as f32 / 100.0)
    }

    #[test]
    fn breaking_start_shows_first_satellite_at_zero_opacity() {
        let c = Choreography::default();
        let p = phase_progress(0.0, 2.0);
        let first = c.satellite_presence(BreakPhase::Breaking, p, 0);
        assert!(first.visible);
        assert_eq!(first.opacity, 0.0);
        let last = c.satellite_presence(BreakPhase::Breaking, p, 4);
        assert!(!last.visible);
    }

    #[test]
    fn rejoin_midpoint_hides_main_and_first_satellite() {
        let c = Choreography::default();
        let p = phase_progress(1.0, 2.0);
        assert_eq!(p, 0.5);
        assert!(!c.main_presence(BreakPhase::Rejoining, p).visible);
        let first = c.satellite_presence(BreakPhase::Rejoining, p, 0);
        assert_eq!(first.opacity, 0.0);
        assert!(!first.visible);
    }

    #[test]
    fn rejoin_keeps_late_satellites_until_their_fade_starts() {
        let c = Choreography::default();
        let sat = c.satellite_presence(BreakPhase::Rejoining, 0.2, 4);
        assert!(sat.visible);
        assert_eq!(sat.opacity, 1.0);
        assert!(!sat.is_transparent());
    }

    #[test]
    fn rejoin_fades_main_back_in() {
        let c = Choreography::default();
        let main = c.main_presence(BreakPhase::Rejoining, 0.75);
        assert!(main.visible);
        assert!((main.opacity - 0.5).abs() < 1e-6);
        assert!(main.is_transparent());
        assert_eq!(c.main_presence(BreakPhase::Rejoining, 1.0).opacity, 1.0);
    }

    #[test]
    fn whole_and_separated_are_fixed() {
        let c = Choreography::default();
        for p in progress_samples() {
            assert_eq!(c.main_presence(BreakPhase::Whole, p), Presence::OPAQUE);
            assert_eq!(
                c.main_presence(BreakPhase::Separated, p),
                Presence::HIDDEN
            );
            for i in 0..5 {
                assert!(!c.satellite_presence(BreakPhase::Whole, p, i).visible);
                assert_eq!(
                    c.satellite_presence(BreakPhase::Separated, p, i),
                    Presence::OPAQUE
                );
            }
        }
    }

    #[test]
    fn opacity_is_always_clamped() {
        let c = Choreography::default();
        for phase in BreakPhase::ALL {
            for p in progress_samples().chain([-1.0, 3.5]) {
                let main = c.main_presence(phase, p);
                assert!((0.0..=1.0).contains(&main.opacity));
                for i in 0..8 {
                    let sat = c.satellite_presence(phase, p, i);
                    assert!((0.0..=1.0).contains(&sat.opacity), "{phase} {p} {i}");
                }
            }
        }
    }

    #[test]
    fn table_is_deterministic() {
        let c = Choreography::default();
        for phase in BreakPhase::ALL {
            for p in progress_samples() {
                for i in 0..5 {
                    let a = c.satellite_presence(phase, p, i);
                    let b = c.satellite_presence(phase, p, i);
                    assert_eq!(a.visible, b.visible);
                    assert_eq!(a.opacity.to_bits(), b.opacity.to_bits());
                }
                assert_eq!(
                    c.phase_scale(phase, p).to_bits(),
                    c.phase_scale(phase, p).to_bits()
                );
            }
        }
    }

    #[test]
    fn phase_scale_is_strictly_monotonic_in_transitions() {
        let c = Choreography::default();
        let mut prev_break = f32::INFINITY;
        let mut prev_rejoin = f32::NEG_INFINITY;
        for p in progress_samples() {
            let b = c.phase_scale(BreakPhase::Breaking, p);
            let r = c.phase_scale(BreakPhase::Rejoining, p);
            assert!(b < prev_break);
            assert!(r > prev_rejoin);
            assert!((0.7 - 1e-6..=1.0).contains(&b));
            assert!((0.7 - 1e-6..=1.0 + 1e-6).contains(&r));
            prev_break = b;
            prev_rejoin = r;
        }
        assert_eq!(c.phase_scale(BreakPhase::Breaking, 0.0), 1.0);
        assert!((c.phase_scale(BreakPhase::Breaking, 1.0) - 0.7).abs() < 1e-6);
        assert_eq!(c.phase_scale(BreakPhase::Separated, 0.3), 0.7);
        assert_eq!(c.phase_scale(BreakPhase::Whole, 0.3), 1.0);
    }

    #[test]
    fn breaking_hides_satellites_exactly_at_their_start() {
        let c = Choreography::default();
        for i in 1..5 {
            let start = i as f32 * 0.1;
            let at = c.satellite_presence(BreakPhase::Breaking, start, i);
            assert!(!at.visible, "satellite {i} at {start}");
            assert_eq!(at.opacity, 0.0);
            let after = c.satellite_presence(BreakPhase::Breaking, start + 0.01, i);
            assert!(after.visible);
            assert!(after.opacity > 0.0);
        }
    }

    #[test]
    fn breaking_fades_satellites_in_sequence() {
        let c = Choreography::default();
        let sats: Vec<Presence> = (0..5)
            .map(|i| c.satellite_presence(BreakPhase::Breaking, 0.25, i))
            .collect();
        assert!(sats[0].visible && sats[1].visible && sats[2].visible);
        assert!(!sats[3].visible && !sats[4].visible);
        assert!(sats[0].opacity > sats[1].opacity);
        assert_eq!(sats[0].opacity, 1.0);
    }
}
