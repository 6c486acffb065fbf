use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Clock and break-phase choreography tuning.
///
/// Time values are in abstract animation units: with the default fixed
/// stepping one frame advances the morph clock by `time_step` and the phase
/// timer by `phase_step`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Morph clock advance per frame.
    #[schemars(title = "Morph Speed", range(min = 0.0, max = 0.05), extend("step" = 0.001))]
    pub time_step: f32,
    /// Phase timer advance per frame.
    #[schemars(title = "Phase Speed", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub phase_step: f32,
    /// Phase timer value after which the break phase advances.
    #[schemars(title = "Phase Duration", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub phase_duration: f32,
    /// Length of the transition window at the start of each phase.
    #[schemars(skip)]
    pub transition_window: f32,
    /// Main blob scale while fully separated.
    #[schemars(title = "Separated Scale", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub separated_scale: f32,
    /// Opacity at or below which a fading satellite is hidden.
    #[schemars(skip)]
    pub fade_threshold: f32,
    /// Progress offset between consecutive satellites.
    #[schemars(skip)]
    pub satellite_stagger: f32,
    /// Opacity change per unit of progress for a satellite fade.
    #[schemars(skip)]
    pub satellite_fade_rate: f32,
    /// Scale clock steps by measured frame time instead of one step per
    /// frame.
    #[schemars(title = "Frame-Rate Independent")]
    pub frame_rate_independent: bool,
    /// Frame rate a single step corresponds to when frame-rate independent.
    #[schemars(skip)]
    pub reference_fps: f32,
    /// Upper bound on steps taken by one frame after a stall.
    #[schemars(skip)]
    pub max_catch_up: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            time_step: 0.008,
            phase_step: 0.01,
            phase_duration: 8.0,
            transition_window: 2.0,
            separated_scale: 0.7,
            fade_threshold: 0.01,
            satellite_stagger: 0.1,
            satellite_fade_rate: 5.0,
            frame_rate_independent: false,
            reference_fps: 60.0,
            max_catch_up: 4.0,
        }
    }
}
