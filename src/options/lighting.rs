use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Four-light rig: ambient fill, key and rim directionals, and a short-range
/// accent point light.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
pub struct LightingOptions {
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ambient: f32,
    /// Ambient light color (sRGB).
    #[schemars(skip)]
    pub ambient_color: [f32; 3],
    /// Key light intensity.
    #[schemars(title = "Key Light", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub key_intensity: f32,
    /// Key light color (sRGB).
    #[schemars(skip)]
    pub key_color: [f32; 3],
    /// Key light position (the light shines toward the origin).
    #[schemars(skip)]
    pub key_position: [f32; 3],
    /// Rim light intensity.
    #[schemars(title = "Rim Light", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub rim_intensity: f32,
    /// Rim light color (sRGB).
    #[schemars(skip)]
    pub rim_color: [f32; 3],
    /// Rim light position.
    #[schemars(skip)]
    pub rim_position: [f32; 3],
    /// Accent point light intensity.
    #[schemars(title = "Accent Light", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub accent_intensity: f32,
    /// Accent point light color (sRGB).
    #[schemars(skip)]
    pub accent_color: [f32; 3],
    /// Accent point light position.
    #[schemars(skip)]
    pub accent_position: [f32; 3],
    /// Distance at which the accent light falls to zero.
    #[schemars(skip)]
    pub accent_range: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient: 0.4,
            ambient_color: [1.0, 1.0, 1.0],
            key_intensity: 1.2,
            key_color: [1.0, 1.0, 1.0],
            key_position: [8.0, 6.0, 4.0],
            rim_intensity: 0.8,
            rim_color: [0.29, 0.29, 0.29],
            rim_position: [-5.0, 3.0, -3.0],
            accent_intensity: 0.6,
            accent_color: [0.4, 0.4, 0.4],
            accent_position: [3.0, -2.0, 2.0],
            accent_range: 12.0,
        }
    }
}
