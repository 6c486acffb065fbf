use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and sway parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 110.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Resting eye position before sway.
    #[schemars(skip)]
    pub eye: [f32; 3],
    /// Look-at target.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Horizontal sway `(frequency, amplitude)`.
    #[schemars(skip)]
    pub sway_x: [f32; 2],
    /// Vertical sway `(frequency, amplitude)`.
    #[schemars(skip)]
    pub sway_y: [f32; 2],
    /// Eye offset per unit of normalized pointer position `(x, y)`.
    #[schemars(skip)]
    pub pointer_influence: [f32; 2],
    /// Upper bound on the device pixel ratio used for the output surface.
    #[schemars(skip)]
    pub max_pixel_ratio: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            eye: [-1.0, 0.5, 5.0],
            target: [0.0, 0.0, 0.0],
            sway_x: [0.3, 0.2],
            sway_y: [0.2, 0.1],
            pointer_influence: [0.1, 0.05],
            max_pixel_ratio: 2.0,
        }
    }
}
