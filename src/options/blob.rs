use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::MaterialOptions;

/// One `sin`/`cos` displacement term: `amplitude * f(dot(weights, p) +
/// frequency * t)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Wave {
    /// Use `cos` instead of `sin`.
    pub cosine: bool,
    /// Time frequency (zero for static terms).
    pub frequency: f32,
    /// Per-axis spatial weights applied to the sampled position.
    pub weights: [f32; 3],
    /// Output amplitude.
    pub amplitude: f32,
}

impl Wave {
    /// Sine term.
    #[must_use]
    pub const fn sin(frequency: f32, weights: [f32; 3], amplitude: f32) -> Self {
        Self {
            cosine: false,
            frequency,
            weights,
            amplitude,
        }
    }

    /// Cosine term.
    #[must_use]
    pub const fn cos(frequency: f32, weights: [f32; 3], amplitude: f32) -> Self {
        Self {
            cosine: true,
            frequency,
            weights,
            amplitude,
        }
    }
}

/// Main blob geometry, deformation and motion parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Blob", inline)]
#[serde(default)]
pub struct BlobOptions {
    /// Sphere radius of the reference shape.
    #[schemars(title = "Radius", range(min = 0.5, max = 5.0), extend("step" = 0.1))]
    pub radius: f32,
    /// Width and height segment count of the sphere.
    #[schemars(skip)]
    pub segments: u32,
    /// World-space position of the blob.
    #[schemars(skip)]
    pub offset: [f32; 3],
    /// Static terms shaping the resting silhouette.
    #[schemars(skip)]
    pub rest_noise: Vec<Wave>,
    /// Scale applied to the summed resting noise.
    #[schemars(skip)]
    pub rest_noise_scale: f32,
    /// Per-axis gain of the resting noise.
    #[schemars(skip)]
    pub rest_axis_gain: [f32; 3],
    /// Time-keyed terms driving the per-frame morph.
    #[schemars(skip)]
    pub morph_waves: Vec<Wave>,
    /// Per-axis gain of the morph offset.
    #[schemars(skip)]
    pub morph_axis_gain: [f32; 3],
    /// Spin rate around Y.
    #[schemars(title = "Spin", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub spin_rate: f32,
    /// Pitch wobble `(frequency, amplitude)`.
    #[schemars(skip)]
    pub pitch_wobble: [f32; 2],
    /// Roll wobble `(frequency, amplitude)`.
    #[schemars(skip)]
    pub roll_wobble: [f32; 2],
    /// Pointer parallax gain applied to (yaw, pitch).
    #[schemars(skip)]
    pub pointer_parallax: [f32; 2],
    /// Surface material.
    #[schemars(skip)]
    pub material: MaterialOptions,
}

impl Default for BlobOptions {
    fn default() -> Self {
        Self {
            radius: 2.5,
            segments: 80,
            offset: [0.5, 0.0, 0.0],
            rest_noise: vec![
                Wave::sin(0.0, [0.5, 0.3, 0.0], 0.4),
                Wave::cos(0.0, [0.0, 0.4, 0.6], 0.3),
                Wave::sin(0.0, [0.7, 0.0, 0.3], 0.25),
            ],
            rest_noise_scale: 0.5,
            rest_axis_gain: [1.0, 0.8, 1.1],
            morph_waves: vec![
                Wave::sin(1.2, [0.8, 0.4, 0.0], 0.15),
                Wave::cos(0.8, [0.3, 0.0, 0.6], 0.12),
                Wave::sin(1.5, [0.0, 0.5, 0.7], 0.1),
                Wave::cos(0.6, [0.4, 0.0, 0.2], 0.08),
            ],
            morph_axis_gain: [1.0, 0.9, 1.1],
            spin_rate: 0.15,
            pitch_wobble: [0.4, 0.08],
            roll_wobble: [0.3, 0.04],
            pointer_parallax: [0.05, 0.03],
            material: MaterialOptions {
                color: [0.102, 0.102, 0.102],
                metalness: 0.05,
                roughness: 0.1,
                clearcoat: 0.8,
                clearcoat_roughness: 0.1,
            },
        }
    }
}
