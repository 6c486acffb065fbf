use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::MaterialOptions;

/// Satellite blob layout and motion parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Satellites", inline)]
#[serde(default)]
pub struct SatelliteOptions {
    /// Number of satellites.
    #[schemars(title = "Count", range(min = 0, max = 12))]
    pub count: usize,
    /// Smallest satellite radius.
    #[schemars(skip)]
    pub min_radius: f32,
    /// Radius spread above `min_radius` (radius is uniform in
    /// `[min_radius, min_radius + radius_spread)`).
    #[schemars(skip)]
    pub radius_spread: f32,
    /// Sphere segment count.
    #[schemars(skip)]
    pub segments: u32,
    /// Seed for satellite radii. `None` draws from the thread RNG.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Initial placement ellipse half-axes `(x, y, z)`.
    #[schemars(skip)]
    pub initial_ellipse: [f32; 3],
    /// Mean orbit radius.
    #[schemars(title = "Orbit Radius", range(min = 1.0, max = 6.0), extend("step" = 0.1))]
    pub orbit_radius: f32,
    /// Amplitude of the orbit radius oscillation.
    #[schemars(skip)]
    pub orbit_wobble: f32,
    /// Orbit angular speeds for the `(x, y, z)` terms.
    #[schemars(skip)]
    pub orbit_speed: [f32; 3],
    /// Height and depth extents of the orbit.
    #[schemars(skip)]
    pub orbit_extent: [f32; 2],
    /// Bobbing `(frequency, index phase, amplitude)`.
    #[schemars(skip)]
    pub bobbing: [f32; 3],
    /// Floating `(frequency, index phase, amplitude)`.
    #[schemars(skip)]
    pub floating: [f32; 3],
    /// Self-rotation per frame step around `(x, y)`.
    #[schemars(skip)]
    pub spin: [f32; 2],
    /// Scale pulse `(frequency, amplitude)`.
    #[schemars(skip)]
    pub pulse: [f32; 2],
    /// Surface material, cloned per satellite.
    #[schemars(skip)]
    pub material: MaterialOptions,
}

impl Default for SatelliteOptions {
    fn default() -> Self {
        Self {
            count: 5,
            min_radius: 0.3,
            radius_spread: 0.4,
            segments: 32,
            seed: None,
            initial_ellipse: [3.0, 1.5, 0.8],
            orbit_radius: 2.5,
            orbit_wobble: 0.5,
            orbit_speed: [0.2, 0.3, 0.15],
            orbit_extent: [1.2, 0.6],
            bobbing: [1.5, 0.5, 0.3],
            floating: [0.8, 0.8, 0.2],
            spin: [0.005, 0.007],
            pulse: [2.0, 0.1],
            material: MaterialOptions {
                color: [0.165, 0.165, 0.165],
                metalness: 0.1,
                roughness: 0.15,
                clearcoat: 0.6,
                clearcoat_roughness: 0.0,
            },
        }
    }
}
