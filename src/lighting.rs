//! Scene lights and their GPU uniform.

use glam::Vec3;

use crate::options::LightingOptions;
use crate::util::color::srgb_to_linear_rgb;

/// Uniform fill light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    /// sRGB color.
    pub color: [f32; 3],
    /// Intensity multiplier.
    pub intensity: f32,
}

/// Infinitely distant light shining from `position` toward the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// sRGB color.
    pub color: [f32; 3],
    /// Intensity multiplier.
    pub intensity: f32,
    /// Where the light sits; only its direction from the origin matters.
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector from the origin toward the light.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or(Vec3::Y)
    }
}

/// Point light with linear falloff to zero at `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// sRGB color.
    pub color: [f32; 3],
    /// Intensity multiplier.
    pub intensity: f32,
    /// World-space position.
    pub position: Vec3,
    /// Distance at which the contribution reaches zero.
    pub range: f32,
}

/// The four lights of the blob scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    /// Ambient fill.
    pub ambient: AmbientLight,
    /// Main directional light.
    pub key: DirectionalLight,
    /// Dim back light outlining the silhouette.
    pub rim: DirectionalLight,
    /// Short-range accent from below.
    pub accent: PointLight,
}

impl LightRig {
    /// Rig from lighting options.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        Self {
            ambient: AmbientLight {
                color: options.ambient_color,
                intensity: options.ambient,
            },
            key: DirectionalLight {
                color: options.key_color,
                intensity: options.key_intensity,
                position: Vec3::from(options.key_position),
            },
            rim: DirectionalLight {
                color: options.rim_color,
                intensity: options.rim_intensity,
                position: Vec3::from(options.rim_position),
            },
            accent: PointLight {
                color: options.accent_color,
                intensity: options.accent_intensity,
                position: Vec3::from(options.accent_position),
                range: options.accent_range,
            },
        }
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::from_options(&LightingOptions::default())
    }
}

/// Lighting uniform shared by the blob shader.
/// NOTE: Must match the WGSL `Lighting` struct (7 x vec4, 112 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Ambient color premultiplied by intensity (w unused).
    pub ambient: [f32; 4],
    /// Key light direction (xyz) and intensity (w).
    pub key_dir: [f32; 4],
    /// Key light color (w unused).
    pub key_color: [f32; 4],
    /// Rim light direction (xyz) and intensity (w).
    pub rim_dir: [f32; 4],
    /// Rim light color (w unused).
    pub rim_color: [f32; 4],
    /// Accent light position (xyz) and range (w).
    pub accent_pos: [f32; 4],
    /// Accent light color (xyz) and intensity (w).
    pub accent_color: [f32; 4],
}

impl LightingUniform {
    /// Pack a light rig, converting its colors to linear light.
    #[must_use]
    pub fn from_rig(rig: &LightRig) -> Self {
        let [ar, ag, ab] = srgb_to_linear_rgb(rig.ambient.color);
        let ai = rig.ambient.intensity;
        Self {
            ambient: [ar * ai, ag * ai, ab * ai, 0.0],
            key_dir: rig.key.direction().extend(rig.key.intensity).to_array(),
            key_color: rgb0(rig.key.color),
            rim_dir: rig.rim.direction().extend(rig.rim.intensity).to_array(),
            rim_color: rgb0(rig.rim.color),
            accent_pos: rig.accent.position.extend(rig.accent.range).to_array(),
            accent_color: Vec3::from(srgb_to_linear_rgb(rig.accent.color))
                .extend(rig.accent.intensity)
                .to_array(),
        }
    }
}

fn rgb0(color: [f32; 3]) -> [f32; 4] {
    let [r, g, b] = srgb_to_linear_rgb(color);
    [r, g, b, 0.0]
}
