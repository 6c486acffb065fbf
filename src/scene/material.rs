use crate::animation::Presence;
use crate::options::MaterialOptions;

/// Clearcoated physical material with per-mesh opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color (sRGB, converted to linear when uploaded).
    pub color: [f32; 3],
    /// Metalness in `[0, 1]`.
    pub metalness: f32,
    /// Roughness in `[0, 1]`.
    pub roughness: f32,
    /// Clearcoat layer strength.
    pub clearcoat: f32,
    /// Clearcoat layer roughness.
    pub clearcoat_roughness: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Whether the mesh must be alpha blended.
    pub transparent: bool,
}

impl Material {
    /// Opaque material from options.
    #[must_use]
    pub fn from_options(options: &MaterialOptions) -> Self {
        Self {
            color: options.color,
            metalness: options.metalness,
            roughness: options.roughness,
            clearcoat: options.clearcoat,
            clearcoat_roughness: options.clearcoat_roughness,
            opacity: 1.0,
            transparent: false,
        }
    }

    /// Take opacity and blending from a choreography result.
    pub fn apply_presence(&mut self, presence: Presence) {
        self.opacity = presence.opacity.clamp(0.0, 1.0);
        self.transparent = presence.is_transparent();
    }
}
