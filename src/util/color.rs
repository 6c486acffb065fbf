//! Color space conversion for option colors.

/// Convert one sRGB-encoded channel to linear light.
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert an sRGB color to linear RGB. Surfaces are configured with an
/// sRGB format, so linear shader output is re-encoded on store.
#[must_use]
pub fn srgb_to_linear_rgb([r, g, b]: [f32; 3]) -> [f32; 3] {
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn blob_grey_darkens_in_linear_light() {
        // #1a1a1a
        let [r, g, b] = srgb_to_linear_rgb([0.102; 3]);
        assert!((r - 0.0103).abs() < 1e-4, "{r}");
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn toe_is_linear() {
        assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-7);
    }
}
