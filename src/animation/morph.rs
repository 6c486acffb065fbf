//! Sinusoidal displacement fields for the main blob.
//!
//! The same machinery produces both the static resting silhouette (time
//! frequency zero) and the per-frame morph.

use glam::Vec3;

use crate::options::{BlobOptions, Wave};

impl Wave {
    /// Evaluate this term for a reference position at time `t`.
    #[inline]
    #[must_use]
    pub fn sample(&self, p: Vec3, t: f32) -> f32 {
        let arg = self.frequency * t + Vec3::from(self.weights).dot(p);
        let s = if self.cosine { arg.cos() } else { arg.sin() };
        s * self.amplitude
    }
}

/// A sum of waves plus the per-axis gain applied when displacing.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphField {
    waves: Vec<Wave>,
    scale: f32,
    axis_gain: Vec3,
}

impl MorphField {
    /// Field from explicit terms.
    #[must_use]
    pub fn new(waves: Vec<Wave>, scale: f32, axis_gain: Vec3) -> Self {
        Self {
            waves,
            scale,
            axis_gain,
        }
    }

    /// Static field that shapes the resting silhouette.
    #[must_use]
    pub fn rest(options: &BlobOptions) -> Self {
        Self::new(
            options.rest_noise.clone(),
            options.rest_noise_scale,
            Vec3::from(options.rest_axis_gain),
        )
    }

    /// Time-keyed field applied every frame.
    #[must_use]
    pub fn live(options: &BlobOptions) -> Self {
        Self::new(
            options.morph_waves.clone(),
            1.0,
            Vec3::from(options.morph_axis_gain),
        )
    }

    /// Scalar displacement for a reference position.
    #[inline]
    #[must_use]
    pub fn offset(&self, p: Vec3, t: f32) -> f32 {
        self.waves.iter().map(|w| w.sample(p, t)).sum::<f32>() * self.scale
    }

    /// Displace a reference position: each axis is scaled by
    /// `base_scale + gain * offset`.
    #[inline]
    #[must_use]
    pub fn displace(&self, p: Vec3, t: f32, base_scale: f32) -> Vec3 {
        let m = self.offset(p, t);
        p * (Vec3::splat(base_scale) + self.axis_gain * m)
    }

    /// Displace every reference position into `out`.
    ///
    /// `out` is resized to match `reference`.
    pub fn displace_all(
        &self,
        reference: &[Vec3],
        t: f32,
        base_scale: f32,
        out: &mut Vec<Vec3>,
    ) {
        out.clear();
        out.extend(reference.iter().map(|&p| self.displace(p, t, base_scale)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_noise_matches_closed_form() {
        let field = MorphField::rest(&BlobOptions::default());
        let p = Vec3::new(1.0, -2.0, 0.5);
        let n = ((0.5 * p.x + 0.3 * p.y).sin() * 0.4
            + (0.4 * p.y + 0.6 * p.z).cos() * 0.3
            + (0.3 * p.z + 0.7 * p.x).sin() * 0.25)
            * 0.5;
        let expected =
            Vec3::new(p.x * (1.0 + n), p.y * (1.0 + n * 0.8), p.z * (1.0 + n * 1.1));
        assert!(field.displace(p, 0.0, 1.0).abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn live_morph_matches_closed_form() {
        let field = MorphField::live(&BlobOptions::default());
        let p = Vec3::new(0.3, 2.1, -1.4);
        let t = 3.7;
        let m = (t * 1.2 + p.x * 0.8 + p.y * 0.4).sin() * 0.15
            + (t * 0.8 + p.z * 0.6 + p.x * 0.3).cos() * 0.12
            + (t * 1.5 + p.y * 0.5 + p.z * 0.7).sin() * 0.1
            + (t * 0.6 + p.x * 0.4 + p.z * 0.2).cos() * 0.08;
        let s = 0.85;
        let expected =
            Vec3::new(p.x * (s + m), p.y * (s + m * 0.9), p.z * (s + m * 1.1));
        assert!(field.displace(p, t, s).abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn axes_breathe_differently() {
        let field = MorphField::live(&BlobOptions::default());
        let p = Vec3::ONE;
        let d = field.displace(p, 1.0, 1.0);
        assert!((d.x - d.y).abs() > 1e-4);
        assert!((d.y - d.z).abs() > 1e-4);
    }

    #[test]
    fn displace_all_leaves_reference_untouched() {
        let field = MorphField::live(&BlobOptions::default());
        let reference = vec![Vec3::X, Vec3::Y, Vec3::Z];
        let snapshot = reference.clone();
        let mut live = Vec::new();
        field.displace_all(&reference, 2.0, 0.7, &mut live);
        assert_eq!(reference, snapshot);
        assert_eq!(live.len(), 3);
        assert_ne!(live, reference);
    }

    #[test]
    fn origin_is_a_fixed_point() {
        let field = MorphField::live(&BlobOptions::default());
        assert_eq!(field.displace(Vec3::ZERO, 5.0, 1.0), Vec3::ZERO);
    }
}
