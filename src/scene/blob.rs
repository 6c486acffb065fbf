//! The deformable main blob and its satellites.

use glam::{Vec2, Vec3};
use rand::Rng;

use super::material::Material;
use super::mesh::{Geometry, Mesh, MeshId, Transform};
use crate::animation::motion::{
    blob_rotation, satellite_pose, satellite_rest_position,
};
use crate::animation::{MorphField, Presence};
use crate::options::{BlobOptions, SatelliteOptions};

/// The large morphing mesh.
#[derive(Debug, Clone)]
pub struct MainBlob {
    /// Scene node.
    pub mesh: Mesh,
    field: MorphField,
}

impl MainBlob {
    /// Tessellate the reference sphere and give the live shape its organic
    /// resting silhouette.
    #[must_use]
    pub fn build(id: MeshId, options: &BlobOptions) -> Self {
        let mut geometry =
            Geometry::sphere(options.radius, options.segments, options.segments);
        let rest = MorphField::rest(options);
        geometry.reshape(|reference, out| {
            rest.displace_all(reference, 0.0, 1.0, out);
        });

        Self {
            mesh: Mesh {
                id,
                geometry,
                material: Material::from_options(&options.material),
                transform: Transform {
                    position: Vec3::from(options.offset),
                    ..Transform::default()
                },
                visible: true,
            },
            field: MorphField::live(options),
        }
    }

    /// Re-derive every live vertex from the reference shape at time `t`,
    /// scaled by `phase_scale`, and rotate with pointer parallax.
    pub fn update(
        &mut self,
        options: &BlobOptions,
        t: f32,
        phase_scale: f32,
        pointer: Vec2,
    ) {
        let field = &self.field;
        self.mesh.geometry.reshape(|reference, out| {
            field.displace_all(reference, t, phase_scale, out);
        });
        self.mesh.transform.rotation = blob_rotation(options, t, pointer);
    }

    /// Apply visibility and opacity for this frame.
    pub fn apply_presence(&mut self, presence: Presence) {
        self.mesh.visible = presence.visible;
        if presence.visible {
            self.mesh.material.apply_presence(presence);
        }
    }
}

/// One of the small blobs shown while the main blob is broken apart.
#[derive(Debug, Clone)]
pub struct SatelliteBlob {
    /// Scene node.
    pub mesh: Mesh,
    /// Sphere radius drawn at creation.
    pub base_radius: f32,
    /// Position in the satellite collection; offsets its orbit and fades.
    pub index: usize,
}

impl SatelliteBlob {
    /// Hidden satellite at its initial ellipse position.
    #[must_use]
    pub fn build(
        id: MeshId,
        index: usize,
        radius: f32,
        options: &SatelliteOptions,
    ) -> Self {
        Self {
            mesh: Mesh {
                id,
                geometry: Geometry::sphere(
                    radius,
                    options.segments,
                    options.segments,
                ),
                material: Material::from_options(&options.material),
                transform: Transform {
                    position: satellite_rest_position(options, index),
                    ..Transform::default()
                },
                visible: false,
            },
            base_radius: radius,
            index,
        }
    }

    /// Orbit, spin and pulse at time `t`. `steps` is the number of frame
    /// steps since the last update and scales the incremental spin.
    pub fn update(
        &mut self,
        options: &SatelliteOptions,
        t: f32,
        center_x: f32,
        steps: f32,
    ) {
        let (position, scale) = satellite_pose(options, self.index, t, center_x);
        let [spin_x, spin_y] = options.spin;
        let transform = &mut self.mesh.transform;
        transform.position = position;
        transform.rotation.x += spin_x * steps;
        transform.rotation.y += spin_y * steps;
        transform.scale = scale;
    }

    /// Apply visibility and opacity for this frame.
    pub fn apply_presence(&mut self, presence: Presence) {
        self.mesh.visible = presence.visible;
        self.mesh.material.apply_presence(presence);
    }
}

/// Draw one satellite radius in `[min_radius, min_radius + radius_spread)`.
pub fn draw_radius(options: &SatelliteOptions, rng: &mut impl Rng) -> f32 {
    if options.radius_spread > 0.0 {
        options.min_radius + rng.random_range(0.0..options.radius_spread)
    } else {
        options.min_radius
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn small_blob_options() -> BlobOptions {
        BlobOptions {
            segments: 12,
            ..BlobOptions::default()
        }
    }

    #[test]
    fn build_perturbs_live_shape_only() {
        let blob = MainBlob::build(MeshId(0), &small_blob_options());
        let g = &blob.mesh.geometry;
        for p in g.reference() {
            assert!((p.length() - 2.5).abs() < 1e-4);
        }
        let off_sphere = g
            .positions()
            .iter()
            .filter(|p| (p.length() - 2.5).abs() > 1e-3)
            .count();
        assert!(off_sphere > g.positions().len() / 2);
        assert!(blob.mesh.visible);
        assert_eq!(blob.mesh.transform.position, Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn update_derives_from_reference_each_frame() {
        let options = small_blob_options();
        let mut a = MainBlob::build(MeshId(0), &options);
        let mut b = MainBlob::build(MeshId(1), &options);
        // Same inputs give identical output regardless of history.
        a.update(&options, 1.0, 0.9, Vec2::ZERO);
        a.update(&options, 2.0, 0.8, Vec2::ZERO);
        b.update(&options, 2.0, 0.8, Vec2::ZERO);
        assert_eq!(a.mesh.geometry.positions(), b.mesh.geometry.positions());
        assert_eq!(a.mesh.geometry.revision(), 3);
    }

    #[test]
    fn hidden_main_keeps_last_opacity() {
        let mut blob = MainBlob::build(MeshId(0), &small_blob_options());
        blob.apply_presence(Presence {
            visible: true,
            opacity: 0.4,
        });
        blob.apply_presence(Presence::HIDDEN);
        assert!(!blob.mesh.visible);
        assert_eq!(blob.mesh.material.opacity, 0.4);
        assert!(blob.mesh.material.transparent);
    }

    #[test]
    fn satellites_start_hidden_on_ellipse() {
        let options = SatelliteOptions::default();
        let sat = SatelliteBlob::build(MeshId(3), 0, 0.5, &options);
        assert!(!sat.mesh.visible);
        assert!(sat
            .mesh
            .transform
            .position
            .abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-6));
        assert!((sat.mesh.geometry.reference()[0].length() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn satellite_spin_accumulates_per_step() {
        let options = SatelliteOptions::default();
        let mut sat = SatelliteBlob::build(MeshId(3), 2, 0.5, &options);
        sat.update(&options, 0.1, 0.5, 1.0);
        sat.update(&options, 0.2, 0.5, 2.0);
        assert!((sat.mesh.transform.rotation.x - 0.015).abs() < 1e-6);
        assert!((sat.mesh.transform.rotation.y - 0.021).abs() < 1e-6);
    }

    #[test]
    fn radii_fall_in_range_and_are_seed_stable() {
        let options = SatelliteOptions::default();
        let mut rng = StdRng::seed_from_u64(42);
        let first: Vec<f32> =
            (0..50).map(|_| draw_radius(&options, &mut rng)).collect();
        assert!(first.iter().all(|r| (0.3..=0.7).contains(r)));
        let mut rng = StdRng::seed_from_u64(42);
        let again: Vec<f32> =
            (0..50).map(|_| draw_radius(&options, &mut rng)).collect();
        assert_eq!(first, again);

        let fixed = SatelliteOptions {
            radius_spread: 0.0,
            ..options
        };
        assert_eq!(draw_radius(&fixed, &mut rng), 0.3);
    }
}
