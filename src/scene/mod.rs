//! Scene graph for the blob animation.
//!
//! The scene owns every renderable object: the camera, the light rig, the
//! deformable main blob and the satellites. Render backends only ever read
//! it; the [`BlobAnimator`](crate::engine::BlobAnimator) is its sole writer.

/// Main blob and satellite nodes.
pub mod blob;
/// Materials.
pub mod material;
/// Mesh nodes, geometry and transforms.
pub mod mesh;
/// Sphere tessellation and normal reconstruction.
pub mod mesh_gen;

pub use blob::{MainBlob, SatelliteBlob};
pub use material::Material;
pub use mesh::{Geometry, Mesh, MeshId, Transform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::Camera;
use crate::lighting::LightRig;
use crate::options::Options;

/// All renderable state of the animation.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Viewing camera.
    pub camera: Camera,
    /// Lights.
    pub lights: LightRig,
    /// The deformable main blob (`None` once cleared).
    pub main: Option<MainBlob>,
    /// Satellites in index order.
    pub satellites: Vec<SatelliteBlob>,
}

impl Scene {
    /// Build the camera, lighting rig, main blob and satellites for a
    /// `width` x `height` viewport.
    #[must_use]
    pub fn build(options: &Options, width: u32, height: u32) -> Self {
        let mut rng = match options.satellites.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let main = MainBlob::build(MeshId(0), &options.blob);
        let satellites = (0..options.satellites.count)
            .map(|index| {
                let radius = blob::draw_radius(&options.satellites, &mut rng);
                SatelliteBlob::build(
                    MeshId(index as u32 + 1),
                    index,
                    radius,
                    &options.satellites,
                )
            })
            .collect();

        Self {
            camera: Camera::from_options(&options.camera, width, height),
            lights: LightRig::from_options(&options.lighting),
            main: Some(main),
            satellites,
        }
    }

    /// Every mesh node, main blob first.
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.main
            .iter()
            .map(|m| &m.mesh)
            .chain(self.satellites.iter().map(|s| &s.mesh))
    }

    /// Meshes that should be drawn this frame.
    pub fn visible_meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.meshes().filter(|m| m.visible)
    }

    /// Remove every mesh.
    pub fn clear(&mut self) {
        self.main = None;
        self.satellites.clear();
    }

    /// Whether the scene holds no meshes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main.is_none() && self.satellites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_options() -> Options {
        let mut options = Options::default();
        options.blob.segments = 10;
        options.satellites.segments = 6;
        options.satellites.seed = Some(9);
        options
    }

    #[test]
    fn build_creates_main_and_hidden_satellites() {
        let scene = Scene::build(&small_options(), 800, 600);
        assert_eq!(scene.meshes().count(), 6);
        assert_eq!(scene.visible_meshes().count(), 1);
        let ids: Vec<MeshId> = scene.meshes().map(|m| m.id).collect();
        assert_eq!(ids, (0..6).map(MeshId).collect::<Vec<_>>());
        for (i, sat) in scene.satellites.iter().enumerate() {
            assert_eq!(sat.index, i);
            assert!((0.3..=0.7).contains(&sat.base_radius));
        }
    }

    #[test]
    fn seeded_layouts_repeat() {
        let a = Scene::build(&small_options(), 1, 1);
        let b = Scene::build(&small_options(), 1, 1);
        let ra: Vec<f32> = a.satellites.iter().map(|s| s.base_radius).collect();
        let rb: Vec<f32> = b.satellites.iter().map(|s| s.base_radius).collect();
        assert_eq!(ra, rb);
    }

    #[test]
    fn clear_empties_scene() {
        let mut scene = Scene::build(&small_options(), 1, 1);
        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.meshes().count(), 0);
    }
}
