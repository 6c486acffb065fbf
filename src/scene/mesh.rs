//! Renderable mesh node: geometry, material, transform and visibility.

use std::sync::Arc;

use glam::{EulerRot, Mat4, Quat, Vec3};

use super::material::Material;
use super::mesh_gen::{compute_vertex_normals, uv_sphere};

/// Stable identifier the render backend keys its GPU resources on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub u32);

/// Vertex data of one mesh.
///
/// The reference shape is shared-immutable; only the live positions and
/// normals are ever written. Every write bumps [`revision`](Self::revision)
/// so backends know when to re-upload.
#[derive(Debug, Clone)]
pub struct Geometry {
    reference: Arc<[Vec3]>,
    indices: Arc<[u32]>,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    revision: u64,
}

impl Geometry {
    /// Geometry whose live positions start equal to the reference shape.
    #[must_use]
    pub fn new(reference: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let positions = reference.clone();
        let mut normals = Vec::new();
        compute_vertex_normals(&positions, &indices, &mut normals);
        Self {
            reference: reference.into(),
            indices: indices.into(),
            positions,
            normals,
            revision: 0,
        }
    }

    /// UV sphere of the given radius.
    #[must_use]
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let (positions, indices) =
            uv_sphere(radius, width_segments, height_segments);
        Self::new(positions, indices)
    }

    /// The immutable reference shape.
    #[must_use]
    pub fn reference(&self) -> &[Vec3] {
        &self.reference
    }

    /// Current live positions.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Current vertex normals.
    #[must_use]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Triangle indices.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of live-vertex writes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Recompute live positions from the reference shape, then the normals.
    pub fn reshape(&mut self, f: impl Fn(&[Vec3], &mut Vec<Vec3>)) {
        f(&self.reference, &mut self.positions);
        compute_vertex_normals(&self.positions, &self.indices, &mut self.normals);
        self.revision += 1;
    }
}

/// Position, Euler rotation (XYZ order) and uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space translation.
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    /// Uniform scale factor.
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform {
    /// Model matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            rotation,
            self.position,
        )
    }
}

/// A drawable node in the scene graph.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Backend resource key.
    pub id: MeshId,
    /// Vertex data.
    pub geometry: Geometry,
    /// Surface material.
    pub material: Material,
    /// Placement in the world.
    pub transform: Transform,
    /// Whether the mesh is drawn.
    pub visible: bool,
}
