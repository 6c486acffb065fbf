use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Camera {
    /// Camera at the configured resting eye, looking at the configured
    /// target, with the aspect ratio of a `width` x `height` viewport.
    #[must_use]
    pub fn from_options(options: &CameraOptions, width: u32, height: u32) -> Self {
        let mut camera = Self {
            eye: Vec3::from(options.eye),
            target: Vec3::from(options.target),
            up: Vec3::Y,
            aspect: 1.0,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        camera.set_viewport(width, height);
        camera
    }

    /// Update the aspect ratio for a new viewport size.
    ///
    /// A zero-area viewport keeps the previous aspect so the projection
    /// never sees a NaN or infinite ratio.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Move the eye and keep looking at the target.
    pub fn look_from(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        self.build_projection() * view
    }

    /// Projection matrix alone.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default(), 1, 1)
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_height_keeps_finite_aspect() {
        let mut camera = Camera::from_options(&CameraOptions::default(), 800, 400);
        assert_eq!(camera.aspect, 2.0);
        camera.set_viewport(0, 0);
        camera.set_viewport(640, 0);
        assert_eq!(camera.aspect, 2.0);
        assert!(camera.build_matrix().is_finite());
    }

    #[test]
    fn zero_sized_construction_is_usable() {
        let camera = Camera::from_options(&CameraOptions::default(), 0, 0);
        assert_eq!(camera.aspect, 1.0);
        assert!(camera.build_projection().is_finite());
    }

    #[test]
    fn uniform_tracks_camera() {
        let mut camera = Camera::default();
        camera.look_from(Vec3::new(0.0, 0.0, 10.0));
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);
        assert_eq!(uniform.position, [0.0, 0.0, 10.0]);
        // The target sits in the middle of the view.
        let clip = camera.build_matrix() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((clip.x / clip.w).abs() < 1e-6);
        assert!((clip.y / clip.w).abs() < 1e-6);
    }
}
