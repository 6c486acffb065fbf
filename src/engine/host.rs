//! Seams to the host environment: the drawing-surface container and the
//! renderer that rasterizes the scene.

use crate::input::Rect;
use crate::scene::{MeshId, Scene};

/// The sizable element the output surface lives in.
pub trait SurfaceHost {
    /// Current client size in pixels. May be `(0, 0)`.
    fn client_size(&self) -> (u32, u32);

    /// Bounding rect in the same space as pointer events.
    fn bounding_rect(&self) -> Rect {
        let (width, height) = self.client_size();
        Rect::from_size(width, height)
    }

    /// Ratio of physical to logical pixels.
    fn device_pixel_ratio(&self) -> f32 {
        1.0
    }

    /// Insert the output surface into the container.
    fn attach_surface(&mut self);

    /// Remove the output surface from the container.
    fn detach_surface(&mut self);
}

/// Rasterizer for a [`Scene`].
///
/// Backends key GPU resources on [`MeshId`] and may upload lazily on the
/// first `render` that sees a mesh.
pub trait RenderBackend {
    /// Pixel ratio applied on top of the logical output size.
    fn set_pixel_ratio(&mut self, _ratio: f32) {}

    /// Resize the output surface (logical pixels).
    fn set_size(&mut self, width: u32, height: u32);

    /// Draw every visible mesh of `scene`.
    fn render(&mut self, scene: &Scene);

    /// Free the geometry/material resources held for one mesh.
    fn release_mesh(&mut self, id: MeshId);

    /// Free everything else. No further calls follow.
    fn dispose(&mut self);
}
