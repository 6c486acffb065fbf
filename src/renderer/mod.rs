//! wgpu rendering of the blob scene.
//!
//! [`WgpuBackend`] implements [`RenderBackend`](crate::engine::RenderBackend)
//! with a single forward pass: opaque meshes first, then fading meshes with
//! alpha blending.

mod backend;
pub mod mesh_pass;
pub(crate) mod pipeline_util;

pub use backend::WgpuBackend;
