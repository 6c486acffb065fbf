//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, growable vertex buffers and
//! the multisampled frame targets used by the blob renderer.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Multisampled color and depth attachments sized to the surface.
pub mod texture;
