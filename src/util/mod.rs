//! Shared utilities.

/// sRGB to linear color conversion.
pub mod color;
/// Frame timestamps and smoothed FPS reporting.
pub mod frame_timing;
