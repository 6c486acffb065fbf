//! Multisampled attachments for the blob pass.

/// Format of every depth attachment the renderer creates.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Samples per pixel of the blob pass. 4x is supported by every
/// renderable surface format wgpu guarantees.
pub const SAMPLE_COUNT: u32 = 4;

/// Multisample state shared by every blob pipeline.
#[must_use]
pub fn multisample_state() -> wgpu::MultisampleState {
    wgpu::MultisampleState {
        count: SAMPLE_COUNT,
        ..Default::default()
    }
}

fn attachment(
    device: &wgpu::Device,
    label: &str,
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: SAMPLE_COUNT,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

/// Multisampled color and depth attachments, recreated whenever the
/// surface is resized. The color attachment resolves into the frame.
pub struct FrameTargets {
    /// Multisampled color texture.
    pub color: wgpu::Texture,
    /// View rendered into before resolving.
    pub color_view: wgpu::TextureView,
    /// Multisampled depth texture.
    pub depth: wgpu::Texture,
    /// View used as the depth attachment.
    pub depth_view: wgpu::TextureView,
}

impl FrameTargets {
    /// Create targets in `format` with the given physical dimensions.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (color, color_view) =
            attachment(device, "Blob MSAA Color", format, width, height);
        let (depth, depth_view) =
            attachment(device, "Blob Depth", DEPTH_FORMAT, width, height);
        Self {
            color,
            color_view,
            depth,
            depth_view,
        }
    }

    /// Whether the targets match a surface format and physical size.
    #[must_use]
    pub fn matches(
        &self,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> bool {
        let size = self.color.size();
        self.color.format() == format
            && size.width == width.max(1)
            && size.height == height.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipelines_sample_four_times_per_pixel() {
        let state = multisample_state();
        assert_eq!(state.count, 4);
        assert_eq!(state.mask, !0);
        assert!(!state.alpha_to_coverage_enabled);
    }
}
