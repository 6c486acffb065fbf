//! Shared pipeline state for the blob passes.

use crate::gpu::texture::{self, DEPTH_FORMAT};

/// Single color target for the surface format.
pub fn color_targets(
    format: wgpu::TextureFormat,
    blend: Option<wgpu::BlendState>,
) -> [Option<wgpu::ColorTargetState>; 1] {
    [Some(wgpu::ColorTargetState {
        format,
        blend,
        write_mask: wgpu::ColorWrites::ALL,
    })]
}

/// Depth-stencil state. Transparent passes test against depth but do not
/// write it.
pub fn depth_stencil_state(depth_write: bool) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: depth_write,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Uniform buffer binding visible to the given stages.
pub fn uniform_buffer(
    binding: u32,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

/// Blend and depth configuration of one mesh pipeline.
#[derive(Debug, Clone, Copy)]
pub struct PassKind {
    /// Pipeline label.
    pub label: &'static str,
    /// Color blending, `None` for opaque output.
    pub blend: Option<wgpu::BlendState>,
    /// Whether fragments write depth.
    pub depth_write: bool,
}

/// Opaque meshes: no blending, depth written.
pub const OPAQUE: PassKind = PassKind {
    label: "Blob Opaque",
    blend: None,
    depth_write: true,
};

/// Fading meshes: alpha blended, depth tested only.
pub const TRANSPARENT: PassKind = PassKind {
    label: "Blob Transparent",
    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
    depth_write: false,
};

/// Create an indexed triangle-list pipeline with `vs_main` / `fs_main`
/// entry points.
pub fn create_mesh_pipeline(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    kind: PassKind,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
    vertex_layout: wgpu::VertexBufferLayout<'static>,
) -> wgpu::RenderPipeline {
    let pipeline_layout =
        device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{} Layout", kind.label)),
            bind_group_layouts,
            push_constant_ranges: &[],
        });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(kind.label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &color_targets(format, kind.blend),
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(depth_stencil_state(kind.depth_write)),
        multisample: texture::multisample_state(),
        multiview: None,
        cache: None,
    })
}
