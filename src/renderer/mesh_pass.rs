//! Per-mesh GPU resources: interleaved vertices, indices, and the model /
//! material uniform.

use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::gpu::dynamic_buffer::DynamicBuffer;
use crate::scene::{Geometry, Mesh};
use crate::util::color::srgb_to_linear_rgb;

/// Interleaved vertex consumed by `blob.wgsl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlobVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Object-space normal.
    pub normal: [f32; 3],
}

impl BlobVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Vertex buffer layout: position at location 0, normal at 1.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> =
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        };
}

/// Interleave a geometry's live positions and normals.
#[must_use]
pub fn interleave(geometry: &Geometry) -> Vec<BlobVertex> {
    geometry
        .positions()
        .iter()
        .zip(geometry.normals())
        .map(|(p, n)| BlobVertex {
            position: p.to_array(),
            normal: n.to_array(),
        })
        .collect()
}

/// Model and material uniform.
/// NOTE: Must match the WGSL `MeshUniform` struct (160 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniform {
    /// Model matrix.
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of the model matrix.
    pub normal_matrix: [[f32; 4]; 4],
    /// Base color (rgb) and opacity (a).
    pub base_color: [f32; 4],
    /// Metalness, roughness, clearcoat, clearcoat roughness.
    pub surface: [f32; 4],
}

impl MeshUniform {
    /// Pack a mesh's transform and material, with the base color in
    /// linear light.
    #[must_use]
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let model = mesh.transform.matrix();
        let normal_matrix = if model.determinant().abs() > f32::EPSILON {
            model.inverse().transpose()
        } else {
            Mat4::IDENTITY
        };
        let m = &mesh.material;
        let [r, g, b] = srgb_to_linear_rgb(m.color);
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: normal_matrix.to_cols_array_2d(),
            base_color: [r, g, b, m.opacity],
            surface: [
                m.metalness,
                m.roughness,
                m.clearcoat,
                m.clearcoat_roughness,
            ],
        }
    }
}

/// GPU-side copy of one scene mesh.
pub struct GpuMesh {
    vertices: DynamicBuffer<BlobVertex>,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    revision: u64,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl GpuMesh {
    /// Upload `mesh` for the first time.
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        mesh: &Mesh,
    ) -> Self {
        let label = format!("Blob Mesh {}", mesh.id.0);
        let geometry = &mesh.geometry;
        let vertices = DynamicBuffer::new_with_data(
            device,
            &label,
            &interleave(geometry),
            wgpu::BufferUsages::VERTEX,
        );
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Indices")),
                contents: bytemuck::cast_slice(geometry.indices()),
                usage: wgpu::BufferUsages::INDEX,
            });
        let uniform_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Uniform")),
                contents: bytemuck::bytes_of(&MeshUniform::from_mesh(mesh)),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} Bind Group")),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            vertices,
            index_buffer,
            index_count: geometry.indices().len() as u32,
            revision: geometry.revision(),
            uniform_buffer,
            bind_group,
        }
    }

    /// Bring the GPU copy up to date: vertices only when the geometry
    /// revision moved, the uniform every call.
    pub fn sync(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        mesh: &Mesh,
    ) {
        if mesh.geometry.revision() != self.revision {
            let _ =
                self.vertices
                    .write(device, queue, &interleave(&mesh.geometry));
            self.revision = mesh.geometry.revision();
        }
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&MeshUniform::from_mesh(mesh)),
        );
    }

    /// Bind and draw. The frame bind group must already be set at group 0.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        if self.index_count == 0 || self.vertices.is_empty() {
            return;
        }
        render_pass.set_bind_group(1, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertices.buffer().slice(..));
        render_pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::{Material, MeshId, Transform};
    use crate::options::MaterialOptions;

    fn mesh() -> Mesh {
        Mesh {
            id: MeshId(3),
            geometry: Geometry::sphere(1.0, 8, 6),
            material: Material::from_options(&MaterialOptions::default()),
            transform: Transform {
                position: Vec3::new(1.0, 2.0, 3.0),
                rotation: Vec3::ZERO,
                scale: 2.0,
            },
            visible: true,
        }
    }

    #[test]
    fn uniform_layout_matches_shader() {
        assert_eq!(size_of::<MeshUniform>(), 160);
        assert_eq!(size_of::<BlobVertex>(), 24);
    }

    #[test]
    fn interleave_pairs_positions_with_normals() {
        let m = mesh();
        let vertices = interleave(&m.geometry);
        assert_eq!(vertices.len(), m.geometry.positions().len());
        let v = vertices[4];
        assert_eq!(v.position, m.geometry.positions()[4].to_array());
        assert_eq!(v.normal, m.geometry.normals()[4].to_array());
    }

    #[test]
    fn uniform_carries_transform_and_opacity() {
        let mut m = mesh();
        m.material.opacity = 0.25;
        let u = MeshUniform::from_mesh(&m);
        assert_eq!(u.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(u.model[0][0], 2.0);
        assert_eq!(u.base_color[3], 0.25);
        assert!((u.normal_matrix[0][0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn uniform_base_color_is_linear() {
        let mut m = mesh();
        m.material.color = [0.102; 3];
        let u = MeshUniform::from_mesh(&m);
        assert!((u.base_color[0] - 0.0103).abs() < 1e-4);
        assert_eq!(u.base_color[3], 1.0);
    }

    #[test]
    fn degenerate_scale_uses_identity_normals() {
        let mut m = mesh();
        m.transform.scale = 0.0;
        let u = MeshUniform::from_mesh(&m);
        assert_eq!(u.normal_matrix, Mat4::IDENTITY.to_cols_array_2d());
    }
}
