//! [`RenderBackend`] implementation on wgpu.

use std::collections::HashMap;

use crate::camera::CameraUniform;
use crate::engine::RenderBackend;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::FrameTargets;
use crate::lighting::LightingUniform;
use crate::renderer::mesh_pass::{BlobVertex, GpuMesh};
use crate::renderer::pipeline_util::{self, OPAQUE, TRANSPARENT};
use crate::scene::{Mesh, MeshId, Scene};

/// Draws the blob scene to a wgpu surface.
///
/// Each mesh is uploaded the first time it is seen and its vertices are
/// re-uploaded whenever its geometry revision changes. Opaque meshes are
/// drawn first; fading meshes follow back to front with alpha blending.
pub struct WgpuBackend {
    context: RenderContext,
    targets: FrameTargets,
    camera_buffer: wgpu::Buffer,
    lighting_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    mesh_layout: wgpu::BindGroupLayout,
    opaque_pipeline: wgpu::RenderPipeline,
    transparent_pipeline: wgpu::RenderPipeline,
    meshes: HashMap<MeshId, GpuMesh>,
    disposed: bool,
}

impl WgpuBackend {
    /// Build pipelines and frame uniforms for `context`.
    #[must_use]
    pub fn new(context: RenderContext) -> Self {
        let device = &context.device;
        let shader =
            device.create_shader_module(wgpu::include_wgsl!("shaders/blob.wgsl"));

        let frame_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Blob Frame Layout"),
                entries: &[
                    pipeline_util::uniform_buffer(
                        0,
                        wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ),
                    pipeline_util::uniform_buffer(
                        1,
                        wgpu::ShaderStages::FRAGMENT,
                    ),
                ],
            });
        let mesh_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Blob Mesh Layout"),
                entries: &[pipeline_util::uniform_buffer(
                    0,
                    wgpu::ShaderStages::VERTEX_FRAGMENT,
                )],
            });

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Blob Camera"),
            size: size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let lighting_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Blob Lighting"),
            size: size_of::<LightingUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Blob Frame Bind Group"),
                layout: &frame_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: camera_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: lighting_buffer.as_entire_binding(),
                    },
                ],
            });

        let layouts = [&frame_layout, &mesh_layout];
        let format = context.format();
        let opaque_pipeline = pipeline_util::create_mesh_pipeline(
            device,
            &shader,
            format,
            OPAQUE,
            &layouts,
            BlobVertex::LAYOUT,
        );
        let transparent_pipeline = pipeline_util::create_mesh_pipeline(
            device,
            &shader,
            format,
            TRANSPARENT,
            &layouts,
            BlobVertex::LAYOUT,
        );
        let targets = FrameTargets::new(
            device,
            format,
            context.config.width,
            context.config.height,
        );

        Self {
            context,
            targets,
            camera_buffer,
            lighting_buffer,
            frame_bind_group,
            mesh_layout,
            opaque_pipeline,
            transparent_pipeline,
            meshes: HashMap::new(),
            disposed: false,
        }
    }

    fn sync_targets(&mut self) {
        let format = self.context.format();
        let (width, height) = (self.context.config.width, self.context.config.height);
        if !self.targets.matches(format, width, height) {
            self.targets =
                FrameTargets::new(&self.context.device, format, width, height);
        }
    }

    fn upload(&mut self, scene: &Scene) {
        let mut camera = CameraUniform::new();
        camera.update_view_proj(&scene.camera);
        let queue = &self.context.queue;
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera));
        queue.write_buffer(
            &self.lighting_buffer,
            0,
            bytemuck::bytes_of(&LightingUniform::from_rig(&scene.lights)),
        );

        let device = &self.context.device;
        for mesh in scene.visible_meshes() {
            let _ = self
                .meshes
                .entry(mesh.id)
                .and_modify(|gpu| gpu.sync(device, queue, mesh))
                .or_insert_with(|| GpuMesh::new(device, &self.mesh_layout, mesh));
        }
    }

    fn acquire_frame(&self) -> Option<wgpu::SurfaceTexture> {
        match self.context.get_next_frame() {
            Ok(frame) => Some(frame),
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                log::debug!("surface outdated, reconfiguring");
                self.context.reconfigure();
                None
            }
            Err(wgpu::SurfaceError::Timeout) => None,
            Err(e) => {
                log::error!("failed to acquire surface texture: {e}");
                None
            }
        }
    }
}

/// Fading meshes sorted far to near from `eye`.
fn back_to_front<'a>(
    meshes: impl Iterator<Item = &'a Mesh>,
    eye: glam::Vec3,
) -> Vec<&'a Mesh> {
    let mut sorted: Vec<&Mesh> = meshes.collect();
    sorted.sort_by(|a, b| {
        let da = a.transform.position.distance_squared(eye);
        let db = b.transform.position.distance_squared(eye);
        db.total_cmp(&da)
    });
    sorted
}

impl RenderBackend for WgpuBackend {
    fn set_pixel_ratio(&mut self, ratio: f32) {
        self.context.set_pixel_ratio(ratio);
        self.sync_targets();
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.sync_targets();
    }

    fn render(&mut self, scene: &Scene) {
        if self.disposed || self.context.is_zero_sized() {
            return;
        }
        self.upload(scene);

        let Some(frame) = self.acquire_frame() else {
            return;
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (opaque, fading): (Vec<&Mesh>, Vec<&Mesh>) =
            scene.visible_meshes().partition(|m| !m.material.transparent);
        let fading = back_to_front(fading.into_iter(), scene.camera.eye);

        let mut encoder = self.context.create_encoder();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Blob Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.color_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Discard,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: &self.targets.depth_view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Discard,
                        }),
                        stencil_ops: None,
                    },
                ),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_bind_group(0, &self.frame_bind_group, &[]);

            pass.set_pipeline(&self.opaque_pipeline);
            for mesh in opaque {
                if let Some(gpu) = self.meshes.get(&mesh.id) {
                    gpu.draw(&mut pass);
                }
            }
            pass.set_pipeline(&self.transparent_pipeline);
            for mesh in fading {
                if let Some(gpu) = self.meshes.get(&mesh.id) {
                    gpu.draw(&mut pass);
                }
            }
        }
        self.context.submit(encoder);
        frame.present();
    }

    fn release_mesh(&mut self, id: MeshId) {
        let _ = self.meshes.remove(&id);
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.meshes.clear();
        self.context.surface = None;
        log::debug!("wgpu backend disposed");
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::options::MaterialOptions;
    use crate::scene::{Geometry, Material, Transform};

    fn mesh_at(id: u32, z: f32) -> Mesh {
        Mesh {
            id: MeshId(id),
            geometry: Geometry::sphere(0.5, 4, 3),
            material: Material::from_options(&MaterialOptions::default()),
            transform: Transform {
                position: Vec3::new(0.0, 0.0, z),
                ..Transform::default()
            },
            visible: true,
        }
    }

    #[test]
    fn fading_meshes_draw_far_to_near() {
        let meshes = [mesh_at(1, 4.0), mesh_at(2, -3.0), mesh_at(3, 0.0)];
        let order: Vec<u32> = back_to_front(meshes.iter(), Vec3::new(0.0, 0.0, 5.0))
            .iter()
            .map(|m| m.id.0)
            .collect();
        assert_eq!(order, vec![2, 3, 1]);
    }
}
