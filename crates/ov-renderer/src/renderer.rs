//! Main renderer
//!
//! Owns the camera, light, and mesh resources and drives the two render
//! paths: a monoscopic full-viewport pass and a stereoscopic pass that draws
//! the scene twice into the left and right halves of the target.

use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::camera::{Camera, Eye};
use crate::config::{LightingConfig, RendererConfig};
use crate::light::DirectionalLight;
use crate::mesh::{MeshData, MeshRenderer};
use crate::pipeline::{
    create_camera_bind_group, create_camera_bind_group_layout, create_depth_texture,
    create_msaa_texture,
};

/// Mesh entry with its instance bind group
pub struct MeshEntry {
    /// Mesh data including vertex and instance buffers.
    pub data: MeshData,
    /// Bind group for the instance uniform.
    pub bind_group: wgpu::BindGroup,
}

/// Main renderer
///
/// Holds one mesh (the interleaved octahedron) and renders it either
/// monoscopically or as a side-by-side stereo pair. Geometry is uploaded
/// once; per-frame work is uniform updates and the render pass itself.
pub struct Renderer {
    camera: Camera,
    camera_buffer: wgpu::Buffer,
    left_eye_buffer: wgpu::Buffer,
    right_eye_buffer: wgpu::Buffer,
    camera_bind_group_layout: wgpu::BindGroupLayout,
    camera_bind_group: wgpu::BindGroup,
    left_eye_bind_group: wgpu::BindGroup,
    right_eye_bind_group: wgpu::BindGroup,

    light: DirectionalLight,
    light_buffer: wgpu::Buffer,
    light_bind_group: wgpu::BindGroup,

    mesh_renderer: MeshRenderer,
    mesh: Option<MeshEntry>,

    #[allow(dead_code)] // Held for GPU resource lifetime
    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,
    #[allow(dead_code)] // Held for GPU resource lifetime
    msaa_texture: Option<wgpu::Texture>,
    msaa_view: Option<wgpu::TextureView>,

    clear_color: wgpu::Color,
    eye_separation: f32,
    sample_count: u32,

    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Creates a new renderer with the specified device and configuration.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        config: &RendererConfig,
    ) -> Self {
        let sample_count = config.viewport.msaa_sample_count.max(1);

        let camera = Camera::with_config(width as f32 / height as f32, &config.camera);

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera.uniform()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let left_eye_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Left Eye Camera Buffer"),
            contents: bytemuck::cast_slice(&[
                camera.eye_uniform(Eye::Left, config.stereo.eye_separation)
            ]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let right_eye_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Right Eye Camera Buffer"),
            contents: bytemuck::cast_slice(&[
                camera.eye_uniform(Eye::Right, config.stereo.eye_separation)
            ]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group_layout = create_camera_bind_group_layout(device);
        let camera_bind_group =
            create_camera_bind_group(device, &camera_bind_group_layout, &camera_buffer, "Mono");
        let left_eye_bind_group = create_camera_bind_group(
            device,
            &camera_bind_group_layout,
            &left_eye_buffer,
            "Left Eye",
        );
        let right_eye_bind_group = create_camera_bind_group(
            device,
            &camera_bind_group_layout,
            &right_eye_buffer,
            "Right Eye",
        );

        let mesh_renderer =
            MeshRenderer::new(device, format, sample_count, &camera_bind_group_layout);

        let light = DirectionalLight::from_config(&config.lighting);
        let light_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Light Buffer"),
            contents: bytemuck::cast_slice(&[light.uniform()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let light_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Light Bind Group"),
            layout: mesh_renderer.light_bind_group_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: light_buffer.as_entire_binding(),
            }],
        });

        let (depth_texture, depth_view) =
            create_depth_texture(device, width, height, sample_count);
        let (msaa_texture, msaa_view) =
            match create_msaa_texture(device, format, width, height, sample_count) {
                Some((texture, view)) => (Some(texture), Some(view)),
                None => (None, None),
            };

        Self {
            camera,
            camera_buffer,
            left_eye_buffer,
            right_eye_buffer,
            camera_bind_group_layout,
            camera_bind_group,
            left_eye_bind_group,
            right_eye_bind_group,
            light,
            light_buffer,
            light_bind_group,
            mesh_renderer,
            mesh: None,
            depth_texture,
            depth_view,
            msaa_texture,
            msaa_view,
            clear_color: config.clear_color(),
            eye_separation: config.stereo.eye_separation,
            sample_count,
            format,
            width,
            height,
        }
    }

    /// Upload an interleaved position+normal buffer as the scene mesh.
    ///
    /// Replaces any previously set mesh. Called once at startup for the
    /// octahedron; the interleaving itself happens on the caller's side.
    pub fn set_mesh(&mut self, device: &wgpu::Device, interleaved: &[f32], color: [f32; 4]) {
        let data = MeshData::from_interleaved(device, interleaved, color);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Mesh Instance Bind Group"),
            layout: self.mesh_renderer.instance_bind_group_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: data.instance_buffer.as_entire_binding(),
            }],
        });
        self.mesh = Some(MeshEntry { data, bind_group });
    }

    /// Update the mesh model transform
    pub fn set_model_transform(&mut self, queue: &wgpu::Queue, transform: Mat4) {
        if let Some(entry) = &mut self.mesh {
            entry.data.update_transform(queue, transform);
        }
    }

    /// Update the mesh base color
    pub fn set_model_color(&mut self, queue: &wgpu::Queue, color: [f32; 4]) {
        if let Some(entry) = &mut self.mesh {
            entry.data.update_color(queue, color);
        }
    }

    /// Update lighting from a configuration
    pub fn set_lighting(&mut self, queue: &wgpu::Queue, config: &LightingConfig) {
        self.light = DirectionalLight::from_config(config);
        queue.write_buffer(
            &self.light_buffer,
            0,
            bytemuck::cast_slice(&[self.light.uniform()]),
        );
    }

    /// Update the background clear color
    pub fn set_clear_color(&mut self, color: [f32; 4]) {
        self.clear_color = wgpu::Color {
            r: f64::from(color[0]),
            g: f64::from(color[1]),
            b: f64::from(color[2]),
            a: f64::from(color[3]),
        };
    }

    /// Update the stereo eye separation
    pub fn set_eye_separation(&mut self, separation: f32) {
        self.eye_separation = separation;
    }

    /// Get the camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Get the camera mutably
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Target texture format
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Resize the render targets
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.camera.update_aspect(width as f32 / height as f32);

        let (depth_texture, depth_view) =
            create_depth_texture(device, width, height, self.sample_count);
        self.depth_texture = depth_texture;
        self.depth_view = depth_view;

        let (msaa_texture, msaa_view) =
            match create_msaa_texture(device, self.format, width, height, self.sample_count) {
                Some((texture, view)) => (Some(texture), Some(view)),
                None => (None, None),
            };
        self.msaa_texture = msaa_texture;
        self.msaa_view = msaa_view;
    }

    fn update_camera(&self, queue: &wgpu::Queue) {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera.uniform()]),
        );
        queue.write_buffer(
            &self.left_eye_buffer,
            0,
            bytemuck::cast_slice(&[self.camera.eye_uniform(Eye::Left, self.eye_separation)]),
        );
        queue.write_buffer(
            &self.right_eye_buffer,
            0,
            bytemuck::cast_slice(&[self.camera.eye_uniform(Eye::Right, self.eye_separation)]),
        );
    }

    fn begin_render_pass<'encoder>(
        &self,
        encoder: &'encoder mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) -> wgpu::RenderPass<'encoder> {
        // With MSAA, render to the multisample texture and resolve to the
        // output; otherwise render directly to the output.
        let color_attachment = if let Some(msaa_view) = &self.msaa_view {
            wgpu::RenderPassColorAttachment {
                view: msaa_view,
                resolve_target: Some(view),
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            }
        } else {
            wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            }
        };

        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Main Render Pass"),
            color_attachments: &[Some(color_attachment)],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        })
    }

    /// Render the scene monoscopically across the full viewport
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        queue: &wgpu::Queue,
    ) {
        self.update_camera(queue);

        let mut render_pass = self.begin_render_pass(encoder, view);

        if let Some(entry) = &self.mesh {
            self.mesh_renderer.render(
                &mut render_pass,
                &entry.data,
                &self.camera_bind_group,
                &entry.bind_group,
                &self.light_bind_group,
            );
        }
    }

    /// Render the scene as a side-by-side stereo pair.
    ///
    /// One pass, two viewports: the left half uses the left-eye camera, the
    /// right half the right-eye camera.
    pub fn render_stereo(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        queue: &wgpu::Queue,
    ) {
        self.update_camera(queue);

        let mut render_pass = self.begin_render_pass(encoder, view);

        let Some(entry) = &self.mesh else {
            return;
        };

        let half_width = self.width as f32 * 0.5;
        let height = self.height as f32;

        render_pass.set_viewport(0.0, 0.0, half_width, height, 0.0, 1.0);
        self.mesh_renderer.render(
            &mut render_pass,
            &entry.data,
            &self.left_eye_bind_group,
            &entry.bind_group,
            &self.light_bind_group,
        );

        render_pass.set_viewport(half_width, 0.0, half_width, height, 0.0, 1.0);
        self.mesh_renderer.render(
            &mut render_pass,
            &entry.data,
            &self.right_eye_bind_group,
            &entry.bind_group,
            &self.light_bind_group,
        );
    }

    /// Get camera bind group layout for external use
    pub fn camera_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.camera_bind_group_layout
    }
}
