//! Octahedron mesh renderer
//!
//! Uploads the interleaved position+normal buffer produced by
//! `ov_core::interleave_with_normals` and draws it with a directional-light
//! pipeline. The mesh is a non-indexed triangle list; the interleaver has
//! already expanded shared vertices.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::constants::viewport::DEPTH_FORMAT;
use crate::vertex::{FLOATS_PER_VERTEX, MeshVertex};

/// Mesh instance uniform: model transform and base color
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct MeshInstance {
    /// Model transformation matrix.
    pub model: [[f32; 4]; 4],
    /// Base color (RGBA).
    pub color: [f32; 4],
}

impl Default for MeshInstance {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: [0.7, 0.7, 0.7, 1.0],
        }
    }
}

/// GPU mesh data
pub struct MeshData {
    /// Vertex buffer containing the interleaved geometry.
    pub vertex_buffer: wgpu::Buffer,
    /// Number of vertices to draw.
    pub vertex_count: u32,
    /// Instance data (transform, color).
    pub instance: MeshInstance,
    /// GPU buffer for instance data.
    pub instance_buffer: wgpu::Buffer,
}

impl MeshData {
    /// Create mesh data from an interleaved position+normal buffer.
    ///
    /// `interleaved` must be the output of the normal interleaver for
    /// position-only input (blocks of 6 floats); anything else will not
    /// line up with [`MeshVertex`].
    pub fn from_interleaved(
        device: &wgpu::Device,
        interleaved: &[f32],
        color: [f32; 4],
    ) -> Self {
        debug_assert_eq!(interleaved.len() % FLOATS_PER_VERTEX, 0);
        let vertex_count = (interleaved.len() / FLOATS_PER_VERTEX) as u32;

        tracing::info!(
            "Creating MeshData: {} floats, {} vertices, {} triangles",
            interleaved.len(),
            vertex_count,
            vertex_count / 3
        );

        let vertices: &[MeshVertex] = bytemuck::cast_slice(interleaved);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance = MeshInstance {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color,
        };

        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Instance Buffer"),
            contents: bytemuck::cast_slice(&[instance]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            vertex_buffer,
            vertex_count,
            instance,
            instance_buffer,
        }
    }

    /// Update instance transform
    pub fn update_transform(&mut self, queue: &wgpu::Queue, transform: Mat4) {
        self.instance.model = transform.to_cols_array_2d();
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&[self.instance]),
        );
    }

    /// Update instance color
    pub fn update_color(&mut self, queue: &wgpu::Queue, color: [f32; 4]) {
        self.instance.color = color;
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&[self.instance]),
        );
    }
}

/// Mesh renderer with directional lighting
pub struct MeshRenderer {
    pipeline: wgpu::RenderPipeline,
    instance_bind_group_layout: wgpu::BindGroupLayout,
    light_bind_group_layout: wgpu::BindGroupLayout,
}

impl MeshRenderer {
    /// Creates a new mesh renderer.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        sample_count: u32,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Mesh Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        // Per-mesh instance bind group layout (transform + color)
        let instance_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Mesh Instance Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        // Light bind group layout (group 2)
        let light_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Light Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mesh Pipeline Layout"),
            bind_group_layouts: &[
                camera_bind_group_layout,
                &instance_bind_group_layout,
                &light_bind_group_layout,
            ],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mesh Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[MeshVertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // The octahedron is closed and consistently wound
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            instance_bind_group_layout,
            light_bind_group_layout,
        }
    }

    /// Bind group layout for per-mesh instance uniforms
    pub fn instance_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.instance_bind_group_layout
    }

    /// Bind group layout for the light uniform
    pub fn light_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.light_bind_group_layout
    }

    /// Draw a mesh with the given camera, instance, and light bind groups
    pub fn render(
        &self,
        render_pass: &mut wgpu::RenderPass<'_>,
        mesh: &MeshData,
        camera_bind_group: &wgpu::BindGroup,
        instance_bind_group: &wgpu::BindGroup,
        light_bind_group: &wgpu::BindGroup,
    ) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);
        render_pass.set_bind_group(1, instance_bind_group, &[]);
        render_pass.set_bind_group(2, light_bind_group, &[]);
        render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        render_pass.draw(0..mesh.vertex_count, 0..1);
    }
}
