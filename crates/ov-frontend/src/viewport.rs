//! Viewport rendering state

use std::sync::Arc;

use glam::Mat4;

use ov_core::{generate_octahedron_mesh, interleave_with_normals};
use ov_renderer::{Renderer, RendererConfig};

/// Render texture for the viewport
struct RenderTexture {
    #[allow(dead_code)]
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    egui_texture_id: egui::TextureId,
    width: u32,
    height: u32,
}

/// Viewport rendering state
pub struct ViewportState {
    /// The renderer driving the offscreen texture.
    pub renderer: Renderer,
    /// Shared GPU device handle.
    pub device: Arc<wgpu::Device>,
    /// Shared GPU queue handle.
    pub queue: Arc<wgpu::Queue>,
    render_texture: Option<RenderTexture>,
}

impl ViewportState {
    /// Create a new viewport state with the octahedron mesh loaded.
    ///
    /// The mesh is interleaved once here, before the frame loop ever runs;
    /// rendering only re-uploads uniforms.
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        format: wgpu::TextureFormat,
        config: &RendererConfig,
    ) -> Self {
        let mut renderer = Renderer::new(&device, format, 800, 600, config);

        let positions = generate_octahedron_mesh();
        match interleave_with_normals(&positions, 3, 0) {
            Ok(interleaved) => {
                renderer.set_mesh(&device, &interleaved, config.model.color);
            }
            Err(e) => {
                tracing::error!("Failed to interleave octahedron mesh: {e}");
            }
        }

        Self {
            renderer,
            device,
            queue,
            render_texture: None,
        }
    }

    /// Ensure the render texture matches the requested size
    pub fn ensure_texture(
        &mut self,
        width: u32,
        height: u32,
        egui_renderer: &mut egui_wgpu::Renderer,
    ) -> egui::TextureId {
        let width = width.max(1);
        let height = height.max(1);

        let needs_recreate = self
            .render_texture
            .as_ref()
            .is_none_or(|t| t.width != width || t.height != height);

        if needs_recreate {
            // Free old texture if exists
            if let Some(old) = self.render_texture.take() {
                egui_renderer.free_texture(&old.egui_texture_id);
            }

            let texture = self.device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Viewport Render Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: self.renderer.format(),
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                    | wgpu::TextureUsages::TEXTURE_BINDING,
                view_formats: &[],
            });

            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

            let egui_texture_id = egui_renderer.register_native_texture(
                &self.device,
                &view,
                wgpu::FilterMode::Linear,
            );

            self.renderer.resize(&self.device, width, height);

            self.render_texture = Some(RenderTexture {
                texture,
                view,
                egui_texture_id,
                width,
                height,
            });
        }

        self.render_texture.as_ref().unwrap().egui_texture_id
    }

    /// Render the scene to the texture, monoscopically or in stereo
    pub fn render(&mut self, stereo: bool) {
        let Some(ref rt) = self.render_texture else {
            return;
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Viewport Render Encoder"),
            });

        if stereo {
            self.renderer
                .render_stereo(&mut encoder, &rt.view, &self.queue);
        } else {
            self.renderer.render(&mut encoder, &rt.view, &self.queue);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
    }

    /// Update the model transform for the current frame
    pub fn set_model_transform(&mut self, transform: Mat4) {
        let queue = Arc::clone(&self.queue);
        self.renderer.set_model_transform(&queue, transform);
    }

    /// Push changed configuration values to the renderer
    pub fn apply_config(&mut self, config: &RendererConfig) {
        let queue = Arc::clone(&self.queue);
        self.renderer.set_lighting(&queue, &config.lighting);
        self.renderer.set_clear_color(config.viewport.background_color);
        self.renderer.set_model_color(&queue, config.model.color);
        self.renderer.set_eye_separation(config.stereo.eye_separation);
    }
}
