//! Main application

use glam::Mat4;

use ov_renderer::RendererConfig;

use crate::preferences;
use crate::viewport::ViewportState;

/// Main application
pub struct OctaViewApp {
    viewport: Option<ViewportState>,
    config: RendererConfig,
    /// Accumulated model spin angle in radians.
    rotation: f32,
}

impl OctaViewApp {
    /// Create a new app
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = preferences::load_or_default();

        // Create viewport state if WGPU is available
        let viewport = cc.wgpu_render_state.as_ref().map(|render_state| {
            ViewportState::new(
                render_state.device.clone(),
                render_state.queue.clone(),
                render_state.target_format,
                &config,
            )
        });

        Self {
            viewport,
            config,
            rotation: 0.0,
        }
    }

    fn settings_bar(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.config.stereo.enabled, "Stereo");
            if self.config.stereo.enabled {
                ui.label("Eye separation:");
                changed |= ui
                    .add(
                        egui::Slider::new(&mut self.config.stereo.eye_separation, 0.0..=0.3)
                            .fixed_decimals(3),
                    )
                    .changed();
            }

            ui.separator();

            ui.label("Spin:");
            ui.add(
                egui::Slider::new(&mut self.config.model.rotation_speed, 0.0..=3.0)
                    .suffix(" rad/s"),
            );

            ui.separator();

            ui.label("Color:");
            changed |= ui
                .color_edit_button_rgba_unmultiplied(&mut self.config.model.color)
                .changed();

            ui.separator();

            ui.label("Ambient:");
            changed |= ui
                .add(egui::Slider::new(
                    &mut self.config.lighting.ambient_strength,
                    0.0..=1.0,
                ))
                .changed();
        });

        changed
    }

    fn viewport_ui(&mut self, ui: &mut egui::Ui, frame: &eframe::Frame, config_changed: bool) {
        let available_size = ui.available_size();
        let width = available_size.x as u32;
        let height = available_size.y as u32;

        if width == 0 || height == 0 {
            return;
        }

        let (Some(viewport), Some(render_state)) =
            (self.viewport.as_mut(), frame.wgpu_render_state())
        else {
            // Fallback when no render context
            let (response, painter) =
                ui.allocate_painter(available_size, egui::Sense::hover());
            painter.rect_filled(response.rect, 0.0, egui::Color32::from_rgb(30, 30, 30));
            painter.text(
                response.rect.center(),
                egui::Align2::CENTER_CENTER,
                "Viewport\n(WebGPU not available)",
                egui::FontId::proportional(16.0),
                egui::Color32::GRAY,
            );
            return;
        };

        let texture_id = {
            let mut egui_renderer = render_state.renderer.write();
            viewport.ensure_texture(width, height, &mut egui_renderer)
        };

        if config_changed {
            viewport.apply_config(&self.config);
        }
        viewport.set_model_transform(Mat4::from_rotation_y(self.rotation));
        viewport.render(self.config.stereo.enabled);

        // Display the rendered texture
        let response = ui.add(
            egui::Image::new(egui::load::SizedTexture::new(
                texture_id,
                [available_size.x, available_size.y],
            ))
            .sense(egui::Sense::click_and_drag()),
        );

        // Camera input: drag to orbit, scroll to zoom
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            let sensitivity = self.config.camera.orbit_sensitivity;
            viewport
                .renderer
                .camera_mut()
                .orbit(-delta.x * sensitivity, delta.y * sensitivity);
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                let sensitivity = self.config.camera.zoom_sensitivity;
                viewport
                    .renderer
                    .camera_mut()
                    .zoom(scroll * sensitivity * 0.1);
            }
        }
    }
}

impl eframe::App for OctaViewApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt);
        self.rotation += self.config.model.rotation_speed * dt;

        let mut config_changed = false;
        egui::TopBottomPanel::top("settings").show(ctx, |ui| {
            config_changed = self.settings_bar(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.viewport_ui(ui, frame, config_changed);
            });

        // Keep the spin animation running
        ctx.request_repaint();
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        if let Err(e) = preferences::save(&self.config) {
            tracing::warn!("Failed to save preferences: {e}");
        }
    }

    fn on_exit(&mut self) {
        if let Err(e) = preferences::save(&self.config) {
            tracing::warn!("Failed to save preferences: {e}");
        }
    }
}
