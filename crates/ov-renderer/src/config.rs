//! Renderer configuration structures
//!
//! Configurable settings for the renderer, serializable so the frontend can
//! persist them between sessions.

use serde::{Deserialize, Serialize};

use crate::constants::{stereo, viewport};

/// Viewport rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Background clear color (RGBA)
    pub background_color: [f32; 4],
    /// MSAA sample count (1 = disabled, 2, 4, 8)
    pub msaa_sample_count: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            msaa_sample_count: viewport::SAMPLE_COUNT,
        }
    }
}

/// Lighting configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    /// Light direction (towards the light, normalized on upload)
    pub direction: [f32; 3],
    /// Light color (RGB)
    pub color: [f32; 3],
    /// Light intensity multiplier
    pub intensity: f32,
    /// Ambient light color (RGB)
    pub ambient_color: [f32; 3],
    /// Ambient light strength
    pub ambient_strength: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            direction: [0.4, 0.8, 0.5],
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
            ambient_color: [1.0, 1.0, 1.0],
            ambient_strength: 0.15,
        }
    }
}

/// Camera default configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near_plane: f32,
    /// Far clipping plane distance
    pub far_plane: f32,
    /// Orbit sensitivity multiplier
    pub orbit_sensitivity: f32,
    /// Zoom sensitivity multiplier
    pub zoom_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near_plane: 0.01,
            far_plane: 1000.0,
            orbit_sensitivity: 0.005,
            zoom_sensitivity: 0.1,
        }
    }
}

/// Stereoscopic rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StereoConfig {
    /// Whether the stereo render path is active
    pub enabled: bool,
    /// Distance between the two eye viewpoints, in scene units
    pub eye_separation: f32,
}

impl Default for StereoConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            eye_separation: stereo::EYE_SEPARATION,
        }
    }
}

/// Model display configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    /// Base mesh color (RGBA)
    pub color: [f32; 4],
    /// Spin speed around the vertical axis, radians per second
    pub rotation_speed: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            color: [0.7, 0.7, 0.7, 1.0],
            rotation_speed: 0.5,
        }
    }
}

/// Complete renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RendererConfig {
    /// Viewport settings
    #[serde(default)]
    pub viewport: ViewportConfig,
    /// Lighting settings
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Camera settings
    #[serde(default)]
    pub camera: CameraConfig,
    /// Stereo settings
    #[serde(default)]
    pub stereo: StereoConfig,
    /// Model settings
    #[serde(default)]
    pub model: ModelConfig,
}

impl RendererConfig {
    /// Create a new renderer configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Background color as a wgpu clear color
    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.viewport.background_color;
        wgpu::Color {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: f64::from(a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = RendererConfig::default();
        assert!(config.viewport.msaa_sample_count >= 1);
        assert!(config.camera.near_plane > 0.0);
        assert!(config.camera.far_plane > config.camera.near_plane);
        assert!(config.stereo.eye_separation > 0.0);
        assert!(!config.stereo.enabled);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        // Sections absent from a stored config come back as defaults.
        let config: RendererConfig = ron::from_str("(stereo: (enabled: true))").unwrap();
        assert!(config.stereo.enabled);
        assert_eq!(config.viewport, ViewportConfig::default());
        assert_eq!(config.model, ModelConfig::default());
    }
}
