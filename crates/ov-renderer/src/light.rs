//! Directional light for mesh shading

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::config::LightingConfig;

/// Light uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightUniform {
    /// Direction towards the light, normalized.
    pub direction: [f32; 3],
    /// Light intensity multiplier.
    pub intensity: f32,
    /// Light color (RGB).
    pub color: [f32; 3],
    /// Ambient light strength.
    pub ambient_strength: f32,
    /// Ambient light color (RGB).
    pub ambient_color: [f32; 3],
    /// Padding for 16-byte alignment.
    pub _pad: f32,
}

/// Directional light with an ambient term
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    /// Direction towards the light.
    pub direction: Vec3,
    /// Light color.
    pub color: Vec3,
    /// Intensity multiplier.
    pub intensity: f32,
    /// Ambient color.
    pub ambient_color: Vec3,
    /// Ambient strength.
    pub ambient_strength: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::from_config(&LightingConfig::default())
    }
}

impl DirectionalLight {
    /// Create a light with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a light from a lighting configuration
    pub fn from_config(config: &LightingConfig) -> Self {
        Self {
            direction: Vec3::from(config.direction),
            color: Vec3::from(config.color),
            intensity: config.intensity,
            ambient_color: Vec3::from(config.ambient_color),
            ambient_strength: config.ambient_strength,
        }
    }

    /// Get light uniform data
    pub fn uniform(&self) -> LightUniform {
        LightUniform {
            direction: self.direction.normalize_or_zero().to_array(),
            intensity: self.intensity,
            color: self.color.to_array(),
            ambient_strength: self.ambient_strength,
            ambient_color: self.ambient_color.to_array(),
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_direction_normalized() {
        let light = DirectionalLight {
            direction: Vec3::new(0.0, 10.0, 0.0),
            ..DirectionalLight::new()
        };
        let uniform = light.uniform();
        assert_eq!(uniform.direction, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_uniform_size() {
        // 3 rows of vec3 + f32, matching the WGSL struct layout.
        assert_eq!(std::mem::size_of::<LightUniform>(), 48);
    }
}
