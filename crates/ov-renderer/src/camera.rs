//! Orbit camera for the 3D viewport, with stereo eye derivation

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Camera uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// Combined projection * view matrix.
    pub view_proj: [[f32; 4]; 4],
    /// View matrix.
    pub view: [[f32; 4]; 4],
    /// Projection matrix.
    pub proj: [[f32; 4]; 4],
    /// Eye position in world space (w = 1).
    pub eye: [f32; 4],
}

/// Which eye a stereo view is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eye {
    /// Left half of the split viewport
    Left,
    /// Right half of the split viewport
    Right,
}

/// Orbit camera
///
/// Y-up, orbiting the target point. The default pose frames the octahedron
/// the way the mono loop always has: slightly above the horizon, three units
/// back, looking at the origin.
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Orbit target point.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Viewport aspect ratio (full window).
    pub aspect: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Orbit yaw angle in radians.
    pub yaw: f32,
    /// Orbit pitch angle in radians.
    pub pitch: f32,
    /// Orbit distance from the target.
    pub distance: f32,
}

impl Camera {
    /// Create a new camera with default parameters
    pub fn new(aspect: f32) -> Self {
        Self::with_config(aspect, &CameraConfig::default())
    }

    /// Create a camera from a configuration
    pub fn with_config(aspect: f32, config: &CameraConfig) -> Self {
        let yaw = 0.0_f32;
        let pitch = 0.1_f32;
        let distance = 3.0;
        let target = Vec3::ZERO;

        let mut camera = Self {
            position: Vec3::ZERO,
            target,
            up: Vec3::Y,
            fov: config.fov_degrees.to_radians(),
            aspect,
            near: config.near_plane,
            far: config.far_plane,
            yaw,
            pitch,
            distance,
        };
        camera.update_position_from_orbit();
        camera
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch =
            (self.pitch + delta_pitch).clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
        self.update_position_from_orbit();
    }

    /// Zoom the camera
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * 0.1)).clamp(0.5, 100.0);
        self.update_position_from_orbit();
    }

    /// Set field of view in degrees
    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees.clamp(10.0, 120.0).to_radians();
    }

    /// Get field of view in degrees
    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    fn update_position_from_orbit(&mut self) {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.position = self.target + Vec3::new(x, y, z);
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Get camera uniform data for the monoscopic pass
    pub fn uniform(&self) -> CameraUniform {
        let view = self.view_matrix();
        let proj = self.projection_matrix();
        Self::pack_uniform(view, proj, self.position)
    }

    /// Get camera uniform data for one eye of the stereo pass.
    ///
    /// The eye view is the mono view pre-translated by half the separation
    /// along the camera-space X axis; the projection covers half the window,
    /// so the aspect ratio is halved.
    pub fn eye_uniform(&self, eye: Eye, separation: f32) -> CameraUniform {
        let shift = match eye {
            Eye::Left => separation * 0.5,
            Eye::Right => -separation * 0.5,
        };
        let view = Mat4::from_translation(Vec3::X * shift) * self.view_matrix();
        let proj = Mat4::perspective_rh(self.fov, self.aspect * 0.5, self.near, self.far);
        let eye_position = view.inverse().w_axis.truncate();
        Self::pack_uniform(view, proj, eye_position)
    }

    fn pack_uniform(view: Mat4, proj: Mat4, eye: Vec3) -> CameraUniform {
        let view_proj = proj * view;
        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, 1.0],
        }
    }
}
