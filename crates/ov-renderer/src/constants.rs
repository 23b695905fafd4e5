//! Rendering constants shared across the renderer.

/// Viewport constants
pub mod viewport {
    /// Default clear color (black, like the clear color of the mono pass)
    pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Default MSAA sample count
    pub const SAMPLE_COUNT: u32 = 4;

    /// Depth buffer format
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
}

/// Stereo rendering constants
pub mod stereo {
    /// Default distance between the two eye viewpoints, in scene units
    pub const EYE_SEPARATION: f32 = 0.065;
}
