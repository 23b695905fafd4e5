//! OctaView Renderer
//!
//! WGPU-based rendering for the octahedron viewer.
//!
//! # Architecture
//!
//! ```text
//! ov-renderer/
//! ├── camera.rs        # Orbit camera + stereo eye derivation
//! ├── config.rs        # Serializable renderer settings
//! ├── constants.rs     # Viewport and stereo constants
//! ├── light.rs         # Directional light
//! ├── mesh.rs          # Mesh upload and pipeline
//! ├── pipeline.rs      # Shared bind group / texture helpers
//! ├── vertex.rs        # Interleaved vertex format
//! └── renderer.rs      # Main Renderer (mono + stereo passes)
//! ```
//!
//! Geometry enters through [`Renderer::set_mesh`] as the interleaved
//! position+normal buffer produced by `ov_core::interleave_with_normals`.

pub mod camera;
pub mod config;
pub mod constants;
pub mod light;
pub mod mesh;
pub mod pipeline;
pub mod renderer;
pub mod vertex;

pub use camera::{Camera, CameraUniform, Eye};
pub use config::{
    CameraConfig, LightingConfig, ModelConfig, RendererConfig, StereoConfig, ViewportConfig,
};
pub use light::{DirectionalLight, LightUniform};
pub use mesh::{MeshData, MeshInstance, MeshRenderer};
pub use renderer::{MeshEntry, Renderer};
pub use vertex::MeshVertex;
