//! OctaView Core Geometry
//!
//! This crate contains the CPU-side geometry processing for OctaView:
//! - VertexView: strided view over a flat vertex buffer
//! - Normal interleaver: appends per-triangle face normals to vertex data
//! - Primitive generation: the octahedron reference mesh

pub mod buffer;
pub mod interleave;
pub mod normals;
pub mod primitive;

pub use buffer::*;
pub use interleave::*;
pub use normals::*;
pub use primitive::*;
