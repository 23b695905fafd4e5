//! Vertex formats for mesh rendering

use bytemuck::{Pod, Zeroable};

/// Number of floats per interleaved vertex (3 position + 3 normal)
pub const FLOATS_PER_VERTEX: usize = 6;

/// Vertex for mesh rendering: position followed by face normal.
///
/// The memory layout matches the interleaver's output blocks
/// (`ov_core::interleave_with_normals` with stride 3, offset 0), so an
/// interleaved buffer casts directly to `&[MeshVertex]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct MeshVertex {
    /// Vertex position in local space.
    pub position: [f32; 3],
    /// Face normal shared by the vertex's triangle.
    pub normal: [f32; 3],
}

impl MeshVertex {
    /// Vertex attribute descriptors for the shader.
    pub const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &[
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: std::mem::size_of::<[f32; 3]>() as u64,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x3,
        },
    ];

    /// Returns the vertex buffer layout for this vertex type.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: Self::ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ov_core::{generate_octahedron_mesh, interleave_with_normals};

    #[test]
    fn test_vertex_size_matches_interleaved_stride() {
        assert_eq!(
            std::mem::size_of::<MeshVertex>(),
            FLOATS_PER_VERTEX * std::mem::size_of::<f32>()
        );
    }

    #[test]
    fn test_interleaved_buffer_casts_to_vertices() {
        let positions = generate_octahedron_mesh();
        let interleaved = interleave_with_normals(&positions, 3, 0).unwrap();

        let vertices: &[MeshVertex] = bytemuck::cast_slice(&interleaved);
        assert_eq!(vertices.len(), 24);
        assert_eq!(vertices[0].position, [0.0, 0.0, 1.0]);

        // Normals land in the second attribute slot of each vertex.
        for vertex in vertices {
            let length = vertex
                .normal
                .iter()
                .map(|c| c * c)
                .sum::<f32>()
                .sqrt();
            assert!((length - 1.0).abs() < 1e-5);
        }
    }
}
