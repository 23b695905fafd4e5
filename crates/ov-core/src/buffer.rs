//! Strided views over flat vertex buffers
//!
//! Vertex data arrives as a flat `&[f32]` partitioned into fixed-size blocks
//! of `stride` floats, one block per vertex, with a 3-float position starting
//! at `offset` inside each block. [`VertexView`] makes that layout explicit
//! and validates it up front, so downstream code can index vertices without
//! re-checking bounds.

use glam::Vec3;

/// Errors for malformed vertex buffer layouts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("stride must be at least 3 to hold a position, got {0}")]
    StrideTooSmall(usize),
    #[error("position offset {offset} + 3 exceeds stride {stride}")]
    OffsetOutOfRange { offset: usize, stride: usize },
    #[error("buffer length {len} is not a multiple of stride {stride}")]
    MisalignedLength { len: usize, stride: usize },
    #[error("vertex count {0} is not a multiple of 3 (whole triangles only)")]
    IncompleteTriangle(usize),
}

/// Read-only strided view over a flat triangle-list vertex buffer.
///
/// Construction validates the layout invariants; all accessors on a
/// successfully constructed view are in bounds by construction.
#[derive(Debug, Clone, Copy)]
pub struct VertexView<'a> {
    data: &'a [f32],
    stride: usize,
    offset: usize,
}

impl<'a> VertexView<'a> {
    /// Create a view over `data` with `stride` floats per vertex block and
    /// the position sub-vector starting at `offset` within each block.
    pub fn new(data: &'a [f32], stride: usize, offset: usize) -> Result<Self, BufferError> {
        if stride < 3 {
            return Err(BufferError::StrideTooSmall(stride));
        }
        if offset + 3 > stride {
            return Err(BufferError::OffsetOutOfRange { offset, stride });
        }
        if data.len() % stride != 0 {
            return Err(BufferError::MisalignedLength {
                len: data.len(),
                stride,
            });
        }
        let vertex_count = data.len() / stride;
        if vertex_count % 3 != 0 {
            return Err(BufferError::IncompleteTriangle(vertex_count));
        }

        Ok(Self {
            data,
            stride,
            offset,
        })
    }

    /// Floats per vertex block
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Index of the position sub-vector within a block
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of vertices in the buffer
    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.stride
    }

    /// Number of triangles in the buffer
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    /// Full attribute block of the given vertex
    pub fn block(&self, vertex: usize) -> &'a [f32] {
        let base = vertex * self.stride;
        &self.data[base..base + self.stride]
    }

    /// Position of the given vertex
    pub fn position(&self, vertex: usize) -> Vec3 {
        let base = vertex * self.stride + self.offset;
        Vec3::new(self.data[base], self.data[base + 1], self.data[base + 2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_layout() {
        let data = [0.0f32; 18]; // 6 vertices of stride 3 = 2 triangles
        let view = VertexView::new(&data, 3, 0).unwrap();
        assert_eq!(view.vertex_count(), 6);
        assert_eq!(view.triangle_count(), 2);
    }

    #[test]
    fn test_stride_too_small() {
        let data = [0.0f32; 6];
        assert_eq!(
            VertexView::new(&data, 2, 0).unwrap_err(),
            BufferError::StrideTooSmall(2)
        );
    }

    #[test]
    fn test_offset_out_of_range() {
        let data = [0.0f32; 12];
        assert_eq!(
            VertexView::new(&data, 4, 2).unwrap_err(),
            BufferError::OffsetOutOfRange {
                offset: 2,
                stride: 4
            }
        );
    }

    #[test]
    fn test_misaligned_length() {
        let data = [0.0f32; 10];
        assert_eq!(
            VertexView::new(&data, 3, 0).unwrap_err(),
            BufferError::MisalignedLength { len: 10, stride: 3 }
        );
    }

    #[test]
    fn test_incomplete_triangle() {
        let data = [0.0f32; 12]; // 4 vertices of stride 3
        assert_eq!(
            VertexView::new(&data, 3, 0).unwrap_err(),
            BufferError::IncompleteTriangle(4)
        );
    }

    #[test]
    fn test_position_honors_offset() {
        // stride 5, position at offset 2: [a, b, x, y, z]
        let data = [
            9.0, 8.0, 1.0, 2.0, 3.0, //
            7.0, 6.0, 4.0, 5.0, 6.0, //
            5.0, 4.0, 7.0, 8.0, 9.0,
        ];
        let view = VertexView::new(&data, 5, 2).unwrap();
        assert_eq!(view.position(0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(view.position(2), Vec3::new(7.0, 8.0, 9.0));
        assert_eq!(view.block(1), &[7.0, 6.0, 4.0, 5.0, 6.0]);
    }
}
