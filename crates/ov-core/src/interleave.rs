//! Normal interleaving for flat triangle lists
//!
//! Takes a position-carrying vertex buffer with no normals and produces the
//! buffer the mesh pipeline actually wants: each vertex's original
//! attributes followed by the face normal of its triangle (flat shading, so
//! all three vertices of a triangle share one normal).

use crate::buffer::{BufferError, VertexView};
use crate::normals::face_normal;

/// Append per-triangle face normals to a flat vertex buffer.
///
/// `data` holds whole triangles: blocks of `stride` floats per vertex, three
/// vertices per triangle, with the 3-float position at `offset` inside each
/// block. Attributes other than the position are copied through untouched.
///
/// The returned buffer has blocks of `stride + 3` floats: the original block
/// followed by the triangle's unit face normal. The normal is computed once
/// per triangle and written to all three of its vertices, so the three
/// copies are bit-identical. Degenerate triangles get a zero normal (see
/// [`face_normal`]).
///
/// The input is only read; calling twice with the same input yields the same
/// output.
///
/// # Errors
///
/// Returns a [`BufferError`] if the layout is invalid (stride below 3,
/// position overrunning the block, misaligned length, or partial triangles).
/// No output is produced for invalid input.
pub fn interleave_with_normals(
    data: &[f32],
    stride: usize,
    offset: usize,
) -> Result<Vec<f32>, BufferError> {
    let view = VertexView::new(data, stride, offset)?;

    let mut output = Vec::with_capacity(view.vertex_count() * (stride + 3));

    for triangle in 0..view.triangle_count() {
        let base = triangle * 3;
        let normal = face_normal(
            view.position(base),
            view.position(base + 1),
            view.position(base + 2),
        )
        .to_array();

        for vertex in base..base + 3 {
            output.extend_from_slice(view.block(vertex));
            output.extend_from_slice(&normal);
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::generate_octahedron_mesh;
    use glam::Vec3;

    const TOLERANCE: f32 = 1e-5;

    // One right-handed triangle from the reference octahedron, stride 3.
    const TRIANGLE: [f32; 9] = [
        0.0, 0.0, 1.0, //
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0,
    ];

    fn normal_of(output: &[f32], out_stride: usize, vertex: usize) -> Vec3 {
        let base = vertex * out_stride + out_stride - 3;
        Vec3::new(output[base], output[base + 1], output[base + 2])
    }

    #[test]
    fn test_length_invariant() {
        let output = interleave_with_normals(&TRIANGLE, 3, 0).unwrap();
        assert_eq!(output.len(), (TRIANGLE.len() / 3) * (3 + 3));
    }

    #[test]
    fn test_attribute_preservation() {
        let output = interleave_with_normals(&TRIANGLE, 3, 0).unwrap();
        for vertex in 0..3 {
            let input_block = &TRIANGLE[vertex * 3..vertex * 3 + 3];
            let output_block = &output[vertex * 6..vertex * 6 + 3];
            assert_eq!(input_block, output_block);
        }
    }

    #[test]
    fn test_pass_through_attributes_with_offset() {
        // stride 5, position at offset 2: two color floats precede it.
        let data = [
            0.1, 0.2, 0.0, 0.0, 1.0, //
            0.3, 0.4, 1.0, 0.0, 0.0, //
            0.5, 0.6, 0.0, 1.0, 0.0,
        ];
        let output = interleave_with_normals(&data, 5, 2).unwrap();
        assert_eq!(output.len(), 3 * 8);
        for vertex in 0..3 {
            let input_block = &data[vertex * 5..vertex * 5 + 5];
            let output_block = &output[vertex * 8..vertex * 8 + 5];
            assert_eq!(input_block, output_block);
        }
        // Normal computed from the position sub-vectors, not the colors.
        let expected = Vec3::splat(1.0 / 3.0_f32.sqrt());
        assert!((normal_of(&output, 8, 0) - expected).length() < TOLERANCE);
    }

    #[test]
    fn test_per_triangle_normal_uniformity() {
        let output = interleave_with_normals(&TRIANGLE, 3, 0).unwrap();
        let n0: [f32; 3] = output[3..6].try_into().unwrap();
        let n1: [f32; 3] = output[9..12].try_into().unwrap();
        let n2: [f32; 3] = output[15..18].try_into().unwrap();
        // Written from one computed value, so bit-identical.
        assert_eq!(n0.map(f32::to_bits), n1.map(f32::to_bits));
        assert_eq!(n1.map(f32::to_bits), n2.map(f32::to_bits));
    }

    #[test]
    fn test_known_winding_normal() {
        let output = interleave_with_normals(&TRIANGLE, 3, 0).unwrap();
        let expected = Vec3::splat(0.577_350_3);
        assert!((normal_of(&output, 6, 0) - expected).length() < TOLERANCE);
    }

    #[test]
    fn test_degenerate_triangle_zero_normal() {
        let data = [0.0f32; 9]; // all three points coincident at the origin
        let output = interleave_with_normals(&data, 3, 0).unwrap();
        for vertex in 0..3 {
            let normal = normal_of(&output, 6, vertex);
            assert_eq!(normal, Vec3::ZERO);
            assert!(normal.is_finite());
        }
    }

    #[test]
    fn test_input_unchanged_and_repeatable() {
        let data = TRIANGLE;
        let first = interleave_with_normals(&data, 3, 0).unwrap();
        let second = interleave_with_normals(&data, 3, 0).unwrap();
        assert_eq!(data, TRIANGLE);
        let first_bits: Vec<u32> = first.iter().map(|f| f.to_bits()).collect();
        let second_bits: Vec<u32> = second.iter().map(|f| f.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }

    #[test]
    fn test_rejects_invalid_layouts() {
        assert!(matches!(
            interleave_with_normals(&TRIANGLE, 2, 0),
            Err(BufferError::StrideTooSmall(2))
        ));
        assert!(matches!(
            interleave_with_normals(&TRIANGLE, 3, 1),
            Err(BufferError::OffsetOutOfRange { .. })
        ));
        assert!(matches!(
            interleave_with_normals(&TRIANGLE[..8], 3, 0),
            Err(BufferError::MisalignedLength { .. })
        ));
    }

    #[test]
    fn test_octahedron_end_to_end() {
        let positions = generate_octahedron_mesh();
        assert_eq!(positions.len(), 72);

        let output = interleave_with_normals(&positions, 3, 0).unwrap();
        assert_eq!(output.len(), 144);

        for triangle in 0..8 {
            let normals: Vec<Vec3> = (0..3)
                .map(|v| normal_of(&output, 6, triangle * 3 + v))
                .collect();

            // Unit length, shared across the triangle.
            assert!((normals[0].length() - 1.0).abs() < TOLERANCE);
            assert_eq!(normals[0], normals[1]);
            assert_eq!(normals[1], normals[2]);

            // Outward-facing: the normal points away from the origin, in
            // the same direction as the triangle's centroid.
            let centroid: Vec3 = (0..3)
                .map(|v| {
                    let base = (triangle * 3 + v) * 6;
                    Vec3::new(output[base], output[base + 1], output[base + 2])
                })
                .sum::<Vec3>()
                / 3.0;
            assert!(normals[0].dot(centroid) > 0.0);
        }
    }
}
