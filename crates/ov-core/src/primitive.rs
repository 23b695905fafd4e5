//! Primitive mesh generation
//!
//! Generates the octahedron reference mesh as a flat triangle list:
//! position-only, stride 3, ready for the normal interleaver.

/// Generate a unit octahedron as a flat position-only triangle list.
///
/// 8 triangles * 3 vertices * 3 floats = 72 floats. Vertices are the six
/// axis-aligned unit points; every face is wound counter-clockwise seen
/// from outside, so interleaved face normals point outward.
pub fn generate_octahedron_mesh() -> Vec<f32> {
    vec![
        // Upper hemisphere (+y)
        0.0, 0.0, 1.0, /* */ 1.0, 0.0, 0.0, /* */ 0.0, 1.0, 0.0, //
        -1.0, 0.0, 0.0, /* */ 0.0, 0.0, 1.0, /* */ 0.0, 1.0, 0.0, //
        0.0, 0.0, -1.0, /* */ -1.0, 0.0, 0.0, /* */ 0.0, 1.0, 0.0, //
        1.0, 0.0, 0.0, /* */ 0.0, 0.0, -1.0, /* */ 0.0, 1.0, 0.0, //
        // Lower hemisphere (-y)
        -1.0, 0.0, 0.0, /* */ 0.0, -1.0, 0.0, /* */ 0.0, 0.0, 1.0, //
        0.0, 0.0, 1.0, /* */ 0.0, -1.0, 0.0, /* */ 1.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, /* */ 0.0, -1.0, 0.0, /* */ 0.0, 0.0, -1.0, //
        0.0, 0.0, -1.0, /* */ 0.0, -1.0, 0.0, /* */ -1.0, 0.0, 0.0,
    ]
}

/// Generate an octahedron scaled to the given radius
pub fn generate_octahedron_mesh_scaled(radius: f32) -> Vec<f32> {
    let mut positions = generate_octahedron_mesh();
    for value in &mut positions {
        *value *= radius;
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normals::face_normal;
    use glam::Vec3;

    #[test]
    fn test_octahedron_counts() {
        let positions = generate_octahedron_mesh();
        assert_eq!(positions.len(), 72); // 8 triangles * 3 vertices * 3 floats
    }

    #[test]
    fn test_octahedron_vertices_on_unit_sphere() {
        let positions = generate_octahedron_mesh();
        for vertex in positions.chunks_exact(3) {
            let p = Vec3::new(vertex[0], vertex[1], vertex[2]);
            assert!((p.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_octahedron_faces_wound_outward() {
        let positions = generate_octahedron_mesh();
        for triangle in positions.chunks_exact(9) {
            let p0 = Vec3::new(triangle[0], triangle[1], triangle[2]);
            let p1 = Vec3::new(triangle[3], triangle[4], triangle[5]);
            let p2 = Vec3::new(triangle[6], triangle[7], triangle[8]);
            let normal = face_normal(p0, p1, p2);
            let centroid = (p0 + p1 + p2) / 3.0;
            assert!(normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn test_octahedron_covers_all_octants() {
        let positions = generate_octahedron_mesh();
        let mut seen = [false; 8];
        for triangle in positions.chunks_exact(9) {
            let centroid = Vec3::new(
                triangle[0] + triangle[3] + triangle[6],
                triangle[1] + triangle[4] + triangle[7],
                triangle[2] + triangle[5] + triangle[8],
            ) / 3.0;
            let octant = usize::from(centroid.x > 0.0)
                | usize::from(centroid.y > 0.0) << 1
                | usize::from(centroid.z > 0.0) << 2;
            seen[octant] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_scaled_octahedron() {
        let positions = generate_octahedron_mesh_scaled(2.5);
        for vertex in positions.chunks_exact(3) {
            let p = Vec3::new(vertex[0], vertex[1], vertex[2]);
            assert!((p.length() - 2.5).abs() < 1e-5);
        }
    }
}
