//! Face normal calculation for triangle meshes

use glam::Vec3;

/// Calculate the unit face normal of a triangle.
///
/// Uses the edge order `(p2 - p1) x (p0 - p1)`, so triangles wound
/// counter-clockwise (seen from outside) get outward-facing normals.
///
/// Degenerate triangles (collinear or coincident points) have a zero-length
/// cross product; those return `Vec3::ZERO` rather than NaN. The zero vector
/// is a deliberate sentinel — callers can detect it by its zero length.
pub fn face_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    let e1 = p2 - p1;
    let e2 = p0 - p1;
    e1.cross(e2).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn test_unit_length() {
        let n = face_normal(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
        );
        assert!((n.length() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_octahedron_face_direction() {
        // First face of the reference octahedron; the normal points into
        // the (+,+,+) octant.
        let n = face_normal(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        let expected = Vec3::splat(1.0 / 3.0_f32.sqrt());
        assert!((n - expected).length() < TOLERANCE);
    }

    #[test]
    fn test_degenerate_coincident_points() {
        let n = face_normal(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(n, Vec3::ZERO);
        assert!(n.is_finite());
    }

    #[test]
    fn test_degenerate_collinear_points() {
        let n = face_normal(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(2.0, 2.0, 2.0),
        );
        assert_eq!(n, Vec3::ZERO);
    }

    #[test]
    fn test_winding_flips_sign() {
        let p0 = Vec3::new(0.0, 0.0, 1.0);
        let p1 = Vec3::new(1.0, 0.0, 0.0);
        let p2 = Vec3::new(0.0, 1.0, 0.0);
        let forward = face_normal(p0, p1, p2);
        let reversed = face_normal(p2, p1, p0);
        assert!((forward + reversed).length() < TOLERANCE);
    }
}
