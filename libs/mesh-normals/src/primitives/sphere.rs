//! # Sphere Primitive
//!
//! Latitude/longitude sphere without pole vertices: the first and last rings
//! are closed by polygon fans.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a closed sphere mesh.
///
/// Uses `(segments + 1) / 2` rings, ring `i` at polar angle
/// `phi = 180° * (i + 0.5) / rings`, each with `segments` vertices.
///
/// # Example
///
/// ```rust
/// use mesh_normals::primitives::create_sphere;
///
/// let mesh = create_sphere(5.0, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 8 * 16);
/// ```
pub fn create_sphere(radius: f64, segments: u32) -> MeshResult<Mesh> {
    if !(radius > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Sphere radius must be positive: {}",
            radius
        )));
    }

    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Sphere segments must be at least 3: {}",
            segments
        )));
    }

    let num_rings = ((segments + 1) / 2) as usize;
    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(num_rings * n, 2 * n * num_rings);

    let rings: Vec<Vec<u32>> = (0..num_rings)
        .map(|i| {
            // Polar angle (0 = top, PI = bottom)
            let phi = PI * (i as f64 + 0.5) / num_rings as f64;
            let ring_radius = radius * phi.sin();
            let z = radius * phi.cos();

            (0..n)
                .map(|j| {
                    let theta = 2.0 * PI * j as f64 / n as f64;
                    mesh.add_vertex(DVec3::new(
                        ring_radius * theta.cos(),
                        ring_radius * theta.sin(),
                        z,
                    ))
                })
                .collect()
        })
        .collect();

    // Top cap
    let first = &rings[0];
    for j in 1..n - 1 {
        mesh.add_face(first[0], first[j], first[j + 1]);
    }

    // Bands between adjacent rings
    for pair in rings.windows(2) {
        let (upper, lower) = (&pair[0], &pair[1]);
        for j in 0..n {
            let j_next = (j + 1) % n;
            mesh.add_face(upper[j], lower[j], lower[j_next]);
            mesh.add_face(upper[j], lower[j_next], upper[j_next]);
        }
    }

    // Bottom cap, reversed
    let last = &rings[num_rings - 1];
    for j in 1..n - 1 {
        mesh.add_face(last[0], last[j + 1], last[j]);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normals::face_normal;

    #[test]
    fn test_sphere_counts() {
        let mesh = create_sphere(5.0, 16).unwrap();
        assert_eq!(mesh.vertex_count(), 8 * 16);
        assert_eq!(mesh.face_count(), 2 * 14 + 7 * 2 * 16);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let mesh = create_sphere(3.0, 12).unwrap();
        for v in mesh.vertices() {
            assert!((v.length() - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sphere_faces_point_outward() {
        let mesh = create_sphere(1.0, 10).unwrap();
        for face in 0..mesh.face_count() {
            let [a, b, c] = mesh.face_positions(face);
            assert!(face_normal(a, b, c).dot(a + b + c) > 0.0);
        }
    }

    #[test]
    fn test_sphere_invalid_parameters() {
        assert!(create_sphere(0.0, 16).is_err());
        assert!(create_sphere(-5.0, 16).is_err());
        assert!(create_sphere(5.0, 2).is_err());
    }
}
