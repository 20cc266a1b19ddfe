//! # Cylinder Primitive
//!
//! Closed cylinder or frustum with flat caps. The rims are 90° creases for
//! a cylinder, while neighboring side quads differ by only `360° / segments`.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a closed cylinder or frustum mesh.
///
/// # Arguments
///
/// * `height` - Height along Z axis
/// * `radius_bottom` - Radius at the bottom cap
/// * `radius_top` - Radius at the top cap
/// * `center` - If true, center vertically at origin
/// * `segments` - Number of segments around circumference
///
/// Both radii must be positive; cones with a single apex vertex are not
/// generated because the apex would be shared by every side face.
///
/// # Example
///
/// ```rust
/// use mesh_normals::primitives::create_cylinder;
///
/// let mesh = create_cylinder(10.0, 5.0, 5.0, false, 32).unwrap();
/// assert_eq!(mesh.vertex_count(), 64);
/// assert_eq!(mesh.face_count(), 2 * 32 + 2 * 30);
/// ```
pub fn create_cylinder(
    height: f64,
    radius_bottom: f64,
    radius_top: f64,
    center: bool,
    segments: u32,
) -> MeshResult<Mesh> {
    if !(height > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {}",
            height
        )));
    }

    if !(radius_bottom > 0.0 && radius_top > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder radii must be positive: r1={}, r2={}",
            radius_bottom, radius_top
        )));
    }

    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be at least 3: {}",
            segments
        )));
    }

    let (z_bottom, z_top) = if center {
        (-height / 2.0, height / 2.0)
    } else {
        (0.0, height)
    };

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n, 4 * n - 4);

    let mut ring = |radius: f64, z: f64| -> Vec<u32> {
        (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z))
            })
            .collect()
    };
    let bottom = ring(radius_bottom, z_bottom);
    let top = ring(radius_top, z_top);

    // Sides: two triangles per quad
    for j in 0..n {
        let j_next = (j + 1) % n;
        mesh.add_face(bottom[j], bottom[j_next], top[j_next]);
        mesh.add_face(bottom[j], top[j_next], top[j]);
    }

    // Caps: fans around the first ring vertex
    for j in 1..n - 1 {
        mesh.add_face(bottom[0], bottom[j + 1], bottom[j]);
    }
    for j in 1..n - 1 {
        mesh.add_face(top[0], top[j], top[j + 1]);
    }

    Ok(mesh)
}
