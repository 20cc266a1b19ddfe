//! # Fan Primitive
//!
//! Triangles around a single center vertex, open along the rim.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a triangle fan around a center vertex.
///
/// Vertex 0 is the center at `(0, 0, apex_height)`; vertices `1..=segments`
/// lie on a circle of `radius` in the XY plane. Face `i` is
/// `(0, 1 + i, 1 + (i + 1) % segments)`, wound so the normals point to +Z.
///
/// The ring around the center is closed while every rim edge is a boundary
/// edge. With `apex_height = 0` and 6 segments the faces are equilateral.
///
/// # Example
///
/// ```rust
/// use mesh_normals::primitives::create_fan;
///
/// let mesh = create_fan(6, 1.0, 0.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 7);
/// assert_eq!(mesh.face(5), [0, 6, 1]);
/// ```
pub fn create_fan(segments: u32, radius: f64, apex_height: f64) -> MeshResult<Mesh> {
    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Fan segments must be at least 3: {}",
            segments
        )));
    }

    if !(radius > 0.0) || !apex_height.is_finite() {
        return Err(MeshError::degenerate(format!(
            "Fan needs a positive radius and finite apex: radius={}, apex={}",
            radius, apex_height
        )));
    }

    let mut mesh = Mesh::with_capacity(segments as usize + 1, segments as usize);
    let center = mesh.add_vertex(DVec3::new(0.0, 0.0, apex_height));

    for j in 0..segments {
        let theta = 2.0 * PI * j as f64 / segments as f64;
        mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), 0.0));
    }

    for j in 0..segments {
        mesh.add_face(center, 1 + j, 1 + (j + 1) % segments);
    }

    Ok(mesh)
}
