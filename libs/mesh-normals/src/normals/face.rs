//! # Per-Face Normals
//!
//! Flat shading: one normal per triangle.

use super::geometry::{face_normal, map_faces};
use crate::error::MeshResult;
use crate::mesh::Mesh;
use config::constants::NormalsConfig;
use glam::DVec3;

/// Computes one unit normal per face, `normalize((B - A) × (C - A))`.
///
/// Zero-area faces yield the zero vector; callers should treat a near-zero
/// normal as having no direction.
///
/// # Errors
///
/// Returns [`MeshError::VertexIndexOutOfRange`](crate::MeshError) for
/// malformed meshes.
///
/// # Example
///
/// ```rust
/// use mesh_normals::{compute_face_normals, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);
/// mesh.add_vertex(DVec3::X);
/// mesh.add_vertex(DVec3::Y);
/// mesh.add_face(0, 1, 2);
///
/// assert_eq!(compute_face_normals(&mesh).unwrap(), vec![DVec3::Z]);
/// ```
pub fn compute_face_normals(mesh: &Mesh) -> MeshResult<Vec<DVec3>> {
    compute_face_normals_with_config(mesh, &NormalsConfig::default())
}

/// [`compute_face_normals`] with an explicit configuration.
pub fn compute_face_normals_with_config(
    mesh: &Mesh,
    config: &NormalsConfig,
) -> MeshResult<Vec<DVec3>> {
    mesh.validate()?;

    Ok(map_faces(mesh, config, |face| {
        let [a, b, c] = mesh.face_positions(face);
        face_normal(a, b, c)
    }))
}
