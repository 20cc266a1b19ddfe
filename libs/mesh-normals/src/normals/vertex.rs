//! # Per-Vertex Normals
//!
//! Smooth shading: each vertex blends the normals of the faces around it,
//! weighted by triangle area times the incident angle at the vertex. Large,
//! sharply incident triangles pull harder than small or glancing ones.

use super::geometry::{face_geometry, normalize_or_zero, TriangleGeometry};
use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::topology::{build_vertex_face_adjacency, VertexFaceAdjacency};
use config::constants::NormalsConfig;
use glam::DVec3;
use rayon::prelude::*;

/// Computes one unit normal per vertex.
///
/// Vertices without incident faces, or whose incident faces are all
/// degenerate, yield the zero vector.
///
/// # Errors
///
/// Returns [`MeshError::VertexIndexOutOfRange`](crate::MeshError) for
/// malformed meshes.
///
/// # Example
///
/// ```rust
/// use mesh_normals::{compute_vertex_normals, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);
/// mesh.add_vertex(DVec3::X);
/// mesh.add_vertex(DVec3::Y);
/// mesh.add_vertex(DVec3::splat(9.0)); // unused
/// mesh.add_face(0, 1, 2);
///
/// let normals = compute_vertex_normals(&mesh).unwrap();
/// assert_eq!(normals[..3], [DVec3::Z; 3]);
/// assert_eq!(normals[3], DVec3::ZERO);
/// ```
pub fn compute_vertex_normals(mesh: &Mesh) -> MeshResult<Vec<DVec3>> {
    compute_vertex_normals_with_config(mesh, &NormalsConfig::default())
}

/// [`compute_vertex_normals`] with an explicit configuration.
pub fn compute_vertex_normals_with_config(
    mesh: &Mesh,
    config: &NormalsConfig,
) -> MeshResult<Vec<DVec3>> {
    let vf = build_vertex_face_adjacency(mesh)?;
    let geometry = face_geometry(mesh, config);
    Ok(gather_vertex_normals(&vf, &geometry, config))
}

/// Sums the weighted face normals around each vertex and normalizes.
///
/// Each output slot is written by exactly one task, so the per-vertex loop
/// can run in parallel without synchronization.
fn gather_vertex_normals(
    vf: &VertexFaceAdjacency,
    geometry: &[TriangleGeometry],
    config: &NormalsConfig,
) -> Vec<DVec3> {
    let blend = |vertex: usize| {
        normalize_or_zero(vf.incident(vertex as u32).iter().fold(DVec3::ZERO, |sum, fc| {
            sum + geometry[fc.face as usize].corner_contribution(fc.corner as usize)
        }))
    };

    let count = vf.vertex_count();
    if config.runs_parallel(count) {
        (0..count).into_par_iter().map(blend).collect()
    } else {
        (0..count).map(blend).collect()
    }
}
