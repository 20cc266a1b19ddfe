//! # Vertex-Face Adjacency
//!
//! For every vertex, the faces that touch it and the corner slot at which
//! each face touches it.

use crate::error::MeshResult;
use crate::mesh::Mesh;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A face together with one of its corner slots (0, 1 or 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceCorner {
    /// Face index
    pub face: u32,
    /// Corner slot within the face
    pub corner: u8,
}

impl FaceCorner {
    /// Creates a face/corner pair.
    #[inline]
    pub fn new(face: u32, corner: u8) -> Self {
        Self { face, corner }
    }

    /// Flat index of this corner in a per-corner field (`3 * face + corner`).
    #[inline]
    pub fn flat_index(self) -> usize {
        self.face as usize * 3 + self.corner as usize
    }
}

/// Incident faces of every vertex, indexed by vertex id.
///
/// Lists are filled in ascending face order; callers should treat the order
/// within a list as unspecified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexFaceAdjacency {
    incident: Vec<Vec<FaceCorner>>,
}

impl VertexFaceAdjacency {
    /// Number of vertices covered.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.incident.len()
    }

    /// Faces incident to `vertex`. Empty for isolated or unknown vertices.
    #[inline]
    pub fn incident(&self, vertex: u32) -> &[FaceCorner] {
        self.incident
            .get(vertex as usize)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of faces touching `vertex`.
    #[inline]
    pub fn degree(&self, vertex: u32) -> usize {
        self.incident(vertex).len()
    }

    /// Total number of (face, corner) pairs; three per face.
    pub fn pair_count(&self) -> usize {
        self.incident.iter().map(Vec::len).sum()
    }

    /// Iterates over `(vertex, incident faces)`.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[FaceCorner])> + '_ {
        self.incident
            .iter()
            .enumerate()
            .map(|(vertex, list)| (vertex as u32, list.as_slice()))
    }
}

/// Builds the vertex-face adjacency of a mesh.
///
/// For every face `f = (i, j, k)` the pairs `(f, 0)`, `(f, 1)` and `(f, 2)` are
/// appended to the lists of `i`, `j` and `k`.
///
/// # Errors
///
/// Returns [`MeshError::VertexIndexOutOfRange`](crate::MeshError) if a face
/// references a missing vertex.
///
/// # Example
///
/// ```rust
/// use mesh_normals::{build_vertex_face_adjacency, FaceCorner, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);
/// mesh.add_vertex(DVec3::X);
/// mesh.add_vertex(DVec3::Y);
/// mesh.add_face(0, 1, 2);
///
/// let vf = build_vertex_face_adjacency(&mesh).unwrap();
/// assert_eq!(vf.incident(2), &[FaceCorner::new(0, 2)]);
/// ```
pub fn build_vertex_face_adjacency(mesh: &Mesh) -> MeshResult<VertexFaceAdjacency> {
    mesh.validate()?;

    let mut incident: Vec<Vec<FaceCorner>> = vec![Vec::new(); mesh.vertex_count()];
    for (face, indices) in mesh.faces().iter().enumerate() {
        for (corner, &vertex) in indices.iter().enumerate() {
            incident[vertex as usize].push(FaceCorner::new(face as u32, corner as u8));
        }
    }

    let isolated = incident.iter().filter(|list| list.is_empty()).count();
    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        isolated,
        "Built vertex-face adjacency"
    );

    Ok(VertexFaceAdjacency { incident })
}
