//! # Face-Face Adjacency
//!
//! For every face edge, the face on the other side of that edge.
//!
//! Two faces share an edge when they traverse the same two vertices in
//! opposite directions: edge `p` of face `f` and edge `q` of face `g` are
//! shared iff `f[p] == g[q + 1]` and `f[p + 1] == g[q]`.
//!
//! ## Memory Layout
//!
//! ```text
//! links: [face][edge] -> (neighbor face, edge slot on neighbor)
//!                        face == INVALID  => no neighbor
//! ```

use super::vertex_face::VertexFaceAdjacency;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use tracing::{debug, warn};

/// Invalid/null reference constant.
const INVALID: u32 = u32::MAX;

/// The face across an edge and the slot of the shared edge on that face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceNeighbor {
    /// Neighboring face
    pub face: u32,
    /// Edge slot (0..3) of the shared edge on the neighboring face
    pub edge: u8,
}

/// One slot of the adjacency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EdgeLink {
    face: u32,
    edge: u8,
}

impl EdgeLink {
    const NONE: Self = Self {
        face: INVALID,
        edge: u8::MAX,
    };

    #[inline]
    fn get(self) -> Option<FaceNeighbor> {
        (self.face != INVALID).then_some(FaceNeighbor {
            face: self.face,
            edge: self.edge,
        })
    }
}

impl From<FaceNeighbor> for EdgeLink {
    fn from(neighbor: FaceNeighbor) -> Self {
        Self {
            face: neighbor.face,
            edge: neighbor.edge,
        }
    }
}

/// Fixed-width `face_count × 3` table of edge neighbors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceFaceAdjacency {
    links: Vec<[EdgeLink; 3]>,
    boundary_edges: usize,
    non_manifold_edges: usize,
}

impl FaceFaceAdjacency {
    /// Number of faces covered.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.links.len()
    }

    /// Neighbor across edge slot `edge` of `face`, if any.
    ///
    /// Returns `None` for boundary edges, unmatched edges and out-of-range
    /// arguments.
    #[inline]
    pub fn neighbor(&self, face: u32, edge: usize) -> Option<FaceNeighbor> {
        self.links
            .get(face as usize)
            .and_then(|links| links.get(edge))
            .and_then(|link| link.get())
    }

    /// Neighbors across all three edges of `face`.
    pub fn neighbors(&self, face: u32) -> [Option<FaceNeighbor>; 3] {
        [0, 1, 2].map(|edge| self.neighbor(face, edge))
    }

    /// Number of edge slots without a neighbor.
    #[inline]
    pub fn boundary_edge_count(&self) -> usize {
        self.boundary_edges
    }

    /// Number of edge slots that had more than one candidate neighbor.
    #[inline]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.non_manifold_edges
    }

    /// True when every edge slot has a neighbor.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.boundary_edges == 0
    }
}

/// Builds the face-face adjacency of a mesh from its vertex-face adjacency.
///
/// For edge `a → b` of face `f`, the incident list of `a` is scanned for a
/// face `g ≠ f` whose corner before `a` is `b`, i.e. a face running `b → a`.
/// Work is proportional to faces × average vertex degree.
///
/// Edges without such a face get no neighbor. When several faces qualify
/// (non-manifold edge) the first one in the incident list wins; the list is
/// in ascending face order, so this is the lowest-indexed candidate. Partners
/// of non-manifold edges are not guaranteed to point back.
///
/// # Errors
///
/// - [`MeshError::VertexIndexOutOfRange`] for malformed meshes
/// - [`MeshError::AdjacencyMismatch`] if `vf` covers another vertex count
/// - [`MeshError::StaleAdjacency`] if `vf` lists corners not present in `mesh`
///
/// # Example
///
/// ```rust
/// use mesh_normals::{build_face_face_adjacency, build_vertex_face_adjacency, Mesh};
/// use glam::DVec3;
///
/// // Unit square split along the 0-2 diagonal
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(0, 1, 2);
/// mesh.add_face(0, 2, 3);
///
/// let vf = build_vertex_face_adjacency(&mesh).unwrap();
/// let ff = build_face_face_adjacency(&mesh, &vf).unwrap();
///
/// let across = ff.neighbor(0, 2).unwrap();
/// assert_eq!((across.face, across.edge), (1, 0));
/// assert_eq!(ff.boundary_edge_count(), 4);
/// ```
pub fn build_face_face_adjacency(
    mesh: &Mesh,
    vf: &VertexFaceAdjacency,
) -> MeshResult<FaceFaceAdjacency> {
    mesh.validate()?;
    if vf.vertex_count() != mesh.vertex_count() {
        return Err(MeshError::AdjacencyMismatch {
            expected: mesh.vertex_count(),
            found: vf.vertex_count(),
        });
    }

    let faces = mesh.faces();
    let mut links = vec![[EdgeLink::NONE; 3]; faces.len()];
    let mut boundary_edges = 0;
    let mut non_manifold_edges = 0;

    for (face, indices) in faces.iter().enumerate() {
        for edge in 0..3 {
            let from = indices[edge];
            let to = indices[(edge + 1) % 3];

            let mut found: Option<FaceNeighbor> = None;
            let mut candidates = 0usize;
            for incident in vf.incident(from) {
                let other = faces
                    .get(incident.face as usize)
                    .filter(|other| other.get(incident.corner as usize) == Some(&from))
                    .ok_or(MeshError::StaleAdjacency {
                        vertex: from,
                        face: incident.face,
                        corner: incident.corner,
                    })?;

                if incident.face as usize == face {
                    continue;
                }

                // Edge of `other` that ends at `from`
                let shared = (incident.corner as usize + 2) % 3;
                if other[shared] == to {
                    candidates += 1;
                    found.get_or_insert(FaceNeighbor {
                        face: incident.face,
                        edge: shared as u8,
                    });
                }
            }

            match found {
                Some(neighbor) => links[face][edge] = neighbor.into(),
                None => boundary_edges += 1,
            }
            if candidates > 1 {
                non_manifold_edges += 1;
            }
        }
    }

    if non_manifold_edges > 0 {
        warn!(
            non_manifold_edges,
            "Non-manifold edges resolved to the lowest-indexed neighbor"
        );
    }
    debug!(
        faces = faces.len(),
        boundary_edges,
        non_manifold_edges,
        "Built face-face adjacency"
    );

    Ok(FaceFaceAdjacency {
        links,
        boundary_edges,
        non_manifold_edges,
    })
}
