//! # Topology
//!
//! Arena-style adjacency tables derived from a [`Mesh`](crate::Mesh):
//! - **Vertex-Face**: faces (and corner slots) incident to each vertex
//! - **Face-Face**: the neighbor across each face edge
//!
//! Both are recomputed from scratch on every call; nothing is cached.

mod face_face;
mod vertex_face;


pub use face_face::{build_face_face_adjacency, FaceFaceAdjacency, FaceNeighbor};
pub use vertex_face::{build_vertex_face_adjacency, FaceCorner, VertexFaceAdjacency};
