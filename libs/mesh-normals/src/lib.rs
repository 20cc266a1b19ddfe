//! # Mesh Normals
//!
//! Adjacency and surface normals for indexed triangle meshes.
//!
//! ## Architecture
//!
//! ```text
//! Mesh ──► VertexFaceAdjacency ──► FaceFaceAdjacency
//!   │              │                       │
//!   ▼              ▼                       ▼
//! face normals   vertex normals      corner normals
//!  (Flat)         (Smooth)            (Sharp)
//! ```
//!
//! Every computation is a pure function of the mesh: adjacency is rebuilt on
//! each call and no state is kept between calls.
//!
//! ## Weighting
//!
//! Vertex and corner normals sum `area × incident angle × face normal` over
//! the contributing faces and normalize the result. Corner normals only sum
//! over the corner's smoothing group: faces reachable around the vertex
//! without crossing an edge sharper than the crease threshold (30° by
//! default, see [`config::constants::SMOOTHING_THRESHOLD_COS`]).
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::SMOOTHING_THRESHOLD_COS;
//! use mesh_normals::primitives::create_cube;
//! use mesh_normals::{compute_corner_normals, compute_vertex_normals};
//! use glam::DVec3;
//!
//! let cube = create_cube(DVec3::splat(2.0), true).unwrap();
//!
//! // Smooth: every vertex points along a diagonal
//! let smooth = compute_vertex_normals(&cube).unwrap();
//! assert!((smooth[6] - DVec3::ONE.normalize()).length() < 1e-12);
//!
//! // Sharp: 90° edges are creases, corners keep their side's normal
//! let sharp = compute_corner_normals(&cube, SMOOTHING_THRESHOLD_COS).unwrap();
//! assert_eq!(sharp[6], DVec3::Z);
//! ```

pub mod error;
pub mod mesh;
pub mod normals;
pub mod primitives;
pub mod topology;

pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use normals::{
    compute_corner_normals, compute_corner_normals_with_config, compute_face_normals,
    compute_face_normals_with_config, compute_normals, compute_vertex_normals,
    compute_vertex_normals_with_config, NormalField, ShadingMode,
};
pub use topology::{
    build_face_face_adjacency, build_vertex_face_adjacency, FaceCorner, FaceFaceAdjacency,
    FaceNeighbor, VertexFaceAdjacency,
};
