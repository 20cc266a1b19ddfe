//! # Mesh Errors
//!
//! Error types for adjacency and normal computation.
//!
//! ## Error Policy
//!
//! - Malformed input fails immediately, no partial results
//! - Degenerate triangles are not errors: they produce zero normals
//! - Non-manifold edges are not errors: one neighbor is picked and logged

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while deriving adjacency or normals.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A face references a vertex that does not exist.
    #[error(
        "Face {face} corner {corner} references vertex {index}, but the mesh has {vertex_count} vertices"
    )]
    VertexIndexOutOfRange {
        /// Offending face
        face: usize,
        /// Corner slot (0..3) within the face
        corner: usize,
        /// Referenced vertex index
        index: u32,
        /// Number of vertices in the mesh
        vertex_count: usize,
    },

    /// Too many faces to address with `u32` indices
    #[error("Too many faces: {count} (max: {max})")]
    TooManyFaces {
        /// Face count of the mesh
        count: usize,
        /// Largest supported face count
        max: usize,
    },

    /// Adjacency was built for a mesh with a different vertex count.
    #[error("Adjacency covers {found} vertices but the mesh has {expected}")]
    AdjacencyMismatch {
        /// Vertex count of the mesh
        expected: usize,
        /// Vertex count covered by the adjacency
        found: usize,
    },

    /// Adjacency lists a corner that does not touch the vertex it is stored under.
    #[error("Stale adjacency: vertex {vertex} lists face {face} corner {corner}")]
    StaleAdjacency {
        /// Vertex whose incident list is inconsistent
        vertex: u32,
        /// Listed face
        face: u32,
        /// Listed corner slot
        corner: u8,
    },

    /// A normal field does not have one entry per element of the mesh.
    #[error("Normal field has {found} entries but the mesh needs {expected}")]
    FieldMismatch {
        /// Entries required by the mesh for the field's layout
        expected: usize,
        /// Entries in the field
        found: usize,
    },

    /// Invalid normals configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Degenerate geometry requested from a primitive generator
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// Description of the rejected parameters
        message: String,
    },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::VertexIndexOutOfRange {
            face: 3,
            corner: 1,
            index: 42,
            vertex_count: 10,
        };
        let message = err.to_string();
        assert!(message.contains("Face 3"));
        assert!(message.contains("vertex 42"));
        assert!(message.contains("10 vertices"));

        let err = MeshError::degenerate("radius must be positive");
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: MeshError = ConfigError::InvalidThreshold(2.0).into();
        assert!(matches!(err, MeshError::InvalidConfig(_)));
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
