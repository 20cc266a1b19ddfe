//! # Mesh Data Structure
//!
//! Indexed triangle mesh: vertex positions plus CCW vertex-index triples.

use crate::error::{MeshError, MeshResult};
use config::constants::MAX_FACES;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices and indices.
///
/// Faces reference vertices by index only. Corner `c` of a face is the
/// vertex `face[c]`; edge `e` runs from corner `e` to corner `(e + 1) % 3`.
/// The mesh is assembled by the loader layer and then only read by the
/// adjacency and normal computations.
///
/// # Example
///
/// ```rust
/// use mesh_normals::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(0, 1, 2);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Vertex indices, three per face, counter-clockwise
    faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Wraps existing vertex and face buffers.
    ///
    /// Indices are not checked here; every computation validates the mesh
    /// before using it.
    pub fn from_parts(vertices: Vec<DVec3>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of corners (three per face).
    #[inline]
    pub fn corner_count(&self) -> usize {
        self.faces.len() * 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a face by vertex indices, counter-clockwise seen from outside.
    pub fn add_face(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> [u32; 3] {
        self.faces[index]
    }

    /// Returns the three corner positions of a face.
    ///
    /// The mesh must have passed [`Mesh::validate`].
    #[inline]
    pub fn face_positions(&self, index: usize) -> [DVec3; 3] {
        self.faces[index].map(|v| self.vertices[v as usize])
    }

    /// Checks that every face references existing vertices.
    ///
    /// This is the only way the normal and adjacency computations can fail
    /// on mesh content; degenerate triangles pass.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mesh_normals::{Mesh, MeshError};
    /// use glam::DVec3;
    ///
    /// let mut mesh = Mesh::new();
    /// mesh.add_vertex(DVec3::ZERO);
    /// mesh.add_face(0, 1, 2);
    /// assert!(matches!(
    ///     mesh.validate(),
    ///     Err(MeshError::VertexIndexOutOfRange { face: 0, corner: 1, .. })
    /// ));
    /// ```
    pub fn validate(&self) -> MeshResult<()> {
        if self.faces.len() > MAX_FACES {
            return Err(MeshError::TooManyFaces {
                count: self.faces.len(),
                max: MAX_FACES,
            });
        }

        let vertex_count = self.vertices.len();
        for (face, indices) in self.faces.iter().enumerate() {
            for (corner, &index) in indices.iter().enumerate() {
                if index as usize >= vertex_count {
                    return Err(MeshError::VertexIndexOutOfRange {
                        face,
                        corner,
                        index,
                        vertex_count,
                    });
                }
            }
        }

        Ok(())
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Splits every face off onto its own three vertex copies.
    ///
    /// Face `f` of the result is `[3f, 3f + 1, 3f + 2]`. No two faces share an
    /// edge afterwards, so every edge is a boundary edge and corner normals
    /// reduce to face normals.
    pub fn to_triangle_soup(&self) -> MeshResult<Mesh> {
        self.validate()?;

        let mut soup = Mesh::with_capacity(self.corner_count(), self.face_count());
        for face in 0..self.face_count() {
            let [a, b, c] = self.face_positions(face);
            let i = soup.add_vertex(a);
            let j = soup.add_vertex(b);
            let k = soup.add_vertex(c);
            soup.add_face(i, j, k);
        }

        Ok(soup)
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports face indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.faces.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_face(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_add_face() {
        let mesh = unit_triangle();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.corner_count(), 3);
        assert_eq!(mesh.face(0), [0, 1, 2]);
        assert_eq!(mesh.face_positions(0), [DVec3::ZERO, DVec3::X, DVec3::Y]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(unit_triangle().validate().is_ok());
    }

    #[test]
    fn test_mesh_validate_degenerate_is_valid() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_face(0, 0, 0);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_face(0, 1, 7);
        match mesh.validate() {
            Err(MeshError::VertexIndexOutOfRange {
                face,
                corner,
                index,
                vertex_count,
            }) => {
                assert_eq!((face, corner, index, vertex_count), (0, 2, 7, 2));
            }
            other => panic!("expected out-of-range error, got {:?}", other),
        }
    }

    #[test]
    fn test_mesh_vertices_f32() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.vertices_f32(), vec![1.0f32, 2.0, 3.0]);
    }

    #[test]
    fn test_mesh_indices_u32() {
        let mut mesh = unit_triangle();
        mesh.add_face(2, 1, 0);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2, 2, 1, 0]);
    }

    #[test]
    fn test_triangle_soup_splits_shared_vertices() {
        let mut mesh = unit_triangle();
        mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        mesh.add_face(1, 3, 2);

        let soup = mesh.to_triangle_soup().unwrap();
        assert_eq!(soup.vertex_count(), 6);
        assert_eq!(soup.face_count(), 2);
        assert_eq!(soup.face(1), [3, 4, 5]);
        assert_eq!(soup.face_positions(1), mesh.face_positions(1));
    }

    #[test]
    fn test_triangle_soup_rejects_invalid_mesh() {
        let mesh = Mesh::from_parts(vec![DVec3::ZERO], vec![[0, 1, 2]]);
        assert!(mesh.to_triangle_soup().is_err());
    }
}
