//! # Normals
//!
//! Surface normals at three granularities:
//!
//! | Mode | Layout | Entries |
//! |------|--------|---------|
//! | [`ShadingMode::Flat`] | one per face | `F` |
//! | [`ShadingMode::Smooth`] | one per vertex | `V` |
//! | [`ShadingMode::Sharp`] | one per face corner | `3F` |
//!
//! Vertex and corner normals blend face normals weighted by
//! `area × incident angle`. Corner normals only blend across edges whose
//! dihedral angle is within the crease threshold, so hard edges stay hard.

mod corner;
mod face;
mod geometry;
mod vertex;


pub use corner::{compute_corner_normals, compute_corner_normals_with_config};
pub use face::{compute_face_normals, compute_face_normals_with_config};
pub use geometry::{corner_angle, face_normal, normalize_or_zero, TriangleGeometry};
pub use vertex::{compute_vertex_normals, compute_vertex_normals_with_config};

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::{approx_zero, NormalsConfig};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Which normals a renderer wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingMode {
    /// Per-face normals
    Flat,
    /// Per-vertex normals
    Smooth,
    /// Per-corner normals with creases
    Sharp,
}

/// Normals computed for one [`ShadingMode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "normals")]
pub enum NormalField {
    /// Indexed by face
    #[serde(rename = "flat")]
    PerFace(Vec<DVec3>),
    /// Indexed by vertex
    #[serde(rename = "smooth")]
    PerVertex(Vec<DVec3>),
    /// Indexed by `3 × face + corner`
    #[serde(rename = "sharp")]
    PerCorner(Vec<DVec3>),
}

impl NormalField {
    /// Returns the shading mode this field was computed for.
    pub fn mode(&self) -> ShadingMode {
        match self {
            Self::PerFace(_) => ShadingMode::Flat,
            Self::PerVertex(_) => ShadingMode::Smooth,
            Self::PerCorner(_) => ShadingMode::Sharp,
        }
    }

    /// Returns the normals in the field's own layout.
    #[inline]
    pub fn as_slice(&self) -> &[DVec3] {
        match self {
            Self::PerFace(normals) | Self::PerVertex(normals) | Self::PerCorner(normals) => {
                normals
            }
        }
    }

    /// Consumes the field and returns the normals.
    pub fn into_vec(self) -> Vec<DVec3> {
        match self {
            Self::PerFace(normals) | Self::PerVertex(normals) | Self::PerCorner(normals) => {
                normals
            }
        }
    }

    /// Returns the number of normals.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if the field holds no normals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Number of normals without a direction (zero or near-zero length).
    pub fn undefined_count(&self) -> usize {
        self.as_slice()
            .iter()
            .filter(|n| approx_zero(n.length()))
            .count()
    }

    /// Exports normals as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn to_f32(&self) -> Vec<f32> {
        self.as_slice()
            .iter()
            .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .collect()
    }

    /// Returns the normal a renderer uses at `corner` of `face`.
    ///
    /// Returns `Ok(None)` if `face` or `corner` is out of range.
    ///
    /// # Errors
    ///
    /// Fails if the mesh is malformed or the field was computed for a mesh
    /// with a different element count.
    pub fn corner_normal(
        &self,
        mesh: &Mesh,
        face: usize,
        corner: usize,
    ) -> MeshResult<Option<DVec3>> {
        self.check_layout(mesh)?;

        if face >= mesh.face_count() || corner >= 3 {
            return Ok(None);
        }
        Ok(Some(self.resolve(mesh, face, corner)))
    }

    /// Converts the field to the per-corner layout, `3 × face_count` entries.
    ///
    /// # Errors
    ///
    /// Same as [`NormalField::corner_normal`].
    pub fn expand_to_corners(&self, mesh: &Mesh) -> MeshResult<Vec<DVec3>> {
        self.check_layout(mesh)?;

        if let Self::PerCorner(normals) = self {
            return Ok(normals.clone());
        }
        Ok((0..mesh.face_count())
            .flat_map(|face| (0..3).map(move |corner| (face, corner)))
            .map(|(face, corner)| self.resolve(mesh, face, corner))
            .collect())
    }

    /// Validates the mesh and the field length against it.
    fn check_layout(&self, mesh: &Mesh) -> MeshResult<()> {
        mesh.validate()?;

        let expected = match self {
            Self::PerFace(_) => mesh.face_count(),
            Self::PerVertex(_) => mesh.vertex_count(),
            Self::PerCorner(_) => mesh.corner_count(),
        };
        if self.len() != expected {
            return Err(MeshError::FieldMismatch {
                expected,
                found: self.len(),
            });
        }
        Ok(())
    }

    /// Looks up a corner after [`NormalField::check_layout`] passed.
    #[inline]
    fn resolve(&self, mesh: &Mesh, face: usize, corner: usize) -> DVec3 {
        match self {
            Self::PerFace(normals) => normals[face],
            Self::PerVertex(normals) => normals[mesh.face(face)[corner] as usize],
            Self::PerCorner(normals) => normals[face * 3 + corner],
        }
    }
}

/// Computes the normals for a shading mode.
///
/// # Example
///
/// ```rust
/// use config::constants::NormalsConfig;
/// use mesh_normals::normals::{compute_normals, ShadingMode};
/// use mesh_normals::primitives::create_cube;
/// use glam::DVec3;
///
/// let cube = create_cube(DVec3::splat(2.0), true).unwrap();
/// let field = compute_normals(&cube, ShadingMode::Sharp, &NormalsConfig::default()).unwrap();
/// assert_eq!(field.len(), 36);
/// ```
pub fn compute_normals(
    mesh: &Mesh,
    mode: ShadingMode,
    config: &NormalsConfig,
) -> MeshResult<NormalField> {
    Ok(match mode {
        ShadingMode::Flat => {
            NormalField::PerFace(compute_face_normals_with_config(mesh, config)?)
        }
        ShadingMode::Smooth => {
            NormalField::PerVertex(compute_vertex_normals_with_config(mesh, config)?)
        }
        ShadingMode::Sharp => {
            NormalField::PerCorner(compute_corner_normals_with_config(mesh, config)?)
        }
    })
}
