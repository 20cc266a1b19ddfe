//! # Triangle Geometry
//!
//! Per-face quantities shared by the vertex and corner normal passes:
//! unit normal, area and the incident angle at each corner.
//!
//! ```text
//!             C
//!             *
//!           /   \                   (B - A) x (C - A)
//!         /       \           n = ---------------------
//!       /           \             ||(B - A) x (C - A)||
//!    A *-------------* B
//! ```

use crate::mesh::Mesh;
use config::constants::NormalsConfig;
use glam::DVec3;
use rayon::prelude::*;
use tracing::debug;

/// Cached geometry of one triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleGeometry {
    /// Unit normal, or zero for degenerate triangles
    pub normal: DVec3,
    /// Triangle area
    pub area: f64,
    /// Incident angle (radians) at corners 0, 1 and 2
    pub angles: [f64; 3],
}

impl TriangleGeometry {
    /// Computes the geometry of the CCW triangle `(a, b, c)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mesh_normals::normals::TriangleGeometry;
    /// use glam::DVec3;
    ///
    /// let geometry = TriangleGeometry::new(DVec3::ZERO, DVec3::X, DVec3::Y);
    /// assert_eq!(geometry.normal, DVec3::Z);
    /// assert_eq!(geometry.area, 0.5);
    /// assert!((geometry.angles[0] - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn new(a: DVec3, b: DVec3, c: DVec3) -> Self {
        let e0 = b - a;
        let e1 = c - b;
        let e2 = a - c;

        let cross = e0.cross(-e2);

        Self {
            normal: normalize_or_zero(cross),
            area: cross.length() / 2.0,
            angles: [
                corner_angle(e0, -e2),
                corner_angle(e1, -e0),
                corner_angle(e2, -e1),
            ],
        }
    }

    /// Computes the geometry of face `face` of `mesh`.
    ///
    /// The mesh must have passed [`Mesh::validate`].
    #[inline]
    pub fn of_face(mesh: &Mesh, face: usize) -> Self {
        let [a, b, c] = mesh.face_positions(face);
        Self::new(a, b, c)
    }

    /// Blend weight of `corner`: triangle area times incident angle.
    #[inline]
    pub fn corner_weight(&self, corner: usize) -> f64 {
        self.area * self.angles[corner]
    }

    /// Weighted normal contributed by `corner` to the surrounding vertex.
    #[inline]
    pub fn corner_contribution(&self, corner: usize) -> DVec3 {
        self.corner_weight(corner) * self.normal
    }
}

/// Unit normal of the CCW triangle `(a, b, c)`; zero if it has no area.
///
/// # Example
///
/// ```rust
/// use mesh_normals::normals::face_normal;
/// use glam::DVec3;
///
/// assert_eq!(face_normal(DVec3::ZERO, DVec3::X, DVec3::Y), DVec3::Z);
/// assert_eq!(face_normal(DVec3::ZERO, DVec3::X, DVec3::X * 2.0), DVec3::ZERO);
/// ```
#[inline]
pub fn face_normal(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    normalize_or_zero((b - a).cross(c - a))
}

/// Scales `v` to unit length, or returns zero when it has no direction.
///
/// Divides by the length instead of multiplying by its reciprocal, so a sum
/// of parallel axis-aligned vectors normalizes to the exact axis.
#[inline]
pub fn normalize_or_zero(v: DVec3) -> DVec3 {
    let length = v.length();
    if length > 0.0 && length.is_finite() {
        v / length
    } else {
        DVec3::ZERO
    }
}

/// Angle between two edge vectors leaving the same corner.
///
/// `atan2(|u × v|, u · v)` stays accurate near 0° and 180°, where `acos` of
/// a dot product loses precision. Zero-length edges give 0.
///
/// # Example
///
/// ```rust
/// use mesh_normals::normals::corner_angle;
/// use glam::DVec3;
///
/// assert!((corner_angle(DVec3::X, DVec3::Y) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert_eq!(corner_angle(DVec3::ZERO, -DVec3::ZERO), 0.0);
/// ```
#[inline]
pub fn corner_angle(u: DVec3, v: DVec3) -> f64 {
    // atan2(0, -0) is PI
    if u == DVec3::ZERO || v == DVec3::ZERO {
        return 0.0;
    }
    u.cross(v).length().atan2(u.dot(v))
}

/// Geometry of every face, in face order.
///
/// Runs on the rayon pool when the face count reaches the configured
/// threshold. The mesh must have passed [`Mesh::validate`].
pub(crate) fn face_geometry(mesh: &Mesh, config: &NormalsConfig) -> Vec<TriangleGeometry> {
    map_faces(mesh, config, |face| TriangleGeometry::of_face(mesh, face))
}

/// Maps every face index through `op`, in parallel for large meshes.
pub(crate) fn map_faces<T, F>(mesh: &Mesh, config: &NormalsConfig, op: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    let count = mesh.face_count();
    let parallel = config.runs_parallel(count);
    debug!(faces = count, parallel, "Per-face pass");

    if parallel {
        (0..count).into_par_iter().map(op).collect()
    } else {
        (0..count).map(op).collect()
    }
}
