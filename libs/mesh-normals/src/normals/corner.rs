//! # Per-Corner Normals
//!
//! Crease-aware shading. Every corner gets the blended normal of its
//! smoothing group: the run of triangles around the corner's vertex that are
//! joined by edges whose dihedral angle stays within the crease threshold.
//!
//! ## Algorithm
//!
//! 1. Cache normal, area and corner angles of every face
//! 2. Cache `dot(n_f, n_g)` for every edge with a neighbor
//! 3. For each corner `(f, p)`, add `area × angle × n_f` to the corner itself,
//!    then carry the same contribution around the vertex:
//!    - counter-clockwise, crossing edge `p - 1`, `(q - 1)`, ... while the
//!      cached cosine passes the threshold
//!    - clockwise, crossing edge `p`, `(q + 1)`, ... unless the first walk
//!      already came back to `f` (closed fan)
//! 4. Normalize every corner
//!
//! ```text
//!        g1 ---- g0            CCW walk enters g0 through edge p-1 of f,
//!       /  \    /  \           CW walk enters g2 through edge p of f.
//!      /    \  /    \          A sharp edge or a boundary ends a walk.
//!    g2 ---- v ----- f
//! ```
//!
//! Each walk is an explicit loop bounded by the face count, so inconsistent
//! adjacency on malformed meshes cannot loop forever.

use super::geometry::{face_geometry, normalize_or_zero, TriangleGeometry};
use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::topology::{
    build_face_face_adjacency, build_vertex_face_adjacency, FaceFaceAdjacency,
};
use config::constants::NormalsConfig;
use glam::DVec3;
use std::cell::Cell;
use tracing::{debug, warn};

/// Computes one unit normal per corner with a custom crease threshold.
///
/// `smoothing_threshold_cos` is the smallest cosine of the dihedral angle
/// that still counts as smooth; the default configuration uses cos 30°
/// ([`SMOOTHING_THRESHOLD_COS`](config::constants::SMOOTHING_THRESHOLD_COS)).
/// The result has `3 × face_count` entries; entry `3f + c` is corner `c` of
/// face `f`.
///
/// # Errors
///
/// - [`MeshError::InvalidConfig`](crate::MeshError) if the threshold is
///   outside `[-1, 1]`
/// - [`MeshError::VertexIndexOutOfRange`](crate::MeshError) for malformed
///   meshes
///
/// # Example
///
/// ```rust
/// use config::constants::SMOOTHING_THRESHOLD_COS;
/// use mesh_normals::{compute_corner_normals, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);
/// mesh.add_vertex(DVec3::X);
/// mesh.add_vertex(DVec3::Y);
/// mesh.add_face(0, 1, 2);
///
/// let normals = compute_corner_normals(&mesh, SMOOTHING_THRESHOLD_COS).unwrap();
/// assert_eq!(normals, vec![DVec3::Z; 3]);
/// ```
pub fn compute_corner_normals(
    mesh: &Mesh,
    smoothing_threshold_cos: f64,
) -> MeshResult<Vec<DVec3>> {
    let defaults = NormalsConfig::default();
    let config = NormalsConfig::new(smoothing_threshold_cos, defaults.parallel_threshold)?;
    compute_corner_normals_with_config(mesh, &config)
}

/// [`compute_corner_normals`] with an explicit configuration.
pub fn compute_corner_normals_with_config(
    mesh: &Mesh,
    config: &NormalsConfig,
) -> MeshResult<Vec<DVec3>> {
    let vf = build_vertex_face_adjacency(mesh)?;
    let ff = build_face_face_adjacency(mesh, &vf)?;
    let geometry = face_geometry(mesh, config);
    Ok(smooth_corners(&ff, &geometry, config.smoothing_threshold_cos))
}

/// Accumulates and normalizes the per-corner normals.
fn smooth_corners(
    ff: &FaceFaceAdjacency,
    geometry: &[TriangleGeometry],
    threshold: f64,
) -> Vec<DVec3> {
    let walker = FanWalker::new(ff, geometry, threshold);
    let mut corners = vec![DVec3::ZERO; geometry.len() * 3];
    let mut closed_corners = 0usize;

    for (face, triangle) in geometry.iter().enumerate() {
        let face = face as u32;
        for corner in 0..3 {
            let contribution = triangle.corner_contribution(corner);
            corners[face as usize * 3 + corner] += contribution;

            let mut spread = |slot: usize| corners[slot] += contribution;
            if walker.counter_clockwise(face, corner, &mut spread) {
                closed_corners += 1;
            } else {
                walker.clockwise(face, corner, &mut spread);
            }
        }
    }

    if walker.truncated() > 0 {
        warn!(
            truncated_walks = walker.truncated(),
            "Fan walks stopped at the step limit; adjacency is inconsistent"
        );
    }
    debug!(
        corners = corners.len(),
        closed_corners,
        open_corners = corners.len() - closed_corners,
        threshold,
        "Smoothed corner normals"
    );

    corners.into_iter().map(normalize_or_zero).collect()
}

/// Walks the ring of faces around a corner's vertex.
struct FanWalker<'a> {
    ff: &'a FaceFaceAdjacency,
    /// Cosine of the dihedral angle across each edge slot; `None` without neighbor
    cosines: Vec<[Option<f64>; 3]>,
    threshold: f64,
    /// Upper bound on faces visited per direction
    max_steps: usize,
    truncated: Cell<usize>,
}

impl<'a> FanWalker<'a> {
    fn new(ff: &'a FaceFaceAdjacency, geometry: &[TriangleGeometry], threshold: f64) -> Self {
        let cosines = geometry
            .iter()
            .enumerate()
            .map(|(face, triangle)| {
                ff.neighbors(face as u32).map(|neighbor| {
                    neighbor.map(|n| triangle.normal.dot(geometry[n.face as usize].normal))
                })
            })
            .collect();

        Self {
            ff,
            cosines,
            threshold,
            max_steps: geometry.len(),
            truncated: Cell::new(0),
        }
    }

    fn truncated(&self) -> usize {
        self.truncated.get()
    }

    /// Whether edge slot `edge` of `face` is smooth enough to cross.
    #[inline]
    fn passes(&self, face: u32, edge: usize) -> bool {
        self.cosines[face as usize][edge].is_some_and(|cos| cos >= self.threshold)
    }

    /// Visits the corners counter-clockwise from `(face, corner)`.
    ///
    /// Returns true when the walk came back to `face`, i.e. the smoothing
    /// group closes around the vertex.
    fn counter_clockwise(
        &self,
        face: u32,
        corner: usize,
        visit: &mut impl FnMut(usize),
    ) -> bool {
        let mut next = self.ff.neighbor(face, prev(corner));
        let mut steps = 0;

        while let Some(neighbor) = next {
            if neighbor.face == face {
                return true;
            }
            if steps == self.max_steps {
                self.truncated.set(self.truncated.get() + 1);
                return false;
            }
            steps += 1;

            // The shared edge starts at the vertex, so its slot is also the corner slot
            let edge = neighbor.edge as usize;
            if !self.passes(neighbor.face, edge) {
                return false;
            }
            visit(neighbor.face as usize * 3 + edge);
            next = self.ff.neighbor(neighbor.face, prev(edge));
        }

        false
    }

    /// Visits the corners clockwise from `(face, corner)`.
    fn clockwise(&self, face: u32, corner: usize, visit: &mut impl FnMut(usize)) {
        let (mut current, mut slot) = (face, corner);

        for _ in 0..self.max_steps {
            let Some(neighbor) = self.ff.neighbor(current, slot) else {
                return;
            };
            if neighbor.face == face || !self.passes(current, slot) {
                return;
            }

            // The shared edge ends at the vertex on the neighbor
            current = neighbor.face;
            slot = next(neighbor.edge as usize);
            visit(current as usize * 3 + slot);
        }

        self.truncated.set(self.truncated.get() + 1);
    }
}

#[inline]
fn prev(slot: usize) -> usize {
    (slot + 2) % 3
}

#[inline]
fn next(slot: usize) -> usize {
    (slot + 1) % 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walker_for(mesh: &Mesh) -> (FaceFaceAdjacency, Vec<TriangleGeometry>) {
        let vf = build_vertex_face_adjacency(mesh).unwrap();
        let ff = build_face_face_adjacency(mesh, &vf).unwrap();
        let geometry = face_geometry(mesh, &NormalsConfig::sequential());
        (ff, geometry)
    }

    /// Flat hexagon: six triangles around vertex 0.
    fn hexagon() -> Mesh {
        crate::primitives::create_fan(6, 1.0, 0.0).unwrap()
    }

    #[test]
    fn test_closed_fan_visits_every_other_face_once() {
        let mesh = hexagon();
        let (ff, geometry) = walker_for(&mesh);
        let walker = FanWalker::new(&ff, &geometry, 0.5);

        let mut visited = Vec::new();
        let closed = walker.counter_clockwise(0, 0, &mut |slot| visited.push(slot));
        assert!(closed);
        visited.sort_unstable();
        assert_eq!(visited, vec![3, 6, 9, 12, 15]);
    }

    #[test]
    fn test_sharp_threshold_stops_both_walks() {
        let mesh = crate::primitives::create_fan(6, 1.0, 1.0).unwrap();
        let (ff, geometry) = walker_for(&mesh);
        // Nothing but coplanar faces may be crossed
        let walker = FanWalker::new(&ff, &geometry, 1.0);

        let mut visited = Vec::new();
        assert!(!walker.counter_clockwise(0, 0, &mut |slot| visited.push(slot)));
        walker.clockwise(0, 0, &mut |slot| visited.push(slot));
        assert!(visited.is_empty());
        assert_eq!(walker.truncated(), 0);
    }

    #[test]
    fn test_open_fan_is_covered_from_both_sides() {
        let full = hexagon();
        // Drop the last face to open the ring
        let mesh = Mesh::from_parts(full.vertices().to_vec(), full.faces()[..5].to_vec());
        let (ff, geometry) = walker_for(&mesh);
        let walker = FanWalker::new(&ff, &geometry, 0.5);

        // Start in the middle of the open ring
        let mut visited = Vec::new();
        assert!(!walker.counter_clockwise(2, 0, &mut |slot| visited.push(slot)));
        walker.clockwise(2, 0, &mut |slot| visited.push(slot));
        visited.sort_unstable();
        assert_eq!(visited, vec![0, 3, 9, 12]);
    }

    /// Hexagon fan plus two faces hanging off the 0-1 spoke.
    ///
    /// Face 6 runs `1 -> 0` and face 7 runs `0 -> 1`, both duplicating an
    /// edge of the ring. The ring faces have lower indices, so they keep
    /// linking to each other while faces 6 and 7 link one-way into the ring.
    fn ring_with_dangling_faces() -> Mesh {
        let mut mesh = hexagon();
        let above = mesh.add_vertex(DVec3::new(0.5, -1.0, 1.0));
        let below = mesh.add_vertex(DVec3::new(0.5, -1.0, -1.0));
        mesh.add_face(0, above, 1);
        mesh.add_face(0, 1, below);
        mesh
    }

    #[test]
    fn test_walks_stop_on_cycle_without_start_face() {
        let mesh = ring_with_dangling_faces();
        let (ff, geometry) = walker_for(&mesh);
        assert_eq!(ff.non_manifold_edge_count(), 4);
        assert_eq!(ff.neighbor(6, 2).map(|n| n.face), Some(0));
        assert_eq!(ff.neighbor(7, 0).map(|n| n.face), Some(5));

        let walker = FanWalker::new(&ff, &geometry, -1.0);

        let mut visited = Vec::new();
        assert!(!walker.counter_clockwise(6, 0, &mut |slot| visited.push(slot)));
        assert_eq!(walker.truncated(), 1);
        assert!(visited.len() <= mesh.face_count());
        assert!(visited.iter().all(|slot| slot / 3 < 6));

        visited.clear();
        walker.clockwise(7, 0, &mut |slot| visited.push(slot));
        assert_eq!(walker.truncated(), 2);
        assert!(visited.len() <= mesh.face_count());
        assert!(visited.iter().all(|slot| slot / 3 < 6));
    }

    #[test]
    fn test_truncated_walks_still_give_unit_normals() {
        let mesh = ring_with_dangling_faces();
        let (ff, geometry) = walker_for(&mesh);
        let corners = smooth_corners(&ff, &geometry, -1.0);

        assert_eq!(corners.len(), 24);
        for corner in corners {
            assert!((corner.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_isolated_triangle_keeps_face_normal() {
        let mesh = Mesh::from_parts(
            vec![DVec3::ZERO, DVec3::new(2.0, 0.0, 1.0), DVec3::new(0.0, 3.0, 0.5)],
            vec![[0, 1, 2]],
        );
        let (ff, geometry) = walker_for(&mesh);
        let corners = smooth_corners(&ff, &geometry, -1.0);
        for corner in corners {
            assert!((corner - geometry[0].normal).length() < 1e-12);
        }
    }
}
