//! Crease-aware vertex normal recomputation.
//!
//! Two phases with a barrier between them:
//!
//! 1. **Face pass** - one unit normal per triangle, plus the spatial vertex
//!    index mapping each quantized corner position to its incident corners.
//! 2. **Resolution** - per position group, an all-pairs reduction decides
//!    which incident face normals average into each vertex occurrence.
//!
//! Corners that share an occurrence slot always average. Corners that only
//! share a position average when the angle between their face normals is
//! within the crease angle (`dot >= cos(angle)`, inclusive, so faces exactly
//! at the crease angle count as smooth).

use nalgebra::{Point3, Vector3};
use procmesh_types::{Triangle, Vertex};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{NormalError, NormalResult};
use crate::index::{SpatialVertexIndex, VertexEntry};

/// Crease angle used by the mesh-building convenience paths, in degrees.
pub const DEFAULT_CREASE_ANGLE_DEG: f32 = 60.0;

/// Compute smooth per-occurrence vertex normals.
///
/// Returns one normal per entry of `positions`, in the same order. Faces
/// meeting at an angle within `crease_angle_deg` contribute to a shared
/// smooth normal; sharper edges stay hard. Occurrences that share a
/// quantized position are welded for averaging purposes even when they are
/// distinct array entries (hard-edge duplication).
///
/// A crease angle of 180° smooths everything that shares a position; 0°
/// yields faceted shading.
///
/// # Errors
///
/// [`NormalError::IndexOutOfBounds`] if any triangle references a vertex
/// outside `positions`. Validation happens before any computation.
///
/// # Degenerate input
///
/// Zero-area triangles have no normal direction; their face normal and any
/// accumulation they poison come out as NaN. Fully cancelling contributions
/// likewise normalize to NaN. Neither is corrected here; callers needing a
/// fallback must substitute one themselves. Occurrences referenced by no
/// triangle are left as the zero vector.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use procmesh_types::Triangle;
/// use procmesh_normals::smooth_normals;
///
/// // A flat unit quad in the XY plane, split into two triangles.
/// let positions = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let triangles = [Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)];
///
/// let normals = smooth_normals(&positions, &triangles, 60.0).unwrap();
/// for n in &normals {
///     assert!((n.z - 1.0).abs() < 1e-6);
/// }
/// ```
pub fn smooth_normals(
    positions: &[Point3<f32>],
    triangles: &[Triangle],
    crease_angle_deg: f32,
) -> NormalResult<Vec<Vector3<f32>>> {
    let (normals, _) = solve(positions, triangles, crease_angle_deg)?;
    Ok(normals)
}

/// Recompute the normal slots of an interleaved vertex array in place.
///
/// Reads positions from `vertices`, runs [`smooth_normals`], and writes the
/// result back into each record's normal slot. Records referenced by no
/// triangle keep whatever normal they already carried.
///
/// # Errors
///
/// [`NormalError::IndexOutOfBounds`] if any triangle references a vertex
/// outside `vertices`; no slot is written in that case.
pub fn recalculate_normals(
    vertices: &mut [Vertex],
    triangles: &[Triangle],
    crease_angle_deg: f32,
) -> NormalResult<()> {
    let positions: Vec<Point3<f32>> = vertices.iter().map(Vertex::position_point).collect();
    let (normals, written) = solve(&positions, triangles, crease_angle_deg)?;

    for (i, vertex) in vertices.iter_mut().enumerate() {
        if written[i] {
            vertex.set_normal(normals[i]);
        }
    }
    Ok(())
}

/// Compute one unit normal per triangle (flat shading).
///
/// Degenerate triangles yield NaN components.
///
/// # Errors
///
/// [`NormalError::IndexOutOfBounds`] if any triangle references a vertex
/// outside `positions`.
pub fn face_normals(
    positions: &[Point3<f32>],
    triangles: &[Triangle],
) -> NormalResult<Vec<Vector3<f32>>> {
    validate_indices(positions.len(), triangles)?;
    Ok(triangles
        .iter()
        .map(|tri| triangle_normal(positions, tri))
        .collect())
}

/// Fail on the first triangle referencing outside the vertex array.
///
/// Runs to completion before any output is produced, so a bad triangle can
/// never corrupt position groups built from the good ones.
fn validate_indices(vertex_count: usize, triangles: &[Triangle]) -> NormalResult<()> {
    for (t, tri) in triangles.iter().enumerate() {
        for &index in &tri.indices {
            if index as usize >= vertex_count {
                return Err(NormalError::IndexOutOfBounds {
                    triangle: t,
                    index,
                    vertex_count,
                });
            }
        }
    }
    Ok(())
}

/// Unit face normal from the winding convention `(v1-v0) × (v2-v0)`.
#[inline]
fn triangle_normal(positions: &[Point3<f32>], tri: &Triangle) -> Vector3<f32> {
    let [a, b, c] = tri.indices;
    let p0 = positions[a as usize];
    let e1 = positions[b as usize] - p0;
    let e2 = positions[c as usize] - p0;
    e1.cross(&e2).normalize()
}

fn solve(
    positions: &[Point3<f32>],
    triangles: &[Triangle],
    crease_angle_deg: f32,
) -> NormalResult<(Vec<Vector3<f32>>, Vec<bool>)> {
    validate_indices(positions.len(), triangles)?;

    // The dot product of two unit face normals is the cosine of the angle
    // between the faces; a larger cosine means a smaller angle.
    let cosine_threshold = crease_angle_deg.to_radians().cos();

    let (tri_normals, index) = face_pass(positions, triangles);
    debug!(
        "face pass: {} triangles, {} position groups",
        triangles.len(),
        index.group_count()
    );

    let mut normals = vec![Vector3::zeros(); positions.len()];
    let mut written = vec![false; positions.len()];
    resolve(&index, &tri_normals, cosine_threshold, &mut normals, &mut written);

    Ok((normals, written))
}

/// Phase 1: face normals for every triangle and the corner incidence index.
///
/// All insertions complete before resolution starts; the index is read-only
/// afterwards.
fn face_pass(
    positions: &[Point3<f32>],
    triangles: &[Triangle],
) -> (Vec<Vector3<f32>>, SpatialVertexIndex) {
    #[cfg(feature = "parallel")]
    let tri_normals: Vec<Vector3<f32>> = triangles
        .par_iter()
        .map(|tri| triangle_normal(positions, tri))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let tri_normals: Vec<Vector3<f32>> = triangles
        .iter()
        .map(|tri| triangle_normal(positions, tri))
        .collect();

    let mut index = SpatialVertexIndex::with_capacity(positions.len());
    for (t, tri) in triangles.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)] // u32 indices bound the mesh size
        let t = t as u32;
        for &corner in &tri.indices {
            index.insert(
                positions[corner as usize],
                VertexEntry {
                    triangle: t,
                    vertex: corner,
                },
            );
        }
    }

    (tri_normals, index)
}

/// Phase 2: resolve every position group and scatter into the output slots.
///
/// Groups touch disjoint occurrence slots (a slot's position maps to
/// exactly one key), so scattering cannot race.
fn resolve(
    index: &SpatialVertexIndex,
    tri_normals: &[Vector3<f32>],
    cosine_threshold: f32,
    normals: &mut [Vector3<f32>],
    written: &mut [bool],
) {
    #[cfg(feature = "parallel")]
    let resolved: Vec<Vec<(u32, Vector3<f32>)>> = {
        let groups: Vec<&[VertexEntry]> = index.groups().map(|(_, entries)| entries).collect();
        groups
            .par_iter()
            .map(|entries| resolve_group(entries, tri_normals, cosine_threshold))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let resolved = index
        .groups()
        .map(|(_, entries)| resolve_group(entries, tri_normals, cosine_threshold));

    for group in resolved {
        for (slot, normal) in group {
            normals[slot as usize] = normal;
            written[slot as usize] = true;
        }
    }
}

/// All-pairs reduction over one position group.
///
/// Returns the final normal for every occurrence slot appearing in the
/// group. Each slot's accumulator sums the contributions of *all* of its
/// incidence entries, so the result is a commutative reduction independent
/// of entry order.
fn resolve_group(
    entries: &[VertexEntry],
    tri_normals: &[Vector3<f32>],
    cosine_threshold: f32,
) -> Vec<(u32, Vector3<f32>)> {
    // Local fan-out is small (typically <= 8 corners), linear scans beat a map.
    let mut slots: Vec<(u32, Vector3<f32>)> = Vec::with_capacity(entries.len());

    for lhs in entries {
        let lhs_normal = tri_normals[lhs.triangle as usize];
        let mut sum = Vector3::zeros();

        for rhs in entries {
            let rhs_normal = tri_normals[rhs.triangle as usize];
            if rhs.vertex == lhs.vertex {
                // Same occurrence slot shared by several faces: always average.
                sum += rhs_normal;
            } else if lhs_normal.dot(&rhs_normal) >= cosine_threshold {
                // Welded duplicate within the crease angle.
                sum += rhs_normal;
            }
        }

        match slots.iter_mut().find(|(slot, _)| *slot == lhs.vertex) {
            Some((_, acc)) => *acc += sum,
            None => slots.push((lhs.vertex, sum)),
        }
    }

    for (_, acc) in &mut slots {
        *acc = acc.normalize();
    }
    slots
}
