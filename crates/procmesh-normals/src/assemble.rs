//! Vertex buffer assembly.
//!
//! Zips separately-computed attribute arrays into the interleaved records a
//! buffer uploader consumes. Length mismatches are reported before any
//! allocation happens.

use nalgebra::{Point3, Vector2, Vector3, Vector4};
use procmesh_types::{ColorVertex, Vertex};

use crate::error::{NormalError, NormalResult};

/// Interleave position, normal and uv arrays into [`Vertex`] records.
///
/// # Errors
///
/// [`NormalError::AttributeLengthMismatch`] if `normals` or `uvs` differ in
/// length from `positions`. The check runs before any work begins.
///
/// # Example
///
/// ```
/// use nalgebra::{Point3, Vector2, Vector3};
/// use procmesh_normals::interleave_vertices;
///
/// let positions = [Point3::new(0.0, 0.0, 0.0)];
/// let normals = [Vector3::z()];
/// let uvs = [Vector2::new(0.5, 0.5)];
///
/// let verts = interleave_vertices(&positions, &normals, &uvs).unwrap();
/// assert_eq!(verts[0].normal, [0.0, 0.0, 1.0]);
/// ```
pub fn interleave_vertices(
    positions: &[Point3<f32>],
    normals: &[Vector3<f32>],
    uvs: &[Vector2<f32>],
) -> NormalResult<Vec<Vertex>> {
    check_length("normals", positions.len(), normals.len())?;
    check_length("uvs", positions.len(), uvs.len())?;

    Ok(positions
        .iter()
        .zip(normals)
        .zip(uvs)
        .map(|((&position, &normal), &uv)| Vertex::from((position, normal, uv)))
        .collect())
}

/// Interleave position, normal, uv and color arrays into [`ColorVertex`]
/// records.
///
/// # Errors
///
/// [`NormalError::AttributeLengthMismatch`] if any attribute array differs
/// in length from `positions`.
pub fn interleave_color_vertices(
    positions: &[Point3<f32>],
    normals: &[Vector3<f32>],
    uvs: &[Vector2<f32>],
    colors: &[Vector4<f32>],
) -> NormalResult<Vec<ColorVertex>> {
    check_length("normals", positions.len(), normals.len())?;
    check_length("uvs", positions.len(), uvs.len())?;
    check_length("colors", positions.len(), colors.len())?;

    Ok(positions
        .iter()
        .zip(normals)
        .zip(uvs)
        .zip(colors)
        .map(|(((&position, &normal), &uv), &color)| {
            ColorVertex::from((position, normal, uv, color))
        })
        .collect())
}

fn check_length(attribute: &'static str, expected: usize, actual: usize) -> NormalResult<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(NormalError::AttributeLengthMismatch {
            attribute,
            expected,
            actual,
        })
    }
}
