//! Error types for normal computation.

use thiserror::Error;

/// Result type for normal computation operations.
pub type NormalResult<T> = Result<T, NormalError>;

/// Errors that can occur during normal computation and vertex assembly.
///
/// All variants are precondition violations: the computation itself is
/// total once its inputs are valid. Degenerate geometry (zero-area
/// triangles, fully cancelling normal sums) is *not* an error; it yields
/// unnormalizable output values instead (see the crate docs).
#[derive(Debug, Error)]
pub enum NormalError {
    /// A triangle references a vertex index outside the vertex array.
    ///
    /// Reported before any output is produced; clamping or skipping the
    /// triangle would corrupt unrelated position groups.
    #[error("triangle {triangle} references vertex {index} (mesh has {vertex_count} vertices)")]
    IndexOutOfBounds {
        /// Offset of the offending triangle in the triangle array.
        triangle: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },

    /// Attribute arrays passed to the vertex assembler differ in length.
    #[error("attribute array `{attribute}` has length {actual}, expected {expected}")]
    AttributeLengthMismatch {
        /// Name of the mismatched attribute array.
        attribute: &'static str,
        /// Expected length (the position array's length).
        expected: usize,
        /// Actual length of the attribute array.
        actual: usize,
    },
}
