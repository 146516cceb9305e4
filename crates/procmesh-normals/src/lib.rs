//! Crease-aware vertex normal recomputation for triangle meshes.
//!
//! Given vertex positions and triangle indices, this crate recomputes
//! per-occurrence smooth normals honoring a crease angle: faces meeting at
//! an angle within the threshold share a smooth normal, sharper edges stay
//! hard. Vertex occurrences that duplicate a position (hard-edge splits
//! carrying different uvs or normals) are welded through a quantized
//! spatial index, so smoothing works across the duplicates without touching
//! the mesh topology.
//!
//! The crate also provides the assembler input path that zips separately
//! computed attribute arrays into the interleaved records of
//! [`procmesh_types`].
//!
//! # Example
//!
//! ```
//! use nalgebra::{Point3, Vector2};
//! use procmesh_types::Triangle;
//! use procmesh_normals::{interleave_vertices, smooth_normals, DEFAULT_CREASE_ANGLE_DEG};
//!
//! let positions = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let triangles = [Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)];
//!
//! let normals = smooth_normals(&positions, &triangles, DEFAULT_CREASE_ANGLE_DEG).unwrap();
//!
//! let uvs = [Vector2::zeros(); 4];
//! let vertices = interleave_vertices(&positions, &normals, &uvs).unwrap();
//! assert_eq!(vertices.len(), 4);
//! ```
//!
//! # Degenerate geometry
//!
//! Zero-area triangles and fully cancelling accumulations normalize to NaN;
//! that value propagates to the output rather than being silently replaced.
//! Callers wanting a fallback normal must substitute one themselves.
//!
//! # Parallelism
//!
//! With the `parallel` feature, the face pass fans out per triangle and the
//! resolution per position group (rayon). The two phases stay strictly
//! separated; results are identical to the serial path.

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod assemble;
mod error;
mod index;
mod key;
mod solver;

pub use assemble::{interleave_color_vertices, interleave_vertices};
pub use error::{NormalError, NormalResult};
pub use index::{SpatialVertexIndex, VertexEntry};
pub use key::VertexKey;
pub use solver::{
    face_normals, recalculate_normals, smooth_normals, DEFAULT_CREASE_ANGLE_DEG,
};

// Re-export the types crate; the solver API is expressed in its terms.
pub use procmesh_types as types;
