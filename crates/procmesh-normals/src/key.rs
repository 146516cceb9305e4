//! Quantized position keys.
//!
//! Vertex occurrences that share a spatial position must weld into one
//! position group even when their coordinates differ by floating-point
//! noise. Each coordinate is snapped to a fixed integer grid before
//! comparison; equality is exact equality of the three grid integers.

use std::hash::{Hash, Hasher};

use nalgebra::Point3;

/// Coordinates are scaled by this factor and rounded to the nearest
/// integer, giving a 1e-5 weld grid. Fixed constant of the algorithm.
const TOLERANCE: f32 = 100_000.0;

// FNV-1 mixing constants. Do not change these.
const FNV32_INIT: i64 = 0x811c_9dc5;
const FNV32_PRIME: i64 = 0x0100_0193;

/// A vertex position quantized to the weld grid.
///
/// Two keys are equal exactly when all three quantized components are
/// equal. The hash mixes the components FNV-1 style; only equality affects
/// correctness, the hash merely buckets.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use procmesh_normals::VertexKey;
///
/// let a = VertexKey::new(Point3::new(1.0, 2.0, 3.0));
/// let b = VertexKey::new(Point3::new(1.000_001, 2.0, 3.0));
/// let c = VertexKey::new(Point3::new(1.001, 2.0, 3.0));
///
/// assert_eq!(a, b); // below the grid resolution
/// assert_ne!(a, c); // two grid cells apart
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexKey {
    x: i64,
    y: i64,
    z: i64,
}

impl VertexKey {
    /// Quantize a position onto the weld grid.
    #[must_use]
    pub fn new(position: Point3<f32>) -> Self {
        Self {
            x: (position.x * TOLERANCE).round() as i64,
            y: (position.y * TOLERANCE).round() as i64,
            z: (position.z * TOLERANCE).round() as i64,
        }
    }

    /// The quantized grid coordinates.
    #[inline]
    #[must_use]
    pub const fn components(&self) -> (i64, i64, i64) {
        (self.x, self.y, self.z)
    }
}

impl From<Point3<f32>> for VertexKey {
    fn from(position: Point3<f32>) -> Self {
        Self::new(position)
    }
}

impl Hash for VertexKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut h = FNV32_INIT;
        h = (h ^ self.x).wrapping_mul(FNV32_PRIME);
        h = (h ^ self.y).wrapping_mul(FNV32_PRIME);
        h = (h ^ self.z).wrapping_mul(FNV32_PRIME);
        state.write_i64(h);
    }
}
