//! Interleaved vertex records.

use bytemuck::{Pod, Zeroable};
use nalgebra::{Point3, Vector2, Vector3, Vector4};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::layout::{VertexAttribute, VertexLayout, VertexSemantic};

/// Interleaved vertex record: position, normal, texture coordinate.
///
/// # Memory Layout
///
/// Total size: 32 bytes
/// - position: 12 bytes (3 × f32)
/// - normal: 12 bytes (3 × f32)
/// - uv: 8 bytes (2 × f32)
///
/// # Example
///
/// ```
/// use procmesh_types::Vertex;
///
/// let v = Vertex::new([1.0, 2.0, 3.0], [0.0, 0.0, 1.0], [0.5, 0.5]);
/// assert_eq!(v.position, [1.0, 2.0, 3.0]);
/// assert_eq!(std::mem::size_of::<Vertex>(), 32);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// Vertex position.
    pub position: [f32; 3],
    /// Unit normal vector (zero until computed).
    pub normal: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
}

impl Vertex {
    /// Create a vertex record from raw attribute values.
    #[inline]
    #[must_use]
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Create a vertex with only a position; normal and uv are zero.
    ///
    /// # Example
    ///
    /// ```
    /// use procmesh_types::Vertex;
    ///
    /// let v = Vertex::from_position([1.0, 0.0, 0.0]);
    /// assert_eq!(v.normal, [0.0; 3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_position(position: [f32; 3]) -> Self {
        Self {
            position,
            normal: [0.0; 3],
            uv: [0.0; 2],
        }
    }

    /// Position as a nalgebra point.
    #[inline]
    #[must_use]
    pub fn position_point(&self) -> Point3<f32> {
        Point3::from(self.position)
    }

    /// Normal as a nalgebra vector.
    #[inline]
    #[must_use]
    pub fn normal_vector(&self) -> Vector3<f32> {
        Vector3::from(self.normal)
    }

    /// Overwrite the normal slot.
    #[inline]
    pub fn set_normal(&mut self, normal: Vector3<f32>) {
        self.normal = normal.into();
    }
}

impl VertexLayout for Vertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute::new(VertexSemantic::Position, 3, 0),
        VertexAttribute::new(VertexSemantic::Normal, 3, 12),
        VertexAttribute::new(VertexSemantic::TexCoord, 2, 24),
    ];
}

/// Interleaved vertex record with an RGBA color.
///
/// # Memory Layout
///
/// Total size: 48 bytes
/// - position: 12 bytes (3 × f32)
/// - normal: 12 bytes (3 × f32)
/// - uv: 8 bytes (2 × f32)
/// - color: 16 bytes (4 × f32)
///
/// # Example
///
/// ```
/// use procmesh_types::ColorVertex;
///
/// assert_eq!(std::mem::size_of::<ColorVertex>(), 48);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorVertex {
    /// Vertex position.
    pub position: [f32; 3],
    /// Unit normal vector (zero until computed).
    pub normal: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
    /// RGBA color, components in `[0, 1]`.
    pub color: [f32; 4],
}

impl ColorVertex {
    /// Create a vertex record from raw attribute values.
    #[inline]
    #[must_use]
    pub const fn new(
        position: [f32; 3],
        normal: [f32; 3],
        uv: [f32; 2],
        color: [f32; 4],
    ) -> Self {
        Self {
            position,
            normal,
            uv,
            color,
        }
    }

    /// Position as a nalgebra point.
    #[inline]
    #[must_use]
    pub fn position_point(&self) -> Point3<f32> {
        Point3::from(self.position)
    }

    /// Overwrite the normal slot.
    #[inline]
    pub fn set_normal(&mut self, normal: Vector3<f32>) {
        self.normal = normal.into();
    }
}

impl VertexLayout for ColorVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute::new(VertexSemantic::Position, 3, 0),
        VertexAttribute::new(VertexSemantic::Normal, 3, 12),
        VertexAttribute::new(VertexSemantic::TexCoord, 2, 24),
        VertexAttribute::new(VertexSemantic::Color, 4, 32),
    ];
}

impl From<Vertex> for ColorVertex {
    /// Extend a slim vertex with opaque white.
    fn from(v: Vertex) -> Self {
        Self {
            position: v.position,
            normal: v.normal,
            uv: v.uv,
            color: [1.0; 4],
        }
    }
}

/// Build a slim vertex from nalgebra attribute values.
impl From<(Point3<f32>, Vector3<f32>, Vector2<f32>)> for Vertex {
    fn from((position, normal, uv): (Point3<f32>, Vector3<f32>, Vector2<f32>)) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            uv: uv.into(),
        }
    }
}

/// Build a color vertex from nalgebra attribute values.
impl From<(Point3<f32>, Vector3<f32>, Vector2<f32>, Vector4<f32>)> for ColorVertex {
    fn from(
        (position, normal, uv, color): (Point3<f32>, Vector3<f32>, Vector2<f32>, Vector4<f32>),
    ) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            uv: uv.into(),
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(std::mem::size_of::<ColorVertex>(), 48);
    }

    #[test]
    fn cast_slice_round_trip() {
        let verts = [
            Vertex::from_position([0.0, 0.0, 0.0]),
            Vertex::from_position([1.0, 0.0, 0.0]),
        ];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 64);

        let back: &[Vertex] = bytemuck::cast_slice(bytes);
        assert_eq!(back, &verts);
    }

    #[test]
    fn set_normal_writes_slot() {
        let mut v = Vertex::from_position([0.0, 0.0, 0.0]);
        v.set_normal(Vector3::z());
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn nalgebra_bridges() {
        let v = Vertex::new([1.0, 2.0, 3.0], [0.0, 1.0, 0.0], [0.5, 0.25]);
        assert_eq!(v.position_point(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(v.normal_vector(), Vector3::y());
    }

    #[test]
    fn color_vertex_from_slim() {
        let v = Vertex::from_position([1.0, 2.0, 3.0]);
        let c = ColorVertex::from(v);
        assert_eq!(c.position, v.position);
        assert_eq!(c.color, [1.0; 4]);
    }
}
