//! Vertex attribute layout description.
//!
//! Describes how the interleaved records are laid out so a buffer uploader
//! can declare the vertex format without this crate depending on any
//! graphics API.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The meaning of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VertexSemantic {
    /// 3D position.
    Position,
    /// Unit normal vector.
    Normal,
    /// Texture coordinate.
    TexCoord,
    /// RGBA color.
    Color,
}

/// One attribute of an interleaved vertex record.
///
/// All attributes are `f32` components; `offset` is the byte offset of the
/// attribute inside the record.
///
/// # Example
///
/// ```
/// use procmesh_types::{Vertex, VertexLayout, VertexSemantic};
///
/// let normal = Vertex::ATTRIBUTES
///     .iter()
///     .find(|a| a.semantic == VertexSemantic::Normal)
///     .unwrap();
/// assert_eq!(normal.components, 3);
/// assert_eq!(normal.offset, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexAttribute {
    /// What the attribute encodes.
    pub semantic: VertexSemantic,
    /// Number of `f32` components.
    pub components: usize,
    /// Byte offset within the vertex record.
    pub offset: usize,
}

impl VertexAttribute {
    /// Create an attribute description.
    #[inline]
    #[must_use]
    pub const fn new(semantic: VertexSemantic, components: usize, offset: usize) -> Self {
        Self {
            semantic,
            components,
            offset,
        }
    }

    /// Size of the attribute in bytes.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.components * std::mem::size_of::<f32>()
    }
}

/// Layout description for an interleaved vertex record.
pub trait VertexLayout: Sized {
    /// The record's attributes, in field order.
    const ATTRIBUTES: &'static [VertexAttribute];

    /// Distance in bytes between consecutive records.
    #[inline]
    #[must_use]
    fn stride() -> usize {
        std::mem::size_of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorVertex, Vertex};

    #[test]
    fn attributes_cover_the_record() {
        fn packed_size<V: VertexLayout>() -> usize {
            V::ATTRIBUTES.iter().map(VertexAttribute::size).sum()
        }

        assert_eq!(packed_size::<Vertex>(), Vertex::stride());
        assert_eq!(packed_size::<ColorVertex>(), ColorVertex::stride());
    }

    #[test]
    fn offsets_are_monotonic() {
        for window in ColorVertex::ATTRIBUTES.windows(2) {
            assert_eq!(window[0].offset + window[0].size(), window[1].offset);
        }
    }
}
