//! Spatial vertex index.
//!
//! A multimap from quantized position to the triangle corners touching that
//! position. Built once during the face normal pass, then queried read-only
//! by the resolution phase.

use hashbrown::HashMap;
use nalgebra::Point3;

use crate::key::VertexKey;

/// One triangle corner incident to a position group.
///
/// `vertex` is the *occurrence* index into the flat vertex array; several
/// entries may share the same occurrence (one per incident triangle), and
/// several occurrences may share the same position group (hard-edge
/// duplication).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexEntry {
    /// Offset of the triangle in the triangle array.
    pub triangle: u32,
    /// Vertex occurrence index referenced by that triangle's corner.
    pub vertex: u32,
}

/// Multimap from quantized position to incident triangle corners.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use procmesh_normals::{SpatialVertexIndex, VertexEntry};
///
/// let mut index = SpatialVertexIndex::with_capacity(4);
/// let p = Point3::new(0.0, 0.0, 0.0);
/// index.insert(p, VertexEntry { triangle: 0, vertex: 2 });
/// index.insert(p, VertexEntry { triangle: 1, vertex: 5 });
///
/// assert_eq!(index.group_count(), 1);
/// assert_eq!(index.entries_at(p).len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpatialVertexIndex {
    map: HashMap<VertexKey, Vec<VertexEntry>>,
}

impl SpatialVertexIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Create an index sized for roughly `groups` position groups.
    #[must_use]
    pub fn with_capacity(groups: usize) -> Self {
        Self {
            map: HashMap::with_capacity(groups),
        }
    }

    /// Record that a triangle corner touches `position`.
    pub fn insert(&mut self, position: Point3<f32>, entry: VertexEntry) {
        self.map.entry(VertexKey::new(position)).or_default().push(entry);
    }

    /// All corners recorded for the position group containing `position`.
    ///
    /// Returns an empty slice for positions no triangle touches.
    #[must_use]
    pub fn entries_at(&self, position: Point3<f32>) -> &[VertexEntry] {
        self.map
            .get(&VertexKey::new(position))
            .map_or(&[], Vec::as_slice)
    }

    /// Iterate over all position groups and their entries.
    ///
    /// Group iteration order is unspecified; resolution is defined so the
    /// output does not depend on it.
    pub fn groups(&self) -> impl Iterator<Item = (&VertexKey, &[VertexEntry])> {
        self.map.iter().map(|(key, entries)| (key, entries.as_slice()))
    }

    /// Number of distinct position groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.map.len()
    }

    /// Total number of recorded corners (three per triangle).
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }

    /// Check whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
