//! Section: Field data storage over a topology atlas.
//!
//! The `Section<V>` type couples an `Atlas` (mapping points to slices in a
//! contiguous array) with a `Vec<V>` to hold the actual data. It provides
//! fallible methods for accessing and iterating per-point data slices.

use crate::data::atlas::Atlas;
use crate::mesh_error::MeshShapeError;
use crate::topology::point::PointId;

/// Storage for per-point field data, backed by an `Atlas`.
#[derive(Clone, Debug)]
pub struct Section<V> {
    /// Atlas mapping each `PointId` to (offset, length) in `data`.
    atlas: Atlas,
    /// Contiguous storage of values for all points.
    data: Vec<V>,
}

impl<V: Clone + Default> Section<V> {
    /// Construct a new `Section` given an existing `Atlas`.
    ///
    /// Initializes the data buffer with `V::default()` repeated for each
    /// component slot in the atlas.
    pub fn new(atlas: Atlas) -> Self {
        let data = vec![V::default(); atlas.total_len()];
        Section { atlas, data }
    }

    /// The atlas describing this section's layout.
    #[inline]
    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    /// Read-only view of the data slice for a given point `p`.
    ///
    /// # Errors
    /// Returns `Err(MissingSectionPoint(p))` if `p` is not registered in the
    /// atlas.
    #[inline]
    pub fn try_restrict(&self, p: PointId) -> Result<&[V], MeshShapeError> {
        let (offset, len) = self
            .atlas
            .get(p)
            .ok_or(MeshShapeError::MissingSectionPoint(p))?;
        Ok(&self.data[offset..offset + len])
    }

    /// Mutable view of the data slice for a given point `p`.
    ///
    /// # Errors
    /// Returns `Err(MissingSectionPoint(p))` if `p` is not registered in the
    /// atlas.
    #[inline]
    pub fn try_restrict_mut(&mut self, p: PointId) -> Result<&mut [V], MeshShapeError> {
        let (offset, len) = self
            .atlas
            .get(p)
            .ok_or(MeshShapeError::MissingSectionPoint(p))?;
        Ok(&mut self.data[offset..offset + len])
    }

    /// Overwrite the data slice at point `p` with the values in `val`.
    ///
    /// # Errors
    /// Returns `Err(MissingSectionPoint(p))` if `p` is unknown, or
    /// `Err(SliceLengthMismatch)` if `val` has the wrong length.
    pub fn try_set(&mut self, p: PointId, val: &[V]) -> Result<(), MeshShapeError> {
        let target = self.try_restrict_mut(p)?;
        if target.len() != val.len() {
            return Err(MeshShapeError::SliceLengthMismatch {
                point: p,
                expected: target.len(),
                found: val.len(),
            });
        }
        target.clone_from_slice(val);
        Ok(())
    }

    /// Overwrite every component slot in the section with `value`.
    pub fn fill(&mut self, value: V) {
        for slot in &mut self.data {
            *slot = value.clone();
        }
    }

    /// Iterate over `(PointId, &[V])` for all points in atlas order.
    ///
    /// Useful for visiting all data in a deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &[V])> {
        self.atlas.points().map(move |pid| {
            let (offset, len) = self.atlas.get(pid).expect("atlas points are registered");
            (pid, &self.data[offset..offset + len])
        })
    }
}
