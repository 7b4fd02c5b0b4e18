//! Atlas: Mapping mesh points to contiguous slices in a global data array.
//!
//! The `Atlas` struct provides a bijective mapping between topological
//! points (`PointId`) and sub-slices of a flat data buffer. This is used to
//! pack per-node field components into a single contiguous `Vec` for
//! efficient storage.

use std::collections::HashMap;

use crate::mesh_error::MeshShapeError;
use crate::topology::point::PointId;

/// `Atlas` maintains:
/// - a lookup `map` from each `PointId` to its `(offset, len)` in the
///   global data buffer,
/// - an `order` vector to preserve insertion order for deterministic
///   iteration,
/// - and `total_len` to track the next free offset.
///
/// # Invariants
///
/// - Each point appears exactly once in `order`.
/// - `map` contains precisely the keys listed in `order`.
/// - Every slice has `len > 0`.
/// - Offsets are contiguous in insertion order and `total_len` equals the
///   sum of all lengths.
///
/// These invariants are checked after mutations in debug builds and when the
/// `check-invariants` feature is enabled. They can also be verified manually
/// via [`validate_invariants`](Self::validate_invariants).
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Atlas {
    /// Maps each point to its slice descriptor: (starting offset, length).
    map: HashMap<PointId, (usize, usize)>,
    /// Keeps track of insertion order of points for ordered iteration.
    order: Vec<PointId>,
    /// Total length of all slices; also next available offset.
    total_len: usize,
}

impl Atlas {
    /// Insert a brand-new point `p` with a slice of length `len`.
    ///
    /// Returns the starting `offset` of this point's slice in the
    /// underlying data buffer.
    ///
    /// # Errors
    /// Returns `Err(ZeroLengthSlice)` if `len == 0`,
    /// or `Err(DuplicatePoint(p))` if `p` was already present.
    ///
    /// # Example
    /// ```rust
    /// # fn try_main() -> Result<(), mesh_shape::mesh_error::MeshShapeError> {
    /// use mesh_shape::data::atlas::Atlas;
    /// use mesh_shape::topology::point::PointId;
    /// let mut atlas = Atlas::default();
    /// let p = PointId::new(7)?;
    /// let offset = atlas.try_insert(p, 3)?;
    /// assert_eq!(offset, 0);
    /// assert_eq!(atlas.total_len(), 3);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Complexity
    /// Amortized **O(1)** for insertion; subsequent `get` is **O(1)**.
    /// Preserves **insertion order** (`order`), and `total_len` increases
    /// monotonically.
    pub fn try_insert(&mut self, p: PointId, len: usize) -> Result<usize, MeshShapeError> {
        if len == 0 {
            return Err(MeshShapeError::ZeroLengthSlice);
        }
        if self.map.contains_key(&p) {
            return Err(MeshShapeError::DuplicatePoint(p));
        }
        let offset = self.total_len;
        self.map.insert(p, (offset, len));
        self.order.push(p);
        self.total_len += len;
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        self.debug_assert_invariants();
        Ok(offset)
    }

    /// Look up the slice descriptor `(offset, len)` for point `p`.
    ///
    /// Returns `Some((offset,len))` if `p` was previously inserted,
    /// or `None` otherwise.
    #[inline]
    pub fn get(&self, p: PointId) -> Option<(usize, usize)> {
        self.map.get(&p).copied()
    }

    /// Returns true iff `p` is registered in the atlas.
    #[inline]
    pub fn contains(&self, p: PointId) -> bool {
        self.map.contains_key(&p)
    }

    /// Number of registered points.
    ///
    /// # Notes
    /// `len()` counts points, not total components; the buffer size is
    /// [`total_len`](Self::total_len).
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.order.len(), self.map.len());
        self.order.len()
    }

    /// Whether the atlas has zero points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.order.is_empty(), self.map.is_empty());
        self.order.is_empty()
    }

    /// Total length of all registered slices.
    ///
    /// This is equal to the sum of lengths of each point's slice,
    /// and is the size of the global data buffer needed.
    #[inline]
    pub fn total_len(&self) -> usize {
        self.total_len
    }

    /// Iterator over all registered points in insertion (deterministic) order.
    #[inline]
    pub fn points(&self) -> impl Iterator<Item = PointId> + '_ {
        self.order.iter().copied()
    }

    /// Verify the structural invariants listed in the type docs.
    pub fn validate_invariants(&self) -> Result<(), MeshShapeError> {
        use std::collections::HashSet;
        let set: HashSet<_> = self.order.iter().copied().collect();
        if set.len() != self.order.len() {
            return Err(MeshShapeError::DuplicatePoint(self.order[0]));
        }
        let mut expected_offset = 0usize;
        for &p in &self.order {
            let (offset, len) = self
                .map
                .get(&p)
                .copied()
                .ok_or(MeshShapeError::MissingSectionPoint(p))?;
            if len == 0 {
                return Err(MeshShapeError::ZeroLengthSlice);
            }
            if offset != expected_offset {
                return Err(MeshShapeError::SliceLengthMismatch {
                    point: p,
                    expected: expected_offset,
                    found: offset,
                });
            }
            expected_offset += len;
        }
        if expected_offset != self.total_len || self.map.len() != self.order.len() {
            return Err(MeshShapeError::ZeroLengthSlice);
        }
        Ok(())
    }

    #[cfg(any(debug_assertions, feature = "check-invariants"))]
    fn debug_assert_invariants(&self) {
        debug_assert!(self.validate_invariants().is_ok(), "Atlas invalid");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(raw: u64) -> PointId {
        PointId::new(raw).unwrap()
    }

    #[test]
    fn insert_and_lookup() {
        let mut atlas = Atlas::default();
        assert_eq!(atlas.try_insert(p(1), 2).unwrap(), 0);
        assert_eq!(atlas.try_insert(p(2), 3).unwrap(), 2);
        assert_eq!(atlas.get(p(1)), Some((0, 2)));
        assert_eq!(atlas.get(p(2)), Some((2, 3)));
        assert_eq!(atlas.get(p(3)), None);
        assert_eq!(atlas.len(), 2);
        assert_eq!(atlas.total_len(), 5);
        assert!(atlas.contains(p(2)));
    }

    #[test]
    fn rejects_zero_length_and_duplicates() {
        let mut atlas = Atlas::default();
        assert_eq!(atlas.try_insert(p(1), 0), Err(MeshShapeError::ZeroLengthSlice));
        atlas.try_insert(p(1), 1).unwrap();
        assert_eq!(
            atlas.try_insert(p(1), 1),
            Err(MeshShapeError::DuplicatePoint(p(1)))
        );
    }

    #[test]
    fn points_iterate_in_insertion_order() {
        let mut atlas = Atlas::default();
        for raw in [5, 3, 9] {
            atlas.try_insert(p(raw), 1).unwrap();
        }
        let order: Vec<u64> = atlas.points().map(|q| q.get()).collect();
        assert_eq!(order, vec![5, 3, 9]);
        assert!(atlas.validate_invariants().is_ok());
    }
}
