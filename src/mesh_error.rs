//! MeshShapeError: Unified error type for mesh-shape public APIs
//!
//! This error type is used throughout the mesh-shape library to provide robust,
//! non-panicking error handling for all public APIs.

use thiserror::Error;

use crate::data::value::ValueKind;
use crate::topology::cell_type::CellType;
use crate::topology::point::PointId;

/// Unified error type for mesh-shape operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshShapeError {
    /// Attempted to construct a PointId with a zero value (invalid).
    #[error("PointId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidPointId,
    /// A point was queried that the mesh topology does not contain.
    #[error("Topology error: point `{0}` is not part of the mesh")]
    UnknownPoint(PointId),
    /// A cell was built with the wrong number of vertices for its type.
    #[error("Topology error: {cell_type:?} requires {expected} vertices, got {found}")]
    InvalidCellArity {
        /// Cell type being built.
        cell_type: CellType,
        /// Vertex count the type requires.
        expected: usize,
        /// Vertex count supplied by the caller.
        found: usize,
    },
    /// Down-adjacency was requested at a dimension the entity does not have.
    #[error("Topology error: entity `{point}` has no down-adjacency of dimension {dim}")]
    InvalidDownDimension {
        /// Entity being queried.
        point: PointId,
        /// Requested adjacency dimension.
        dim: u8,
    },
    /// A point appeared twice in an atlas.
    #[error("Atlas error: point `{0}` already registered")]
    DuplicatePoint(PointId),
    /// Zero-length atlas slices are not representable.
    #[error("Atlas error: slices must have non-zero length")]
    ZeroLengthSlice,
    /// A section was asked for a point its atlas does not contain.
    #[error("Section error: point `{0}` is not registered in the atlas")]
    MissingSectionPoint(PointId),
    /// Slice data of the wrong length was written to a section point.
    #[error("Section error: slice for `{point}` expects length {expected}, got {found}")]
    SliceLengthMismatch {
        /// Point being written.
        point: PointId,
        /// Registered slice length.
        expected: usize,
        /// Length of the supplied data.
        found: usize,
    },
    /// A node index outside a field's per-entity node count.
    #[error("Field error: node {node} out of range for `{point}` ({nodes} node(s))")]
    NodeOutOfRange {
        /// Entity being accessed.
        point: PointId,
        /// Offending node index.
        node: usize,
        /// Number of nodes the field stores on the entity.
        nodes: usize,
    },
    /// A shape family has no evaluator for the requested topological type.
    #[error("Shape error: {family} family does not support cell type {cell_type:?}")]
    UnsupportedTopology {
        /// Requested cell type.
        cell_type: CellType,
        /// Name of the shape family.
        family: &'static str,
    },
    /// A shape family was requested at a polynomial order it does not define.
    #[error("Shape error: no {family} family of order {order}")]
    UnsupportedOrder {
        /// Requested polynomial order.
        order: u32,
        /// Name of the shape family.
        family: &'static str,
    },
    /// An evaluator produced vectors whose length disagrees with its node count.
    #[error(
        "Shape error: evaluator for {cell_type:?} produced {found} entries but declares {declared} nodes"
    )]
    MalformedNodeCount {
        /// Cell type of the offending evaluator.
        cell_type: CellType,
        /// Node count the evaluator declares.
        declared: usize,
        /// Length actually produced.
        found: usize,
    },
    /// Two fields (or a field and a typed accessor) disagree on value kind.
    #[error("{operation}: value kind mismatch (destination {to:?}, source {from:?})")]
    ValueKindMismatch {
        /// Operation that detected the mismatch.
        operation: &'static str,
        /// Kind reported by the destination side.
        to: ValueKind,
        /// Kind reported by the source side.
        from: ValueKind,
    },
}
