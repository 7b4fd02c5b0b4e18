//! Shape-function families over mesh entity types.
//!
//! A [`FieldShape`] couples a registry of per-entity-type basis evaluators
//! ([`EntityShape`]) with node-placement metadata: which dimensions carry
//! nodes, how many nodes an entity stores, and the local coordinate of each
//! node. Families are plain constructed values, not hidden global state;
//! [`shape_for_order`] resolves the family serving a polynomial order.

pub mod hierarchic;
pub mod lagrange;

pub use hierarchic::HierarchicShape;
pub use lagrange::LagrangeShape;

use std::sync::Arc;

use crate::data::value::Vector3;
use crate::mesh_error::MeshShapeError;
use crate::topology::cell_type::CellType;

/// Basis evaluator for one topological type.
///
/// Implementations are stateless. `count_nodes` equals the length of the
/// vectors produced by `values` and `local_gradients`; callers index into
/// them positionally, in the entity's canonical down-adjacency order.
pub trait EntityShape: Send + Sync {
    /// Number of shape nodes on this entity type.
    fn count_nodes(&self) -> usize;

    /// Basis values at a local coordinate, one per node.
    fn values(&self, xi: Vector3) -> Vec<f64>;

    /// Local-coordinate gradients of the basis, parallel to `values`.
    fn local_gradients(&self, xi: Vector3) -> Vec<Vector3>;
}

/// A complete shape-function family: evaluator registry plus node metadata.
pub trait FieldShape: Send + Sync {
    /// Family name for diagnostics.
    fn name(&self) -> &'static str;

    /// The evaluator for a topological type.
    ///
    /// # Errors
    /// [`MeshShapeError::UnsupportedTopology`] if the family defines no
    /// basis on `cell_type`; an unsupported type is never silently mapped
    /// to a zero evaluator.
    fn entity_shape(&self, cell_type: CellType) -> Result<&dyn EntityShape, MeshShapeError>;

    /// Local coordinate of node `node` under an element of type `cell_type`.
    fn node_xi(&self, cell_type: CellType, node: usize) -> Vector3;

    /// Whether entities of `dimension` carry nodes in this family.
    fn has_nodes_in(&self, dimension: u8) -> bool;

    /// Number of nodes stored on one entity of the given type.
    fn count_nodes_on(&self, cell_type: CellType) -> usize;

    /// Polynomial order of the family.
    fn order(&self) -> u32;
}

/// Resolves the shape family serving a polynomial order.
///
/// Order 1 is served by the plain linear Lagrange family, order 2 by the
/// hierarchic family.
///
/// # Errors
/// [`MeshShapeError::UnsupportedOrder`] for any other order.
pub fn shape_for_order(order: u32) -> Result<Arc<dyn FieldShape>, MeshShapeError> {
    match order {
        1 => Ok(Arc::new(LagrangeShape::linear())),
        2 => Ok(Arc::new(HierarchicShape::quadratic())),
        _ => Err(MeshShapeError::UnsupportedOrder {
            order,
            family: "hierarchic",
        }),
    }
}
