//! Per-entity evaluation contexts: geometric mapping and field elements.
//!
//! A traversal creates these contexts when it enters an entity and drops
//! them when it leaves; a context never outlives the visit that created it,
//! so a failed visit cannot leak one.

use crate::data::value::{FieldValue, Vector3};
use crate::field::Field;
use crate::mesh_error::MeshShapeError;
use crate::shape::EntityShape;
use crate::topology::cell_type::CellType;
use crate::topology::mesh::MeshTopology;
use crate::topology::point::PointId;

/// Geometric mapping context bound to one mesh entity.
pub struct MeshElement<'m> {
    mesh: &'m dyn MeshTopology,
    entity: PointId,
    cell_type: CellType,
}

impl<'m> MeshElement<'m> {
    /// Binds a mapping context to `entity`.
    ///
    /// # Errors
    /// [`MeshShapeError::UnknownPoint`] if the mesh does not know `entity`.
    pub fn new(mesh: &'m dyn MeshTopology, entity: PointId) -> Result<Self, MeshShapeError> {
        let cell_type = mesh.cell_type(entity)?;
        Ok(Self {
            mesh,
            entity,
            cell_type,
        })
    }

    /// The bound entity.
    pub fn entity(&self) -> PointId {
        self.entity
    }

    /// Topological type of the bound entity.
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// The mesh the entity belongs to.
    pub fn mesh(&self) -> &'m dyn MeshTopology {
        self.mesh
    }
}

/// Field evaluation context bound to one mesh entity.
///
/// Gathers the element's node values once at construction, in the canonical
/// order the entity shape expects: per dimension the field's family has
/// nodes in, the entity's down-adjacency in canonical order, each entity's
/// nodes in index order.
pub struct FieldElement<'f, V: FieldValue> {
    entity: PointId,
    cell_type: CellType,
    shape: &'f dyn EntityShape,
    node_values: Vec<V>,
}

impl<'f, V: FieldValue> FieldElement<'f, V> {
    /// Builds the evaluation context for `field` over the element's entity.
    ///
    /// # Errors
    /// - [`MeshShapeError::UnsupportedTopology`] if the field's family has
    ///   no basis on the entity's type.
    /// - [`MeshShapeError::MalformedNodeCount`] if the gathered node count
    ///   disagrees with the evaluator's declared count.
    /// - Value-kind and storage errors from the field accessors.
    pub fn new(field: &'f Field, element: &MeshElement<'_>) -> Result<Self, MeshShapeError> {
        let cell_type = element.cell_type();
        let shape = field.shape().entity_shape(cell_type)?;
        let mut node_values = Vec::with_capacity(shape.count_nodes());
        for dim in 0..=cell_type.dimension() {
            if !field.shape().has_nodes_in(dim) {
                continue;
            }
            for p in element.mesh().down(element.entity(), dim)? {
                for node in 0..field.nodes_on(p)? {
                    node_values.push(field.node_value(p, node)?);
                }
            }
        }
        if node_values.len() != shape.count_nodes() {
            return Err(MeshShapeError::MalformedNodeCount {
                cell_type,
                declared: shape.count_nodes(),
                found: node_values.len(),
            });
        }
        Ok(Self {
            entity: element.entity(),
            cell_type,
            shape,
            node_values,
        })
    }

    /// The bound entity.
    pub fn entity(&self) -> PointId {
        self.entity
    }

    /// Topological type of the bound entity.
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Value of the field at a local coordinate of the element.
    ///
    /// # Errors
    /// [`MeshShapeError::MalformedNodeCount`] if the evaluator produces a
    /// vector whose length disagrees with the gathered node values.
    pub fn eval(&self, xi: Vector3) -> Result<V, MeshShapeError> {
        let weights = self.shape.values(xi);
        if weights.len() != self.node_values.len() {
            return Err(MeshShapeError::MalformedNodeCount {
                cell_type: self.cell_type,
                declared: self.node_values.len(),
                found: weights.len(),
            });
        }
        let mut out = V::zero();
        for (w, v) in weights.iter().zip(&self.node_values) {
            out = out + *v * *w;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::data::value::ValueKind;
    use crate::shape::shape_for_order;
    use crate::topology::mesh::InMemoryMesh;

    #[test]
    fn edge_element_interpolates_hierarchically() {
        let mut mesh = InMemoryMesh::new();
        let a = mesh.add_vertex();
        let b = mesh.add_vertex();
        let edge = mesh.add_cell(CellType::Segment, &[a, b]).unwrap();
        let mesh: Arc<InMemoryMesh> = Arc::new(mesh);

        let shape = shape_for_order(2).unwrap();
        let mut field = Field::new("u", ValueKind::Scalar, mesh.clone(), shape).unwrap();
        field.set_node_value(a, 0, 1.0).unwrap();
        field.set_node_value(b, 0, 3.0).unwrap();
        field.set_node_value(edge, 0, 0.5).unwrap();

        let mesh_element = MeshElement::new(mesh.as_ref(), edge).unwrap();
        let element = FieldElement::<f64>::new(&field, &mesh_element).unwrap();
        assert_eq!(element.entity(), edge);
        assert_eq!(element.cell_type(), CellType::Segment);

        // At xi = -1 and +1 the bubble vanishes and the endpoints dominate.
        assert_eq!(element.eval(Vector3::new(-1.0, 0.0, 0.0)).unwrap(), 1.0);
        assert_eq!(element.eval(Vector3::new(1.0, 0.0, 0.0)).unwrap(), 3.0);
        // At the midpoint the bubble contributes c/4 of its node value.
        let mid = element.eval(Vector3::ZERO).unwrap();
        let c = -2.44948974278318_f64;
        assert!((mid - (2.0 + c * 0.25 * 0.5)).abs() < 1e-14);
    }
}
