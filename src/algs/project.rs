//! Node-wise field projection between shape families on a shared mesh.
//!
//! [`project_field`] fills every node of a destination field from a source
//! field defined over the same mesh. Where the source stores fewer nodes
//! than the destination needs on an entity, the zero default is written;
//! everywhere else the source field is evaluated at the node's local
//! coordinate. After a run every destination node has been written exactly
//! once.

use std::marker::PhantomData;

use log::{debug, trace};

use crate::data::value::{FieldValue, Matrix3, ValueKind, Vector3};
use crate::field::Field;
use crate::field::element::{FieldElement, MeshElement};
use crate::mesh_error::MeshShapeError;
use crate::topology::mesh::MeshTopology;
use crate::topology::point::PointId;

/// Node-wise projection of one field onto another.
///
/// Bound to a destination and a source field of the same value kind; the
/// zero default buffer is sized to the destination's per-node component
/// count and reused across nodes with no source data.
/// [`project_field`] selects the matching instantiation at runtime.
pub struct Projector<'a, V: FieldValue> {
    to: &'a mut Field,
    from: &'a Field,
    default: Vec<f64>,
    _value: PhantomData<V>,
}

impl<'a, V: FieldValue> Projector<'a, V> {
    /// Binds a projector to a destination and a source field.
    ///
    /// # Errors
    /// [`MeshShapeError::ValueKindMismatch`] if the fields disagree on
    /// value kind, or if `V` matches neither.
    pub fn new(to: &'a mut Field, from: &'a Field) -> Result<Self, MeshShapeError> {
        if to.value_kind() != from.value_kind() || to.value_kind() != V::KIND {
            return Err(MeshShapeError::ValueKindMismatch {
                operation: "Projector::new",
                to: to.value_kind(),
                from: from.value_kind(),
            });
        }
        let default = vec![0.0; to.count_components()];
        Ok(Self {
            to,
            from,
            default,
            _value: PhantomData,
        })
    }

    /// Runs the traversal to completion.
    ///
    /// Visits every entity of every dimension the destination's shape
    /// family has nodes in; within one entity all nodes are visited before
    /// the next entity starts.
    ///
    /// # Errors
    /// Topology, shape, or storage errors abort the run; partial writes up
    /// to the failing entity remain.
    pub fn run(mut self) -> Result<(), MeshShapeError> {
        let mesh = self.to.mesh().clone();
        for dim in 0..=mesh.dimension() {
            if !self.to.shape().has_nodes_in(dim) {
                continue;
            }
            let entities: Vec<PointId> = mesh.points_of_dimension(dim).collect();
            trace!("projecting {} entities of dimension {dim}", entities.len());
            for entity in entities {
                self.visit(mesh.as_ref(), entity)?;
            }
        }
        debug!("projected `{}` onto `{}`", self.from.name(), self.to.name());
        Ok(())
    }

    /// One entity visit: build both contexts, fill the entity's nodes,
    /// release the contexts.
    fn visit(&mut self, mesh: &dyn MeshTopology, entity: PointId) -> Result<(), MeshShapeError> {
        let mesh_element = MeshElement::new(mesh, entity)?;
        let from_element = FieldElement::<V>::new(self.from, &mesh_element)?;
        let nodes_to = self.to.nodes_on(mesh_element.entity())?;
        let nodes_from = self.from.nodes_on(mesh_element.entity())?;
        for node in 0..nodes_to {
            if nodes_from == 0 || nodes_from < nodes_to {
                self.to
                    .set_node_components(mesh_element.entity(), node, &self.default)?;
            } else {
                let xi = self.to.shape().node_xi(from_element.cell_type(), node);
                let value = from_element.eval(xi)?;
                // The write target follows the source element's entity
                // binding, which coincides with the traversed entity when
                // both fields share one mesh.
                self.to.set_node_value(from_element.entity(), node, value)?;
            }
        }
        Ok(())
    }
}

/// Projects `from` onto `to`, dispatching on the fields' declared value
/// kind (scalar, 3-vector, or 3×3-matrix).
///
/// # Errors
/// [`MeshShapeError::ValueKindMismatch`] naming this operation if the
/// fields disagree on value kind; no node is written in that case. Errors
/// from the traversal itself propagate unchanged.
pub fn project_field(to: &mut Field, from: &Field) -> Result<(), MeshShapeError> {
    let (to_kind, from_kind) = (to.value_kind(), from.value_kind());
    if to_kind != from_kind {
        return Err(MeshShapeError::ValueKindMismatch {
            operation: "project_field",
            to: to_kind,
            from: from_kind,
        });
    }
    match to_kind {
        ValueKind::Scalar => Projector::<f64>::new(to, from)?.run(),
        ValueKind::Vector => Projector::<Vector3>::new(to, from)?.run(),
        ValueKind::Matrix => Projector::<Matrix3>::new(to, from)?.run(),
    }
}
