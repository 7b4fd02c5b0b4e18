//! Fields: per-node component data attached to mesh entities.
//!
//! A [`Field`] couples a mesh, a shape family, and a flat component section:
//! every entity the shape places nodes on gets a slice of
//! `nodes_on(entity) * kind.components()` reals, node-major. Typed access
//! goes through [`FieldValue`](crate::data::value::FieldValue)
//! implementations; evaluation over one entity goes through the contexts in
//! [`element`].
#![warn(missing_docs)]

pub mod element;

pub use element::{FieldElement, MeshElement};

use std::sync::Arc;

use log::debug;

use crate::data::atlas::Atlas;
use crate::data::section::Section;
use crate::data::value::{FieldValue, ValueKind};
use crate::mesh_error::MeshShapeError;
use crate::shape::FieldShape;
use crate::topology::mesh::MeshTopology;
use crate::topology::point::PointId;

/// A named field of per-node values over a mesh.
#[derive(Clone)]
pub struct Field {
    name: String,
    kind: ValueKind,
    mesh: Arc<dyn MeshTopology + Send + Sync>,
    shape: Arc<dyn FieldShape>,
    nodes: Section<f64>,
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("shape", &self.shape.name())
            .finish_non_exhaustive()
    }
}

impl Field {
    /// Creates a field over `mesh`, with zeroed storage for every node the
    /// shape family places.
    ///
    /// # Errors
    /// Propagates topology errors from the mesh while sizing the node atlas.
    pub fn new(
        name: impl Into<String>,
        kind: ValueKind,
        mesh: Arc<dyn MeshTopology + Send + Sync>,
        shape: Arc<dyn FieldShape>,
    ) -> Result<Self, MeshShapeError> {
        let name = name.into();
        let mut atlas = Atlas::default();
        let ncomp = kind.components();
        for dim in 0..=mesh.dimension() {
            if !shape.has_nodes_in(dim) {
                continue;
            }
            let points: Vec<PointId> = mesh.points_of_dimension(dim).collect();
            for p in points {
                let nodes = shape.count_nodes_on(mesh.cell_type(p)?);
                if nodes > 0 {
                    atlas.try_insert(p, nodes * ncomp)?;
                }
            }
        }
        debug!(
            "field `{}`: {} node-bearing entities, {} components",
            name,
            atlas.len(),
            atlas.total_len()
        );
        Ok(Self {
            name,
            kind,
            mesh,
            shape,
            nodes: Section::new(atlas),
        })
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared value kind.
    pub fn value_kind(&self) -> ValueKind {
        self.kind
    }

    /// The field's shape family.
    pub fn shape(&self) -> &dyn FieldShape {
        self.shape.as_ref()
    }

    /// The mesh this field lives on.
    pub fn mesh(&self) -> &Arc<dyn MeshTopology + Send + Sync> {
        &self.mesh
    }

    /// Real components per node.
    pub fn count_components(&self) -> usize {
        self.kind.components()
    }

    /// Number of nodes this field stores on an entity.
    ///
    /// # Errors
    /// [`MeshShapeError::UnknownPoint`] if the mesh does not know `p`.
    pub fn nodes_on(&self, p: PointId) -> Result<usize, MeshShapeError> {
        Ok(self.shape.count_nodes_on(self.mesh.cell_type(p)?))
    }

    /// Node-bearing entities, in deterministic (insertion) order.
    pub fn entities(&self) -> impl Iterator<Item = PointId> + '_ {
        self.nodes.atlas().points()
    }

    fn node_bounds(&self, p: PointId, node: usize) -> Result<(usize, usize), MeshShapeError> {
        let nodes = self.nodes_on(p)?;
        if node >= nodes {
            return Err(MeshShapeError::NodeOutOfRange {
                point: p,
                node,
                nodes,
            });
        }
        let ncomp = self.count_components();
        Ok((node * ncomp, (node + 1) * ncomp))
    }

    /// Raw component slice of one node.
    ///
    /// # Errors
    /// Unknown point, missing storage, or out-of-range node index.
    pub fn node_components(&self, p: PointId, node: usize) -> Result<&[f64], MeshShapeError> {
        let (start, end) = self.node_bounds(p, node)?;
        Ok(&self.nodes.try_restrict(p)?[start..end])
    }

    /// Overwrites the raw component slice of one node.
    ///
    /// # Errors
    /// As [`node_components`](Self::node_components), plus
    /// [`MeshShapeError::SliceLengthMismatch`] if `components` has the wrong
    /// length.
    pub fn set_node_components(
        &mut self,
        p: PointId,
        node: usize,
        components: &[f64],
    ) -> Result<(), MeshShapeError> {
        if components.len() != self.count_components() {
            return Err(MeshShapeError::SliceLengthMismatch {
                point: p,
                expected: self.count_components(),
                found: components.len(),
            });
        }
        let (start, end) = self.node_bounds(p, node)?;
        self.nodes.try_restrict_mut(p)?[start..end].copy_from_slice(components);
        Ok(())
    }

    /// Typed value of one node.
    ///
    /// # Errors
    /// [`MeshShapeError::ValueKindMismatch`] if `V` does not match the
    /// field's declared kind, otherwise as
    /// [`node_components`](Self::node_components).
    pub fn node_value<V: FieldValue>(&self, p: PointId, node: usize) -> Result<V, MeshShapeError> {
        self.check_kind::<V>("node_value")?;
        Ok(V::from_components(self.node_components(p, node)?))
    }

    /// Sets the typed value of one node.
    ///
    /// # Errors
    /// As [`node_value`](Self::node_value).
    pub fn set_node_value<V: FieldValue>(
        &mut self,
        p: PointId,
        node: usize,
        value: V,
    ) -> Result<(), MeshShapeError> {
        self.check_kind::<V>("set_node_value")?;
        let ncomp = self.count_components();
        let mut buf = [0.0; 9];
        value.write_components(&mut buf[..ncomp]);
        self.set_node_components(p, node, &buf[..ncomp])
    }

    /// Overwrites every component of every node with `value`.
    pub fn fill(&mut self, value: f64) {
        self.nodes.fill(value);
    }

    fn check_kind<V: FieldValue>(&self, operation: &'static str) -> Result<(), MeshShapeError> {
        if V::KIND != self.kind {
            return Err(MeshShapeError::ValueKindMismatch {
                operation,
                to: self.kind,
                from: V::KIND,
            });
        }
        Ok(())
    }
}
