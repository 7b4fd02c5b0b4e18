//! Linear Lagrange shape functions: one node per vertex.
//!
//! This is the delegation target for order-1 requests against the
//! hierarchic family. It covers the same four entity types; the basis on
//! each entity is the linear nodal part of the hierarchic basis with no
//! bubble enrichment.

use crate::data::value::Vector3;
use crate::mesh_error::MeshShapeError;
use crate::shape::{EntityShape, FieldShape};
use crate::topology::cell_type::{CELL_TYPE_COUNT, CellType};

struct Vertex;

impl EntityShape for Vertex {
    fn count_nodes(&self) -> usize {
        1
    }

    fn values(&self, _xi: Vector3) -> Vec<f64> {
        vec![1.0]
    }

    fn local_gradients(&self, _xi: Vector3) -> Vec<Vector3> {
        vec![Vector3::ZERO]
    }
}

struct Edge;

impl EntityShape for Edge {
    fn count_nodes(&self) -> usize {
        2
    }

    fn values(&self, xi: Vector3) -> Vec<f64> {
        vec![(1.0 - xi[0]) / 2.0, (1.0 + xi[0]) / 2.0]
    }

    fn local_gradients(&self, _xi: Vector3) -> Vec<Vector3> {
        vec![Vector3::new(-0.5, 0.0, 0.0), Vector3::new(0.5, 0.0, 0.0)]
    }
}

struct Triangle;

impl EntityShape for Triangle {
    fn count_nodes(&self) -> usize {
        3
    }

    fn values(&self, xi: Vector3) -> Vec<f64> {
        vec![1.0 - xi[0] - xi[1], xi[0], xi[1]]
    }

    fn local_gradients(&self, _xi: Vector3) -> Vec<Vector3> {
        vec![
            Vector3::new(-1.0, -1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ]
    }
}

struct Tetrahedron;

impl EntityShape for Tetrahedron {
    fn count_nodes(&self) -> usize {
        4
    }

    fn values(&self, xi: Vector3) -> Vec<f64> {
        vec![1.0 - xi[0] - xi[1] - xi[2], xi[0], xi[1], xi[2]]
    }

    fn local_gradients(&self, _xi: Vector3) -> Vec<Vector3> {
        vec![
            Vector3::new(-1.0, -1.0, -1.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ]
    }
}

/// The linear Lagrange shape family.
#[derive(Clone, Copy)]
pub struct LagrangeShape {
    evaluators: [Option<&'static dyn EntityShape>; CELL_TYPE_COUNT],
}

impl std::fmt::Debug for LagrangeShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LagrangeShape")
    }
}

impl LagrangeShape {
    /// The linear family: one node per vertex, none anywhere else.
    pub fn linear() -> Self {
        let mut evaluators: [Option<&'static dyn EntityShape>; CELL_TYPE_COUNT] =
            [None; CELL_TYPE_COUNT];
        evaluators[CellType::Vertex as usize] = Some(&Vertex);
        evaluators[CellType::Segment as usize] = Some(&Edge);
        evaluators[CellType::Triangle as usize] = Some(&Triangle);
        evaluators[CellType::Tetrahedron as usize] = Some(&Tetrahedron);
        Self { evaluators }
    }
}

impl FieldShape for LagrangeShape {
    fn name(&self) -> &'static str {
        "Linear"
    }

    fn entity_shape(&self, cell_type: CellType) -> Result<&dyn EntityShape, MeshShapeError> {
        self.evaluators[cell_type as usize].ok_or(MeshShapeError::UnsupportedTopology {
            cell_type,
            family: self.name(),
        })
    }

    fn node_xi(&self, _cell_type: CellType, _node: usize) -> Vector3 {
        Vector3::ZERO
    }

    fn has_nodes_in(&self, dimension: u8) -> bool {
        dimension == 0
    }

    fn count_nodes_on(&self, cell_type: CellType) -> usize {
        match cell_type {
            CellType::Vertex => 1,
            _ => 0,
        }
    }

    fn order(&self) -> u32 {
        1
    }
}
