//! Hierarchic shape functions: a linear nodal basis enriched with
//! quadratic edge-bubble modes.
//!
//! Nodes live on vertices and edges only; faces and interiors carry none.
//! Basis ordering follows the entity's canonical down-adjacency: vertex
//! functions first, then one bubble per edge in local edge order. Each
//! bubble is the scaled product of the two linear functions of its edge's
//! endpoints, so it vanishes at every vertex of the entity.

use crate::data::value::Vector3;
use crate::mesh_error::MeshShapeError;
use crate::shape::{EntityShape, FieldShape};
use crate::topology::cell_type::{CELL_TYPE_COUNT, CellType};

/// Bubble scaling, `-sqrt(6)`; normalizes the quadratic modes against the
/// linear nodal functions.
const C: f64 = -2.44948974278318;

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
        3
    }

    fn values(&self, xi: Vector3) -> Vec<f64> {
        let n0 = (1.0 - xi[0]) / 2.0;
        let n1 = (1.0 + xi[0]) / 2.0;
        vec![n0, n1, C * n0 * n1]
    }

    fn local_gradients(&self, xi: Vector3) -> Vec<Vector3> {
        vec![
            Vector3::new(-0.5, 0.0, 0.0),
            Vector3::new(0.5, 0.0, 0.0),
            Vector3::new(-0.5 * C * xi[0], 0.0, 0.0),
        ]
    }
}

struct Triangle;

impl EntityShape for Triangle {
    fn count_nodes(&self) -> usize {
        6
    }

    fn values(&self, xi: Vector3) -> Vec<f64> {
        let n0 = 1.0 - xi[0] - xi[1];
        let n1 = xi[0];
        let n2 = xi[1];
        vec![n0, n1, n2, C * n0 * n1, C * n1 * n2, C * n2 * n0]
    }

    fn local_gradients(&self, xi: Vector3) -> Vec<Vector3> {
        vec![
            Vector3::new(-1.0, -1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(1.0 - 2.0 * xi[0] - xi[1], -xi[0], 0.0) * C,
            Vector3::new(xi[1], xi[0], 0.0) * C,
            Vector3::new(-xi[1], 1.0 - xi[0] - 2.0 * xi[1], 0.0) * C,
        ]
    }
}

struct Tetrahedron;

impl EntityShape for Tetrahedron {
    fn count_nodes(&self) -> usize {
        10
    }

    fn values(&self, xi: Vector3) -> Vec<f64> {
        let n0 = 1.0 - xi[0] - xi[1] - xi[2];
        let n1 = xi[0];
        let n2 = xi[1];
        let n3 = xi[2];
        vec![
            n0,
            n1,
            n2,
            n3,
            C * n0 * n1,
            C * n1 * n2,
            C * n2 * n0,
            C * n0 * n3,
            C * n1 * n3,
            C * n2 * n3,
        ]
    }

    fn local_gradients(&self, xi: Vector3) -> Vec<Vector3> {
        vec![
            Vector3::new(-1.0, -1.0, -1.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0 - 2.0 * xi[0] - xi[1] - xi[2], -xi[0], -xi[0]) * C,
            Vector3::new(xi[1], xi[0], 0.0) * C,
            Vector3::new(-xi[1], 1.0 - xi[0] - 2.0 * xi[1] - xi[2], -xi[1]) * C,
            Vector3::new(-xi[2], -xi[2], 1.0 - xi[0] - xi[1] - 2.0 * xi[2]) * C,
            Vector3::new(xi[2], 0.0, xi[0]) * C,
            Vector3::new(0.0, xi[2], xi[1]) * C,
        ]
    }
}

/// The order-2 hierarchic shape family.
///
/// Owns a fixed per-cell-type evaluator table; vertex, edge, triangle, and
/// tetrahedron are supported, the tensor-product cells are not.
#[derive(Clone, Copy)]
pub struct HierarchicShape {
    evaluators: [Option<&'static dyn EntityShape>; CELL_TYPE_COUNT],
}

impl std::fmt::Debug for HierarchicShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HierarchicShape")
    }
}

impl HierarchicShape {
    /// The quadratic family: one node per vertex and one per edge.
    pub fn quadratic() -> Self {
        let mut evaluators: [Option<&'static dyn EntityShape>; CELL_TYPE_COUNT] =
            [None; CELL_TYPE_COUNT];
        evaluators[CellType::Vertex as usize] = Some(&Vertex);
        evaluators[CellType::Segment as usize] = Some(&Edge);
        evaluators[CellType::Triangle as usize] = Some(&Triangle);
        evaluators[CellType::Tetrahedron as usize] = Some(&Tetrahedron);
        Self { evaluators }
    }
}

impl FieldShape for HierarchicShape {
    fn name(&self) -> &'static str {
        "Hierarchic"
    }

    fn entity_shape(&self, cell_type: CellType) -> Result<&dyn EntityShape, MeshShapeError> {
        self.evaluators[cell_type as usize].ok_or(MeshShapeError::UnsupportedTopology {
            cell_type,
            family: self.name(),
        })
    }

    /// Every hierarchic node reports the origin. Node positions of this
    /// family are not geometrically meaningful; callers needing true node
    /// locations must not rely on this answer.
    fn node_xi(&self, _cell_type: CellType, _node: usize) -> Vector3 {
        Vector3::ZERO
    }

    fn has_nodes_in(&self, dimension: u8) -> bool {
        dimension == 0 || dimension == 1
    }

    fn count_nodes_on(&self, cell_type: CellType) -> usize {
        match cell_type {
            CellType::Vertex | CellType::Segment => 1,
            _ => 0,
        }
    }

    fn order(&self) -> u32 {
        2
    }
}
