//! Mesh topology contract and an in-memory implementation.
//!
//! The [`MeshTopology`] trait is the narrow surface the shape and projection
//! layers consume: entity iteration per dimension, per-entity cell types, and
//! canonical down-adjacency. [`InMemoryMesh`] is a small concrete topology
//! that interns shared edges and faces so down-adjacency ordering is total,
//! deterministic, and matches the local tables in
//! [`CellType`](crate::topology::cell_type::CellType).

use std::collections::HashMap;

use itertools::Itertools;

use crate::mesh_error::MeshShapeError;
use crate::topology::cell_type::CellType;
use crate::topology::point::PointId;

/// Read-only topology queries needed by fields and the projector.
///
/// Implementations must keep `points_of_dimension` finite and restartable
/// (every call yields the same sequence for an unmodified mesh), and `down`
/// must return closure entities in the canonical order of the cell-type
/// tables: shape-function node ordering indexes into it positionally.
pub trait MeshTopology {
    /// Highest dimension with at least one entity.
    fn dimension(&self) -> u8;

    /// Cell type of an entity.
    fn cell_type(&self, p: PointId) -> Result<CellType, MeshShapeError>;

    /// All entities of one dimension, in deterministic (insertion) order.
    fn points_of_dimension(&self, dim: u8) -> Box<dyn Iterator<Item = PointId> + '_>;

    /// Closure entities of `p` at dimension `dim`, canonically ordered.
    ///
    /// `down(p, dim(p))` is `[p]` itself.
    fn down(&self, p: PointId, dim: u8) -> Result<Vec<PointId>, MeshShapeError>;

    /// Number of entities of one dimension.
    fn entity_count(&self, dim: u8) -> usize {
        self.points_of_dimension(dim).count()
    }
}

/// In-memory mesh with interned lower-dimensional entities.
///
/// Cells are added through [`add_vertex`](Self::add_vertex) and
/// [`add_cell`](Self::add_cell); edges and faces shared between cells are
/// created once and reused, with the first insertion fixing their canonical
/// vertex order.
#[derive(Clone, Debug)]
pub struct InMemoryMesh {
    cell_types: HashMap<PointId, CellType>,
    /// Entities per dimension, in insertion order.
    strata: [Vec<PointId>; 4],
    /// Canonical closure vertices for entities of dimension >= 1.
    vertices_of: HashMap<PointId, Vec<PointId>>,
    /// Canonical closure edges for entities of dimension >= 2.
    edges_of: HashMap<PointId, Vec<PointId>>,
    /// Canonical closure faces for entities of dimension 3.
    faces_of: HashMap<PointId, Vec<PointId>>,
    edge_lookup: HashMap<(PointId, PointId), PointId>,
    face_lookup: HashMap<Vec<PointId>, PointId>,
    next_id: u64,
}

impl Default for InMemoryMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            cell_types: HashMap::new(),
            strata: [Vec::new(), Vec::new(), Vec::new(), Vec::new()],
            vertices_of: HashMap::new(),
            edges_of: HashMap::new(),
            faces_of: HashMap::new(),
            edge_lookup: HashMap::new(),
            face_lookup: HashMap::new(),
            next_id: 1,
        }
    }

    fn fresh_point(&mut self) -> PointId {
        let id = self.next_id;
        self.next_id += 1;
        PointId::new(id).expect("point counter starts at 1")
    }

    /// Adds a new vertex and returns its handle.
    pub fn add_vertex(&mut self) -> PointId {
        let p = self.fresh_point();
        self.cell_types.insert(p, CellType::Vertex);
        self.strata[0].push(p);
        p
    }

    /// Adds a cell of dimension >= 1 from its canonical vertex list.
    ///
    /// Edges (and, for 3D cells, faces) of the cell are interned: shared
    /// lower-dimensional entities are created once, in the local order of
    /// [`CellType::edges`] / [`CellType::faces`].
    ///
    /// # Errors
    /// - [`MeshShapeError::InvalidCellArity`] if the vertex count does not
    ///   match the cell type, or the type is `Vertex` (use
    ///   [`add_vertex`](Self::add_vertex)).
    /// - [`MeshShapeError::UnknownPoint`] if a listed vertex is not a vertex
    ///   of this mesh.
    pub fn add_cell(
        &mut self,
        cell_type: CellType,
        vertices: &[PointId],
    ) -> Result<PointId, MeshShapeError> {
        if cell_type == CellType::Vertex {
            return Err(MeshShapeError::InvalidCellArity {
                cell_type,
                expected: 0,
                found: vertices.len(),
            });
        }
        if vertices.len() != cell_type.vertex_count() {
            return Err(MeshShapeError::InvalidCellArity {
                cell_type,
                expected: cell_type.vertex_count(),
                found: vertices.len(),
            });
        }
        for &v in vertices {
            if self.cell_types.get(&v) != Some(&CellType::Vertex) {
                return Err(MeshShapeError::UnknownPoint(v));
            }
        }

        if cell_type == CellType::Segment {
            return Ok(self.intern_edge(vertices[0], vertices[1]));
        }

        let edges: Vec<PointId> = cell_type
            .edges()
            .iter()
            .map(|[a, b]| self.intern_edge(vertices[*a], vertices[*b]))
            .collect();
        let faces: Vec<PointId> = cell_type
            .faces()
            .iter()
            .map(|(face_type, local)| {
                let face_verts: Vec<PointId> = local.iter().map(|i| vertices[*i]).collect();
                self.intern_face(*face_type, &face_verts)
            })
            .collect();

        let p = self.fresh_point();
        self.cell_types.insert(p, cell_type);
        self.vertices_of.insert(p, vertices.to_vec());
        self.edges_of.insert(p, edges);
        if !faces.is_empty() {
            self.faces_of.insert(p, faces);
        }
        self.strata[cell_type.dimension() as usize].push(p);
        Ok(p)
    }

    fn intern_edge(&mut self, a: PointId, b: PointId) -> PointId {
        let key = if a <= b { (a, b) } else { (b, a) };
        if let Some(&e) = self.edge_lookup.get(&key) {
            return e;
        }
        let e = self.fresh_point();
        self.cell_types.insert(e, CellType::Segment);
        self.vertices_of.insert(e, vec![a, b]);
        self.strata[1].push(e);
        self.edge_lookup.insert(key, e);
        e
    }

    fn intern_face(&mut self, face_type: CellType, vertices: &[PointId]) -> PointId {
        let key: Vec<PointId> = vertices.iter().copied().sorted().collect();
        if let Some(&f) = self.face_lookup.get(&key) {
            return f;
        }
        let edges: Vec<PointId> = face_type
            .edges()
            .iter()
            .map(|[a, b]| self.intern_edge(vertices[*a], vertices[*b]))
            .collect();
        let f = self.fresh_point();
        self.cell_types.insert(f, face_type);
        self.vertices_of.insert(f, vertices.to_vec());
        self.edges_of.insert(f, edges);
        self.strata[2].push(f);
        self.face_lookup.insert(key, f);
        f
    }
}

impl MeshTopology for InMemoryMesh {
    fn dimension(&self) -> u8 {
        (0..4u8)
            .rev()
            .find(|d| !self.strata[*d as usize].is_empty())
            .unwrap_or(0)
    }

    fn cell_type(&self, p: PointId) -> Result<CellType, MeshShapeError> {
        self.cell_types
            .get(&p)
            .copied()
            .ok_or(MeshShapeError::UnknownPoint(p))
    }

    fn points_of_dimension(&self, dim: u8) -> Box<dyn Iterator<Item = PointId> + '_> {
        match self.strata.get(dim as usize) {
            Some(points) => Box::new(points.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn down(&self, p: PointId, dim: u8) -> Result<Vec<PointId>, MeshShapeError> {
        let entity_dim = self.cell_type(p)?.dimension();
        if dim > entity_dim {
            return Err(MeshShapeError::InvalidDownDimension { point: p, dim });
        }
        if dim == entity_dim {
            return Ok(vec![p]);
        }
        let table = match dim {
            0 => &self.vertices_of,
            1 => &self.edges_of,
            _ => &self.faces_of,
        };
        table
            .get(&p)
            .cloned()
            .ok_or(MeshShapeError::UnknownPoint(p))
    }
}
