//! # mesh-shape
//!
//! mesh-shape is a Rust library for hierarchic finite-element shape functions
//! and node-wise field projection over unstructured meshes, designed for
//! scientific computing and PDE codes. It provides per-entity-type basis
//! evaluation (values and local gradients), shape-family metadata, and a
//! generic operator that transfers field values between polynomial orders on
//! a shared mesh.
//!
//! ## Features
//! - Hierarchic (order-2) and linear Lagrange shape families over vertices,
//!   edges, triangles, and tetrahedra
//! - Atlas and Section types for mapping mesh points to flat component arrays
//! - An in-memory mesh topology with canonical, deterministic down-adjacency
//! - Node-wise field projection generic over scalar, vector, and matrix
//!   value kinds
//!
//! ## Determinism
//!
//! Entity iteration and down-adjacency follow insertion order and fixed
//! local tables, so repeated runs over an unmodified mesh visit entities in
//! the same order and produce identical results.
//!
//! ## Usage
//! Add `mesh-shape` as a dependency in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mesh-shape = "0.1"
//! ```
//!
//! Build a mesh, resolve a shape family with
//! [`shape::shape_for_order`], create [`field::Field`]s, and transfer
//! values with [`algs::project_field`].

// Re-export our major subsystems:
pub mod algs;
pub mod data;
pub mod field;
pub mod mesh_error;
pub mod shape;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::{Projector, project_field};
    pub use crate::data::atlas::Atlas;
    pub use crate::data::section::Section;
    pub use crate::data::value::{FieldValue, Matrix3, ValueKind, Vector3};
    pub use crate::field::{Field, FieldElement, MeshElement};
    pub use crate::mesh_error::MeshShapeError;
    pub use crate::shape::{
        EntityShape, FieldShape, HierarchicShape, LagrangeShape, shape_for_order,
    };
    pub use crate::topology::cell_type::CellType;
    pub use crate::topology::mesh::{InMemoryMesh, MeshTopology};
    pub use crate::topology::point::PointId;
}
