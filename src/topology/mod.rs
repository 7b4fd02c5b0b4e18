//! Top-level module for mesh topology abstractions.
//!
//! This module provides the core types for identifying and traversing mesh
//! entities:
//! - Strong entity handles ([`point::PointId`])
//! - Cell type metadata and canonical local numbering ([`cell_type::CellType`])
//! - The read-only topology contract and an in-memory mesh
//!   ([`mesh::MeshTopology`], [`mesh::InMemoryMesh`])
//!
//! Most users will build an [`mesh::InMemoryMesh`] and hand it to a
//! [`Field`](crate::field::Field) behind the [`mesh::MeshTopology`] trait.

pub mod cell_type;
pub mod mesh;
pub mod point;

pub use cell_type::{CELL_TYPE_COUNT, CellType};
pub use mesh::{InMemoryMesh, MeshTopology};
pub use point::PointId;
