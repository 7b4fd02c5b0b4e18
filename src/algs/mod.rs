//! Re-export public algorithms.

pub mod project;

pub use project::{Projector, project_field};
