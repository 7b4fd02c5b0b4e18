//! Data module: atlas, section, and field value types.
#![warn(missing_docs)]

pub mod atlas;
pub mod section;
pub mod value;

pub use atlas::Atlas;
pub use section::Section;
pub use value::{FieldValue, Matrix3, ValueKind, Vector3};
