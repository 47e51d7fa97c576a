//! Model domain types.
//!
//! - `spec` - The declarative input: ModelSpec, ClassSpec, ConceptSpec
//! - `model` - The resolved output: Model, Class, Concept

mod model;
mod spec;

pub use model::{Class, Concept, Model};
pub use spec::{ClassSpec, ConceptSpec, ModelSpec};

/// Part tag meaning "the whole organism".
pub const DEFAULT_PART: &str = "self";

pub(crate) fn default_part() -> String {
    DEFAULT_PART.to_string()
}
