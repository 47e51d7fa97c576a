//! Model specification resolution.
//!
//! Turns a declarative [`ModelSpec`] (classes defined by taxa to include and
//! exclude) into a resolved [`Model`] (classes holding concrete concept sets),
//! and audits resolved models for concepts assigned to more than one class.
//!
//! ```text
//! ModelSpec --> ModelResolver --(TaxaProvider)--> Model --> OverlapCheck --> OverlapReport
//! ```
//!
//! - [`models`] - Specification and resolved-model types
//! - [`resolve`] - Concept, class and model resolution
//! - [`check`] - Overlap (duplicate concept) analysis
//! - [`listing`] - Human-readable model listing
//! - [`io`] - Reading specs and models, writing models

pub mod check;
pub mod errors;
pub mod io;
pub mod listing;
pub mod models;
pub mod resolve;

pub use check::{
    all_concepts, duplicate_report, overlapping_concepts, Duplicate, OverlapCheck, OverlapReport,
};
pub use errors::{Error, Result};
pub use listing::ModelListing;
pub use models::{Class, ClassSpec, Concept, ConceptSpec, Model, ModelSpec, DEFAULT_PART};
pub use resolve::{
    resolve_class, resolve_concept, ModelResolver, ResolvedClass, Resolution, SpecRole,
    UnresolvedConcept,
};
