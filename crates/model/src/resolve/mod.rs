//! Resolution of model specifications against a taxonomy provider.
//!
//! Resolution runs bottom-up:
//!
//! 1. [`resolve_concept`] - one concept spec to a list of concepts
//! 2. [`resolve_class`] - includes unioned, then excludes subtracted
//! 3. [`ModelResolver`] - every class, in spec order
//!
//! Unknown taxa never abort a run. They are skipped and handed back as
//! [`UnresolvedConcept`]s so the caller can report them. Any other provider
//! failure aborts the whole resolution.

mod class;
mod concept;
mod model;

pub use class::{resolve_class, ResolvedClass, SpecRole, UnresolvedConcept};
pub use concept::resolve_concept;
pub use model::{ModelResolver, Resolution};
