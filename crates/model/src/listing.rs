//! Human-readable listing of a resolved model.

use std::fmt;

use crate::models::{Model, DEFAULT_PART};

/// Displays a model class by class, concepts sorted by `(concept, part)`.
///
/// ```text
/// Siphonophores:
/// - Apolemia
/// - Nanomia (nectophore)
///
/// ```
///
/// The part is shown only when it is not the whole organism.
pub struct ModelListing<'a>(pub &'a Model);

impl fmt::Display for ModelListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.0.classes {
            writeln!(f, "{}:", class.label)?;
            for concept in &class.concepts {
                if concept.part == DEFAULT_PART {
                    writeln!(f, "- {}", concept.concept)?;
                } else {
                    writeln!(f, "- {} ({})", concept.concept, concept.part)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
