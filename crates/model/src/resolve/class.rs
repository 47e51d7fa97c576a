use std::collections::BTreeSet;
use std::fmt;

use log::warn;
use modelspec_taxa::{FailureClass, TaxaError, TaxaProvider};

use crate::models::{Class, ClassSpec, Concept, ConceptSpec};

use super::concept::resolve_concept;

/// Which side of a class spec a concept spec came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecRole {
    Include,
    Exclude,
}

impl fmt::Display for SpecRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => write!(f, "include"),
            Self::Exclude => write!(f, "exclude"),
        }
    }
}

/// A concept spec whose taxon the provider did not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedConcept {
    /// Label of the class the spec belongs to
    pub class_label: String,
    /// Taxon name that was not found
    pub concept: String,
    pub role: SpecRole,
}

impl fmt::Display for UnresolvedConcept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Concept \"{}\" not found.", self.concept)
    }
}

/// A resolved class together with the specs that were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedClass {
    pub class: Class,
    pub unresolved: Vec<UnresolvedConcept>,
}

/// Resolve a class spec: the union of all includes minus the union of all
/// excludes.
///
/// Excludes are subtracted from the finished union, so an exclude always
/// wins over an include regardless of order. A spec naming an unknown taxon
/// contributes nothing and is recorded in `unresolved`. Any other provider
/// error is returned.
pub async fn resolve_class(
    provider: &dyn TaxaProvider,
    spec: &ClassSpec,
) -> Result<ResolvedClass, TaxaError> {
    let mut concepts = BTreeSet::new();
    let mut unresolved = Vec::new();

    for concept_spec in &spec.includes {
        if let Some(found) =
            lookup(provider, spec, concept_spec, SpecRole::Include, &mut unresolved).await?
        {
            concepts.extend(found);
        }
    }

    for concept_spec in &spec.excludes {
        if let Some(found) =
            lookup(provider, spec, concept_spec, SpecRole::Exclude, &mut unresolved).await?
        {
            for concept in &found {
                concepts.remove(concept);
            }
        }
    }

    Ok(ResolvedClass {
        class: Class {
            label: spec.label.clone(),
            concepts,
        },
        unresolved,
    })
}

/// Resolve one concept spec, absorbing recoverable failures into `unresolved`.
async fn lookup(
    provider: &dyn TaxaProvider,
    class_spec: &ClassSpec,
    concept_spec: &ConceptSpec,
    role: SpecRole,
    unresolved: &mut Vec<UnresolvedConcept>,
) -> Result<Option<Vec<Concept>>, TaxaError> {
    match resolve_concept(provider, concept_spec).await {
        Ok(found) => Ok(Some(found)),
        Err(err) => match err.class() {
            FailureClass::Recoverable => {
                warn!(
                    "Skipping {} \"{}\" in class \"{}\": {}",
                    role, concept_spec.concept, class_spec.label, err
                );
                unresolved.push(UnresolvedConcept {
                    class_label: class_spec.label.clone(),
                    concept: concept_spec.concept.clone(),
                    role,
                });
                Ok(None)
            }
            FailureClass::Fatal => Err(err),
        },
    }
}
