//! Resolved model types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::default_part;

/// A concrete taxon tagged with a body part.
///
/// Equality, hashing and ordering all come from the `(concept, part)` pair:
/// the same taxon with two different parts is two concepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Concept {
    pub concept: String,
    pub part: String,
}

impl Concept {
    pub fn new(concept: impl Into<String>, part: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            part: part.into(),
        }
    }

    /// The whole organism (`part = "self"`).
    pub fn whole(concept: impl Into<String>) -> Self {
        Self {
            concept: concept.into(),
            part: default_part(),
        }
    }
}

/// A resolved class: a label and its concept set.
///
/// Concepts are kept sorted by `(concept, part)`, which also fixes the order
/// they are written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub label: String,
    pub concepts: BTreeSet<Concept>,
}

impl Class {
    pub fn new(label: impl Into<String>, concepts: impl IntoIterator<Item = Concept>) -> Self {
        Self {
            label: label.into(),
            concepts: concepts.into_iter().collect(),
        }
    }

    pub fn contains(&self, concept: &Concept) -> bool {
        self.concepts.contains(concept)
    }
}

/// A resolved model. Class order follows the specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub classes: Vec<Class>,
}

impl Model {
    pub fn new(name: impl Into<String>, classes: Vec<Class>) -> Self {
        Self {
            name: name.into(),
            classes,
        }
    }
}
