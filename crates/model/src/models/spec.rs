//! Model specification types, as authored in the spec JSON file.

use serde::{Deserialize, Serialize};

use super::default_part;

/// Intent to pull one taxon, optionally with all its descendants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptSpec {
    /// Taxon name to look up
    pub concept: String,
    /// Whether the taxon's descendants are pulled in as well
    pub include_descendants: bool,
    /// Body part the resolved concepts are tagged with
    #[serde(default = "default_part")]
    pub part: String,
}

impl ConceptSpec {
    /// Spec for `concept` tagged with the default part.
    pub fn new(concept: impl Into<String>, include_descendants: bool) -> Self {
        Self {
            concept: concept.into(),
            include_descendants,
            part: default_part(),
        }
    }

    /// Same spec tagged with `part`.
    pub fn with_part(mut self, part: impl Into<String>) -> Self {
        self.part = part.into();
        self
    }
}

/// A class to resolve: the union of `includes` minus the union of `excludes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSpec {
    pub label: String,
    pub includes: Vec<ConceptSpec>,
    #[serde(default)]
    pub excludes: Vec<ConceptSpec>,
}

impl ClassSpec {
    pub fn new(
        label: impl Into<String>,
        includes: Vec<ConceptSpec>,
        excludes: Vec<ConceptSpec>,
    ) -> Self {
        Self {
            label: label.into(),
            includes,
            excludes,
        }
    }
}

/// A named, ordered list of class specifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub name: String,
    pub classes: Vec<ClassSpec>,
}
