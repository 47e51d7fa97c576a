//! Overlap analysis for resolved models.
//!
//! A classification model is normally expected to partition concepts
//! disjointly. This module finds the concepts that ended up in more than one
//! class and which classes those are.
//!
//! Everything here is a pure function of a [`Model`]: no I/O, no failure.

mod report;

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Concept, Model};

pub use report::{Duplicate, OverlapReport};

/// Every distinct concept in the model.
pub fn all_concepts(model: &Model) -> BTreeSet<&Concept> {
    model
        .classes
        .iter()
        .flat_map(|class| class.concepts.iter())
        .collect()
}

/// Concepts present in two or more classes.
///
/// Classes are scanned in order; a concept already seen in an earlier class
/// is an overlap.
pub fn overlapping_concepts(model: &Model) -> BTreeSet<&Concept> {
    let mut seen = BTreeSet::new();
    let mut overlapping = BTreeSet::new();
    for class in &model.classes {
        for concept in &class.concepts {
            if !seen.insert(concept) {
                overlapping.insert(concept);
            }
        }
    }
    overlapping
}

/// Map each overlapping concept to the labels of every class containing it,
/// in class order.
pub fn duplicate_report(model: &Model) -> BTreeMap<&Concept, Vec<&str>> {
    overlapping_concepts(model)
        .into_iter()
        .map(|concept| {
            let labels = model
                .classes
                .iter()
                .filter(|class| class.contains(concept))
                .map(|class| class.label.as_str())
                .collect();
            (concept, labels)
        })
        .collect()
}

/// Check that summarizes a model and its duplicate concepts.
pub struct OverlapCheck;

impl OverlapCheck {
    pub fn new() -> Self {
        Self
    }

    /// Analyzes a model for concepts assigned to several classes.
    pub fn analyze(&self, model: &Model) -> OverlapReport {
        let duplicates = duplicate_report(model)
            .into_iter()
            .map(|(concept, labels)| Duplicate {
                concept: concept.clone(),
                labels: labels.into_iter().map(str::to_string).collect(),
            })
            .collect();

        OverlapReport {
            name: model.name.clone(),
            class_count: model.classes.len(),
            concept_count: all_concepts(model).len(),
            duplicates,
        }
    }
}

impl Default for OverlapCheck {
    fn default() -> Self {
        Self::new()
    }
}
