use std::fmt;

use serde::Serialize;

use crate::models::Concept;

/// A concept found in more than one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    pub concept: Concept,
    /// Labels of every class containing the concept, in class order
    pub labels: Vec<String>,
}

/// Summary of a model's classes, concepts and duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapReport {
    pub name: String,
    pub class_count: usize,
    /// Number of distinct concepts across all classes
    pub concept_count: usize,
    pub duplicates: Vec<Duplicate>,
}

impl OverlapReport {
    pub fn is_disjoint(&self) -> bool {
        self.duplicates.is_empty()
    }
}

impl fmt::Display for OverlapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Classes: {}", self.class_count)?;
        writeln!(f, "Concepts: {}", self.concept_count)?;
        writeln!(f, "Duplicates:")?;
        for duplicate in &self.duplicates {
            writeln!(
                f,
                "  {} ({}) is present in {} classes:",
                duplicate.concept.concept,
                duplicate.concept.part,
                duplicate.labels.len()
            )?;
            for label in &duplicate.labels {
                writeln!(f, "    {}", label)?;
            }
        }
        Ok(())
    }
}
