use serde::Deserialize;

/// A taxon as returned by the knowledge base phylogeny endpoint.
///
/// The endpoint returns more fields than this; only the ones the resolver
/// reads are mapped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KbTaxon {
    /// Concept name of the taxon
    pub name: String,
}
