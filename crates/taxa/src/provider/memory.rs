//! In-memory taxonomy provider.
//!
//! Answers from a fixed table instead of a service. Used by tests and for
//! resolving specs offline against a known taxonomy.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::TaxaError;
use crate::provider::{ProviderLimits, TaxaProvider};

/// Provider ID constant
const PROVIDER_ID: &str = "STATIC";

/// Taxonomy provider answering from an in-memory table.
///
/// ```
/// use modelspec_taxa::StaticTaxaProvider;
///
/// let provider = StaticTaxaProvider::new()
///     .with_taxon("Foo", &["Bar", "Baz"])
///     .with_taxon("Bar", &[]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticTaxaProvider {
    taxa: HashMap<String, Vec<String>>,
    failures: HashMap<String, String>,
    limits: ProviderLimits,
}

impl StaticTaxaProvider {
    /// Create an empty provider. Every lookup fails with `ConceptNotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with its descendants, in the order they are returned.
    pub fn with_taxon(mut self, name: &str, descendants: &[&str]) -> Self {
        let names = std::iter::once(name)
            .chain(descendants.iter().copied())
            .map(str::to_string)
            .collect();
        self.taxa.insert(name.to_string(), names);
        self
    }

    /// Make lookups of `name` fail as a provider (transport) error.
    pub fn with_failure(mut self, name: &str, message: &str) -> Self {
        self.failures.insert(name.to_string(), message.to_string());
        self
    }

    /// Override the limits reported to the resolver.
    pub fn with_limits(mut self, limits: ProviderLimits) -> Self {
        self.limits = limits;
        self
    }
}

#[async_trait]
impl TaxaProvider for StaticTaxaProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn limits(&self) -> ProviderLimits {
        self.limits.clone()
    }

    async fn descendants_of(&self, name: &str) -> Result<Vec<String>, TaxaError> {
        if let Some(message) = self.failures.get(name) {
            return Err(TaxaError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: message.clone(),
            });
        }

        self.taxa
            .get(name)
            .cloned()
            .ok_or_else(|| TaxaError::ConceptNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FailureClass;

    #[tokio::test]
    async fn test_taxon_comes_first() {
        let provider = StaticTaxaProvider::new().with_taxon("Foo", &["Bar", "Baz"]);
        let names = provider.descendants_of("Foo").await.unwrap();
        assert_eq!(names, vec!["Foo", "Bar", "Baz"]);
    }

    #[tokio::test]
    async fn test_unknown_taxon_is_not_found() {
        let provider = StaticTaxaProvider::new();
        let err = provider.descendants_of("Missing").await.unwrap_err();
        assert!(matches!(err, TaxaError::ConceptNotFound(ref n) if n == "Missing"));
    }

    #[tokio::test]
    async fn test_failure_is_fatal() {
        let provider = StaticTaxaProvider::new()
            .with_taxon("Foo", &[])
            .with_failure("Foo", "connection reset");
        let err = provider.descendants_of("Foo").await.unwrap_err();
        assert_eq!(err.class(), FailureClass::Fatal);
    }
}
