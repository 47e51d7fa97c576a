//! VARS knowledge base (KB) taxonomy provider.
//!
//! Queries `GET {base_url}/phylogeny/taxa/{name}`, which answers with a JSON
//! array of taxon objects: the queried taxon first, then its descendants.
//! An unknown taxon is answered with HTTP 404.

mod client;
mod models;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::TaxaError;
use crate::provider::{ProviderLimits, TaxaProvider};

pub use client::KbClient;
pub use models::KbTaxon;

/// Provider ID constant
const PROVIDER_ID: &str = "VARS_KB";

/// Taxonomy provider backed by a VARS knowledge base.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use modelspec_taxa::{KbClient, KbTaxaProvider};
///
/// let client = KbClient::new("http://dsg.mbari.org/kb/v1", Duration::from_secs(30))?;
/// let provider = KbTaxaProvider::new(client);
/// ```
pub struct KbTaxaProvider {
    client: KbClient,
    limits: ProviderLimits,
}

impl KbTaxaProvider {
    /// Create a provider over an existing knowledge base client.
    pub fn new(client: KbClient) -> Self {
        Self {
            client,
            limits: ProviderLimits::default(),
        }
    }

    /// Override the limits reported to the resolver.
    pub fn with_limits(mut self, limits: ProviderLimits) -> Self {
        self.limits = limits;
        self
    }
}

#[async_trait]
impl TaxaProvider for KbTaxaProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn limits(&self) -> ProviderLimits {
        self.limits.clone()
    }

    async fn descendants_of(&self, name: &str) -> Result<Vec<String>, TaxaError> {
        let taxa = self.client.get_taxa(name).await?;
        if taxa.is_empty() {
            return Err(TaxaError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("empty taxa list for \"{}\"", name),
            });
        }

        debug!(
            "{} at {} returned {} taxa for {}",
            PROVIDER_ID,
            self.client.url(),
            taxa.len(),
            name
        );
        Ok(taxa.into_iter().map(|taxon| taxon.name).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn provider() -> KbTaxaProvider {
        let client = KbClient::new("http://localhost:9/kb/v1", Duration::from_secs(1)).unwrap();
        KbTaxaProvider::new(client)
    }

    #[test]
    fn test_provider_id() {
        assert_eq!(provider().id(), "VARS_KB");
    }

    #[test]
    fn test_default_limits() {
        assert_eq!(provider().limits(), ProviderLimits::default());
    }

    #[test]
    fn test_with_limits() {
        let limits = ProviderLimits { max_concurrency: 1 };
        let provider = provider().with_limits(limits.clone());
        assert_eq!(provider.limits(), limits);
    }

    #[test]
    fn test_taxon_parsing_ignores_extra_fields() {
        let body = r#"[
            {"name": "Nanomia", "rank": "genus", "alternateNames": []},
            {"name": "Nanomia bijuga"}
        ]"#;
        let taxa: Vec<KbTaxon> = serde_json::from_str(body).unwrap();
        assert_eq!(taxa.len(), 2);
        assert_eq!(taxa[0].name, "Nanomia");
        assert_eq!(taxa[1].name, "Nanomia bijuga");
    }
}
