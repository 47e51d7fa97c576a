//! FathomNet WoRMS taxonomy provider.
//!
//! Delegates descendant lookup to the FathomNet mirror of the World Register
//! of Marine Species: `GET {base_url}/descendants/names/{name}` answers with
//! a JSON array of names, the queried taxon first.
//!
//! The service signals an unknown taxon either with HTTP 404 or with an
//! empty array. Both are normalized to `ConceptNotFound`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::errors::TaxaError;
use crate::provider::http::{build_client, encode_segment, get_json};
use crate::provider::{ProviderLimits, TaxaProvider};

/// Provider ID constant
const PROVIDER_ID: &str = "FATHOMNET_WORMS";

/// Taxonomy provider backed by the FathomNet WoRMS service.
pub struct WormsTaxaProvider {
    client: Client,
    base_url: String,
    limits: ProviderLimits,
}

impl WormsTaxaProvider {
    /// Create a provider for the WoRMS service at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TaxaError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
            limits: ProviderLimits::default(),
        })
    }

    /// Override the limits reported to the resolver.
    pub fn with_limits(mut self, limits: ProviderLimits) -> Self {
        self.limits = limits;
        self
    }

    fn descendants_url(&self, name: &str) -> String {
        format!(
            "{}/descendants/names/{}",
            self.base_url.trim_end_matches('/'),
            encode_segment(name)
        )
    }
}

#[async_trait]
impl TaxaProvider for WormsTaxaProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn limits(&self) -> ProviderLimits {
        self.limits.clone()
    }

    async fn descendants_of(&self, name: &str) -> Result<Vec<String>, TaxaError> {
        let url = self.descendants_url(name);
        let names: Vec<String> = get_json(&self.client, PROVIDER_ID, &url, name).await?;

        if names.is_empty() {
            return Err(TaxaError::ConceptNotFound(name.to_string()));
        }

        debug!("{} returned {} names for {}", PROVIDER_ID, names.len(), name);
        Ok(names)
    }
}
