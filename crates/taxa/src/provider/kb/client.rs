//! Minimal VARS knowledge base HTTP client.

use std::time::Duration;

use reqwest::Client;

use crate::errors::TaxaError;
use crate::provider::http::{build_client, encode_segment, get_json};

use super::models::KbTaxon;
use super::PROVIDER_ID;

/// VARS knowledge base API client.
///
/// Holds the base URL and a reusable HTTP client. Resource paths are joined
/// onto the base URL with [`url_to`](Self::url_to).
#[derive(Debug, Clone)]
pub struct KbClient {
    client: Client,
    url: String,
}

impl KbClient {
    /// Create a client for the knowledge base at `url`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, TaxaError> {
        Ok(Self {
            client: build_client(timeout)?,
            url: url.into(),
        })
    }

    /// Base URL of the knowledge base.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Absolute URL of a resource, tolerating slashes on either side.
    pub fn url_to(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            resource.trim_start_matches('/')
        )
    }

    /// Get the taxon `name` followed by its descendants.
    pub async fn get_taxa(&self, name: &str) -> Result<Vec<KbTaxon>, TaxaError> {
        let url = self.url_to(&format!("phylogeny/taxa/{}", encode_segment(name)));
        get_json(&self.client, PROVIDER_ID, &url, name).await
    }
}
