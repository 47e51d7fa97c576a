//! Shared HTTP plumbing for the web-backed providers.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::TaxaError;

/// Build an HTTP client with the given request timeout.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, TaxaError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Percent-encode a taxon name for use as a single path segment.
pub(crate) fn encode_segment(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

/// GET `url` and decode the JSON body.
///
/// A 404 maps to `ConceptNotFound(name)`. Timeouts, other failing statuses,
/// transport errors and undecodable bodies are reported against `provider`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    provider: &str,
    url: &str,
    name: &str,
) -> Result<T, TaxaError> {
    debug!("{} request: {}", provider, url);

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            TaxaError::Timeout {
                provider: provider.to_string(),
            }
        } else {
            TaxaError::ProviderError {
                provider: provider.to_string(),
                message: format!("Request failed: {}", e),
            }
        }
    })?;

    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(TaxaError::ConceptNotFound(name.to_string()));
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TaxaError::ProviderError {
            provider: provider.to_string(),
            message: format!("HTTP {} - {}", status, body),
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| TaxaError::ProviderError {
            provider: provider.to_string(),
            message: format!("Failed to read response: {}", e),
        })?;

    serde_json::from_str(&text).map_err(|e| TaxaError::InvalidResponse {
        provider: provider.to_string(),
        message: e.to_string(),
    })
}
