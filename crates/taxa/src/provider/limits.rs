//! Provider request limits.

/// Request limits for a provider.
///
/// Controls how hard the resolver may lean on a provider. Request timeouts
/// are owned by each provider's HTTP client and are not repeated here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderLimits {
    /// Maximum classes resolved concurrently against this provider.
    pub max_concurrency: usize,
}

impl Default for ProviderLimits {
    fn default() -> Self {
        Self { max_concurrency: 4 }
    }
}
