//! Provider selection from runtime configuration.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::errors::TaxaError;

use super::kb::{KbClient, KbTaxaProvider};
use super::worms::WormsTaxaProvider;
use super::TaxaProvider;

/// Default VARS knowledge base URL.
pub const DEFAULT_KB_URL: &str = "http://dsg.mbari.org/kb/v1";

/// Default FathomNet WoRMS service URL.
pub const DEFAULT_WORMS_URL: &str = "https://fathomnet.org/worms";

/// Which taxonomy backend to resolve against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderConfig {
    /// VARS knowledge base at the given base URL.
    Kb { url: String },
    /// FathomNet WoRMS service at the given base URL.
    Worms { url: String },
}

impl ProviderConfig {
    /// Knowledge base provider at the default URL.
    pub fn kb_default() -> Self {
        Self::Kb {
            url: DEFAULT_KB_URL.to_string(),
        }
    }

    /// WoRMS provider at the default URL.
    pub fn worms_default() -> Self {
        Self::Worms {
            url: DEFAULT_WORMS_URL.to_string(),
        }
    }

    /// Base URL of the selected backend.
    pub fn url(&self) -> &str {
        match self {
            Self::Kb { url } | Self::Worms { url } => url,
        }
    }
}

/// Build the provider described by `config`.
///
/// `timeout` applies to every request the provider makes.
pub fn build_provider(
    config: &ProviderConfig,
    timeout: Duration,
) -> Result<Arc<dyn TaxaProvider>, TaxaError> {
    let provider: Arc<dyn TaxaProvider> = match config {
        ProviderConfig::Kb { url } => {
            let client = KbClient::new(url.clone(), timeout)?;
            Arc::new(KbTaxaProvider::new(client))
        }
        ProviderConfig::Worms { url } => {
            Arc::new(WormsTaxaProvider::new(url.clone(), timeout)?)
        }
    };

    info!("Using taxa provider {} at {}", provider.id(), config.url());
    Ok(provider)
}
