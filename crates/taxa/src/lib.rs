//! Taxonomy providers for model specification resolution.
//!
//! This crate answers one question for the resolver: "what are the
//! descendants of this taxon?". It hides which taxonomy service answers it.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  Model resolver  |  (modelspec-model)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |   TaxaProvider   |  (descendants_of)
//! +------------------+
//!      |         |
//!      v         v
//! +---------+ +----------+
//! | VARS KB | |  WoRMS   |  (HTTP services)
//! +---------+ +----------+
//! ```
//!
//! # Core Types
//!
//! - [`TaxaProvider`] - The provider capability every backend implements
//! - [`TaxaError`] - Provider errors, classified by [`FailureClass`]
//! - [`ProviderConfig`] - Selects and configures a backend at runtime
//! - [`StaticTaxaProvider`] - In-memory taxonomy for tests and offline runs

pub mod errors;
pub mod provider;

pub use errors::{FailureClass, TaxaError};

pub use provider::kb::{KbClient, KbTaxaProvider, KbTaxon};
pub use provider::memory::StaticTaxaProvider;
pub use provider::worms::WormsTaxaProvider;
pub use provider::{
    build_provider, ProviderConfig, ProviderLimits, TaxaProvider, DEFAULT_KB_URL, DEFAULT_WORMS_URL,
};
