//! Taxonomy provider abstractions and implementations.
//!
//! This module contains:
//! - The `TaxaProvider` trait that all providers implement
//! - Provider limits (concurrency and request timeout)
//! - Concrete providers (VARS knowledge base, FathomNet WoRMS, in-memory)
//! - `build_provider` for selecting a provider from configuration
//!
//! # Contract
//!
//! `descendants_of(name)` returns the taxon itself first, followed by its
//! descendants. Every provider normalizes "unknown taxon" to
//! [`TaxaError::ConceptNotFound`](crate::errors::TaxaError::ConceptNotFound),
//! whatever its backend reports.

mod factory;
mod http;
mod limits;
mod traits;

pub mod kb;
pub mod memory;
pub mod worms;

pub use factory::{build_provider, ProviderConfig, DEFAULT_KB_URL, DEFAULT_WORMS_URL};
pub use limits::ProviderLimits;
pub use traits::TaxaProvider;
