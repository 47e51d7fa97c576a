//! Taxonomy provider trait definitions.

use async_trait::async_trait;

use crate::errors::TaxaError;

use super::limits::ProviderLimits;

/// Trait for taxonomy providers.
///
/// Implement this trait to add support for a new taxonomy source. Resolvers
/// only ever see `Arc<dyn TaxaProvider>`, so any implementation can stand in
/// for another, including test doubles.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use modelspec_taxa::{TaxaError, TaxaProvider};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl TaxaProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn descendants_of(&self, name: &str) -> Result<Vec<String>, TaxaError> {
///         Err(TaxaError::ConceptNotFound(name.to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait TaxaProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "VARS_KB". Used in logs and errors.
    fn id(&self) -> &'static str;

    /// Limits the caller should respect when issuing requests.
    fn limits(&self) -> ProviderLimits {
        ProviderLimits::default()
    }

    /// Get the names of a taxon and all of its descendants.
    ///
    /// # Arguments
    ///
    /// * `name` - The taxon name to look up
    ///
    /// # Returns
    ///
    /// The taxon's own name first, then the names of its descendants in the
    /// order the backend returns them. Fails with `ConceptNotFound` when the
    /// taxon is unknown.
    async fn descendants_of(&self, name: &str) -> Result<Vec<String>, TaxaError>;
}
