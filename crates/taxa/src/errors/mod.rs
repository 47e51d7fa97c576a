//! Error types and failure classification for taxonomy providers.
//!
//! This module provides:
//! - [`TaxaError`]: The error enum for all provider operations
//! - [`FailureClass`]: Classification deciding whether a caller may continue

mod class;

pub use class::FailureClass;

use thiserror::Error;

/// Errors that can occur while querying a taxonomy provider.
///
/// Each variant is classified into a [`FailureClass`] via the [`class`](Self::class)
/// method. Only an unknown taxon is recoverable; everything else aborts a
/// resolution run.
#[derive(Error, Debug)]
pub enum TaxaError {
    /// The taxon is unknown to the provider.
    #[error("Concept \"{0}\" not found.")]
    ConceptNotFound(String),

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider failed the request (transport error or non-404 status).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered with a body that could not be understood.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that sent the response
        provider: String,
        /// What was wrong with the response
        message: String,
    },

    /// The HTTP client could not be set up.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl TaxaError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelspec_taxa::errors::{FailureClass, TaxaError};
    ///
    /// let error = TaxaError::ConceptNotFound("Nanomia".to_string());
    /// assert_eq!(error.class(), FailureClass::Recoverable);
    ///
    /// let error = TaxaError::Timeout { provider: "VARS_KB".to_string() };
    /// assert_eq!(error.class(), FailureClass::Fatal);
    /// ```
    pub fn class(&self) -> FailureClass {
        match self {
            Self::ConceptNotFound(_) => FailureClass::Recoverable,
            Self::Timeout { .. }
            | Self::ProviderError { .. }
            | Self::InvalidResponse { .. }
            | Self::Network(_) => FailureClass::Fatal,
        }
    }

    /// Whether this error means the taxon does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConceptNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_not_found_is_recoverable() {
        let error = TaxaError::ConceptNotFound("Aegina".to_string());
        assert_eq!(error.class(), FailureClass::Recoverable);
        assert!(error.is_not_found());
    }

    #[test]
    fn test_timeout_is_fatal() {
        let error = TaxaError::Timeout {
            provider: "VARS_KB".to_string(),
        };
        assert_eq!(error.class(), FailureClass::Fatal);
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_provider_error_is_fatal() {
        let error = TaxaError::ProviderError {
            provider: "FATHOMNET_WORMS".to_string(),
            message: "HTTP 500".to_string(),
        };
        assert_eq!(error.class(), FailureClass::Fatal);
    }

    #[test]
    fn test_invalid_response_is_fatal() {
        let error = TaxaError::InvalidResponse {
            provider: "VARS_KB".to_string(),
            message: "expected a JSON array".to_string(),
        };
        assert_eq!(error.class(), FailureClass::Fatal);
    }

    #[test]
    fn test_error_display() {
        let error = TaxaError::ConceptNotFound("Bathochordaeus".to_string());
        assert_eq!(format!("{}", error), "Concept \"Bathochordaeus\" not found.");

        let error = TaxaError::ProviderError {
            provider: "VARS_KB".to_string(),
            message: "HTTP 503 Service Unavailable".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: VARS_KB - HTTP 503 Service Unavailable"
        );
    }
}
