//! Error types for borderhop-core.
//!
//! Route outcomes such as "not found" or "budget exceeded" are ordinary
//! values (see [`crate::route::OutcomeKind`]) and never appear here.

use thiserror::Error;

use crate::country::CountryCode;
use crate::gateway::TransportError;

/// Boundary validation failures for a route request.
///
/// These are produced before the traversal engine is invoked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Source country was empty.
    #[error("from country is not set")]
    FromNotSet,

    /// Source country is unknown to the registry.
    #[error("from country is not valid: {0}")]
    FromNotValid(String),

    /// Destination country was empty.
    #[error("to country is not set")]
    ToNotSet,

    /// Destination country is unknown to the registry.
    #[error("to country is not valid: {0}")]
    ToNotValid(String),

    /// Source and destination resolve to the same country.
    #[error("from country and to country are equal")]
    SameCountry,
}

/// Core error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid route request.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Border lookup failed after exhausting every attempt.
    #[error("Border lookup for {code} failed after {attempts} attempt(s): {source}")]
    AdjacencyLookup {
        /// Country whose borders could not be loaded.
        code: CountryCode,
        /// Number of attempts made.
        attempts: u32,
        /// Last transport failure.
        #[source]
        source: TransportError,
    },

    /// Catalog lookup failed after exhausting every attempt.
    #[error("Country catalog lookup failed after {attempts} attempt(s): {source}")]
    CatalogLookup {
        /// Number of attempts made.
        attempts: u32,
        /// Last transport failure.
        #[source]
        source: TransportError,
    },

    /// The catalog loaded but held no countries.
    #[error("Country catalog is empty")]
    EmptyCatalog,

    /// Key-value store failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Broken traversal invariant (parent cycle or missing parent link).
    #[error("Internal error: {0}")]
    Internal(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for lookup failures that exhausted their retry budget.
    #[must_use]
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            Self::AdjacencyLookup { .. } | Self::CatalogLookup { .. }
        )
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
