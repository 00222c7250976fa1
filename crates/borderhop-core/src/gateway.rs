//! Remote lookup gateway: source traits and the bounded retry policy.
//!
//! Sources perform exactly one transport attempt per call. [`Gateway`]
//! wraps a source and retries failed attempts immediately, without backoff,
//! until the policy's attempt budget is spent.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::country::{Country, CountryCode};
use crate::error::{Error, Result};

/// Default number of attempts per logical lookup.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Failure of a single transport attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Source of per-country border lists.
#[async_trait]
pub trait AdjacencySource: Send + Sync {
    /// Loads the ordered neighbor codes of `code` in one attempt.
    ///
    /// A response without a border list yields an empty vector.
    async fn load_adjacency(
        &self,
        code: &CountryCode,
    ) -> std::result::Result<Vec<CountryCode>, TransportError>;
}

/// Source of the country catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads every catalog record in one attempt.
    async fn load_catalog(&self) -> std::result::Result<Vec<Country>, TransportError>;
}

/// Retry budget for one logical lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy allowing `max_attempts` attempts in total.
    ///
    /// Zero is raised to one: every lookup makes at least one attempt.
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    /// Total attempts per lookup.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

/// A source wrapped with a retry policy.
#[derive(Debug, Clone)]
pub struct Gateway<S> {
    source: S,
    policy: RetryPolicy,
}

impl<S> Gateway<S> {
    /// Wraps `source` with `policy`.
    #[must_use]
    pub fn new(source: S, policy: RetryPolicy) -> Self {
        Self { source, policy }
    }
}

impl<S: AdjacencySource> Gateway<S> {
    /// Fetches the border list of `code`, retrying transport failures.
    pub async fn fetch_adjacency(&self, code: &CountryCode) -> Result<Vec<CountryCode>> {
        let max = self.policy.max_attempts;
        let mut attempt = 1;
        loop {
            match self.source.load_adjacency(code).await {
                Ok(borders) => {
                    debug!(%code, attempt, borders = borders.len(), "Fetched borders");
                    return Ok(borders);
                }
                Err(err) if attempt < max => {
                    warn!(%code, attempt, max, error = %err, "Border lookup failed, retrying");
                    attempt += 1;
                }
                Err(err) => {
                    return Err(Error::AdjacencyLookup {
                        code: code.clone(),
                        attempts: attempt,
                        source: err,
                    });
                }
            }
        }
    }
}

impl<S: CatalogSource> Gateway<S> {
    /// Fetches the country catalog, retrying transport failures.
    pub async fn fetch_catalog(&self) -> Result<Vec<Country>> {
        let max = self.policy.max_attempts;
        let mut attempt = 1;
        loop {
            match self.source.load_catalog().await {
                Ok(catalog) => {
                    debug!(attempt, countries = catalog.len(), "Fetched catalog");
                    return Ok(catalog);
                }
                Err(err) if attempt < max => {
                    warn!(attempt, max, error = %err, "Catalog lookup failed, retrying");
                    attempt += 1;
                }
                Err(err) => {
                    return Err(Error::CatalogLookup {
                        attempts: attempt,
                        source: err,
                    });
                }
            }
        }
    }
}
