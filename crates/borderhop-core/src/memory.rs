//! In-memory catalog and border source (no network dependencies).
//!
//! Serves a fixed graph, counts every load call and can inject transport
//! failures. Clones share state, so a test can keep a handle while a
//! [`crate::Gateway`] owns another.
//!
//! # Example
//!
//! ```rust
//! use borderhop_core::memory::InMemorySource;
//!
//! let source = InMemorySource::from_adjacency(&[("A", &["B"]), ("B", &["A"])]);
//! assert_eq!(source.catalog_len(), 2);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::country::{Country, CountryCode};
use crate::gateway::{AdjacencySource, CatalogSource, TransportError};
use crate::registry::CountryRegistry;

#[derive(Debug, Default)]
struct State {
    catalog: Vec<Country>,
    borders: HashMap<CountryCode, Vec<CountryCode>>,
    /// Remaining injected failures per code.
    adjacency_failures: HashMap<CountryCode, u32>,
    catalog_failures: u32,
    adjacency_calls: HashMap<CountryCode, usize>,
    catalog_calls: usize,
}

/// Fixed graph served from memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    state: Arc<Mutex<State>>,
}

impl InMemorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a source whose catalog holds every listed code (named after
    /// the code, zero area) with the given border lists.
    #[must_use]
    pub fn from_adjacency(adjacency: &[(&str, &[&str])]) -> Self {
        let source = Self::new();
        for (code, borders) in adjacency {
            source.add_country(Country::new(*code, *code, 0.0));
            source.set_borders(code, borders);
        }
        source
    }

    /// Adds a catalog record.
    pub fn add_country(&self, country: Country) {
        self.state.lock().catalog.push(country);
    }

    /// Sets the border list served for `code`.
    pub fn set_borders(&self, code: &str, borders: &[&str]) {
        self.state.lock().borders.insert(
            CountryCode::new(code),
            borders.iter().map(|b| CountryCode::new(*b)).collect(),
        );
    }

    /// Makes the next `times` border loads for `code` fail.
    pub fn fail_adjacency(&self, code: &str, times: u32) {
        self.state
            .lock()
            .adjacency_failures
            .insert(CountryCode::new(code), times);
    }

    /// Makes the next `times` catalog loads fail.
    pub fn fail_catalog(&self, times: u32) {
        self.state.lock().catalog_failures = times;
    }

    /// Builds a registry from the current catalog without counting a load.
    #[must_use]
    pub fn registry(&self) -> CountryRegistry {
        CountryRegistry::from_catalog(self.state.lock().catalog.clone())
    }

    /// Number of catalog records.
    #[must_use]
    pub fn catalog_len(&self) -> usize {
        self.state.lock().catalog.len()
    }

    /// Total border load calls, failed ones included.
    #[must_use]
    pub fn adjacency_calls(&self) -> usize {
        self.state.lock().adjacency_calls.values().sum()
    }

    /// Border load calls for one code, failed ones included.
    #[must_use]
    pub fn adjacency_calls_for(&self, code: &str) -> usize {
        self.state
            .lock()
            .adjacency_calls
            .get(code)
            .copied()
            .unwrap_or(0)
    }

    /// Total catalog load calls, failed ones included.
    #[must_use]
    pub fn catalog_calls(&self) -> usize {
        self.state.lock().catalog_calls
    }
}

#[async_trait]
impl AdjacencySource for InMemorySource {
    async fn load_adjacency(
        &self,
        code: &CountryCode,
    ) -> Result<Vec<CountryCode>, TransportError> {
        let mut state = self.state.lock();
        *state.adjacency_calls.entry(code.clone()).or_insert(0) += 1;
        if let Some(remaining) = state.adjacency_failures.get_mut(code) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(TransportError::Request(format!(
                    "injected failure for {code}"
                )));
            }
        }
        Ok(state.borders.get(code).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl CatalogSource for InMemorySource {
    async fn load_catalog(&self) -> Result<Vec<Country>, TransportError> {
        let mut state = self.state.lock();
        state.catalog_calls += 1;
        if state.catalog_failures > 0 {
            state.catalog_failures -= 1;
            return Err(TransportError::Status(503));
        }
        Ok(state.catalog.clone())
    }
}
