//! Read-through, write-through border cache.
//!
//! A cached code is never fetched again; an empty border list is a
//! legitimate fact and is cached like any other. Failed lookups leave the
//! cache untouched so that a later call retries.

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::country::CountryCode;
use crate::error::Result;
use crate::gateway::{AdjacencySource, Gateway};
use crate::store::KeyValueStore;

/// Store key holding the persisted border mapping.
pub const BORDERS_KEY: &str = "borders";

/// Persisted mapping from country code to its ordered border list.
pub struct AdjacencyCache<S, K> {
    gateway: Gateway<S>,
    store: K,
    entries: IndexMap<CountryCode, Vec<CountryCode>>,
    fetch_count: usize,
}

impl<S, K> AdjacencyCache<S, K>
where
    S: AdjacencySource,
    K: KeyValueStore,
{
    /// Opens the cache, restoring entries previously persisted in `store`.
    ///
    /// A persisted value that cannot be decoded is discarded and the cache
    /// starts empty.
    pub fn open(gateway: Gateway<S>, store: K) -> Result<Self> {
        let entries: IndexMap<CountryCode, Vec<CountryCode>> = match store.get(BORDERS_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(error = %err, "Discarding undecodable border cache");
                    IndexMap::new()
                }
            },
            None => IndexMap::new(),
        };
        debug!(entries = entries.len(), "Border cache opened");
        Ok(Self {
            gateway,
            store,
            entries,
            fetch_count: 0,
        })
    }

    /// Returns the border list of `code`, fetching and persisting it on a
    /// miss.
    pub async fn get_adjacency(&mut self, code: &CountryCode) -> Result<Vec<CountryCode>> {
        if let Some(borders) = self.entries.get(code) {
            debug!(%code, "Border cache hit");
            return Ok(borders.clone());
        }

        self.fetch_count += 1;
        let borders = self.gateway.fetch_adjacency(code).await?;
        info!(%code, borders = borders.len(), "Border cache miss, fetched remotely");

        // A new key lands last, so popping it undoes a failed write.
        self.entries.insert(code.clone(), borders.clone());
        if let Err(err) = self.persist() {
            self.entries.pop();
            return Err(err);
        }
        Ok(borders)
    }

    /// Drops every entry and erases the persisted state.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.store.remove(BORDERS_KEY)?;
        info!("Border cache cleared");
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.store.set(BORDERS_KEY, raw)
    }
}

impl<S, K> AdjacencyCache<S, K> {
    /// Number of cached countries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the border list of `code` is cached.
    #[must_use]
    pub fn contains(&self, code: &CountryCode) -> bool {
        self.entries.contains_key(code)
    }

    /// Remote fetches issued by this cache instance, failed ones included.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetch_count
    }
}
