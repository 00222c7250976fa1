//! A route-finding session: registry, border cache and store wired
//! together once and reused for every request.

use std::path::{Path, PathBuf};

use tracing::info;

use borderhop_core::{
    find_route, load_registry, AdjacencyCache, AdjacencySource, CatalogSource, Country,
    CountryCode, CountryRegistry, Gateway, KeyValueStore, Result, RetryPolicy, TraversalOutcome,
};

/// Store file name inside the data directory.
pub const STORE_FILE: &str = "store.json";

/// Path of the store file inside `data_dir`.
#[must_use]
pub fn store_path(data_dir: &Path) -> PathBuf {
    data_dir.join(STORE_FILE)
}

/// A validated route request and its search outcome.
#[derive(Debug, Clone)]
pub struct RouteReport {
    /// Resolved source code.
    pub source: CountryCode,
    /// Resolved destination code.
    pub destination: CountryCode,
    /// Search outcome.
    pub outcome: TraversalOutcome,
}

/// Registry plus border cache over one source and one store.
pub struct Session<S, K> {
    registry: CountryRegistry,
    cache: AdjacencyCache<S, K>,
}

impl<S, K> Session<S, K>
where
    S: AdjacencySource + CatalogSource + Clone,
    K: KeyValueStore + Clone,
{
    /// Loads the catalog (fatal on failure) and opens the border cache.
    pub async fn open(source: S, policy: RetryPolicy, store: K) -> Result<Self> {
        let catalog_gateway = Gateway::new(source.clone(), policy);
        let registry = load_registry(&catalog_gateway, &store).await?;
        let cache = AdjacencyCache::open(Gateway::new(source, policy), store)?;
        info!(
            countries = registry.len(),
            cached_borders = cache.len(),
            "Session ready"
        );
        Ok(Self { registry, cache })
    }

    /// The country registry.
    #[must_use]
    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    /// The border cache.
    #[must_use]
    pub fn cache(&self) -> &AdjacencyCache<S, K> {
        &self.cache
    }

    /// Resolves `from`/`to` (names or codes) into a distinct, known pair.
    pub fn validate(&self, from: &str, to: &str) -> Result<(CountryCode, CountryCode)> {
        Ok(self.registry.validate_request(from, to)?)
    }

    /// Searches for a route between two validated codes.
    pub async fn search(
        &mut self,
        source: CountryCode,
        destination: CountryCode,
    ) -> Result<RouteReport> {
        let outcome = find_route(&self.registry, &mut self.cache, &source, &destination).await?;
        Ok(RouteReport {
            source,
            destination,
            outcome,
        })
    }

    /// Validates `from`/`to` and searches for a route.
    pub async fn route(&mut self, from: &str, to: &str) -> Result<RouteReport> {
        let (source, destination) = self.validate(from, to)?;
        self.search(source, destination).await
    }

    /// Known countries, largest area first.
    #[must_use]
    pub fn countries(&self) -> Vec<&Country> {
        self.registry.by_area()
    }

    /// Drops every cached border list.
    pub fn clear_cache(&mut self) -> Result<()> {
        self.cache.clear()
    }
}

/// Clears the persisted border cache without loading the catalog.
pub fn clear_border_cache<S, K>(source: S, store: K) -> Result<()>
where
    S: AdjacencySource,
    K: KeyValueStore,
{
    let mut cache = AdjacencyCache::open(Gateway::new(source, RetryPolicy::default()), store)?;
    cache.clear()
}
