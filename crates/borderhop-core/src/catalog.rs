//! Catalog loading with a read-through store cache.

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::country::{Country, CountryCode};
use crate::error::{Error, Result};
use crate::gateway::{CatalogSource, Gateway};
use crate::registry::CountryRegistry;
use crate::store::KeyValueStore;

/// Store key holding the persisted catalog (code -> country record).
pub const COUNTRIES_KEY: &str = "countries";

/// Builds the registry from the stored catalog, fetching and storing it
/// first when absent.
///
/// Fails with [`Error::CatalogLookup`] when the remote catalog cannot be
/// loaded and with [`Error::EmptyCatalog`] when it holds no countries; both
/// are fatal to a session.
pub async fn load_registry<S, K>(gateway: &Gateway<S>, store: &K) -> Result<CountryRegistry>
where
    S: CatalogSource,
    K: KeyValueStore + ?Sized,
{
    if let Some(raw) = store.get(COUNTRIES_KEY)? {
        match serde_json::from_str::<IndexMap<CountryCode, Country>>(&raw) {
            Ok(stored) if !stored.is_empty() => {
                info!(countries = stored.len(), "Loaded catalog from store");
                return Ok(CountryRegistry::from_catalog(stored.into_values()));
            }
            Ok(_) => warn!("Stored catalog is empty, refetching"),
            Err(err) => warn!(error = %err, "Discarding undecodable stored catalog"),
        }
    }

    let catalog = gateway.fetch_catalog().await?;
    if catalog.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let keyed: IndexMap<CountryCode, Country> = catalog
        .into_iter()
        .map(|c| (c.code.clone(), c))
        .collect();
    store.set(COUNTRIES_KEY, serde_json::to_string(&keyed)?)?;
    info!(countries = keyed.len(), "Fetched and stored catalog");

    Ok(CountryRegistry::from_catalog(keyed.into_values()))
}
