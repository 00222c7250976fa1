//! Tests for catalog loading.

use super::catalog::{load_registry, COUNTRIES_KEY};
use super::country::{Country, CountryCode};
use super::error::Error;
use super::gateway::{Gateway, RetryPolicy};
use super::memory::InMemorySource;
use super::store::{KeyValueStore, MemoryStore};

fn source() -> InMemorySource {
    let source = InMemorySource::new();
    source.add_country(Country::new("FRA", "France", 551_695.0));
    source.add_country(Country::new("ESP", "Spain", 505_992.0));
    source
}

#[tokio::test]
async fn test_fetches_and_stores_when_absent() {
    let src = source();
    let store = MemoryStore::new();
    let gateway = Gateway::new(src.clone(), RetryPolicy::default());

    let registry = load_registry(&gateway, &store).await.unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.name(&CountryCode::new("ESP")), Some("Spain"));
    assert_eq!(src.catalog_calls(), 1);

    let raw = store.get(COUNTRIES_KEY).unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["FRA"]["name"], "France");
}

#[tokio::test]
async fn test_stored_catalog_skips_fetch() {
    let src = source();
    let store = MemoryStore::new();
    let gateway = Gateway::new(src.clone(), RetryPolicy::default());

    load_registry(&gateway, &store).await.unwrap();
    let registry = load_registry(&gateway, &store).await.unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(src.catalog_calls(), 1);
}

#[tokio::test]
async fn test_undecodable_stored_catalog_is_refetched() {
    let src = source();
    let store = MemoryStore::new();
    store.set(COUNTRIES_KEY, "garbage".to_string()).unwrap();
    let gateway = Gateway::new(src.clone(), RetryPolicy::default());

    let registry = load_registry(&gateway, &store).await.unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(src.catalog_calls(), 1);
}

#[tokio::test]
async fn test_empty_catalog_is_fatal() {
    let store = MemoryStore::new();
    let gateway = Gateway::new(InMemorySource::new(), RetryPolicy::default());

    let err = load_registry(&gateway, &store).await.unwrap_err();
    assert!(matches!(err, Error::EmptyCatalog));
    assert!(store.get(COUNTRIES_KEY).unwrap().is_none());
}

#[tokio::test]
async fn test_catalog_transport_failure_is_fatal() {
    let src = source();
    src.fail_catalog(u32::MAX);
    let store = MemoryStore::new();
    let gateway = Gateway::new(src.clone(), RetryPolicy::new(3));

    let err = load_registry(&gateway, &store).await.unwrap_err();
    assert!(matches!(err, Error::CatalogLookup { attempts: 3, .. }));
    assert_eq!(src.catalog_calls(), 3);
}
