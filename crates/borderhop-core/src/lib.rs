//! # Borderhop Core
//!
//! Overland route search between countries whose borders are not known up
//! front: each country's border list is discovered on demand from a remote
//! source, one request per country, and cached so it is never fetched twice.
//!
//! ## Components
//!
//! - [`Gateway`]: one logical lookup against a [`AdjacencySource`] or
//!   [`CatalogSource`], retried immediately up to a fixed number of attempts
//! - [`AdjacencyCache`]: read-through, write-through border cache persisted
//!   in a [`KeyValueStore`]
//! - [`CountryRegistry`]: immutable code ↔ name dictionary and boundary
//!   validation
//! - [`route::find_route`]: breadth-first search over a single
//!   insertion-ordered frontier map, with a step budget equal to the
//!   registry size
//! - [`route::reconstruct`]: parent-link walk producing the [`Route`]

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod cache;
pub mod catalog;
#[cfg(test)]
mod catalog_tests;
pub mod config;
#[cfg(test)]
mod config_tests;
pub mod country;
pub mod error;
pub mod gateway;
pub mod memory;
pub mod registry;
pub mod route;
pub mod store;

pub use cache::AdjacencyCache;
pub use catalog::load_registry;
pub use config::{ApiConfig, BorderhopConfig, StorageConfig};
pub use country::{Country, CountryCode};
pub use error::{Error, Result, ValidationError};
pub use gateway::{AdjacencySource, CatalogSource, Gateway, RetryPolicy, TransportError};
pub use registry::CountryRegistry;
pub use route::{find_route, AdjacencyResolver, OutcomeKind, Route, TraversalOutcome};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
