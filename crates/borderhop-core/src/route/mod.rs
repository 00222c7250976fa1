//! Route search over borders discovered on demand.
//!
//! # Example
//!
//! ```rust
//! use borderhop_core::memory::InMemorySource;
//! use borderhop_core::route::{find_route, OutcomeKind};
//! use borderhop_core::{AdjacencyCache, CountryCode, Gateway, MemoryStore, RetryPolicy};
//!
//! # fn main() -> Result<(), borderhop_core::Error> {
//! # let rt = tokio::runtime::Builder::new_current_thread().build()?;
//! # rt.block_on(async {
//! let source = InMemorySource::from_adjacency(&[
//!     ("A", &["B", "C"]),
//!     ("B", &["A"]),
//!     ("C", &["A", "D"]),
//!     ("D", &["C"]),
//! ]);
//! let registry = source.registry();
//! let gateway = Gateway::new(source, RetryPolicy::default());
//! let mut cache = AdjacencyCache::open(gateway, MemoryStore::new())?;
//!
//! let (from, to) = (CountryCode::new("A"), CountryCode::new("D"));
//! let outcome = find_route(&registry, &mut cache, &from, &to).await?;
//! assert!(matches!(outcome.kind, OutcomeKind::Found(_)));
//! assert_eq!(outcome.route().map(ToString::to_string).as_deref(), Some("A → C → D"));
//! # Ok::<(), borderhop_core::Error>(())
//! # })
//! # }
//! ```

mod frontier;
mod path;
mod traversal;


pub use frontier::Frontier;
pub use path::{reconstruct, Route, ROUTE_SEPARATOR};
pub use traversal::{find_route, AdjacencyResolver, OutcomeKind, TraversalOutcome};
