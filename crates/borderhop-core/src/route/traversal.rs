//! Discovery-order breadth-first route search.
//!
//! Borders are resolved one country at a time through an
//! [`AdjacencyResolver`], so the number of lookups, not the graph size, is
//! what the search spends. Lookups never overlap: the search awaits each one
//! before touching the frontier again.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::cache::AdjacencyCache;
use crate::country::CountryCode;
use crate::error::Result;
use crate::gateway::AdjacencySource;
use crate::registry::CountryRegistry;
use crate::store::KeyValueStore;

use super::frontier::Frontier;
use super::path::{reconstruct, Route};

/// Resolves the border list of a country for the traversal engine.
#[async_trait]
pub trait AdjacencyResolver: Send {
    /// Returns the ordered neighbor codes of `code`.
    async fn resolve(&mut self, code: &CountryCode) -> Result<Vec<CountryCode>>;

    /// Remote fetches issued so far, used to report per-run network usage.
    fn fetches_issued(&self) -> usize {
        0
    }
}

/// Implement `AdjacencyResolver` for `AdjacencyCache`.
#[async_trait]
impl<S, K> AdjacencyResolver for AdjacencyCache<S, K>
where
    S: AdjacencySource,
    K: KeyValueStore,
{
    async fn resolve(&mut self, code: &CountryCode) -> Result<Vec<CountryCode>> {
        self.get_adjacency(code).await
    }

    fn fetches_issued(&self) -> usize {
        self.fetch_count()
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The destination was reached.
    Found(Route),
    /// The frontier was exhausted: the destination lies in another
    /// connected component.
    NotFound,
    /// More steps than registered countries were taken.
    BudgetExceeded,
}

/// Result of one route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalOutcome {
    /// How the search ended.
    pub kind: OutcomeKind,
    /// Steps that required a border lookup, cache hits included.
    pub query_count: usize,
    /// Remote fetches issued during this search.
    pub fetch_count: usize,
}

impl TraversalOutcome {
    /// The route, if one was found.
    #[must_use]
    pub fn route(&self) -> Option<&Route> {
        match &self.kind {
            OutcomeKind::Found(route) => Some(route),
            OutcomeKind::NotFound | OutcomeKind::BudgetExceeded => None,
        }
    }
}

/// Searches for a route from `source` to `destination`.
///
/// Both codes must be valid and distinct (see
/// [`CountryRegistry::validate_request`]). The step budget is the registry
/// size. A border lookup failure aborts the search with that error; entries
/// cached before the failure stay cached.
pub async fn find_route<R>(
    registry: &CountryRegistry,
    resolver: &mut R,
    source: &CountryCode,
    destination: &CountryCode,
) -> Result<TraversalOutcome>
where
    R: AdjacencyResolver + ?Sized,
{
    let budget = registry.len();
    let fetches_before = resolver.fetches_issued();
    let mut frontier = Frontier::new(source.clone());
    let mut steps = 0usize;
    let mut query_count = 0usize;
    let mut cursor = 0usize;

    let kind = loop {
        let Some(current) = frontier.get_index(cursor).cloned() else {
            break OutcomeKind::NotFound;
        };
        cursor += 1;

        steps += 1;
        if steps > budget {
            break OutcomeKind::BudgetExceeded;
        }

        if current == *destination {
            break OutcomeKind::Found(reconstruct(
                &frontier,
                source,
                destination,
                budget + 1,
            )?);
        }

        query_count += 1;
        let neighbors = if registry.has_no_possible_edges(&current) {
            debug!(code = %current, "Unknown code, no borders to resolve");
            Vec::new()
        } else {
            resolver.resolve(&current).await?
        };

        for neighbor in neighbors {
            if frontier.discover(neighbor.clone(), current.clone()) {
                debug!(code = %neighbor, parent = %current, "Discovered");
            }
        }
    };

    let fetch_count = resolver.fetches_issued().saturating_sub(fetches_before);
    info!(
        %source,
        %destination,
        outcome = ?kind,
        query_count,
        fetch_count,
        discovered = frontier.len(),
        "Route search finished"
    );

    Ok(TraversalOutcome {
        kind,
        query_count,
        fetch_count,
    })
}
