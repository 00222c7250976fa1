//! Route reconstruction from frontier parent links.

use std::fmt;

use crate::country::CountryCode;
use crate::error::{Error, Result};
use crate::registry::CountryRegistry;

use super::frontier::Frontier;

/// Separator used when rendering a route.
pub const ROUTE_SEPARATOR: &str = " → ";

/// Ordered route from source to destination, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    codes: Vec<CountryCode>,
}

impl Route {
    /// Codes from source to destination.
    #[must_use]
    pub fn codes(&self) -> &[CountryCode] {
        &self.codes
    }

    /// Consumes the route, returning its codes.
    #[must_use]
    pub fn into_codes(self) -> Vec<CountryCode> {
        self.codes
    }

    /// Number of border crossings.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.codes.len().saturating_sub(1)
    }

    /// Renders the route as arrow-joined display names, falling back to the
    /// code for countries the registry does not name.
    #[must_use]
    pub fn display_names(&self, registry: &CountryRegistry) -> String {
        self.codes
            .iter()
            .map(|code| registry.name(code).unwrap_or(code.as_str()))
            .collect::<Vec<_>>()
            .join(ROUTE_SEPARATOR)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .codes
            .iter()
            .map(CountryCode::as_str)
            .collect::<Vec<_>>()
            .join(ROUTE_SEPARATOR);
        f.write_str(&joined)
    }
}

/// Walks parent links from `destination` back to `source`.
///
/// `cap` bounds the route length in codes. Exceeding it means the parent
/// links contain a cycle; a missing link is equally an internal error.
pub fn reconstruct(
    frontier: &Frontier,
    source: &CountryCode,
    destination: &CountryCode,
    cap: usize,
) -> Result<Route> {
    let mut codes = vec![destination.clone()];
    let mut current = destination;

    while current != source {
        let parent = frontier
            .parent(current)
            .ok_or_else(|| Error::Internal(format!("no parent link for {current}")))?;
        codes.push(parent.clone());
        if codes.len() > cap {
            return Err(Error::Internal(format!(
                "parent links from {destination} exceed {cap} codes without reaching {source}"
            )));
        }
        current = parent;
    }

    codes.reverse();
    Ok(Route { codes })
}
