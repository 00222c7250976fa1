//! Country registry: the immutable code ↔ name dictionary built once from
//! the catalog.
//!
//! The registry is the only authority on which codes are valid. Its size is
//! also the step budget of every traversal.

use std::collections::HashMap;

use crate::country::{Country, CountryCode};
use crate::error::ValidationError;

/// Immutable code ↔ name mapping.
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry {
    /// Catalog records by code.
    countries: HashMap<CountryCode, Country>,
    /// Reverse dictionary: lower-cased display name -> code.
    by_name: HashMap<String, CountryCode>,
}

impl CountryRegistry {
    /// Builds the registry from catalog records.
    ///
    /// A later record with an already-seen code replaces the earlier one.
    #[must_use]
    pub fn from_catalog(catalog: impl IntoIterator<Item = Country>) -> Self {
        let mut countries = HashMap::new();
        for country in catalog {
            countries.insert(country.code.clone(), country);
        }
        let by_name = countries
            .values()
            .map(|c| (c.name.to_lowercase(), c.code.clone()))
            .collect();
        Self { countries, by_name }
    }

    /// Number of known countries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Returns true if the registry holds no countries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Returns true if `code` is a known country.
    #[must_use]
    pub fn is_valid(&self, code: &CountryCode) -> bool {
        self.countries.contains_key(code)
    }

    /// Display name of a known country.
    #[must_use]
    pub fn name(&self, code: &CountryCode) -> Option<&str> {
        self.countries.get(code).map(|c| c.name.as_str())
    }

    /// Codes unknown to the registry have no edges at all.
    ///
    /// The traversal consults this before resolving adjacency so that
    /// garbage codes never cost a remote lookup.
    #[must_use]
    pub fn has_no_possible_edges(&self, code: &CountryCode) -> bool {
        !self.is_valid(code)
    }

    /// Resolves user input given as a display name (case-insensitive) or as
    /// a code.
    #[must_use]
    pub fn resolve(&self, input: &str) -> Option<CountryCode> {
        let trimmed = input.trim();
        if let Some(code) = self.by_name.get(&trimmed.to_lowercase()) {
            return Some(code.clone());
        }
        CountryCode::parse(trimmed).filter(|code| self.is_valid(code))
    }

    /// Validates a route request at the boundary.
    ///
    /// Returns the resolved `(source, destination)` pair, which is then
    /// guaranteed to be valid and distinct.
    pub fn validate_request(
        &self,
        from: &str,
        to: &str,
    ) -> Result<(CountryCode, CountryCode), ValidationError> {
        if from.trim().is_empty() {
            return Err(ValidationError::FromNotSet);
        }
        let source = self
            .resolve(from)
            .ok_or_else(|| ValidationError::FromNotValid(from.trim().to_string()))?;
        if to.trim().is_empty() {
            return Err(ValidationError::ToNotSet);
        }
        let destination = self
            .resolve(to)
            .ok_or_else(|| ValidationError::ToNotValid(to.trim().to_string()))?;
        if source == destination {
            return Err(ValidationError::SameCountry);
        }
        Ok((source, destination))
    }

    /// Countries ordered by descending area, ties broken by name.
    #[must_use]
    pub fn by_area(&self) -> Vec<&Country> {
        let mut list: Vec<&Country> = self.countries.values().collect();
        list.sort_by(|a, b| b.area.total_cmp(&a.area).then_with(|| a.name.cmp(&b.name)));
        list
    }
}
