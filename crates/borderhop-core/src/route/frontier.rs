//! Insertion-ordered frontier: visited-set, FIFO queue and parent tree in
//! one map.

use indexmap::IndexMap;

use crate::country::CountryCode;

/// Discovered countries mapped to the country they were discovered from.
///
/// The source maps to itself. A code is inserted at most once, and index
/// order is discovery order, so walking indices `0..len()` while the map
/// grows visits every node exactly once in breadth-first order.
#[derive(Debug, Clone)]
pub struct Frontier {
    parents: IndexMap<CountryCode, CountryCode>,
}

impl Frontier {
    /// Creates a frontier holding only `source`.
    #[must_use]
    pub fn new(source: CountryCode) -> Self {
        let mut parents = IndexMap::new();
        parents.insert(source.clone(), source);
        Self { parents }
    }

    /// Records `node` as discovered from `parent`.
    ///
    /// Returns false (and keeps the first parent) if `node` was already
    /// discovered.
    pub fn discover(&mut self, node: CountryCode, parent: CountryCode) -> bool {
        if self.parents.contains_key(&node) {
            return false;
        }
        self.parents.insert(node, parent);
        true
    }

    /// The code discovered at position `index`.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&CountryCode> {
        self.parents.get_index(index).map(|(code, _)| code)
    }

    /// Parent link of `code`.
    #[must_use]
    pub fn parent(&self, code: &CountryCode) -> Option<&CountryCode> {
        self.parents.get(code)
    }

    /// Number of discovered codes, source included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Always false: a frontier holds at least its source.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
