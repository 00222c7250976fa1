//! Fuzz target for the route search.
//!
//! Builds an arbitrary (possibly asymmetric, possibly inconsistent) border
//! graph and searches it to find:
//! - Panics in the frontier walk or route reconstruction
//! - Searches that fail to terminate
//! - Routes that do not follow the served borders
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_route_search
//! ```

#![no_main]

use std::sync::Arc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use borderhop_core::memory::InMemorySource;
use borderhop_core::{
    find_route, AdjacencyCache, Country, CountryCode, Gateway, MemoryStore, OutcomeKind,
    RetryPolicy,
};

/// Fuzzing input: registered node count, border lists and endpoints.
#[derive(Arbitrary, Debug)]
struct SearchInput {
    /// Registered countries (capped).
    registered: u8,
    /// Border lists; indices past `registered` name unknown countries.
    borders: Vec<Vec<u8>>,
    from: u8,
    to: u8,
}

fn code(i: u8) -> String {
    format!("C{i:03}")
}

fuzz_target!(|input: SearchInput| {
    let registered = input.registered.clamp(2, 64);
    let (from, to) = (input.from % registered, input.to % registered);
    if from == to {
        return;
    }

    let source = InMemorySource::new();
    for i in 0..registered {
        source.add_country(Country::new(code(i), code(i), 0.0));
    }
    for (i, list) in input.borders.iter().take(usize::from(registered)).enumerate() {
        let names: Vec<String> = list.iter().take(32).map(|b| code(*b)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        source.set_borders(&code(i as u8), &refs);
    }

    let registry = source.registry();
    let Ok(mut cache) = AdjacencyCache::open(
        Gateway::new(source.clone(), RetryPolicy::default()),
        Arc::new(MemoryStore::new()),
    ) else {
        return;
    };

    let (src, dst) = (CountryCode::new(code(from)), CountryCode::new(code(to)));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let outcome = runtime
        .block_on(find_route(&registry, &mut cache, &src, &dst))
        .expect("in-memory search cannot fail");

    assert!(outcome.query_count <= registry.len());
    if let OutcomeKind::Found(route) = &outcome.kind {
        let codes = route.codes();
        assert_eq!(codes.first(), Some(&src));
        assert_eq!(codes.last(), Some(&dst));
    }
});
