//! Terminal rendering of route requests and outcomes.

use std::io::{self, Write};

use colored::Colorize;

use borderhop_core::{Country, CountryCode, CountryRegistry, Error, OutcomeKind, TraversalOutcome};

use crate::session::RouteReport;

/// Message for a frontier exhausted without reaching the destination.
pub const NOT_FOUND_MESSAGE: &str = "Route not found: island or other continent";

/// Message for a search stopped by its step budget.
pub const BUDGET_EXCEEDED_MESSAGE: &str = "Route not found: query limit overflow";

/// Message confirming a cache clear.
pub const CACHE_CLEARED_MESSAGE: &str = "Cache is cleared";

fn label(registry: &CountryRegistry, code: &CountryCode) -> String {
    let name = registry.name(code).unwrap_or(code.as_str());
    format!("{} ({})", name.bold(), code)
}

/// Banner printed before a search starts.
#[must_use]
pub fn banner(registry: &CountryRegistry, source: &CountryCode, destination: &CountryCode) -> String {
    format!(
        "Calculating route from {} to {}. Please wait...",
        label(registry, source),
        label(registry, destination)
    )
}

/// Outcome line: the route, or one of the two failure messages.
#[must_use]
pub fn outcome_line(registry: &CountryRegistry, outcome: &TraversalOutcome) -> String {
    match &outcome.kind {
        OutcomeKind::Found(route) => route.display_names(registry).green().to_string(),
        OutcomeKind::NotFound => NOT_FOUND_MESSAGE.yellow().to_string(),
        OutcomeKind::BudgetExceeded => BUDGET_EXCEEDED_MESSAGE.yellow().to_string(),
    }
}

/// Query-count footer.
#[must_use]
pub fn query_count_line(outcome: &TraversalOutcome) -> String {
    format!(
        "Total query count: {} ({} fetched remotely)",
        outcome.query_count.to_string().bold(),
        outcome.fetch_count
    )
}

/// User-facing text for a fatal error.
#[must_use]
pub fn fatal_message(err: &Error) -> String {
    let detail = match err {
        Error::CatalogLookup { .. } => "countries could not be loaded, try again later",
        Error::EmptyCatalog => "no countries were loaded, try again later",
        Error::AdjacencyLookup { .. } => "country borders could not be loaded, try again later",
        Error::Validation(inner) => return format!("{} {inner}", "Error:".red().bold()),
        _ => "unexpected failure",
    };
    format!("{} {detail} ({err})", "Fatal error:".red().bold())
}

/// Writes the banner and flushes it, so it shows while the search runs.
pub fn write_banner(
    out: &mut impl Write,
    registry: &CountryRegistry,
    source: &CountryCode,
    destination: &CountryCode,
) -> io::Result<()> {
    writeln!(out, "{}", banner(registry, source, destination))?;
    out.flush()
}

/// Writes the outcome of a finished search.
pub fn write_report(
    out: &mut impl Write,
    registry: &CountryRegistry,
    report: &RouteReport,
) -> io::Result<()> {
    writeln!(out, "{}", outcome_line(registry, &report.outcome))?;
    writeln!(out, "{}", query_count_line(&report.outcome))
}

/// Writes `countries` in order, optionally truncated.
pub fn write_countries(
    out: &mut impl Write,
    countries: &[&Country],
    limit: Option<usize>,
) -> io::Result<()> {
    let shown = limit.unwrap_or(countries.len()).min(countries.len());
    for country in countries.iter().take(shown) {
        writeln!(out, "{}  {}", country.code.as_str().cyan(), country.name)?;
    }
    if shown < countries.len() {
        writeln!(out, "... and {} more", countries.len() - shown)?;
    }
    Ok(())
}
