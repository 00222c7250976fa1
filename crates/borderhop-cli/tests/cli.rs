//! Binary tests over a pre-seeded data directory (no network access).

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;

/// Nothing listens here, so any remote lookup fails fast.
const DEAD_API: &str = "http://127.0.0.1:9";

fn seed_store(dir: &Path) {
    let countries = json!({
        "FRA": {"code": "FRA", "name": "France", "area": 551_695.0},
        "ESP": {"code": "ESP", "name": "Spain", "area": 505_992.0},
        "PRT": {"code": "PRT", "name": "Portugal", "area": 92_090.0},
        "DEU": {"code": "DEU", "name": "Germany", "area": 357_114.0},
        "ISL": {"code": "ISL", "name": "Iceland", "area": 103_000.0}
    });
    let borders = json!({
        "FRA": ["ESP", "DEU"],
        "ESP": ["FRA", "PRT"],
        "DEU": ["FRA"],
        "ISL": []
    });
    let store = json!({
        "countries": countries.to_string(),
        "borders": borders.to_string(),
    });
    std::fs::write(dir.join("store.json"), store.to_string()).unwrap();
}

fn borderhop(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("borderhop").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(dir)
        .arg("--api-url")
        .arg(DEAD_API);
    cmd
}

#[test]
fn test_route_from_cached_data() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    borderhop(dir.path())
        .args(["route", "France", "Portugal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculating route from France (FRA) to Portugal (PRT)"))
        .stdout(predicate::str::contains("France → Spain → Portugal"))
        .stdout(predicate::str::contains("Total query count: 3"));
}

#[test]
fn test_route_not_found_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    borderhop(dir.path())
        .args(["route", "ISL", "FRA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route not found: island or other continent"))
        .stdout(predicate::str::contains("Total query count: 1"));
}

#[test]
fn test_same_country_is_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    borderhop(dir.path())
        .args(["route", "Spain", "esp"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: from country and to country are equal"))
        .stderr(predicate::str::contains("Validation error").not());
}

#[test]
fn test_unknown_country_is_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    borderhop(dir.path())
        .args(["route", "Atlantis", "Spain"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("from country is not valid: Atlantis"));
}

#[test]
fn test_uncached_border_with_dead_api_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    // PRT is not cached, so reaching Germany from Portugal needs the API.
    borderhop(dir.path())
        .args(["route", "Portugal", "Germany"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Calculating route from Portugal (PRT) to Germany (DEU). Please wait...",
        ))
        .stderr(predicate::str::contains("Fatal error: country borders could not be loaded"));
}

#[test]
fn test_banner_precedes_border_outage() {
    let dir = tempfile::tempdir().unwrap();
    let countries = json!({
        "FRA": {"code": "FRA", "name": "France", "area": 551_695.0},
        "PRT": {"code": "PRT", "name": "Portugal", "area": 92_090.0}
    });
    let store = json!({ "countries": countries.to_string() });
    std::fs::write(dir.path().join("store.json"), store.to_string()).unwrap();

    borderhop(dir.path())
        .args(["route", "France", "Portugal"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Calculating route from France (FRA) to Portugal (PRT). Please wait...",
        ))
        .stdout(predicate::str::contains("Total query count").not())
        .stderr(predicate::str::contains("Fatal error: country borders could not be loaded"));
}

#[test]
fn test_empty_api_url_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    Command::cargo_bin("borderhop")
        .unwrap()
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .arg("--data-dir")
        .arg(dir.path())
        .args(["--api-url", "", "countries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("api.base_url must not be empty"));
}

#[test]
fn test_countries_by_area() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    borderhop(dir.path())
        .args(["countries", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FRA  France"))
        .stdout(predicate::str::contains("ESP  Spain"))
        .stdout(predicate::str::contains("Germany").not())
        .stdout(predicate::str::contains("... and 3 more"));
}

#[test]
fn test_clear_cache_removes_borders() {
    let dir = tempfile::tempdir().unwrap();
    seed_store(dir.path());

    borderhop(dir.path())
        .arg("clear-cache")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cache is cleared"));

    let raw = std::fs::read_to_string(dir.path().join("store.json")).unwrap();
    let store: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(store.get("borders").is_none());
    assert!(store.get("countries").is_some());
}
