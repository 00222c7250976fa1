//! restcountries.com connector.
//!
//! One HTTP request per load call; retrying is the gateway's job.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use borderhop_core::{
    AdjacencySource, ApiConfig, CatalogSource, Country, CountryCode, TransportError,
};

/// HTTP client for the restcountries.com API.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    cca3: Option<String>,
    name: Option<CountryName>,
    #[serde(default)]
    area: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: String,
}

impl RestCountriesClient {
    /// Creates a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from the `[api]` configuration section.
    pub fn from_config(config: &ApiConfig) -> Result<Self, TransportError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, TransportError> {
        debug!(url, "GET");
        let resp = self
            .client
            .get(url)
            .query(query)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Extracts the border list from an alpha lookup body.
///
/// Accepts a bare object or a one-element array; a missing `borders` field
/// means no borders.
fn parse_borders(body: &serde_json::Value) -> Result<Vec<CountryCode>, TransportError> {
    let record = match body {
        serde_json::Value::Array(items) => items.first(),
        other => Some(other),
    };
    let Some(borders) = record.and_then(|r| r.get("borders")) else {
        return Ok(Vec::new());
    };
    let list: Vec<String> = serde_json::from_value(borders.clone())
        .map_err(|e| TransportError::Decode(format!("borders: {e}")))?;
    Ok(list.into_iter().map(CountryCode::new).collect())
}

/// Converts catalog records, skipping entries without a code or name.
fn parse_catalog(body: serde_json::Value) -> Result<Vec<Country>, TransportError> {
    let records: Vec<CountryRecord> =
        serde_json::from_value(body).map_err(|e| TransportError::Decode(e.to_string()))?;
    Ok(records
        .into_iter()
        .filter_map(|r| {
            let code = r.cca3?;
            let name = r.name?.common;
            Some(Country::new(code, name, r.area.unwrap_or(0.0)))
        })
        .collect())
}

#[async_trait]
impl AdjacencySource for RestCountriesClient {
    async fn load_adjacency(&self, code: &CountryCode) -> Result<Vec<CountryCode>, TransportError> {
        let url = format!("{}/v3/alpha/{}", self.base_url, code);
        let body = self.get_json(&url, &[("fields", "borders")]).await?;
        parse_borders(&body)
    }
}

#[async_trait]
impl CatalogSource for RestCountriesClient {
    async fn load_catalog(&self) -> Result<Vec<Country>, TransportError> {
        let url = format!("{}/v3.1/all", self.base_url);
        let body = self
            .get_json(
                &url,
                &[("fields", "name"), ("fields", "cca3"), ("fields", "area")],
            )
            .await?;
        parse_catalog(body)
    }
}
