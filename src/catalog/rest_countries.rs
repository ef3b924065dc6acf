// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! REST Countries v3.1 backed country catalog.
//!
//! Names come from `GET {base}/all` and details from
//! `GET {base}/name/{name}?fullText=true`. Requests are blocking `ureq` calls
//! moved onto the runtime's blocking pool. When a fallback catalog is set, a
//! failed remote call is answered from it instead.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{CountryName, CountryRecord, DetailProvider, JsonFileCatalog, NameProvider};
use crate::error::{CatalogError, CatalogResult};

/// Default REST Countries endpoint.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from the service. Everything else is left out of the
/// response body.
const DETAIL_FIELDS: &str = "name,capital,population,languages,flags,region,subregion";

/// Only the names are needed to populate the trie.
#[derive(Debug, Deserialize)]
struct NameOnly {
    name: CountryName,
}

/// A catalog that queries the REST Countries service.
#[derive(Clone)]
pub struct RestCountriesCatalog {
    base_url: String,
    agent: ureq::Agent,
    fallback: Option<JsonFileCatalog>,
}

impl std::fmt::Debug for RestCountriesCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestCountriesCatalog")
            .field("base_url", &self.base_url)
            .field("fallback", &self.fallback.as_ref().map(JsonFileCatalog::len))
            .finish_non_exhaustive()
    }
}

impl RestCountriesCatalog {
    /// Creates a catalog for the service at `base_url` with a per-request
    /// timeout.
    pub fn new<S: Into<String>>(base_url: S, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            agent: ureq::Agent::new_with_config(config),
            fallback: None,
        }
    }

    /// Answers from `fallback` whenever the service cannot be reached.
    ///
    /// A country the service reports as missing is not looked up in the
    /// fallback.
    pub fn with_fallback(mut self, fallback: JsonFileCatalog) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Returns the service base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn names_url(&self) -> String {
        format!("{}/all?fields=name", self.base_url)
    }

    fn details_url(&self, name: &str) -> String {
        format!(
            "{}/name/{}?fullText=true&fields={DETAIL_FIELDS}",
            self.base_url,
            encode_path_segment(name)
        )
    }

    /// Issues a GET on the blocking pool and returns the raw body.
    async fn get(&self, url: String) -> CatalogResult<Vec<u8>> {
        let agent = self.agent.clone();
        debug!(%url, "Requesting country data");

        tokio::task::spawn_blocking(move || {
            agent
                .get(&url)
                .call()
                .and_then(|response| response.into_body().read_to_vec())
                .map_err(|source| match source {
                    ureq::Error::StatusCode(404) => CatalogError::NotFound(url),
                    source => CatalogError::Transport { url, source },
                })
        })
        .await
        .map_err(|e| CatalogError::Other(format!("Request task failed: {e}")))?
    }

    async fn fetch_remote_names(&self) -> CatalogResult<Vec<String>> {
        let body = self.get(self.names_url()).await?;
        let names = decode_names(&body)?;
        info!(countries = names.len(), base_url = %self.base_url, "Fetched country names");
        Ok(names)
    }

    async fn fetch_remote_details(&self, name: &str) -> CatalogResult<CountryRecord> {
        match self.get(self.details_url(name)).await {
            Ok(body) => decode_details(&body, name),
            Err(CatalogError::NotFound(_)) => Err(CatalogError::NotFound(name.to_string())),
            Err(e) => Err(e),
        }
    }
}

impl Default for RestCountriesCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(10))
    }
}

#[async_trait]
impl NameProvider for RestCountriesCatalog {
    async fn fetch_names(&self) -> CatalogResult<Vec<String>> {
        match (self.fetch_remote_names().await, &self.fallback) {
            (Err(e), Some(fallback)) => {
                warn!(error = %e, "Country service unavailable, using local catalog");
                fallback.fetch_names().await
            }
            (result, _) => result,
        }
    }
}

#[async_trait]
impl DetailProvider for RestCountriesCatalog {
    async fn fetch_details(&self, name: &str) -> CatalogResult<CountryRecord> {
        match (self.fetch_remote_details(name).await, &self.fallback) {
            (Err(e @ CatalogError::NotFound(_)), _) => Err(e),
            (Err(e), Some(fallback)) => {
                warn!(error = %e, name, "Country service unavailable, using local catalog");
                fallback.fetch_details(name).await
            }
            (result, _) => result,
        }
    }
}

/// Decodes an `/all?fields=name` response into common names, in response order.
fn decode_names(body: &[u8]) -> CatalogResult<Vec<String>> {
    let entries: Vec<NameOnly> = serde_json::from_slice(body)?;
    Ok(entries.into_iter().map(|entry| entry.name.common).collect())
}

/// Decodes a `/name/{name}` response. The service answers with an array;
/// the first entry is the match.
fn decode_details(body: &[u8], name: &str) -> CatalogResult<CountryRecord> {
    let records: Vec<CountryRecord> = serde_json::from_slice(body)?;
    records
        .into_iter()
        .next()
        .ok_or_else(|| CatalogError::NotFound(name.to_string()))
}

/// Percent-encodes `segment` for use as a single URL path segment.
///
/// Unreserved characters (RFC 3986) pass through; every other byte of the
/// UTF-8 encoding is escaped.
fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(char::from(byte))
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Germany", "Germany"; "plain ascii")]
    #[test_case("South Africa", "South%20Africa"; "space")]
    #[test_case("Côte d'Ivoire", "C%C3%B4te%20d%27Ivoire"; "multibyte and quote")]
    #[test_case("Åland Islands", "%C3%85land%20Islands"; "leading multibyte")]
    #[test_case("a/b?c", "a%2Fb%3Fc"; "reserved characters")]
    fn test_encode_path_segment(input: &str, expected: &str) {
        assert_eq!(encode_path_segment(input), expected);
    }

    #[test]
    fn test_urls() {
        let catalog = RestCountriesCatalog::new("http://localhost:8080/v3.1/", Duration::from_secs(1));
        assert_eq!(catalog.base_url(), "http://localhost:8080/v3.1");
        assert_eq!(catalog.names_url(), "http://localhost:8080/v3.1/all?fields=name");
        assert_eq!(
            catalog.details_url("South Korea"),
            "http://localhost:8080/v3.1/name/South%20Korea?fullText=true\
             &fields=name,capital,population,languages,flags,region,subregion"
        );
    }

    #[test]
    fn test_decode_names_keeps_response_order() {
        let body = br#"[
            {"name": {"common": "Ghana", "official": "Republic of Ghana", "nativeName": {}}},
            {"name": {"common": "Germany", "official": "Federal Republic of Germany"}}
        ]"#;
        assert_eq!(decode_names(body).unwrap(), vec!["Ghana", "Germany"]);
    }

    #[test]
    fn test_decode_details_takes_first_match() {
        let body = br#"[{
            "name": {"common": "Chile", "official": "Republic of Chile"},
            "capital": ["Santiago"],
            "population": 19116209,
            "languages": {"spa": "Spanish"},
            "flags": {"svg": "https://flagcdn.com/cl.svg", "png": "https://flagcdn.com/w320/cl.png"},
            "region": "Americas"
        }]"#;

        let record = decode_details(body, "Chile").unwrap();
        assert_eq!(record.common_name(), "Chile");
        assert_eq!(record.capital, vec!["Santiago"]);
        assert_eq!(record.population, 19_116_209);
        assert_eq!(record.region.as_deref(), Some("Americas"));
    }

    #[test]
    fn test_decode_details_empty_array_is_not_found() {
        let err = decode_details(b"[]", "Atlantis").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(name) if name == "Atlantis"));
    }

    #[test]
    fn test_decode_rejects_error_document() {
        let err = decode_names(br#"{"status": 400, "message": "Bad Request"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    /// Nothing listens on port 9 of the loopback interface, so every request
    /// fails at the transport level.
    fn unreachable() -> RestCountriesCatalog {
        RestCountriesCatalog::new("http://127.0.0.1:9/v3.1", Duration::from_secs(2))
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        let err = unreachable().fetch_names().await.unwrap_err();
        assert!(matches!(err, CatalogError::Transport { ref url, .. } if url.ends_with("/all?fields=name")));
    }

    #[tokio::test]
    async fn test_unreachable_service_uses_fallback() {
        let fallback = JsonFileCatalog::from_records(vec![
            CountryRecord::named("Chad"),
            CountryRecord::named("Chile"),
        ]);
        let catalog = unreachable().with_fallback(fallback);

        assert_eq!(catalog.fetch_names().await.unwrap(), vec!["Chad", "Chile"]);
        assert_eq!(catalog.fetch_details("chile").await.unwrap().common_name(), "Chile");
        assert!(matches!(
            catalog.fetch_details("Atlantis").await,
            Err(CatalogError::NotFound(_))
        ));
    }
}
