//! Catalog configuration module.
//!
//! This module defines where the country catalog is read from.

use super::{ConfigResult, Validate};
use crate::catalog::DEFAULT_BASE_URL;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default location of the country catalog document.
pub const DEFAULT_CATALOG_PATH: &str = "data/countries.json";

/// Where country names and details come from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// The JSON document at `path`
    #[default]
    File,

    /// The REST Countries service at `base_url`, with `path` as the offline fallback
    Remote,
}

/// Country catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Catalog source
    pub source: CatalogSource,

    /// Path to a JSON document in the REST Countries v3.1 format
    pub path: PathBuf,

    /// Base URL of the REST Countries v3.1 service
    pub base_url: String,

    /// Per-request timeout for the remote service, in seconds
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Returns the per-request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: CatalogSource::File,
            path: PathBuf::from(DEFAULT_CATALOG_PATH),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "catalog path cannot be empty".to_string(),
            ));
        }

        if self.source == CatalogSource::Remote {
            if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
                return Err(ConfigError::ValidationError(format!(
                    "catalog base_url must be an http(s) URL: {:?}",
                    self.base_url
                )));
            }

            if self.timeout_secs == 0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: "catalog.timeout_secs".to_string(),
                    message: "must be at least 1 second".to_string(),
                });
            }
        }

        Ok(())
    }
}
