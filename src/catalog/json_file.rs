// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! JSON document backed country catalog.

use std::path::Path;

use async_trait::async_trait;
use fnv::FnvBuildHasher;
use hashbrown::HashMap;
use tracing::{debug, info};

use super::{CountryRecord, DetailProvider, NameProvider};
use crate::error::{CatalogError, CatalogResult};

type NameIndex = HashMap<String, usize, FnvBuildHasher>;

/// A country catalog held in memory, decoded from a REST Countries v3.1
/// formatted JSON array.
///
/// Records keep their document order. Lookups go through two indexes: one
/// keyed by the exact common name and one keyed by the lowercased common and
/// official names.
#[derive(Debug, Clone, Default)]
pub struct JsonFileCatalog {
    records: Vec<CountryRecord>,
    by_common: NameIndex,
    by_folded: NameIndex,
}

impl JsonFileCatalog {
    /// Loads and decodes the catalog document at `path`.
    ///
    /// # Errors
    ///
    /// * `CatalogError::SourceNotFound` - the file does not exist
    /// * `CatalogError::Read` - the file exists but could not be read
    /// * `CatalogError::Decode` - the file is not a JSON array of countries
    pub async fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CatalogError::SourceNotFound(path.to_path_buf()))
            }
            Err(source) => {
                return Err(CatalogError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let catalog = Self::from_slice(&bytes)?;
        info!(path = %path.display(), countries = catalog.len(), "Loaded country catalog");
        Ok(catalog)
    }

    /// Decodes a catalog from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> CatalogResult<Self> {
        let records: Vec<CountryRecord> = serde_json::from_slice(bytes)?;
        Ok(Self::from_records(records))
    }

    /// Builds a catalog from records already in memory.
    pub fn from_records(records: Vec<CountryRecord>) -> Self {
        let mut by_common = NameIndex::default();
        let mut by_folded = NameIndex::default();

        for (i, record) in records.iter().enumerate() {
            by_common.entry(record.name.common.clone()).or_insert(i);
            by_folded.entry(record.name.common.to_lowercase()).or_insert(i);
            if !record.name.official.is_empty() {
                by_folded.entry(record.name.official.to_lowercase()).or_insert(i);
            }
        }

        Self {
            records,
            by_common,
            by_folded,
        }
    }

    /// Finds the record for a full country name.
    ///
    /// An exact match on the common name wins; otherwise the name is matched
    /// case-insensitively against common and official names.
    pub fn lookup(&self, name: &str) -> Option<&CountryRecord> {
        let index = self
            .by_common
            .get(name)
            .or_else(|| self.by_folded.get(&name.to_lowercase()))?;
        self.records.get(*index)
    }

    /// Returns all records in document order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl NameProvider for JsonFileCatalog {
    async fn fetch_names(&self) -> CatalogResult<Vec<String>> {
        Ok(self
            .records
            .iter()
            .map(|record| record.name.common.clone())
            .collect())
    }
}

#[async_trait]
impl DetailProvider for JsonFileCatalog {
    async fn fetch_details(&self, name: &str) -> CatalogResult<CountryRecord> {
        debug!(name, "Looking up country details");
        self.lookup(name)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }
}
