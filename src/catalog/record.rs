//! Country record model.
//!
//! A subset of the REST Countries v3.1 response schema. Fields that the
//! autocomplete never reads are ignored on decode.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Names of a country.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryName {
    /// Common display name, the string indexed for autocomplete
    pub common: String,

    /// Official long-form name
    #[serde(default)]
    pub official: String,
}

/// Flag image locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flags {
    /// SVG image URL
    #[serde(default)]
    pub svg: Option<String>,

    /// PNG image URL
    #[serde(default)]
    pub png: Option<String>,

    /// Textual description of the flag
    #[serde(default)]
    pub alt: Option<String>,
}

/// A single country entry in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryRecord {
    /// Common and official names
    pub name: CountryName,

    /// Capital cities, empty when the country has none on record
    #[serde(default)]
    pub capital: Vec<String>,

    /// Population head count
    #[serde(default)]
    pub population: u64,

    /// Spoken languages keyed by ISO 639-3 code
    #[serde(default)]
    pub languages: BTreeMap<String, String>,

    /// Flag images
    #[serde(default)]
    pub flags: Option<Flags>,

    /// Continental region
    #[serde(default)]
    pub region: Option<String>,

    /// Sub-region within the region
    #[serde(default)]
    pub subregion: Option<String>,
}

impl CountryRecord {
    /// Creates a record holding only a common name.
    pub fn named<S: Into<String>>(common: S) -> Self {
        let common = common.into();
        Self {
            name: CountryName {
                official: common.clone(),
                common,
            },
            capital: Vec::new(),
            population: 0,
            languages: BTreeMap::new(),
            flags: None,
            region: None,
            subregion: None,
        }
    }

    /// Returns the common display name.
    pub fn common_name(&self) -> &str {
        &self.name.common
    }
}
