//! Country catalog.
//!
//! The autocomplete engine consumes two collaborators: a source of display
//! names used to populate the trie, and a detail lookup keyed by the exact
//! name the user selected. Both are expressed as async traits so that a file
//! backed catalog, a remote service or a test double can be injected.

mod json_file;
mod record;
mod rest_countries;

use async_trait::async_trait;

pub use json_file::JsonFileCatalog;
pub use record::{CountryName, CountryRecord, Flags};
pub use rest_countries::{RestCountriesCatalog, DEFAULT_BASE_URL};

use crate::error::CatalogResult;

/// Supplies the list of names to index.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NameProvider: Send + Sync {
    /// Fetches every display name, in the provider's order.
    ///
    /// Names are arbitrary Unicode strings and are indexed verbatim.
    async fn fetch_names(&self) -> CatalogResult<Vec<String>>;
}

/// Resolves a selected name to its full record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DetailProvider: Send + Sync {
    /// Fetches the record for `name`.
    ///
    /// # Errors
    ///
    /// `CatalogError::NotFound` when no country carries that name.
    async fn fetch_details(&self, name: &str) -> CatalogResult<CountryRecord>;
}
