//! Catalog error module.
//!
//! This module defines error types that may occur while reading the country
//! catalog and looking up individual country records.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error when the catalog source does not exist.
    #[error("Catalog source not found: {0}")]
    SourceNotFound(PathBuf),

    /// Error when the catalog source exists but cannot be read.
    #[error("Failed to read catalog source {path}: {source}")]
    Read {
        /// The path that failed to read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error when the catalog document is not valid country data.
    #[error("Failed to decode catalog: {0}")]
    Decode(#[from] serde_json::Error),

    /// Error when the remote catalog service cannot be reached or answers
    /// with an error status.
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// The requested URL
        url: String,
        /// The underlying HTTP client error
        #[source]
        source: ureq::Error,
    },

    /// Error when no country matches the requested name.
    #[error("Country not found: {0}")]
    NotFound(String),

    /// Other catalog errors.
    #[error("Catalog error: {0}")]
    Other(String),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
