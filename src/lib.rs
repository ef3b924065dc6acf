//! Mauka Autocomplete Library
//!
//! This library contains the core components of Mauka Autocomplete: the
//! Kukui prefix trie, the country catalog, the autocomplete session that ties
//! them together, and the configuration and error plumbing around them.
//! The library is designed to be used by the binary crate, but can also
//! be used as a dependency by other projects.
//!
//! # Architecture
//!
//! Mauka Autocomplete is designed with the following principles in mind:
//! - Strict component boundaries
//! - Dependency injection for testability
//! - Failures at the I/O boundary degrade to empty results
//! - Bounded stack usage in every data structure

// Re-export public modules
pub mod autocomplete;
pub mod catalog;
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use autocomplete::{AutocompleteSession, CountryCard, Suggestions};
pub use data_structures::KukuiTrie;

/// Version information for Mauka Autocomplete.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
