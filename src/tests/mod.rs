//! Test modules for Mauka Autocomplete.
//!
//! This module contains cross-cutting test infrastructure, including:
//! - Configuration and error handling tests
//! - Property-based tests for the Kukui Trie using proptest
//! - Test fixtures and utilities
//!
//! Component unit tests live next to the code they exercise.


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{country_fixture, word_list_strategy, word_strategy, TestFixture};
