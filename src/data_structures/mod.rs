//! Data structures for Mauka Autocomplete.
//!
//! This module contains the in-memory indexes the autocomplete engine is
//! built on. All implementations adhere to the project requirements:
//! - No unsafe code
//! - Exclusive ownership, no shared interior mutability
//! - Bounded stack usage regardless of input shape

pub mod kukui_trie;

// Re-export common data structures
pub use kukui_trie::{KukuiTrie, TrieNode, Words};
