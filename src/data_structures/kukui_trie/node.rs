//! Node implementation for the Kukui Trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each node owns its
//! children outright, so the whole structure is a plain tree with no shared
//! or back references.

use std::collections::BTreeMap;

/// A node in the Kukui Trie.
///
/// Each node represents one character along a word path. A node is terminal
/// when some inserted word ends exactly at it.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Map of characters to owned child nodes, iterated in code point order
    pub(super) children: BTreeMap<char, TrieNode>,

    /// Whether an inserted word ends at this node
    pub(super) is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty, non-terminal trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if an inserted word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Returns the child reached by `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Iterates over the children of this node in ascending character order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> + '_ {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Drop for TrieNode {
    // Nodes are torn down through an explicit work list so that a single very
    // long word cannot exhaust the stack on drop.
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
