// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Kukui Trie Implementation
//!
//! This module provides a prefix tree over Unicode scalar values, used to
//! answer "all words starting with P" queries for autocomplete.
//!
//! Key properties:
//! * Characters are compared exactly; there is no case folding.
//! * Children are kept in a [`BTreeMap`](std::collections::BTreeMap), so every
//!   query returns words in lexicographic code point order.
//! * Traversal uses an explicit stack, never recursion, so pathological
//!   inputs such as a single very long word are handled safely.

mod node;

use std::collections::btree_map;

pub use node::TrieNode;

/// Kukui Trie stores a set of words and answers prefix queries.
///
/// ```
/// use mauka_autocomplete_lib::data_structures::KukuiTrie;
///
/// let mut trie = KukuiTrie::new();
/// trie.insert("Chad");
/// trie.insert("Chile");
/// trie.insert("China");
///
/// assert_eq!(trie.search("Chi"), vec!["Chile", "China"]);
/// assert!(trie.search("Z").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct KukuiTrie {
    /// The root node, representing the empty prefix
    root: TrieNode,

    /// Number of distinct words stored
    len: usize,
}

impl KukuiTrie {
    /// Creates a new empty `KukuiTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word into the trie.
    ///
    /// Any string is accepted, including the empty string, which marks the
    /// root itself as terminal. Inserting a word that is already present
    /// leaves the trie unchanged.
    ///
    /// # Returns
    ///
    /// `true` if the word was not present before this call.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let mut node = &mut self.root;
        for c in word.as_ref().chars() {
            node = node.children.entry(c).or_default();
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;
        if is_new {
            self.len += 1;
        }
        is_new
    }

    /// Returns every stored word that starts with `prefix`.
    ///
    /// Words are returned in full (prefix included) and in lexicographic
    /// code point order. An exact match on `prefix` is part of the result.
    /// An empty vector means no stored word begins with `prefix`.
    pub fn search<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.search_iter(prefix).collect()
    }

    /// Lazy form of [`search`](Self::search).
    pub fn search_iter<P>(&self, prefix: P) -> Words<'_>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        match self.find_node(prefix) {
            Some(node) => Words::new(node, prefix.to_string()),
            None => Words::empty(),
        }
    }

    /// Returns `true` if `word` was inserted.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.find_node(word.as_ref())
            .is_some_and(TrieNode::is_terminal)
    }

    /// Returns `true` if at least one stored word starts with `prefix`.
    pub fn starts_with<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        // Nodes are only created along inserted words, so any reachable node
        // other than a bare root leads to at least one terminal.
        self.find_node(prefix.as_ref())
            .is_some_and(|node| node.is_terminal || !node.is_leaf())
    }

    /// Iterates over all stored words in lexicographic order.
    pub fn iter(&self) -> Words<'_> {
        Words::new(&self.root, String::new())
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every word from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Walks from the root along `prefix`, stopping at the first missing edge.
    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

impl<S> Extend<S> for KukuiTrie
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S> FromIterator<S> for KukuiTrie
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<'a> IntoIterator for &'a KukuiTrie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first, pre-order iterator over the words below a trie node.
///
/// The iterator keeps one child cursor per level on an explicit stack and a
/// single buffer holding the path spelled so far.
#[derive(Debug)]
pub struct Words<'a> {
    /// Node whose own terminal flag has not been reported yet
    start: Option<&'a TrieNode>,

    /// One cursor per level below `start`
    stack: Vec<btree_map::Iter<'a, char, TrieNode>>,

    /// The prefix followed by every character consumed below `start`
    path: String,
}

impl<'a> Words<'a> {
    fn new(start: &'a TrieNode, prefix: String) -> Self {
        Self {
            start: Some(start),
            stack: Vec::new(),
            path: prefix,
        }
    }

    fn empty() -> Self {
        Self {
            start: None,
            stack: Vec::new(),
            path: String::new(),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            self.stack.push(start.children.iter());
            if start.is_terminal {
                return Some(self.path.clone());
            }
        }

        loop {
            let cursor = self.stack.last_mut()?;
            match cursor.next() {
                Some((c, child)) => {
                    self.path.push(*c);
                    self.stack.push(child.children.iter());
                    if child.is_terminal {
                        return Some(self.path.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // The bottom cursor belongs to the start node, whose
                    // characters are the caller's prefix and stay put.
                    if !self.stack.is_empty() {
                        self.path.pop();
                    }
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Words<'_> {}
