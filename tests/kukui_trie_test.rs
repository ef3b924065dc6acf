// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Kukui Trie public API.

use mauka_autocomplete_lib::data_structures::{KukuiTrie, TrieNode};

#[test]
fn test_country_prefixes() {
    let mut trie = KukuiTrie::new();
    for name in ["Germany", "Georgia", "Ghana"] {
        trie.insert(name);
    }

    assert_eq!(trie.search("G"), vec!["Georgia", "Germany", "Ghana"]);
    assert_eq!(trie.search("Ge"), vec!["Georgia", "Germany"]);
    assert_eq!(trie.search("Gh"), vec!["Ghana"]);
    assert!(trie.search("Z").is_empty());
}

#[test]
fn test_diverging_suffixes() {
    let trie: KukuiTrie = ["Chad", "Chile", "China"].into_iter().collect();
    assert_eq!(trie.search("Chi"), vec!["Chile", "China"]);
    assert_eq!(trie.search("Cha"), vec!["Chad"]);
    assert_eq!(trie.search("Ch").len(), 3);
}

#[test]
fn test_no_case_folding() {
    let trie: KukuiTrie = ["France"].into_iter().collect();
    assert!(trie.search("fr").is_empty());
    assert!(!trie.starts_with("f"));
    assert_eq!(trie.search("France"), vec!["France"]);
}

#[test]
fn test_duplicates_are_reported_once() {
    let mut trie = KukuiTrie::new();
    assert!(trie.insert("Peru"));
    assert!(!trie.insert("Peru"));
    trie.extend(["Peru", "Poland", "Peru"]);

    assert_eq!(trie.len(), 2);
    assert_eq!(trie.search(""), vec!["Peru", "Poland"]);
}

#[test]
fn test_names_with_spaces_and_punctuation() {
    let trie: KukuiTrie = [
        "South Africa",
        "South Korea",
        "South Georgia",
        "Saint Kitts and Nevis",
        "Guinea-Bissau",
    ]
    .into_iter()
    .collect();

    assert_eq!(
        trie.search("South "),
        vec!["South Africa", "South Georgia", "South Korea"]
    );
    assert_eq!(trie.search("Guinea-"), vec!["Guinea-Bissau"]);
    assert!(trie.search("South  ").is_empty());
}

#[test]
fn test_node_structure() {
    let trie: KukuiTrie = ["ab", "a"].into_iter().collect();
    let root: &TrieNode = trie.root();

    assert!(!root.is_terminal());
    let a = root.child('a').expect("edge for 'a'");
    assert!(a.is_terminal());
    let b = a.child('b').expect("edge for 'b'");
    assert!(b.is_terminal());
    assert!(b.is_leaf());
    assert_eq!(root.children().count(), 1);
}

#[test]
fn test_search_on_partially_populated_trie() {
    let mut trie = KukuiTrie::new();
    trie.insert("Mali");
    assert_eq!(trie.search("M"), vec!["Mali"]);

    trie.insert("Malta");
    trie.insert("Malawi");
    assert_eq!(trie.search("Mal"), vec!["Malawi", "Mali", "Malta"]);
}
