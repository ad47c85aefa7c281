//! Arena-backed prefix trie for ordered word enumeration.

use std::collections::BTreeMap;

/// Index of a node in the trie arena.
type NodeId = u32;

const ROOT: NodeId = 0;

/// A single trie node. Children are kept ordered by character so that
/// enumeration is deterministic.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, NodeId>,
    is_word: bool,
    frequency: u32,
}

/// A rooted prefix tree whose nodes live in a flat arena.
///
/// Nodes reference their children by arena index instead of owning
/// pointers, which makes bulk clearing and memory accounting trivial.
/// Removing a word unmarks its terminal node but leaves the path in place.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    /// Create a new empty trie.
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Insert a word with the given frequency.
    ///
    /// Re-inserting an existing word updates the frequency stored on its
    /// terminal node.
    pub fn insert(&mut self, word: &str, frequency: u32) {
        let mut current = ROOT;

        for c in word.chars() {
            current = match self.nodes[current as usize].children.get(&c) {
                Some(&child) => child,
                None => {
                    let id = self.nodes.len() as NodeId;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current as usize].children.insert(c, id);
                    id
                }
            };
        }

        let node = &mut self.nodes[current as usize];
        node.is_word = true;
        node.frequency = frequency;
    }

    /// Unmark a word's terminal node, leaving the prefix path in place.
    ///
    /// Returns `true` if the word was present.
    pub fn remove(&mut self, word: &str) -> bool {
        match self.find(word) {
            Some(id) if self.nodes[id as usize].is_word => {
                let node = &mut self.nodes[id as usize];
                node.is_word = false;
                node.frequency = 0;
                true
            }
            _ => false,
        }
    }

    /// Check whether the trie contains the given word.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word)
            .map(|id| self.nodes[id as usize].is_word)
            .unwrap_or(false)
    }

    /// Collect up to `max` stored words sharing `prefix`, paired with their
    /// frequencies, in lexicographic order.
    ///
    /// Returns an empty list when the prefix path does not exist.
    pub fn words_with_prefix(&self, prefix: &str, max: usize) -> Vec<(String, u32)> {
        let mut results = Vec::new();

        let start = match self.find(prefix) {
            Some(id) => id,
            None => return results,
        };

        let mut word = String::from(prefix);
        self.collect_words(start, &mut word, &mut results, max);
        results
    }

    /// Number of nodes in the arena, including the root and any dead paths.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Drop every node and start over with an empty root.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(TrieNode::default());
    }

    /// Walk the trie along `path`, returning the final node if every
    /// character is present.
    fn find(&self, path: &str) -> Option<NodeId> {
        let mut current = ROOT;

        for c in path.chars() {
            current = *self.nodes[current as usize].children.get(&c)?;
        }

        Some(current)
    }

    fn collect_words(
        &self,
        node: NodeId,
        word: &mut String,
        results: &mut Vec<(String, u32)>,
        max: usize,
    ) {
        if results.len() >= max {
            return;
        }

        let node = &self.nodes[node as usize];
        if node.is_word {
            results.push((word.clone(), node.frequency));
        }

        for (&c, &child) in &node.children {
            word.push(c);
            self.collect_words(child, word, results, max);
            word.pop();
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut trie = Trie::new();

        trie.insert("tea", 5);
        trie.insert("ten", 10);

        assert!(trie.contains("tea"));
        assert!(trie.contains("ten"));
        assert!(!trie.contains("te"));
        assert!(!trie.contains("team"));
    }

    #[test]
    fn test_reinsert_updates_frequency() {
        let mut trie = Trie::new();

        trie.insert("tea", 5);
        trie.insert("tea", 50);

        let results = trie.words_with_prefix("tea", 10);
        assert_eq!(results, vec![("tea".to_string(), 50)]);
    }

    #[test]
    fn test_remove_unmarks_but_keeps_path() {
        let mut trie = Trie::new();

        trie.insert("tea", 5);
        trie.insert("team", 2);
        let nodes_before = trie.node_count();

        assert!(trie.remove("tea"));
        assert!(!trie.contains("tea"));
        assert!(trie.contains("team"));
        assert_eq!(trie.node_count(), nodes_before);

        // A non-terminal node is not removable
        assert!(!trie.remove("te"));
        assert!(!trie.remove("missing"));
    }

    #[test]
    fn test_words_with_prefix_is_lexicographic() {
        let mut trie = Trie::new();

        trie.insert("ten", 10);
        trie.insert("tea", 5);
        trie.insert("test", 2);
        trie.insert("the", 100);

        let words: Vec<String> = trie
            .words_with_prefix("te", 10)
            .into_iter()
            .map(|(word, _)| word)
            .collect();
        assert_eq!(words, vec!["tea", "ten", "test"]);
    }

    #[test]
    fn test_words_with_prefix_respects_max() {
        let mut trie = Trie::new();

        for word in ["apple", "apply", "appear", "append"] {
            trie.insert(word, 1);
        }

        assert_eq!(trie.words_with_prefix("app", 2).len(), 2);
        assert!(trie.words_with_prefix("banana", 10).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut trie = Trie::new();

        trie.insert("hello", 1);
        trie.clear();

        assert!(!trie.contains("hello"));
        assert_eq!(trie.node_count(), 1);
    }
}
