//! The reference word set for spell checking.
//!
//! A [`Lexicon`] maintains the stored words behind three cooperating
//! structures: a canonical word-to-frequency map (which doubles as the
//! exact-membership set), an ordered prefix trie, and phonetic buckets
//! keyed by [`phonetic_code`]. Every mutation keeps them in agreement.

pub mod phonetic;
pub mod trie;

// Re-export commonly used types
pub use phonetic::phonetic_code;
pub use trie::Trie;

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::mem;
use std::path::Path;

use ahash::AHashMap;
use log::warn;

/// The reference word set with per-word frequencies.
///
/// Stored words are lowercase, non-empty, and contain only ASCII letters
/// and apostrophes. Frequencies default to 1 and rank higher-frequency
/// words first in prefix enumeration and suggestions.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Canonical storage: word -> frequency. Membership checks and word
    /// counts read this map directly.
    words: AHashMap<String, u32>,
    /// Prefix index over the same word set.
    trie: Trie,
    /// Phonetic code -> words sharing that code. Each word appears in
    /// exactly one bucket: its own code's.
    phonetic_buckets: AHashMap<String, Vec<String>>,
}

impl Lexicon {
    /// Create a new empty lexicon.
    pub fn new() -> Self {
        Lexicon {
            words: AHashMap::new(),
            trie: Trie::new(),
            phonetic_buckets: AHashMap::new(),
        }
    }

    /// Load the lexicon from a dictionary file, replacing any current
    /// contents.
    ///
    /// Each non-empty line is either `word` or `word:frequency`; whitespace
    /// is stripped before parsing and malformed lines are skipped with a
    /// warning. Returns `false` only if the file cannot be opened.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => return false,
        };

        self.clear();

        let reader = BufReader::new(file);
        for (line_number, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("stopped reading {} at line {}: {e}", path.display(), line_number + 1);
                    break;
                }
            };

            let entry: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            if entry.is_empty() {
                continue;
            }

            let (word, frequency) = match entry.split_once(':') {
                Some((word, freq)) => match freq.parse::<u32>() {
                    Ok(frequency) => (word, frequency),
                    Err(_) => {
                        warn!(
                            "skipping malformed dictionary line {} in {}: {entry:?}",
                            line_number + 1,
                            path.display()
                        );
                        continue;
                    }
                },
                None => (entry.as_str(), 1),
            };

            if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic() || c == '\'') {
                warn!(
                    "skipping malformed dictionary line {} in {}: {entry:?}",
                    line_number + 1,
                    path.display()
                );
                continue;
            }

            self.add_word_with_frequency(word, frequency);
        }

        true
    }

    /// Save the lexicon to a dictionary file as one `word:frequency` entry
    /// per line.
    ///
    /// Returns `false` on any write failure.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> bool {
        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(_) => return false,
        };

        for (word, frequency) in &self.words {
            if writeln!(file, "{word}:{frequency}").is_err() {
                return false;
            }
        }

        true
    }

    /// Add a word with frequency 1.
    pub fn add_word(&mut self, word: &str) {
        self.add_word_with_frequency(word, 1);
    }

    /// Add a word with the given frequency, normalizing it to lowercase.
    ///
    /// Re-adding an existing word updates its frequency without duplicating
    /// its phonetic-bucket entry.
    pub fn add_word_with_frequency(&mut self, word: &str, frequency: u32) {
        if word.is_empty() {
            return;
        }

        let normalized = word.to_lowercase();
        let is_new = !self.words.contains_key(&normalized);

        self.words.insert(normalized.clone(), frequency);
        self.trie.insert(&normalized, frequency);

        if is_new {
            let code = phonetic_code(&normalized);
            self.phonetic_buckets.entry(code).or_default().push(normalized);
        }
    }

    /// Remove a word, returning `true` if it was present.
    ///
    /// The word's trie path is left in place; only its terminal marker is
    /// cleared. Empty phonetic buckets are dropped.
    pub fn remove_word(&mut self, word: &str) -> bool {
        let normalized = word.to_lowercase();

        if self.words.remove(&normalized).is_none() {
            return false;
        }

        self.trie.remove(&normalized);

        let code = phonetic_code(&normalized);
        if let Some(bucket) = self.phonetic_buckets.get_mut(&code) {
            bucket.retain(|entry| *entry != normalized);
            if bucket.is_empty() {
                self.phonetic_buckets.remove(&code);
            }
        }

        true
    }

    /// Check whether a word is in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Get the frequency of a word, or 0 if it is not stored.
    pub fn frequency(&self, word: &str) -> u32 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Get up to `max` words sharing the given prefix, ordered by
    /// descending frequency with lexicographic tie-breaks.
    pub fn words_with_prefix(&self, prefix: &str, max: usize) -> Vec<String> {
        let normalized = prefix.to_lowercase();

        let mut matches = self.trie.words_with_prefix(&normalized, max);
        // The trie yields lexicographic order, so a stable sort keeps ties
        // deterministic.
        matches.sort_by(|a, b| b.1.cmp(&a.1));

        matches.into_iter().map(|(word, _)| word).collect()
    }

    /// Get the words sharing the given word's phonetic code.
    ///
    /// The word itself does not need to be stored; its code is computed
    /// and the matching bucket returned (possibly empty).
    pub fn phonetic_matches(&self, word: &str) -> Vec<String> {
        let code = phonetic_code(&word.to_lowercase());

        self.phonetic_buckets.get(&code).cloned().unwrap_or_default()
    }

    /// Get every stored word.
    pub fn all_words(&self) -> Vec<String> {
        self.words.keys().cloned().collect()
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Remove every stored word.
    pub fn clear(&mut self) {
        self.words.clear();
        self.trie.clear();
        self.phonetic_buckets.clear();
    }

    /// Estimate the memory held by the lexicon's structures, in bytes.
    ///
    /// String contents and container entries are counted; allocator and
    /// hash-table overhead are not.
    pub fn approximate_memory_usage(&self) -> usize {
        let mut bytes = mem::size_of::<Self>();

        for word in self.words.keys() {
            bytes += word.len() + mem::size_of::<String>() + mem::size_of::<u32>();
        }

        for (code, bucket) in &self.phonetic_buckets {
            bytes += code.len() + mem::size_of::<String>();
            for word in bucket {
                bytes += word.len() + mem::size_of::<String>();
            }
        }

        // Rough per-node footprint for the trie arena
        bytes += self.trie.node_count() * 64;

        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_basic_operations() {
        let mut lexicon = Lexicon::new();

        assert!(!lexicon.contains("hello"));
        assert_eq!(lexicon.frequency("hello"), 0);
        assert!(lexicon.is_empty());

        lexicon.add_word_with_frequency("hello", 5);
        assert!(lexicon.contains("hello"));
        assert_eq!(lexicon.frequency("hello"), 5);
        assert_eq!(lexicon.len(), 1);

        lexicon.add_word("world");
        assert_eq!(lexicon.frequency("world"), 1);
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn test_case_insensitive_storage() {
        let mut lexicon = Lexicon::new();

        lexicon.add_word("Hello");
        assert!(lexicon.contains("hello"));
        assert!(lexicon.contains("HELLO"));
        assert!(lexicon.all_words().contains(&"hello".to_string()));
    }

    #[test]
    fn test_re_add_updates_frequency_without_growing() {
        let mut lexicon = Lexicon::new();

        lexicon.add_word_with_frequency("hello", 5);
        lexicon.add_word_with_frequency("hello", 9);

        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.frequency("hello"), 9);
        // The phonetic bucket must not gain a duplicate entry
        assert_eq!(lexicon.phonetic_matches("hello"), vec!["hello"]);
    }

    #[test]
    fn test_remove_word() {
        let mut lexicon = Lexicon::new();

        lexicon.add_word("hello");
        assert!(lexicon.remove_word("hello"));
        assert!(!lexicon.contains("hello"));
        assert_eq!(lexicon.frequency("hello"), 0);
        assert_eq!(lexicon.len(), 0);
        assert!(lexicon.phonetic_matches("hello").is_empty());

        assert!(!lexicon.remove_word("hello"));
        assert!(!lexicon.remove_word("never"));
    }

    #[test]
    fn test_removed_words_do_not_surface_through_prefix() {
        let mut lexicon = Lexicon::new();

        lexicon.add_word("team");
        lexicon.add_word("tea");
        lexicon.remove_word("tea");

        assert_eq!(lexicon.words_with_prefix("te", 10), vec!["team"]);
    }

    #[test]
    fn test_words_with_prefix_orders_by_frequency() {
        let mut lexicon = Lexicon::new();

        lexicon.add_word_with_frequency("tea", 5);
        lexicon.add_word_with_frequency("ten", 10);
        lexicon.add_word_with_frequency("the", 100);
        lexicon.add_word_with_frequency("test", 2);

        assert_eq!(lexicon.words_with_prefix("te", 5), vec!["ten", "tea", "test"]);
        assert_eq!(lexicon.words_with_prefix("te", 2).len(), 2);
        assert!(lexicon.words_with_prefix("zz", 5).is_empty());
    }

    #[test]
    fn test_words_with_prefix_breaks_frequency_ties_lexicographically() {
        let mut lexicon = Lexicon::new();

        lexicon.add_word_with_frequency("ten", 3);
        lexicon.add_word_with_frequency("tea", 3);
        lexicon.add_word_with_frequency("test", 3);

        assert_eq!(lexicon.words_with_prefix("te", 5), vec!["tea", "ten", "test"]);
    }

    #[test]
    fn test_phonetic_matches() {
        let mut lexicon = Lexicon::new();

        lexicon.add_word("robert");
        lexicon.add_word("rupert");

        let matches = lexicon.phonetic_matches("robert");
        assert!(matches.contains(&"robert".to_string()));
        assert!(matches.contains(&"rupert".to_string()));

        // An unstored word still resolves to its bucket
        let matches = lexicon.phonetic_matches("robbert");
        assert!(matches.contains(&"robert".to_string()));
    }

    #[test]
    fn test_clear() {
        let mut lexicon = Lexicon::new();

        lexicon.add_word("hello");
        lexicon.clear();

        assert!(lexicon.is_empty());
        assert!(!lexicon.contains("hello"));
        assert!(lexicon.words_with_prefix("he", 5).is_empty());
        assert!(lexicon.phonetic_matches("hello").is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut lexicon = Lexicon::new();
        lexicon.add_word_with_frequency("apple", 3);
        lexicon.add_word_with_frequency("banana", 1);

        let temp_file = NamedTempFile::new().unwrap();
        assert!(lexicon.save_to_file(temp_file.path()));

        let mut loaded = Lexicon::new();
        assert!(loaded.load_from_file(temp_file.path()));

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.frequency("apple"), 3);
        assert_eq!(loaded.frequency("banana"), 1);

        let mut words = loaded.all_words();
        words.sort();
        assert_eq!(words, vec!["apple", "banana"]);
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello:5").unwrap();
        writeln!(temp_file, "broken:notanumber").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "  spaced : 7 ").unwrap();
        writeln!(temp_file, "plain").unwrap();
        temp_file.flush().unwrap();

        let mut lexicon = Lexicon::new();
        assert!(lexicon.load_from_file(temp_file.path()));

        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.frequency("hello"), 5);
        assert_eq!(lexicon.frequency("spaced"), 7);
        assert_eq!(lexicon.frequency("plain"), 1);
        assert!(!lexicon.contains("broken"));
    }

    #[test]
    fn test_load_replaces_existing_contents() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "fresh").unwrap();
        temp_file.flush().unwrap();

        let mut lexicon = Lexicon::new();
        lexicon.add_word("stale");
        assert!(lexicon.load_from_file(temp_file.path()));

        assert!(lexicon.contains("fresh"));
        assert!(!lexicon.contains("stale"));
    }

    #[test]
    fn test_load_missing_file_returns_false() {
        let mut lexicon = Lexicon::new();
        lexicon.add_word("kept");

        assert!(!lexicon.load_from_file("/nonexistent/path/to.dict"));
        // A failed open must not clear the current contents
        assert!(lexicon.contains("kept"));
    }

    #[test]
    fn test_memory_usage_grows_with_contents() {
        let mut lexicon = Lexicon::new();
        let empty = lexicon.approximate_memory_usage();

        for word in ["apple", "banana", "cherry"] {
            lexicon.add_word(word);
        }

        assert!(lexicon.approximate_memory_usage() > empty);
    }
}
