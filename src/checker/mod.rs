//! Spell checker façade coordinating the tokenizer, lexicon, and
//! suggestion engine.
//!
//! [`SpellChecker`] is the single entry point for callers: it owns the
//! lexicon and tokenizer, holds the global configuration, and constructs a
//! short-lived [`SuggestionEngine`] against the lexicon for each
//! suggestion request.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::analysis::{TokenizerConfig, WordTokenizer};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::suggest::{Suggestion, SuggestionConfig, SuggestionEngine};

/// Configuration for the spell checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Whether checks preserve case.
    pub case_sensitive: bool,
    /// Whether to skip tokens that look like numbers.
    pub ignore_numbers: bool,
    /// Whether to skip tokens that look like URLs.
    pub ignore_urls: bool,
    /// Whether to skip tokens that look like email addresses.
    pub ignore_emails: bool,
    /// Minimum token length to check.
    pub min_word_length: usize,
    /// Maximum token length to check.
    pub max_word_length: usize,
    /// Maximum number of suggestions per misspelling.
    pub max_suggestions: usize,
    /// Whether to cache suggestion results.
    pub cache_enabled: bool,
    /// Maximum number of cached suggestion entries.
    pub cache_size: usize,
    /// Suggestion generation and scoring knobs.
    pub suggestion: SuggestionConfig,
    /// File extensions considered checkable text. An empty list accepts
    /// every file.
    pub text_file_extensions: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            case_sensitive: false,
            ignore_numbers: true,
            ignore_urls: true,
            ignore_emails: true,
            min_word_length: 3,
            max_word_length: 64,
            max_suggestions: 10,
            cache_enabled: true,
            cache_size: 1000,
            suggestion: SuggestionConfig::default(),
            text_file_extensions: vec!["txt".to_string(), "md".to_string(), "text".to_string()],
        }
    }
}

impl CheckerConfig {
    fn tokenizer_config(&self) -> TokenizerConfig {
        TokenizerConfig {
            ignore_urls: self.ignore_urls,
            ignore_emails: self.ignore_emails,
            ignore_numbers: self.ignore_numbers,
            case_sensitive: self.case_sensitive,
            min_word_length: self.min_word_length,
            max_word_length: self.max_word_length,
        }
    }
}

/// A misspelled word found in a text, with its byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misspelling {
    /// The misspelled word (normalized).
    pub word: String,
    /// Byte offset of the word in the checked text.
    pub offset: usize,
}

/// A misspelled word found in a file, with its line and column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMisspelling {
    /// The misspelled word (normalized).
    pub word: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column.
    pub column: usize,
}

/// Dictionary statistics reported by [`SpellChecker::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerStats {
    /// Number of words in the lexicon.
    pub words: usize,
    /// Approximate memory held by the lexicon, in bytes.
    pub memory_bytes: usize,
}

/// Bounded suggestion cache with insertion-order eviction.
#[derive(Debug, Default)]
struct SuggestionCache {
    entries: AHashMap<String, Vec<Suggestion>>,
    order: VecDeque<String>,
}

impl SuggestionCache {
    fn get(&self, word: &str) -> Option<&Vec<Suggestion>> {
        self.entries.get(word)
    }

    fn insert(&mut self, word: String, suggestions: Vec<Suggestion>, capacity: usize) {
        if capacity == 0 {
            return;
        }

        while self.entries.len() >= capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }

        if self.entries.insert(word.clone(), suggestions).is_none() {
            self.order.push_back(word);
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

/// The spell checker façade.
pub struct SpellChecker {
    lexicon: Lexicon,
    tokenizer: WordTokenizer,
    config: CheckerConfig,
    cache: SuggestionCache,
}

impl SpellChecker {
    /// Create a new spell checker with an empty lexicon and default
    /// configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(CheckerConfig::default())
    }

    /// Create a new spell checker with a custom configuration.
    pub fn with_config(config: CheckerConfig) -> Result<Self> {
        let tokenizer = WordTokenizer::with_config(config.tokenizer_config())?;

        Ok(SpellChecker {
            lexicon: Lexicon::new(),
            tokenizer,
            config,
            cache: SuggestionCache::default(),
        })
    }

    /// Get the current configuration.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: CheckerConfig) {
        self.tokenizer.set_config(config.tokenizer_config());
        self.config = config;
        self.cache.clear();
    }

    /// Toggle case-sensitive checking.
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        let mut config = self.config.clone();
        config.case_sensitive = case_sensitive;
        self.set_config(config);
    }

    /// Toggle number ignoring.
    pub fn set_ignore_numbers(&mut self, ignore: bool) {
        let mut config = self.config.clone();
        config.ignore_numbers = ignore;
        self.set_config(config);
    }

    /// Toggle URL ignoring.
    pub fn set_ignore_urls(&mut self, ignore: bool) {
        let mut config = self.config.clone();
        config.ignore_urls = ignore;
        self.set_config(config);
    }

    /// Set the maximum number of suggestions per misspelling.
    pub fn set_max_suggestions(&mut self, max_suggestions: usize) {
        let mut config = self.config.clone();
        config.max_suggestions = max_suggestions;
        config.suggestion.max_suggestions = max_suggestions;
        self.set_config(config);
    }

    /// Load the lexicon from a dictionary file, replacing its contents.
    ///
    /// Returns `false` if the file cannot be opened.
    pub fn load_dictionary<P: AsRef<Path>>(&mut self, path: P) -> bool {
        self.cache.clear();
        self.lexicon.load_from_file(path)
    }

    /// Save the lexicon to a dictionary file.
    pub fn save_dictionary<P: AsRef<Path>>(&self, path: P) -> bool {
        self.lexicon.save_to_file(path)
    }

    /// Add a word to the lexicon.
    pub fn add_word(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        self.cache.clear();
        self.lexicon.add_word(word);
    }

    /// Remove a word from the lexicon, returning `true` if it was present.
    pub fn remove_word(&mut self, word: &str) -> bool {
        self.cache.clear();
        self.lexicon.remove_word(word)
    }

    /// Check whether a word is spelled correctly.
    ///
    /// Empty and ignorable tokens (URLs, numbers, too-short words) count
    /// as correct.
    pub fn is_correct(&self, word: &str) -> bool {
        if word.is_empty() {
            return true;
        }

        if self.tokenizer.should_ignore(word) {
            return true;
        }

        let normalized = self.tokenizer.normalize_word(word);
        let mut found = self.lexicon.contains(&normalized);

        if !found && !self.config.case_sensitive {
            found = self.lexicon.contains(&normalized.to_lowercase());
        }

        found
    }

    /// Get ranked correction suggestions for a word.
    pub fn suggestions(&mut self, word: &str) -> Vec<Suggestion> {
        if word.is_empty() {
            return Vec::new();
        }

        let normalized = self.tokenizer.normalize_word(word);
        if normalized.is_empty() {
            return Vec::new();
        }

        if self.config.cache_enabled
            && let Some(cached) = self.cache.get(&normalized)
        {
            return cached.clone();
        }

        let engine = SuggestionEngine::with_config(&self.lexicon, self.config.suggestion.clone());
        let mut suggestions = engine.suggest(&normalized);
        suggestions.truncate(self.config.max_suggestions);

        if self.config.cache_enabled {
            self.cache
                .insert(normalized, suggestions.clone(), self.config.cache_size);
        }

        suggestions
    }

    /// Check a text and return its misspellings in text order.
    pub fn check_text(&self, text: &str) -> Vec<Misspelling> {
        self.tokenizer
            .extract_words(text)
            .into_iter()
            .filter(|token| !self.is_correct(&token.text))
            .map(|token| Misspelling {
                word: token.text,
                offset: token.offset,
            })
            .collect()
    }

    /// Check a file and return its misspellings with line and column
    /// positions, in text order.
    ///
    /// An unreadable file yields an empty list and a logged warning.
    pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Vec<FileMisspelling> {
        let path = path.as_ref();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("could not read file {}: {e}", path.display());
                return Vec::new();
            }
        };

        self.tokenizer
            .extract_words_with_lines(&contents)
            .into_iter()
            .filter(|token| !self.is_correct(&token.text))
            .map(|token| FileMisspelling {
                word: token.text,
                line: token.line,
                column: token.column,
            })
            .collect()
    }

    /// Decide whether a path looks like a checkable text file based on the
    /// configured extension list.
    pub fn should_check_file<P: AsRef<Path>>(&self, path: P) -> bool {
        if self.config.text_file_extensions.is_empty() {
            return true;
        }

        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.config
                    .text_file_extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }

    /// Get lexicon statistics.
    pub fn stats(&self) -> CheckerStats {
        CheckerStats {
            words: self.lexicon.len(),
            memory_bytes: self.lexicon.approximate_memory_usage(),
        }
    }

    /// Access the underlying lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}
