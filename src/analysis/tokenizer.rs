//! Word tokenizer with source-position tracking and ignore rules.
//!
//! Words are maximal matches of `letter+ ( ' letter+ )?` over the input.
//! Positions are measured against the original text, before normalization.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::token::{LineToken, Token};
use crate::error::{LexisError, Result};

/// Configuration for the word tokenizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Whether to ignore tokens that look like URLs.
    pub ignore_urls: bool,
    /// Whether to ignore tokens that look like email addresses.
    pub ignore_emails: bool,
    /// Whether to ignore tokens that look like numbers.
    pub ignore_numbers: bool,
    /// Whether to preserve case during normalization.
    pub case_sensitive: bool,
    /// Minimum normalized token length; shorter tokens are ignored.
    pub min_word_length: usize,
    /// Maximum normalized token length; longer tokens are ignored.
    pub max_word_length: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            ignore_urls: true,
            ignore_emails: true,
            ignore_numbers: true,
            case_sensitive: false,
            min_word_length: 3,
            max_word_length: 64,
        }
    }
}

/// A tokenizer that extracts word tokens and their source positions from
/// raw text.
///
/// Non-ASCII bytes never match the word pattern and are simply skipped;
/// tokenization does not fail on malformed input.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    word_pattern: Regex,
    url_pattern: Regex,
    email_pattern: Regex,
    number_pattern: Regex,
    sentence_pattern: Regex,
    config: TokenizerConfig,
}

impl WordTokenizer {
    /// Create a new word tokenizer with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(TokenizerConfig::default())
    }

    /// Create a new word tokenizer with a custom configuration.
    pub fn with_config(config: TokenizerConfig) -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| LexisError::analysis(format!("Invalid regex pattern: {e}")))
        };

        Ok(WordTokenizer {
            word_pattern: compile(r"[a-zA-Z]+(?:'[a-zA-Z]+)?")?,
            url_pattern: compile(
                r"^(?:https?://\S+|www\.\S+|[a-zA-Z0-9][a-zA-Z0-9-]*\.[a-zA-Z]{2,})$",
            )?,
            email_pattern: compile(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")?,
            number_pattern: compile(r"^\d+(?:\.\d+)?$")?,
            sentence_pattern: compile(r"[.!?]+\s+")?,
            config,
        })
    }

    /// Get the current configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: TokenizerConfig) {
        self.config = config;
    }

    /// Extract word tokens with their byte offsets in the original text.
    ///
    /// Tokens failing the ignore rules are filtered out; surviving tokens
    /// are normalized.
    pub fn extract_words(&self, text: &str) -> Vec<Token> {
        self.word_pattern
            .find_iter(text)
            .filter(|mat| !self.should_ignore(mat.as_str()))
            .map(|mat| Token::new(self.normalize_word(mat.as_str()), mat.start()))
            .collect()
    }

    /// Extract word tokens with 1-based line and column positions.
    ///
    /// Tokens are emitted in text order.
    pub fn extract_words_with_lines(&self, text: &str) -> Vec<LineToken> {
        let mut tokens = Vec::new();

        let mut line_number = 1;
        let mut line_start = 0;

        for mat in self.word_pattern.find_iter(text) {
            let position = mat.start();

            // Advance past every newline at or before the match position
            while let Some(offset) = text[line_start..position].find('\n') {
                line_number += 1;
                line_start += offset + 1;
            }

            let column = position - line_start + 1;

            if !self.should_ignore(mat.as_str()) {
                tokens.push(LineToken::new(
                    self.normalize_word(mat.as_str()),
                    line_number,
                    column,
                ));
            }
        }

        tokens
    }

    /// Normalize a word: strip characters outside `[a-zA-Z']` and, unless
    /// case-sensitive mode is on, lowercase.
    pub fn normalize_word(&self, word: &str) -> String {
        let normalized: String = word
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || *c == '\'')
            .collect();

        if self.config.case_sensitive {
            normalized
        } else {
            normalized.to_lowercase()
        }
    }

    /// Decide whether a token should be skipped by the spell checker.
    ///
    /// Rules are evaluated in order: length bounds, URL, email, number,
    /// non-alphabetic residue. Any match means the token is ignored.
    pub fn should_ignore(&self, token: &str) -> bool {
        if token.is_empty() {
            return true;
        }

        let normalized_len = self.normalize_word(token).len();
        if normalized_len < self.config.min_word_length
            || normalized_len > self.config.max_word_length
        {
            return true;
        }

        if self.config.ignore_urls && self.url_pattern.is_match(token) {
            return true;
        }

        if self.config.ignore_emails && self.email_pattern.is_match(token) {
            return true;
        }

        if self.config.ignore_numbers && self.number_pattern.is_match(token) {
            return true;
        }

        // Digits and other non-letter characters survive punctuation
        // stripping; such tokens are not checkable words.
        let stripped: String = token
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '\'')
            .collect();
        stripped
            .chars()
            .any(|c| !c.is_ascii_alphabetic() && c != '\'')
    }

    /// Split text into sentences on `.`, `!`, and `?` boundaries.
    pub fn split_into_sentences(&self, text: &str) -> Vec<String> {
        self.sentence_pattern
            .split(text)
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(String::from)
            .collect()
    }

    /// Count the checkable words in the given text.
    pub fn count_words(&self, text: &str) -> usize {
        self.extract_words(text).len()
    }

    /// Count the lines in the given text.
    pub fn count_lines(&self, text: &str) -> usize {
        text.matches('\n').count() + 1
    }
}
