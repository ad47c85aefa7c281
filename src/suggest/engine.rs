//! Suggestion generation and ranking.

use std::cmp::Ordering;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::suggest::distance::{levenshtein, levenshtein_within};

/// Per-length cap on prefix-derived candidates.
const PREFIX_MATCH_LIMIT: usize = 20;

/// Shortest prefix length tried by the prefix generator.
const MIN_PREFIX_LENGTH: usize = 3;

/// A spelling suggestion with the signals that ranked it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Fused ranking score (higher is better).
    pub score: f64,
    /// Levenshtein distance from the original word.
    pub distance: usize,
    /// Frequency of the suggested word in the lexicon.
    pub frequency: u32,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, score: f64, distance: usize, frequency: u32) -> Self {
        Suggestion {
            word,
            score,
            distance,
            frequency,
        }
    }
}

/// Configuration for suggestion generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Edit-distance cap for [`SuggestionEngine::edit_distance_suggestions`].
    /// The combined generation path considers every single-edit candidate
    /// regardless of this value, and phonetic or prefix candidates may lie
    /// further away still.
    pub max_edit_distance: usize,
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Weight of the edit-distance signal.
    pub edit_distance_weight: f64,
    /// Weight of the corpus-frequency signal.
    pub frequency_weight: f64,
    /// Weight reserved for phonetic-equivalence scoring.
    pub phonetic_weight: f64,
    /// Weight of the shared-prefix signal.
    pub prefix_weight: f64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_edit_distance: 2,
            max_suggestions: 10,
            edit_distance_weight: 1.0,
            frequency_weight: 0.5,
            phonetic_weight: 0.3,
            prefix_weight: 0.2,
        }
    }
}

/// Generates ranked corrections for a misspelled word.
///
/// The engine borrows the lexicon read-only for the duration of a call;
/// callers construct one per suggestion request and drop it before the
/// next lexicon mutation.
pub struct SuggestionEngine<'a> {
    lexicon: &'a Lexicon,
    config: SuggestionConfig,
}

impl<'a> SuggestionEngine<'a> {
    /// Create a new engine over the given lexicon with default
    /// configuration.
    pub fn new(lexicon: &'a Lexicon) -> Self {
        SuggestionEngine {
            lexicon,
            config: SuggestionConfig::default(),
        }
    }

    /// Create a new engine with a custom configuration.
    pub fn with_config(lexicon: &'a Lexicon, config: SuggestionConfig) -> Self {
        SuggestionEngine { lexicon, config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Generate up to `max_suggestions` ranked corrections for a word.
    ///
    /// An empty word yields an empty result.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        if word.is_empty() {
            return Vec::new();
        }

        let candidates = self.generate_candidates(word);
        self.rank(word, candidates)
    }

    /// Suggest dictionary words within `max_distance` edits of `word`,
    /// ordered by distance then frequency.
    ///
    /// Unlike [`suggest`](Self::suggest), this scans the whole lexicon and
    /// honors the distance cap strictly.
    pub fn edit_distance_suggestions(&self, word: &str, max_distance: usize) -> Vec<String> {
        if word.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(String, usize, u32)> = Vec::new();

        for dict_word in self.lexicon.all_words() {
            if let Some(distance) = levenshtein_within(word, &dict_word, max_distance) {
                let frequency = self.lexicon.frequency(&dict_word);
                matches.push((dict_word, distance, frequency));
            }
        }

        matches.sort_by(|a, b| {
            a.1.cmp(&b.1)
                .then_with(|| b.2.cmp(&a.2))
                .then_with(|| a.0.cmp(&b.0))
        });
        matches.truncate(self.config.max_suggestions);

        matches.into_iter().map(|(word, _, _)| word).collect()
    }

    /// Build the deduplicated candidate pool, preserving first-insertion
    /// order for deterministic tie-breaking later.
    fn generate_candidates(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();

        let mut pool = Vec::new();
        let mut seen = AHashSet::new();

        // Edit-based candidates survive only when the lexicon knows them
        let edit_based = [
            self.deletion_candidates(&chars),
            self.insertion_candidates(&chars),
            self.substitution_candidates(&chars),
            self.transposition_candidates(&chars),
            self.split_candidates(&chars),
        ];

        for generated in edit_based {
            for candidate in generated {
                if self.lexicon.contains(&candidate) && seen.insert(candidate.clone()) {
                    pool.push(candidate);
                }
            }
        }

        // Phonetic and prefix candidates are already lexicon words
        for candidate in self.lexicon.phonetic_matches(word) {
            if seen.insert(candidate.clone()) {
                pool.push(candidate);
            }
        }

        for candidate in self.prefix_candidates(&chars) {
            if seen.insert(candidate.clone()) {
                pool.push(candidate);
            }
        }

        pool
    }

    /// One candidate per removed character.
    fn deletion_candidates(&self, chars: &[char]) -> Vec<String> {
        (0..chars.len())
            .map(|i| {
                let mut candidate = chars.to_vec();
                candidate.remove(i);
                candidate.into_iter().collect()
            })
            .collect()
    }

    /// One candidate per position and alphabet letter.
    fn insertion_candidates(&self, chars: &[char]) -> Vec<String> {
        let mut candidates = Vec::new();

        for i in 0..=chars.len() {
            for c in 'a'..='z' {
                let mut candidate = chars.to_vec();
                candidate.insert(i, c);
                candidates.push(candidate.into_iter().collect());
            }
        }

        candidates
    }

    /// One candidate per position and differing alphabet letter.
    fn substitution_candidates(&self, chars: &[char]) -> Vec<String> {
        let mut candidates = Vec::new();

        for i in 0..chars.len() {
            for c in 'a'..='z' {
                if c != chars[i] {
                    let mut candidate = chars.to_vec();
                    candidate[i] = c;
                    candidates.push(candidate.into_iter().collect());
                }
            }
        }

        candidates
    }

    /// One candidate per adjacent pair swap.
    fn transposition_candidates(&self, chars: &[char]) -> Vec<String> {
        (0..chars.len().saturating_sub(1))
            .map(|i| {
                let mut candidate = chars.to_vec();
                candidate.swap(i, i + 1);
                candidate.into_iter().collect()
            })
            .collect()
    }

    /// Two-word splits whose halves are both stored words.
    fn split_candidates(&self, chars: &[char]) -> Vec<String> {
        let mut candidates = Vec::new();

        for i in 1..chars.len() {
            let first: String = chars[..i].iter().collect();
            let second: String = chars[i..].iter().collect();

            if self.lexicon.contains(&first) && self.lexicon.contains(&second) {
                candidates.push(format!("{first} {second}"));
            }
        }

        candidates
    }

    /// Lexicon words sharing a prefix of the input, tried at every prefix
    /// length from three characters up to the whole word.
    fn prefix_candidates(&self, chars: &[char]) -> Vec<String> {
        let mut candidates = Vec::new();

        for len in chars.len().min(MIN_PREFIX_LENGTH)..=chars.len() {
            let prefix: String = chars[..len].iter().collect();
            candidates.extend(self.lexicon.words_with_prefix(&prefix, PREFIX_MATCH_LIMIT));
        }

        candidates
    }

    /// Score candidates and return the best, preserving pool order on
    /// ties via a stable sort.
    fn rank(&self, word: &str, candidates: Vec<String>) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = candidates
            .into_iter()
            .map(|candidate| {
                let distance = levenshtein(word, &candidate);
                let frequency = self.lexicon.frequency(&candidate);
                let score = self.score(word, &candidate, distance, frequency);
                Suggestion::new(candidate, score, distance, frequency)
            })
            .collect();

        suggestions.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        suggestions.truncate(self.config.max_suggestions);
        suggestions
    }

    /// Fused suggestion score: edit distance, log frequency, length
    /// similarity, and shared prefix, each weighted.
    fn score(&self, original: &str, candidate: &str, distance: usize, frequency: u32) -> f64 {
        let original_len = original.chars().count();
        let candidate_len = candidate.chars().count();

        let edit_score = 1.0 / (1.0 + distance as f64);
        let frequency_score = (1.0 + f64::from(frequency)).ln() / 10.0;
        let length_ratio =
            original_len.min(candidate_len) as f64 / original_len.max(candidate_len) as f64;

        let common_prefix = original
            .chars()
            .zip(candidate.chars())
            .take_while(|(a, b)| a == b)
            .count();
        let prefix_score = common_prefix as f64 / original_len as f64;

        self.config.edit_distance_weight * edit_score
            + self.config.frequency_weight * frequency_score
            + 0.1 * length_ratio
            + self.config.prefix_weight * prefix_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lexicon() -> Lexicon {
        let mut lexicon = Lexicon::new();
        lexicon.add_word_with_frequency("the", 100);
        lexicon.add_word_with_frequency("tea", 5);
        lexicon.add_word_with_frequency("ten", 10);
        lexicon
    }

    #[test]
    fn test_suggest_finds_single_edit_corrections() {
        let lexicon = sample_lexicon();
        let engine = SuggestionEngine::new(&lexicon);

        let suggestions = engine.suggest("teh");
        let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();

        assert!(words.contains(&"the"));
        assert!(words.contains(&"tea"));
        assert!(words.contains(&"ten"));
    }

    #[test]
    fn test_suggest_finds_deletion_correction() {
        let mut lexicon = Lexicon::new();
        lexicon.add_word("hello");
        let engine = SuggestionEngine::new(&lexicon);

        let suggestions = engine.suggest("helllo");
        assert!(suggestions.iter().any(|s| s.word == "hello"));
    }

    #[test]
    fn test_suggest_empty_word() {
        let lexicon = sample_lexicon();
        let engine = SuggestionEngine::new(&lexicon);

        assert!(engine.suggest("").is_empty());
    }

    #[test]
    fn test_suggest_respects_max_suggestions() {
        let mut lexicon = Lexicon::new();
        for word in [
            "cat", "car", "can", "cap", "cab", "cot", "cut", "bat", "hat", "mat", "rat", "sat",
        ] {
            lexicon.add_word(word);
        }

        let config = SuggestionConfig {
            max_suggestions: 3,
            ..Default::default()
        };
        let engine = SuggestionEngine::with_config(&lexicon, config);

        let suggestions = engine.suggest("cax");
        assert!(suggestions.len() <= 3);
    }

    #[test]
    fn test_every_suggestion_is_a_lexicon_word() {
        let lexicon = sample_lexicon();
        let engine = SuggestionEngine::new(&lexicon);

        for suggestion in engine.suggest("teh") {
            assert!(lexicon.contains(&suggestion.word));
        }
    }

    #[test]
    fn test_phonetic_candidates_ignore_edit_distance() {
        let mut lexicon = Lexicon::new();
        lexicon.add_word("robert");
        lexicon.add_word("rupert");
        let engine = SuggestionEngine::new(&lexicon);

        // "rupert" is three edits away and only reachable through the
        // shared phonetic bucket
        let suggestions = engine.suggest("roberd");
        let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();

        assert!(words.contains(&"robert"));
        assert!(words.contains(&"rupert"));
    }

    #[test]
    fn test_higher_frequency_wins_at_equal_distance() {
        let mut lexicon = Lexicon::new();
        lexicon.add_word_with_frequency("tea", 5);
        lexicon.add_word_with_frequency("ten", 10);
        let engine = SuggestionEngine::new(&lexicon);

        // Both are one substitution from "teb"
        let suggestions = engine.suggest("teb");
        assert_eq!(suggestions[0].word, "ten");
        assert_eq!(suggestions[1].word, "tea");
    }

    #[test]
    fn test_split_candidates_require_both_halves() {
        let mut lexicon = Lexicon::new();
        lexicon.add_word("note");
        lexicon.add_word("book");
        let engine = SuggestionEngine::new(&lexicon);

        let chars: Vec<char> = "notebook".chars().collect();
        assert_eq!(engine.split_candidates(&chars), vec!["note book"]);

        let chars: Vec<char> = "notepad".chars().collect();
        assert!(engine.split_candidates(&chars).is_empty());
    }

    #[test]
    fn test_generated_edits_cover_all_strategies() {
        let lexicon = sample_lexicon();
        let engine = SuggestionEngine::new(&lexicon);
        let chars: Vec<char> = "cat".chars().collect();

        let deletions = engine.deletion_candidates(&chars);
        assert_eq!(deletions, vec!["at", "ct", "ca"]);

        let insertions = engine.insertion_candidates(&chars);
        assert_eq!(insertions.len(), 26 * 4);
        assert!(insertions.contains(&"cart".to_string()));

        let substitutions = engine.substitution_candidates(&chars);
        assert_eq!(substitutions.len(), 25 * 3);
        assert!(substitutions.contains(&"bat".to_string()));
        assert!(!substitutions.contains(&"cat".to_string()));

        let transpositions = engine.transposition_candidates(&chars);
        assert_eq!(transpositions, vec!["act", "cta"]);
    }

    #[test]
    fn test_edit_distance_suggestions() {
        let mut lexicon = Lexicon::new();
        lexicon.add_word_with_frequency("cat", 5);
        lexicon.add_word_with_frequency("cart", 3);
        lexicon.add_word_with_frequency("dog", 1);
        let engine = SuggestionEngine::new(&lexicon);

        let suggestions = engine.edit_distance_suggestions("cat", 1);
        assert_eq!(suggestions, vec!["cat", "cart"]);

        let suggestions = engine.edit_distance_suggestions("cat", 0);
        assert_eq!(suggestions, vec!["cat"]);

        assert!(engine.edit_distance_suggestions("", 2).is_empty());
    }
}
