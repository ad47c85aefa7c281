//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::checker::{CheckerStats, FileMisspelling, SpellChecker};
use crate::error::Result;
use crate::suggest::Suggestion;

/// Maximum suggestions shown per line in human file-check output.
const FILE_SUGGESTION_LIMIT: usize = 3;

/// Result structure for a single-word check.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordCheckResult {
    pub word: String,
    pub correct: bool,
    pub suggestions: Vec<Suggestion>,
}

/// One misspelling in a checked file, with its suggested corrections.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileCheckEntry {
    pub word: String,
    pub line: usize,
    pub column: usize,
    pub suggestions: Vec<String>,
}

/// Result structure for a file check.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileCheckReport {
    pub errors: usize,
    pub misspellings: Vec<FileCheckEntry>,
}

/// Serialize a result value to stdout as JSON.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}

/// Build a serializable report for a checked file, resolving suggestions
/// for each misspelling.
pub fn file_check_report(
    misspellings: &[FileMisspelling],
    checker: &mut SpellChecker,
) -> FileCheckReport {
    let entries: Vec<FileCheckEntry> = misspellings
        .iter()
        .map(|misspelling| FileCheckEntry {
            word: misspelling.word.clone(),
            line: misspelling.line,
            column: misspelling.column,
            suggestions: checker
                .suggestions(&misspelling.word)
                .into_iter()
                .map(|s| s.word)
                .collect(),
        })
        .collect();

    FileCheckReport {
        errors: entries.len(),
        misspellings: entries,
    }
}

/// Print a misspelled word with its suggestions.
pub fn print_suggestions(word: &str, suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("Word: \"{word}\" - No suggestions found.");
    } else {
        let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        println!("Word: \"{word}\" - Suggestions: {}", words.join(", "));
    }
}

/// Print the result of checking a file, with up to three suggestions per
/// misspelling.
pub fn print_file_results(misspellings: &[FileMisspelling], checker: &mut SpellChecker) {
    if misspellings.is_empty() {
        println!("No spelling errors found!");
        return;
    }

    println!("Found {} spelling error(s):\n", misspellings.len());

    for misspelling in misspellings {
        print!(
            "Line {:>4}, Column {:>3}: \"{}\"",
            misspelling.line, misspelling.column, misspelling.word
        );

        let suggestions = checker.suggestions(&misspelling.word);
        if !suggestions.is_empty() {
            let words: Vec<&str> = suggestions
                .iter()
                .take(FILE_SUGGESTION_LIMIT)
                .map(|s| s.word.as_str())
                .collect();
            print!(" -> {}", words.join(", "));
        }
        println!();
    }
}

/// Print dictionary statistics.
pub fn print_stats(stats: &CheckerStats) {
    println!("Dictionary Statistics:");
    println!("  Words: {}", stats.words);
    println!("  Memory usage: {} KB", stats.memory_bytes / 1024);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::SpellChecker;

    #[test]
    fn test_file_check_report_resolves_suggestions() {
        let mut checker = SpellChecker::new().unwrap();
        checker.add_word("hello");

        let misspellings = vec![FileMisspelling {
            word: "helo".to_string(),
            line: 2,
            column: 7,
        }];

        let report = file_check_report(&misspellings, &mut checker);
        assert_eq!(report.errors, 1);
        assert_eq!(report.misspellings[0].word, "helo");
        assert_eq!(report.misspellings[0].line, 2);
        assert_eq!(report.misspellings[0].column, 7);
        assert_eq!(report.misspellings[0].suggestions, vec!["hello"]);
    }

    #[test]
    fn test_word_check_result_serializes() {
        let result = WordCheckResult {
            word: "teh".to_string(),
            correct: false,
            suggestions: vec![Suggestion::new("the".to_string(), 0.7, 2, 100)],
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"word\":\"teh\""));
        assert!(json.contains("\"correct\":false"));
        assert!(json.contains("\"the\""));
    }
}
