//! Command implementations for the Lexis CLI.

use std::io::{self, BufRead, Write};

use clap::CommandFactory;

use crate::checker::{CheckerConfig, SpellChecker};
use crate::cli::args::{LexisArgs, OutputFormat};
use crate::cli::output::{
    WordCheckResult, file_check_report, print_file_results, print_json, print_stats,
    print_suggestions,
};
use crate::error::Result;

/// Execute the CLI request described by the parsed arguments.
pub fn execute_command(args: LexisArgs) -> Result<()> {
    let mut config = CheckerConfig {
        case_sensitive: args.case_sensitive,
        max_suggestions: args.suggestions,
        ..CheckerConfig::default()
    };
    config.suggestion.max_suggestions = args.suggestions;
    if args.ignore_numbers {
        config.ignore_numbers = true;
    }
    if args.ignore_urls {
        config.ignore_urls = true;
    }

    let mut checker = SpellChecker::with_config(config)?;

    if checker.load_dictionary(&args.dictionary) {
        // Keep stdout parseable in JSON mode
        if args.verbosity() > 0 && args.output_format == OutputFormat::Human {
            println!(
                "Loaded dictionary with {} words",
                checker.stats().words
            );
        }
    } else {
        eprintln!("Dictionary file not found: {}", args.dictionary.display());
    }

    // Dictionary mutations apply before any checking action
    if let Some(word) = &args.add {
        checker.add_word(word);
        println!("Added \"{word}\" to dictionary.");
    }

    if let Some(word) = &args.remove {
        checker.remove_word(word);
        println!("Removed \"{word}\" from dictionary.");
    }

    if args.stats {
        let stats = checker.stats();
        match args.output_format {
            OutputFormat::Json => print_json(&stats, args.pretty)?,
            OutputFormat::Human => print_stats(&stats),
        }
        return Ok(());
    }

    if let Some(word) = &args.word {
        match args.output_format {
            OutputFormat::Json => {
                let correct = checker.is_correct(word);
                let suggestions = if correct {
                    Vec::new()
                } else {
                    checker.suggestions(word)
                };
                let result = WordCheckResult {
                    word: word.clone(),
                    correct,
                    suggestions,
                };
                print_json(&result, args.pretty)?;
            }
            OutputFormat::Human => check_single_word(&mut checker, word),
        }
        return Ok(());
    }

    if args.interactive {
        return interactive_mode(&mut checker);
    }

    if let Some(file) = &args.file {
        let misspellings = checker.check_file(file);
        match args.output_format {
            OutputFormat::Json => {
                let report = file_check_report(&misspellings, &mut checker);
                print_json(&report, args.pretty)?;
            }
            OutputFormat::Human => print_file_results(&misspellings, &mut checker),
        }
        return Ok(());
    }

    // No action requested; show usage
    if args.add.is_none() && args.remove.is_none() {
        LexisArgs::command().print_help()?;
    }

    Ok(())
}

/// Check one word and print the verdict or its suggestions.
fn check_single_word(checker: &mut SpellChecker, word: &str) {
    if checker.is_correct(word) {
        println!("\"{word}\" is spelled correctly.");
    } else {
        let suggestions = checker.suggestions(word);
        print_suggestions(word, &suggestions);
    }
}

/// Run the interactive spell-checking loop.
///
/// A failed command never exits the loop; the prompt simply returns.
fn interactive_mode(checker: &mut SpellChecker) -> Result<()> {
    println!("Interactive Spell Checker");
    println!("Enter words to check (type 'quit' to exit, 'help' for commands):");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "quit" | "exit" => break,
            "add" => {
                println!("Usage: add <word>");
                continue;
            }
            "remove" => {
                println!("Usage: remove <word>");
                continue;
            }
            "help" => {
                println!("Commands:");
                println!("  <word>        Check spelling of word");
                println!("  add <word>    Add word to dictionary");
                println!("  remove <word> Remove word from dictionary");
                println!("  stats         Show dictionary statistics");
                println!("  quit/exit     Exit interactive mode");
                continue;
            }
            "stats" => {
                let stats = checker.stats();
                println!(
                    "Dictionary contains {} words, using {} KB of memory.",
                    stats.words,
                    stats.memory_bytes / 1024
                );
                continue;
            }
            _ => {}
        }

        if let Some(word) = input.strip_prefix("add ") {
            let word = word.trim();
            if !word.is_empty() {
                checker.add_word(word);
                println!("Added \"{word}\" to dictionary.");
            }
        } else if let Some(word) = input.strip_prefix("remove ") {
            let word = word.trim();
            if !word.is_empty() {
                checker.remove_word(word);
                println!("Removed \"{word}\" from dictionary.");
            }
        } else {
            check_single_word(checker, input);
        }
    }

    Ok(())
}
