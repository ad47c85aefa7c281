//! Command line argument parsing for the Lexis CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Lexis - a fast spell checker with ranked suggestions
#[derive(Parser, Debug, Clone)]
#[command(name = "lexis")]
#[command(about = "A fast spell checker with ranked suggestions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Lexis Contributors")]
#[command(long_about = None)]
pub struct LexisArgs {
    /// Dictionary file to load
    #[arg(
        short = 'd',
        long = "dictionary",
        value_name = "PATH",
        default_value = "dictionaries/en_US.dict"
    )]
    pub dictionary: PathBuf,

    /// Check a single word
    #[arg(short = 'w', long = "word", value_name = "WORD")]
    pub word: Option<String>,

    /// Interactive mode for spell checking
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Enable case-sensitive checking
    #[arg(short = 'c', long = "case-sensitive")]
    pub case_sensitive: bool,

    /// Ignore numbers (default: on)
    #[arg(long = "ignore-numbers")]
    pub ignore_numbers: bool,

    /// Ignore URLs (default: on)
    #[arg(long = "ignore-urls")]
    pub ignore_urls: bool,

    /// Maximum number of suggestions
    #[arg(
        short = 's',
        long = "suggestions",
        value_name = "N",
        default_value_t = 10
    )]
    pub suggestions: usize,

    /// Add a word to the dictionary
    #[arg(short = 'a', long = "add", value_name = "WORD")]
    pub add: Option<String>,

    /// Remove a word from the dictionary
    #[arg(short = 'r', long = "remove", value_name = "WORD")]
    pub remove: Option<String>,

    /// Show dictionary statistics
    #[arg(long)]
    pub stats: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// File to check
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Output formats for CLI results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

impl LexisArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}
