//! # Lexis
//!
//! A fast spell-checking engine for Rust.
//!
//! ## Features
//!
//! - Multi-index lexicon: exact lookup, ordered prefix trie, phonetic
//!   buckets, and per-word frequencies
//! - Multi-strategy suggestion generation (edits, splits, phonetic, prefix)
//!   fused into a single ranked score
//! - Position-aware tokenization with URL/email/number filtering
//! - Dictionary persistence in a plain `word:frequency` text format

pub mod analysis;
pub mod checker;
pub mod cli;
pub mod error;
pub mod lexicon;
pub mod suggest;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
