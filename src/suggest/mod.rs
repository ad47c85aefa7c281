//! Spelling suggestion system for Lexis.
//!
//! Given a misspelled word, the [`SuggestionEngine`] combines several
//! candidate-generation strategies (single edits, word splits, phonetic
//! buckets, shared prefixes) and ranks the surviving candidates with a
//! fused score built from edit distance, corpus frequency, length
//! similarity, and common prefix length.

pub mod distance;
pub mod engine;
pub mod keyboard;

// Re-export commonly used types
pub use distance::*;
pub use engine::*;
pub use keyboard::*;
