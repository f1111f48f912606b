//! Core domain types and pure matching logic for GameShelf.
//!
//! Everything in this crate is deterministic and free of I/O: library
//! entries and catalog candidates go in, cleaned search strings and
//! scored matches come out. The service clients and the import
//! orchestrator live in their own crates and build on these pieces.

pub mod normalize;
pub mod score;
pub mod types;

pub use normalize::{clean_title, contains_word, name_variants};
pub use score::{
    MIN_MATCH_SCORE, ScoredCandidate, best_match, score_candidate,
};
pub use types::{CatalogCandidate, EnrichedEntry, LibraryEntry, MatchResult, MatchedGame};
