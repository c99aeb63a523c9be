//! Core algorithm for scattered phrase matching
//!
//! Phrases whose words appear non-contiguously in a text are tracked by a
//! streaming partial-match scanner: patterns are bucketed by the token they
//! expect next, so one pass over the token stream finds all occurrences with
//! per-step cost following the number of live partial matches rather than
//! the size of the pattern table.

#![warn(missing_docs)]

pub mod error;
pub mod gap;
pub mod group;
pub mod partial;
pub mod pattern;
pub mod scan;
pub mod token;

// Re-export key types
pub use error::{CoreError, Result};
pub use gap::GapFilter;
pub use group::{group_matches, spanify, MatchGroup, Span};
pub use partial::{PartialMatch, Positions};
pub use pattern::{Pattern, PatternId, PatternMap, PatternTable, TableBuilder};
pub use scan::{scan_document, PhraseScanner};
pub use token::TokenSource;
