//! Compilation and orchestration for scattered phrase matching
//!
//! This crate expands a phrase lexicon through the optional augmentation
//! hook, normalizes it via the host's analyzer, assembles the immutable
//! pattern table, and drives the `strewn-core` scanner per document.

#![warn(missing_docs)]

pub mod analyzer;
pub mod compiler;
pub mod config;
pub mod error;
pub mod processor;

// Re-export key types
pub use analyzer::{AnalyzedPhrase, PhraseAnalyzer};
pub use compiler::{AugmentFn, CompiledPatterns, PatternCompiler, PhraseLexicon};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use processor::{PhraseProcessor, PhraseProcessorBuilder};

// Re-export from core for convenience
pub use strewn_core::{GapFilter, MatchGroup, PatternMap, PatternTable, Span, TokenSource};
