//! Public API for strewn scattered phrase matching
//!
//! Detects occurrences of multi-word phrases whose words may appear
//! non-contiguously within a bounded token window, rather than only as
//! contiguous substrings. The phrase lexicon is compiled once; matching a
//! document is a single pass over its token stream.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Document, MatchGroupDTO, Metadata, Output, SpanDTO, Token};
pub use error::{ApiError, Result};
pub use strewn_engine::{AnalyzedPhrase, AugmentFn, PhraseAnalyzer, PhraseLexicon};

/// Main entry point for scattered phrase matching
///
/// Compiles the phrase lexicon at construction; afterwards only immutable
/// state is shared, so one matcher serves concurrent
/// [`match_document`](PhraseMatcher::match_document) calls without locking.
pub struct PhraseMatcher {
    inner: Arc<strewn_engine::PhraseProcessor>,
    config: Config,
}

impl PhraseMatcher {
    /// Create a matcher from a configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let mut builder = strewn_engine::PhraseProcessor::builder()
            .lexicon(config.lexicon.clone())
            .analyzer(config.analyzer.clone())
            .max_space(config.max_space)
            .threads(config.threads);

        if let Some(augment) = config.augment.clone() {
            builder = builder.augment(augment);
        }

        let inner = builder.build()?;
        Ok(Self {
            inner: Arc::new(inner),
            config,
        })
    }

    /// Match one document and return labeled span groups with metadata
    pub fn match_document(&self, doc: &Document) -> Result<Output> {
        let start = Instant::now();

        let groups = self.inner.match_document(doc)?;
        let groups: BTreeMap<String, MatchGroupDTO> = groups
            .into_iter()
            .map(|(key, group)| (key, group.into()))
            .collect();

        let metadata = Metadata {
            token_count: doc.tokens().len(),
            group_count: groups.len(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Ok(Output { groups, metadata })
    }

    /// Number of distinct compiled patterns
    pub fn pattern_count(&self) -> usize {
        self.inner.pattern_count()
    }

    /// The configuration the matcher was built from
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Match a single document with a one-off matcher
pub fn match_document(config: Config, doc: &Document) -> Result<Output> {
    PhraseMatcher::with_config(config)?.match_document(doc)
}
