//! Phrase processor: compile once, match per document

use std::collections::BTreeMap;
use std::sync::Arc;

use strewn_core::{group_matches, scan_document, GapFilter, MatchGroup, TokenSource};

use crate::analyzer::PhraseAnalyzer;
use crate::compiler::{AugmentFn, CompiledPatterns, PatternCompiler, PhraseLexicon};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};

/// Immutable matcher state shared across documents
///
/// All fields are read-only after construction, so concurrent
/// [`match_document`](PhraseProcessor::match_document) calls from multiple
/// threads need no locking; every call allocates its own scan state.
#[derive(Debug)]
pub struct PhraseProcessor {
    compiled: CompiledPatterns,
    filter: GapFilter,
}

impl PhraseProcessor {
    /// Start building a processor
    pub fn builder() -> PhraseProcessorBuilder {
        PhraseProcessorBuilder::new()
    }

    /// Number of distinct compiled patterns
    pub fn pattern_count(&self) -> usize {
        self.compiled.table.len()
    }

    /// The compiled pattern state
    pub fn compiled(&self) -> &CompiledPatterns {
        &self.compiled
    }

    /// Match one document and return labeled span groups keyed by their
    /// stable match identifier
    pub fn match_document<D: TokenSource + ?Sized>(
        &self,
        doc: &D,
    ) -> Result<BTreeMap<String, MatchGroup>> {
        let matches = scan_document(&self.compiled.table, &self.filter, doc)?;
        Ok(group_matches(&matches, &self.compiled.map))
    }
}

/// Builder for [`PhraseProcessor`]
pub struct PhraseProcessorBuilder {
    lexicon: PhraseLexicon,
    analyzer: Option<Arc<dyn PhraseAnalyzer>>,
    augment: Option<AugmentFn>,
    config: EngineConfig,
}

impl std::fmt::Debug for PhraseProcessorBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhraseProcessorBuilder")
            .field("labels", &self.lexicon.len())
            .field("analyzer", &self.analyzer.is_some())
            .field("augment", &self.augment.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl PhraseProcessorBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            lexicon: PhraseLexicon::new(),
            analyzer: None,
            augment: None,
            config: EngineConfig::default(),
        }
    }

    /// Replace the phrase lexicon
    pub fn lexicon(mut self, lexicon: PhraseLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Register phrases under one label
    pub fn phrases<I, S>(mut self, label: &str, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lexicon
            .entry(label.to_string())
            .or_default()
            .extend(phrases.into_iter().map(Into::into));
        self
    }

    /// Set the normalization analyzer (required)
    pub fn analyzer(mut self, analyzer: Arc<dyn PhraseAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Attach the augmentation hook
    pub fn augment(mut self, augment: AugmentFn) -> Self {
        self.augment = Some(augment);
        self
    }

    /// Bound the token window
    pub fn max_space(mut self, max_space: Option<usize>) -> Self {
        self.config.max_space = max_space;
        self
    }

    /// Normalization fan-out hint
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.threads = threads;
        self
    }

    /// Compile the lexicon and build the processor
    pub fn build(self) -> Result<PhraseProcessor> {
        self.config.validate()?;

        let analyzer = self
            .analyzer
            .ok_or_else(|| EngineError::Config("analyzer is required".to_string()))?;

        let mut compiler = PatternCompiler::new(self.config.clone())?;
        if let Some(augment) = self.augment {
            compiler = compiler.with_augment(augment);
        }

        let compiled = compiler.compile(&self.lexicon, analyzer.as_ref())?;
        let filter = GapFilter::new(self.config.max_space)?;

        Ok(PhraseProcessor { compiled, filter })
    }
}

impl Default for PhraseProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
