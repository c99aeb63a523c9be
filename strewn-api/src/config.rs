//! High-level configuration API

use std::sync::Arc;

use strewn_engine::{AugmentFn, PhraseAnalyzer, PhraseLexicon};

use crate::error::{ApiError, Result};

/// High-level matcher configuration
#[derive(Clone)]
pub struct Config {
    pub(crate) lexicon: PhraseLexicon,
    pub(crate) analyzer: Arc<dyn PhraseAnalyzer>,
    pub(crate) augment: Option<AugmentFn>,
    pub(crate) max_space: Option<usize>,
    pub(crate) threads: Option<usize>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("labels", &self.lexicon.len())
            .field("max_space", &self.max_space)
            .field("threads", &self.threads)
            .field("augment", &self.augment.is_some())
            .finish()
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured window bound
    pub fn max_space(&self) -> Option<usize> {
        self.max_space
    }
}

/// Configuration builder
#[derive(Default)]
pub struct ConfigBuilder {
    lexicon: PhraseLexicon,
    analyzer: Option<Arc<dyn PhraseAnalyzer>>,
    augment: Option<AugmentFn>,
    max_space: Option<usize>,
    threads: Option<usize>,
}

impl std::fmt::Debug for ConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigBuilder")
            .field("labels", &self.lexicon.len())
            .field("analyzer", &self.analyzer.is_some())
            .field("max_space", &self.max_space)
            .finish()
    }
}

impl ConfigBuilder {
    /// Replace the phrase lexicon
    pub fn lexicon(mut self, lexicon: PhraseLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Register phrases under one label
    pub fn phrases<I, S>(mut self, label: impl Into<String>, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lexicon
            .entry(label.into())
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
    pub fn max_space(mut self, max_space: usize) -> Self {
        self.max_space = Some(max_space);
        self
    }

    /// Normalization fan-out hint for compilation
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<Config> {
        // labels are host serialization keys: non-empty, non-numeric
        for label in self.lexicon.keys() {
            if label.is_empty() {
                return Err(ApiError::Config("label must not be empty".to_string()));
            }
            if label.chars().all(|ch| ch.is_ascii_digit()) {
                return Err(ApiError::Config(format!(
                    "label '{label}' must not be numeric"
                )));
            }
        }

        if self.max_space == Some(0) {
            return Err(ApiError::Config("max_space must be positive".to_string()));
        }

        let analyzer = self
            .analyzer
            .ok_or_else(|| ApiError::Config("analyzer is required".to_string()))?;

        Ok(Config {
            lexicon: self.lexicon,
            analyzer,
            augment: self.augment,
            max_space: self.max_space,
            threads: self.threads,
        })
    }
}
