//! Pattern compilation from a phrase lexicon

use std::collections::BTreeMap;
use std::sync::Arc;

use strewn_core::{PatternMap, PatternTable, TableBuilder};
use tracing::{debug, warn};

use crate::analyzer::{AnalyzedPhrase, PhraseAnalyzer};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};

/// Label → phrase strings
///
/// Ordered keys and `Vec` values; the host serializes this mapping, so no
/// integer keys and no unordered collections.
pub type PhraseLexicon = BTreeMap<String, Vec<String>>;

/// Augmentation hook: token sequence → alternative token sequences
///
/// Must be deterministic and side-effect-free. Invoked once per original
/// phrase during compilation, never at match time.
pub type AugmentFn =
    Arc<dyn Fn(&[String]) -> std::result::Result<Vec<Vec<String>>, String> + Send + Sync>;

/// Immutable result of compilation, shared read-only across matching calls
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    /// Deduplicated pattern table with its first-token index
    pub table: PatternTable,
    /// Labels per pattern
    pub map: PatternMap,
}

/// Compiles a phrase lexicon into the immutable pattern table
pub struct PatternCompiler {
    config: EngineConfig,
    augment: Option<AugmentFn>,
}

impl PatternCompiler {
    /// Create a compiler
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            augment: None,
        })
    }

    /// Attach an augmentation hook
    pub fn with_augment(mut self, augment: AugmentFn) -> Self {
        self.augment = Some(augment);
        self
    }

    /// Compile `lexicon`, normalizing every phrase through `analyzer`
    ///
    /// Both normalization forms of every phrase (original and augmented)
    /// are registered as independent patterns for the phrase's label.
    pub fn compile(
        &self,
        lexicon: &PhraseLexicon,
        analyzer: &dyn PhraseAnalyzer,
    ) -> Result<CompiledPatterns> {
        let phrase_count: usize = lexicon.values().map(Vec::len).sum();
        debug!(
            phrases = phrase_count,
            labels = lexicon.len(),
            "compiling phrase lexicon"
        );

        let expanded = self.expand(lexicon)?;
        debug!(phrases = expanded.len(), "expanded phrase set");

        let analyzed = self.analyze_all(&expanded, analyzer);

        // table assembly is the single synchronization point
        let mut builder = TableBuilder::new();
        for (label, phrase) in analyzed {
            builder.insert(phrase.stems, &label)?;
            builder.insert(phrase.lemmas, &label)?;
        }
        let (table, map) = builder.finish();

        debug!(patterns = table.len(), "assembled pattern table");
        Ok(CompiledPatterns { table, map })
    }

    /// Tokenize the lexicon and merge in augmented alternatives, skipping
    /// blank phrases and per-label duplicates
    fn expand(&self, lexicon: &PhraseLexicon) -> Result<Vec<(String, Vec<String>)>> {
        let mut expanded: Vec<(String, Vec<String>)> = Vec::new();

        for (label, phrases) in lexicon {
            let mut registered: Vec<Vec<String>> = Vec::new();

            for phrase in phrases {
                let tokens: Vec<String> =
                    phrase.split_whitespace().map(str::to_string).collect();
                if tokens.is_empty() {
                    warn!(label = %label, "skipping empty phrase");
                    continue;
                }
                if !registered.contains(&tokens) {
                    registered.push(tokens);
                }
            }

            if let Some(augment) = &self.augment {
                let originals = registered.clone();
                for tokens in &originals {
                    let alternatives =
                        augment(tokens).map_err(|reason| EngineError::AugmentFailed {
                            phrase: tokens.join(" "),
                            reason,
                        })?;

                    for alternative in alternatives {
                        if alternative.is_empty() {
                            warn!(label = %label, "skipping empty augmented phrase");
                            continue;
                        }
                        if !registered.contains(&alternative) {
                            registered.push(alternative);
                        }
                    }
                }
            }

            expanded.extend(
                registered
                    .into_iter()
                    .map(|tokens| (label.clone(), tokens)),
            );
        }

        Ok(expanded)
    }

    /// Normalize the expanded phrases, fanning out when the `parallel`
    /// feature is enabled and more than one thread is requested
    fn analyze_all(
        &self,
        expanded: &[(String, Vec<String>)],
        analyzer: &dyn PhraseAnalyzer,
    ) -> Vec<(String, AnalyzedPhrase)> {
        #[cfg(feature = "parallel")]
        {
            let threads = self.config.effective_threads();
            if threads > 1 && expanded.len() > 1 {
                return analyze_parallel(expanded, analyzer, threads);
            }
        }

        expanded
            .iter()
            .map(|(label, tokens)| (label.clone(), analyzer.analyze(tokens)))
            .collect()
    }
}

#[cfg(feature = "parallel")]
fn analyze_parallel(
    expanded: &[(String, Vec<String>)],
    analyzer: &dyn PhraseAnalyzer,
    threads: usize,
) -> Vec<(String, AnalyzedPhrase)> {
    use rayon::prelude::*;

    let analyze = || {
        expanded
            .par_iter()
            .map(|(label, tokens)| (label.clone(), analyzer.analyze(tokens)))
            .collect()
    };

    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(analyze),
        // fall back to the global pool when a dedicated one cannot start
        Err(_) => analyze(),
    }
}
