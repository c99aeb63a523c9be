//! Pattern table construction and lookup

use std::collections::{BTreeSet, HashMap};

use crate::error::{CoreError, Result};

/// Stable index of a pattern in its table
pub type PatternId = usize;

/// An ordered, immutable sequence of normalized token strings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    tokens: Vec<String>,
}

impl Pattern {
    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the pattern has no tokens (never the case inside a table)
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token expected at `index`
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// First token, the base-bucket key
    pub fn first(&self) -> &str {
        &self.tokens[0]
    }

    /// All tokens in order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Deduplicated, immutable pattern table with a first-token index
///
/// Built once by [`TableBuilder`], then shared read-only across concurrent
/// scans.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    patterns: Vec<Pattern>,
    heads: HashMap<String, Vec<PatternId>>,
}

impl PatternTable {
    /// Number of distinct patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when the table holds no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Look up a pattern by id
    pub fn get(&self, id: PatternId) -> Result<&Pattern> {
        self.patterns.get(id).ok_or(CoreError::UnknownPattern(id))
    }

    /// Ids of patterns whose first token equals `form`
    pub fn heads(&self, form: &str) -> &[PatternId] {
        self.heads.get(form).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over all patterns with their ids
    pub fn iter(&self) -> impl Iterator<Item = (PatternId, &Pattern)> {
        self.patterns.iter().enumerate()
    }
}

/// Labels per pattern id
///
/// A pattern carries every label whose phrases normalized to it; two
/// distinct phrases may collapse onto one pattern.
#[derive(Debug, Clone, Default)]
pub struct PatternMap {
    labels: Vec<BTreeSet<String>>,
}

impl PatternMap {
    /// Labels that produced the pattern
    pub fn labels(&self, id: PatternId) -> Option<&BTreeSet<String>> {
        self.labels.get(id)
    }
}

/// Accumulates normalized token sequences and produces the immutable table
#[derive(Debug, Default)]
pub struct TableBuilder {
    index: HashMap<Vec<String>, PatternId>,
    patterns: Vec<Pattern>,
    labels: Vec<BTreeSet<String>>,
}

impl TableBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one normalized token sequence for `label`
    ///
    /// Sequences are deduplicated by structural equality; re-registering an
    /// existing sequence only adds the label.
    pub fn insert(&mut self, tokens: Vec<String>, label: &str) -> Result<PatternId> {
        if tokens.is_empty() {
            return Err(CoreError::EmptyPattern {
                label: label.to_string(),
            });
        }

        let id = match self.index.get(&tokens) {
            Some(&id) => id,
            None => {
                let id = self.patterns.len();
                self.index.insert(tokens.clone(), id);
                self.patterns.push(Pattern { tokens });
                self.labels.push(BTreeSet::new());
                id
            }
        };

        self.labels[id].insert(label.to_string());
        Ok(id)
    }

    /// Number of distinct sequences registered so far
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Finish into the immutable table and its label map
    pub fn finish(self) -> (PatternTable, PatternMap) {
        let mut heads: HashMap<String, Vec<PatternId>> = HashMap::new();
        for (id, pattern) in self.patterns.iter().enumerate() {
            heads
                .entry(pattern.first().to_string())
                .or_default()
                .push(id);
        }

        (
            PatternTable {
                patterns: self.patterns,
                heads,
            },
            PatternMap {
                labels: self.labels,
            },
        )
    }
}
