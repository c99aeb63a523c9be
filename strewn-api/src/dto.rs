//! Data Transfer Objects for the API

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ops::Range;

use strewn_core::{MatchGroup, Span, TokenSource};

use crate::error::{ApiError, Result};

/// One token of a processed document
///
/// Both normalization forms are supplied by the host pipeline; this crate
/// never derives them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Raw surface text
    pub text: String,
    /// Byte offset of the token start in the document text
    pub start: usize,
    /// Byte offset one past the token end
    pub end: usize,
    /// Stemmed form
    pub stem: String,
    /// Lemmatized form
    pub lemma: String,
}

/// A tokenized document ready for matching
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    text: String,
    tokens: Vec<Token>,
}

impl Document {
    /// Create a document from its text and tokens
    ///
    /// Token spans must be ordered, non-overlapping, and lie within the
    /// text.
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Result<Self> {
        let text = text.into();

        let mut previous_end = 0;
        for (index, token) in tokens.iter().enumerate() {
            if token.end < token.start || token.end > text.len() || token.start < previous_end {
                return Err(ApiError::Document(format!(
                    "token {index} has invalid span {}..{}",
                    token.start, token.end
                )));
            }
            previous_end = token.end;
        }

        Ok(Self { text, tokens })
    }

    /// Build a document from (surface, stem, lemma) triples, joining the
    /// surfaces with single spaces
    ///
    /// Convenience for hosts whose tokenizer does not expose offsets.
    pub fn from_tokens(parts: &[(&str, &str, &str)]) -> Self {
        let mut text = String::new();
        let mut tokens = Vec::with_capacity(parts.len());

        for (index, (surface, stem, lemma)) in parts.iter().enumerate() {
            if index > 0 {
                text.push(' ');
            }
            let start = text.len();
            text.push_str(surface);
            tokens.push(Token {
                text: surface.to_string(),
                start,
                end: text.len(),
                stem: stem.to_string(),
                lemma: lemma.to_string(),
            });
        }

        Self { text, tokens }
    }

    /// The document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The tokens in order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl TokenSource for Document {
    fn len(&self) -> usize {
        self.tokens.len()
    }

    fn stem(&self, index: usize) -> &str {
        &self.tokens[index].stem
    }

    fn lemma(&self, index: usize) -> &str {
        &self.tokens[index].lemma
    }

    fn slice(&self, range: Range<usize>) -> Cow<'_, str> {
        if range.start >= range.end {
            return Cow::Borrowed("");
        }
        let start = self.tokens[range.start].start;
        let end = self.tokens[range.end - 1].end;
        Cow::Borrowed(&self.text[start..end])
    }
}

/// Half-open token span
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanDTO {
    /// First token index covered
    pub start: usize,
    /// One past the last token index covered
    pub end: usize,
}

impl From<Span> for SpanDTO {
    fn from(span: Span) -> Self {
        Self {
            start: span.start,
            end: span.end,
        }
    }
}

/// One labeled match group
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchGroupDTO {
    /// Label from the phrase lexicon
    pub label: String,
    /// Spans covering the matched tokens
    pub spans: Vec<SpanDTO>,
}

impl From<MatchGroup> for MatchGroupDTO {
    fn from(group: MatchGroup) -> Self {
        Self {
            label: group.label,
            spans: group.spans.into_iter().map(Into::into).collect(),
        }
    }
}

/// Matching statistics
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Tokens scanned
    pub token_count: usize,
    /// Match groups produced
    pub group_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete matching output
///
/// Groups are keyed by their stable match identifier
/// (`match:<label>:<dot-joined positions>`); the ordered map mirrors the
/// host's serialization constraints.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Match groups keyed by their stable identifier
    pub groups: BTreeMap<String, MatchGroupDTO>,
    /// Matching statistics
    pub metadata: Metadata,
}
