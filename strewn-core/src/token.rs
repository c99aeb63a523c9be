//! Input boundary for the host's token stream

use std::borrow::Cow;
use std::ops::Range;

/// Normalized view of a tokenized document
///
/// Implemented by the host's document model. Tokenization, stemming, and
/// lemmatization happen outside this crate; the scanner only needs
/// positional access to the two normalization forms and the literal text of
/// token ranges (consumed by the between-text filter).
pub trait TokenSource {
    /// Number of tokens
    fn len(&self) -> usize;

    /// True when the document has no tokens
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stemmed form of the token at `index`
    fn stem(&self, index: usize) -> &str;

    /// Lemmatized form of the token at `index`
    fn lemma(&self, index: usize) -> &str;

    /// Literal text covering the half-open token range
    ///
    /// An empty range renders as the empty string.
    fn slice(&self, range: Range<usize>) -> Cow<'_, str>;
}
