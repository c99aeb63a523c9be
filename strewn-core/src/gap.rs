//! Extension predicate: token window and between-text constraints

use crate::error::{CoreError, Result};
use crate::partial::PartialMatch;
use crate::token::TokenSource;

/// Decides whether a candidate extension of a partial match is kept
///
/// Two rules apply. The window rule bounds the token distance between the
/// first matched position and the new one strictly below `max_space`; since
/// positions are strictly increasing this also bounds every consecutive
/// gap. The between-text rule inspects the literal text strictly between
/// the preceding and the new position and rejects spans that cut into
/// unbalanced punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GapFilter {
    max_space: Option<usize>,
}

impl GapFilter {
    /// Create a filter; `None` means unbounded distance (the structural
    /// between-text rule still applies)
    pub fn new(max_space: Option<usize>) -> Result<Self> {
        if max_space == Some(0) {
            return Err(CoreError::InvalidMaxSpace);
        }
        Ok(Self { max_space })
    }

    /// The configured window bound
    pub fn max_space(&self) -> Option<usize> {
        self.max_space
    }

    /// True while a partial anchored at `first` could still be legally
    /// extended at `pos` or later
    pub fn window_open(&self, first: usize, pos: usize) -> bool {
        match self.max_space {
            Some(max) => pos.saturating_sub(first) < max,
            None => true,
        }
    }

    /// Apply both rules to a freshly extended match whose last position is
    /// the candidate position
    pub fn retain<D: TokenSource + ?Sized>(&self, doc: &D, partial: &PartialMatch) -> bool {
        let (first, last) = match (partial.first(), partial.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return true,
        };

        if !self.window_open(first, last) {
            return false;
        }

        if partial.matched() > 1 {
            let prev = partial.positions[partial.matched() - 2];
            if !between_acceptable(&doc.slice(prev + 1..last)) {
                return false;
            }
        }

        true
    }
}

/// Structural acceptance of the text between two matched tokens
///
/// Line breaks always reject. Otherwise the text passes when it contains
/// none of `(` `)` `,`, or is one balanced parenthetical, or is a
/// comma-bounded aside.
fn between_acceptable(text: &str) -> bool {
    if text.contains('\n') {
        return false;
    }
    if !text.contains(['(', ')', ',']) {
        return true;
    }

    let trimmed = text.trim();
    balanced_parenthetical(trimmed) || comma_bounded(trimmed)
}

/// True when the whole of `text` is one parenthetical: the opening paren
/// closes exactly at the end
fn balanced_parenthetical(text: &str) -> bool {
    if !text.starts_with('(') || !text.ends_with(')') {
        return false;
    }

    let mut depth = 0usize;
    for (index, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
                if depth == 0 && index + 1 != text.len() {
                    return false;
                }
            }
            _ => {}
        }
    }

    depth == 0
}

/// True when `text` is bounded by a comma at each end
fn comma_bounded(text: &str) -> bool {
    text.len() >= 2 && text.starts_with(',') && text.ends_with(',')
}
