//! Span grouping of completed matches

use std::collections::{BTreeMap, HashSet};

use crate::partial::PartialMatch;
use crate::pattern::PatternMap;

/// Half-open token-index range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// First token index covered
    pub start: usize,
    /// One past the last token index covered
    pub end: usize,
}

impl Span {
    /// Create a span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// One labeled occurrence: the spans covering its matched tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    /// Label from the phrase lexicon
    pub label: String,
    /// Maximal contiguous runs of the matched positions
    pub spans: Vec<Span>,
}

/// Coalesce strictly increasing positions into maximal contiguous runs
///
/// `[1, 2, 3, 6, 8, 9]` becomes `[(1, 4), (6, 7), (8, 10)]`.
pub fn spanify(positions: &[usize]) -> Vec<Span> {
    let mut spans = Vec::new();

    let mut i = 0;
    while i < positions.len() {
        let mut j = i;
        while j + 1 < positions.len() && positions[j + 1] == positions[j] + 1 {
            j += 1;
        }
        spans.push(Span::new(positions[i], positions[j] + 1));
        i = j + 1;
    }

    spans
}

/// Turn completed matches into labeled span groups
///
/// Groups are keyed by `match:<label>:<dot-joined positions>`. Grouping is
/// idempotent: identical keys collapse to one entry, while distinct labels
/// sharing a position signature yield distinct keys and are both retained.
pub fn group_matches(
    matches: &HashSet<PartialMatch>,
    map: &PatternMap,
) -> BTreeMap<String, MatchGroup> {
    let mut groups = BTreeMap::new();

    for partial in matches {
        let spans = spanify(&partial.positions);
        let dotted = partial
            .positions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");

        for label in map.labels(partial.pattern).into_iter().flatten() {
            let key = format!("match:{label}:{dotted}");
            groups.insert(
                key,
                MatchGroup {
                    label: label.clone(),
                    spans: spans.clone(),
                },
            );
        }
    }

    groups
}
