//! Streaming partial-match scanner
//!
//! Single pass over the token stream; each position is visited once per
//! normalization form. Partial matches are bucketed by the token string
//! their pattern expects next, so per-step work follows the number of live
//! partials rather than the number of compiled patterns.

use std::collections::{HashMap, HashSet};

use crate::error::{CoreError, Result};
use crate::gap::GapFilter;
use crate::partial::PartialMatch;
use crate::pattern::PatternTable;
use crate::token::TokenSource;

/// Per-document scan state
///
/// Created fresh for every document; the table and filter it borrows are
/// immutable and safely shared across concurrent scans.
pub struct PhraseScanner<'a, D: TokenSource + ?Sized> {
    table: &'a PatternTable,
    filter: &'a GapFilter,
    doc: &'a D,
    active: HashMap<&'a str, Vec<PartialMatch>>,
    matches: HashSet<PartialMatch>,
}

impl<'a, D: TokenSource + ?Sized> PhraseScanner<'a, D> {
    /// Create a scanner over `doc`
    pub fn new(table: &'a PatternTable, filter: &'a GapFilter, doc: &'a D) -> Self {
        Self {
            table,
            filter,
            doc,
            active: HashMap::new(),
            matches: HashSet::new(),
        }
    }

    /// Process the token at `pos`
    ///
    /// One sub-step for the stem form and one for the lemma form, both
    /// feeding the same running state; a match started via one form may be
    /// completed via the other.
    pub fn step(&mut self, pos: usize) -> Result<()> {
        let doc = self.doc;
        self.substep(pos, doc.stem(pos))?;
        self.substep(pos, doc.lemma(pos))
    }

    /// Consume the scanner and return the completed matches
    pub fn finish(self) -> HashSet<PartialMatch> {
        self.matches
    }

    fn substep(&mut self, pos: usize, form: &str) -> Result<()> {
        let table = self.table;
        let filter = self.filter;
        let doc = self.doc;

        let mut next: HashMap<&'a str, Vec<PartialMatch>> =
            HashMap::with_capacity(self.active.len() + 1);

        // consume base patterns starting at this form plus the partials
        // expecting it
        let seeds = table.heads(form).iter().map(|&id| PartialMatch::seed(id));
        let looked_up = self.active.remove(form).unwrap_or_default();

        for candidate in seeds.chain(looked_up) {
            if let Some(last) = candidate.last() {
                if last == pos {
                    // already extended here in the stem sub-step; one token
                    // cannot fill two pattern slots, so keep waiting for a
                    // later occurrence instead
                    if let Some(expected) =
                        table.get(candidate.pattern)?.token(candidate.matched())
                    {
                        next.entry(expected).or_default().push(candidate);
                    }
                    continue;
                }
                if last > pos {
                    return Err(CoreError::NonMonotonic {
                        pattern: candidate.pattern,
                        position: pos,
                    });
                }
            }

            let extended = candidate.advanced(pos);
            if !filter.retain(doc, &extended) {
                continue;
            }

            let pattern = table.get(extended.pattern)?;
            if extended.matched() == pattern.len() {
                self.matches.insert(extended);
            } else if let Some(expected) = pattern.token(extended.matched()) {
                next.entry(expected).or_default().push(extended);
            }
        }

        // carry forward partials whose expected token did not appear, as
        // long as their window can still close
        for (expected, partials) in self.active.drain() {
            for partial in partials {
                let keep = match partial.first() {
                    Some(first) => filter.window_open(first, pos),
                    None => true,
                };
                if keep {
                    next.entry(expected).or_default().push(partial);
                }
            }
        }

        self.active = next;
        Ok(())
    }
}

/// Run a full scan over `doc` and return the completed matches
pub fn scan_document<D: TokenSource + ?Sized>(
    table: &PatternTable,
    filter: &GapFilter,
    doc: &D,
) -> Result<HashSet<PartialMatch>> {
    let mut scanner = PhraseScanner::new(table, filter, doc);
    for pos in 0..doc.len() {
        scanner.step(pos)?;
    }
    Ok(scanner.finish())
}
