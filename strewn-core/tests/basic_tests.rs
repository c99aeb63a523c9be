//! Basic tests for strewn-core

use std::borrow::Cow;
use std::ops::Range;

use strewn_core::*;

/// Minimal document fixture; stem and lemma are supplied per token the way
/// a host normalization pipeline would
struct TestDoc {
    tokens: Vec<(String, String, String)>, // (surface, stem, lemma)
}

impl TestDoc {
    fn of_words(words: &[&str]) -> Self {
        Self {
            tokens: words
                .iter()
                .map(|w| (w.to_string(), w.to_string(), w.to_string()))
                .collect(),
        }
    }

    fn of_forms(forms: &[(&str, &str, &str)]) -> Self {
        Self {
            tokens: forms
                .iter()
                .map(|(surface, stem, lemma)| {
                    (surface.to_string(), stem.to_string(), lemma.to_string())
                })
                .collect(),
        }
    }
}

impl TokenSource for TestDoc {
    fn len(&self) -> usize {
        self.tokens.len()
    }

    fn stem(&self, index: usize) -> &str {
        &self.tokens[index].1
    }

    fn lemma(&self, index: usize) -> &str {
        &self.tokens[index].2
    }

    fn slice(&self, range: Range<usize>) -> Cow<'_, str> {
        Cow::Owned(
            self.tokens[range]
                .iter()
                .map(|t| t.0.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

fn table_of(patterns: &[(&[&str], &str)]) -> (PatternTable, PatternMap) {
    let mut builder = TableBuilder::new();
    for (tokens, label) in patterns {
        let tokens = tokens.iter().map(|t| t.to_string()).collect();
        builder.insert(tokens, label).unwrap();
    }
    builder.finish()
}

fn unbounded() -> GapFilter {
    GapFilter::new(None).unwrap()
}

#[test]
fn test_single_token_match() {
    let (table, map) = table_of(&[(&["drucken"], "single")]);
    let doc = TestDoc::of_words(&["drucken"]);

    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    assert_eq!(matches.len(), 1);

    let groups = group_matches(&matches, &map);
    let group = &groups["match:single:0"];
    assert_eq!(group.label, "single");
    assert_eq!(group.spans, vec![Span::new(0, 1)]);
}

#[test]
fn test_scattered_triple() {
    let (table, map) = table_of(&[(&["will", "nicht", "starten"], "triple")]);
    let doc = TestDoc::of_words(&[
        "der", "motor", "will", "einfach", "nicht", "richtig", "starten",
    ]);

    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    let groups = group_matches(&matches, &map);

    assert_eq!(groups.len(), 1);
    let group = &groups["match:triple:2.4.6"];
    assert_eq!(
        group.spans,
        vec![Span::new(2, 3), Span::new(4, 5), Span::new(6, 7)]
    );
}

#[test]
fn test_contiguous_positions_coalesce() {
    let (table, map) = table_of(&[(&["druckt", "nicht"], "double")]);
    let doc = TestDoc::of_words(&["es", "druckt", "nicht"]);

    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    let groups = group_matches(&matches, &map);

    let group = &groups["match:double:1.2"];
    assert_eq!(group.spans, vec![Span::new(1, 3)]);
}

#[test]
fn test_window_exact_boundary_rejected() {
    let (table, _) = table_of(&[(&["wird", "getroffen"], "double")]);
    let filter = GapFilter::new(Some(2)).unwrap();

    // distance == max_space is rejected (exclusive bound)
    let doc = TestDoc::of_words(&["wird", "nicht", "getroffen"]);
    let matches = scan_document(&table, &filter, &doc).unwrap();
    assert!(matches.is_empty());

    // one token less fits the window
    let doc = TestDoc::of_words(&["wird", "getroffen"]);
    let matches = scan_document(&table, &filter, &doc).unwrap();
    assert_eq!(matches.len(), 1);
}

#[test]
fn test_unbounded_window_spans_far() {
    let (table, _) = table_of(&[(&["wird", "getroffen"], "double")]);
    let doc = TestDoc::of_words(&["wird", "a", "b", "c", "d", "e", "f", "getroffen"]);

    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    assert_eq!(matches.len(), 1);
}

#[test]
fn test_expired_partials_are_dropped() {
    let (table, _) = table_of(&[(&["wird", "getroffen"], "double")]);
    let filter = GapFilter::new(Some(3)).unwrap();

    let doc = TestDoc::of_words(&["wird", "x", "x", "x", "getroffen"]);
    let matches = scan_document(&table, &filter, &doc).unwrap();
    assert!(matches.is_empty());

    let doc = TestDoc::of_words(&["wird", "x", "getroffen"]);
    let matches = scan_document(&table, &filter, &doc).unwrap();
    assert_eq!(matches.len(), 1);
}

#[test]
fn test_unbalanced_paren_between_rejects() {
    let (table, _) = table_of(&[(&["wird", "getroffen"], "double")]);
    let doc = TestDoc::of_words(&["wird", "(", "fest", "getroffen"]);

    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_balanced_parenthetical_between_accepts() {
    let (table, map) = table_of(&[(&["wird", "getroffen"], "double")]);
    let doc = TestDoc::of_words(&["wird", "(", "zu", "fest", ")", "getroffen"]);

    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    let groups = group_matches(&matches, &map);
    assert!(groups.contains_key("match:double:0.5"));
}

#[test]
fn test_comma_bounded_between_accepts() {
    let (table, _) = table_of(&[(&["wird", "getroffen"], "double")]);

    let doc = TestDoc::of_words(&["wird", ",", "leider", ",", "getroffen"]);
    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    assert_eq!(matches.len(), 1);

    // a single comma cuts into a list
    let doc = TestDoc::of_words(&["wird", "leider", ",", "getroffen"]);
    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_line_break_between_rejects() {
    let (table, _) = table_of(&[(&["wird", "getroffen"], "double")]);
    let doc = TestDoc::of_forms(&[
        ("wird", "wird", "wird"),
        ("\n", "\n", "\n"),
        ("getroffen", "getroffen", "getroffen"),
    ]);

    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_match_started_by_stem_completed_by_lemma() {
    let (table, _) = table_of(&[(&["druck", "treffen"], "mixed")]);
    let doc = TestDoc::of_forms(&[
        ("druckt", "druck", "drucken"),
        ("getroffen", "getroff", "treffen"),
    ]);

    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    assert_eq!(matches.len(), 1);
    let partial = matches.iter().next().unwrap();
    assert_eq!(partial.positions.as_slice(), &[0, 1]);
}

#[test]
fn test_no_same_position_double_extension() {
    // stem and lemma coincide; one token must not satisfy two pattern slots
    let (table, _) = table_of(&[(&["gleich", "gleich"], "twice")]);

    let doc = TestDoc::of_words(&["gleich"]);
    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    assert!(matches.is_empty());

    let doc = TestDoc::of_words(&["gleich", "gleich"]);
    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    assert_eq!(matches.len(), 1);
}

#[test]
fn test_partial_survives_lemma_collision() {
    // the second token's lemma equals the token the partial expects next;
    // the partial must not be consumed by that sub-step
    let (table, _) = table_of(&[(&["x", "y", "z"], "triple")]);
    let doc = TestDoc::of_forms(&[("x", "x", "x"), ("y", "y", "z"), ("z", "z", "z")]);

    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches.iter().next().unwrap().positions.as_slice(),
        &[0, 1, 2]
    );
}

#[test]
fn test_each_head_occurrence_seeds_a_match() {
    let (table, map) = table_of(&[(&["kurz", "danach"], "pair")]);
    let doc = TestDoc::of_words(&["kurz", "kurz", "danach"]);

    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    let groups = group_matches(&matches, &map);

    assert!(groups.contains_key("match:pair:0.2"));
    assert!(groups.contains_key("match:pair:1.2"));
}

#[test]
fn test_empty_stream_yields_empty_result() {
    let (table, map) = table_of(&[(&["drucken"], "single")]);
    let doc = TestDoc::of_words(&[]);

    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    assert!(matches.is_empty());
    assert!(group_matches(&matches, &map).is_empty());
}

#[test]
fn test_shared_signature_keeps_both_labels() {
    let (table, map) = table_of(&[
        (&["geht", "kaputt"], "defect"),
        (&["geht", "kaputt"], "damage"),
    ]);
    assert_eq!(table.len(), 1);

    let doc = TestDoc::of_words(&["geht", "kaputt"]);
    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    let groups = group_matches(&matches, &map);

    assert_eq!(groups.len(), 2);
    assert!(groups.contains_key("match:defect:0.1"));
    assert!(groups.contains_key("match:damage:0.1"));
}

#[test]
fn test_grouping_is_idempotent() {
    let (table, map) = table_of(&[(&["will", "nicht", "starten"], "triple")]);
    let doc = TestDoc::of_words(&["will", "x", "nicht", "starten"]);

    let matches = scan_document(&table, &unbounded(), &doc).unwrap();
    let first = group_matches(&matches, &map);
    let second = group_matches(&matches, &map);
    assert_eq!(first, second);
}
