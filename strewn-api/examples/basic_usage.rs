//! Basic usage example for the 3-crate architecture

use std::sync::Arc;

use strewn_api::{AnalyzedPhrase, Config, Document, PhraseAnalyzer, PhraseMatcher};

/// Toy analyzer: the stem strips a trailing "en" or "t", the lemma is the
/// lowercased surface. Real hosts plug in their stemmer and lemmatizer.
struct ToyAnalyzer;

fn stem_of(token: &str) -> String {
    token
        .strip_suffix("en")
        .or_else(|| token.strip_suffix('t'))
        .unwrap_or(token)
        .to_string()
}

impl PhraseAnalyzer for ToyAnalyzer {
    fn analyze(&self, tokens: &[String]) -> AnalyzedPhrase {
        let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        AnalyzedPhrase {
            stems: lower.iter().map(|t| stem_of(t)).collect(),
            lemmas: lower,
        }
    }
}

fn toy_doc(text: &str) -> Document {
    let parts: Vec<(String, String)> = text
        .split_whitespace()
        .map(|w| (w.to_lowercase(), stem_of(&w.to_lowercase())))
        .collect();
    let parts: Vec<(&str, &str, &str)> = text
        .split_whitespace()
        .zip(parts.iter())
        .map(|(surface, (lower, stem))| (surface, stem.as_str(), lower.as_str()))
        .collect();
    Document::from_tokens(&parts)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: scattered matching with an unbounded window
    println!("=== Method 1: Scattered Matching ===");
    let config = Config::builder()
        .phrases("no-start", ["will nicht starten"])
        .phrases("no-print", ["druckt nicht"])
        .analyzer(Arc::new(ToyAnalyzer))
        .build()?;
    let matcher = PhraseMatcher::with_config(config)?;

    let doc = toy_doc("der motor will einfach nicht richtig starten");
    let output = matcher.match_document(&doc)?;

    println!("Found {} match group(s):", output.groups.len());
    for (key, group) in &output.groups {
        println!("  {key} ({} span(s), label {})", group.spans.len(), group.label);
        for span in &group.spans {
            println!("    tokens {}..{}", span.start, span.end);
        }
    }
    println!("Processing took {}ms\n", output.metadata.processing_time_ms);

    // Method 2: bounding the token window
    println!("=== Method 2: max_space ===");
    let config = Config::builder()
        .phrases("hit", ["wird getroffen"])
        .analyzer(Arc::new(ToyAnalyzer))
        .max_space(2)
        .build()?;
    let matcher = PhraseMatcher::with_config(config)?;

    for text in ["das wird getroffen", "das wird nicht getroffen"] {
        let output = matcher.match_document(&toy_doc(text))?;
        println!("'{text}' -> {} group(s)", output.groups.len());
    }

    // Method 3: augmenting the lexicon with alternatives
    println!("\n=== Method 3: Augmentation ===");
    let config = Config::builder()
        .phrases("no-print", ["druckt nicht"])
        .analyzer(Arc::new(ToyAnalyzer))
        .augment(Arc::new(|tokens: &[String]| {
            // also accept the reversed word order
            let mut reversed = tokens.to_vec();
            reversed.reverse();
            Ok(vec![reversed])
        }))
        .build()?;
    let matcher = PhraseMatcher::with_config(config)?;

    let output = matcher.match_document(&toy_doc("nicht jede seite druckt"))?;
    println!("Augmented lexicon found {} group(s)", output.groups.len());

    Ok(())
}
