//! # Category Matcher
//!
//! Maps free text to the closest catalog entry with a positional score: the input
//! and each key are walked in lockstep, and every index where the characters agree
//! adds `100 / len(key)`. The highest score wins, earliest entry on ties. There is
//! no "no match": when nothing scores, the first entry is returned.

use crate::domain::types::{Catalog, CatalogEntry};

/// Score of `input` against `key`, in `[0, 100]`.
pub fn positional_score(input: &str, key: &str) -> f64 {
    let key_len = key.chars().count();
    if key_len == 0 {
        return 0.0;
    }
    let step = 100.0 / key_len as f64;
    input
        .chars()
        .zip(key.chars())
        .filter(|(a, b)| a == b)
        .fold(0.0, |score, _| score + step)
}

/// The best entry for `input`. `input` must already be stripped of the command
/// prefix and of whitespace.
pub fn best_match<'a>(input: &str, catalog: &'a Catalog) -> &'a CatalogEntry {
    let entries = catalog.entries();
    let mut best = &entries[0];
    let mut best_score = positional_score(input, &best.name);

    for entry in &entries[1..] {
        let score = positional_score(input, &entry.name);
        if score > best_score {
            best = entry;
            best_score = score;
        }
    }

    tracing::debug!("Matched '{}' to '{}' ({:.2})", input, best.name, best_score);
    best
}

/// Convenience wrapper returning just the provider code.
pub fn match_code<'a>(input: &str, catalog: &'a Catalog) -> &'a str {
    &best_match(input, catalog).code
}
