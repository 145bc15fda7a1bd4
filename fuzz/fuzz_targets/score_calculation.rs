// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite, non-negative, and deterministic. The selector must
//! respect its threshold and cap for any query against any record.

#![no_main]

use arbitrary::Arbitrary;
use faqih::testing::make_full_fatwa;
use faqih::{rank, score, Dataset, FatwaRanker, SearchConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ScoreInput {
    query: String,
    title: String,
    medical_context: String,
    ruling: String,
    tags: Vec<String>,
}

fn cap(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fuzz_target!(|input: ScoreInput| {
    let query = cap(&input.query, 200);
    let tags: Vec<String> = input.tags.iter().take(8).map(|t| cap(t, 40)).collect();
    let tag_refs: Vec<&str> = tags.iter().map(String::as_str).collect();
    let record = make_full_fatwa(
        "fuzz",
        &cap(&input.title, 200),
        "",
        &cap(&input.medical_context, 200),
        &cap(&input.ruling, 1000),
        &tag_refs,
    );

    let first = score(&query, &record);
    let second = score(&query, &record);
    assert!(first.is_finite(), "non-finite score {} for {:?}", first, query);
    assert!(first >= 0.0, "negative score {} for {:?}", first, query);
    assert_eq!(first, second, "score changed between runs for {:?}", query);

    // Selector against the bundled records
    static DATASET: std::sync::OnceLock<Option<Dataset>> = std::sync::OnceLock::new();
    let Some(dataset) = DATASET.get_or_init(|| Dataset::builtin().ok()) else {
        return;
    };
    let config = SearchConfig::default();
    let results = rank(&query, dataset.as_slice(), &FatwaRanker::new(), &config);
    assert!(results.len() <= config.max_results);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "results out of order for {:?}", query);
    }
    for result in &results {
        assert!(result.score > config.min_score);
    }
});
