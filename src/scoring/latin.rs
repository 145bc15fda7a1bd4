// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Latin-script strategy: English keyword queries against `medical_context` and tags.
//!
//! No normalizer here. The normalizer strips Latin letters, so this path works
//! on the case-folded raw fields with plain substring checks.

use super::core::{
    context_fuzzy_bonus, Scorer, FUZZY_MIN_TARGET_EXCLUSIVE, LATIN_CONTEXT_PHRASE,
    LATIN_CONTEXT_WORD, LATIN_FUZZY_THRESHOLD, LATIN_MIN_WORD_EXCLUSIVE, LATIN_TAGS_PHRASE,
    LATIN_TAGS_WORD,
};
use crate::fuzzy::similarity_above;
use crate::types::Fatwa;

/// Scores a Latin-only query.
///
/// 1. Whole-phrase containment in context (+20) and tags (+15), independently
/// 2. Per word (> 2 chars): context (+12), else tags (+10)
/// 3. Only if no word hit: fuzzy every word against every context word
///
/// A query with no word longer than two chars scores 0 outright, even if the
/// phrase itself was contained.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatinScorer;

impl Scorer for LatinScorer {
    fn score(&self, query: &str, record: &Fatwa) -> f64 {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return 0.0;
        }

        let context = record.medical_context.to_lowercase();
        let tags = record.joined_tags().to_lowercase();

        let mut score = 0.0;
        if context.contains(&query) {
            score += LATIN_CONTEXT_PHRASE;
        }
        if tags.contains(&query) {
            score += LATIN_TAGS_PHRASE;
        }

        let words: Vec<&str> = query
            .split_whitespace()
            .filter(|w| w.chars().count() > LATIN_MIN_WORD_EXCLUSIVE)
            .collect();
        if words.is_empty() {
            return 0.0;
        }

        let mut direct_hits = 0usize;
        for word in &words {
            if context.contains(word) {
                score += LATIN_CONTEXT_WORD;
                direct_hits += 1;
            } else if tags.contains(word) {
                score += LATIN_TAGS_WORD;
                direct_hits += 1;
            }
        }

        if direct_hits == 0 {
            let context_words: Vec<&str> = context
                .split(|c: char| c.is_whitespace() || matches!(c, ',' | '(' | ')' | '/' | '-'))
                .filter(|w| w.chars().count() > FUZZY_MIN_TARGET_EXCLUSIVE)
                .collect();

            // Every qualifying pair counts: no per-word cap
            for word in &words {
                for context_word in &context_words {
                    if let Some(sim) = similarity_above(word, context_word, LATIN_FUZZY_THRESHOLD) {
                        score += context_fuzzy_bonus(sim);
                    }
                }
            }
        }

        score
    }
}
