// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring constants, the `Scorer` seam, and script dispatch.
//!
//! # Field weights
//!
//! | Path   | Signal                              | Weight           |
//! |--------|-------------------------------------|------------------|
//! | Latin  | whole query in `medical_context`    | 20               |
//! | Latin  | whole query in tags                 | 15               |
//! | Latin  | word in `medical_context`           | 12               |
//! | Latin  | word in tags                        | 10               |
//! | Latin  | fuzzy word vs context word (>0.78)  | 3 + 2·sim        |
//! | Arabic | token in `medical_context`          | 14               |
//! | Arabic | token in title                      | 11               |
//! | Arabic | token in tags                       | 9                |
//! | Arabic | token in question                   | 7                |
//! | Arabic | synonym hit                         | ½ field weight   |
//! | Arabic | fuzzy token vs context (>0.80)      | 3 + 2·sim        |
//! | Arabic | fuzzy token vs tag (>0.80)          | 2 + 1.5·sim      |
//! | Arabic | token in ruling (last resort)       | 2                |
//!
//! These are fixed heuristics. A score of 0 means no evidence at all.

use super::arabic::ArabicScorer;
use super::latin::LatinScorer;
use crate::synonyms::SynonymTable;
use crate::types::Fatwa;

// =============================================================================
// LATIN PATH
// =============================================================================

/// Whole query found in `medical_context`.
pub const LATIN_CONTEXT_PHRASE: f64 = 20.0;

/// Whole query found in joined tags.
pub const LATIN_TAGS_PHRASE: f64 = 15.0;

/// Single query word found in `medical_context`.
pub const LATIN_CONTEXT_WORD: f64 = 12.0;

/// Single query word found in joined tags.
pub const LATIN_TAGS_WORD: f64 = 10.0;

/// Latin words of this many chars or fewer are ignored.
pub const LATIN_MIN_WORD_EXCLUSIVE: usize = 2;

/// Fuzzy threshold for Latin words (strictly above).
pub const LATIN_FUZZY_THRESHOLD: f64 = 0.78;

// =============================================================================
// ARABIC PATH
// =============================================================================

/// Direct token hit in `medical_context`.
pub const ARABIC_CONTEXT_WEIGHT: f64 = 14.0;

/// Direct token hit in the title.
pub const ARABIC_TITLE_WEIGHT: f64 = 11.0;

/// Direct token hit in the tags.
pub const ARABIC_TAGS_WEIGHT: f64 = 9.0;

/// Direct token hit in the question.
pub const ARABIC_QUESTION_WEIGHT: f64 = 7.0;

/// Synonym hits count this fraction of the field weight.
pub const SYNONYM_WEIGHT_FACTOR: f64 = 0.5;

/// Query tokens shorter than this are skipped.
pub const ARABIC_MIN_TOKEN: usize = 2;

/// Fuzzy threshold for Arabic tokens (strictly above).
pub const ARABIC_FUZZY_THRESHOLD: f64 = 0.80;

/// Per-token score when only the ruling text mentions it.
pub const RULING_FALLBACK_WEIGHT: f64 = 2.0;

/// Target tokens of this many chars or fewer are ignored by the fuzzy passes
/// on both paths.
pub const FUZZY_MIN_TARGET_EXCLUSIVE: usize = 2;

/// Fuzzy bonus against a context word: `3 + 2 * similarity`.
pub fn context_fuzzy_bonus(similarity: f64) -> f64 {
    3.0 + 2.0 * similarity
}

/// Fuzzy bonus against a tag word: `2 + 1.5 * similarity`.
pub fn tag_fuzzy_bonus(similarity: f64) -> f64 {
    2.0 + 1.5 * similarity
}

// =============================================================================
// SCORER SEAM
// =============================================================================

/// Relevance of one record to one query. Higher is better, 0 is "no evidence".
///
/// Implementations must be pure: same inputs, same number, no side effects.
pub trait Scorer: Sync {
    fn score(&self, query: &str, record: &Fatwa) -> f64;
}

impl<F> Scorer for F
where
    F: Fn(&str, &Fatwa) -> f64 + Sync,
{
    fn score(&self, query: &str, record: &Fatwa) -> f64 {
        self(query, record)
    }
}

/// Which scoring path a query takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryScript {
    /// Only ASCII letters and whitespace after trimming and lowercasing.
    Latin,
    /// Everything else: Arabic, digits, punctuation, mixed scripts, empty.
    Arabic,
}

impl QueryScript {
    pub fn classify(query: &str) -> QueryScript {
        let lowered = query.trim().to_lowercase();
        let latin_only = !lowered.is_empty()
            && lowered
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_whitespace());
        if latin_only {
            QueryScript::Latin
        } else {
            QueryScript::Arabic
        }
    }
}

/// The default ranker: classifies the query and hands it to one strategy.
#[derive(Debug, Clone, Copy)]
pub struct FatwaRanker {
    latin: LatinScorer,
    arabic: ArabicScorer<'static>,
}

impl FatwaRanker {
    /// Ranker with synonym expansion on the Arabic path.
    pub fn new() -> Self {
        Self::with_synonyms(true)
    }

    /// `expand_synonyms = false` gives the plain exact/fuzzy behaviour.
    pub fn with_synonyms(expand_synonyms: bool) -> Self {
        let synonyms = expand_synonyms.then(SynonymTable::builtin);
        FatwaRanker {
            latin: LatinScorer,
            arabic: ArabicScorer::new(synonyms),
        }
    }
}

impl Default for FatwaRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for FatwaRanker {
    fn score(&self, query: &str, record: &Fatwa) -> f64 {
        match QueryScript::classify(query) {
            QueryScript::Latin => self.latin.score(query, record),
            QueryScript::Arabic => self.arabic.score(query, record),
        }
    }
}

/// Score with the default ranker.
pub fn score(query: &str, record: &Fatwa) -> f64 {
    FatwaRanker::new().score(query, record)
}
