// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arabic-script strategy: normalized token matching over four weighted fields.
//!
//! Per query token, the first field that contains it wins:
//! `medical_context` (14) → title (11) → tags (9) → question (7).
//! A token with no direct hit may still hit through its synonyms at half weight.
//!
//! Only if no token hit anything does the fuzzy pass run, against both context
//! and tag tokens. Only if the score is still exactly zero after that does the
//! ruling text get a look, at 2 per token.
//!
//! "Contains" means exact membership in the field's normalized token list, not
//! substring search: `حمل` does not hit `حملات`.

use super::core::{
    context_fuzzy_bonus, tag_fuzzy_bonus, Scorer, ARABIC_CONTEXT_WEIGHT, ARABIC_FUZZY_THRESHOLD,
    ARABIC_MIN_TOKEN, ARABIC_QUESTION_WEIGHT, ARABIC_TAGS_WEIGHT, ARABIC_TITLE_WEIGHT,
    FUZZY_MIN_TARGET_EXCLUSIVE, RULING_FALLBACK_WEIGHT, SYNONYM_WEIGHT_FACTOR,
};
use crate::fuzzy::similarity_above;
use crate::synonyms::SynonymTable;
use crate::types::Fatwa;
use crate::util::normalize;

/// Scores a non-Latin query. Holds an optional synonym table; `None` disables
/// synonym hits entirely.
#[derive(Debug, Clone, Copy)]
pub struct ArabicScorer<'a> {
    synonyms: Option<&'a SynonymTable>,
}

impl<'a> ArabicScorer<'a> {
    pub fn new(synonyms: Option<&'a SynonymTable>) -> Self {
        ArabicScorer { synonyms }
    }

    /// Scorer with no synonym expansion.
    pub fn plain() -> Self {
        ArabicScorer { synonyms: None }
    }

    fn synonym_weight(&self, token: &str, fields: &RecordFields) -> Option<f64> {
        let table = self.synonyms?;
        let expanded = table.expand(&[token]);
        let alternates: Vec<&str> = expanded
            .iter()
            .map(String::as_str)
            .filter(|alt| *alt != token)
            .collect();
        if alternates.is_empty() {
            return None;
        }

        fields
            .synonym_field_weight(&alternates)
            .map(|weight| weight * SYNONYM_WEIGHT_FACTOR)
    }
}

impl Default for ArabicScorer<'_> {
    fn default() -> Self {
        Self::plain()
    }
}

/// The four scored fields, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Context,
    Title,
    Tags,
    Question,
}

impl Field {
    const PRIORITY: [Field; 4] = [Field::Context, Field::Title, Field::Tags, Field::Question];

    fn weight(self) -> f64 {
        match self {
            Field::Context => ARABIC_CONTEXT_WEIGHT,
            Field::Title => ARABIC_TITLE_WEIGHT,
            Field::Tags => ARABIC_TAGS_WEIGHT,
            Field::Question => ARABIC_QUESTION_WEIGHT,
        }
    }
}

/// A record's fields, normalized once per scoring call.
struct RecordFields {
    context: Vec<String>,
    title: Vec<String>,
    tags: Vec<String>,
    question: Vec<String>,
    /// Case-folded words of the raw context and tags, for Latin synonym alternates.
    context_words: Vec<String>,
    tags_words: Vec<String>,
}

impl RecordFields {
    fn new(record: &Fatwa) -> Self {
        let joined_tags = record.joined_tags();
        RecordFields {
            context: normalize(&record.medical_context),
            title: normalize(&record.title),
            tags: normalize(&joined_tags),
            question: normalize(&record.question),
            context_words: latin_words(&record.medical_context),
            tags_words: latin_words(&joined_tags),
        }
    }

    fn tokens(&self, field: Field) -> &[String] {
        match field {
            Field::Context => &self.context,
            Field::Title => &self.title,
            Field::Tags => &self.tags,
            Field::Question => &self.question,
        }
    }

    /// Raw words searched by Latin alternates. Only context and tags carry English keywords.
    fn raw_words(&self, field: Field) -> Option<&[String]> {
        match field {
            Field::Context => Some(&self.context_words),
            Field::Tags => Some(&self.tags_words),
            Field::Title | Field::Question => None,
        }
    }

    fn direct_weight(&self, token: &str) -> Option<f64> {
        Field::PRIORITY
            .into_iter()
            .find(|&field| self.tokens(field).iter().any(|t| t == token))
            .map(Field::weight)
    }

    /// First field, in priority order, hit by any alternate.
    ///
    /// Arabic alternates are matched as tokens. Latin alternates can't survive
    /// normalization, so they're matched as whole words (or runs of consecutive
    /// words) of the raw context and tags: `lawful` does not hit `unlawful`.
    fn synonym_field_weight(&self, alternates: &[&str]) -> Option<f64> {
        let (latin, arabic): (Vec<&str>, Vec<&str>) = alternates
            .iter()
            .copied()
            .partition(|alt| alt.chars().any(|c| c.is_ascii_alphabetic()));

        Field::PRIORITY
            .into_iter()
            .find(|&field| {
                let tokens = self.tokens(field);
                let token_hit = arabic.iter().any(|alt| tokens.iter().any(|t| t == alt));
                let raw_hit = self
                    .raw_words(field)
                    .is_some_and(|words| latin.iter().any(|alt| contains_phrase(words, alt)));
                token_hit || raw_hit
            })
            .map(Field::weight)
    }
}

/// Lowercased words of raw text, split on anything that isn't alphanumeric.
fn latin_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Whether `phrase`'s words appear in `words` consecutively and in order.
fn contains_phrase(words: &[String], phrase: &str) -> bool {
    let needle = latin_words(phrase);
    if needle.is_empty() || needle.len() > words.len() {
        return false;
    }
    words.windows(needle.len()).any(|window| window == needle.as_slice())
}

impl Scorer for ArabicScorer<'_> {
    fn score(&self, query: &str, record: &Fatwa) -> f64 {
        let tokens: Vec<String> = normalize(query)
            .into_iter()
            .filter(|t| t.chars().count() >= ARABIC_MIN_TOKEN)
            .collect();
        if tokens.is_empty() {
            return 0.0;
        }

        let fields = RecordFields::new(record);
        let mut score = 0.0;
        let mut direct_hits = 0usize;

        for token in &tokens {
            let weight = fields
                .direct_weight(token)
                .or_else(|| self.synonym_weight(token, &fields));
            if let Some(weight) = weight {
                score += weight;
                direct_hits += 1;
            }
        }

        if direct_hits == 0 {
            for token in &tokens {
                for context_token in &fields.context {
                    if context_token.chars().count() <= FUZZY_MIN_TARGET_EXCLUSIVE {
                        continue;
                    }
                    if let Some(sim) =
                        similarity_above(token, context_token, ARABIC_FUZZY_THRESHOLD)
                    {
                        score += context_fuzzy_bonus(sim);
                    }
                }
                for tag_token in &fields.tags {
                    if tag_token.chars().count() <= FUZZY_MIN_TARGET_EXCLUSIVE {
                        continue;
                    }
                    if let Some(sim) = similarity_above(token, tag_token, ARABIC_FUZZY_THRESHOLD) {
                        score += tag_fuzzy_bonus(sim);
                    }
                }
            }
        }

        if score == 0.0 {
            let ruling = normalize(&record.ruling);
            let mentioned = tokens
                .iter()
                .filter(|token| ruling.iter().any(|t| t == *token))
                .count();
            score += RULING_FALLBACK_WEIGHT * mentioned as f64;
        }

        score
    }
}
