// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result selection: score every record, keep the confident ones, cap the list.
//!
//! Scoring is independent per record, so with the `parallel` feature the scores
//! are computed with rayon. Order never depends on that: scores are collected
//! in dataset order and the sort is stable.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::scoring::ranking::{compare_results, ScoredFatwa};
use crate::scoring::{FatwaRanker, Scorer};
use crate::types::Fatwa;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Score, filter, sort and truncate.
///
/// A record is kept only when its score is strictly greater than
/// `config.min_score`. Equal scores keep dataset order. At most
/// `config.max_results` come back; an empty or whitespace query gives nothing.
pub fn rank<'a, S>(
    query: &str,
    records: &'a [Fatwa],
    scorer: &S,
    config: &SearchConfig,
) -> Vec<ScoredFatwa<'a>>
where
    S: Scorer + ?Sized,
{
    if query.trim().is_empty() || records.is_empty() {
        return Vec::new();
    }

    let scores: Vec<f64> = {
        #[cfg(feature = "parallel")]
        {
            records
                .par_iter()
                .map(|record| scorer.score(query, record))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            records
                .iter()
                .map(|record| scorer.score(query, record))
                .collect()
        }
    };

    let mut results: Vec<ScoredFatwa<'a>> = records
        .iter()
        .zip(scores)
        .enumerate()
        .filter(|(_, (_, score))| *score > config.min_score)
        .map(|(position, (fatwa, score))| ScoredFatwa { fatwa, score, position })
        .collect();

    // Stable: ties stay in dataset order
    results.sort_by(compare_results);
    results.truncate(config.max_results);

    tracing::debug!(
        query,
        candidates = records.len(),
        kept = results.len(),
        top_score = results.first().map(|r| r.score),
        "ranked records"
    );

    results
}

/// The best matches for `query` with the default ranker and thresholds
/// (score > 3, at most 5, synonym expansion on).
pub fn select_top_matches<'a>(query: &str, records: &'a [Fatwa]) -> Vec<&'a Fatwa> {
    let config = SearchConfig::default();
    rank(query, records, &FatwaRanker::new(), &config)
        .into_iter()
        .map(|r| r.fatwa)
        .collect()
}

/// Something that turns a query into an ordered list of records.
///
/// The session controller talks to this instead of `rank` directly so a
/// failing or misbehaving matcher can be swapped in and handled.
pub trait Matcher: Send + Sync {
    fn find_matches<'a>(
        &self,
        query: &str,
        records: &'a [Fatwa],
    ) -> Result<Vec<&'a Fatwa>, SearchError>;
}

/// In-process lexical matching with `FatwaRanker`. Never fails.
#[derive(Debug, Clone)]
pub struct LocalMatcher {
    config: SearchConfig,
    ranker: FatwaRanker,
}

impl LocalMatcher {
    pub fn new(config: SearchConfig) -> Self {
        let ranker = FatwaRanker::with_synonyms(config.expand_synonyms);
        LocalMatcher { config, ranker }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Full scored results, for callers that want to show scores.
    pub fn rank<'a>(&self, query: &str, records: &'a [Fatwa]) -> Vec<ScoredFatwa<'a>> {
        rank(query, records, &self.ranker, &self.config)
    }
}

impl Default for LocalMatcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Matcher for LocalMatcher {
    fn find_matches<'a>(
        &self,
        query: &str,
        records: &'a [Fatwa],
    ) -> Result<Vec<&'a Fatwa>, SearchError> {
        Ok(self.rank(query, records).into_iter().map(|r| r.fatwa).collect())
    }
}
