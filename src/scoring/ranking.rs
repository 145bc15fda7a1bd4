// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: how scored records get sorted.
//!
//! Higher score first. Equal scores compare `Equal` on purpose: the selector uses
//! a stable sort, so ties keep dataset order and results are reproducible.

use crate::types::Fatwa;
use std::cmp::Ordering;

/// A record paired with its score for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredFatwa<'a> {
    pub fatwa: &'a Fatwa,
    pub score: f64,
    /// Position in the dataset the score was computed over.
    pub position: usize,
}

/// Compare two scored records for ranking: descending by score.
///
/// Uses `total_cmp`, so the order is total even if a custom scorer hands back
/// NaN. Ties are `Equal`; dataset position is deliberately not consulted.
pub fn compare_results(a: &ScoredFatwa<'_>, b: &ScoredFatwa<'_>) -> Ordering {
    b.score.total_cmp(&a.score)
}
