// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Records are few and fields are short, so a plain O(nm) Levenshtein per pair
//! is enough. The similarity ratio on top of it is what the ranker thresholds.

mod levenshtein;

pub use levenshtein::*;
