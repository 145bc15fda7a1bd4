// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the similarity ratio built on it.
//!
//! Lengths are counted in `char`s, not bytes. Arabic letters are two bytes each
//! in UTF-8, so a byte-based distance would double every edit.
//!
//! The key insight for the thresholded helper: `|len(a) - len(b)|` is a lower
//! bound on edit distance, so it is also an upper bound on similarity. If even
//! that bound can't clear the threshold, the DP never runs.

/// Minimum number of single-character insertions, deletions and substitutions
/// turning `a` into `b`.
///
/// Rolling table: rows walk `b`, columns walk `a`, and only the previous row is
/// kept.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=a_chars.len()).collect();
    let mut curr: Vec<usize> = vec![0; a_chars.len() + 1];

    for (i, bc) in b_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, ac) in a_chars.iter().enumerate() {
            curr[j + 1] = if ac == bc {
                prev[j]
            } else {
                (prev[j] + 1).min(curr[j] + 1).min(prev[j + 1] + 1)
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a_chars.len()]
}

/// Similarity ratio in `[0, 1]`: `1 - distance / max(len(a), len(b))`.
///
/// Two empty strings are identical, so they score `1.0` rather than dividing by zero.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - edit_distance(a, b) as f64 / max_len as f64
}

/// `Some(similarity(a, b))` if it is strictly above `threshold`, else `None`.
///
/// Same result as comparing `similarity` directly, but rejects on length
/// difference alone when the best possible ratio is already too low.
pub fn similarity_above(a: &str, b: &str, threshold: f64) -> Option<f64> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let max_len = a_len.max(b_len);
    if max_len == 0 {
        return (1.0 > threshold).then_some(1.0);
    }

    let length_gap = a_len.abs_diff(b_len);
    if 1.0 - length_gap as f64 / max_len as f64 <= threshold {
        return None;
    }

    let score = similarity(a, b);
    (score > threshold).then_some(score)
}
