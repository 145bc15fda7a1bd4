// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{Category, Fatwa, Verdict};

/// Create a record with only the matched fields filled in.
///
/// Title, question and ruling are empty; category is `GENERAL`, verdict
/// `PERMITTED`, source `"test"`.
pub fn make_fatwa(id: &str, medical_context: &str, tags: &[&str]) -> Fatwa {
    Fatwa {
        id: id.to_string(),
        title: String::new(),
        category: Category::General,
        question: String::new(),
        medical_context: medical_context.to_string(),
        ruling: String::new(),
        verdict: Verdict::Permitted,
        source: "test".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Create a record with every text field set.
pub fn make_full_fatwa(
    id: &str,
    title: &str,
    question: &str,
    medical_context: &str,
    ruling: &str,
    tags: &[&str],
) -> Fatwa {
    Fatwa {
        title: title.to_string(),
        question: question.to_string(),
        ruling: ruling.to_string(),
        ..make_fatwa(id, medical_context, tags)
    }
}
