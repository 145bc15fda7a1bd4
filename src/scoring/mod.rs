// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how a fatwa gets its number for a given query.
//!
//! The query's script picks the strategy. A pure Latin query (letters and spaces
//! only) is compared against the English keyword fields with substring checks; any
//! other query is normalized as Arabic and matched token by token across four
//! fields. The two strategies share the fuzzy scorer and nothing else.

mod arabic;
mod core;
mod latin;
pub mod ranking;

pub use self::arabic::ArabicScorer;
pub use self::core::*;
pub use self::latin::LatinScorer;
