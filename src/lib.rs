// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bilingual lexical search over medical fatwa records.
//!
//! A doctor types a question in Arabic, or a few English medical keywords, and
//! gets back the rulings that best fit it. Matching is local and deterministic:
//! no index, no network, just a weighted scan of a small in-memory dataset.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │  normalize   │────▶│ scoring          │────▶│ search       │
//! │ (Arabic      │     │ (Latin / Arabic  │     │ (threshold,  │
//! │  tokens)     │     │  strategies)     │     │  sort, cap)  │
//! └──────────────┘     └──────────────────┘     └──────────────┘
//!        ▲                  ▲        ▲                  │
//!        │                  │        │                  ▼
//! ┌──────────────┐   ┌──────────┐ ┌──────────┐   ┌──────────────┐
//! │  synonyms    │───┘  fuzzy   │ │  types   │   │ session      │◀── fallback
//! └──────────────┘   └──────────┘ └──────────┘   │ (chat log)   │◀── voice
//!                                                └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use faqih::{select_top_matches, Dataset};
//!
//! let dataset = Dataset::builtin().unwrap();
//! let hits = select_top_matches("dialysis", dataset.as_slice());
//! assert!(hits.iter().any(|f| f.id == "internal-dialysis-fasting"));
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod fallback;
pub mod fuzzy;
pub mod license;
pub mod scoring;
pub mod search;
pub mod session;
pub mod synonyms;
pub mod testing;
pub mod types;
pub mod util;
pub mod voice;

pub use config::SearchConfig;
pub use dataset::{Dataset, KnowledgeEntry};
pub use error::{ConfigError, DatasetError, FallbackError, SearchError, VoiceError};
pub use fallback::{BestEffortFallback, CommandFallback, SemanticFallback};
pub use fuzzy::{edit_distance, similarity};
pub use license::LicenseCard;
pub use scoring::ranking::ScoredFatwa;
pub use scoring::{score, ArabicScorer, FatwaRanker, LatinScorer, QueryScript, Scorer};
pub use search::{rank, select_top_matches, LocalMatcher, Matcher};
pub use session::{PendingQuery, QueryController, QueryOutcome, SessionState};
pub use synonyms::{expand, SynonymTable};
pub use types::{Category, ChatMessage, Fatwa, PatientLicenseData, Role, Verdict};
pub use util::normalize;
pub use voice::{SpeechCapability, VoiceEvent, VoiceInput};
