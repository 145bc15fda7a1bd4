// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records the search engine works over, and the messages it produces.
//!
//! A `Fatwa` is loaded once and never mutated. A `ChatMessage` is appended to the
//! conversation log and never touched again.
//!
//! # Invariants
//!
//! - **Fatwa**: `id` is non-empty and unique across a `Dataset`. Enforced on load,
//!   not by this type.
//! - **Verdict**: exactly three values. Anything else in the JSON is a parse error,
//!   which is why this is an enum and not a string.
//! - **ChatMessage**: `related_fatwa_ids` is only ever non-empty on `Role::Model`
//!   messages that carry search results.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// FATWA RECORDS
// =============================================================================

/// Simplified ruling outcome shown as a badge on each card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Permitted,
    Forbidden,
    Conditional,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Permitted, Verdict::Forbidden, Verdict::Conditional];

    /// Arabic badge label, prefixed with a status glyph.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Permitted => "✓ جائز",
            Verdict::Forbidden => "✗ محرم",
            Verdict::Conditional => "◎ مشروط",
        }
    }

    /// Wire name, as it appears in the dataset.
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Permitted => "PERMITTED",
            Verdict::Forbidden => "FORBIDDEN",
            Verdict::Conditional => "CONDITIONAL",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clinical area a ruling is filed under. Descriptive only, never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "ICU")]
    Icu,
    #[serde(rename = "SURGERY")]
    Surgery,
    #[serde(rename = "OBGYN")]
    Obgyn,
    #[serde(rename = "INTERNAL")]
    Internal,
    #[serde(rename = "GENERAL")]
    General,
    #[serde(rename = "UNIT_8_WORSHIP")]
    Unit8Worship,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Icu => "ICU",
            Category::Surgery => "SURGERY",
            Category::Obgyn => "OBGYN",
            Category::Internal => "INTERNAL",
            Category::General => "GENERAL",
            Category::Unit8Worship => "UNIT_8_WORSHIP",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One medical-religious ruling.
///
/// Scoring reads `medical_context`, `tags`, `title`, `question` and (as a last
/// resort) `ruling`. `source` and `category` are carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fatwa {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub question: String,
    /// Short medical keywords, e.g. "rhinoplasty nose job". May be empty.
    #[serde(default)]
    pub medical_context: String,
    /// Full ruling text. May span several paragraphs.
    pub ruling: String,
    pub verdict: Verdict,
    pub source: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Fatwa {
    /// Tags joined with single spaces, the form both scoring paths compare against.
    pub fn joined_tags(&self) -> String {
        self.tags.join(" ")
    }
}

// =============================================================================
// CONVERSATION
// =============================================================================

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One entry in the append-only conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    /// Fatwa ids to render as cards under this message, in rank order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_fatwa_ids: Vec<String>,
}

impl ChatMessage {
    pub fn user(id: String, text: impl Into<String>) -> Self {
        ChatMessage {
            id,
            role: Role::User,
            text: text.into(),
            related_fatwa_ids: Vec::new(),
        }
    }

    pub fn model(id: String, text: impl Into<String>, related_fatwa_ids: Vec<String>) -> Self {
        ChatMessage {
            id,
            role: Role::Model,
            text: text.into(),
            related_fatwa_ids,
        }
    }
}

// =============================================================================
// LICENSE CARD INPUT
// =============================================================================

/// Fields printed on a patient license card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientLicenseData {
    pub doctor_name: String,
    pub patient_name: String,
    pub date: String,
    pub diagnosis: String,
    pub ruling_summary: String,
}
