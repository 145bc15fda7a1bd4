// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Domain synonym table and query expansion.
//!
//! Maps a canonical Arabic token to alternate surface forms: Arabic synonyms,
//! multi-word phrases, transliterations and English equivalents. The table is
//! static and built once.
//!
//! Keys are stored normalized, so a key written with `ة` or `ى` is reachable from
//! a normalized query token. Lookup itself is exact: no fuzzy matching into the
//! table.

use crate::util::normalize;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Canonical token → alternates, in the order they are listed.
const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    ("اجهاض", &["اسقاط", "انهاء حمل", "اسقاط جنين", "abortion", "terminate"]),
    ("اسقاط", &["اجهاض", "انهاء حمل", "abortion"]),
    ("حمل", &["حامل", "حاملة", "pregnancy", "pregnant"]),
    ("جنين", &["fetus", "foetus", "embryo"]),
    ("تلقيح", &["اخصاب", "اطفال الانابيب", "حقن مجهري", "ivf", "icsi", "artificial insemination"]),
    ("اخصاب", &["تلقيح", "ivf", "اطفال الانابيب", "fertilization"]),
    ("كلوي", &["كلي", "كلى", "كلية", "renal", "kidney", "kidneys"]),
    ("كلى", &["كلية", "كلوي", "كلي", "renal", "kidney"]),
    ("عضو", &["اعضاء", "زراعة اعضاء", "نقل اعضاء", "transplant", "organ"]),
    ("اعضاء", &["عضو", "زراعة اعضاء", "نقل اعضاء", "organs"]),
    ("تجميل", &["جراحه تجميليه", "بوتوكس", "فيلر", "rhinoplasty", "plastic surgery", "cosmetic"]),
    ("خنثى", &["تصحيح الجنس", "تصحيح نوع الجنس", "intersex", "hermaphrodite"]),
    ("تحويل", &["تغيير الجنس", "تحول جنسي", "gender reassignment", "sex change"]),
    ("لقاح", &["تطعيم", "vaccine", "كورونا", "covid"]),
    ("كورونا", &["covid", "كوفيد", "كوفيد19", "فيروس كورونا", "coronavirus"]),
    ("صيام", &["صوم", "ramadan", "fasting", "سيام"]),
    ("صوم", &["صيام", "fasting", "ramadan"]),
    ("غسيل", &["غسيل كلى", "dialysis", "تصفية", "hemodialysis"]),
    ("كحول", &["معقم", "alcohol", "ethanol"]),
    ("موت", &["وفاة", "death", "دماغي", "brain death"]),
    ("دماغي", &["موت دماغي", "brain death", "brain stem"]),
    ("اعاشة", &["انعاش", "resuscitation", "life support", "ventilator"]),
    ("انعاش", &["اعاشة", "resuscitation", "cpr"]),
    ("بويضة", &["بويضات", "egg", "oocyte", "ovum"]),
    ("سرطان", &["ورم", "cancer", "malignancy", "tumour"]),
    ("ضرر", &["ضرر", "harm", "damage", "injury"]),
    ("ضرورة", &["ضرورة", "necessity", "medical emergency"]),
    ("حرام", &["محرم", "forbidden", "unlawful", "haram"]),
    ("حلال", &["جائز", "permitted", "lawful", "halal"]),
    ("جائز", &["حلال", "permitted", "allowed", "lawful"]),
    ("مشروط", &["conditional", "بشروط", "conditions"]),
];

/// Read-only synonym lookup keyed by normalized token.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Build a table from `(key, alternates)` pairs.
    ///
    /// Keys are normalized; a key that normalizes to anything other than a single
    /// token is skipped, since no single query token could ever hit it. When two
    /// keys fold to the same token, their alternates are merged in order.
    pub fn from_pairs<'a, I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, S)>,
        S: IntoIterator<Item = &'a str>,
    {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        for (key, alternates) in pairs {
            let mut key_tokens = normalize(key);
            if key_tokens.len() != 1 {
                tracing::warn!(key, "synonym key does not normalize to one token; skipped");
                continue;
            }
            let slot = entries.entry(key_tokens.remove(0)).or_default();
            for alt in alternates {
                if !slot.iter().any(|existing| existing == alt) {
                    slot.push(alt.to_string());
                }
            }
        }
        SynonymTable { entries }
    }

    /// The table shipped with the crate, built on first use.
    pub fn builtin() -> &'static SynonymTable {
        static TABLE: OnceLock<SynonymTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            SynonymTable::from_pairs(
                BUILTIN_SYNONYMS
                    .iter()
                    .map(|(key, alts)| (*key, alts.iter().copied())),
            )
        })
    }

    /// Alternates for an exact normalized token.
    pub fn get(&self, token: &str) -> Option<&[String]> {
        self.entries.get(token).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of alternates across all keys.
    pub fn alternate_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Expand tokens with their synonyms.
    ///
    /// Every input token is kept. For each token that is a key, every alternate is
    /// added twice over: lowercased verbatim (so `"plastic surgery"` and
    /// `"kidney"` survive as-is), and as its normalized tokens.
    pub fn expand<S: AsRef<str>>(&self, tokens: &[S]) -> HashSet<String> {
        let mut expanded: HashSet<String> =
            tokens.iter().map(|t| t.as_ref().to_string()).collect();

        for token in tokens {
            let Some(alternates) = self.get(token.as_ref()) else {
                continue;
            };
            for alt in alternates {
                expanded.extend(normalize(alt));
                expanded.insert(alt.to_lowercase());
            }
        }

        expanded
    }
}

/// Expand with the built-in table.
pub fn expand<S: AsRef<str>>(tokens: &[S]) -> HashSet<String> {
    SynonymTable::builtin().expand(tokens)
}
