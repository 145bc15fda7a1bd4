//! Shared test utilities and fixtures.

#![allow(dead_code)]

use faqih::{Dataset, Fatwa, ScoredFatwa};

// Re-export canonical test utilities from faqih::testing
pub use faqih::testing::{make_fatwa, make_full_fatwa};

// ============================================================================
// FIXTURES
// ============================================================================

/// A: context "kidney dialysis". B: "dialysis" only in tags. C: unrelated.
pub fn dialysis_records() -> Vec<Fatwa> {
    vec![
        make_fatwa("A", "kidney dialysis", &[]),
        make_fatwa("B", "renal replacement", &["dialysis", "renal"]),
        make_fatwa("C", "vaccination schedule", &["vaccine"]),
    ]
}

/// Arabic-only records with the text in title, question and ruling.
pub fn arabic_records() -> Vec<Fatwa> {
    vec![
        make_full_fatwa(
            "abortion",
            "إسقاط الجنين المشوه",
            "هل يجوز إجهاض الجنين المشوه؟",
            "إجهاض الجنين",
            "يجوز قبل مئة وعشرين يوما بشروط",
            &["اجهاض", "جنين"],
        ),
        make_full_fatwa(
            "fasting",
            "الصيام لمريض السكري",
            "هل يصوم مريض السكري؟",
            "",
            "يجوز الفطر عند خوف الضرر",
            &["صيام", "سكري"],
        ),
        make_full_fatwa(
            "prayer",
            "صلاة المريض",
            "كيف يصلي المريض العاجز؟",
            "",
            "يصلي على حسب حاله ويتيمم عند العجز عن الماء",
            &["صلاه"],
        ),
    ]
}

pub fn bundled() -> Dataset {
    Dataset::builtin().expect("bundled dataset loads")
}

// ============================================================================
// HELPERS
// ============================================================================

pub fn ids<'a>(found: &[&'a Fatwa]) -> Vec<&'a str> {
    found.iter().map(|f| f.id.as_str()).collect()
}

pub fn scored_ids<'a>(found: &[ScoredFatwa<'a>]) -> Vec<&'a str> {
    found.iter().map(|r| r.fatwa.id.as_str()).collect()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
