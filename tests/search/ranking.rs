//! Ranker scores on small hand-built records.

use crate::common::{approx, arabic_records, make_fatwa, make_full_fatwa};
use faqih::scoring::{ARABIC_CONTEXT_WEIGHT, LATIN_CONTEXT_PHRASE};
use faqih::{score, ArabicScorer, FatwaRanker, LatinScorer, QueryScript, Scorer};

#[test]
fn test_latin_full_phrase_hit() {
    let record = make_fatwa("nose", "rhinoplasty nose job", &[]);
    assert!(score("rhinoplasty", &record) >= LATIN_CONTEXT_PHRASE);
}

#[test]
fn test_arabic_direct_context_hit() {
    let record = make_fatwa("f", "إجهاض", &[]);
    assert!(score("اجهاض", &record) >= ARABIC_CONTEXT_WEIGHT);
}

#[test]
fn test_dispatch_matches_strategy() {
    let records = arabic_records();
    let ranker = FatwaRanker::with_synonyms(false);
    for record in &records {
        for query in ["الصيام لمريض السكري", "اجهاض", "fasting", "diabetes insulin"] {
            let expected = match QueryScript::classify(query) {
                QueryScript::Latin => LatinScorer.score(query, record),
                QueryScript::Arabic => ArabicScorer::plain().score(query, record),
            };
            assert!(approx(ranker.score(query, record), expected), "{} / {}", query, record.id);
        }
    }
}

#[test]
fn test_title_tokens_accumulate() {
    let records = arabic_records();
    // All three tokens sit in the fasting title: 3 x 11
    assert!(approx(score("الصيام لمريض السكري", &records[1]), 33.0));
}

#[test]
fn test_mixed_script_query_takes_arabic_path() {
    // "ivf" is stripped by the normalizer; "تلقيح" still hits the title
    let record = make_full_fatwa("ivf", "تلقيح صناعي", "", "ivf", "", &[]);
    assert_eq!(QueryScript::classify("ivf تلقيح"), QueryScript::Arabic);
    assert!(approx(
        ArabicScorer::plain().score("ivf تلقيح", &record),
        11.0
    ));
}

#[test]
fn test_scores_are_deterministic() {
    let records = arabic_records();
    let first: Vec<f64> = records.iter().map(|r| score("الجنين المشوه", r)).collect();
    let second: Vec<f64> = records.iter().map(|r| score("الجنين المشوه", r)).collect();
    assert_eq!(first, second);
}

#[test]
fn test_record_without_context_still_scores_on_title() {
    let record = make_full_fatwa("t", "صلاة المريض", "", "", "", &[]);
    assert!(record.medical_context.is_empty());
    assert!(approx(score("صلاة", &record), 11.0));
}
