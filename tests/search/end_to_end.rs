//! Full pipeline: query in, ordered records out.

use crate::common::{arabic_records, bundled, dialysis_records, ids, scored_ids};
use faqih::{select_top_matches, LocalMatcher, Matcher};

#[test]
fn test_dialysis_latin_query() {
    let records = dialysis_records();
    let found = select_top_matches("dialysis", &records);
    // A: 20 phrase + 12 word. B: 15 phrase + 10 word. C: nothing.
    assert_eq!(ids(&found), vec!["A", "B"]);
}

#[test]
fn test_arabic_query_selects_record() {
    let records = arabic_records();
    assert_eq!(ids(&select_top_matches("اجهاض", &records)), vec!["abortion"]);
    assert_eq!(ids(&select_top_matches("الصيام لمريض السكري", &records)), vec!["fasting"]);
}

#[test]
fn test_vocalized_query_matches_plain_record() {
    let records = arabic_records();
    let found = select_top_matches("إِجْهَاض", &records);
    assert_eq!(ids(&found), vec!["abortion"]);
}

#[test]
fn test_blank_and_punctuation_queries() {
    let records = arabic_records();
    assert!(select_top_matches("", &records).is_empty());
    assert!(select_top_matches("   ", &records).is_empty());
    assert!(select_top_matches("؟!..", &records).is_empty());
}

#[test]
fn test_bundled_latin_tie_keeps_dataset_order() {
    let dataset = bundled();
    let matcher = LocalMatcher::default();
    let results = matcher.rank("kidney", dataset.as_slice());
    // Both carry "kidney" in context: 20 + 12 each
    assert_eq!(
        scored_ids(&results),
        vec!["internal-dialysis-fasting", "surgery-organ-sale"]
    );
    assert_eq!(results[0].score, results[1].score);
}

#[test]
fn test_bundled_queries() {
    let dataset = bundled();
    let matcher = LocalMatcher::default();

    let found = matcher.find_matches("rhinoplasty", dataset.as_slice()).unwrap();
    assert_eq!(ids(&found), vec!["surgery-rhinoplasty"]);

    let found = matcher.find_matches("غسيل الكلى", dataset.as_slice()).unwrap();
    assert_eq!(found[0].id, "internal-dialysis-fasting");

    let found = matcher.find_matches("greetings friend", dataset.as_slice()).unwrap();
    assert!(found.is_empty());
}
