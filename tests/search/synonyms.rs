//! Synonym hits in the Arabic path, on and off.

use crate::common::{approx, make_fatwa, make_full_fatwa};
use faqih::{rank, FatwaRanker, LocalMatcher, Matcher, Scorer, SearchConfig};

#[test]
fn test_arabic_alternate_hits_at_half_weight() {
    let record = make_fatwa("f", "اسقاط الحمل", &[]);
    assert!(approx(FatwaRanker::new().score("اجهاض", &record), 7.0));
    assert_eq!(FatwaRanker::with_synonyms(false).score("اجهاض", &record), 0.0);
}

#[test]
fn test_latin_alternate_hits_raw_context() {
    // "غسيل" lists "dialysis"; the record has no Arabic at all
    let record = make_fatwa("f", "hemodialysis session", &[]);
    assert!(approx(FatwaRanker::new().score("غسيل", &record), 7.0));
}

#[test]
fn test_latin_alternate_hits_raw_tags() {
    let record = make_fatwa("f", "", &["Dialysis"]);
    assert!(approx(FatwaRanker::new().score("غسيل", &record), 4.5));
}

#[test]
fn test_direct_hit_takes_precedence() {
    let record = make_full_fatwa("f", "", "", "اجهاض اسقاط", "", &[]);
    assert!(approx(FatwaRanker::new().score("اجهاض", &record), 14.0));
}

#[test]
fn test_switch_controls_selection() {
    let records = vec![make_fatwa("f", "اسقاط الحمل", &[])];

    let on = LocalMatcher::new(SearchConfig::default());
    assert_eq!(on.find_matches("اجهاض", &records).unwrap().len(), 1);

    let off = LocalMatcher::new(SearchConfig { expand_synonyms: false, ..SearchConfig::default() });
    assert!(off.find_matches("اجهاض", &records).unwrap().is_empty());

    let scored = rank("اجهاض", &records, &FatwaRanker::new(), &SearchConfig::default());
    assert!(approx(scored[0].score, 7.0));
}

#[test]
fn test_latin_alternate_must_be_a_whole_word() {
    // "حلال" lists "lawful"; "ضرر" lists "harm"
    let unlawful = make_fatwa("unl", "unlawful organ trade", &[]);
    assert_eq!(FatwaRanker::new().score("حلال", &unlawful), 0.0);

    let pharm = make_fatwa("pharm", "pharmaceutical compounding", &["pharmacy"]);
    assert_eq!(FatwaRanker::new().score("ضرر", &pharm), 0.0);

    let records = vec![unlawful, pharm];
    let on = LocalMatcher::new(SearchConfig::default());
    assert!(on.find_matches("حلال", &records).unwrap().is_empty());
    assert!(on.find_matches("ضرر", &records).unwrap().is_empty());
}

#[test]
fn test_multi_word_latin_alternate() {
    // "دماغي" lists "brain death"
    let record = make_fatwa("f", "confirmed brain death", &[]);
    assert!(approx(FatwaRanker::new().score("دماغي", &record), 7.0));

    let scattered = make_fatwa("g", "death of brain cells", &[]);
    assert_eq!(FatwaRanker::new().score("دماغي", &scattered), 0.0);
}
