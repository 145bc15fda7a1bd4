//! Threshold, ordering and truncation of the result selector.

use crate::common::{make_fatwa, scored_ids};
use faqih::{rank, Fatwa, SearchConfig};
use std::collections::HashMap;

/// Drive the selector with exact per-record scores.
fn fixed_scores(scores: &[(&str, f64)]) -> impl Fn(&str, &Fatwa) -> f64 + Sync {
    let table: HashMap<String, f64> = scores.iter().map(|(id, s)| (id.to_string(), *s)).collect();
    move |_query: &str, record: &Fatwa| table.get(&record.id).copied().unwrap_or(0.0)
}

fn records(n: usize) -> Vec<Fatwa> {
    (0..n).map(|i| make_fatwa(&format!("r{}", i), "", &[])).collect()
}

#[test]
fn test_exactly_three_is_excluded() {
    let records = records(2);
    let scorer = fixed_scores(&[("r0", 3.0), ("r1", 3.01)]);
    let results = rank("q", &records, &scorer, &SearchConfig::default());
    assert_eq!(scored_ids(&results), vec!["r1"]);
}

#[test]
fn test_never_more_than_five() {
    let records = records(10);
    let scores: Vec<(String, f64)> = (0..10).map(|i| (format!("r{}", i), 10.0)).collect();
    let borrowed: Vec<(&str, f64)> = scores.iter().map(|(id, s)| (id.as_str(), *s)).collect();
    let scorer = fixed_scores(&borrowed);

    let results = rank("q", &records, &scorer, &SearchConfig::default());
    assert_eq!(results.len(), 5);
    // All tied: the first five in dataset order
    assert_eq!(scored_ids(&results), vec!["r0", "r1", "r2", "r3", "r4"]);
}

#[test]
fn test_ties_keep_dataset_order_among_higher_scores() {
    let records = records(5);
    let scorer = fixed_scores(&[("r0", 5.0), ("r1", 9.0), ("r2", 5.0), ("r3", 9.0), ("r4", 1.0)]);
    let results = rank("q", &records, &scorer, &SearchConfig::default());
    assert_eq!(scored_ids(&results), vec!["r1", "r3", "r0", "r2"]);
}

#[test]
fn test_config_threshold_and_limit() {
    let records = records(4);
    let scorer = fixed_scores(&[("r0", 4.0), ("r1", 6.0), ("r2", 8.0), ("r3", 10.0)]);
    let config = SearchConfig { min_score: 5.0, max_results: 2, ..SearchConfig::default() };
    let results = rank("q", &records, &scorer, &config);
    assert_eq!(scored_ids(&results), vec!["r3", "r2"]);
}

#[test]
fn test_scores_are_reported() {
    let records = records(1);
    let scorer = fixed_scores(&[("r0", 12.5)]);
    let results = rank("q", &records, &scorer, &SearchConfig::default());
    assert_eq!(results[0].score, 12.5);
    assert_eq!(results[0].position, 0);
}

#[test]
fn test_nan_scores_are_dropped() {
    let records = records(2);
    let scorer = fixed_scores(&[("r0", f64::NAN), ("r1", 4.0)]);
    let results = rank("q", &records, &scorer, &SearchConfig::default());
    assert_eq!(scored_ids(&results), vec!["r1"]);
}
