//! Selector invariants over arbitrary score tables.

use crate::common::make_fatwa;
use proptest::prelude::*;
use faqih::{rank, Fatwa, SearchConfig};

/// Records whose score is read back from their medical context.
fn scored_records() -> impl Strategy<Value = Vec<Fatwa>> {
    prop::collection::vec(-5.0f64..40.0, 0..25).prop_map(|scores| {
        scores
            .iter()
            .enumerate()
            .map(|(i, score)| make_fatwa(&format!("r{}", i), &score.to_string(), &[]))
            .collect()
    })
}

fn context_score(_query: &str, record: &Fatwa) -> f64 {
    record.medical_context.parse().unwrap_or(f64::NAN)
}

proptest! {
    /// Property: at most max_results, all above min_score, descending
    #[test]
    fn prop_selector_invariants(
        records in scored_records(),
        max_results in 1usize..8,
        min_score in 0.0f64..10.0
    ) {
        let config = SearchConfig { min_score, max_results, ..SearchConfig::default() };
        let results = rank("q", &records, &context_score, &config);

        prop_assert!(results.len() <= max_results);
        for result in &results {
            prop_assert!(result.score > min_score);
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }
    }

    /// Property: nothing above the threshold is skipped in favour of a lower score
    #[test]
    fn prop_selector_keeps_the_best(records in scored_records()) {
        let config = SearchConfig::default();
        let results = rank("q", &records, &context_score, &config);

        let eligible = records
            .iter()
            .filter(|r| context_score("q", r) > config.min_score)
            .count();
        prop_assert_eq!(results.len(), eligible.min(config.max_results));

        if let Some(cutoff) = results.last().map(|r| r.score) {
            if results.len() == config.max_results {
                let dropped_better = records
                    .iter()
                    .filter(|r| !results.iter().any(|kept| kept.fatwa.id == r.id))
                    .any(|r| context_score("q", r) > cutoff);
                prop_assert!(!dropped_better);
            }
        }
    }
}
