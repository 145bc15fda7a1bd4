//! Edit distance and similarity ratio, checked against strsim.

use proptest::prelude::*;
use faqih::fuzzy::similarity_above;
use faqih::{edit_distance, similarity};

/// Mixed Latin and Arabic words, so char-vs-byte length bugs show up.
fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zابتجدرسكلمنيه]{0,10}").unwrap()
}

proptest! {
    /// Property: edit_distance agrees with strsim's char-based Levenshtein
    #[test]
    fn prop_edit_distance_matches_oracle(a in word(), b in word()) {
        prop_assert_eq!(edit_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Property: similarity is within [0, 1] and symmetric
    #[test]
    fn prop_similarity_bounded_and_symmetric(a in word(), b in word()) {
        let ab = similarity(&a, &b);
        let ba = similarity(&b, &a);
        prop_assert!((0.0..=1.0).contains(&ab), "similarity {} out of range", ab);
        prop_assert_eq!(ab, ba);
    }

    /// Property: a word is fully similar to itself
    #[test]
    fn prop_self_similarity_is_one(a in word()) {
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    /// Property: distance is at least the length gap
    #[test]
    fn prop_distance_at_least_length_gap(a in word(), b in word()) {
        let gap = a.chars().count().abs_diff(b.chars().count());
        prop_assert!(edit_distance(&a, &b) >= gap);
    }

    /// Property: the thresholded helper never disagrees with the plain ratio
    #[test]
    fn prop_similarity_above_consistent(
        a in word(),
        b in word(),
        threshold in prop::sample::select(vec![0.0, 0.5, 0.7, 0.78, 0.8, 0.99])
    ) {
        let plain = similarity(&a, &b);
        match similarity_above(&a, &b, threshold) {
            Some(sim) => {
                prop_assert_eq!(sim, plain);
                prop_assert!(sim > threshold);
            }
            None => prop_assert!(plain <= threshold),
        }
    }
}
