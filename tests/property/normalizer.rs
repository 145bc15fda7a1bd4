//! Normalizer invariants: idempotent, and nothing it folds survives.

use proptest::prelude::*;
use faqih::normalize;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Characters the normalizer has to handle: plain letters, every alef and yeh
/// variant, teh marbuta, harakat, tatweel, Arabic and Latin punctuation,
/// digits and Latin letters.
fn arabic_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        'ا', 'ب', 'ت', 'ج', 'ح', 'د', 'ر', 'س', 'ص', 'ط', 'ع', 'ف', 'ق', 'ك', 'ل', 'م', 'ن',
        'ه', 'و', 'ي', 'أ', 'إ', 'آ', 'ٱ', 'ى', 'ة', 'ئ', 'ؤ', 'ء', '\u{064E}', '\u{064F}',
        '\u{0650}', '\u{0651}', '\u{0652}', '\u{064B}', '\u{0670}', '\u{0640}', '؟', '،', '!',
        '.', ' ', ' ', '\t', '٣', '7', 'a', 'Z', 'é',
    ])
}

fn arabic_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arabic_char(), 0..40).prop_map(|chars| chars.into_iter().collect())
}

fn is_folded_away(c: char) -> bool {
    matches!(c, 'أ' | 'إ' | 'آ' | 'ٱ' | 'ى' | 'ة' | '\u{0640}' | '\u{0670}')
        || ('\u{064B}'..='\u{065F}').contains(&c)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: normalize(join(normalize(s))) == normalize(s)
    #[test]
    fn prop_normalize_idempotent(text in arabic_text()) {
        let once = normalize(&text);
        let twice = normalize(&once.join(" "));
        prop_assert_eq!(once, twice);
    }

    /// Property: no variant letter, mark, or tatweel reaches a token
    #[test]
    fn prop_no_folded_chars_in_output(text in arabic_text()) {
        for token in normalize(&text) {
            prop_assert!(
                !token.chars().any(is_folded_away),
                "token {:?} still holds a folded character", token
            );
        }
    }

    /// Property: tokens are non-empty, whitespace-free and carry no Latin letters
    #[test]
    fn prop_tokens_are_clean(text in arabic_text()) {
        for token in normalize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
            prop_assert!(!token.chars().any(|c| c.is_ascii_alphabetic()));
        }
    }

    /// Property: Latin-only text always normalizes to nothing
    #[test]
    fn prop_latin_words_vanish(text in "[a-zA-Z ,.!?-]{0,40}") {
        prop_assert!(normalize(&text).is_empty());
    }
}
