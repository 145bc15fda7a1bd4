// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arabic text normalization: the same folding for queries and record fields.
//!
//! Matching is symmetric only if both sides go through exactly the same steps,
//! so there is one function and no options.
//!
//! # Algorithm
//!
//! 1. Lowercase (only affects Latin letters)
//! 2. NFD normalize, so that precomposed letters like `أ` split into base + mark
//! 3. Drop Arabic combining marks (harakat, hamza/madda marks, Quranic annotation
//!    signs) and the tatweel
//! 4. Fold alef variants `أ إ آ ٱ` to bare `ا`
//! 5. Fold alef maksura `ى` to yeh `ي`
//! 6. Fold teh marbuta `ة` to heh `ه`
//! 7. Replace everything that is not an Arabic-block letter or an ASCII digit
//!    with a space (punctuation, Latin letters, Arabic-Indic digits, stray marks)
//! 8. Split on whitespace
//!
//! Step 2 is why step 4 mostly never fires: after NFD, `أ` is already `ا` + U+0654
//! and step 3 eats the U+0654. The explicit fold stays for `ٱ` (alef wasla),
//! which has no decomposition.

use unicode_normalization::UnicodeNormalization;

const TATWEEL: char = '\u{0640}';
const BARE_ALEF: char = '\u{0627}';
const YEH: char = '\u{064A}';
const HEH: char = '\u{0647}';

/// Normalize text into comparable tokens.
///
/// Order and duplicates are preserved. Empty or all-punctuation input gives an
/// empty vector. Re-normalizing the joined output gives the same tokens back.
///
/// ```
/// use faqih::normalize;
///
/// assert_eq!(normalize("أحمد إسلام آمن"), vec!["احمد", "اسلام", "امن"]);
/// assert_eq!(normalize("مشكلة"), vec!["مشكله"]);
/// assert!(normalize("").is_empty());
/// ```
pub fn normalize(text: &str) -> Vec<String> {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|&c| !is_arabic_mark(c))
        .map(fold_letter)
        .map(|c| if is_token_char(c) { c } else { ' ' })
        .collect();

    folded.split_whitespace().map(str::to_owned).collect()
}

/// Arabic combining marks and the tatweel.
///
/// Covers the harakat block (U+064B..U+065F, which includes the combining hamza
/// above/below and madda that NFD produces), the superscript alef, and the
/// Quranic annotation marks.
fn is_arabic_mark(c: char) -> bool {
    matches!(c,
        TATWEEL |
        '\u{0610}'..='\u{061A}' |  // Honorific and Quranic signs
        '\u{064B}'..='\u{065F}' |  // Harakat, hamza/madda combining forms
        '\u{0670}' |               // Superscript alef
        '\u{06D6}'..='\u{06DC}' |  // Quranic annotation (small high ligatures)
        '\u{06DF}'..='\u{06E4}' |
        '\u{06E7}' | '\u{06E8}' |
        '\u{06EA}'..='\u{06ED}'
    )
}

/// Letter folds applied after marks are gone.
fn fold_letter(c: char) -> char {
    match c {
        '\u{0623}' | '\u{0625}' | '\u{0622}' | '\u{0671}' => BARE_ALEF,
        '\u{0649}' => YEH,
        '\u{0629}' => HEH,
        other => other,
    }
}

/// Characters that survive into tokens: Arabic-block letters and ASCII digits.
fn is_token_char(c: char) -> bool {
    c.is_ascii_digit() || (('\u{0600}'..='\u{06FF}').contains(&c) && c.is_alphabetic())
}
