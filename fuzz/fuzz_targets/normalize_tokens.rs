// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the Arabic normalizer.
//!
//! Any UTF-8 input must normalize without panicking, give clean tokens, and
//! come back unchanged when its own output is normalized again.

#![no_main]

use faqih::normalize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let text: String = text.chars().take(500).collect();

    let tokens = normalize(&text);

    for token in &tokens {
        assert!(!token.is_empty(), "empty token from {:?}", text);
        assert!(
            !token.chars().any(char::is_whitespace),
            "whitespace inside token {:?}",
            token
        );
        assert!(
            !token.chars().any(|c| matches!(c, 'أ' | 'إ' | 'آ' | 'ٱ' | 'ى' | 'ة' | '\u{0640}')),
            "unfolded letter in token {:?}",
            token
        );
    }

    let again = normalize(&tokens.join(" "));
    assert_eq!(tokens, again, "normalize is not idempotent for {:?}", text);
});
