// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the faqih CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `FAQIH_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and turns colour off when stdout isn't a terminal.
//!
//! Cards are drawn in boxes whose width is counted in chars. Arabic combining
//! marks occupy a char but no column, so a heavily vocalized line may sit a
//! little short of the right border.

use faqih::{Category, ChatMessage, Fatwa, Role, Verdict};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

/// Inner text width: one space of padding on each side.
const TEXT_WIDTH: usize = BOX_WIDTH - 2;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FAQIH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colour only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border colour, or nothing when colour is off.
fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors() {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Greedy word wrap to `width` chars. Words longer than a line are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
            if needed > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }
        if line_len > 0 {
            lines.push(line);
        }
    }

    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (b, reset) = border(GRAY);
    let pad = TEXT_WIDTH.saturating_sub(visible_len(content));
    println!("{}│{} {}{} {}│{}", b, reset, content, " ".repeat(pad), b, reset);
}

/// Print wrapped text as box rows.
pub fn rows(text: &str) {
    for line in wrap(text, TEXT_WIDTH) {
        row(&line);
    }
}

fn labelled_rule(left: char, right: char, label: &str) {
    let (b, reset) = border(GRAY);
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}{}{}{}{}{}",
        b,
        left,
        reset,
        label_part,
        b,
        "─".repeat(remaining),
        right,
        reset
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    labelled_rule('┌', '┐', label);
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    labelled_rule('├', '┤', label);
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (b, reset) = border(GRAY);
    println!("{}└{}┘{}", b, "─".repeat(BOX_WIDTH), reset);
}

/// Print a centered banner in a double-line box.
pub fn banner(text: &str) {
    let (b, reset) = border(BLUE);
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    println!("{}╔{}╗{}", b, "═".repeat(BOX_WIDTH), reset);
    println!(
        "{}║{}{}{}{}{}║{}",
        b,
        reset,
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad),
        b,
        reset
    );
    println!("{}╚{}╝{}", b, "═".repeat(BOX_WIDTH), reset);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded verdict badge
pub fn verdict_badge(verdict: Verdict) -> String {
    let text = format!("[{}]", verdict.label());
    let color: fn() -> String = match verdict {
        Verdict::Permitted => GREEN,
        Verdict::Forbidden => RED,
        Verdict::Conditional => YELLOW,
    };
    themed(color, &[BOLD], &text)
}

pub fn category_label(category: Category) -> String {
    themed(BLUE, &[], category.as_str())
}

/// Color-coded score value
pub fn score_value(score: f64) -> String {
    let text = format!("{:.1}", score);
    let color: fn() -> String = if score >= 30.0 {
        GREEN
    } else if score >= 12.0 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[], &text)
}

/// Card header label, e.g. "فتوى 1 من 3".
pub fn card_label(index: usize, total: usize) -> String {
    format!("فتوى {} من {}", index + 1, total)
}

/// Print one fatwa as a boxed card.
pub fn print_fatwa_card(fatwa: &Fatwa, index: usize, total: usize, score: Option<f64>) {
    section_top(&card_label(index, total));
    row(&themed(BRIGHT_CYAN, &[BOLD], &fatwa.title));

    let mut meta = format!(
        "{}  {}  {}",
        verdict_badge(fatwa.verdict),
        category_label(fatwa.category),
        themed(GRAY, &[], &fatwa.id)
    );
    if let Some(score) = score {
        meta.push_str("  score ");
        meta.push_str(&score_value(score));
    }
    row(&meta);

    section_mid("السؤال");
    rows(&fatwa.question);

    section_mid("الحكم");
    rows(&fatwa.ruling);

    if !fatwa.medical_context.trim().is_empty() {
        section_mid("السياق الطبي");
        rows(&fatwa.medical_context);
    }
    if !fatwa.tags.is_empty() {
        rows(&themed(GRAY, &[DIM], &fatwa.tags.join(" · ")));
    }

    section_mid("المصدر");
    rows(&fatwa.source);
    section_bot();
}

/// Print a chat message line, user or model.
pub fn print_message(message: &ChatMessage) {
    match message.role {
        Role::User => println!("{} {}", themed(BLUE, &[BOLD], "أنت ›"), message.text),
        Role::Model => println!("{} {}", themed(GREEN, &[BOLD], "الفقيه ›"), message.text),
    }
}

/// Print a key/value pair with the key dimmed and padded.
pub fn stat(label: &str, value: &str) {
    let key = format!("{:<22}", label);
    row(&format!("{}{}", themed(GRAY, &[], &key), value));
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_len_with_escapes() {
        assert_eq!(visible_len("hello"), 5);
        assert_eq!(visible_len("\x1b[32mhello\x1b[0m"), 5);
        assert_eq!(visible_len("جائز"), 4);
    }

    #[test]
    fn test_rgb_format() {
        assert_eq!(rgb(255, 128, 64), "\x1b[38;2;255;128;64m");
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("one two three four five six", 9);
        assert_eq!(lines, vec!["one two", "three", "four five", "six"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 9));
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        // Each Arabic word is 4 chars but 8 bytes
        let lines = wrap("حكم غسيل الكلى", 8);
        assert_eq!(lines, vec!["حكم غسيل", "الكلى"]);
    }

    #[test]
    fn test_wrap_splits_long_words_and_keeps_paragraphs() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("a\nb", 10), vec!["a", "b"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_card_label() {
        assert_eq!(card_label(0, 3), "فتوى 1 من 3");
    }

    #[test]
    fn test_theme_palettes_differ() {
        assert_ne!(onedark::RED, onelight::RED);
        assert_ne!(onedark::GREEN, onelight::GREEN);
    }
}
