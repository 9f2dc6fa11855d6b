// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and tokenization.
//!
//! Everything that gets compared goes through here first, query and content
//! alike. Lowercase, strip diacritics, split into words. Positions always
//! point back into the ORIGINAL text (char offsets), so a caller can
//! highlight "Wi-Fi" even though we matched "wi" and "fi".

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use crate::types::{Position, Token};

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// - "café" → "cafe"
/// - "Wi-Fi  Settings" → "wi-fi settings"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Covers the common nonspacing mark blocks. Always compiled: the tokenizer
/// keeps marks inside words even when they are not stripped.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_combining_mark(c)
}

/// How a content's text is split into words.
///
/// `CamelCase` also breaks a word where a lowercase letter is followed by an
/// uppercase one ("NightLight" → "night", "light"). Data in non-Latin locales
/// tends to carry untranslated identifiers like that, so their locale selects
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizeMode {
    #[default]
    Words,
    CamelCase,
}

/// Languages written in a non-Latin script, by ISO 639-1 code.
const NON_LATIN_LANGUAGES: &[&str] = &[
    "am", "ar", "be", "bg", "bn", "el", "fa", "gu", "he", "hi", "hy", "iw", "ja", "ka", "kk",
    "km", "kn", "ko", "ky", "lo", "mk", "ml", "mn", "mr", "my", "ne", "or", "pa", "ru", "si",
    "sr", "ta", "te", "th", "uk", "ur", "zh",
];

impl TokenizeMode {
    /// Mode for a BCP 47-ish locale tag ("ja", "zh-TW", "pt_BR").
    ///
    /// An empty or unrecognized locale is treated as Latin.
    pub fn for_locale(locale: &str) -> Self {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        if NON_LATIN_LANGUAGES.contains(&language.as_str()) {
            TokenizeMode::CamelCase
        } else {
            TokenizeMode::Words
        }
    }
}

/// Split `text` into normalized tokens, one per word occurrence.
///
/// Words are maximal runs of alphanumeric chars, so "Wi-Fi" gives "wi" and
/// "fi". Each token carries a single `Position` covering the original word.
/// Words that normalize to nothing are dropped.
///
/// # Example
///
/// ```ignore
/// let tokens = tokenize("c1", "Wi-Fi settings");
/// assert_eq!(tokens[2].text, "settings");
/// assert_eq!(tokens[2].positions[0].start, 6);
/// ```
pub fn tokenize(content_id: &str, text: &str) -> Vec<Token> {
    tokenize_with_mode(content_id, text, TokenizeMode::Words)
}

/// `tokenize`, with camel-case splitting when `mode` asks for it.
pub fn tokenize_with_mode(content_id: &str, text: &str, mode: TokenizeMode) -> Vec<Token> {
    let mut tokens = Vec::new();
    // (byte start, char start) of the word being scanned
    let mut word: Option<(usize, u32)> = None;
    let mut char_pos: u32 = 0;
    let mut prev: Option<char> = None;

    for (byte_pos, c) in text.char_indices() {
        if is_word_char(c) {
            let hump = mode == TokenizeMode::CamelCase
                && c.is_uppercase()
                && prev.is_some_and(char::is_lowercase);
            if hump {
                if let Some((byte_start, char_start)) = word.take() {
                    push_word(
                        &mut tokens,
                        content_id,
                        &text[byte_start..byte_pos],
                        char_start,
                        char_pos - char_start,
                    );
                }
            }
            if word.is_none() {
                word = Some((byte_pos, char_pos));
            }
        } else if let Some((byte_start, char_start)) = word.take() {
            push_word(
                &mut tokens,
                content_id,
                &text[byte_start..byte_pos],
                char_start,
                char_pos - char_start,
            );
        }
        prev = Some(c);
        char_pos += 1;
    }

    if let Some((byte_start, char_start)) = word {
        push_word(
            &mut tokens,
            content_id,
            &text[byte_start..],
            char_start,
            char_pos - char_start,
        );
    }

    tokens
}

fn push_word(tokens: &mut Vec<Token>, content_id: &str, word: &str, start: u32, length: u32) {
    let normalized = normalize(word);
    if normalized.is_empty() {
        return;
    }
    tokens.push(Token::new(
        normalized,
        vec![Position::new(content_id, start, length)],
    ));
}

/// Merge tokens with identical text.
///
/// Output keeps first-occurrence order; positions are concatenated in input
/// order, so document order is preserved within each token.
pub fn consolidate_tokens(tokens: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut slots: std::collections::HashMap<String, usize> =
        std::collections::HashMap::with_capacity(tokens.len());

    for token in tokens {
        match slots.get(&token.text) {
            Some(&slot) => merged[slot].positions.extend(token.positions),
            None => {
                slots.insert(token.text.clone(), merged.len());
                merged.push(token);
            }
        }
    }

    merged
}

/// Tokenize a query. Repeated words count once.
pub fn tokenize_query(query: &str) -> Vec<Token> {
    consolidate_tokens(tokenize("", query))
}

/// Common prefix length of two strings, in chars.
pub fn common_prefix_len_chars(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(ca, cb)| ca == cb)
        .count()
}
