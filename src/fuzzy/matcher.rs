// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token-to-token matching.
//!
//! Three modes, picked by `SearchParams` in this order:
//!
//! | Mode          | Score                                   | Span               |
//! |---------------|-----------------------------------------|--------------------|
//! | prefix only   | 1.0 if content starts with query        | `[0, len(q))`      |
//! | edit distance | `1 - lev(q, c) / max(len q, len c)`     | whole content token|
//! | default       | `len(q) / len(c)` if contained, else shared prefix `p / max(len)` | the match |
//!
//! Lengths are chars. A score of zero is reported as `None`.

use super::levenshtein::levenshtein_bounded;
use crate::types::SearchParams;
use crate::util::normalize::common_prefix_len_chars;

/// A positive match of a query token against a content token.
///
/// `start`/`length` are char offsets inside the content token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenMatch {
    pub score: f64,
    pub start: u32,
    pub length: u32,
}

/// Score `query` against `candidate`. Both are expected to be normalized.
///
/// Returns `None` for an empty query: matching nothing is never a match.
///
/// # Example
///
/// ```ignore
/// let params = SearchParams { use_prefix_only: true, ..Default::default() };
/// assert_eq!(match_token("blue", "bluetooth", &params).unwrap().score, 1.0);
/// assert!(match_token("tooth", "bluetooth", &params).is_none());
/// ```
pub fn match_token(query: &str, candidate: &str, params: &SearchParams) -> Option<TokenMatch> {
    if query.is_empty() || candidate.is_empty() {
        return None;
    }

    if params.use_prefix_only {
        return prefix_match(query, candidate);
    }

    if params.use_edit_distance {
        return edit_distance_match(query, candidate);
    }

    containment_match(query, candidate)
}

fn prefix_match(query: &str, candidate: &str) -> Option<TokenMatch> {
    if !candidate.starts_with(query) {
        return None;
    }
    Some(TokenMatch {
        score: 1.0,
        start: 0,
        length: query.chars().count() as u32,
    })
}

fn edit_distance_match(query: &str, candidate: &str) -> Option<TokenMatch> {
    let candidate_len = candidate.chars().count();
    let longest = query.chars().count().max(candidate_len);

    // Score is positive only while distance < longest
    let distance = levenshtein_bounded(query, candidate, longest - 1)?;
    Some(TokenMatch {
        score: 1.0 - distance as f64 / longest as f64,
        start: 0,
        length: candidate_len as u32,
    })
}

fn containment_match(query: &str, candidate: &str) -> Option<TokenMatch> {
    let query_len = query.chars().count();
    let candidate_len = candidate.chars().count();

    if let Some(byte_start) = candidate.find(query) {
        // Bias toward tighter matches: "wifi" in "wifi" beats "wifi" in "wifinetwork"
        return Some(TokenMatch {
            score: query_len as f64 / candidate_len as f64,
            start: candidate[..byte_start].chars().count() as u32,
            length: query_len as u32,
        });
    }

    let shared = common_prefix_len_chars(query, candidate);
    if shared == 0 {
        return None;
    }
    Some(TokenMatch {
        score: shared as f64 / query_len.max(candidate_len) as f64,
        start: 0,
        length: shared as u32,
    })
}
