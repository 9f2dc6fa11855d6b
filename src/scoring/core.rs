// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind content scoring.
//!
//! Each query token finds its best content token. The content score is the
//! mean of those best scores, discounted once per query token that found
//! nothing:
//!
//! ```text
//! score = (Σ best_i / n) × penalty_rate^unmatched × content.weight
//! ```
//!
//! A query that half-matches still surfaces, just lower. With the default
//! penalty rate of 0.9, one stray word costs 10%.

use crate::fuzzy::{match_token, TokenMatch};
use crate::types::{clamp_unit, Content, Position, SearchParams, Token};
use crate::util::normalize::{consolidate_tokens, tokenize};

/// Score of one `Content` against a query, with the spans that earned it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentScore {
    pub score: f64,
    pub positions: Vec<Position>,
}

/// Tokenize `content` and score it.
///
/// Convenience wrapper over `score_tokens` for callers that don't cache
/// content tokens.
pub fn score_content(query: &[Token], content: &Content, params: &SearchParams) -> ContentScore {
    let content_tokens = consolidate_tokens(tokenize(&content.id, &content.text));
    score_tokens(query, content, &content_tokens, params)
}

/// Score pre-tokenized content.
///
/// `content_tokens` must come from `consolidate_tokens` over `tokenize` or
/// `tokenize_with_mode` of this content.
/// Returns a zero score with no positions if the content is empty or the
/// query has no tokens.
pub fn score_tokens(
    query: &[Token],
    content: &Content,
    content_tokens: &[Token],
    params: &SearchParams,
) -> ContentScore {
    if query.is_empty() || content.text.is_empty() || content_tokens.is_empty() {
        return ContentScore::default();
    }

    let mut matched_sum = 0.0;
    let mut unmatched = 0i32;
    let mut positions = Vec::with_capacity(query.len());

    for query_token in query {
        match best_match(&query_token.text, content_tokens, params) {
            Some((token, found)) => {
                matched_sum += found.score;
                if let Some(position) = matched_position(token, &found) {
                    positions.push(position);
                }
            }
            None => unmatched += 1,
        }
    }

    if matched_sum == 0.0 {
        return ContentScore::default();
    }

    let penalty = params.partial_match_penalty_rate.powi(unmatched);
    let mean = matched_sum / query.len() as f64;
    let score = clamp_unit(mean * penalty * content.weight, 0.0);

    positions.sort_by(|a, b| a.start.cmp(&b.start).then(a.length.cmp(&b.length)));
    positions.dedup();

    ContentScore { score, positions }
}

/// Best content token for one query token. Earliest token wins ties.
fn best_match<'a>(
    query: &str,
    content_tokens: &'a [Token],
    params: &SearchParams,
) -> Option<(&'a Token, TokenMatch)> {
    let mut best: Option<(&Token, TokenMatch)> = None;
    for token in content_tokens {
        if let Some(found) = match_token(query, &token.text, params) {
            if best.map_or(true, |(_, b)| found.score > b.score) {
                best = Some((token, found));
            }
        }
    }
    best
}

/// Map a span inside a normalized token back onto the original text.
///
/// Normalization can change the char count ("ß" → "ss" under some folds,
/// decomposed accents). When it does, the sub-span can't be located reliably
/// and the whole original word is reported instead.
fn matched_position(token: &Token, found: &TokenMatch) -> Option<Position> {
    let first = token.positions.first()?;
    let normalized_len = token.text.chars().count() as u32;

    if normalized_len == first.length && found.start + found.length <= first.length {
        Some(Position::new(
            first.content_id.clone(),
            first.start + found.start,
            found.length,
        ))
    } else {
        Some(first.clone())
    }
}
