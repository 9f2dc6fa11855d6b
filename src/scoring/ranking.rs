// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Higher score first, then id ascending. Ids are unique in a registry, so
//! this is a total order and two runs over the same data always agree on
//! the output, whatever order the scores were computed in.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Compare two search results for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Id** - ascending, for determinism
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.id.cmp(&b.id),
    }
}

/// Sort in ranking order and cut to `max_results` (0 = unlimited).
pub fn rank_and_truncate(results: &mut Vec<SearchResult>, max_results: u32) {
    results.sort_by(compare_results);
    if max_results > 0 {
        results.truncate(max_results as usize);
    }
}
