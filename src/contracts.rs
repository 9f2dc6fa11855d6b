// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for query results.
//!
//! Debug-mode assertions that every `find` result satisfies the ranking
//! invariants. They:
//!
//! 1. Are **zero-cost in release builds** (guarded by `cfg!(debug_assertions)`)
//! 2. Catch a misbehaving backend at the `Index` boundary, not in the UI
//!
//! | Contract Function                | Property                                   |
//! |----------------------------------|--------------------------------------------|
//! | `check_results_ranked`           | score descending, id ascending on ties     |
//! | `check_results_above_threshold`  | every score ≥ threshold and within [0, 1]  |
//! | `check_results_truncated`        | `len ≤ max_results` when `max_results > 0` |
//! | `check_positions_in_bounds`      | every span lies inside its content text    |
//!
//! # Usage
//!
//! ```ignore
//! use local_search::contracts::*;
//!
//! // In debug builds, this panics if invariant is violated
//! check_results_ranked(&results);
//! ```

use crate::registry::Registry;
use crate::scoring::ranking::compare_results;
use crate::types::{SearchParams, SearchResult};
use std::cmp::Ordering;

/// Check that results are in ranking order with no duplicate ids.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_results_ranked(results: &[SearchResult]) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (i, pair) in results.windows(2).enumerate() {
        debug_assert!(
            compare_results(&pair[0], &pair[1]) == Ordering::Less,
            "Contract violation: results[{}] ({}, {}) does not rank before results[{}] ({}, {})",
            i,
            pair[0].id,
            pair[0].score,
            i + 1,
            pair[1].id,
            pair[1].score
        );
    }
}

/// Check that every score clears the threshold and stays in `[0, 1]`.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_results_above_threshold(results: &[SearchResult], params: &SearchParams) {
    if !cfg!(debug_assertions) {
        return;
    }
    for result in results {
        debug_assert!(
            result.score >= params.relevance_threshold,
            "Contract violation: result {} scored {} below threshold {}",
            result.id,
            result.score,
            params.relevance_threshold
        );
        debug_assert!(
            (0.0..=1.0).contains(&result.score),
            "Contract violation: result {} scored {} outside [0, 1]",
            result.id,
            result.score
        );
    }
}

/// Check the `max_results` cap.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_results_truncated(results: &[SearchResult], max_results: u32) {
    debug_assert!(
        max_results == 0 || results.len() <= max_results as usize,
        "Contract violation: {} results for max_results {}",
        results.len(),
        max_results
    );
}

/// Check that every position names a real content of its item and fits
/// inside that content's text.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_positions_in_bounds(results: &[SearchResult], registry: &Registry) {
    if !cfg!(debug_assertions) {
        return;
    }
    for result in results {
        let entry = registry.get(&result.id);
        debug_assert!(
            entry.is_some(),
            "Contract violation: result id {} not registered",
            result.id
        );
        let Some(entry) = entry else {
            continue;
        };
        for position in &result.positions {
            let content = entry
                .data
                .contents
                .iter()
                .find(|c| c.id == position.content_id);
            debug_assert!(
                content.is_some(),
                "Contract violation: {} has no content {}",
                result.id,
                position.content_id
            );
            if let Some(content) = content {
                let text_len = content.text.chars().count();
                debug_assert!(
                    position.end() as usize <= text_len,
                    "Contract violation: position {}..{} outside {}/{} (len {})",
                    position.start,
                    position.end(),
                    result.id,
                    content.id,
                    text_len
                );
            }
        }
    }
}

/// Run every result contract.
#[inline]
pub fn check_find_results(
    results: &[SearchResult],
    registry: &Registry,
    params: &SearchParams,
    max_results: u32,
) {
    check_results_ranked(results);
    check_results_above_threshold(results, params);
    check_results_truncated(results, max_results);
    check_positions_in_bounds(results, registry);
}
