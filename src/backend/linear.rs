// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear map backend: score every content of every item.
//!
//! Cost is O(items × contents × query tokens × content tokens) per query.
//! Settings pages and help articles number in the hundreds, so a scan with
//! cached tokens stays well under a millisecond and needs no index upkeep.
//!
//! With the `parallel` feature the scan runs on rayon. Ranking is a total
//! order (score, then unique id), so the parallel and sequential paths
//! return identical output.

use super::SearchBackend;
use crate::error::IndexError;
use crate::registry::{IndexedData, Registry};
use crate::scoring::ranking::rank_and_truncate;
use crate::scoring::{score_tokens, ContentScore};
use crate::types::{Backend, SearchParams, SearchResult, Token};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fuzzy-matching linear scan over the registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearchBackend {
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    sequential: bool,
}

impl LinearSearchBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never use the rayon pool, even when the `parallel` feature is on.
    pub fn sequential() -> Self {
        LinearSearchBackend { sequential: true }
    }
}

impl SearchBackend for LinearSearchBackend {
    fn kind(&self) -> Backend {
        Backend::LinearMap
    }

    fn search(
        &self,
        query: &[Token],
        registry: &Registry,
        params: &SearchParams,
        max_results: u32,
    ) -> Result<Vec<SearchResult>, IndexError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut results = self.scan(query, registry.entries(), params);
        rank_and_truncate(&mut results, max_results);
        Ok(results)
    }
}

impl LinearSearchBackend {
    #[cfg(feature = "parallel")]
    fn scan(&self, query: &[Token], entries: &[IndexedData], params: &SearchParams) -> Vec<SearchResult> {
        if self.sequential {
            return entries
                .iter()
                .filter_map(|entry| score_entry(query, entry, params))
                .collect();
        }
        entries
            .par_iter()
            .filter_map(|entry| score_entry(query, entry, params))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn scan(&self, query: &[Token], entries: &[IndexedData], params: &SearchParams) -> Vec<SearchResult> {
        entries
            .iter()
            .filter_map(|entry| score_entry(query, entry, params))
            .collect()
    }
}

/// Best-scoring content of one item, if it clears the threshold.
///
/// The first content wins ties. With a threshold of 0 every item qualifies,
/// including ones that matched nothing.
fn score_entry(query: &[Token], entry: &IndexedData, params: &SearchParams) -> Option<SearchResult> {
    let mut best = ContentScore::default();

    for (content, tokens) in entry.data.contents.iter().zip(&entry.content_tokens) {
        let scored = score_tokens(query, content, tokens, params);
        if scored.score > best.score {
            best = scored;
        }
    }

    if best.score < params.relevance_threshold {
        return None;
    }

    Some(SearchResult {
        id: entry.data.id.clone(),
        score: best.score,
        positions: best.positions,
    })
}
