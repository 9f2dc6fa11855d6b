// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for end-to-end queries.
//!
//! Registers arbitrary documents, runs an arbitrary query, and checks that
//! the result set is well-formed: a non-success status has no results,
//! scores clear the threshold, the order is total, and the cap holds.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use local_search::{Backend, Content, Data, Index, IndexId, ResponseStatus, SearchParams};

#[derive(Debug, Arbitrary)]
struct SearchInput {
    docs: Vec<(String, Vec<String>)>,
    query: String,
    max_results: u8,
    threshold: u8,
    penalty: u8,
    use_prefix_only: bool,
    use_edit_distance: bool,
}

fuzz_target!(|input: SearchInput| {
    let mut index = Index::new(IndexId::CrosSettings, Backend::LinearMap);
    for (id, texts) in input.docs.into_iter().take(16) {
        let contents = texts
            .into_iter()
            .take(4)
            .enumerate()
            .map(|(i, text)| Content::new(format!("c{}", i), text.chars().take(128).collect::<String>()))
            .collect();
        index.add_or_update(Data::new(id, contents));
    }

    let params = SearchParams {
        relevance_threshold: f64::from(input.threshold) / 255.0,
        partial_match_penalty_rate: f64::from(input.penalty) / 255.0,
        use_prefix_only: input.use_prefix_only,
        use_edit_distance: input.use_edit_distance,
    };
    if index.set_search_params(params).is_err() {
        return;
    }

    let query: String = input.query.chars().take(64).collect();
    let max_results = u32::from(input.max_results % 8);
    let (status, results) = index.find(&query, max_results);

    if status != ResponseStatus::Success {
        assert!(results.is_empty(), "{:?} with {} results", status, results.len());
        return;
    }

    if max_results > 0 {
        assert!(results.len() <= max_results as usize);
    }
    for result in &results {
        assert!(result.score >= params.relevance_threshold);
        assert!((0.0..=1.0).contains(&result.score));
    }
    for pair in results.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].id < pair[1].id),
            "results out of order: {:?}",
            results
        );
    }
});
